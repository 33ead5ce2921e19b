//! Crystal facets as Miller-index triples.

use std::fmt::Display;

use crate::RegroupError;

/// A Miller plane (h k l). Ordering is lexicographic over the indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Facet(pub [i32; 3]);

impl Display for Facet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [h, k, l] = self.0;
        write!(f, "({h} {k} {l})")
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl Facet {
    /// true when the indices have no common factor, so the facet is not a
    /// higher multiple of a coarser plane
    pub fn is_primitive(&self) -> bool {
        let [h, k, l] = self.0.map(i32::unsigned_abs);
        gcd(gcd(h, k), l) == 1
    }
}

/// Every primitive facet with indices in [-hmax, hmax], in lexicographic
/// order. (0 0 0) is never produced; an hmax that yields no facets at all
/// is an error.
pub fn enumerate(hmax: i32) -> Result<Vec<Facet>, RegroupError> {
    let mut out = Vec::new();
    for h in -hmax..=hmax {
        for k in -hmax..=hmax {
            for l in -hmax..=hmax {
                let facet = Facet([h, k, l]);
                if facet.is_primitive() {
                    out.push(facet);
                }
            }
        }
    }
    if out.is_empty() {
        return Err(RegroupError::NoFacets(hmax));
    }
    Ok(out)
}
