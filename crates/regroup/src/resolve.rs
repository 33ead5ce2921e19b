//! Reduced-symmetry space group for a field-aligned crystal.
//!
//! Aligning the crystal so a facet faces the field leaves only the parent
//! symmetry operations whose rotation parts fix the field direction. The
//! surviving set is some subgroup of the parent; we report the largest
//! one.

use log::debug;
use rayon::prelude::*;
use sgroup::{subgroups, SpaceGroup};

use crate::{
    aggregate::FacetStats, facet::Facet, Mat3, RegroupError, Vec3,
};

/// component-wise tolerance for `R d == d`
const DIRECTION_TOL: f64 = 1e-5;

/// a [FacetStats] row enriched with the resolved space group
#[derive(Clone, Debug, PartialEq)]
pub struct FacetSummary {
    pub stats: FacetStats,
    /// symbol and number of the reduced group, e.g. `P 4 m m (No. 99)`
    pub spacegroup: String,
    /// representative operation count of the reduced group
    pub n_symops: usize,
}

/// Shares one subgroup enumeration of the parent across every facet.
pub struct Resolver {
    subgroups: Vec<SpaceGroup>,
    o_inv: Mat3,
}

impl Resolver {
    pub fn new(parent: &SpaceGroup, ortho: &Mat3) -> Result<Self, RegroupError> {
        let subs = subgroups(parent)?;
        debug!("{} candidate subgroups of {}", subs.len(), parent.symbol);
        let o_inv = ortho
            .try_inverse()
            .ok_or(RegroupError::SingularOrthogonalization)?;
        Ok(Self {
            subgroups: subs,
            o_inv,
        })
    }

    /// Unit vector of the field direction in fractional coordinates when
    /// the crystal is aligned on `facet`: d = O^-1 O^-T h, normalized.
    pub fn direction(&self, facet: &Facet) -> Result<Vec3, RegroupError> {
        let [h, k, l] = facet.0;
        let hkl = Vec3::new(f64::from(h), f64::from(k), f64::from(l));
        let d = self.o_inv * (self.o_inv.transpose() * hkl);
        let norm = d.norm();
        if norm == 0.0 {
            return Err(RegroupError::ZeroNormal(*facet));
        }
        Ok(d / norm)
    }

    /// Largest subgroup whose rotation parts all fix the field direction,
    /// as (symbol-and-number, n_smx). Candidates are ranked by operation
    /// count and then by symbol string. The trivial subgroup always
    /// qualifies.
    pub fn resolve(&self, facet: &Facet) -> Result<(String, usize), RegroupError> {
        let d = self.direction(facet)?;
        let mut best: Option<(usize, String)> = None;
        for sub in &self.subgroups {
            let valid = sub
                .smx()
                .iter()
                .all(|op| (op.rotation() * d - d).amax() < DIRECTION_TOL);
            if valid {
                let cand = (sub.n_smx(), sub.symbol_and_number());
                if best.as_ref() < Some(&cand) {
                    best = Some(cand);
                }
            }
        }
        match best {
            Some((n, symbol)) => Ok((symbol, n)),
            None => Err(RegroupError::NoValidSubgroup(*facet)),
        }
    }

    /// enrich every stats row with its resolved group, in parallel
    pub fn summarize(
        &self,
        stats: Vec<FacetStats>,
    ) -> Result<Vec<FacetSummary>, RegroupError> {
        stats
            .into_par_iter()
            .map(|stats| {
                let (spacegroup, n_symops) = self.resolve(&stats.facet)?;
                Ok(FacetSummary {
                    stats,
                    spacegroup,
                    n_symops,
                })
            })
            .collect()
    }
}
