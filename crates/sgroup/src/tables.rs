//! Generator table for the 230 space-group types in their standard
//! settings (unique axis b for monoclinic, hexagonal axes for
//! rhombohedral, origin choice 1 where two origins exist).
//!
//! Each entry is the short Hermann-Mauguin symbol and a `;`-separated
//! list of generator triplets. Centering translations are not listed;
//! they follow from the lattice letter of the symbol.

use crate::{op::SymOp, SgError};

/// (short Hermann-Mauguin symbol, generator triplets); index = number - 1
pub(crate) const SPACE_GROUPS: [(&str, &str); 230] = [
    // triclinic
    ("P 1", ""),
    ("P -1", "-x,-y,-z"),
    // monoclinic, unique axis b
    ("P 2", "-x,y,-z"),
    ("P 21", "-x,y+1/2,-z"),
    ("C 2", "-x,y,-z"),
    ("P m", "x,-y,z"),
    ("P c", "x,-y,z+1/2"),
    ("C m", "x,-y,z"),
    ("C c", "x,-y,z+1/2"),
    ("P 2/m", "-x,y,-z;-x,-y,-z"),
    ("P 21/m", "-x,y+1/2,-z;-x,-y,-z"),
    ("C 2/m", "-x,y,-z;-x,-y,-z"),
    ("P 2/c", "-x,y,-z+1/2;-x,-y,-z"),
    ("P 21/c", "-x,y+1/2,-z+1/2;-x,-y,-z"),
    ("C 2/c", "-x,y,-z+1/2;-x,-y,-z"),
    // orthorhombic
    ("P 2 2 2", "-x,-y,z;-x,y,-z"),
    ("P 2 2 21", "-x,-y,z+1/2;x,-y,-z"),
    ("P 21 21 2", "-x,-y,z;x+1/2,-y+1/2,-z"),
    ("P 21 21 21", "x+1/2,-y+1/2,-z;-x,y+1/2,-z+1/2"),
    ("C 2 2 21", "-x,-y,z+1/2;x,-y,-z"),
    ("C 2 2 2", "-x,-y,z;-x,y,-z"),
    ("F 2 2 2", "-x,-y,z;-x,y,-z"),
    ("I 2 2 2", "-x,-y,z;-x,y,-z"),
    ("I 21 21 21", "x+1/2,-y+1/2,-z;-x,y+1/2,-z+1/2"),
    ("P m m 2", "-x,-y,z;x,-y,z"),
    ("P m c 21", "-x,-y,z+1/2;x,-y,z+1/2"),
    ("P c c 2", "-x,-y,z;x,-y,z+1/2"),
    ("P m a 2", "-x,-y,z;x+1/2,-y,z"),
    ("P c a 21", "-x,-y,z+1/2;x+1/2,-y,z"),
    ("P n c 2", "-x,-y,z;x,-y+1/2,z+1/2"),
    ("P m n 21", "-x+1/2,-y,z+1/2;x+1/2,-y,z+1/2"),
    ("P b a 2", "-x,-y,z;x+1/2,-y+1/2,z"),
    ("P n a 21", "-x,-y,z+1/2;x+1/2,-y+1/2,z"),
    ("P n n 2", "-x,-y,z;x+1/2,-y+1/2,z+1/2"),
    ("C m m 2", "-x,-y,z;x,-y,z"),
    ("C m c 21", "-x,-y,z+1/2;x,-y,z+1/2"),
    ("C c c 2", "-x,-y,z;x,-y,z+1/2"),
    ("A m m 2", "-x,-y,z;x,-y,z"),
    ("A b m 2", "-x,-y,z;x,-y+1/2,z"),
    ("A m a 2", "-x,-y,z;x+1/2,-y,z"),
    ("A b a 2", "-x,-y,z;x+1/2,-y+1/2,z"),
    ("F m m 2", "-x,-y,z;x,-y,z"),
    ("F d d 2", "-x,-y,z;x+1/4,-y+1/4,z+1/4"),
    ("I m m 2", "-x,-y,z;x,-y,z"),
    ("I b a 2", "-x,-y,z;x+1/2,-y+1/2,z"),
    ("I m a 2", "-x,-y,z;x+1/2,-y,z"),
    ("P m m m", "-x,-y,z;-x,y,-z;-x,-y,-z"),
    ("P n n n", "-x,-y,z;-x,y,-z;-x+1/2,-y+1/2,-z+1/2"),
    ("P c c m", "-x,-y,z;-x,y,-z+1/2;-x,-y,-z"),
    ("P b a n", "-x,-y,z;-x,y,-z;-x+1/2,-y+1/2,-z"),
    ("P m m a", "-x+1/2,-y,z;-x,y,-z;-x,-y,-z"),
    ("P n n a", "-x+1/2,-y,z;-x+1/2,y+1/2,-z+1/2;-x,-y,-z"),
    ("P m n a", "-x+1/2,-y,z+1/2;-x+1/2,y,-z+1/2;-x,-y,-z"),
    ("P c c a", "-x+1/2,-y,z;-x,y,-z+1/2;-x,-y,-z"),
    ("P b a m", "-x,-y,z;-x+1/2,y+1/2,-z;-x,-y,-z"),
    ("P c c n", "-x+1/2,-y+1/2,z;-x,y+1/2,-z+1/2;-x,-y,-z"),
    ("P b c m", "-x,-y,z+1/2;-x,y+1/2,-z+1/2;-x,-y,-z"),
    ("P n n m", "-x,-y,z;-x+1/2,y+1/2,-z+1/2;-x,-y,-z"),
    ("P m m n", "-x,-y,z;-x+1/2,y+1/2,-z;-x+1/2,-y+1/2,-z"),
    ("P b c n", "-x+1/2,-y+1/2,z+1/2;-x,y,-z+1/2;-x,-y,-z"),
    ("P b c a", "x+1/2,-y+1/2,-z;-x,y+1/2,-z+1/2;-x,-y,-z"),
    ("P n m a", "-x+1/2,-y,z+1/2;-x,y+1/2,-z;-x,-y,-z"),
    ("C m c m", "-x,-y,z+1/2;-x,y,-z+1/2;-x,-y,-z"),
    ("C m c a", "-x,-y+1/2,z+1/2;-x,y+1/2,-z+1/2;-x,-y,-z"),
    ("C m m m", "-x,-y,z;-x,y,-z;-x,-y,-z"),
    ("C c c m", "-x,-y,z;-x,y,-z+1/2;-x,-y,-z"),
    ("C m m a", "-x,-y+1/2,z;-x,y+1/2,-z;-x,-y,-z"),
    ("C c c a", "-x,-y,z;-x,y,-z;-x,-y+1/2,-z+1/2"),
    ("F m m m", "-x,-y,z;-x,y,-z;-x,-y,-z"),
    ("F d d d", "-x,-y,z;-x,y,-z;-x+1/4,-y+1/4,-z+1/4"),
    ("I m m m", "-x,-y,z;-x,y,-z;-x,-y,-z"),
    ("I b a m", "-x,-y,z;-x+1/2,y+1/2,-z;-x,-y,-z"),
    ("I b c a", "x+1/2,-y+1/2,-z;-x,y+1/2,-z+1/2;-x,-y,-z"),
    ("I m m a", "-x,-y+1/2,z;-x,y+1/2,-z;-x,-y,-z"),
    // tetragonal
    ("P 4", "-y,x,z"),
    ("P 41", "-y,x,z+1/4"),
    ("P 42", "-y,x,z+1/2"),
    ("P 43", "-y,x,z+3/4"),
    ("I 4", "-y,x,z"),
    ("I 41", "-y,x+1/2,z+1/4"),
    ("P -4", "y,-x,-z"),
    ("I -4", "y,-x,-z"),
    ("P 4/m", "-y,x,z;-x,-y,-z"),
    ("P 42/m", "-y,x,z+1/2;-x,-y,-z"),
    ("P 4/n", "-y+1/2,x,z;-x,-y,-z"),
    ("P 42/n", "-y+1/2,x,z+1/2;-x,-y,-z"),
    ("I 4/m", "-y,x,z;-x,-y,-z"),
    ("I 41/a", "-y+3/4,x+1/4,z+1/4;-x,-y,-z"),
    ("P 4 2 2", "-y,x,z;x,-y,-z"),
    ("P 4 21 2", "-y+1/2,x+1/2,z;x+1/2,-y+1/2,-z"),
    ("P 41 2 2", "-y,x,z+1/4;x,-y,-z"),
    ("P 41 21 2", "-y+1/2,x+1/2,z+1/4;x+1/2,-y+1/2,-z+1/4"),
    ("P 42 2 2", "-y,x,z+1/2;x,-y,-z"),
    ("P 42 21 2", "-y+1/2,x+1/2,z+1/2;x+1/2,-y+1/2,-z+1/2"),
    ("P 43 2 2", "-y,x,z+3/4;x,-y,-z"),
    ("P 43 21 2", "-y+1/2,x+1/2,z+3/4;x+1/2,-y+1/2,-z+3/4"),
    ("I 4 2 2", "-y,x,z;x,-y,-z"),
    ("I 41 2 2", "-y,x+1/2,z+1/4;x+1/2,-y,-z+3/4"),
    ("P 4 m m", "-y,x,z;x,-y,z"),
    ("P 4 b m", "-y,x,z;x+1/2,-y+1/2,z"),
    ("P 42 c m", "-y,x,z+1/2;x,-y,z+1/2"),
    ("P 42 n m", "-y+1/2,x+1/2,z+1/2;x+1/2,-y+1/2,z+1/2"),
    ("P 4 c c", "-y,x,z;x,-y,z+1/2"),
    ("P 4 n c", "-y,x,z;x+1/2,-y+1/2,z+1/2"),
    ("P 42 m c", "-y,x,z+1/2;x,-y,z"),
    ("P 42 b c", "-y,x,z+1/2;x+1/2,-y+1/2,z"),
    ("I 4 m m", "-y,x,z;x,-y,z"),
    ("I 4 c m", "-y,x,z;x,-y,z+1/2"),
    ("I 41 m d", "-y,x+1/2,z+1/4;x,-y,z"),
    ("I 41 c d", "-y,x+1/2,z+1/4;x,-y,z+1/2"),
    ("P -4 2 m", "y,-x,-z;x,-y,-z"),
    ("P -4 2 c", "y,-x,-z;x,-y,-z+1/2"),
    ("P -4 21 m", "y,-x,-z;x+1/2,-y+1/2,-z"),
    ("P -4 21 c", "y,-x,-z;x+1/2,-y+1/2,-z+1/2"),
    ("P -4 m 2", "y,-x,-z;x,-y,z"),
    ("P -4 c 2", "y,-x,-z;x,-y,z+1/2"),
    ("P -4 b 2", "y,-x,-z;x+1/2,-y+1/2,z"),
    ("P -4 n 2", "y,-x,-z;x+1/2,-y+1/2,z+1/2"),
    ("I -4 m 2", "y,-x,-z;x,-y,z"),
    ("I -4 c 2", "y,-x,-z;x,-y,z+1/2"),
    ("I -4 2 m", "y,-x,-z;x,-y,-z"),
    ("I -4 2 d", "y,-x,-z;x+1/2,-y,-z+3/4"),
    ("P 4/m m m", "-y,x,z;x,-y,-z;-x,-y,-z"),
    ("P 4/m c c", "-y,x,z;x,-y,-z+1/2;-x,-y,-z"),
    ("P 4/n b m", "-y,x,z;x,-y,-z;-x+1/2,-y+1/2,-z"),
    ("P 4/n n c", "-y,x,z;x,-y,-z;-x+1/2,-y+1/2,-z+1/2"),
    ("P 4/m b m", "-y,x,z;x+1/2,-y+1/2,-z;-x,-y,-z"),
    ("P 4/m n c", "-y,x,z;x+1/2,-y+1/2,-z+1/2;-x,-y,-z"),
    ("P 4/n m m", "-y+1/2,x+1/2,z;x+1/2,-y+1/2,-z;-x+1/2,-y+1/2,-z"),
    ("P 4/n c c", "-y+1/2,x+1/2,z;x+1/2,-y+1/2,-z;-x+1/2,-y+1/2,-z+1/2"),
    ("P 42/m m c", "-y,x,z+1/2;x,-y,-z;-x,-y,-z"),
    ("P 42/m c m", "-y,x,z+1/2;x,-y,-z+1/2;-x,-y,-z"),
    ("P 42/n b c", "-y,x,z+1/2;x,-y,-z;-x+1/2,-y+1/2,-z+1/2"),
    ("P 42/n n m", "-y,x,z+1/2;x,-y,-z+1/2;-x+1/2,-y+1/2,-z"),
    ("P 42/m b c", "-y,x,z+1/2;x+1/2,-y+1/2,-z;-x,-y,-z"),
    ("P 42/m n m", "-y+1/2,x+1/2,z+1/2;x+1/2,-y+1/2,-z+1/2;-x,-y,-z"),
    ("P 42/n m c", "-y+1/2,x+1/2,z+1/2;x+1/2,-y+1/2,-z;-x+1/2,-y+1/2,-z+1/2"),
    ("P 42/n c m", "-y+1/2,x+1/2,z+1/2;x+1/2,-y+1/2,-z+1/2;-x+1/2,-y+1/2,-z"),
    ("I 4/m m m", "-y,x,z;x,-y,-z;-x,-y,-z"),
    ("I 4/m c m", "-y,x,z;x,-y,-z+1/2;-x,-y,-z"),
    ("I 41/a m d", "-y,x+1/2,z+1/4;x+1/2,-y,-z+1/4;-x,-y+1/2,-z+1/4"),
    ("I 41/a c d", "-y,x+1/2,z+1/4;x+1/2,-y,-z+3/4;-x,-y+1/2,-z+1/4"),
    // trigonal
    ("P 3", "-y,x-y,z"),
    ("P 31", "-y,x-y,z+1/3"),
    ("P 32", "-y,x-y,z+2/3"),
    ("R 3", "-y,x-y,z"),
    ("P -3", "-y,x-y,z;-x,-y,-z"),
    ("R -3", "-y,x-y,z;-x,-y,-z"),
    ("P 3 1 2", "-y,x-y,z;-y,-x,-z"),
    ("P 3 2 1", "-y,x-y,z;y,x,-z"),
    ("P 31 1 2", "-y,x-y,z+1/3;-y,-x,-z+2/3"),
    ("P 31 2 1", "-y,x-y,z+1/3;y,x,-z"),
    ("P 32 1 2", "-y,x-y,z+2/3;-y,-x,-z+1/3"),
    ("P 32 2 1", "-y,x-y,z+2/3;y,x,-z"),
    ("R 3 2", "-y,x-y,z;y,x,-z"),
    ("P 3 m 1", "-y,x-y,z;-y,-x,z"),
    ("P 3 1 m", "-y,x-y,z;y,x,z"),
    ("P 3 c 1", "-y,x-y,z;-y,-x,z+1/2"),
    ("P 3 1 c", "-y,x-y,z;y,x,z+1/2"),
    ("R 3 m", "-y,x-y,z;-y,-x,z"),
    ("R 3 c", "-y,x-y,z;-y,-x,z+1/2"),
    ("P -3 1 m", "-y,x-y,z;-y,-x,-z;-x,-y,-z"),
    ("P -3 1 c", "-y,x-y,z;-y,-x,-z+1/2;-x,-y,-z"),
    ("P -3 m 1", "-y,x-y,z;y,x,-z;-x,-y,-z"),
    ("P -3 c 1", "-y,x-y,z;y,x,-z+1/2;-x,-y,-z"),
    ("R -3 m", "-y,x-y,z;y,x,-z;-x,-y,-z"),
    ("R -3 c", "-y,x-y,z;y,x,-z+1/2;-x,-y,-z"),
    // hexagonal
    ("P 6", "x-y,x,z"),
    ("P 61", "x-y,x,z+1/6"),
    ("P 65", "x-y,x,z+5/6"),
    ("P 62", "x-y,x,z+1/3"),
    ("P 64", "x-y,x,z+2/3"),
    ("P 63", "x-y,x,z+1/2"),
    ("P -6", "-y,x-y,-z"),
    ("P 6/m", "x-y,x,z;-x,-y,-z"),
    ("P 63/m", "x-y,x,z+1/2;-x,-y,-z"),
    ("P 6 2 2", "x-y,x,z;y,x,-z"),
    ("P 61 2 2", "x-y,x,z+1/6;y,x,-z+1/3"),
    ("P 65 2 2", "x-y,x,z+5/6;y,x,-z+2/3"),
    ("P 62 2 2", "x-y,x,z+1/3;y,x,-z+2/3"),
    ("P 64 2 2", "x-y,x,z+2/3;y,x,-z+1/3"),
    ("P 63 2 2", "x-y,x,z+1/2;y,x,-z"),
    ("P 6 m m", "x-y,x,z;-y,-x,z"),
    ("P 6 c c", "x-y,x,z;-y,-x,z+1/2"),
    ("P 63 c m", "x-y,x,z+1/2;-y,-x,z+1/2"),
    ("P 63 m c", "x-y,x,z+1/2;-y,-x,z"),
    ("P -6 m 2", "-y,x-y,-z;-y,-x,z"),
    ("P -6 c 2", "-y,x-y,-z;-y,-x,z+1/2"),
    ("P -6 2 m", "-y,x-y,-z;y,x,-z"),
    ("P -6 2 c", "-y,x-y,-z;y,x,-z+1/2"),
    ("P 6/m m m", "x-y,x,z;y,x,-z;-x,-y,-z"),
    ("P 6/m c c", "x-y,x,z;y,x,-z+1/2;-x,-y,-z"),
    ("P 63/m c m", "x-y,x,z+1/2;y,x,-z+1/2;-x,-y,-z"),
    ("P 63/m m c", "x-y,x,z+1/2;y,x,-z;-x,-y,-z"),
    // cubic
    ("P 2 3", "-x,-y,z;x,-y,-z;z,x,y"),
    ("F 2 3", "-x,-y,z;x,-y,-z;z,x,y"),
    ("I 2 3", "-x,-y,z;x,-y,-z;z,x,y"),
    ("P 21 3", "-x+1/2,-y,z+1/2;x+1/2,-y+1/2,-z;z,x,y"),
    ("I 21 3", "-x+1/2,-y,z+1/2;x+1/2,-y+1/2,-z;z,x,y"),
    ("P m -3", "-x,-y,z;x,-y,-z;z,x,y;-x,-y,-z"),
    ("P n -3", "-x,-y,z;x,-y,-z;z,x,y;-x+1/2,-y+1/2,-z+1/2"),
    ("F m -3", "-x,-y,z;x,-y,-z;z,x,y;-x,-y,-z"),
    ("F d -3", "-x,-y,z;x,-y,-z;z,x,y;-x+1/4,-y+1/4,-z+1/4"),
    ("I m -3", "-x,-y,z;x,-y,-z;z,x,y;-x,-y,-z"),
    ("P a -3", "-x+1/2,-y,z+1/2;x+1/2,-y+1/2,-z;z,x,y;-x,-y,-z"),
    ("I a -3", "-x+1/2,-y,z+1/2;x+1/2,-y+1/2,-z;z,x,y;-x,-y,-z"),
    ("P 4 3 2", "-y,x,z;z,x,y"),
    ("P 42 3 2", "-y+1/2,x+1/2,z+1/2;z,x,y"),
    ("F 4 3 2", "-y,x,z;z,x,y"),
    ("F 41 3 2", "-y+1/4,x+1/4,z+1/4;z,x,y"),
    ("I 4 3 2", "-y,x,z;z,x,y"),
    ("P 43 3 2", "-y+3/4,x+1/4,z+3/4;z,x,y"),
    ("P 41 3 2", "-y+1/4,x+3/4,z+1/4;z,x,y"),
    ("I 41 3 2", "-y+1/4,x+3/4,z+1/4;z,x,y"),
    ("P -4 3 m", "y,-x,-z;z,x,y"),
    ("F -4 3 m", "y,-x,-z;z,x,y"),
    ("I -4 3 m", "y,-x,-z;z,x,y"),
    ("P -4 3 n", "y+1/2,-x+1/2,-z+1/2;z,x,y"),
    ("F -4 3 c", "y+1/2,-x+1/2,-z+1/2;z,x,y"),
    ("I -4 3 d", "y+1/4,-x+1/4,-z+3/4;z,x,y"),
    ("P m -3 m", "-y,x,z;z,x,y;-x,-y,-z"),
    ("P n -3 n", "-y,x,z;z,x,y;-x+1/2,-y+1/2,-z+1/2"),
    ("P m -3 n", "-y+1/2,x+1/2,z+1/2;z,x,y;-x,-y,-z"),
    ("P n -3 m", "-y+1/2,x+1/2,z+1/2;z,x,y;-x+1/2,-y+1/2,-z+1/2"),
    ("F m -3 m", "-y,x,z;z,x,y;-x,-y,-z"),
    ("F m -3 c", "-y+1/2,x+1/2,z+1/2;z,x,y;-x,-y,-z"),
    ("F d -3 m", "-y+1/4,x+1/4,z+1/4;z,x,y;-x+1/4,-y+1/4,-z+1/4"),
    ("F d -3 c", "-y+1/4,x+1/4,z+1/4;z,x,y;-x+3/4,-y+3/4,-z+3/4"),
    ("I m -3 m", "-y,x,z;z,x,y;-x,-y,-z"),
    ("I a -3 d", "-y+1/4,x+3/4,z+1/4;z,x,y;-x,-y,-z"),
];

pub(crate) fn entry(number: u16) -> Option<(&'static str, &'static str)> {
    if (1..=230).contains(&number) {
        Some(SPACE_GROUPS[number as usize - 1])
    } else {
        None
    }
}

/// centering translations implied by the lattice letter of `symbol`
pub(crate) fn centering(symbol: &str) -> Result<Vec<SymOp>, SgError> {
    let gens: &[&str] = match symbol.chars().next() {
        Some('P') => &[],
        Some('A') => &["x,y+1/2,z+1/2"],
        Some('B') => &["x+1/2,y,z+1/2"],
        Some('C') => &["x+1/2,y+1/2,z"],
        Some('I') => &["x+1/2,y+1/2,z+1/2"],
        Some('F') => &["x,y+1/2,z+1/2", "x+1/2,y,z+1/2"],
        Some('R') => &["x+2/3,y+1/3,z+1/3"],
        _ => return Err(SgError::BadTriplet(symbol.to_owned())),
    };
    gens.iter().map(|g| g.parse()).collect()
}
