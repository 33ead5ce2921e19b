//! Space groups as explicit operation sets.

use rustc_hash::FxHashSet;

use crate::{op::SymOp, tables, SgError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpaceGroup {
    /// space-group type number, 1..=230
    pub number: u16,
    /// short Hermann-Mauguin symbol, e.g. `P 21 21 21`
    pub symbol: String,
    /// full operation set, sorted; includes the identity and any
    /// centering translations
    pub ops: Vec<SymOp>,
}

impl SpaceGroup {
    /// build the group in its standard setting from the generator table
    pub fn from_number(number: u16) -> Result<Self, SgError> {
        let (symbol, gens) =
            tables::entry(number).ok_or(SgError::UnknownSpaceGroup(number))?;
        let mut seed: Vec<SymOp> = gens
            .split(';')
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect::<Result<_, _>>()?;
        seed.extend(tables::centering(symbol)?);
        Ok(Self {
            number,
            symbol: symbol.to_owned(),
            ops: close(&seed),
        })
    }

    pub(crate) fn from_parts(number: u16, symbol: &str, ops: Vec<SymOp>) -> Self {
        Self {
            number,
            symbol: symbol.to_owned(),
            ops,
        }
    }

    pub fn order(&self) -> usize {
        self.ops.len()
    }

    /// number of pure translations (identity included), i.e. the number of
    /// lattice points per cell
    pub fn n_ltr(&self) -> usize {
        self.ops.iter().filter(|o| o.is_translation()).count()
    }

    /// number of representative operations modulo centering translations
    pub fn n_smx(&self) -> usize {
        self.order() / self.n_ltr()
    }

    /// one representative operation per distinct rotation part; since
    /// `ops` is sorted, the choice is deterministic
    pub fn smx(&self) -> Vec<&SymOp> {
        let mut seen = FxHashSet::default();
        self.ops.iter().filter(|op| seen.insert(op.r)).collect()
    }

    /// e.g. `P 21 21 21 (No. 19)`
    pub fn symbol_and_number(&self) -> String {
        format!("{} (No. {})", self.symbol, self.number)
    }
}

/// expand a generating set into the full (finite) group by closure under
/// composition, with translations reduced modulo the cell
pub(crate) fn close(seed: &[SymOp]) -> Vec<SymOp> {
    let mut set: FxHashSet<SymOp> = FxHashSet::default();
    set.insert(SymOp::identity());
    set.extend(seed.iter().copied());
    loop {
        let cur: Vec<SymOp> = set.iter().copied().collect();
        let mut grew = false;
        for a in &cur {
            for b in &cur {
                if set.insert(a.compose(b)) {
                    grew = true;
                }
            }
        }
        if !grew {
            break;
        }
    }
    let mut ops: Vec<SymOp> = set.into_iter().collect();
    ops.sort_unstable();
    ops
}
