//! Exhaustive subgroup enumeration in the parent's coordinate setting.

use log::debug;
use rustc_hash::FxHashSet;

use crate::{
    group::{close, SpaceGroup},
    identify,
    op::SymOp,
    SgError,
};

/// Enumerate every subgroup of `parent`, each expressed in the parent's
/// own setting and identified with a space-group type.
///
/// Works up the subgroup lattice: starting from the trivial group, extend
/// each known subgroup by one parent operation, close, and deduplicate
/// until nothing new appears. Every subgroup is generated by finitely
/// many elements, so each one is reached along some chain of single
/// extensions. The trivial group is always present, which guarantees the
/// caller at least one candidate.
pub fn subgroups(parent: &SpaceGroup) -> Result<Vec<SpaceGroup>, SgError> {
    let trivial = close(&[]);
    let mut seen: FxHashSet<Vec<SymOp>> = FxHashSet::default();
    seen.insert(trivial.clone());
    let mut queue = vec![trivial];
    let mut sets = Vec::new();
    while let Some(h) = queue.pop() {
        for g in &parent.ops {
            if h.binary_search(g).is_ok() {
                continue;
            }
            let mut seed = h.clone();
            seed.push(*g);
            let k = close(&seed);
            if !seen.contains(&k) {
                seen.insert(k.clone());
                queue.push(k);
            }
        }
        sets.push(h);
    }
    debug!(
        "{} subgroups of {}",
        sets.len(),
        parent.symbol_and_number()
    );
    // deterministic output order: by order, then by operation set
    sets.sort_unstable();
    sets.sort_by_key(|s| s.len());
    sets.into_iter()
        .map(|ops| {
            let (number, symbol) = identify::identify(&ops)?;
            Ok(SpaceGroup::from_parts(number, symbol, ops))
        })
        .collect()
}
