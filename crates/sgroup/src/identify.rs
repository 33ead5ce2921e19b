//! Identification of an operation set with one of the 230 space-group
//! types.
//!
//! Subgroups come out of the enumeration in the parent's coordinate
//! setting, so matching against the reference settings has to go through
//! quantities that survive an origin shift and an axis relabeling: the
//! multiset of rotation types, the screw/glide intrinsic translations,
//! and the centering pattern. Matching proceeds in three tiers of
//! decreasing strictness; within a tier, ties between reference types
//! (enantiomorph pairs, I222 vs I212121) resolve to the lowest number.

use std::sync::LazyLock;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    group::SpaceGroup,
    op::{SymOp, STBF},
    tables, SgError,
};

/// (rotation type, sorted folded intrinsic-translation components in 24ths)
type RepFp = (i8, [u8; 3]);

type Tier1 = (usize, Vec<[u8; 3]>, Vec<RepFp>);
type Tier2 = (usize, Vec<[u8; 3]>, Vec<(i8, bool)>);
type Tier3 = (usize, Vec<i8>);

/// sorted centering-vector fingerprints, components in 24ths
fn centering_fp(ops: &[SymOp]) -> Vec<[u8; 3]> {
    let mut out: Vec<[u8; 3]> = ops
        .iter()
        .filter(|o| o.is_translation() && o.t != [0; 3])
        .map(|o| {
            let mut c = o.t.map(|t| (2 * t) as u8);
            c.sort_unstable();
            c
        })
        .collect();
    out.sort_unstable();
    out
}

/// multiply the rotation parts only
fn rot_mul(a: &[i32; 9], b: &[i32; 9]) -> [i32; 9] {
    let mut r = [0; 9];
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                r[3 * i + j] += a[3 * i + k] * b[3 * k + j];
            }
        }
    }
    r
}

/// fingerprint of the intrinsic (origin-shift invariant) translation of
/// the operation (r, t), minimized over the lattice translations `ltr`
/// and unit-cell shifts so that equivalent coset representatives agree
fn intrinsic_fp(r: &[i32; 9], t: &[i32; 3], ltr: &[[i32; 3]]) -> [u8; 3] {
    let n = SymOp { r: *r, t: [0; 3] }.order();
    // S = sum of R^k for k < n; S.t / n is invariant under origin shifts
    let mut s = [0i32; 9];
    let mut pow = [1, 0, 0, 0, 1, 0, 0, 0, 1];
    for _ in 0..n {
        for i in 0..9 {
            s[i] += pow[i];
        }
        pow = rot_mul(r, &pow);
    }
    let mut best = [u8::MAX; 3];
    for c in ltr {
        for ex in -1..=1 {
            for ey in -1..=1 {
                for ez in -1..=1 {
                    let v = [
                        f64::from(t[0] + c[0] + STBF * ex),
                        f64::from(t[1] + c[1] + STBF * ey),
                        f64::from(t[2] + c[2] + STBF * ez),
                    ];
                    let mut key = [0u8; 3];
                    for i in 0..3 {
                        let mut w = 0.0;
                        for j in 0..3 {
                            w += f64::from(s[3 * i + j]) * v[j];
                        }
                        w /= n as f64 * f64::from(STBF);
                        let frac = w.rem_euclid(1.0);
                        key[i] = (frac.min(1.0 - frac) * 24.0).round() as u8;
                    }
                    key.sort_unstable();
                    best = best.min(key);
                }
            }
        }
    }
    best
}

fn rep_fps(ops: &[SymOp]) -> Vec<RepFp> {
    let ltr: Vec<[i32; 3]> = ops
        .iter()
        .filter(|o| o.is_translation())
        .map(|o| o.t)
        .collect();
    let mut by_rot: FxHashMap<[i32; 9], RepFp> = FxHashMap::default();
    for op in ops {
        let fp = (op.rot_type(), intrinsic_fp(&op.r, &op.t, &ltr));
        by_rot
            .entry(op.r)
            .and_modify(|cur| *cur = (*cur).min(fp))
            .or_insert(fp);
    }
    let mut out: Vec<RepFp> = by_rot.into_values().collect();
    out.sort_unstable();
    out
}

fn fingerprint(ops: &[SymOp]) -> (Tier1, Tier2, Tier3) {
    let cent = centering_fp(ops);
    let reps = rep_fps(ops);
    let n_smx = reps.len();
    let t2 = reps
        .iter()
        .map(|(ty, fp)| (*ty, *fp != [0; 3]))
        .collect::<Vec<_>>();
    let t3 = reps.iter().map(|(ty, _)| *ty).collect::<Vec<_>>();
    (
        (n_smx, cent.clone(), reps),
        (n_smx, cent, t2),
        (n_smx, t3),
    )
}

struct Reference {
    t1: FxHashMap<Tier1, u16>,
    t2: FxHashMap<Tier2, u16>,
    t3: FxHashMap<Tier3, u16>,
}

static REFERENCE: LazyLock<Reference> = LazyLock::new(|| {
    let mut t1 = FxHashMap::default();
    let mut t2 = FxHashMap::default();
    let mut t3 = FxHashMap::default();
    for number in 1..=230 {
        let g = SpaceGroup::from_number(number)
            .expect("internal space-group table is well-formed");
        let (k1, k2, k3) = fingerprint(&g.ops);
        // ascending number, so collisions keep the lowest type
        t1.entry(k1).or_insert(number);
        t2.entry(k2).or_insert(number);
        t3.entry(k3).or_insert(number);
    }
    Reference { t1, t2, t3 }
});

/// map an operation set to (space-group number, short symbol)
pub(crate) fn identify(
    ops: &[SymOp],
) -> Result<(u16, &'static str), SgError> {
    debug_assert!(is_group(ops));
    let (k1, k2, k3) = fingerprint(ops);
    let r = &*REFERENCE;
    let number = r
        .t1
        .get(&k1)
        .or_else(|| r.t2.get(&k2))
        .or_else(|| r.t3.get(&k3))
        .copied()
        .ok_or(SgError::UnidentifiedSubgroup)?;
    let (symbol, _) = tables::entry(number)
        .expect("reference numbers come from the table");
    Ok((number, symbol))
}

fn is_group(ops: &[SymOp]) -> bool {
    let set: FxHashSet<&SymOp> = ops.iter().collect();
    ops.iter()
        .all(|a| ops.iter().all(|b| set.contains(&a.compose(b))))
}
