//! tests for group expansion from the generator table

use rustc_hash::FxHashSet;
use test_case::test_case;

use crate::{group::SpaceGroup, op::SymOp, SgError};

#[test_case(1, 1, 1 ; "p1")]
#[test_case(2, 2, 2 ; "p bar 1")]
#[test_case(4, 2, 2 ; "p21")]
#[test_case(5, 4, 2 ; "c2")]
#[test_case(14, 4, 4 ; "p21 over c")]
#[test_case(19, 4, 4 ; "p212121")]
#[test_case(47, 8, 8 ; "pmmm")]
#[test_case(75, 4, 4 ; "p4")]
#[test_case(123, 16, 16 ; "p4 over mmm")]
#[test_case(146, 9, 3 ; "r3")]
#[test_case(167, 36, 12 ; "r bar 3 c")]
#[test_case(191, 24, 24 ; "p6 over mmm")]
#[test_case(194, 24, 24 ; "p63 over mmc")]
#[test_case(198, 12, 12 ; "p213")]
#[test_case(221, 48, 48 ; "pm bar 3 m")]
#[test_case(225, 192, 48 ; "fm bar 3 m")]
#[test_case(230, 96, 48 ; "ia bar 3 d")]
fn orders(number: u16, order: usize, n_smx: usize) {
    let g = SpaceGroup::from_number(number).unwrap();
    assert_eq!(g.order(), order, "order of {}", g.symbol);
    assert_eq!(g.n_smx(), n_smx, "n_smx of {}", g.symbol);
    assert_eq!(g.smx().len(), n_smx);
}

#[test]
fn symbol_and_number() {
    let g = SpaceGroup::from_number(19).unwrap();
    assert_eq!(g.symbol_and_number(), "P 21 21 21 (No. 19)");
    let g = SpaceGroup::from_number(225).unwrap();
    assert_eq!(g.symbol_and_number(), "F m -3 m (No. 225)");
}

#[test]
fn unknown_number() {
    assert_eq!(
        SpaceGroup::from_number(0),
        Err(SgError::UnknownSpaceGroup(0))
    );
    assert_eq!(
        SpaceGroup::from_number(231),
        Err(SgError::UnknownSpaceGroup(231))
    );
}

/// every table entry must expand to an actual group: closed under
/// composition, identity present, order a multiple of n_ltr
#[test]
fn all_entries_close() {
    for number in 1..=230 {
        let g = SpaceGroup::from_number(number).unwrap();
        let set: FxHashSet<&SymOp> = g.ops.iter().collect();
        assert!(set.contains(&SymOp::identity()), "no identity in {number}");
        for a in &g.ops {
            for b in &g.ops {
                assert!(
                    set.contains(&a.compose(b)),
                    "group {number} not closed"
                );
            }
        }
        assert_eq!(g.order() % g.n_ltr(), 0, "bad centering in {number}");
        assert!(g.order() <= 192, "group {number} exploded");
    }
}
