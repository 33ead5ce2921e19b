//! tests for subgroup enumeration and identification

use test_case::test_case;

use crate::{group::SpaceGroup, subgroups};

fn numbers(parent: u16) -> Vec<u16> {
    let parent = SpaceGroup::from_number(parent).unwrap();
    let subs = subgroups(&parent).unwrap();
    let mut ns: Vec<u16> = subs.iter().map(|s| s.number).collect();
    ns.sort_unstable();
    ns
}

#[test_case(1, &[1] ; "p1")]
#[test_case(2, &[1, 2] ; "p bar 1")]
#[test_case(3, &[1, 3] ; "p2")]
#[test_case(4, &[1, 4] ; "p21")]
#[test_case(14, &[1, 2, 4, 7, 14] ; "p21 over c")]
#[test_case(75, &[1, 3, 75] ; "p4")]
fn expected_types(parent: u16, want: &[u16]) {
    assert_eq!(numbers(parent), want);
}

/// the pure centering translation of C2 forms a subgroup of its own; in a
/// primitive description that is just P1 again, so the type list holds two
/// triclinic entries
#[test]
fn centered_parent() {
    assert_eq!(numbers(5), vec![1, 1, 3, 4, 5]);
}

#[test]
fn ops_are_subsets() {
    let parent = SpaceGroup::from_number(14).unwrap();
    for sub in subgroups(&parent).unwrap() {
        for op in &sub.ops {
            assert!(parent.ops.contains(op), "{op} not in parent");
        }
    }
}

/// output is sorted by order, trivial group first, parent last
#[test]
fn sorted_by_order() {
    let parent = SpaceGroup::from_number(14).unwrap();
    let subs = subgroups(&parent).unwrap();
    let orders: Vec<usize> = subs.iter().map(|s| s.order()).collect();
    assert_eq!(orders, vec![1, 2, 2, 2, 4]);
}
