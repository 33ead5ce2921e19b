//! tests for reduced-symmetry group resolution

use approx::assert_abs_diff_eq;
use sgroup::SpaceGroup;
use test_case::test_case;

use crate::facet::Facet;
use crate::resolve::Resolver;
use crate::{Mat3, Vec3};

fn resolver(parent: u16) -> Resolver {
    let parent = SpaceGroup::from_number(parent).unwrap();
    let ortho = Mat3::from_diagonal_element(10.0);
    Resolver::new(&parent, &ortho).unwrap()
}

#[test]
fn direction_is_unit() {
    let r = resolver(1);
    let d = r.direction(&Facet([0, 1, 0])).unwrap();
    assert_abs_diff_eq!(d, Vec3::y(), epsilon = 1e-12);
    let d = r.direction(&Facet([1, 1, 0])).unwrap();
    assert_abs_diff_eq!(d.norm(), 1.0, epsilon = 1e-12);
}

/// an inversion center never fixes a direction, so a triclinic parent
/// always drops to P 1
#[test_case([1, 0, 0] ; "a")]
#[test_case([0, 1, 0] ; "b")]
#[test_case([1, -1, 2] ; "oblique")]
fn inversion_never_survives(facet: [i32; 3]) {
    let r = resolver(2);
    let (symbol, n) = r.resolve(&Facet(facet)).unwrap();
    assert_eq!(symbol, "P 1 (No. 1)");
    assert_eq!(n, 1);
}

#[test]
fn two_fold_survives_along_its_axis() {
    let r = resolver(3);
    let (symbol, n) = r.resolve(&Facet([0, 1, 0])).unwrap();
    assert_eq!(symbol, "P 2 (No. 3)");
    assert_eq!(n, 2);
    // off-axis the rotation moves the direction
    let (symbol, n) = r.resolve(&Facet([1, 1, 0])).unwrap();
    assert_eq!(symbol, "P 1 (No. 1)");
    assert_eq!(n, 1);
}

/// aligning a tetragonal holohedry on c keeps the full polar stabilizer
#[test]
fn tetragonal_stabilizer() {
    let r = resolver(123);
    let (symbol, n) = r.resolve(&Facet([0, 0, 1])).unwrap();
    assert_eq!(symbol, "P 4 m m (No. 99)");
    assert_eq!(n, 8);
}
