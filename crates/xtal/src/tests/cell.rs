//! tests for unit cell math

use approx::assert_abs_diff_eq;
use test_case::test_case;

use crate::{cell::UnitCell, Mat3, XtalError};

#[test]
fn cubic() {
    let cell = UnitCell::new(10.0, 10.0, 10.0, 90.0, 90.0, 90.0);
    assert_abs_diff_eq!(cell.volume(), 1000.0, epsilon = 1e-9);
    let o = cell.orthogonalization().unwrap();
    assert_abs_diff_eq!(o, Mat3::from_diagonal_element(10.0), epsilon = 1e-9);
}

/// the columns of O are the cell vectors, so their norms are the cell
/// lengths and the determinant is the volume
#[test]
fn triclinic() {
    let cell = UnitCell::new(10.2, 13.5, 7.7, 83.4, 97.1, 105.0);
    let o = cell.orthogonalization().unwrap();
    assert_abs_diff_eq!(o.column(0).norm(), 10.2, epsilon = 1e-9);
    assert_abs_diff_eq!(o.column(1).norm(), 13.5, epsilon = 1e-9);
    assert_abs_diff_eq!(o.column(2).norm(), 7.7, epsilon = 1e-9);
    assert_abs_diff_eq!(o.determinant(), cell.volume(), epsilon = 1e-6);
    // lower triangle is zero in this convention
    assert_eq!(o[(1, 0)], 0.0);
    assert_eq!(o[(2, 0)], 0.0);
    assert_eq!(o[(2, 1)], 0.0);
}

#[test_case(10.0, 10.0, 10.0, 90.0, 90.0, 0.0 ; "zero gamma")]
#[test_case(10.0, 10.0, 10.0, 10.0, 10.0, 170.0 ; "impossible angles")]
#[test_case(0.0, 10.0, 10.0, 90.0, 90.0, 90.0 ; "zero edge")]
fn degenerate(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) {
    let cell = UnitCell::new(a, b, c, alpha, beta, gamma);
    assert!(matches!(
        cell.orthogonalization(),
        Err(XtalError::DegenerateCell(_))
    ));
}
