//! tests for Precognition .inp parsing and orientation math

use approx::assert_abs_diff_eq;

use crate::{frame::FrameGeometry, Mat3, Vec3, XtalError};

const SAMPLE: &str = "\
Input
   Crystal    34.238 45.234 99.51 90.0 90.0 90.0 P212121
   Matrix     0.9 0.1 0.0 -0.1 0.9 0.0 0.0 0.0 1.0
   Omega      90.0 0.0
   Goniometer 0.0 0.0 45.0

   Format     RayonixMX340
   Distance   150.0 0.1
   Center     170.0 170.0
   Pixel      0.08854 0.08854
   Swing      0.0
   Tilt       0.0 0.0
   Bulge      0.0 0.0

   Image      e080_001.mccd
   Resolution 100.0 2.0
   Wavelength 1.02 1.06
   Quit
";

/// a frame with nothing set: cubic cell, identity missetting, all angles
/// zero
const PLAIN: &str = "\
Input
   Crystal    10.0 10.0 10.0 90.0 90.0 90.0 P1
   Matrix     1 0 0 0 1 0 0 0 1
   Omega      0.0 0.0
   Goniometer 0.0 0.0 0.0
   Quit
";

#[test]
fn parse_sample() {
    let geom = FrameGeometry::parse(SAMPLE).unwrap();
    assert_eq!(geom.cell.a, 34.238);
    assert_eq!(geom.cell.gamma, 90.0);
    assert_eq!(geom.spacegroup, "P212121");
    let m = geom.missetting_matrix();
    assert_eq!(m[(0, 1)], 0.1);
    assert_eq!(m[(1, 0)], -0.1);
}

#[test]
fn unknown_key() {
    let text = "Input\n   Bogus 1 2 3\n   Quit\n";
    match FrameGeometry::parse(text) {
        Err(XtalError::UnknownField(m)) => assert!(m.contains("Bogus")),
        other => panic!("expected UnknownField, got {other:?}"),
    }
}

#[test]
fn missing_matrix() {
    let text = "\
Input
   Crystal    10.0 10.0 10.0 90.0 90.0 90.0 P1
   Omega      0.0 0.0
   Quit
";
    match FrameGeometry::parse(text) {
        Err(XtalError::MissingField(m)) => assert!(m.contains("Matrix")),
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn not_a_block() {
    assert!(matches!(
        FrameGeometry::parse("Crystal 10 10 10 90 90 90 P1\n"),
        Err(XtalError::BadFormat(_))
    ));
}

/// a single line holding both markers must error, not slice out of range
#[test]
fn single_line_block() {
    assert!(matches!(
        FrameGeometry::parse("Input Quit"),
        Err(XtalError::BadFormat(_))
    ));
    assert!(matches!(
        FrameGeometry::parse(""),
        Err(XtalError::BadFormat(_))
    ));
}

#[test]
fn wrong_arity() {
    let text = "Input\n   Omega 1.0 2.0 3.0\n   Quit\n";
    assert!(matches!(
        FrameGeometry::parse(text),
        Err(XtalError::BadFormat(_))
    ));
}

/// with identity missetting and zeroed angles, A* is the inverted cell
/// permuted into the Mosflm frame
#[test]
fn plain_a_star() {
    let geom = FrameGeometry::parse(PLAIN).unwrap();
    let astar = geom.reciprocal_a_matrix().unwrap();
    let want = Mat3::new(
        0.0, 0.0, 0.1, //
        0.0, -0.1, 0.0, //
        0.1, 0.0, 0.0,
    );
    assert_abs_diff_eq!(astar, want, epsilon = 1e-12);
    let real = geom.real_space_a_matrix().unwrap();
    assert_abs_diff_eq!(real * astar, Mat3::identity(), epsilon = 1e-12);
}

#[test]
fn goniometer_composition() {
    let geom = FrameGeometry::parse(SAMPLE).unwrap();
    // omega 1 = 90 about -z sends x to -y and y to x, omega 2 is zero,
    // then phi = 45 spins about the rotated y axis, which is x
    let r = geom.goniometer_rotation().unwrap();
    let s = std::f64::consts::FRAC_1_SQRT_2;
    assert_abs_diff_eq!(r * Vec3::x(), Vec3::new(0.0, -s, -s), epsilon = 1e-12);
    assert_abs_diff_eq!(r * Vec3::y(), Vec3::x(), epsilon = 1e-12);
}

#[test]
fn no_goniometer() {
    let text = "\
Input
   Crystal    10.0 10.0 10.0 90.0 90.0 90.0 P1
   Matrix     1 0 0 0 1 0 0 0 1
   Omega      0.0 0.0
   Quit
";
    let geom = FrameGeometry::parse(text).unwrap();
    assert!(matches!(
        geom.goniometer_rotation(),
        Err(XtalError::MissingField(_))
    ));
}

#[test]
fn write_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("copy.inp");
    let orig = FrameGeometry::parse(SAMPLE).unwrap();
    orig.write(&path).unwrap();
    let back = FrameGeometry::load(&path).unwrap();
    assert_eq!(orig, back);
}

#[test]
fn file_not_found() {
    assert!(matches!(
        FrameGeometry::load("no/such/frame.inp"),
        Err(XtalError::FileNotFound(_))
    ));
}
