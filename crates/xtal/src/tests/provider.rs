//! tests for multi-file dataset loading

use std::fs;
use std::path::PathBuf;

use approx::assert_abs_diff_eq;

use crate::{provider::Dataset, Mat3, XtalError};

const INP: &str = "\
Input
   Crystal    10.0 10.0 10.0 90.0 90.0 90.0 P1
   Matrix     1 0 0 0 1 0 0 0 1
   Omega      0.0 0.0
   Goniometer 0.0 0.0 0.0
   Quit
";

#[test]
fn two_frames() {
    let dir = tempfile::tempdir().unwrap();
    let mut paths = Vec::new();
    for name in ["e080_001.mccd.inp", "e080_002.mccd.inp"] {
        let path = dir.path().join(name);
        fs::write(&path, INP).unwrap();
        paths.push(path);
    }
    let data = Dataset::load(&paths).unwrap();
    assert_eq!(data.frames().len(), 2);
    assert!(data.frames()[0].0.ends_with("e080_001.mccd.inp"));
    assert_abs_diff_eq!(
        data.orthogonalization(),
        Mat3::from_diagonal_element(10.0),
        epsilon = 1e-9
    );
}

#[test]
fn mixed_sources() {
    let dir = tempfile::tempdir().unwrap();
    let inp = dir.path().join("frame.inp");
    fs::write(&inp, INP).unwrap();
    let expt = dir.path().join("frames.expt");
    let err = Dataset::load(&[inp, expt]).unwrap_err();
    assert_eq!(err, XtalError::MixedSources);
}

#[test]
fn unsupported_extension() {
    assert!(matches!(
        Dataset::load(&[PathBuf::from("frame.txt")]),
        Err(XtalError::UnsupportedExtension(_))
    ));
}

#[test]
fn no_inputs() {
    assert_eq!(Dataset::load(&[]).unwrap_err(), XtalError::NoInputs);
}

/// a bad cell in one of many inputs must name the file, not just the
/// parameters
#[test]
fn degenerate_cell_names_the_file() {
    let flat = "\
Input
   Crystal    10.0 10.0 10.0 90.0 90.0 0.0 P1
   Matrix     1 0 0 0 1 0 0 0 1
   Omega      0.0 0.0
   Goniometer 0.0 0.0 0.0
   Quit
";
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flat.inp");
    fs::write(&path, flat).unwrap();
    match Dataset::load(&[path]).unwrap_err() {
        XtalError::DegenerateCell(m) => assert!(m.contains("flat.inp")),
        other => panic!("expected DegenerateCell, got {other:?}"),
    }
}

#[test]
fn missing_file() {
    assert!(matches!(
        Dataset::load(&[PathBuf::from("gone.inp")]),
        Err(XtalError::FileNotFound(_))
    ));
}
