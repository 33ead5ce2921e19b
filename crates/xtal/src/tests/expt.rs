//! tests for DIALS experiment list parsing

use approx::assert_abs_diff_eq;

use crate::{expt::ExptList, Mat3, XtalError};

const CUBIC: &str = r#"{
    "__id__": "ExperimentList",
    "experiment": [{"crystal": 0, "imageset": 0}],
    "crystal": [{
        "real_space_a": [10.0, 0.0, 0.0],
        "real_space_b": [0.0, 10.0, 0.0],
        "real_space_c": [0.0, 0.0, 10.0]
    }]
}"#;

#[test]
fn cubic_still() {
    let elist = ExptList::parse(CUBIC).unwrap();
    assert_eq!(elist.len(), 1);
    let astars = elist.reciprocal_a_matrices().unwrap();
    assert_abs_diff_eq!(
        astars[0],
        Mat3::from_diagonal_element(0.1),
        epsilon = 1e-12
    );
    let cell = elist.unit_cell();
    assert_abs_diff_eq!(cell.a, 10.0, epsilon = 1e-12);
    assert_abs_diff_eq!(cell.alpha, 90.0, epsilon = 1e-12);
    let o = elist.orthogonalization().unwrap();
    assert_abs_diff_eq!(o, Mat3::from_diagonal_element(10.0), epsilon = 1e-9);
}

#[test]
fn scans_rejected() {
    let text = r#"{
        "experiment": [{"crystal": 0, "scan": 0}],
        "crystal": [{
            "real_space_a": [10.0, 0.0, 0.0],
            "real_space_b": [0.0, 10.0, 0.0],
            "real_space_c": [0.0, 0.0, 10.0]
        }]
    }"#;
    assert!(matches!(
        ExptList::parse(text),
        Err(XtalError::NotStills(_))
    ));
}

#[test]
fn shared_crystal_rejected() {
    let text = r#"{
        "experiment": [{"crystal": 0}, {"crystal": 0}],
        "crystal": [{
            "real_space_a": [10.0, 0.0, 0.0],
            "real_space_b": [0.0, 10.0, 0.0],
            "real_space_c": [0.0, 0.0, 10.0]
        }]
    }"#;
    assert!(matches!(
        ExptList::parse(text),
        Err(XtalError::NotStills(_))
    ));
}

#[test]
fn no_crystals() {
    assert!(matches!(
        ExptList::parse(r#"{"experiment": [], "crystal": []}"#),
        Err(XtalError::BadFormat(_))
    ));
}

#[test]
fn not_json() {
    assert!(matches!(
        ExptList::parse("Input\n   Quit\n"),
        Err(XtalError::BadFormat(_))
    ));
}

#[test]
fn coplanar_vectors() {
    let text = r#"{
        "crystal": [{
            "real_space_a": [10.0, 0.0, 0.0],
            "real_space_b": [0.0, 10.0, 0.0],
            "real_space_c": [5.0, 5.0, 0.0]
        }]
    }"#;
    let elist = ExptList::parse(text).unwrap();
    assert!(matches!(
        elist.reciprocal_a_matrices(),
        Err(XtalError::DegenerateCell(_))
    ));
}
