//! DIALS-style experiment list (`.expt`) files.

use std::{fs, io::ErrorKind, path::Path};

use serde::Deserialize;

use crate::{cell::UnitCell, Mat3, Vec3, XtalError};

#[derive(Debug, Deserialize)]
struct ExptFile {
    #[serde(default)]
    experiment: Vec<Experiment>,
    #[serde(default)]
    crystal: Vec<Crystal>,
}

#[derive(Debug, Deserialize)]
struct Experiment {
    #[serde(default)]
    scan: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct Crystal {
    real_space_a: [f64; 3],
    real_space_b: [f64; 3],
    real_space_c: [f64; 3],
}

/// One still experiment per crystal, each carrying its own orientation.
#[derive(Clone, Debug, PartialEq)]
pub struct ExptList {
    /// per crystal, the real-space cell vectors as matrix rows
    real_space: Vec<Mat3>,
}

impl ExptList {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, XtalError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => XtalError::FileNotFound(path.to_owned()),
            _ => XtalError::Io(e.to_string()),
        })?;
        Self::parse(&text).map_err(|e| e.at(path))
    }

    pub fn parse(text: &str) -> Result<Self, XtalError> {
        let file: ExptFile = serde_json::from_str(text)
            .map_err(|e| XtalError::BadFormat(e.to_string()))?;
        if file.crystal.is_empty() {
            return Err(XtalError::BadFormat(
                "experiment list contains no crystals".to_owned(),
            ));
        }
        if file.experiment.iter().any(|e| e.scan.is_some()) {
            return Err(XtalError::NotStills(
                "scan-varying experiments present".to_owned(),
            ));
        }
        if !file.experiment.is_empty()
            && file.experiment.len() != file.crystal.len()
        {
            return Err(XtalError::NotStills(format!(
                "{} experiments share {} crystals",
                file.experiment.len(),
                file.crystal.len()
            )));
        }
        let real_space = file
            .crystal
            .iter()
            .map(|c| {
                Mat3::from_rows(&[
                    Vec3::from(c.real_space_a).transpose(),
                    Vec3::from(c.real_space_b).transpose(),
                    Vec3::from(c.real_space_c).transpose(),
                ])
            })
            .collect();
        Ok(Self { real_space })
    }

    pub fn len(&self) -> usize {
        self.real_space.len()
    }

    pub fn is_empty(&self) -> bool {
        self.real_space.is_empty()
    }

    /// one A* per crystal, the inverse of the real-space vector matrix
    pub fn reciprocal_a_matrices(&self) -> Result<Vec<Mat3>, XtalError> {
        self.real_space
            .iter()
            .map(|m| {
                m.try_inverse().ok_or_else(|| {
                    XtalError::DegenerateCell(
                        "crystal vectors are coplanar".to_owned(),
                    )
                })
            })
            .collect()
    }

    /// cell parameters recovered from the first crystal's vectors
    pub fn unit_cell(&self) -> UnitCell {
        let m = &self.real_space[0];
        let va = m.row(0).transpose();
        let vb = m.row(1).transpose();
        let vc = m.row(2).transpose();
        let angle = |u: &Vec3, v: &Vec3| {
            (u.dot(v) / (u.norm() * v.norm()))
                .clamp(-1.0, 1.0)
                .acos()
                .to_degrees()
        };
        UnitCell::new(
            va.norm(),
            vb.norm(),
            vc.norm(),
            angle(&vb, &vc),
            angle(&va, &vc),
            angle(&va, &vb),
        )
    }

    pub fn orthogonalization(&self) -> Result<Mat3, XtalError> {
        self.unit_cell().orthogonalization()
    }
}
