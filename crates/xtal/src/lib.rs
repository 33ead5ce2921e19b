//! Experimental geometry for diffraction frames.
//!
//! Two on-disk sources are supported: Precognition per-frame `.inp` files
//! ([FrameGeometry]) and DIALS-style `.expt` experiment lists ([ExptList]).
//! [Dataset] loads a mixed command line of either kind (never both at once)
//! and exposes one reciprocal orientation matrix per frame together with the
//! real-space orthogonalization matrix of the shared unit cell.

use std::{error::Error, fmt::Display, path::Path, path::PathBuf};

use nalgebra as na;

pub mod cell;
pub mod expt;
pub mod frame;
pub mod provider;
pub mod rotation;

#[cfg(test)]
mod tests;

pub use cell::UnitCell;
pub use expt::ExptList;
pub use frame::FrameGeometry;
pub use provider::Dataset;

pub type Mat3 = na::Matrix3<f64>;
pub type Vec3 = na::Vector3<f64>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XtalError {
    FileNotFound(PathBuf),
    Io(String),
    /// the file violates a structural assumption of its format
    BadFormat(String),
    MissingField(String),
    UnknownField(String),
    /// the unit cell has no positive volume
    DegenerateCell(String),
    /// an experiment list with scans or shared crystals
    NotStills(String),
    UnsupportedExtension(PathBuf),
    /// `.inp` and `.expt` inputs in the same run
    MixedSources,
    NoInputs,
}

impl XtalError {
    /// prefix the offending path onto errors raised by a file's contents
    pub(crate) fn at(self, path: &Path) -> Self {
        let p = path.display();
        match self {
            Self::BadFormat(m) => Self::BadFormat(format!("{p}: {m}")),
            Self::MissingField(m) => Self::MissingField(format!("{p}: {m}")),
            Self::UnknownField(m) => Self::UnknownField(format!("{p}: {m}")),
            Self::DegenerateCell(m) => {
                Self::DegenerateCell(format!("{p}: {m}"))
            }
            Self::NotStills(m) => Self::NotStills(format!("{p}: {m}")),
            other => other,
        }
    }
}

impl Display for XtalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            XtalError::FileNotFound(p) => {
                write!(f, "cannot find file: {}", p.display())
            }
            XtalError::Io(m) => write!(f, "io error: {m}"),
            XtalError::BadFormat(m) => write!(f, "bad format: {m}"),
            XtalError::MissingField(m) => write!(f, "missing field: {m}"),
            XtalError::UnknownField(m) => write!(f, "unknown field: {m}"),
            XtalError::DegenerateCell(m) => {
                write!(f, "degenerate unit cell: {m}")
            }
            XtalError::NotStills(m) => {
                write!(f, "experiments are not stills: {m}")
            }
            XtalError::UnsupportedExtension(p) => {
                write!(f, "unsupported input extension: {}", p.display())
            }
            XtalError::MixedSources => {
                write!(f, "cannot mix .inp and .expt inputs in one run")
            }
            XtalError::NoInputs => write!(f, "no input files given"),
        }
    }
}

impl Error for XtalError {}
