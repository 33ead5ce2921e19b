//! Angles between crystal facets and the electric field vector.
//!
//! For every primitive Miller plane within a bound, compute the angle
//! between its real-space normal and a fixed field vector on each frame
//! of a diffraction experiment, aggregate the angles per facet, and
//! report the reduced-symmetry space group a crystal aligned on that
//! facet would keep.

use std::{error::Error, fmt::Display, path::PathBuf};

use nalgebra as na;
use rayon::prelude::*;
use sgroup::{SgError, SpaceGroup};
use xtal::{Dataset, XtalError};

pub mod aggregate;
pub mod facet;
pub mod project;
pub mod report;
pub mod resolve;

#[cfg(test)]
mod tests;

pub use aggregate::{aggregate, AngleObservation, FacetStats};
pub use facet::Facet;
pub use resolve::{FacetSummary, Resolver};

pub type Mat3 = na::Matrix3<f64>;
pub type Vec3 = na::Vector3<f64>;

/// print a message to stderr and exit
#[macro_export]
macro_rules! die {
    ($($args:tt)*) => {{
        eprintln!($($args)*);
        ::std::process::exit(1)
    }};
}

#[derive(Debug, Clone, PartialEq)]
pub enum RegroupError {
    Geometry(XtalError),
    Symmetry(SgError),
    /// the Miller index bound admits no primitive facet
    NoFacets(i32),
    ZeroField,
    /// a facet projected to a zero-length vector
    ZeroNormal(Facet),
    SingularOrthogonalization,
    /// not even the trivial subgroup fixed the field direction
    NoValidSubgroup(Facet),
}

impl From<XtalError> for RegroupError {
    fn from(e: XtalError) -> Self {
        Self::Geometry(e)
    }
}

impl From<SgError> for RegroupError {
    fn from(e: SgError) -> Self {
        Self::Symmetry(e)
    }
}

impl Display for RegroupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegroupError::Geometry(e) => write!(f, "{e}"),
            RegroupError::Symmetry(e) => write!(f, "{e}"),
            RegroupError::NoFacets(hmax) => {
                write!(f, "no facets to consider with hmax = {hmax}")
            }
            RegroupError::ZeroField => {
                write!(f, "the field vector must have nonzero length")
            }
            RegroupError::ZeroNormal(facet) => {
                write!(f, "facet {facet} has a zero-length normal")
            }
            RegroupError::SingularOrthogonalization => {
                write!(f, "orthogonalization matrix is not invertible")
            }
            RegroupError::NoValidSubgroup(facet) => {
                write!(f, "no subgroup fixes the field direction of {facet}")
            }
        }
    }
}

impl Error for RegroupError {}

pub struct Config {
    pub inputs: Vec<PathBuf>,
    /// parent space-group number
    pub spacegroup: u16,
    /// largest Miller index to consider
    pub hmax: i32,
    /// field vector in the lab frame
    pub efvector: Vec3,
}

/// The full pipeline: enumerate facets, measure angles on every frame,
/// aggregate per facet, and resolve each facet's reduced group.
pub fn run(config: &Config) -> Result<Vec<FacetSummary>, RegroupError> {
    if config.efvector.norm() == 0.0 {
        return Err(RegroupError::ZeroField);
    }
    let facets = facet::enumerate(config.hmax)?;
    let parent = SpaceGroup::from_number(config.spacegroup)?;
    let data = Dataset::load(&config.inputs)?;
    log::info!(
        "{} facets x {} frames, parent {}",
        facets.len(),
        data.frames().len(),
        parent.symbol_and_number()
    );
    let obs = data
        .frames()
        .par_iter()
        .map(|(source, a_star)| {
            facets
                .iter()
                .map(|facet| {
                    let angle =
                        project::facet_angle(facet, a_star, &config.efvector)?;
                    Ok(AngleObservation {
                        facet: *facet,
                        source: source.clone(),
                        angle,
                    })
                })
                .collect::<Result<Vec<_>, RegroupError>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    let obs: Vec<AngleObservation> = obs.into_iter().flatten().collect();
    let stats = aggregate(&obs);
    let resolver = Resolver::new(&parent, &data.orthogonalization())?;
    resolver.summarize(stats)
}
