//! Crystallographic space groups and their subgroups.
//!
//! A space group is stored as its full set of symmetry operations in a
//! particular coordinate setting, expanded by closure from a built-in
//! generator table covering all 230 types in their standard settings.
//! [subgroups] enumerates every subgroup of a group in the parent's own
//! setting, identifying each one back to a space-group type.

use std::{error::Error, fmt::Display};

use nalgebra as na;

pub mod group;
pub mod op;
pub mod subgroups;

mod identify;
mod tables;

#[cfg(test)]
mod tests;

pub use group::SpaceGroup;
pub use op::{SymOp, STBF};
pub use subgroups::subgroups;

pub type Mat3 = na::Matrix3<f64>;
pub type Vec3 = na::Vector3<f64>;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum SgError {
    /// space-group numbers run from 1 to 230
    UnknownSpaceGroup(u16),
    /// a coordinate triplet like `-x,y+1/2,-z` failed to parse
    BadTriplet(String),
    /// a subgroup's operations matched none of the reference types
    UnidentifiedSubgroup,
}

impl Display for SgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SgError::UnknownSpaceGroup(n) => {
                write!(f, "unknown space group number {n}")
            }
            SgError::BadTriplet(s) => {
                write!(f, "malformed coordinate triplet `{s}`")
            }
            SgError::UnidentifiedSubgroup => {
                write!(f, "failed to identify subgroup type")
            }
        }
    }
}

impl Error for SgError {}
