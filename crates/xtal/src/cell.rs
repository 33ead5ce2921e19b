//! Unit cells and the Rupp orthogonalization convention.

use std::fmt::Display;

use crate::{Mat3, XtalError};

/// Unit cell parameters, lengths in angstroms and angles in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitCell {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl UnitCell {
    pub fn new(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self {
        Self {
            a,
            b,
            c,
            alpha,
            beta,
            gamma,
        }
    }

    fn cosines(&self) -> (f64, f64, f64) {
        (
            self.alpha.to_radians().cos(),
            self.beta.to_radians().cos(),
            self.gamma.to_radians().cos(),
        )
    }

    /// cell volume in cubic angstroms
    pub fn volume(&self) -> f64 {
        let (ca, cb, cg) = self.cosines();
        self.a
            * self.b
            * self.c
            * (1.0 - ca * ca - cb * cb - cg * cg + 2.0 * ca * cb * cg).sqrt()
    }

    /// Real-space orthogonalization matrix O in the convention of Rupp:
    /// Cartesian = O * fractional, with x along a and y in the a-b plane.
    /// O is upper triangular; its columns are the cell vectors, so
    /// det(O) = V. A cell without a positive finite volume is rejected.
    pub fn orthogonalization(&self) -> Result<Mat3, XtalError> {
        let (ca, cb, cg) = self.cosines();
        let sg = self.gamma.to_radians().sin();
        let v = self.volume();
        if !v.is_finite() || v <= 0.0 || sg.abs() < 1e-8 {
            return Err(XtalError::DegenerateCell(self.to_string()));
        }
        Ok(Mat3::new(
            self.a,
            self.b * cg,
            self.c * cb,
            0.0,
            self.b * sg,
            self.c * (ca - cb * cg) / sg,
            0.0,
            0.0,
            v / (self.a * self.b * sg),
        ))
    }
}

impl Display for UnitCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.a, self.b, self.c, self.alpha, self.beta, self.gamma
        )
    }
}
