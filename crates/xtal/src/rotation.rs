//! Rotation matrices.

use crate::{Mat3, Vec3};

/// Rodrigues' rotation formula, R = cos I + sin [u]x + (1 - cos) u uT,
/// for a unit `axis` and `angle` in radians
pub fn rotation_about(axis: Vec3, angle: f64) -> Mat3 {
    let (s, c) = angle.sin_cos();
    let cross = Mat3::new(
        0.0, -axis.z, axis.y, //
        axis.z, 0.0, -axis.x, //
        -axis.y, axis.x, 0.0,
    );
    Mat3::identity() * c + cross * s + axis * axis.transpose() * (1.0 - c)
}
