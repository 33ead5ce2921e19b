//! Angles between facet normals and the field vector.

use crate::{facet::Facet, Mat3, RegroupError, Vec3};

/// Normal to the real-space Miller plane `facet`. The normal is collinear
/// with the reciprocal dHKL vector, so it comes straight from the
/// reciprocal basis (Rupp, p. 238).
pub fn normal_vector(facet: &Facet, a_star: &Mat3) -> Vec3 {
    let [h, k, l] = facet.0;
    a_star * Vec3::new(f64::from(h), f64::from(k), f64::from(l))
}

/// Angle between two vectors in degrees, or `None` when either has zero
/// norm. The cosine is clamped so collinear inputs cannot drift outside
/// the domain of acos.
pub fn angle_deg(u: &Vec3, v: &Vec3) -> Option<f64> {
    let norms = u.norm() * v.norm();
    if norms == 0.0 {
        return None;
    }
    Some((u.dot(v) / norms).clamp(-1.0, 1.0).acos().to_degrees())
}

/// angle between the facet's normal under orientation `a_star` and the
/// field vector
pub fn facet_angle(
    facet: &Facet,
    a_star: &Mat3,
    field: &Vec3,
) -> Result<f64, RegroupError> {
    let normal = normal_vector(facet, a_star);
    angle_deg(&normal, field).ok_or(RegroupError::ZeroNormal(*facet))
}
