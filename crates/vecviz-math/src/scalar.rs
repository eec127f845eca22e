//! Scalar helpers

use crate::Vec3;

/// Tolerance used by [`floats_are_equal`]
pub const FLOAT_EPSILON: f64 = 1e-7;

/// Linear interpolation: `a` at `t = 0`, `b` at `t = 1`
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Componentwise [`lerp`] of two vectors
pub fn lerp_vectors(a: &Vec3, b: &Vec3, t: f64) -> Vec3 {
    Vec3::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t), lerp(a.z, b.z, t))
}

/// Compare two floats within [`FLOAT_EPSILON`] (inclusive)
#[inline]
pub fn floats_are_equal(a: f64, b: f64) -> bool {
    a >= b - FLOAT_EPSILON && a <= b + FLOAT_EPSILON
}

/// Compare two vectors componentwise with [`floats_are_equal`]
pub fn vectors_are_equal(a: &Vec3, b: &Vec3) -> bool {
    floats_are_equal(a.x, b.x) && floats_are_equal(a.y, b.y) && floats_are_equal(a.z, b.z)
}

#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * (180.0 / std::f64::consts::PI)
}

#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (std::f64::consts::PI / 180.0)
}
