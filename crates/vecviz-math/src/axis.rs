//! Frames and angles derived from direction vectors

use crate::scalar::{floats_are_equal, vectors_are_equal};
use crate::{Mat4, Vec3};

/// Offset applied when the forward vector lies on a world axis, so the
/// helper vector used for the cross products is never parallel to it
const AXIS_NUDGE: f64 = -0.000001;

/// Angle in radians between two directions
///
/// Inputs are normalized first and the cosine is clamped to `[-1, 1]`.
/// Returns `None` if either input has zero length.
pub fn angle_between(a: &Vec3, b: &Vec3) -> Option<f64> {
    let a = a.try_normalize(f64::EPSILON)?;
    let b = b.try_normalize(f64::EPSILON)?;
    Some(a.dot(&b).clamp(-1.0, 1.0).acos())
}

/// Build an orthonormal frame whose forward (third) column is `forward`
///
/// Columns are `(left, up, forward)`; `position`, if given, is written to
/// the translation column. The left vector is derived from the negated
/// forward vector flattened onto the y = 0 plane, with a small nudge when
/// `forward` is one of the six world axes. Returns `None` for a zero vector.
pub fn create_axis_from_vector(forward: &Vec3, position: Option<&Vec3>) -> Option<Mat4> {
    let forward = forward.try_normalize(f64::EPSILON)?;
    let world_up = Vec3::y();

    let along = |axis: Vec3| vectors_are_equal(&forward, &axis) || vectors_are_equal(&forward, &-axis);

    let mut helper = -forward;
    if along(Vec3::y()) {
        helper.z = AXIS_NUDGE;
    } else if along(Vec3::z()) || along(Vec3::x()) {
        helper.z = 0.0;
        helper.y = AXIS_NUDGE;
    } else {
        helper.y = 0.0;
    }
    helper = helper.normalize();

    if floats_are_equal(forward.dot(&helper), -1.0) {
        helper.y = -0.01;
    }

    let left = if forward.dot(&world_up) <= 0.0 {
        forward.cross(&helper)
    } else {
        helper.cross(&forward)
    }
    .normalize();
    let up = forward.cross(&left).normalize();

    let p = position.copied().unwrap_or_else(Vec3::zeros);
    Some(Mat4::new(
        left.x, up.x, forward.x, p.x, //
        left.y, up.y, forward.y, p.y, //
        left.z, up.z, forward.z, p.z, //
        0.0, 0.0, 0.0, 1.0,
    ))
}
