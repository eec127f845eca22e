//! Math primitives for vecviz
//!
//! This crate provides the small set of geometric helpers the command groups
//! are written against:
//! - Scalar helpers (lerp, tolerant float comparison, angle conversion)
//! - 4×4 homogeneous matrix builders (rotation, translation, scale)
//! - Basis extraction and point transformation
//! - Building an orthonormal frame from a single forward vector

mod axis;
mod mat4;
mod scalar;

pub use axis::{angle_between, create_axis_from_vector};
pub use mat4::{
    basis_columns, basis_scale, from_rows, position, rotation_x, rotation_y, rotation_z,
    scale_matrix, set_position, to_rows, transform_point, translation_matrix,
};
pub use scalar::{
    degrees_to_radians, floats_are_equal, lerp, lerp_vectors, radians_to_degrees,
    vectors_are_equal, FLOAT_EPSILON,
};

/// 3-component vector used for entity points and directions
pub type Vec3 = nalgebra::Vector3<f64>;

/// 4×4 homogeneous transformation matrix
pub type Mat4 = nalgebra::Matrix4<f64>;
