//! 4×4 homogeneous matrix helpers
//!
//! Builders follow the row-major layout used for display and for the
//! `createMatrix` argument format: `rows[r][c]`, translation in column 3.
//! Rotation about the left axis is about X, the up axis is Y and the forward
//! axis is Z.

use nalgebra::Point3;

use crate::{Mat4, Vec3};

/// Rotation about the X (left) axis
pub fn rotation_x(angle_in_radians: f64) -> Mat4 {
    let (s, c) = angle_in_radians.sin_cos();
    Mat4::new(
        1.0, 0.0, 0.0, 0.0, //
        0.0, c, -s, 0.0, //
        0.0, s, c, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Rotation about the Y (up) axis
///
/// The sine terms are mirrored relative to the textbook right-handed form,
/// so a positive angle turns forward (+Z) towards -X.
pub fn rotation_y(angle_in_radians: f64) -> Mat4 {
    let (s, c) = angle_in_radians.sin_cos();
    Mat4::new(
        c, 0.0, -s, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        s, 0.0, c, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Rotation about the Z (forward) axis
pub fn rotation_z(angle_in_radians: f64) -> Mat4 {
    let (s, c) = angle_in_radians.sin_cos();
    Mat4::new(
        c, -s, 0.0, 0.0, //
        s, c, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Translation by `t`
pub fn translation_matrix(t: &Vec3) -> Mat4 {
    Mat4::new(
        1.0, 0.0, 0.0, t.x, //
        0.0, 1.0, 0.0, t.y, //
        0.0, 0.0, 1.0, t.z, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Non-uniform scale by `s`
pub fn scale_matrix(s: &Vec3) -> Mat4 {
    Mat4::new(
        s.x, 0.0, 0.0, 0.0, //
        0.0, s.y, 0.0, 0.0, //
        0.0, 0.0, s.z, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Build a matrix from four rows
pub fn from_rows(rows: &[[f64; 4]; 4]) -> Mat4 {
    Mat4::from_fn(|r, c| rows[r][c])
}

/// Split a matrix into four rows
pub fn to_rows(m: &Mat4) -> [[f64; 4]; 4] {
    let mut rows = [[0.0; 4]; 4];
    for (r, row) in rows.iter_mut().enumerate() {
        for (c, value) in row.iter_mut().enumerate() {
            *value = m[(r, c)];
        }
    }
    rows
}

/// Translation part (column 3)
pub fn position(m: &Mat4) -> Vec3 {
    Vec3::new(m[(0, 3)], m[(1, 3)], m[(2, 3)])
}

/// Overwrite the translation part (column 3)
pub fn set_position(m: &mut Mat4, p: &Vec3) {
    m[(0, 3)] = p.x;
    m[(1, 3)] = p.y;
    m[(2, 3)] = p.z;
}

/// The three basis columns (left, up, forward)
pub fn basis_columns(m: &Mat4) -> [Vec3; 3] {
    [0, 1, 2].map(|c| Vec3::new(m[(0, c)], m[(1, c)], m[(2, c)]))
}

/// Per-axis scale: lengths of the basis columns
pub fn basis_scale(m: &Mat4) -> Vec3 {
    let [x, y, z] = basis_columns(m);
    Vec3::new(x.norm(), y.norm(), z.norm())
}

/// Transform a point (w = 1) including the perspective divide
pub fn transform_point(m: &Mat4, p: &Vec3) -> Vec3 {
    m.transform_point(&Point3::from(*p)).coords
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_rows_layout() {
        let rows = [
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        let m = from_rows(&rows);
        assert_eq!(m[(0, 3)], 4.0);
        assert_eq!(m[(2, 0)], 9.0);
        assert_eq!(to_rows(&m), rows);
        assert_eq!(position(&m), Vec3::new(4.0, 8.0, 12.0));
    }

    #[test]
    fn test_translation_moves_points() {
        let m = translation_matrix(&Vec3::new(5.0, 0.0, -1.0));
        let p = transform_point(&m, &Vec3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(p, Vec3::new(6.0, 2.0, 2.0));
    }

    #[test]
    fn test_rotation_about_axes() {
        let left = Vec3::new(1.0, 0.0, 0.0);
        let up = Vec3::new(0.0, 1.0, 0.0);
        let forward = Vec3::new(0.0, 0.0, 1.0);

        let p = transform_point(&rotation_z(FRAC_PI_2), &left);
        assert_relative_eq!(p, up, epsilon = 1e-12);

        let p = transform_point(&rotation_x(FRAC_PI_2), &up);
        assert_relative_eq!(p, forward, epsilon = 1e-12);

        let p = transform_point(&rotation_y(FRAC_PI_2), &forward);
        assert_relative_eq!(p, Vec3::new(-1.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_basis_scale() {
        let m = scale_matrix(&Vec3::new(2.0, 3.0, 4.0));
        assert_relative_eq!(basis_scale(&m), Vec3::new(2.0, 3.0, 4.0));
        let mut m = m;
        set_position(&mut m, &Vec3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(basis_scale(&m), Vec3::new(2.0, 3.0, 4.0));
    }
}
