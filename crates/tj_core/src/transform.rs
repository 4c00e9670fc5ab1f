use glam::{Mat4, Vec3};

/// Pure 2D translation: identity with `(x, y, 0)` in the translation column.
pub fn translation(x: f32, y: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(x, y, 0.0))
}

/// Row-major layout of `m`; for a translation the offsets land at indices 3
/// and 7. GPU uploads use glam's column-major layout instead.
pub fn to_row_major(m: &Mat4) -> [f32; 16] {
    m.transpose().to_cols_array()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn translation_column_holds_offset() {
        let m = translation(2.0, 3.0);
        assert_eq!(m.w_axis, Vec4::new(2.0, 3.0, 0.0, 1.0));
        assert_eq!(m.x_axis, Vec4::X);
        assert_eq!(m.y_axis, Vec4::Y);
        assert_eq!(m.z_axis, Vec4::Z);
    }

    #[test]
    fn row_major_layout_is_identity_plus_offsets() {
        let rows = to_row_major(&translation(2.0, 3.0));
        for (i, value) in rows.iter().enumerate() {
            let expected = match i {
                3 => 2.0,
                7 => 3.0,
                _ if i % 5 == 0 => 1.0,
                _ => 0.0,
            };
            assert_eq!(*value, expected, "index {i}");
        }
    }

    #[test]
    fn translation_moves_points_but_not_directions() {
        let m = translation(-1.0, 0.5);
        let p = m.transform_point3(Vec3::new(0.25, -0.25, 0.0));
        assert!((p - Vec3::new(-0.75, 0.25, 0.0)).length() < 1e-6);
        assert_eq!(m.transform_vector3(Vec3::X), Vec3::X);
    }

    #[test]
    fn zero_translation_is_identity() {
        assert_eq!(translation(0.0, 0.0), Mat4::IDENTITY);
    }
}
