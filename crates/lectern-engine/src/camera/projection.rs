use glam::Mat4;

pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;

/// Half extent of the fixed orthographic view volume.
const ORTHO_EXTENT: f32 = 2.0;

/// Which projection the viewer currently uses. The last key pressed wins.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ProjectionMode {
    #[default]
    Perspective,
    Orthographic,
}

/// Perspective projection with a vertical field of view in degrees.
pub fn perspective_projection(fov_y_degrees: f32, aspect: f32) -> Mat4 {
    Mat4::perspective_rh(fov_y_degrees.to_radians(), aspect, NEAR_PLANE, FAR_PLANE)
}

/// The fixed `ortho(-2, 2, -2, 2, 0.1, 100)` volume. Ignores aspect ratio.
pub fn orthographic_projection() -> Mat4 {
    Mat4::orthographic_rh(
        -ORTHO_EXTENT,
        ORTHO_EXTENT,
        -ORTHO_EXTENT,
        ORTHO_EXTENT,
        NEAR_PLANE,
        FAR_PLANE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec3, Vec4};

    #[test]
    fn ortho_maps_bounds_to_clip_edges() {
        let p = orthographic_projection();
        let corner = p * Vec4::new(2.0, -2.0, -NEAR_PLANE, 1.0);
        assert!((corner.x - 1.0).abs() < 1e-5);
        assert!((corner.y + 1.0).abs() < 1e-5);
        assert!(corner.z.abs() < 1e-5);

        let far = p * Vec4::new(0.0, 0.0, -FAR_PLANE, 1.0);
        assert!((far.z - 1.0).abs() < 1e-5);
    }

    #[test]
    fn perspective_near_plane_maps_to_zero_depth() {
        let p = perspective_projection(45.0, 1.25);
        let clip = p * Vec3::new(0.0, 0.0, -NEAR_PLANE).extend(1.0);
        assert!((clip.z / clip.w).abs() < 1e-5);
    }

    #[test]
    fn default_mode_is_perspective() {
        assert_eq!(ProjectionMode::default(), ProjectionMode::Perspective);
    }
}
