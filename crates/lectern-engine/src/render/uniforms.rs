use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};

/// A point light: world position and color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
}

impl PointLight {
    pub const fn new(position: Vec3, color: Vec3) -> Self {
        Self { position, color }
    }
}

/// Per-draw uniform block shared by every scene program.
///
/// Mirrors the WGSL struct
///
/// ```text
/// struct ObjectUniforms {
///     model, view, projection, normalMatrix: mat4x4<f32>,
///     objectColor, lightColor, lightPos, viewPosition: vec3<f32>,
///     uvScale: vec2<f32>,
/// }
/// ```
///
/// Each `vec3` occupies a 16-byte slot. Programs that only need the
/// transforms declare a prefix of this block.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ObjectUniforms {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 4],
    pub object_color: [f32; 3],
    _pad0: f32,
    pub light_color: [f32; 3],
    _pad1: f32,
    pub light_pos: [f32; 3],
    _pad2: f32,
    pub view_position: [f32; 3],
    _pad3: f32,
    pub uv_scale: [f32; 2],
    _pad4: [f32; 2],
}

impl ObjectUniforms {
    pub const SIZE: u64 = std::mem::size_of::<Self>() as u64;

    /// Byte offsets of each named member, in WGSL naming.
    pub const MEMBER_OFFSETS: [(&'static str, u32); 9] = [
        ("model", std::mem::offset_of!(Self, model) as u32),
        ("view", std::mem::offset_of!(Self, view) as u32),
        ("projection", std::mem::offset_of!(Self, projection) as u32),
        ("normalMatrix", std::mem::offset_of!(Self, normal_matrix) as u32),
        ("objectColor", std::mem::offset_of!(Self, object_color) as u32),
        ("lightColor", std::mem::offset_of!(Self, light_color) as u32),
        ("lightPos", std::mem::offset_of!(Self, light_pos) as u32),
        ("viewPosition", std::mem::offset_of!(Self, view_position) as u32),
        ("uvScale", std::mem::offset_of!(Self, uv_scale) as u32),
    ];

    /// Transforms only; lighting zeroed, UV scale 1.
    pub fn transforms(model: Mat4, view: Mat4, projection: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            normal_matrix: model.inverse().transpose().to_cols_array_2d(),
            uv_scale: [1.0, 1.0],
            ..Self::zeroed()
        }
    }

    pub fn with_object_color(mut self, color: Vec3) -> Self {
        self.object_color = color.to_array();
        self
    }

    /// Writes the single light slot, replacing whatever was there.
    pub fn with_light(mut self, light: PointLight) -> Self {
        self.light_pos = light.position.to_array();
        self.light_color = light.color.to_array();
        self
    }

    pub fn with_view_position(mut self, position: Vec3) -> Self {
        self.view_position = position.to_array();
        self
    }

    pub fn with_uv_scale(mut self, scale: Vec2) -> Self {
        self.uv_scale = scale.to_array();
        self
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_matches_wgsl_uniform_layout() {
        assert_eq!(ObjectUniforms::SIZE, 336);
        assert_eq!(ObjectUniforms::SIZE % 16, 0);

        let offsets: Vec<u32> = ObjectUniforms::MEMBER_OFFSETS.iter().map(|(_, o)| *o).collect();
        assert_eq!(offsets, vec![0, 64, 128, 192, 256, 272, 288, 304, 320]);
    }

    #[test]
    fn normal_matrix_undoes_non_uniform_scale() {
        let model = Mat4::from_scale(Vec3::new(2.0, 1.0, 1.0));
        let u = ObjectUniforms::transforms(model, Mat4::IDENTITY, Mat4::IDENTITY);
        let n = Mat4::from_cols_array_2d(&u.normal_matrix);
        assert!(n.transform_vector3(Vec3::X).abs_diff_eq(Vec3::new(0.5, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn later_light_replaces_earlier() {
        let head = PointLight::new(Vec3::ZERO, Vec3::ONE);
        let side = PointLight::new(Vec3::new(0.0, 3.0, 7.0), Vec3::new(1.0, 0.5, 0.5));
        let u = ObjectUniforms::transforms(Mat4::IDENTITY, Mat4::IDENTITY, Mat4::IDENTITY)
            .with_light(head)
            .with_light(side);
        assert_eq!(u.light_pos, [0.0, 3.0, 7.0]);
        assert_eq!(u.light_color, [1.0, 0.5, 0.5]);
    }

    #[test]
    fn defaults_to_unit_uv_scale() {
        let u = ObjectUniforms::transforms(Mat4::IDENTITY, Mat4::IDENTITY, Mat4::IDENTITY);
        assert_eq!(u.uv_scale, [1.0, 1.0]);
        assert_eq!(u.with_uv_scale(Vec2::new(1.0, 0.1)).uv_scale, [1.0, 0.1]);
    }
}
