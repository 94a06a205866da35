//! The desk scene: fixed object poses, texture assets, lights, and the
//! per-frame draw plan.

use std::path::{Path, PathBuf};

use glam::{Mat4, Quat, Vec2, Vec3};
use lectern_engine::render::plan::{DrawCall, FramePlan};
use lectern_engine::render::resources::{MeshId, ProgramId, TextureId};
use lectern_engine::render::uniforms::{ObjectUniforms, PointLight};

use crate::shapes::ShapeKind;

/// Tint multiplied into every lit texel.
pub const OBJECT_COLOR: Vec3 = Vec3::ONE;

/// Image assets, one per material.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TextureSlot {
    BookCover,
    Pages,
    Leather,
    WoodFloor,
    DarkWood,
    Ceramic,
}

impl TextureSlot {
    pub const ALL: [TextureSlot; 6] = [
        TextureSlot::BookCover,
        TextureSlot::Pages,
        TextureSlot::Leather,
        TextureSlot::WoodFloor,
        TextureSlot::DarkWood,
        TextureSlot::Ceramic,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            TextureSlot::BookCover => "DarkBlue.jpg",
            TextureSlot::Pages => "pagesTexture.jpg",
            TextureSlot::Leather => "greenLeather.png",
            TextureSlot::WoodFloor => "lightWoodFlooring.jpg",
            TextureSlot::DarkWood => "DarkWood.jpg",
            TextureSlot::Ceramic => "ceramicTexture.jpg",
        }
    }

    pub fn path(self, asset_root: &Path) -> PathBuf {
        asset_root.join(self.file_name())
    }
}

/// Scale, then rotate `angle` radians about `axis`, then translate.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pose {
    pub scale: Vec3,
    pub translation: Vec3,
    pub angle: f32,
    pub axis: Vec3,
}

impl Pose {
    pub fn model_matrix(&self) -> Mat4 {
        let rotation = Quat::from_axis_angle(self.axis.normalize_or(Vec3::Y), self.angle);
        Mat4::from_translation(self.translation)
            * Mat4::from_quat(rotation)
            * Mat4::from_scale(self.scale)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SceneObject {
    pub label: &'static str,
    pub shape: ShapeKind,
    pub texture: TextureSlot,
    pub pose: Pose,
    pub uv_scale: Vec2,
}

const WAND_AXIS: Vec3 = Vec3::new(0.3, -1.3, 1.2);
const WAND_POSITION: Vec3 = Vec3::new(2.0, 0.07, 3.0);

const fn wand_segment(label: &'static str, scale: Vec3) -> SceneObject {
    SceneObject {
        label,
        shape: ShapeKind::Wand,
        texture: TextureSlot::DarkWood,
        pose: Pose {
            scale,
            translation: WAND_POSITION,
            angle: 15.0,
            axis: WAND_AXIS,
        },
        uv_scale: Vec2::ONE,
    }
}

/// Draw order: floor, storage box, book cover, book pages, wand shaft,
/// wand grip, wand pommel, mug.
pub const SCENE_OBJECTS: [SceneObject; 8] = [
    SceneObject {
        label: "floor",
        shape: ShapeKind::Plane,
        texture: TextureSlot::WoodFloor,
        pose: Pose {
            scale: Vec3::new(5.0, 1.0, 5.0),
            translation: Vec3::new(0.0, -0.01, 0.0),
            angle: 0.0,
            axis: Vec3::ONE,
        },
        uv_scale: Vec2::ONE,
    },
    SceneObject {
        label: "storage box",
        shape: ShapeKind::StorageBox,
        texture: TextureSlot::Leather,
        pose: Pose {
            scale: Vec3::new(0.75, 1.0, 3.0),
            translation: Vec3::ZERO,
            angle: 5.0,
            axis: Vec3::Y,
        },
        uv_scale: Vec2::ONE,
    },
    SceneObject {
        label: "book cover",
        shape: ShapeKind::BookCover,
        texture: TextureSlot::BookCover,
        pose: Pose {
            scale: Vec3::new(1.0, 1.015, 1.02),
            translation: Vec3::new(-2.5, 0.0, -2.0),
            angle: 14.0,
            axis: Vec3::Y,
        },
        uv_scale: Vec2::ONE,
    },
    SceneObject {
        label: "book pages",
        shape: ShapeKind::BookPages,
        texture: TextureSlot::Pages,
        pose: Pose {
            scale: Vec3::new(0.5, 3.0, 1.0),
            translation: Vec3::new(-2.5, 0.02, -2.0),
            angle: 14.0,
            axis: Vec3::Y,
        },
        uv_scale: Vec2::new(1.0, 0.1),
    },
    wand_segment("wand shaft", Vec3::new(0.05, 4.0, 0.05)),
    wand_segment("wand grip", Vec3::new(0.07, 1.0, 0.07)),
    wand_segment("wand pommel", Vec3::new(0.09, 0.02, 0.09)),
    SceneObject {
        label: "mug",
        shape: ShapeKind::Mug,
        texture: TextureSlot::Ceramic,
        pose: Pose {
            scale: Vec3::new(0.35, 1.0, 0.35),
            translation: Vec3::new(0.25, 0.0, -2.0),
            angle: 0.0,
            axis: Vec3::Y,
        },
        uv_scale: Vec2::ONE,
    },
];

/// The two point lights and the size of their marker cubes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LightRig {
    pub head: PointLight,
    pub side: PointLight,
    pub marker_scale: f32,
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            head: PointLight::new(Vec3::ZERO, Vec3::ONE),
            side: PointLight::new(Vec3::new(0.0, 3.0, 7.0), Vec3::ONE),
            marker_scale: 0.2,
        }
    }
}

impl LightRig {
    /// Head light first. Both write the same uniform slot, so the side light
    /// is the one the lit program sees.
    pub fn lights(&self) -> [PointLight; 2] {
        [self.head, self.side]
    }

    pub fn marker_model(&self, light: &PointLight) -> Mat4 {
        Mat4::from_translation(light.position) * Mat4::from_scale(Vec3::splat(self.marker_scale))
    }
}

/// GPU handles the plan refers to, filled in at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneHandles {
    pub lit_program: ProgramId,
    pub marker_program: ProgramId,
    pub meshes: Vec<(ShapeKind, MeshId)>,
    pub textures: Vec<(TextureSlot, TextureId)>,
}

impl SceneHandles {
    fn mesh(&self, shape: ShapeKind) -> Option<MeshId> {
        self.meshes.iter().find(|(k, _)| *k == shape).map(|(_, id)| *id)
    }

    fn texture(&self, slot: TextureSlot) -> Option<TextureId> {
        self.textures.iter().find(|(k, _)| *k == slot).map(|(_, id)| *id)
    }
}

/// Camera-derived state for one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    pub view: Mat4,
    pub projection: Mat4,
    pub eye: Vec3,
}

/// Builds this frame's commands: one depth-tested pass, markers, then every
/// scene object in draw order, then present.
///
/// Objects whose mesh or texture has no handle are left out.
pub fn build_frame_plan(
    handles: &SceneHandles,
    lights: &LightRig,
    view: &ViewState,
    clear: wgpu::Color,
) -> FramePlan {
    let mut plan = FramePlan::new();
    plan.begin_pass(clear, true);

    if let Some(marker_mesh) = handles.mesh(ShapeKind::Marker) {
        for light in lights.lights() {
            plan.draw(DrawCall {
                label: "light marker",
                program: handles.marker_program,
                mesh: marker_mesh,
                texture: None,
                uniforms: ObjectUniforms::transforms(
                    lights.marker_model(&light),
                    view.view,
                    view.projection,
                ),
            });
        }
    }

    for object in &SCENE_OBJECTS {
        let (Some(mesh), Some(texture)) = (handles.mesh(object.shape), handles.texture(object.texture))
        else {
            continue;
        };

        let mut uniforms =
            ObjectUniforms::transforms(object.pose.model_matrix(), view.view, view.projection)
                .with_object_color(OBJECT_COLOR)
                .with_view_position(view.eye)
                .with_uv_scale(object.uv_scale);
        for light in lights.lights() {
            uniforms = uniforms.with_light(light);
        }

        plan.draw(DrawCall {
            label: object.label,
            program: handles.lit_program,
            mesh,
            texture: Some(texture),
            uniforms,
        });
    }

    plan.present();
    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handles() -> SceneHandles {
        SceneHandles {
            lit_program: ProgramId::from_index(0),
            marker_program: ProgramId::from_index(1),
            meshes: ShapeKind::ALL
                .iter()
                .enumerate()
                .map(|(i, k)| (*k, MeshId::from_index(i)))
                .collect(),
            textures: TextureSlot::ALL
                .iter()
                .enumerate()
                .map(|(i, s)| (*s, TextureId::from_index(i)))
                .collect(),
        }
    }

    fn view() -> ViewState {
        let eye = Vec3::new(0.0, 1.5, 7.0);
        ViewState {
            view: Mat4::look_at_rh(eye, eye - Vec3::Z, Vec3::Y),
            projection: Mat4::perspective_rh(45f32.to_radians(), 1.25, 0.1, 100.0),
            eye,
        }
    }

    fn plan() -> FramePlan {
        build_frame_plan(&handles(), &LightRig::default(), &view(), wgpu::Color::BLACK)
    }

    // ── plan shape ──────────────────────────────────────────────────────

    #[test]
    fn frame_presents_once_with_depth_enabled_first() {
        let plan = plan();
        assert_eq!(plan.validate(), Ok(()));
        assert_eq!(plan.present_count(), 1);
        assert!(plan.depth_tested_before_first_draw());
        assert_eq!(plan.passes().len(), 1);
    }

    #[test]
    fn markers_draw_before_objects_in_fixed_order() {
        let labels: Vec<&str> = plan().draws().map(|d| d.label).collect();
        assert_eq!(
            labels,
            vec![
                "light marker",
                "light marker",
                "floor",
                "storage box",
                "book cover",
                "book pages",
                "wand shaft",
                "wand grip",
                "wand pommel",
                "mug",
            ]
        );
    }

    #[test]
    fn markers_are_untextured_and_sit_on_the_lights() {
        let rig = LightRig::default();
        let plan = plan();
        let markers: Vec<&DrawCall> = plan.draws().take(2).collect();
        for (draw, light) in markers.iter().zip(rig.lights()) {
            assert_eq!(draw.program, ProgramId::from_index(1));
            assert_eq!(draw.texture, None);
            let origin = draw.uniforms.model_matrix().transform_point3(Vec3::ZERO);
            assert!(origin.abs_diff_eq(light.position, 1e-6));
        }
    }

    #[test]
    fn missing_texture_drops_only_that_object() {
        let mut h = handles();
        h.textures.retain(|(slot, _)| *slot != TextureSlot::Ceramic);
        let plan = build_frame_plan(&h, &LightRig::default(), &view(), wgpu::Color::BLACK);
        assert_eq!(plan.draw_count(), 9);
        assert!(plan.draws().all(|d| d.label != "mug"));
    }

    // ── lighting ────────────────────────────────────────────────────────

    // Both lights share one uniform slot; only the side light survives.
    #[test]
    fn side_light_is_the_last_light_written() {
        let side = LightRig::default().side;
        for draw in plan().draws().skip(2) {
            assert_eq!(draw.uniforms.light_pos, side.position.to_array());
            assert_eq!(draw.uniforms.light_color, side.color.to_array());
        }
    }

    #[test]
    fn lit_draws_carry_eye_and_uv_scale() {
        let plan = plan();
        let pages = plan.draws().find(|d| d.label == "book pages").unwrap();
        assert_eq!(pages.uniforms.uv_scale, [1.0, 0.1]);
        assert_eq!(pages.uniforms.view_position, [0.0, 1.5, 7.0]);
        assert_eq!(pages.uniforms.object_color, [1.0, 1.0, 1.0]);
    }

    // ── poses ───────────────────────────────────────────────────────────

    #[test]
    fn model_is_translate_rotate_scale() {
        let pages = SCENE_OBJECTS[3].pose;
        let expected = Mat4::from_translation(pages.translation)
            * Mat4::from_axis_angle(Vec3::Y, 14.0)
            * Mat4::from_scale(pages.scale);
        assert!(pages.model_matrix().abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn wand_axis_is_normalized_before_rotating() {
        let shaft = SCENE_OBJECTS[4].pose;
        let axis = WAND_AXIS.normalize();
        let rotated = shaft.model_matrix().transform_vector3(axis);
        let scaled = axis * shaft.scale;
        assert!((rotated.length() - scaled.length()).abs() < 1e-4);
    }

    #[test]
    fn zero_angle_leaves_floor_unrotated() {
        let floor = SCENE_OBJECTS[0].pose;
        let expected = Mat4::from_translation(floor.translation) * Mat4::from_scale(floor.scale);
        assert!(floor.model_matrix().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn texture_paths_join_the_asset_root() {
        let path = TextureSlot::Leather.path(Path::new("textures"));
        assert_eq!(path, Path::new("textures").join("greenLeather.png"));
    }
}
