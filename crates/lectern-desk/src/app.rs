use anyhow::{Context, Result};
use glam::Vec3;

use lectern_engine::camera::{Camera, CameraMovement, MouseLook, ProjectionMode};
use lectern_engine::core::{App, AppControl, FrameCtx, WindowCtx};
use lectern_engine::device::Gpu;
use lectern_engine::input::{InputFrame, InputState, Key};
use lectern_engine::render::SceneLayouts;
use lectern_engine::render::mesh::GpuMesh;
use lectern_engine::render::pass::{DEPTH_FORMAT, ScenePass};
use lectern_engine::render::plan::FramePlan;
use lectern_engine::render::program::compile_program;
use lectern_engine::render::resources::ResourceSet;
use lectern_engine::render::texture::{GpuTexture, load_image};

use crate::config::DeskConfig;
use crate::scene::{LightRig, SceneHandles, TextureSlot, ViewState, build_frame_plan};
use crate::shaders::ShaderSources;
use crate::shapes::{ShapeKind, build_mesh};

pub const START_POSITION: Vec3 = Vec3::new(0.0, 1.5, 7.0);

const MOVE_KEYS: [(Key, CameraMovement); 6] = [
    (Key::W, CameraMovement::Forward),
    (Key::S, CameraMovement::Backward),
    (Key::A, CameraMovement::Left),
    (Key::D, CameraMovement::Right),
    (Key::Q, CameraMovement::Down),
    (Key::E, CameraMovement::Up),
];

/// Camera, projection mode and mouse-look state driven by input.
#[derive(Debug, Clone)]
pub struct Viewer {
    camera: Camera,
    projection: ProjectionMode,
    mouse_look: MouseLook,
}

impl Default for Viewer {
    fn default() -> Self {
        Self {
            camera: Camera::new(START_POSITION),
            projection: ProjectionMode::Perspective,
            mouse_look: MouseLook::new(),
        }
    }
}

impl Viewer {
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn projection(&self) -> ProjectionMode {
        self.projection
    }

    /// Applies one frame of input. ESC ends the app before anything moves.
    pub fn update(&mut self, input: &InputState, frame: &InputFrame, dt: f32) -> AppControl {
        if input.key_down(Key::Escape) {
            return AppControl::Exit;
        }

        for (key, movement) in MOVE_KEYS {
            if input.key_down(key) {
                self.camera.process_keyboard(movement, dt);
            }
        }

        if input.key_down(Key::P) {
            self.set_projection(ProjectionMode::Orthographic);
        }
        if input.key_down(Key::O) {
            self.set_projection(ProjectionMode::Perspective);
        }

        if let Some(pos) = input.virtual_pointer {
            if let Some((dx, dy)) = self.mouse_look.sample(pos) {
                self.camera.process_mouse_movement(dx, dy, true);
            }
        }

        let (_, scroll_y) = frame.scroll_delta;
        if scroll_y != 0.0 {
            self.camera.process_mouse_scroll(scroll_y);
        }

        for button in &frame.buttons_pressed {
            log::debug!("{button} mouse button pressed");
        }
        for button in &frame.buttons_released {
            log::debug!("{button} mouse button released");
        }

        AppControl::Continue
    }

    fn set_projection(&mut self, mode: ProjectionMode) {
        if self.projection != mode {
            log::info!("switched to {mode:?} projection");
            self.projection = mode;
        }
    }

    pub fn view_state(&self, aspect: f32) -> ViewState {
        ViewState {
            view: self.camera.view_matrix(),
            projection: self.camera.projection_matrix(aspect, self.projection),
            eye: self.camera.position(),
        }
    }
}

/// GPU side of the scene, created once the window exists.
struct LoadedScene {
    layouts: SceneLayouts,
    resources: ResourceSet,
    handles: SceneHandles,
    pass: ScenePass,
}

impl LoadedScene {
    fn load(gpu: &Gpu<'_>, config: &DeskConfig) -> Result<Self> {
        let device = gpu.device();

        // Decode everything first so a bad asset fails before any upload.
        let mut images = Vec::with_capacity(TextureSlot::ALL.len());
        for slot in TextureSlot::ALL {
            let path = slot.path(&config.asset_root);
            let image = load_image(&path).inspect_err(|e| log::error!("{e}"))?;
            images.push((slot, image));
        }

        let layouts = SceneLayouts::new(device);
        let mut resources = ResourceSet::new();

        let lit = ShaderSources::lit();
        let marker = ShaderSources::marker();
        let lit_program = compile_program(&lit.desc())
            .context("building the lit program")?
            .create(device, &layouts, gpu.surface_format(), Some(DEPTH_FORMAT));
        let marker_program = compile_program(&marker.desc())
            .context("building the light marker program")?
            .create(device, &layouts, gpu.surface_format(), Some(DEPTH_FORMAT));

        let handles = SceneHandles {
            lit_program: resources.add_program(lit_program),
            marker_program: resources.add_program(marker_program),
            meshes: ShapeKind::ALL
                .iter()
                .map(|kind| (*kind, resources.add_mesh(GpuMesh::upload(device, &build_mesh(*kind)))))
                .collect(),
            textures: images
                .iter()
                .map(|(slot, image)| {
                    let texture = GpuTexture::upload(
                        device,
                        gpu.queue(),
                        &layouts.material,
                        image,
                        slot.file_name(),
                    );
                    (*slot, resources.add_texture(texture))
                })
                .collect(),
        };

        let (meshes, textures, programs) = resources.counts();
        log::info!("scene ready: {meshes} meshes, {textures} textures, {programs} programs");

        Ok(Self {
            layouts,
            resources,
            handles,
            pass: ScenePass::new(),
        })
    }
}

/// The desk viewer.
pub struct DeskApp {
    config: DeskConfig,
    lights: LightRig,
    viewer: Viewer,
    scene: Option<LoadedScene>,
}

impl DeskApp {
    pub fn new(config: DeskConfig) -> Self {
        Self {
            config,
            lights: LightRig::default(),
            viewer: Viewer::default(),
            scene: None,
        }
    }
}

/// Checks `plan` before a surface frame is acquired for it.
fn presentable(plan: &FramePlan) -> bool {
    match plan.validate() {
        Ok(()) => true,
        Err(e) => {
            log::error!("skipping frame: {e}");
            false
        }
    }
}

impl App for DeskApp {
    fn on_window_ready(&mut self, window: &WindowCtx<'_>, gpu: &Gpu<'_>) -> Result<()> {
        log::debug!("window {:?} ready, loading scene", window.id);
        let scene = LoadedScene::load(gpu, &self.config)?;
        self.scene = Some(scene);
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if self.viewer.update(ctx.input, ctx.input_frame, ctx.time.dt) == AppControl::Exit {
            return AppControl::Exit;
        }

        let (Some(aspect), Some(scene)) = (ctx.gpu.aspect_ratio(), self.scene.as_mut()) else {
            return AppControl::Continue;
        };

        let view = self.viewer.view_state(aspect);
        let plan = build_frame_plan(&scene.handles, &self.lights, &view, self.config.clear_color);
        if !presentable(&plan) {
            return AppControl::Continue;
        }

        let LoadedScene {
            layouts,
            resources,
            pass,
            ..
        } = scene;

        ctx.render(|rctx, target| {
            if let Err(e) = pass.execute(rctx, target, layouts, resources, &plan) {
                log::error!("frame plan rejected: {e}");
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Mat4;
    use lectern_engine::camera::orthographic_projection;
    use lectern_engine::input::{InputEvent, KeyState, Modifiers, MouseWheelDelta};
    use lectern_engine::render::resources::{MeshId, ProgramId, TextureId};

    fn press(state: &mut InputState, frame: &mut InputFrame, key: Key) {
        state.apply_event(
            frame,
            InputEvent::Key {
                key,
                state: KeyState::Pressed,
                modifiers: Modifiers::default(),
                code: 0,
                repeat: false,
            },
        );
    }

    fn release(state: &mut InputState, frame: &mut InputFrame, key: Key) {
        state.apply_event(
            frame,
            InputEvent::Key {
                key,
                state: KeyState::Released,
                modifiers: Modifiers::default(),
                code: 0,
                repeat: false,
            },
        );
    }

    fn motion(state: &mut InputState, frame: &mut InputFrame, dx: f32, dy: f32) {
        state.apply_event(frame, InputEvent::PointerMotion { dx, dy });
    }

    // ── startup ─────────────────────────────────────────────────────────

    #[test]
    fn initial_view_looks_down_negative_z_from_start() {
        let viewer = Viewer::default();
        let expected = Mat4::look_at_rh(START_POSITION, START_POSITION - Vec3::Z, Vec3::Y);
        assert!(viewer.view_state(1.25).view.abs_diff_eq(expected, 1e-5));
        assert_eq!(viewer.projection(), ProjectionMode::Perspective);
    }

    #[test]
    fn idle_frames_change_nothing() {
        let mut viewer = Viewer::default();
        let before = viewer.camera().clone();
        let (state, frame) = (InputState::default(), InputFrame::default());
        for _ in 0..10 {
            assert_eq!(viewer.update(&state, &frame, 0.016), AppControl::Continue);
        }
        assert_eq!(*viewer.camera(), before);
    }

    // ── keyboard ────────────────────────────────────────────────────────

    #[test]
    fn escape_requests_exit() {
        let mut viewer = Viewer::default();
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        press(&mut state, &mut frame, Key::Escape);
        assert_eq!(viewer.update(&state, &frame, 0.016), AppControl::Exit);
    }

    #[test]
    fn held_w_moves_forward_by_speed_times_dt() {
        let mut viewer = Viewer::default();
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        press(&mut state, &mut frame, Key::W);
        viewer.update(&state, &frame, 0.5);
        let expected = START_POSITION - Vec3::Z * (Camera::DEFAULT_SPEED * 0.5);
        assert!(viewer.camera().position().abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn q_and_e_move_down_and_up() {
        let mut viewer = Viewer::default();
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        press(&mut state, &mut frame, Key::E);
        viewer.update(&state, &frame, 1.0);
        assert!(viewer.camera().position().y > START_POSITION.y);

        release(&mut state, &mut frame, Key::E);
        press(&mut state, &mut frame, Key::Q);
        viewer.update(&state, &frame, 2.0);
        assert!(viewer.camera().position().y < START_POSITION.y);
    }

    #[test]
    fn p_selects_ortho_and_o_restores_perspective() {
        let mut viewer = Viewer::default();
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());

        press(&mut state, &mut frame, Key::P);
        viewer.update(&state, &frame, 0.016);
        assert_eq!(viewer.projection(), ProjectionMode::Orthographic);
        assert!(viewer.view_state(1.25).projection.abs_diff_eq(orthographic_projection(), 1e-6));

        release(&mut state, &mut frame, Key::P);
        viewer.update(&state, &frame, 0.016);
        assert_eq!(viewer.projection(), ProjectionMode::Orthographic);

        press(&mut state, &mut frame, Key::O);
        viewer.update(&state, &frame, 0.016);
        assert_eq!(viewer.projection(), ProjectionMode::Perspective);
        let expected = Mat4::perspective_rh(45f32.to_radians(), 1.25, 0.1, 100.0);
        assert!(viewer.view_state(1.25).projection.abs_diff_eq(expected, 1e-6));
    }

    // ── mouse ───────────────────────────────────────────────────────────

    #[test]
    fn first_motion_sample_only_seeds() {
        let mut viewer = Viewer::default();
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());

        motion(&mut state, &mut frame, 300.0, -40.0);
        viewer.update(&state, &frame, 0.016);
        assert_eq!(viewer.camera().yaw(), Camera::DEFAULT_YAW);

        motion(&mut state, &mut frame, 10.0, 0.0);
        viewer.update(&state, &frame, 0.016);
        let expected = Camera::DEFAULT_YAW + 10.0 * Camera::DEFAULT_SENSITIVITY;
        assert!((viewer.camera().yaw() - expected).abs() < 1e-5);
    }

    #[test]
    fn downward_motion_pitches_down() {
        let mut viewer = Viewer::default();
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        motion(&mut state, &mut frame, 0.0, 0.0);
        viewer.update(&state, &frame, 0.016);
        motion(&mut state, &mut frame, 0.0, 50.0);
        viewer.update(&state, &frame, 0.016);
        assert!(viewer.camera().pitch() < 0.0);
    }

    #[test]
    fn scrolling_up_zooms_in() {
        let mut viewer = Viewer::default();
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        state.apply_event(
            &mut frame,
            InputEvent::MouseWheel {
                delta: MouseWheelDelta::Line { x: 0.0, y: 3.0 },
                modifiers: Modifiers::default(),
            },
        );
        viewer.update(&state, &frame, 0.016);
        assert_eq!(viewer.camera().zoom(), Camera::DEFAULT_ZOOM - 3.0);
    }

    // ── frame plan ──────────────────────────────────────────────────────

    #[test]
    fn plan_without_present_is_not_rendered() {
        let mut plan = FramePlan::new();
        plan.begin_pass(wgpu::Color::BLACK, true);
        assert!(!presentable(&plan));
    }

    #[test]
    fn desk_plan_is_presentable() {
        let handles = SceneHandles {
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
        };
        let viewer = Viewer::default();
        let plan = build_frame_plan(
            &handles,
            &LightRig::default(),
            &viewer.view_state(4.0 / 3.0),
            wgpu::Color::BLACK,
        );
        assert_eq!(plan.present_count(), 1);
        assert!(presentable(&plan));
    }
}
