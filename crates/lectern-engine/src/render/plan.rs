use std::fmt;

use super::resources::{MeshId, ProgramId, TextureId};
use super::uniforms::ObjectUniforms;

/// One non-indexed triangle-list draw sized to the mesh's vertex count.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub label: &'static str,
    pub program: ProgramId,
    pub mesh: MeshId,
    pub texture: Option<TextureId>,
    pub uniforms: ObjectUniforms,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FrameCmd {
    /// Starts a render pass, clearing color (and depth when tested).
    BeginPass { clear: wgpu::Color, depth_test: bool },
    Draw(DrawCall),
    /// Ends the frame; the surface is presented after this.
    Present,
}

/// Problems that make a plan unexecutable.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PlanError {
    DrawOutsidePass { index: usize },
    MissingPresent,
    MultiplePresent,
    CommandAfterPresent { index: usize },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::DrawOutsidePass { index } => {
                write!(f, "frame command {index} draws before any pass began")
            }
            PlanError::MissingPresent => f.write_str("frame plan never presents"),
            PlanError::MultiplePresent => f.write_str("frame plan presents more than once"),
            PlanError::CommandAfterPresent { index } => {
                write!(f, "frame command {index} follows the present")
            }
        }
    }
}

impl std::error::Error for PlanError {}

/// A pass together with the draws recorded inside it.
#[derive(Debug, Clone, Copy)]
pub struct PassSpan<'a> {
    pub clear: wgpu::Color,
    pub depth_test: bool,
    pub draws: &'a [FrameCmd],
}

impl<'a> PassSpan<'a> {
    pub fn draw_calls(&self) -> impl Iterator<Item = &'a DrawCall> + 'a {
        self.draws.iter().filter_map(|cmd| match cmd {
            FrameCmd::Draw(call) => Some(call),
            _ => None,
        })
    }
}

/// Ordered commands for a single frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FramePlan {
    cmds: Vec<FrameCmd>,
}

impl FramePlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_pass(&mut self, clear: wgpu::Color, depth_test: bool) -> &mut Self {
        self.cmds.push(FrameCmd::BeginPass { clear, depth_test });
        self
    }

    pub fn draw(&mut self, call: DrawCall) -> &mut Self {
        self.cmds.push(FrameCmd::Draw(call));
        self
    }

    pub fn present(&mut self) -> &mut Self {
        self.cmds.push(FrameCmd::Present);
        self
    }

    pub fn commands(&self) -> &[FrameCmd] {
        &self.cmds
    }

    pub fn draws(&self) -> impl Iterator<Item = &DrawCall> {
        self.cmds.iter().filter_map(|cmd| match cmd {
            FrameCmd::Draw(call) => Some(call),
            _ => None,
        })
    }

    pub fn draw_count(&self) -> usize {
        self.draws().count()
    }

    pub fn present_count(&self) -> usize {
        self.cmds.iter().filter(|c| matches!(c, FrameCmd::Present)).count()
    }

    /// Whether the pass containing the first draw tests depth.
    pub fn depth_tested_before_first_draw(&self) -> bool {
        let mut depth = false;
        for cmd in &self.cmds {
            match cmd {
                FrameCmd::BeginPass { depth_test, .. } => depth = *depth_test,
                FrameCmd::Draw(_) => return depth,
                FrameCmd::Present => return false,
            }
        }
        false
    }

    /// Checks that every draw sits inside a pass and the plan ends with
    /// exactly one present.
    pub fn validate(&self) -> Result<(), PlanError> {
        let mut in_pass = false;
        let mut presented = false;

        for (index, cmd) in self.cmds.iter().enumerate() {
            if presented {
                return Err(match cmd {
                    FrameCmd::Present => PlanError::MultiplePresent,
                    _ => PlanError::CommandAfterPresent { index },
                });
            }
            match cmd {
                FrameCmd::BeginPass { .. } => in_pass = true,
                FrameCmd::Draw(_) if !in_pass => return Err(PlanError::DrawOutsidePass { index }),
                FrameCmd::Draw(_) => {}
                FrameCmd::Present => presented = true,
            }
        }

        if presented { Ok(()) } else { Err(PlanError::MissingPresent) }
    }

    /// Splits a validated plan into passes.
    pub fn passes(&self) -> Vec<PassSpan<'_>> {
        let mut spans = Vec::new();
        let mut current: Option<(wgpu::Color, bool, usize)> = None;

        for (index, cmd) in self.cmds.iter().enumerate() {
            match cmd {
                FrameCmd::BeginPass { clear, depth_test } => {
                    if let Some((clear, depth_test, start)) = current.take() {
                        spans.push(PassSpan { clear, depth_test, draws: &self.cmds[start..index] });
                    }
                    current = Some((*clear, *depth_test, index + 1));
                }
                FrameCmd::Draw(_) => {}
                FrameCmd::Present => {
                    if let Some((clear, depth_test, start)) = current.take() {
                        spans.push(PassSpan { clear, depth_test, draws: &self.cmds[start..index] });
                    }
                    break;
                }
            }
        }

        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Mat4;

    fn call(label: &'static str) -> DrawCall {
        DrawCall {
            label,
            program: ProgramId::from_index(0),
            mesh: MeshId::from_index(0),
            texture: None,
            uniforms: ObjectUniforms::transforms(Mat4::IDENTITY, Mat4::IDENTITY, Mat4::IDENTITY),
        }
    }

    const CLEAR: wgpu::Color = wgpu::Color { r: 0.1, g: 0.1, b: 0.1, a: 1.0 };

    // ── validate ──────────────────────────────────────────────────────────

    #[test]
    fn well_formed_plan_validates() {
        let mut plan = FramePlan::new();
        plan.begin_pass(CLEAR, true).draw(call("a")).draw(call("b")).present();
        assert_eq!(plan.validate(), Ok(()));
        assert_eq!(plan.present_count(), 1);
        assert!(plan.depth_tested_before_first_draw());
    }

    #[test]
    fn draw_before_pass_is_rejected() {
        let mut plan = FramePlan::new();
        plan.draw(call("a")).begin_pass(CLEAR, true).present();
        assert_eq!(plan.validate(), Err(PlanError::DrawOutsidePass { index: 0 }));
    }

    #[test]
    fn missing_present_is_rejected() {
        let mut plan = FramePlan::new();
        plan.begin_pass(CLEAR, true).draw(call("a"));
        assert_eq!(plan.validate(), Err(PlanError::MissingPresent));
    }

    #[test]
    fn double_present_is_rejected() {
        let mut plan = FramePlan::new();
        plan.begin_pass(CLEAR, true).present().present();
        assert_eq!(plan.validate(), Err(PlanError::MultiplePresent));
    }

    #[test]
    fn draw_after_present_is_rejected() {
        let mut plan = FramePlan::new();
        plan.begin_pass(CLEAR, true).present().draw(call("late"));
        assert_eq!(plan.validate(), Err(PlanError::CommandAfterPresent { index: 2 }));
    }

    // ── passes ────────────────────────────────────────────────────────────

    #[test]
    fn passes_group_draws_in_order() {
        let mut plan = FramePlan::new();
        plan.begin_pass(CLEAR, true)
            .draw(call("a"))
            .draw(call("b"))
            .begin_pass(CLEAR, false)
            .draw(call("c"))
            .present();

        let passes = plan.passes();
        assert_eq!(passes.len(), 2);

        let first: Vec<&str> = passes[0].draw_calls().map(|c| c.label).collect();
        let second: Vec<&str> = passes[1].draw_calls().map(|c| c.label).collect();
        assert_eq!(first, vec!["a", "b"]);
        assert_eq!(second, vec!["c"]);
        assert!(passes[0].depth_test);
        assert!(!passes[1].depth_test);
    }

    #[test]
    fn empty_pass_still_clears() {
        let mut plan = FramePlan::new();
        plan.begin_pass(CLEAR, true).present();
        let passes = plan.passes();
        assert_eq!(passes.len(), 1);
        assert_eq!(passes[0].draw_calls().count(), 0);
    }
}
