//! Shader programs: a vertex + fragment WGSL pair checked by naga before
//! any GPU object exists, then turned into a render pipeline.
//!
//! "Compile" parses and validates one stage on its own. "Link" checks the
//! pair against each other: every fragment input location must be written by
//! the vertex stage with the same type, every vertex input must be provided
//! by the mesh layout, and every required uniform name must be declared.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use naga::valid::{Capabilities, ValidationFlags, Validator};

use super::SceneLayouts;
use super::mesh::VertexInput;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn entry_point(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vs_main",
            ShaderStage::Fragment => "fs_main",
        }
    }

    fn naga(self) -> naga::ShaderStage {
        match self {
            ShaderStage::Vertex => naga::ShaderStage::Vertex,
            ShaderStage::Fragment => naga::ShaderStage::Fragment,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Program build failure. `log` carries the diagnostic text.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgramError {
    Compile {
        label: String,
        stage: ShaderStage,
        log: String,
    },
    Link {
        label: String,
        log: String,
    },
}

impl fmt::Display for ProgramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgramError::Compile { label, stage, log } => {
                write!(f, "{label}: {stage} shader compilation failed:\n{log}")
            }
            ProgramError::Link { label, log } => {
                write!(f, "{label}: program linking failed:\n{log}")
            }
        }
    }
}

impl std::error::Error for ProgramError {}

/// Everything needed to build one program.
#[derive(Debug, Clone, Copy)]
pub struct ProgramDesc<'a> {
    pub label: &'a str,
    pub vertex_source: &'a str,
    pub fragment_source: &'a str,
    /// Names that must appear as uniform block members or global bindings.
    pub required_uniforms: &'a [&'a str],
    pub vertex_input: VertexInput,
    /// Whether the program samples a texture from bind group 1.
    pub textured: bool,
}

/// One validated shader stage.
#[derive(Debug)]
pub struct CompiledStage<'a> {
    stage: ShaderStage,
    source: &'a str,
    module: naga::Module,
}

/// Uniform block member as laid out by the shader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformMember {
    pub name: String,
    pub offset: u32,
}

impl<'a> CompiledStage<'a> {
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    fn entry(&self) -> Option<&naga::EntryPoint> {
        self.module
            .entry_points
            .iter()
            .find(|ep| ep.stage == self.stage.naga() && ep.name == self.stage.entry_point())
    }

    /// Members of every uniform-space struct, in declaration order.
    pub fn uniform_members(&self) -> Vec<UniformMember> {
        let mut out = Vec::new();
        for (_, var) in self.module.global_variables.iter() {
            if var.space != naga::AddressSpace::Uniform {
                continue;
            }
            if let naga::TypeInner::Struct { members, .. } = &self.module.types[var.ty].inner {
                out.extend(members.iter().filter_map(|m| {
                    m.name.as_ref().map(|name| UniformMember {
                        name: name.clone(),
                        offset: m.offset,
                    })
                }));
            }
        }
        out
    }

    /// Uniform member names plus the names of all bound globals.
    fn declared_names(&self) -> BTreeSet<String> {
        let mut names: BTreeSet<String> =
            self.uniform_members().into_iter().map(|m| m.name).collect();
        for (_, var) in self.module.global_variables.iter() {
            if var.binding.is_some() {
                if let Some(name) = &var.name {
                    names.insert(name.clone());
                }
            }
        }
        names
    }

    /// `@location` inputs of the entry point.
    fn input_locations(&self) -> BTreeMap<u32, naga::TypeInner> {
        let mut out = BTreeMap::new();
        if let Some(ep) = self.entry() {
            for arg in &ep.function.arguments {
                collect_locations(&self.module, arg.binding.as_ref(), arg.ty, &mut out);
            }
        }
        out
    }

    /// `@location` outputs of the entry point.
    fn output_locations(&self) -> BTreeMap<u32, naga::TypeInner> {
        let mut out = BTreeMap::new();
        if let Some(result) = self.entry().and_then(|ep| ep.function.result.as_ref()) {
            collect_locations(&self.module, result.binding.as_ref(), result.ty, &mut out);
        }
        out
    }
}

fn collect_locations(
    module: &naga::Module,
    binding: Option<&naga::Binding>,
    ty: naga::Handle<naga::Type>,
    out: &mut BTreeMap<u32, naga::TypeInner>,
) {
    match binding {
        Some(naga::Binding::Location { location, .. }) => {
            out.insert(*location, module.types[ty].inner.clone());
        }
        Some(naga::Binding::BuiltIn(_)) => {}
        None => {
            if let naga::TypeInner::Struct { members, .. } = &module.types[ty].inner {
                for m in members {
                    if let Some(naga::Binding::Location { location, .. }) = &m.binding {
                        out.insert(*location, module.types[m.ty].inner.clone());
                    }
                }
            }
        }
    }
}

/// Parses and validates one stage. Requires an entry point named
/// `vs_main` / `fs_main` for the stage.
pub fn compile_stage<'a>(
    label: &str,
    stage: ShaderStage,
    source: &'a str,
) -> Result<CompiledStage<'a>, ProgramError> {
    let fail = |log: String| ProgramError::Compile {
        label: label.to_string(),
        stage,
        log,
    };

    let module = naga::front::wgsl::parse_str(source).map_err(|e| fail(e.emit_to_string(source)))?;

    Validator::new(ValidationFlags::all(), Capabilities::empty())
        .validate(&module)
        .map_err(|e| fail(e.as_inner().to_string()))?;

    let compiled = CompiledStage {
        stage,
        source,
        module,
    };

    if compiled.entry().is_none() {
        return Err(fail(format!(
            "no @{stage} entry point named `{}`",
            stage.entry_point()
        )));
    }

    Ok(compiled)
}

/// Checks a vertex/fragment pair against each other and the mesh layout.
pub fn link(
    label: &str,
    vertex: &CompiledStage<'_>,
    fragment: &CompiledStage<'_>,
    vertex_input: VertexInput,
    required_uniforms: &[&str],
) -> Result<(), ProgramError> {
    let mut problems = Vec::new();

    for location in vertex.input_locations().keys() {
        if !vertex_input.locations().contains(location) {
            problems.push(format!(
                "vertex stage reads attribute location {location}, which the mesh layout does not provide"
            ));
        }
    }

    let produced = vertex.output_locations();
    for (location, ty) in fragment.input_locations() {
        match produced.get(&location) {
            None => problems.push(format!(
                "fragment input location {location} is not written by the vertex stage"
            )),
            Some(out_ty) if *out_ty != ty => problems.push(format!(
                "location {location} type mismatch: vertex writes {out_ty:?}, fragment reads {ty:?}"
            )),
            Some(_) => {}
        }
    }

    let mut declared = vertex.declared_names();
    declared.extend(fragment.declared_names());
    for name in required_uniforms {
        if !declared.contains(*name) {
            problems.push(format!("uniform `{name}` is not declared by either stage"));
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(ProgramError::Link {
            label: label.to_string(),
            log: problems.join("\n"),
        })
    }
}

/// A program that passed compile and link, not yet on the GPU.
#[derive(Debug)]
pub struct LinkedProgram<'a> {
    desc: ProgramDesc<'a>,
    vertex: CompiledStage<'a>,
    fragment: CompiledStage<'a>,
}

/// Compiles both stages, then links them. Any failure is logged and returned;
/// a compile failure returns before linking is attempted.
pub fn compile_program<'a>(desc: &ProgramDesc<'a>) -> Result<LinkedProgram<'a>, ProgramError> {
    let result = build_program(desc);
    if let Err(err) = &result {
        log::error!("{err}");
    }
    result
}

fn build_program<'a>(desc: &ProgramDesc<'a>) -> Result<LinkedProgram<'a>, ProgramError> {
    let vertex = compile_stage(desc.label, ShaderStage::Vertex, desc.vertex_source)?;
    let fragment = compile_stage(desc.label, ShaderStage::Fragment, desc.fragment_source)?;
    link(desc.label, &vertex, &fragment, desc.vertex_input, desc.required_uniforms)?;

    Ok(LinkedProgram {
        desc: *desc,
        vertex,
        fragment,
    })
}

impl<'a> LinkedProgram<'a> {
    pub fn vertex(&self) -> &CompiledStage<'a> {
        &self.vertex
    }

    pub fn fragment(&self) -> &CompiledStage<'a> {
        &self.fragment
    }

    /// Creates the GPU pipeline. `depth_format` enables depth testing
    /// (less-than, with writes).
    pub fn create(
        self,
        device: &wgpu::Device,
        layouts: &SceneLayouts,
        color_format: wgpu::TextureFormat,
        depth_format: Option<wgpu::TextureFormat>,
    ) -> Program {
        let label = self.desc.label;

        let vs = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(self.vertex.source)),
        });
        let fs = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(self.fragment.source)),
        });

        let bind_group_layouts: Vec<&wgpu::BindGroupLayout> = if self.desc.textured {
            vec![&layouts.uniforms, &layouts.material]
        } else {
            vec![&layouts.uniforms]
        };

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(label),
            bind_group_layouts: &bind_group_layouts,
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &vs,
                entry_point: Some(ShaderStage::Vertex.entry_point()),
                compilation_options: Default::default(),
                buffers: &[self.desc.vertex_input.layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &fs,
                entry_point: Some(ShaderStage::Fragment.entry_point()),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: color_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Authored winding is not consistent across shapes.
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: depth_format.map(|format| wgpu::DepthStencilState {
                format,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),

            multiview_mask: None,
            cache: None,
        });

        log::debug!("created program {label}");

        Program {
            label: label.to_string(),
            pipeline,
            textured: self.desc.textured,
            depth_tested: depth_format.is_some(),
        }
    }
}

/// GPU render pipeline for one program.
pub struct Program {
    label: String,
    pipeline: wgpu::RenderPipeline,
    textured: bool,
    depth_tested: bool,
}

impl Program {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn pipeline(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }

    pub fn textured(&self) -> bool {
        self.textured
    }

    pub fn depth_tested(&self) -> bool {
        self.depth_tested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIFORMS: &str = "
struct Transforms {
    model: mat4x4<f32>,
    view: mat4x4<f32>,
    projection: mat4x4<f32>,
}
@group(0) @binding(0) var<uniform> u: Transforms;
";

    fn vertex_src() -> String {
        format!(
            "{UNIFORMS}
struct VsOut {{
    @builtin(position) clip: vec4<f32>,
    @location(0) uv: vec2<f32>,
}}

@vertex
fn vs_main(@location(0) position: vec3<f32>, @location(2) uv: vec2<f32>) -> VsOut {{
    var out: VsOut;
    out.clip = u.projection * u.view * u.model * vec4<f32>(position, 1.0);
    out.uv = uv;
    return out;
}}
"
        )
    }

    const FRAGMENT: &str = "
@fragment
fn fs_main(@location(0) uv: vec2<f32>) -> @location(0) vec4<f32> {
    return vec4<f32>(uv, 0.0, 1.0);
}
";

    fn desc<'a>(vs: &'a str, fs: &'a str, required: &'a [&'a str]) -> ProgramDesc<'a> {
        ProgramDesc {
            label: "test program",
            vertex_source: vs,
            fragment_source: fs,
            required_uniforms: required,
            vertex_input: VertexInput::Full,
            textured: false,
        }
    }

    // ── compile ───────────────────────────────────────────────────────────

    #[test]
    fn valid_pair_compiles_and_links() {
        let vs = vertex_src();
        let linked = compile_program(&desc(&vs, FRAGMENT, &["model", "view", "projection"]));
        assert!(linked.is_ok());
    }

    #[test]
    fn vertex_syntax_error_fails_before_link() {
        let broken = "@vertex fn vs_main( -> @builtin(position) vec4<f32> { return vec4<f32>(0.0); }";
        // Fragment source is also broken, so reaching it would change the stage.
        let err = compile_program(&desc(broken, "not wgsl at all", &[])).unwrap_err();
        match err {
            ProgramError::Compile { stage, log, .. } => {
                assert_eq!(stage, ShaderStage::Vertex);
                assert!(!log.is_empty());
            }
            other => panic!("expected a compile error, got {other:?}"),
        }
    }

    #[test]
    fn fragment_type_error_reports_fragment_stage() {
        let vs = vertex_src();
        let bad_fs = "
@fragment
fn fs_main(@location(0) uv: vec2<f32>) -> @location(0) vec4<f32> {
    return uv;
}
";
        let err = compile_program(&desc(&vs, bad_fs, &[])).unwrap_err();
        assert!(matches!(err, ProgramError::Compile { stage: ShaderStage::Fragment, .. }));
    }

    #[test]
    fn missing_entry_point_is_a_compile_error() {
        let src = "@vertex fn main() -> @builtin(position) vec4<f32> { return vec4<f32>(0.0); }";
        let err = compile_stage("t", ShaderStage::Vertex, src).unwrap_err();
        assert!(matches!(err, ProgramError::Compile { stage: ShaderStage::Vertex, .. }));
    }

    // ── link ──────────────────────────────────────────────────────────────

    #[test]
    fn unwritten_fragment_input_fails_link() {
        let vs = vertex_src();
        let fs = "
@fragment
fn fs_main(@location(3) shade: vec3<f32>) -> @location(0) vec4<f32> {
    return vec4<f32>(shade, 1.0);
}
";
        let err = compile_program(&desc(&vs, fs, &[])).unwrap_err();
        match err {
            ProgramError::Link { log, .. } => assert!(log.contains("location 3")),
            other => panic!("expected a link error, got {other:?}"),
        }
    }

    #[test]
    fn mismatched_varying_type_fails_link() {
        let vs = vertex_src();
        let fs = "
@fragment
fn fs_main(@location(0) uv: vec3<f32>) -> @location(0) vec4<f32> {
    return vec4<f32>(uv, 1.0);
}
";
        let err = compile_program(&desc(&vs, fs, &[])).unwrap_err();
        assert!(matches!(err, ProgramError::Link { .. }));
    }

    #[test]
    fn missing_required_uniform_fails_link() {
        let vs = vertex_src();
        let err = compile_program(&desc(&vs, FRAGMENT, &["model", "lightPos"])).unwrap_err();
        match err {
            ProgramError::Link { log, .. } => assert!(log.contains("lightPos")),
            other => panic!("expected a link error, got {other:?}"),
        }
    }

    #[test]
    fn attribute_outside_mesh_layout_fails_link() {
        let vs = vertex_src();
        let mut d = desc(&vs, FRAGMENT, &[]);
        d.vertex_input = VertexInput::PositionOnly;
        assert!(matches!(compile_program(&d), Err(ProgramError::Link { .. })));
    }

    // ── reflection ────────────────────────────────────────────────────────

    #[test]
    fn uniform_members_report_offsets() {
        let vs = vertex_src();
        let stage = compile_stage("t", ShaderStage::Vertex, &vs).unwrap();
        let members = stage.uniform_members();
        let offsets: Vec<(&str, u32)> = members.iter().map(|m| (m.name.as_str(), m.offset)).collect();
        assert_eq!(offsets, vec![("model", 0), ("view", 64), ("projection", 128)]);
    }
}
