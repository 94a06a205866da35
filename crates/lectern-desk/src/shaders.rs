//! Embedded WGSL programs.
//!
//! Both programs bind `ObjectUniforms` at group 0. The lit program also
//! samples its material from group 1; the marker program reads positions only
//! and paints solid white.

use lectern_engine::render::mesh::VertexInput;
use lectern_engine::render::program::ProgramDesc;

const OBJECT_UNIFORMS: &str = "
struct ObjectUniforms {
    model: mat4x4<f32>,
    view: mat4x4<f32>,
    projection: mat4x4<f32>,
    normalMatrix: mat4x4<f32>,
    objectColor: vec3<f32>,
    lightColor: vec3<f32>,
    lightPos: vec3<f32>,
    viewPosition: vec3<f32>,
    uvScale: vec2<f32>,
}

@group(0) @binding(0) var<uniform> u: ObjectUniforms;
";

const LIT_VERTEX_BODY: &str = "
struct VertexOut {
    @builtin(position) clip: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
}

@vertex
fn vs_main(
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
) -> VertexOut {
    let world = u.model * vec4<f32>(position, 1.0);

    var out: VertexOut;
    out.clip = u.projection * u.view * world;
    out.world_pos = world.xyz;
    out.normal = (u.normalMatrix * vec4<f32>(normal, 0.0)).xyz;
    out.uv = uv;
    return out;
}
";

const LIT_FRAGMENT_BODY: &str = "
@group(1) @binding(0) var uTexture: texture_2d<f32>;
@group(1) @binding(1) var uSampler: sampler;

const AMBIENT_STRENGTH: f32 = 0.5;
const SPECULAR_INTENSITY: f32 = 0.2;
const HIGHLIGHT_SIZE: f32 = 12.0;

struct FragmentIn {
    @location(0) world_pos: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
}

@fragment
fn fs_main(in: FragmentIn) -> @location(0) vec4<f32> {
    let ambient = AMBIENT_STRENGTH * u.lightColor;

    let norm = normalize(in.normal);
    let light_dir = normalize(u.lightPos - in.world_pos);
    let diffuse = max(dot(norm, light_dir), 0.0) * u.lightColor;

    let view_dir = normalize(u.viewPosition - in.world_pos);
    let reflect_dir = reflect(-light_dir, norm);
    let highlight = pow(max(dot(view_dir, reflect_dir), 0.0), HIGHLIGHT_SIZE);
    let specular = SPECULAR_INTENSITY * highlight * u.lightColor;

    let texel = textureSample(uTexture, uSampler, in.uv * u.uvScale);
    let phong = (ambient + diffuse + specular) * texel.rgb;
    return vec4<f32>(phong * u.objectColor, 1.0);
}
";

const MARKER_VERTEX: &str = "
struct Transforms {
    model: mat4x4<f32>,
    view: mat4x4<f32>,
    projection: mat4x4<f32>,
}

@group(0) @binding(0) var<uniform> u: Transforms;

@vertex
fn vs_main(@location(0) position: vec3<f32>) -> @builtin(position) vec4<f32> {
    return u.projection * u.view * u.model * vec4<f32>(position, 1.0);
}
";

const MARKER_FRAGMENT: &str = "
@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(1.0);
}
";

pub const LIT_UNIFORMS: &[&str] = &[
    "model",
    "view",
    "projection",
    "normalMatrix",
    "objectColor",
    "lightColor",
    "lightPos",
    "viewPosition",
    "uTexture",
    "uvScale",
];

pub const MARKER_UNIFORMS: &[&str] = &["model", "view", "projection"];

/// Sources for one program. The lit stages share the uniform declaration, so
/// they are assembled at startup.
#[derive(Debug, Clone)]
pub struct ShaderSources {
    pub label: &'static str,
    pub vertex: String,
    pub fragment: String,
    pub required_uniforms: &'static [&'static str],
    pub vertex_input: VertexInput,
    pub textured: bool,
}

impl ShaderSources {
    pub fn lit() -> Self {
        Self {
            label: "lit textured program",
            vertex: format!("{OBJECT_UNIFORMS}{LIT_VERTEX_BODY}"),
            fragment: format!("{OBJECT_UNIFORMS}{LIT_FRAGMENT_BODY}"),
            required_uniforms: LIT_UNIFORMS,
            vertex_input: VertexInput::Full,
            textured: true,
        }
    }

    pub fn marker() -> Self {
        Self {
            label: "light marker program",
            vertex: MARKER_VERTEX.to_string(),
            fragment: MARKER_FRAGMENT.to_string(),
            required_uniforms: MARKER_UNIFORMS,
            vertex_input: VertexInput::PositionOnly,
            textured: false,
        }
    }

    pub fn desc(&self) -> ProgramDesc<'_> {
        ProgramDesc {
            label: self.label,
            vertex_source: &self.vertex,
            fragment_source: &self.fragment,
            required_uniforms: self.required_uniforms,
            vertex_input: self.vertex_input,
            textured: self.textured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lectern_engine::render::program::{ProgramError, compile_program};
    use lectern_engine::render::uniforms::ObjectUniforms;

    #[test]
    fn lit_program_compiles_and_links() {
        let src = ShaderSources::lit();
        compile_program(&src.desc()).unwrap();
    }

    #[test]
    fn marker_program_compiles_and_links() {
        let src = ShaderSources::marker();
        compile_program(&src.desc()).unwrap();
    }

    #[test]
    fn lit_uniform_block_matches_cpu_layout() {
        let src = ShaderSources::lit();
        let linked = compile_program(&src.desc()).unwrap();
        let members: Vec<(String, u32)> = linked
            .vertex()
            .uniform_members()
            .into_iter()
            .map(|m| (m.name, m.offset))
            .collect();
        let expected: Vec<(String, u32)> = ObjectUniforms::MEMBER_OFFSETS
            .iter()
            .map(|(name, offset)| (name.to_string(), *offset))
            .collect();
        assert_eq!(members, expected);
    }

    #[test]
    fn marker_block_is_a_prefix_of_object_uniforms() {
        let src = ShaderSources::marker();
        let linked = compile_program(&src.desc()).unwrap();
        let members = linked.vertex().uniform_members();
        for (member, (name, offset)) in members.iter().zip(ObjectUniforms::MEMBER_OFFSETS) {
            assert_eq!(member.name, name);
            assert_eq!(member.offset, offset);
        }
        assert_eq!(members.len(), 3);
    }

    #[test]
    fn lit_fragment_without_sampler_name_fails_link() {
        let mut src = ShaderSources::lit();
        src.fragment = src.fragment.replace("uTexture", "albedo");
        let err = compile_program(&src.desc()).unwrap_err();
        assert!(matches!(err, ProgramError::Link { .. }));
    }

    #[test]
    fn lighting_constants_match_fragment_source() {
        assert!(LIT_FRAGMENT_BODY.contains("AMBIENT_STRENGTH: f32 = 0.5;"));
        assert!(LIT_FRAGMENT_BODY.contains("SPECULAR_INTENSITY: f32 = 0.2;"));
        assert!(LIT_FRAGMENT_BODY.contains("HIGHLIGHT_SIZE: f32 = 12.0;"));
    }
}
