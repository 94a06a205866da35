use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

/// One interleaved vertex: position, face normal, texture coordinate.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    /// Floats per vertex.
    pub const FLOATS: usize = 8;

    /// Bytes per vertex.
    pub const STRIDE: u64 = (Self::FLOATS * std::mem::size_of::<f32>()) as u64;

    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3, // normal
        2 => Float32x2  // uv
    ];

    const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    pub const fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self { position, normal, uv }
    }

    /// Layout exposing all three attributes at locations 0, 1, 2.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: Self::STRIDE,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }

    /// Same stride, position only. Used by programs that ignore shading inputs.
    pub fn position_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: Self::STRIDE,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::POSITION_ATTRS,
        }
    }
}

/// Which vertex attributes a program consumes from the shared buffer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum VertexInput {
    Full,
    PositionOnly,
}

impl VertexInput {
    pub fn layout(self) -> wgpu::VertexBufferLayout<'static> {
        match self {
            VertexInput::Full => Vertex::layout(),
            VertexInput::PositionOnly => Vertex::position_layout(),
        }
    }

    /// Shader locations this input provides.
    pub fn locations(self) -> &'static [u32] {
        match self {
            VertexInput::Full => &[0, 1, 2],
            VertexInput::PositionOnly => &[0],
        }
    }
}

/// CPU-side static geometry: a fully expanded triangle list.
#[derive(Debug, Copy, Clone)]
pub struct MeshData<'a> {
    pub label: &'a str,
    pub vertices: &'a [Vertex],
}

impl<'a> MeshData<'a> {
    pub const fn new(label: &'a str, vertices: &'a [Vertex]) -> Self {
        Self { label, vertices }
    }

    /// The vertex stream viewed as raw floats.
    pub fn floats(&self) -> &'a [f32] {
        bytemuck::cast_slice(self.vertices)
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn byte_len(&self) -> u64 {
        self.vertices.len() as u64 * Vertex::STRIDE
    }

    /// Iterates triangles; a trailing partial triangle is ignored.
    pub fn triangles(&self) -> impl Iterator<Item = &'a [Vertex]> + 'a {
        self.vertices.chunks_exact(3)
    }
}

/// Immutable GPU vertex buffer plus its vertex count.
pub struct GpuMesh {
    label: String,
    buffer: wgpu::Buffer,
    vertex_count: u32,
}

impl GpuMesh {
    /// Uploads `data` into a new vertex buffer.
    pub fn upload(device: &wgpu::Device, data: &MeshData<'_>) -> Self {
        debug_assert!(
            data.vertices.len() % 3 == 0,
            "mesh {} is not a whole triangle list",
            data.label
        );

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(data.label),
            contents: bytemuck::cast_slice(data.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let vertex_count = data.vertex_count();
        debug_assert_eq!(buffer.size(), vertex_count as u64 * Vertex::STRIDE);

        log::debug!("uploaded mesh {} ({} vertices)", data.label, vertex_count);

        Self {
            label: data.label.to_string(),
            buffer,
            vertex_count,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRI: [Vertex; 3] = [
        Vertex::new([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0]),
        Vertex::new([1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0]),
        Vertex::new([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0]),
    ];

    #[test]
    fn vertex_is_eight_tightly_packed_floats() {
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
        assert_eq!(Vertex::STRIDE, 32);
        assert_eq!(std::mem::offset_of!(Vertex, normal), 12);
        assert_eq!(std::mem::offset_of!(Vertex, uv), 24);
    }

    #[test]
    fn float_view_matches_vertex_count() {
        let data = MeshData::new("tri", &TRI);
        assert_eq!(data.floats().len(), 24);
        assert_eq!(data.floats().len() % Vertex::FLOATS, 0);
        assert_eq!(data.vertex_count() as usize, data.floats().len() / Vertex::FLOATS);
        assert_eq!(data.byte_len(), 96);
        assert_eq!(data.floats()[8], 1.0);
    }

    #[test]
    fn position_layout_keeps_full_stride() {
        let layout = Vertex::position_layout();
        assert_eq!(layout.array_stride, Vertex::STRIDE);
        assert_eq!(layout.attributes.len(), 1);
        assert_eq!(layout.attributes[0].shader_location, 0);
    }

    #[test]
    fn full_layout_offsets() {
        let layout = Vertex::layout();
        let offsets: Vec<u64> = layout.attributes.iter().map(|a| a.offset).collect();
        assert_eq!(offsets, vec![0, 12, 24]);
    }
}
