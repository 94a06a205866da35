//! Static geometry for the desk scene.
//!
//! Every shape is a fully expanded triangle list with flat face normals and
//! hand-authored UVs. The tables are data, not generators, so each face keeps
//! exactly the texture mapping it was authored with.

use lectern_engine::render::mesh::{MeshData, Vertex};

/// Shapes the scene can build a mesh for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    /// Small cube drawn at each light.
    Marker,
    Plane,
    StorageBox,
    BookCover,
    BookPages,
    Wand,
    Mug,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Marker,
        ShapeKind::Plane,
        ShapeKind::StorageBox,
        ShapeKind::BookCover,
        ShapeKind::BookPages,
        ShapeKind::Wand,
        ShapeKind::Mug,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Marker => "light marker",
            ShapeKind::Plane => "floor plane",
            ShapeKind::StorageBox => "storage box",
            ShapeKind::BookCover => "book cover",
            ShapeKind::BookPages => "book pages",
            ShapeKind::Wand => "wand",
            ShapeKind::Mug => "mug",
        }
    }

    pub fn vertices(self) -> &'static [Vertex] {
        match self {
            ShapeKind::Marker => MARKER,
            ShapeKind::Plane => PLANE,
            ShapeKind::StorageBox => STORAGE_BOX,
            ShapeKind::BookCover => BOOK_COVER,
            ShapeKind::BookPages => BOOK_PAGES,
            ShapeKind::Wand => WAND,
            ShapeKind::Mug => MUG,
        }
    }
}

/// CPU-side mesh for `kind`, ready for `GpuMesh::upload`.
pub fn build_mesh(kind: ShapeKind) -> MeshData<'static> {
    MeshData::new(kind.label(), kind.vertices())
}

const fn v(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Vertex {
    Vertex::new(position, normal, uv)
}

/// Unit cube standing on the origin, drawn at each light position.
pub const MARKER: &[Vertex] = &[
    v([-0.5, 0.0, -0.5], [0.0, -1.0, 0.0], [0.0, 0.0]),
    v([0.5, 0.0, -0.5], [0.0, -1.0, 0.0], [1.0, 0.0]),
    v([0.5, 0.0, 0.5], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([-0.5, 0.0, -0.5], [0.0, -1.0, 0.0], [0.0, 0.0]),
    v([-0.5, 0.0, 0.5], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([0.5, 0.0, 0.5], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([-0.5, 1.0, -0.5], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([0.5, 1.0, -0.5], [0.0, 1.0, 0.0], [1.0, 0.0]),
    v([0.5, 1.0, 0.5], [0.0, 1.0, 0.0], [1.0, 1.0]),
    v([-0.5, 1.0, -0.5], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([-0.5, 1.0, 0.5], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([0.5, 1.0, 0.5], [0.0, 1.0, 0.0], [1.0, 1.0]),
    v([-0.5, 0.0, -0.5], [0.0, 0.0, -1.0], [0.0, 0.0]),
    v([0.5, 0.0, -0.5], [0.0, 0.0, -1.0], [1.0, 0.0]),
    v([0.5, 1.0, -0.5], [0.0, 0.0, -1.0], [1.0, 1.0]),
    v([-0.5, 0.0, -0.5], [0.0, 0.0, -1.0], [0.0, 0.0]),
    v([-0.5, 1.0, -0.5], [0.0, 0.0, -1.0], [0.0, 1.0]),
    v([0.5, 1.0, -0.5], [0.0, 0.0, -1.0], [1.0, 1.0]),
    v([-0.5, 1.0, -0.5], [-1.0, 0.0, 0.0], [0.0, 0.0]),
    v([-0.5, 0.0, -0.5], [-1.0, 0.0, 0.0], [1.0, 0.0]),
    v([-0.5, 0.0, 0.5], [-1.0, 0.0, 0.0], [1.0, 1.0]),
    v([-0.5, 1.0, -0.5], [-1.0, 0.0, 0.0], [0.0, 0.0]),
    v([-0.5, 1.0, 0.5], [-1.0, 0.0, 0.0], [0.0, 1.0]),
    v([-0.5, 0.0, 0.5], [-1.0, 0.0, 0.0], [1.0, 1.0]),
    v([0.5, 0.0, -0.5], [1.0, 0.0, 0.0], [1.0, 1.0]),
    v([0.5, 1.0, -0.5], [1.0, 0.0, 0.0], [1.0, 0.0]),
    v([0.5, 1.0, 0.5], [1.0, 0.0, 0.0], [0.0, 0.0]),
    v([0.5, 0.0, -0.5], [1.0, 0.0, 0.0], [1.0, 1.0]),
    v([0.5, 0.0, 0.5], [1.0, 0.0, 0.0], [0.0, 1.0]),
    v([0.5, 1.0, 0.5], [1.0, 0.0, 0.0], [0.0, 0.0]),
    v([-0.5, 0.0, 0.5], [0.0, 0.0, 1.0], [0.0, 0.0]),
    v([0.5, 0.0, 0.5], [0.0, 0.0, 1.0], [1.0, 0.0]),
    v([0.5, 1.0, 0.5], [0.0, 0.0, 1.0], [1.0, 1.0]),
    v([-0.5, 0.0, 0.5], [0.0, 0.0, 1.0], [0.0, 0.0]),
    v([-0.5, 1.0, 0.5], [0.0, 0.0, 1.0], [0.0, 1.0]),
    v([0.5, 1.0, 0.5], [0.0, 0.0, 1.0], [1.0, 1.0]),
];

/// Two-triangle floor quad in the XZ plane, facing +Y.
pub const PLANE: &[Vertex] = &[
    v([-1.0, 0.0, 1.0], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([1.0, 0.0, 1.0], [0.0, 1.0, 0.0], [1.0, 0.0]),
    v([1.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 1.0]),
    v([-1.0, 0.0, 1.0], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([-1.0, 0.0, -1.0], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([1.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 1.0]),
];

/// Leather-covered storage box the wand lies beside.
pub const STORAGE_BOX: &[Vertex] = &[
    // bottom
    v([-0.5, 0.0, -0.5], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([-0.5, 0.0, 0.5], [0.0, -1.0, 0.0], [0.0, 0.0]),
    v([0.5, 0.0, -0.5], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([-0.5, 0.0, 0.5], [0.0, -1.0, 0.0], [0.0, 0.0]),
    v([0.5, 0.0, -0.5], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([0.5, 0.0, 0.5], [0.0, -1.0, 0.0], [1.0, 0.0]),
    // front
    v([-0.5, 0.0, 0.5], [0.0, 0.0, 1.0], [0.0, 0.0]),
    v([-0.5, 0.5, 0.5], [0.0, 0.0, 1.0], [0.0, 1.0]),
    v([0.5, 0.5, 0.5], [0.0, 0.0, 1.0], [1.0, 1.0]),
    v([0.5, 0.5, 0.5], [0.0, 0.0, 1.0], [1.0, 1.0]),
    v([0.5, 0.0, 0.5], [0.0, 0.0, 1.0], [1.0, 0.0]),
    v([-0.5, 0.0, 0.5], [0.0, 0.0, 1.0], [0.0, 0.0]),
    // top
    v([-0.5, 0.5, -0.5], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([-0.5, 0.5, 0.5], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([0.5, 0.5, -0.5], [0.0, 1.0, 0.0], [1.0, 1.0]),
    v([0.5, 0.5, -0.5], [0.0, 1.0, 0.0], [1.0, 1.0]),
    v([-0.5, 0.5, 0.5], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([0.5, 0.5, 0.5], [0.0, 1.0, 0.0], [1.0, 0.0]),
    // left side
    v([-0.5, 0.0, 0.5], [-1.0, 0.0, 0.0], [1.0, 0.0]),
    v([-0.5, 0.0, -0.5], [-1.0, 0.0, 0.0], [0.0, 0.0]),
    v([-0.5, 0.5, -0.5], [-1.0, 0.0, 0.0], [0.0, 1.0]),
    v([-0.5, 0.5, -0.5], [-1.0, 0.0, 0.0], [0.0, 1.0]),
    v([-0.5, 0.0, 0.5], [-1.0, 0.0, 0.0], [1.0, 0.0]),
    v([-0.5, 0.5, 0.5], [-1.0, 0.0, 0.0], [1.0, 1.0]),
    // right side
    v([0.5, 0.0, 0.5], [1.0, 0.0, 0.0], [1.0, 0.0]),
    v([0.5, 0.0, -0.5], [1.0, 0.0, 0.0], [0.0, 0.0]),
    v([0.5, 0.5, -0.5], [1.0, 0.0, 0.0], [0.0, 1.0]),
    v([0.5, 0.5, -0.5], [1.0, 0.0, 0.0], [0.0, 1.0]),
    v([0.5, 0.0, 0.5], [1.0, 0.0, 0.0], [1.0, 0.0]),
    v([0.5, 0.5, 0.5], [1.0, 0.0, 0.0], [1.0, 1.0]),
    // back
    v([-0.5, 0.0, -0.5], [0.0, 0.0, -1.0], [0.0, 0.0]),
    v([0.5, 0.5, -0.5], [0.0, 0.0, -1.0], [1.0, 1.0]),
    v([-0.5, 0.5, -0.5], [0.0, 0.0, -1.0], [0.0, 1.0]),
    v([-0.5, 0.0, -0.5], [0.0, 0.0, -1.0], [0.0, 0.0]),
    v([0.5, 0.5, -0.5], [0.0, 0.0, -1.0], [1.0, 1.0]),
    v([0.5, 0.0, -0.5], [0.0, 0.0, -1.0], [1.0, 0.0]),
];

/// Covers and spine of the book. The fore-edge side is left open for the pages.
pub const BOOK_COVER: &[Vertex] = &[
    // left side
    v([-0.5, 0.0, 1.0], [-1.0, 0.0, 0.0], [1.0, 0.0]),
    v([-0.5, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 0.0]),
    v([-0.5, 3.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0]),
    v([-0.5, 3.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0]),
    v([-0.5, 0.0, 1.0], [-1.0, 0.0, 0.0], [1.0, 0.0]),
    v([-0.5, 3.0, 1.0], [-1.0, 0.0, 0.0], [1.0, 1.0]),
    // right side
    v([0.5, 0.0, 1.0], [1.0, 0.0, 0.0], [1.0, 0.0]),
    v([0.5, 0.0, -1.0], [1.0, 0.0, 0.0], [0.0, 0.0]),
    v([0.5, 3.0, -1.0], [1.0, 0.0, 0.0], [0.0, 1.0]),
    v([0.5, 3.0, -1.0], [1.0, 0.0, 0.0], [0.0, 1.0]),
    v([0.5, 0.0, 1.0], [1.0, 0.0, 0.0], [1.0, 0.0]),
    v([0.5, 3.0, 1.0], [1.0, 0.0, 0.0], [1.0, 1.0]),
    // spine
    v([-0.5, 0.0, -1.0], [0.0, 0.0, -1.0], [0.0, 0.0]),
    v([0.5, 3.0, -1.0], [0.0, 0.0, -1.0], [1.0, 1.0]),
    v([-0.5, 3.0, -1.0], [0.0, 0.0, -1.0], [0.0, 1.0]),
    v([-0.5, 0.0, -1.0], [0.0, 0.0, -1.0], [0.0, 0.0]),
    v([0.5, 3.0, -1.0], [0.0, 0.0, -1.0], [1.0, 1.0]),
    v([0.5, 0.0, -1.0], [0.0, 0.0, -1.0], [1.0, 0.0]),
];

/// Page block. The top face samples a horizontal band of the page texture.
pub const BOOK_PAGES: &[Vertex] = &[
    // bottom
    v([-1.0, 0.0, -1.0], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([-1.0, 0.0, 1.0], [0.0, -1.0, 0.0], [0.0, 0.0]),
    v([1.0, 0.0, -1.0], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([-1.0, 0.0, 1.0], [0.0, -1.0, 0.0], [0.0, 0.0]),
    v([1.0, 0.0, -1.0], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([1.0, 0.0, 1.0], [0.0, -1.0, 0.0], [1.0, 0.0]),
    // front
    v([-1.0, 0.0, 1.0], [0.0, 0.0, 1.0], [0.0, 0.0]),
    v([-1.0, 1.0, 1.0], [0.0, 0.0, 1.0], [0.0, 1.0]),
    v([1.0, 1.0, 1.0], [0.0, 0.0, 1.0], [1.0, 1.0]),
    v([1.0, 1.0, 1.0], [0.0, 0.0, 1.0], [1.0, 1.0]),
    v([1.0, 0.0, 1.0], [0.0, 0.0, 1.0], [1.0, 0.0]),
    v([-1.0, 0.0, 1.0], [0.0, 0.0, 1.0], [0.0, 0.0]),
    // top
    v([-1.0, 1.0, -1.0], [0.0, 1.0, 0.0], [0.0, 0.25]),
    v([-1.0, 1.0, 1.0], [0.0, 1.0, 0.0], [0.0, 0.75]),
    v([1.0, 1.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.25]),
    v([1.0, 1.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.25]),
    v([-1.0, 1.0, 1.0], [0.0, 1.0, 0.0], [0.0, 0.75]),
    v([1.0, 1.0, 1.0], [0.0, 1.0, 0.0], [1.0, 0.75]),
];

/// Octagonal prism of unit height: fan base, eight side quads, fan top.
pub const WAND: &[Vertex] = &[
    // base fan
    v([-1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0]),
    v([-0.7, 0.0, -0.7], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([-0.7, 0.0, -0.7], [0.0, -1.0, 0.0], [0.0, 0.0]),
    v([0.0, 0.0, -1.0], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([0.0, 0.0, -1.0], [0.0, -1.0, 0.0], [0.0, 0.0]),
    v([0.7, 0.0, -0.7], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([0.7, 0.0, -0.7], [0.0, -1.0, 0.0], [0.0, 0.0]),
    v([1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0]),
    v([0.7, 0.0, 0.7], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([0.7, 0.0, 0.7], [0.0, -1.0, 0.0], [0.0, 0.0]),
    v([0.0, 0.0, 1.0], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([0.0, 0.0, 1.0], [0.0, -1.0, 0.0], [0.0, 0.0]),
    v([-0.7, 0.0, 0.7], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([-0.7, 0.0, 0.7], [0.0, -1.0, 0.0], [0.0, 0.0]),
    v([-1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [1.0, 1.0]),
    // side 1
    v([-1.0, 0.0, 0.0], [-0.9191, 0.0, -0.3939], [0.0, 0.0]),
    v([-1.0, 1.0, 0.0], [-0.9191, 0.0, -0.3939], [0.0, 1.0]),
    v([-0.7, 1.0, -0.7], [-0.9191, 0.0, -0.3939], [1.0, 1.0]),
    v([-1.0, 0.0, 0.0], [-0.9191, 0.0, -0.3939], [0.0, 0.0]),
    v([-0.7, 0.0, -0.7], [-0.9191, 0.0, -0.3939], [0.0, 1.0]),
    v([-0.7, 1.0, -0.7], [-0.9191, 0.0, -0.3939], [1.0, 1.0]),
    // side 2
    v([-0.7, 0.0, -0.7], [-0.3939, 0.0, -0.9191], [0.0, 0.0]),
    v([-0.7, 1.0, -0.7], [-0.3939, 0.0, -0.9191], [0.0, 1.0]),
    v([0.0, 1.0, -1.0], [-0.3939, 0.0, -0.9191], [1.0, 1.0]),
    v([-0.7, 0.0, -0.7], [-0.3939, 0.0, -0.9191], [0.0, 0.0]),
    v([0.0, 0.0, -1.0], [-0.3939, 0.0, -0.9191], [0.0, 1.0]),
    v([0.0, 1.0, -1.0], [-0.3939, 0.0, -0.9191], [1.0, 1.0]),
    // side 3
    v([0.0, 0.0, -1.0], [0.3939, 0.0, -0.9191], [0.0, 0.0]),
    v([0.0, 1.0, -1.0], [0.3939, 0.0, -0.9191], [0.0, 1.0]),
    v([0.7, 1.0, -0.7], [0.3939, 0.0, -0.9191], [1.0, 1.0]),
    v([0.0, 0.0, -1.0], [0.3939, 0.0, -0.9191], [0.0, 0.0]),
    v([0.7, 0.0, -0.7], [0.3939, 0.0, -0.9191], [0.0, 1.0]),
    v([0.7, 1.0, -0.7], [0.3939, 0.0, -0.9191], [1.0, 1.0]),
    // side 4
    v([0.7, 0.0, -0.7], [0.9191, 0.0, -0.3939], [0.0, 0.0]),
    v([0.7, 1.0, -0.7], [0.9191, 0.0, -0.3939], [0.0, 1.0]),
    v([1.0, 1.0, 0.0], [0.9191, 0.0, -0.3939], [1.0, 1.0]),
    v([0.7, 0.0, -0.7], [0.9191, 0.0, -0.3939], [0.0, 0.0]),
    v([1.0, 0.0, 0.0], [0.9191, 0.0, -0.3939], [0.0, 1.0]),
    v([1.0, 1.0, 0.0], [0.9191, 0.0, -0.3939], [1.0, 1.0]),
    // side 5
    v([1.0, 0.0, 0.0], [0.9191, 0.0, 0.3939], [0.0, 0.0]),
    v([1.0, 1.0, 0.0], [0.9191, 0.0, 0.3939], [0.0, 1.0]),
    v([0.7, 1.0, 0.7], [0.9191, 0.0, 0.3939], [1.0, 1.0]),
    v([1.0, 0.0, 0.0], [0.9191, 0.0, 0.3939], [0.0, 0.0]),
    v([0.7, 0.0, 0.7], [0.9191, 0.0, 0.3939], [0.0, 1.0]),
    v([0.7, 1.0, 0.7], [0.9191, 0.0, 0.3939], [1.0, 1.0]),
    // side 6
    v([0.7, 0.0, 0.7], [0.3939, 0.0, 0.9191], [0.0, 0.0]),
    v([0.7, 1.0, 0.7], [0.3939, 0.0, 0.9191], [0.0, 1.0]),
    v([0.0, 1.0, 1.0], [0.3939, 0.0, 0.9191], [1.0, 1.0]),
    v([0.7, 0.0, 0.7], [0.3939, 0.0, 0.9191], [0.0, 0.0]),
    v([0.0, 0.0, 1.0], [0.3939, 0.0, 0.9191], [0.0, 1.0]),
    v([0.0, 1.0, 1.0], [0.3939, 0.0, 0.9191], [1.0, 1.0]),
    // side 7
    v([0.0, 0.0, 1.0], [-0.3939, 0.0, 0.9191], [0.0, 0.0]),
    v([0.0, 1.0, 1.0], [-0.3939, 0.0, 0.9191], [0.0, 1.0]),
    v([-0.7, 1.0, 0.7], [-0.3939, 0.0, 0.9191], [1.0, 1.0]),
    v([0.0, 0.0, 1.0], [-0.3939, 0.0, 0.9191], [0.0, 0.0]),
    v([-0.7, 0.0, 0.7], [-0.3939, 0.0, 0.9191], [0.0, 1.0]),
    v([-0.7, 1.0, 0.7], [-0.3939, 0.0, 0.9191], [1.0, 1.0]),
    // side 8
    v([-0.7, 0.0, 0.7], [-0.9191, 0.0, 0.3939], [0.0, 0.0]),
    v([-0.7, 1.0, 0.7], [-0.9191, 0.0, 0.3939], [0.0, 1.0]),
    v([-1.0, 1.0, 0.0], [-0.9191, 0.0, 0.3939], [1.0, 1.0]),
    v([-0.7, 0.0, 0.7], [-0.9191, 0.0, 0.3939], [0.0, 0.0]),
    v([-1.0, 0.0, 0.0], [-0.9191, 0.0, 0.3939], [0.0, 1.0]),
    v([-1.0, 1.0, 0.0], [-0.9191, 0.0, 0.3939], [1.0, 1.0]),
    // top
    v([-1.0, 1.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([-0.7, 1.0, -0.7], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([0.0, 1.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0]),
    v([-0.7, 1.0, -0.7], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([0.0, 1.0, -1.0], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([0.0, 1.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0]),
    v([0.0, 1.0, -1.0], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([0.7, 1.0, -0.7], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([0.0, 1.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0]),
    v([0.7, 1.0, -0.7], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([1.0, 1.0, 0.0], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([0.0, 1.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0]),
    v([1.0, 1.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([0.7, 1.0, 0.7], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([0.0, 1.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0]),
    v([0.7, 1.0, 0.7], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([0.0, 1.0, 1.0], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([0.0, 1.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0]),
    v([0.0, 1.0, 1.0], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([-0.7, 1.0, 0.7], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([0.0, 1.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0]),
    v([-0.7, 1.0, 0.7], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([-1.0, 1.0, 0.0], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([0.0, 1.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0]),
];

/// Flared cup: twenty-wedge base fan, twenty side quads, and a squared-off handle on +X.
pub const MUG: &[Vertex] = &[
    // base fan
    v([-1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([-0.951, 0.0, -0.309], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.5, 0.0]),
    v([-0.951, 0.0, -0.309], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([-0.809, 0.0, -0.588], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.5, 0.0]),
    v([-0.809, 0.0, -0.588], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([-0.588, 0.0, -0.809], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.5, 0.0]),
    v([-0.588, 0.0, -0.809], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([-0.309, 0.0, -0.951], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.5, 0.0]),
    v([-0.309, 0.0, -0.951], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([0.0, 0.0, -1.0], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.5, 0.0]),
    v([0.0, 0.0, -1.0], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([0.309, 0.0, -0.951], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.5, 0.0]),
    v([0.309, 0.0, -0.951], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([0.588, 0.0, -0.809], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.5, 0.0]),
    v([0.588, 0.0, -0.809], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([0.809, 0.0, -0.588], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.5, 0.0]),
    v([0.809, 0.0, -0.588], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([0.951, 0.0, -0.309], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.5, 0.0]),
    v([0.951, 0.0, -0.309], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.5, 0.0]),
    v([1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([0.951, 0.0, 0.309], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.5, 0.0]),
    v([0.951, 0.0, 0.309], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([0.809, 0.0, 0.588], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.5, 0.0]),
    v([0.809, 0.0, 0.588], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([0.588, 0.0, 0.809], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.5, 0.0]),
    v([0.588, 0.0, 0.809], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([0.309, 0.0, 0.951], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.5, 0.0]),
    v([0.309, 0.0, 0.951], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([0.0, 0.0, 1.0], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.5, 0.0]),
    v([0.0, 0.0, 1.0], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([-0.309, 0.0, 0.951], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.5, 0.0]),
    v([-0.309, 0.0, 0.951], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([-0.588, 0.0, 0.809], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.5, 0.0]),
    v([-0.588, 0.0, 0.809], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([-0.809, 0.0, 0.588], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.5, 0.0]),
    v([-0.809, 0.0, 0.588], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([-0.951, 0.0, 0.309], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.5, 0.0]),
    v([-0.951, 0.0, 0.309], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([-1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.5, 0.0]),
    // side 1
    v([0.0, 0.0, 1.0], [0.1541, -0.1938, 0.9689], [0.0, 0.0]),
    v([0.0, 1.0, 1.2], [0.1541, -0.1938, 0.9689], [0.0, 1.0]),
    v([0.371, 1.0, 1.141], [0.1541, -0.1938, 0.9689], [1.0, 1.0]),
    v([0.0, 0.0, 1.0], [0.1537, -0.1936, 0.969], [0.0, 0.0]),
    v([0.371, 1.0, 1.141], [0.1537, -0.1936, 0.969], [1.0, 1.0]),
    v([0.309, 0.0, 0.951], [0.1537, -0.1936, 0.969], [1.0, 0.0]),
    // side 2
    v([0.309, 0.0, 0.951], [0.444, -0.1937, 0.8749], [0.0, 0.0]),
    v([0.371, 1.0, 1.141], [0.444, -0.1937, 0.8749], [0.0, 1.0]),
    v([0.706, 1.0, 0.971], [0.444, -0.1937, 0.8749], [1.0, 1.0]),
    v([0.309, 0.0, 0.951], [0.445, -0.1941, 0.8743], [0.0, 0.0]),
    v([0.706, 1.0, 0.971], [0.445, -0.1941, 0.8743], [1.0, 1.0]),
    v([0.588, 0.0, 0.809], [0.445, -0.1941, 0.8743], [1.0, 0.0]),
    // side 3
    v([0.588, 0.0, 0.809], [0.6936, -0.1942, 0.6936], [0.0, 0.0]),
    v([0.706, 1.0, 0.971], [0.6936, -0.1942, 0.6936], [0.0, 1.0]),
    v([0.971, 1.0, 0.706], [0.6936, -0.1942, 0.6936], [1.0, 1.0]),
    v([0.588, 0.0, 0.809], [0.6936, -0.1942, 0.6936], [0.0, 0.0]),
    v([0.971, 1.0, 0.706], [0.6936, -0.1942, 0.6936], [1.0, 1.0]),
    v([0.809, 0.0, 0.588], [0.6936, -0.1942, 0.6936], [1.0, 0.0]),
    // side 4
    v([0.809, 0.0, 0.588], [0.8748, -0.1941, 0.4439], [0.0, 0.0]),
    v([0.971, 1.0, 0.706], [0.8748, -0.1941, 0.4439], [0.0, 1.0]),
    v([1.141, 1.0, 0.371], [0.8748, -0.1941, 0.4439], [1.0, 1.0]),
    v([0.809, 0.0, 0.588], [0.8743, -0.1937, 0.445], [0.0, 0.0]),
    v([1.141, 1.0, 0.371], [0.8743, -0.1937, 0.445], [1.0, 1.0]),
    v([0.951, 0.0, 0.309], [0.8743, -0.1937, 0.445], [1.0, 0.0]),
    // side 5
    v([0.951, 0.0, 0.309], [0.9689, -0.1936, 0.1541], [0.0, 0.0]),
    v([1.141, 1.0, 0.371], [0.9689, -0.1936, 0.1541], [0.0, 1.0]),
    v([1.2, 1.0, 0.0], [0.9689, -0.1936, 0.1541], [1.0, 1.0]),
    v([0.951, 0.0, 0.309], [0.9689, -0.1938, 0.1537], [0.0, 0.0]),
    v([1.2, 1.0, 0.0], [0.9689, -0.1938, 0.1537], [1.0, 1.0]),
    v([1.0, 0.0, 0.0], [0.9689, -0.1938, 0.1537], [1.0, 0.0]),
    // side 6
    v([1.0, 0.0, 0.0], [0.9689, -0.1938, -0.1541], [0.0, 0.0]),
    v([1.2, 1.0, 0.0], [0.9689, -0.1938, -0.1541], [0.0, 1.0]),
    v([1.141, 1.0, -0.371], [0.9689, -0.1938, -0.1541], [1.0, 1.0]),
    v([1.0, 0.0, 0.0], [0.969, -0.1936, -0.1537], [0.0, 0.0]),
    v([1.141, 1.0, -0.371], [0.969, -0.1936, -0.1537], [1.0, 1.0]),
    v([0.951, 0.0, -0.309], [0.969, -0.1936, -0.1537], [1.0, 0.0]),
    // side 7
    v([0.951, 0.0, -0.309], [0.8749, -0.1937, -0.444], [0.0, 0.0]),
    v([1.141, 1.0, -0.371], [0.8749, -0.1937, -0.444], [0.0, 1.0]),
    v([0.971, 1.0, -0.706], [0.8749, -0.1937, -0.444], [1.0, 1.0]),
    v([0.951, 0.0, -0.309], [0.8743, -0.1941, -0.445], [0.0, 0.0]),
    v([0.971, 1.0, -0.706], [0.8743, -0.1941, -0.445], [1.0, 1.0]),
    v([0.809, 0.0, -0.588], [0.8743, -0.1941, -0.445], [1.0, 0.0]),
    // side 8
    v([0.809, 0.0, -0.588], [0.6936, -0.1942, -0.6936], [0.0, 0.0]),
    v([0.971, 1.0, -0.706], [0.6936, -0.1942, -0.6936], [0.0, 1.0]),
    v([0.706, 1.0, -0.971], [0.6936, -0.1942, -0.6936], [1.0, 1.0]),
    v([0.809, 0.0, -0.588], [0.6936, -0.1942, -0.6936], [0.0, 0.0]),
    v([0.706, 1.0, -0.971], [0.6936, -0.1942, -0.6936], [1.0, 1.0]),
    v([0.588, 0.0, -0.809], [0.6936, -0.1942, -0.6936], [1.0, 0.0]),
    // side 9
    v([0.588, 0.0, -0.809], [0.4439, -0.1941, -0.8748], [0.0, 0.0]),
    v([0.706, 1.0, -0.971], [0.4439, -0.1941, -0.8748], [0.0, 1.0]),
    v([0.371, 1.0, -1.141], [0.4439, -0.1941, -0.8748], [1.0, 1.0]),
    v([0.588, 0.0, -0.809], [0.445, -0.1937, -0.8743], [0.0, 0.0]),
    v([0.371, 1.0, -1.141], [0.445, -0.1937, -0.8743], [1.0, 1.0]),
    v([0.309, 0.0, -0.951], [0.445, -0.1937, -0.8743], [1.0, 0.0]),
    // side 10
    v([0.309, 0.0, -0.951], [0.1541, -0.1936, -0.9689], [0.0, 0.0]),
    v([0.371, 1.0, -1.141], [0.1541, -0.1936, -0.9689], [0.0, 1.0]),
    v([0.0, 1.0, -1.2], [0.1541, -0.1936, -0.9689], [1.0, 1.0]),
    v([0.309, 0.0, -0.951], [0.1537, -0.1938, -0.9689], [0.0, 0.0]),
    v([0.0, 1.0, -1.2], [0.1537, -0.1938, -0.9689], [1.0, 1.0]),
    v([0.0, 0.0, -1.0], [0.1537, -0.1938, -0.9689], [1.0, 0.0]),
    // side 11
    v([0.0, 0.0, -1.0], [-0.1541, -0.1938, -0.9689], [0.0, 0.0]),
    v([0.0, 1.0, -1.2], [-0.1541, -0.1938, -0.9689], [0.0, 1.0]),
    v([-0.371, 1.0, -1.141], [-0.1541, -0.1938, -0.9689], [1.0, 1.0]),
    v([0.0, 0.0, -1.0], [-0.1537, -0.1936, -0.969], [0.0, 0.0]),
    v([-0.371, 1.0, -1.141], [-0.1537, -0.1936, -0.969], [1.0, 1.0]),
    v([-0.309, 0.0, -0.951], [-0.1537, -0.1936, -0.969], [1.0, 0.0]),
    // side 12
    v([-0.309, 0.0, -0.951], [-0.444, -0.1937, -0.8749], [0.0, 0.0]),
    v([-0.371, 1.0, -1.141], [-0.444, -0.1937, -0.8749], [0.0, 1.0]),
    v([-0.706, 1.0, -0.971], [-0.444, -0.1937, -0.8749], [1.0, 1.0]),
    v([-0.309, 0.0, -0.951], [-0.445, -0.1941, -0.8743], [0.0, 0.0]),
    v([-0.706, 1.0, -0.971], [-0.445, -0.1941, -0.8743], [1.0, 1.0]),
    v([-0.588, 0.0, -0.809], [-0.445, -0.1941, -0.8743], [1.0, 0.0]),
    // side 13
    v([-0.588, 0.0, -0.809], [-0.6936, -0.1942, -0.6936], [0.0, 0.0]),
    v([-0.706, 1.0, -0.971], [-0.6936, -0.1942, -0.6936], [0.0, 1.0]),
    v([-0.971, 1.0, -0.706], [-0.6936, -0.1942, -0.6936], [1.0, 1.0]),
    v([-0.588, 0.0, -0.809], [-0.6936, -0.1942, -0.6936], [0.0, 0.0]),
    v([-0.971, 1.0, -0.706], [-0.6936, -0.1942, -0.6936], [1.0, 1.0]),
    v([-0.809, 0.0, -0.588], [-0.6936, -0.1942, -0.6936], [1.0, 0.0]),
    // side 14
    v([-0.809, 0.0, -0.588], [-0.8748, -0.1941, -0.4439], [0.0, 0.0]),
    v([-0.971, 1.0, -0.706], [-0.8748, -0.1941, -0.4439], [0.0, 1.0]),
    v([-1.141, 1.0, -0.371], [-0.8748, -0.1941, -0.4439], [1.0, 1.0]),
    v([-0.809, 0.0, -0.588], [-0.8743, -0.1937, -0.445], [0.0, 0.0]),
    v([-1.141, 1.0, -0.371], [-0.8743, -0.1937, -0.445], [1.0, 1.0]),
    v([-0.951, 0.0, -0.309], [-0.8743, -0.1937, -0.445], [1.0, 0.0]),
    // side 15
    v([-0.951, 0.0, -0.309], [-0.9689, -0.1936, -0.1541], [0.0, 0.0]),
    v([-1.141, 1.0, -0.371], [-0.9689, -0.1936, -0.1541], [0.0, 1.0]),
    v([-1.2, 1.0, 0.0], [-0.9689, -0.1936, -0.1541], [1.0, 1.0]),
    v([-0.951, 0.0, -0.309], [-0.9689, -0.1938, -0.1537], [0.0, 0.0]),
    v([-1.2, 1.0, 0.0], [-0.9689, -0.1938, -0.1537], [1.0, 1.0]),
    v([-1.0, 0.0, 0.0], [-0.9689, -0.1938, -0.1537], [1.0, 0.0]),
    // side 16
    v([-1.0, 0.0, 0.0], [-0.9689, -0.1938, 0.1541], [0.0, 0.0]),
    v([-1.2, 1.0, 0.0], [-0.9689, -0.1938, 0.1541], [0.0, 1.0]),
    v([-1.141, 1.0, 0.371], [-0.9689, -0.1938, 0.1541], [1.0, 1.0]),
    v([-1.0, 0.0, 0.0], [-0.969, -0.1936, 0.1537], [0.0, 0.0]),
    v([-1.141, 1.0, 0.371], [-0.969, -0.1936, 0.1537], [1.0, 1.0]),
    v([-0.951, 0.0, 0.309], [-0.969, -0.1936, 0.1537], [1.0, 0.0]),
    // side 17
    v([-0.951, 0.0, 0.309], [-0.8749, -0.1937, 0.444], [0.0, 0.0]),
    v([-1.141, 1.0, 0.371], [-0.8749, -0.1937, 0.444], [0.0, 1.0]),
    v([-0.971, 1.0, 0.706], [-0.8749, -0.1937, 0.444], [1.0, 1.0]),
    v([-0.951, 0.0, 0.309], [-0.8743, -0.1941, 0.445], [0.0, 0.0]),
    v([-0.971, 1.0, 0.706], [-0.8743, -0.1941, 0.445], [1.0, 1.0]),
    v([-0.809, 0.0, 0.588], [-0.8743, -0.1941, 0.445], [1.0, 0.0]),
    // side 18
    v([-0.809, 0.0, 0.588], [-0.6936, -0.1942, 0.6936], [0.0, 0.0]),
    v([-0.971, 1.0, 0.706], [-0.6936, -0.1942, 0.6936], [0.0, 1.0]),
    v([-0.706, 1.0, 0.971], [-0.6936, -0.1942, 0.6936], [1.0, 1.0]),
    v([-0.809, 0.0, 0.588], [-0.6936, -0.1942, 0.6936], [0.0, 0.0]),
    v([-0.706, 1.0, 0.971], [-0.6936, -0.1942, 0.6936], [1.0, 1.0]),
    v([-0.588, 0.0, 0.809], [-0.6936, -0.1942, 0.6936], [1.0, 0.0]),
    // side 19
    v([-0.588, 0.0, 0.809], [-0.4439, -0.1941, 0.8748], [0.0, 0.0]),
    v([-0.706, 1.0, 0.971], [-0.4439, -0.1941, 0.8748], [0.0, 1.0]),
    v([-0.371, 1.0, 1.141], [-0.4439, -0.1941, 0.8748], [1.0, 1.0]),
    v([-0.588, 0.0, 0.809], [-0.445, -0.1937, 0.8743], [0.0, 0.0]),
    v([-0.371, 1.0, 1.141], [-0.445, -0.1937, 0.8743], [1.0, 1.0]),
    v([-0.309, 0.0, 0.951], [-0.445, -0.1937, 0.8743], [1.0, 0.0]),
    // side 20
    v([-0.309, 0.0, 0.951], [-0.1541, -0.1936, 0.9689], [0.0, 0.0]),
    v([-0.371, 1.0, 1.141], [-0.1541, -0.1936, 0.9689], [0.0, 1.0]),
    v([0.0, 1.0, 1.2], [-0.1541, -0.1936, 0.9689], [1.0, 1.0]),
    v([-0.309, 0.0, 0.951], [-0.1537, -0.1938, 0.9689], [0.0, 0.0]),
    v([0.0, 1.0, 1.2], [-0.1537, -0.1938, 0.9689], [1.0, 1.0]),
    v([0.0, 0.0, 1.0], [-0.1537, -0.1938, 0.9689], [1.0, 0.0]),
    // handle, upper arm
    v([1.55, 0.66, -0.1], [1.0, 0.0, 0.0], [0.0, 0.0]),
    v([1.55, 0.78, -0.1], [1.0, 0.0, 0.0], [1.0, 0.0]),
    v([1.55, 0.78, 0.1], [1.0, 0.0, 0.0], [1.0, 1.0]),
    v([1.55, 0.66, -0.1], [1.0, 0.0, 0.0], [0.0, 0.0]),
    v([1.55, 0.78, 0.1], [1.0, 0.0, 0.0], [1.0, 1.0]),
    v([1.55, 0.66, 0.1], [1.0, 0.0, 0.0], [0.0, 1.0]),
    v([1.08, 0.66, 0.1], [-1.0, 0.0, 0.0], [0.0, 0.0]),
    v([1.08, 0.78, 0.1], [-1.0, 0.0, 0.0], [1.0, 0.0]),
    v([1.08, 0.78, -0.1], [-1.0, 0.0, 0.0], [1.0, 1.0]),
    v([1.08, 0.66, 0.1], [-1.0, 0.0, 0.0], [0.0, 0.0]),
    v([1.08, 0.78, -0.1], [-1.0, 0.0, 0.0], [1.0, 1.0]),
    v([1.08, 0.66, -0.1], [-1.0, 0.0, 0.0], [0.0, 1.0]),
    v([1.08, 0.78, -0.1], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([1.08, 0.78, 0.1], [0.0, 1.0, 0.0], [1.0, 0.0]),
    v([1.55, 0.78, 0.1], [0.0, 1.0, 0.0], [1.0, 1.0]),
    v([1.08, 0.78, -0.1], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([1.55, 0.78, 0.1], [0.0, 1.0, 0.0], [1.0, 1.0]),
    v([1.55, 0.78, -0.1], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([1.08, 0.66, 0.1], [0.0, -1.0, 0.0], [0.0, 0.0]),
    v([1.08, 0.66, -0.1], [0.0, -1.0, 0.0], [1.0, 0.0]),
    v([1.55, 0.66, -0.1], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([1.08, 0.66, 0.1], [0.0, -1.0, 0.0], [0.0, 0.0]),
    v([1.55, 0.66, -0.1], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([1.55, 0.66, 0.1], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([1.08, 0.66, 0.1], [0.0, 0.0, 1.0], [0.0, 0.0]),
    v([1.55, 0.66, 0.1], [0.0, 0.0, 1.0], [1.0, 0.0]),
    v([1.55, 0.78, 0.1], [0.0, 0.0, 1.0], [1.0, 1.0]),
    v([1.08, 0.66, 0.1], [0.0, 0.0, 1.0], [0.0, 0.0]),
    v([1.55, 0.78, 0.1], [0.0, 0.0, 1.0], [1.0, 1.0]),
    v([1.08, 0.78, 0.1], [0.0, 0.0, 1.0], [0.0, 1.0]),
    v([1.55, 0.66, -0.1], [0.0, 0.0, -1.0], [0.0, 0.0]),
    v([1.08, 0.66, -0.1], [0.0, 0.0, -1.0], [1.0, 0.0]),
    v([1.08, 0.78, -0.1], [0.0, 0.0, -1.0], [1.0, 1.0]),
    v([1.55, 0.66, -0.1], [0.0, 0.0, -1.0], [0.0, 0.0]),
    v([1.08, 0.78, -0.1], [0.0, 0.0, -1.0], [1.0, 1.0]),
    v([1.55, 0.78, -0.1], [0.0, 0.0, -1.0], [0.0, 1.0]),
    // handle, grip
    v([1.57, 0.22, -0.1], [1.0, 0.0, 0.0], [0.0, 0.0]),
    v([1.57, 0.78, -0.1], [1.0, 0.0, 0.0], [1.0, 0.0]),
    v([1.57, 0.78, 0.1], [1.0, 0.0, 0.0], [1.0, 1.0]),
    v([1.57, 0.22, -0.1], [1.0, 0.0, 0.0], [0.0, 0.0]),
    v([1.57, 0.78, 0.1], [1.0, 0.0, 0.0], [1.0, 1.0]),
    v([1.57, 0.22, 0.1], [1.0, 0.0, 0.0], [0.0, 1.0]),
    v([1.45, 0.22, 0.1], [-1.0, 0.0, 0.0], [0.0, 0.0]),
    v([1.45, 0.78, 0.1], [-1.0, 0.0, 0.0], [1.0, 0.0]),
    v([1.45, 0.78, -0.1], [-1.0, 0.0, 0.0], [1.0, 1.0]),
    v([1.45, 0.22, 0.1], [-1.0, 0.0, 0.0], [0.0, 0.0]),
    v([1.45, 0.78, -0.1], [-1.0, 0.0, 0.0], [1.0, 1.0]),
    v([1.45, 0.22, -0.1], [-1.0, 0.0, 0.0], [0.0, 1.0]),
    v([1.45, 0.78, -0.1], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([1.45, 0.78, 0.1], [0.0, 1.0, 0.0], [1.0, 0.0]),
    v([1.57, 0.78, 0.1], [0.0, 1.0, 0.0], [1.0, 1.0]),
    v([1.45, 0.78, -0.1], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([1.57, 0.78, 0.1], [0.0, 1.0, 0.0], [1.0, 1.0]),
    v([1.57, 0.78, -0.1], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([1.45, 0.22, 0.1], [0.0, -1.0, 0.0], [0.0, 0.0]),
    v([1.45, 0.22, -0.1], [0.0, -1.0, 0.0], [1.0, 0.0]),
    v([1.57, 0.22, -0.1], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([1.45, 0.22, 0.1], [0.0, -1.0, 0.0], [0.0, 0.0]),
    v([1.57, 0.22, -0.1], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([1.57, 0.22, 0.1], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([1.45, 0.22, 0.1], [0.0, 0.0, 1.0], [0.0, 0.0]),
    v([1.57, 0.22, 0.1], [0.0, 0.0, 1.0], [1.0, 0.0]),
    v([1.57, 0.78, 0.1], [0.0, 0.0, 1.0], [1.0, 1.0]),
    v([1.45, 0.22, 0.1], [0.0, 0.0, 1.0], [0.0, 0.0]),
    v([1.57, 0.78, 0.1], [0.0, 0.0, 1.0], [1.0, 1.0]),
    v([1.45, 0.78, 0.1], [0.0, 0.0, 1.0], [0.0, 1.0]),
    v([1.57, 0.22, -0.1], [0.0, 0.0, -1.0], [0.0, 0.0]),
    v([1.45, 0.22, -0.1], [0.0, 0.0, -1.0], [1.0, 0.0]),
    v([1.45, 0.78, -0.1], [0.0, 0.0, -1.0], [1.0, 1.0]),
    v([1.57, 0.22, -0.1], [0.0, 0.0, -1.0], [0.0, 0.0]),
    v([1.45, 0.78, -0.1], [0.0, 0.0, -1.0], [1.0, 1.0]),
    v([1.57, 0.78, -0.1], [0.0, 0.0, -1.0], [0.0, 1.0]),
    // handle, lower arm
    v([1.55, 0.22, -0.1], [1.0, 0.0, 0.0], [0.0, 0.0]),
    v([1.55, 0.34, -0.1], [1.0, 0.0, 0.0], [1.0, 0.0]),
    v([1.55, 0.34, 0.1], [1.0, 0.0, 0.0], [1.0, 1.0]),
    v([1.55, 0.22, -0.1], [1.0, 0.0, 0.0], [0.0, 0.0]),
    v([1.55, 0.34, 0.1], [1.0, 0.0, 0.0], [1.0, 1.0]),
    v([1.55, 0.22, 0.1], [1.0, 0.0, 0.0], [0.0, 1.0]),
    v([1.0, 0.22, 0.1], [-1.0, 0.0, 0.0], [0.0, 0.0]),
    v([1.0, 0.34, 0.1], [-1.0, 0.0, 0.0], [1.0, 0.0]),
    v([1.0, 0.34, -0.1], [-1.0, 0.0, 0.0], [1.0, 1.0]),
    v([1.0, 0.22, 0.1], [-1.0, 0.0, 0.0], [0.0, 0.0]),
    v([1.0, 0.34, -0.1], [-1.0, 0.0, 0.0], [1.0, 1.0]),
    v([1.0, 0.22, -0.1], [-1.0, 0.0, 0.0], [0.0, 1.0]),
    v([1.0, 0.34, -0.1], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([1.0, 0.34, 0.1], [0.0, 1.0, 0.0], [1.0, 0.0]),
    v([1.55, 0.34, 0.1], [0.0, 1.0, 0.0], [1.0, 1.0]),
    v([1.0, 0.34, -0.1], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([1.55, 0.34, 0.1], [0.0, 1.0, 0.0], [1.0, 1.0]),
    v([1.55, 0.34, -0.1], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([1.0, 0.22, 0.1], [0.0, -1.0, 0.0], [0.0, 0.0]),
    v([1.0, 0.22, -0.1], [0.0, -1.0, 0.0], [1.0, 0.0]),
    v([1.55, 0.22, -0.1], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([1.0, 0.22, 0.1], [0.0, -1.0, 0.0], [0.0, 0.0]),
    v([1.55, 0.22, -0.1], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([1.55, 0.22, 0.1], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([1.0, 0.22, 0.1], [0.0, 0.0, 1.0], [0.0, 0.0]),
    v([1.55, 0.22, 0.1], [0.0, 0.0, 1.0], [1.0, 0.0]),
    v([1.55, 0.34, 0.1], [0.0, 0.0, 1.0], [1.0, 1.0]),
    v([1.0, 0.22, 0.1], [0.0, 0.0, 1.0], [0.0, 0.0]),
    v([1.55, 0.34, 0.1], [0.0, 0.0, 1.0], [1.0, 1.0]),
    v([1.0, 0.34, 0.1], [0.0, 0.0, 1.0], [0.0, 1.0]),
    v([1.55, 0.22, -0.1], [0.0, 0.0, -1.0], [0.0, 0.0]),
    v([1.0, 0.22, -0.1], [0.0, 0.0, -1.0], [1.0, 0.0]),
    v([1.0, 0.34, -0.1], [0.0, 0.0, -1.0], [1.0, 1.0]),
    v([1.55, 0.22, -0.1], [0.0, 0.0, -1.0], [0.0, 0.0]),
    v([1.0, 0.34, -0.1], [0.0, 0.0, -1.0], [1.0, 1.0]),
    v([1.55, 0.34, -0.1], [0.0, 0.0, -1.0], [0.0, 1.0]),
];
