use super::mesh::GpuMesh;
use super::program::Program;
use super::texture::GpuTexture;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MeshId(usize);

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureId(usize);

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ProgramId(usize);

impl MeshId {
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }
}

impl TextureId {
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }
}

impl ProgramId {
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }
}

/// Owns every GPU resource of a scene.
///
/// Resources are added at startup and never removed; handles stay valid for
/// the lifetime of the set. Everything is released when the set drops.
#[derive(Default)]
pub struct ResourceSet {
    meshes: Vec<GpuMesh>,
    textures: Vec<GpuTexture>,
    programs: Vec<Program>,
}

impl ResourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_mesh(&mut self, mesh: GpuMesh) -> MeshId {
        self.meshes.push(mesh);
        MeshId(self.meshes.len() - 1)
    }

    pub fn add_texture(&mut self, texture: GpuTexture) -> TextureId {
        self.textures.push(texture);
        TextureId(self.textures.len() - 1)
    }

    pub fn add_program(&mut self, program: Program) -> ProgramId {
        self.programs.push(program);
        ProgramId(self.programs.len() - 1)
    }

    pub fn mesh(&self, id: MeshId) -> Option<&GpuMesh> {
        self.meshes.get(id.0)
    }

    pub fn texture(&self, id: TextureId) -> Option<&GpuTexture> {
        self.textures.get(id.0)
    }

    pub fn program(&self, id: ProgramId) -> Option<&Program> {
        self.programs.get(id.0)
    }

    /// `(meshes, textures, programs)`
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.meshes.len(), self.textures.len(), self.programs.len())
    }
}

impl Drop for ResourceSet {
    fn drop(&mut self) {
        let (meshes, textures, programs) = self.counts();
        log::debug!("releasing {meshes} meshes, {textures} textures, {programs} programs");
    }
}
