mod light;
mod mesh;

pub use light::{SpotLight, SpotLightShadow};
pub use mesh::{Material, Mesh, Side};

/// Index of a mesh inside its [`Scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(usize);

/// Index of a light inside its [`Scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LightHandle(usize);

/// Container owning every renderable object and light
///
/// Objects are never removed, so handles stay valid for the scene's lifetime.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    meshes: Vec<Mesh>,
    lights: Vec<SpotLight>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_mesh(&mut self, mesh: Mesh) -> MeshHandle {
        log::debug!("Adding mesh '{}' ({})", mesh.name, mesh.geometry.name());
        self.meshes.push(mesh);
        MeshHandle(self.meshes.len() - 1)
    }

    pub fn add_light(&mut self, light: SpotLight) -> LightHandle {
        self.lights.push(light);
        LightHandle(self.lights.len() - 1)
    }

    pub fn mesh(&self, handle: MeshHandle) -> &Mesh {
        &self.meshes[handle.0]
    }

    pub fn mesh_mut(&mut self, handle: MeshHandle) -> &mut Mesh {
        &mut self.meshes[handle.0]
    }

    pub fn light(&self, handle: LightHandle) -> &SpotLight {
        &self.lights[handle.0]
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn lights(&self) -> &[SpotLight] {
        &self.lights
    }
}
