use crate::camera::PerspectiveCamera;
use crate::scene::{Mesh, Side, SpotLight};

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub _pad: f32,
}

impl CameraUniform {
    pub fn from_camera(camera: &PerspectiveCamera) -> Self {
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            position: camera.position.to_array(),
            _pad: 0.0,
        }
    }
}

/// Spotlight uniform; also carries the shadow camera
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub distance: f32,
    pub direction: [f32; 3],
    pub decay: f32,
    /// Color premultiplied by intensity
    pub color: [f32; 3],
    pub cone_cos: f32,
    pub penumbra_cos: f32,
    pub shadow_enabled: u32,
    /// Size of one shadow-map texel in UV units
    pub shadow_texel: f32,
    pub _pad: f32,
}

impl LightUniform {
    pub fn from_light(light: &SpotLight, shadows: bool) -> Self {
        let c = light.color;
        Self {
            view_proj: light.shadow_view_projection().to_cols_array_2d(),
            position: light.position.to_array(),
            distance: light.distance,
            direction: light.direction().to_array(),
            decay: light.decay,
            color: [
                c.r * light.intensity,
                c.g * light.intensity,
                c.b * light.intensity,
            ],
            cone_cos: light.cone_cos(),
            penumbra_cos: light.penumbra_cos(),
            shadow_enabled: (shadows && light.cast_shadow) as u32,
            shadow_texel: 1.0 / light.shadow.map_size.max(1) as f32,
            _pad: 0.0,
        }
    }
}

/// Per-mesh uniform: transforms and material flags
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshUniform {
    pub model: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub wireframe: u32,
    pub textured: u32,
    pub receive_shadow: u32,
    pub double_sided: u32,
}

impl MeshUniform {
    pub fn from_mesh(mesh: &Mesh, textured: bool) -> Self {
        let material = &mesh.material;
        let [r, g, b] = material.color.to_array();
        Self {
            model: mesh.transform.matrix().to_cols_array_2d(),
            normal_matrix: mesh.transform.normal_matrix().to_cols_array_2d(),
            color: [r, g, b, 1.0],
            wireframe: material.wireframe as u32,
            textured: textured as u32,
            receive_shadow: mesh.receive_shadow as u32,
            double_sided: (material.side == Side::Double) as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Geometry;
    use crate::math::Color;
    use crate::scene::Material;

    #[test]
    fn uniform_sizes_match_wgsl_layout() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 80);
        assert_eq!(std::mem::size_of::<LightUniform>(), 128);
        assert_eq!(std::mem::size_of::<MeshUniform>(), 160);
    }

    #[test]
    fn light_shadow_flag_needs_both_switches() {
        let mut light = SpotLight::new(Color::WHITE, 2.0);
        assert_eq!(LightUniform::from_light(&light, true).shadow_enabled, 0);

        light.cast_shadow = true;
        assert_eq!(LightUniform::from_light(&light, false).shadow_enabled, 0);
        assert_eq!(LightUniform::from_light(&light, true).shadow_enabled, 1);
        assert_eq!(LightUniform::from_light(&light, true).color, [2.0, 2.0, 2.0]);
    }

    #[test]
    fn mesh_flags() {
        let mut mesh = Mesh::new(
            "plane",
            Geometry::Plane {
                width: 1.0,
                height: 1.0,
            },
            Material::default().with_side(Side::Double),
        );
        mesh.receive_shadow = true;
        mesh.material.wireframe = true;

        let uniform = MeshUniform::from_mesh(&mesh, false);
        assert_eq!(uniform.wireframe, 1);
        assert_eq!(uniform.textured, 0);
        assert_eq!(uniform.receive_shadow, 1);
        assert_eq!(uniform.double_sided, 1);
    }
}
