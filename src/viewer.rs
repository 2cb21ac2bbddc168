use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use crate::camera::PerspectiveCamera;
use crate::config::ViewerConfig;
use crate::controls::OrbitControls;
use crate::geometry::Geometry;
use crate::input::PointerAction;
use crate::math::{Color, ColorParseError, Transform};
use crate::scene::{LightHandle, Material, Mesh, MeshHandle, Scene, Side, SpotLight};
use crate::settings::{ColorControl, PanelSettings, SettingChange, SettingsListener};

/// Cube spin per frame around X and Z, in radians
pub const ROTATION_STEP: f32 = 0.01;

/// Output target whose pixel size follows the window
pub trait RenderSurface {
    fn set_size(&mut self, width: u32, height: u32);

    fn size(&self) -> (u32, u32);
}

/// Application state: scene, camera, orbit controls and panel values
///
/// All callbacks (frame, panel, resize) run on the event-loop thread and go
/// through this struct.
pub struct SceneViewer {
    scene: Scene,
    camera: PerspectiveCamera,
    controls: OrbitControls,
    settings: PanelSettings,
    cube: MeshHandle,
    plane: MeshHandle,
    sphere: MeshHandle,
    cylinder: MeshHandle,
    spotlight: LightHandle,
    shadow_map_enabled: bool,
    viewport: (u32, u32),
    frame_count: u64,
}

impl SceneViewer {
    /// Build the scene for a surface of `width` x `height` physical pixels
    pub fn new(config: &ViewerConfig, width: u32, height: u32) -> Self {
        let mut scene = Scene::new();

        let mut cube = Mesh::new(
            "cube",
            Geometry::Box {
                width: 1.0,
                height: 1.0,
                depth: 1.0,
            },
            Material::new(Color::from_hex(0xFFFFFF)).with_map(&config.texture),
        );
        cube.transform = Transform::from_position(Vec3::new(0.0, 2.0, 0.0));
        cube.cast_shadow = true;
        let cube = scene.add_mesh(cube);

        let mut plane = Mesh::new(
            "plane",
            Geometry::Plane {
                width: 50.0,
                height: 50.0,
            },
            Material::new(Color::from_hex(0xFFFFFF)).with_side(Side::Double),
        );
        plane.transform = Transform::default().with_rotation(Vec3::new(-FRAC_PI_2, 0.0, 0.0));
        plane.receive_shadow = true;
        let plane = scene.add_mesh(plane);

        let mut sphere = Mesh::new(
            "sphere",
            Geometry::Sphere {
                radius: 1.0,
                width_segments: 50,
                height_segments: 50,
            },
            Material::new(Color::from_hex(0x0099FF)),
        );
        sphere.transform = Transform::from_position(Vec3::new(5.0, 2.0, 5.0));
        sphere.cast_shadow = true;
        let sphere = scene.add_mesh(sphere);

        let mut cylinder = Mesh::new(
            "cylinder",
            Geometry::Cylinder {
                radius_top: 2.0,
                radius_bottom: 2.0,
                height: 4.0,
                radial_segments: 50,
            },
            Material::new(Color::from_hex(0xB80013)),
        );
        cylinder.transform = Transform::from_position(Vec3::new(5.0, 3.0, -5.0));
        cylinder.cast_shadow = true;
        let cylinder = scene.add_mesh(cylinder);

        let mut light = SpotLight::new(Color::from_hex(0xFFFFFF), 50.0);
        light.position = Vec3::new(10.0, 5.0, 5.0);
        light.cast_shadow = true;
        light.shadow.map_size = config.shadow_map_size;
        let spotlight = scene.add_light(light);

        let mut camera = PerspectiveCamera::new(
            config.camera.fov,
            aspect_ratio(width, height),
            config.camera.near,
            config.camera.far,
        );
        camera.position = Vec3::from_array(config.camera.position);

        let mut controls = OrbitControls::new(&mut camera);
        controls.enable_damping = config.controls.enable_damping;
        controls.damping_factor = config.controls.damping_factor;

        log::info!(
            "Scene ready: {} meshes, {} light(s), viewport {}x{}",
            scene.meshes().len(),
            scene.lights().len(),
            width,
            height
        );

        Self {
            scene,
            camera,
            controls,
            settings: PanelSettings::default(),
            cube,
            plane,
            sphere,
            cylinder,
            spotlight,
            shadow_map_enabled: true,
            viewport: (width, height),
            frame_count: 0,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn controls(&self) -> &OrbitControls {
        &self.controls
    }

    pub fn settings(&self) -> &PanelSettings {
        &self.settings
    }

    pub fn cube(&self) -> MeshHandle {
        self.cube
    }

    pub fn plane(&self) -> MeshHandle {
        self.plane
    }

    pub fn sphere(&self) -> MeshHandle {
        self.sphere
    }

    pub fn cylinder(&self) -> MeshHandle {
        self.cylinder
    }

    pub fn spotlight(&self) -> LightHandle {
        self.spotlight
    }

    /// Meshes affected by the wireframe toggle
    pub fn colored_meshes(&self) -> [MeshHandle; 3] {
        [self.sphere, self.cube, self.cylinder]
    }

    pub fn mesh_for(&self, control: ColorControl) -> MeshHandle {
        match control {
            ColorControl::Sphere => self.sphere,
            ColorControl::Cube => self.cube,
            ColorControl::Cylinder => self.cylinder,
        }
    }

    pub fn shadow_map_enabled(&self) -> bool {
        self.shadow_map_enabled
    }

    /// Size of the render output in physical pixels
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Per-frame animation step: spin the cube about X and Z
    pub fn advance_frame(&mut self) {
        let cube = self.scene.mesh_mut(self.cube);
        cube.transform.rotation.x += ROTATION_STEP;
        cube.transform.rotation.z += ROTATION_STEP;
        self.frame_count += 1;
    }

    /// One animation frame: spin, `draw`, then let the controls move the camera
    pub fn frame<R>(&mut self, draw: impl FnOnce(&SceneViewer) -> R) -> R {
        self.advance_frame();
        let drawn = draw(self);
        self.update_controls();
        drawn
    }

    pub fn handle_pointer(&mut self, action: PointerAction) {
        let height = self.viewport.1 as f32;
        self.controls.handle(action, &self.camera, height);
    }

    /// Let the orbit controls move the camera; returns whether it moved
    pub fn update_controls(&mut self) -> bool {
        self.controls.update(&mut self.camera)
    }

    /// Match camera aspect and surface size to a new window size
    ///
    /// Zero-sized requests (minimised window) are ignored.
    pub fn resize<S: RenderSurface + ?Sized>(&mut self, width: u32, height: u32, surface: &mut S) {
        if width == 0 || height == 0 {
            log::debug!("Ignoring resize to {}x{}", width, height);
            return;
        }

        self.camera.aspect = aspect_ratio(width, height);
        self.camera.update_projection_matrix();
        surface.set_size(width, height);
        self.viewport = (width, height);
        log::debug!("Resized to {}x{}", width, height);
    }
}

impl SettingsListener for SceneViewer {
    fn on_change(&mut self, change: &SettingChange) -> Result<(), ColorParseError> {
        match change {
            SettingChange::Color(control, hex) => {
                let color = Color::parse_hex(hex)?;
                let mesh = self.mesh_for(*control);
                self.scene.mesh_mut(mesh).material.color = color;
            }
            SettingChange::Wireframe(enabled) => {
                for mesh in self.colored_meshes() {
                    self.scene.mesh_mut(mesh).material.wireframe = *enabled;
                }
            }
        }
        self.settings.apply(change);
        log::debug!("{} -> {:?}", change.label(), change);
        Ok(())
    }
}

fn aspect_ratio(width: u32, height: u32) -> f32 {
    width as f32 / height.max(1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewer() -> SceneViewer {
        SceneViewer::new(&ViewerConfig::default(), 800, 600)
    }

    #[test]
    fn test_handles_point_at_named_meshes() {
        let viewer = viewer();
        assert_eq!(viewer.scene().mesh(viewer.cube()).name, "cube");
        assert_eq!(viewer.scene().mesh(viewer.plane()).name, "plane");
        assert_eq!(viewer.scene().mesh(viewer.sphere()).name, "sphere");
        assert_eq!(viewer.scene().mesh(viewer.cylinder()).name, "cylinder");
    }

    #[test]
    fn test_bad_color_leaves_state_untouched() {
        let mut viewer = viewer();
        let before = viewer.scene().mesh(viewer.cube()).material.color;

        let result = viewer.on_change(&SettingChange::Color(ColorControl::Cube, "red".into()));
        assert!(result.is_err());
        assert_eq!(viewer.scene().mesh(viewer.cube()).material.color, before);
        assert_eq!(viewer.settings().cube_color, "#ffffff");
    }

    #[test]
    fn test_frame_count() {
        let mut viewer = viewer();
        viewer.advance_frame();
        viewer.advance_frame();
        assert_eq!(viewer.frame_count(), 2);
    }

    #[test]
    fn test_texture_comes_from_config() {
        let mut config = ViewerConfig::default();
        config.texture = "planks.png".into();
        let viewer = SceneViewer::new(&config, 800, 600);
        let map = viewer.scene().mesh(viewer.cube()).material.map.clone();
        assert_eq!(map, Some("planks.png".into()));
    }
}
