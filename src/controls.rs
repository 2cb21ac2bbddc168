use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::camera::PerspectiveCamera;
use crate::input::PointerAction;

const EPS: f32 = 1e-6;

/// Spherical coordinates around the orbit target, Y up
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Spherical {
    radius: f32,
    /// Polar angle from +Y
    phi: f32,
    /// Azimuth around Y, measured from +Z toward +X
    theta: f32,
}

impl Spherical {
    fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius == 0.0 {
            return Self::default();
        }
        Self {
            radius,
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            theta: offset.x.atan2(offset.z),
        }
    }

    fn to_offset(self) -> Vec3 {
        let sin_phi_radius = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_radius * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_radius * self.theta.cos(),
        )
    }

    /// Keep phi off the poles so the view basis stays defined
    fn make_safe(&mut self) {
        self.phi = self.phi.clamp(EPS, PI - EPS);
    }
}

/// Orbit / pan / dolly camera controller
///
/// Gestures accumulate into pending deltas; [`update`](OrbitControls::update)
/// applies them to the camera. With damping enabled the deltas decay over
/// several updates instead of being applied at once.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub target: Vec3,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
    spherical_delta: Spherical,
    scale: f32,
    pan_offset: Vec3,
}

impl OrbitControls {
    /// Bind to `camera` and aim it at the default target (the origin)
    pub fn new(camera: &mut PerspectiveCamera) -> Self {
        let mut controls = Self {
            target: Vec3::ZERO,
            enable_damping: false,
            damping_factor: 0.05,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            pan_speed: 1.0,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
            spherical_delta: Spherical::default(),
            scale: 1.0,
            pan_offset: Vec3::ZERO,
        };
        controls.update(camera);
        controls
    }

    pub fn handle(&mut self, action: PointerAction, camera: &PerspectiveCamera, viewport_height: f32) {
        match action {
            PointerAction::Rotate { dx, dy } => self.rotate(dx, dy, viewport_height),
            PointerAction::Pan { dx, dy } => self.pan(dx, dy, camera, viewport_height),
            PointerAction::Dolly { delta } => self.dolly(delta),
        }
    }

    /// Orbit by a pointer drag of (dx, dy) pixels; a full viewport height is one turn
    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let height = viewport_height.max(1.0);
        self.spherical_delta.theta -= TAU * dx / height * self.rotate_speed;
        self.spherical_delta.phi -= TAU * dy / height * self.rotate_speed;
    }

    /// Slide camera and target together in the view plane
    pub fn pan(&mut self, dx: f32, dy: f32, camera: &PerspectiveCamera, viewport_height: f32) {
        let height = viewport_height.max(1.0);
        let offset = camera.position - self.target;
        let target_distance = offset.length() * (camera.fov.to_radians() * 0.5).tan();

        let left = 2.0 * dx * self.pan_speed * target_distance / height;
        let up = 2.0 * dy * self.pan_speed * target_distance / height;

        self.pan_offset += camera.right() * -left + camera.up() * up;
    }

    /// Move toward (negative delta) or away from (positive delta) the target
    pub fn dolly(&mut self, delta: f32) {
        let step = 0.95f32.powf(self.zoom_speed * (delta * 0.01).abs());
        if delta > 0.0 {
            self.scale /= step;
        } else if delta < 0.0 {
            self.scale *= step;
        }
    }

    /// Apply pending gestures to the camera; returns whether it moved
    pub fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
        let previous = camera.position;
        let mut spherical = Spherical::from_offset(camera.position - self.target);

        let weight = if self.enable_damping {
            self.damping_factor
        } else {
            1.0
        };

        spherical.theta += self.spherical_delta.theta * weight;
        spherical.phi += self.spherical_delta.phi * weight;
        spherical.phi = spherical.phi.clamp(self.min_polar_angle, self.max_polar_angle);
        spherical.make_safe();
        spherical.radius =
            (spherical.radius * self.scale).clamp(self.min_distance, self.max_distance);

        self.target += self.pan_offset * weight;

        camera.position = self.target + spherical.to_offset();
        camera.look_at(self.target);

        if self.enable_damping {
            let decay = 1.0 - self.damping_factor;
            self.spherical_delta.theta *= decay;
            self.spherical_delta.phi *= decay;
            self.pan_offset *= decay;
        } else {
            self.spherical_delta = Spherical::default();
            self.pan_offset = Vec3::ZERO;
        }
        self.scale = 1.0;

        camera.position.distance_squared(previous) > EPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> PerspectiveCamera {
        let mut camera = PerspectiveCamera::default();
        camera.position = Vec3::new(0.0, 2.0, 5.0);
        camera
    }

    #[test]
    fn test_spherical_round_trip() {
        let offset = Vec3::new(1.0, 2.0, -3.0);
        let back = Spherical::from_offset(offset).to_offset();
        assert!((back - offset).length() < 1e-5);
    }

    #[test]
    fn test_new_aims_at_origin() {
        let mut camera = camera();
        let _controls = OrbitControls::new(&mut camera);
        assert_eq!(camera.target(), Vec3::ZERO);
        assert!((camera.position - Vec3::new(0.0, 2.0, 5.0)).length() < 1e-4);
    }

    #[test]
    fn test_update_without_input_is_stable() {
        let mut camera = camera();
        let mut controls = OrbitControls::new(&mut camera);
        assert!(!controls.update(&mut camera));
    }

    #[test]
    fn test_polar_angle_is_clamped() {
        let mut camera = camera();
        let mut controls = OrbitControls::new(&mut camera);
        controls.max_polar_angle = PI / 2.0;

        // Drag far downward: camera would swing below the horizon
        controls.rotate(0.0, -10_000.0, 600.0);
        controls.update(&mut camera);
        assert!(camera.position.y >= -1e-4);
    }

    #[test]
    fn test_min_and_max_distance() {
        let mut camera = camera();
        let mut controls = OrbitControls::new(&mut camera);
        controls.min_distance = 4.0;
        controls.max_distance = 6.0;

        for _ in 0..50 {
            controls.dolly(-100.0);
            controls.update(&mut camera);
        }
        assert!((camera.position.length() - 4.0).abs() < 1e-4);

        for _ in 0..50 {
            controls.dolly(100.0);
            controls.update(&mut camera);
        }
        assert!((camera.position.length() - 6.0).abs() < 1e-4);
    }

    #[test]
    fn test_damping_spreads_motion_over_updates() {
        let mut camera = camera();
        let mut controls = OrbitControls::new(&mut camera);
        controls.enable_damping = true;

        controls.rotate(300.0, 0.0, 600.0);
        assert!(controls.update(&mut camera));
        let after_first = camera.position;
        assert!(controls.update(&mut camera));
        assert_ne!(camera.position, after_first);
    }
}
