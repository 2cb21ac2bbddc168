use std::f32::consts::FRAC_PI_3;

use glam::{Mat4, Vec3};

use crate::math::Color;

/// Perspective camera used to render a spotlight's shadow map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLightShadow {
    pub map_size: u32,
    pub near: f32,
    /// Used when the light has no cutoff distance
    pub far: f32,
}

impl Default for SpotLightShadow {
    fn default() -> Self {
        Self {
            map_size: 512,
            near: 0.5,
            far: 500.0,
        }
    }
}

/// Cone light shining from `position` toward `target`
#[derive(Debug, Clone, PartialEq)]
pub struct SpotLight {
    pub color: Color,
    pub intensity: f32,
    pub position: Vec3,
    pub target: Vec3,
    /// Cutoff distance; 0 means the light reaches infinitely far
    pub distance: f32,
    /// Half-angle of the cone in radians
    pub angle: f32,
    /// Fraction of the cone that fades out, 0..=1
    pub penumbra: f32,
    pub decay: f32,
    pub cast_shadow: bool,
    pub shadow: SpotLightShadow,
}

impl SpotLight {
    pub fn new(color: Color, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            position: Vec3::new(0.0, 1.0, 0.0),
            target: Vec3::ZERO,
            distance: 0.0,
            angle: FRAC_PI_3,
            penumbra: 0.0,
            decay: 2.0,
            cast_shadow: false,
            shadow: SpotLightShadow::default(),
        }
    }

    /// Unit vector from the light toward its target
    pub fn direction(&self) -> Vec3 {
        (self.target - self.position).normalize_or(Vec3::NEG_Y)
    }

    pub fn cone_cos(&self) -> f32 {
        self.angle.cos()
    }

    pub fn penumbra_cos(&self) -> f32 {
        (self.angle * (1.0 - self.penumbra)).cos()
    }

    /// View-projection of the shadow camera; the frustum covers the whole cone
    pub fn shadow_view_projection(&self) -> Mat4 {
        let far = if self.distance > 0.0 {
            self.distance
        } else {
            self.shadow.far
        };
        let projection = Mat4::perspective_rh(2.0 * self.angle, 1.0, self.shadow.near, far);

        let direction = self.direction();
        let up = if direction.cross(Vec3::Y).length_squared() < 1e-6 {
            Vec3::Z
        } else {
            Vec3::Y
        };
        let view = Mat4::look_at_rh(self.position, self.target, up);

        projection * view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn light_at(position: Vec3) -> SpotLight {
        let mut light = SpotLight::new(Color::WHITE, 50.0);
        light.position = position;
        light
    }

    #[test]
    fn test_direction_points_at_target() {
        let light = light_at(Vec3::new(10.0, 5.0, 5.0));
        let expected = (-Vec3::new(10.0, 5.0, 5.0)).normalize();
        assert!((light.direction() - expected).length() < 1e-6);
    }

    #[test]
    fn test_hard_cone_has_equal_cosines() {
        let light = light_at(Vec3::Y);
        assert!((light.cone_cos() - light.penumbra_cos()).abs() < 1e-6);
        assert!((light.cone_cos() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_target_projects_to_shadow_map_center() {
        let light = light_at(Vec3::new(10.0, 5.0, 5.0));
        let clip = light.shadow_view_projection() * light.target.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn test_straight_down_light_has_valid_matrix() {
        let light = light_at(Vec3::new(0.0, 10.0, 0.0));
        assert!(!light.shadow_view_projection().is_nan());
    }
}
