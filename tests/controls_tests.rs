use glam::Vec3;
use scene_viewer::input::{OrbitInput, PointerAction, PointerButton};
use scene_viewer::{SceneViewer, ViewerConfig};

fn viewer() -> SceneViewer {
    SceneViewer::new(&ViewerConfig::default(), 800, 600)
}

fn distance_to_target(viewer: &SceneViewer) -> f32 {
    viewer.camera().position.distance(viewer.controls().target)
}

#[cfg(test)]
mod orbit_tests {
    use super::*;

    #[test]
    fn test_idle_controls_leave_camera_alone() {
        let mut viewer = viewer();
        let before = viewer.camera().position;
        assert!(!viewer.update_controls());
        assert!((viewer.camera().position - before).length() < 1e-5);
    }

    #[test]
    fn test_left_drag_orbits_at_fixed_distance() {
        let mut viewer = viewer();
        let distance = distance_to_target(&viewer);
        let before = viewer.camera().position;

        let mut input = OrbitInput::new();
        input.cursor_moved(400.0, 300.0);
        input.press(PointerButton::Left);
        let action = input.cursor_moved(460.0, 300.0).unwrap();
        viewer.handle_pointer(action);

        assert!(viewer.update_controls());
        assert!((viewer.camera().position - before).length() > 0.1);
        assert!((distance_to_target(&viewer) - distance).abs() < 1e-4);
        assert_eq!(viewer.camera().target(), Vec3::ZERO);
    }

    #[test]
    fn test_wheel_zooms() {
        let mut viewer = viewer();
        let distance = distance_to_target(&viewer);

        viewer.handle_pointer(PointerAction::Dolly { delta: -100.0 });
        viewer.update_controls();
        let closer = distance_to_target(&viewer);
        assert!(closer < distance);

        viewer.handle_pointer(PointerAction::Dolly { delta: 100.0 });
        viewer.update_controls();
        assert!(distance_to_target(&viewer) > closer);
    }

    #[test]
    fn test_pan_moves_target_with_camera() {
        let mut viewer = viewer();
        let offset = viewer.camera().position - viewer.controls().target;

        viewer.handle_pointer(PointerAction::Pan { dx: 50.0, dy: 0.0 });
        viewer.update_controls();

        assert_ne!(viewer.controls().target, Vec3::ZERO);
        let moved = viewer.camera().position - viewer.controls().target;
        assert!((moved - offset).length() < 1e-4);
    }

    #[test]
    fn test_camera_never_flips_over_the_pole() {
        let mut viewer = viewer();
        viewer.handle_pointer(PointerAction::Rotate { dx: 0.0, dy: 5000.0 });
        viewer.update_controls();

        let camera = viewer.camera();
        assert!(camera.position.is_finite());
        assert!(camera.view_matrix().is_finite());
    }
}
