// Orbit controls: damping, zoom limits and polar clamping.

use bloch_core::*;
use glam::Vec3;

fn setup() -> (Camera, OrbitControls) {
    let config = SceneConfig::default();
    let camera = Camera::looking_at_origin(config.start_distance(), 16.0 / 9.0);
    let controls = OrbitControls::new(&camera, &config);
    (camera, controls)
}

#[test]
fn idle_update_keeps_start_pose() {
    let (mut camera, mut controls) = setup();
    let moved = controls.update(&mut camera);
    assert!(!moved);
    assert!((camera.eye - Vec3::new(0.0, 0.0, CAMERA_START_Z)).length() < 1e-3);
    assert_eq!(camera.target, Vec3::ZERO);
}

#[test]
fn zoom_is_clamped_to_limits() {
    let (mut camera, mut controls) = setup();
    controls.zoom(0.01);
    controls.update(&mut camera);
    assert!((controls.distance() - CONTROLS_MIN_DISTANCE).abs() < 1e-4);
    assert!((camera.eye.length() - CONTROLS_MIN_DISTANCE).abs() < 1e-3);

    controls.zoom(100.0);
    controls.update(&mut camera);
    assert!((controls.distance() - CONTROLS_MAX_DISTANCE).abs() < 1e-4);
}

#[test]
fn wheel_direction_matches_scrolling() {
    let (mut camera, mut controls) = setup();
    controls.zoom_wheel(1.0);
    controls.update(&mut camera);
    assert!(controls.distance() > CAMERA_START_Z);
    controls.zoom_wheel(-2.0);
    controls.update(&mut camera);
    assert!(controls.distance() < CAMERA_START_Z);
}

#[test]
fn invalid_zoom_factors_are_ignored() {
    let (mut camera, mut controls) = setup();
    controls.zoom(0.0);
    controls.zoom(f32::NAN);
    controls.zoom(-3.0);
    controls.update(&mut camera);
    assert!((controls.distance() - CAMERA_START_Z).abs() < 1e-4);
}

#[test]
fn damping_spreads_rotation_over_updates() {
    let (mut camera, mut controls) = setup();
    controls.rotate(100.0, 0.0, 1000.0);
    assert!(controls.update(&mut camera));
    let first = camera.eye.x.atan2(camera.eye.z);
    let total = -std::f32::consts::TAU * 0.1;
    assert!((first - total * CONTROLS_DAMPING).abs() < 1e-4);

    for _ in 0..300 {
        controls.update(&mut camera);
    }
    let settled = camera.eye.x.atan2(camera.eye.z);
    assert!((settled - total).abs() < 1e-3, "settled at {settled}");
    assert!((camera.eye.length() - CAMERA_START_Z).abs() < 1e-2);
}

#[test]
fn without_damping_rotation_applies_at_once() {
    let (mut camera, mut controls) = setup();
    controls.enable_damping = false;
    controls.rotate(100.0, 0.0, 1000.0);
    controls.update(&mut camera);
    let angle = camera.eye.x.atan2(camera.eye.z);
    assert!((angle + std::f32::consts::TAU * 0.1).abs() < 1e-4);
    assert!(!controls.update(&mut camera));
}

#[test]
fn polar_angle_never_flips_over_the_pole() {
    let (mut camera, mut controls) = setup();
    controls.enable_damping = false;
    controls.rotate(0.0, 10_000.0, 100.0);
    controls.update(&mut camera);
    assert!(camera.eye.is_finite());
    assert!(camera.eye.y > 0.0 && camera.eye.y < CAMERA_START_Z);
    assert!(camera.view_projection().is_finite());

    controls.rotate(0.0, -20_000.0, 100.0);
    controls.update(&mut camera);
    assert!(camera.eye.y < 0.0 && camera.eye.y > -CAMERA_START_Z);
}

#[test]
fn viewport_ignores_degenerate_sizes() {
    let (mut camera, _) = setup();
    camera.set_viewport(800.0, 400.0);
    assert_eq!(camera.aspect, 2.0);
    camera.set_viewport(0.0, 400.0);
    assert_eq!(camera.aspect, 2.0);
}
