// Basis label anchors and screen projection.

use bloch_core::*;
use glam::{Mat4, Vec3};

const W: f32 = 1280.0;
const H: f32 = 720.0;

fn default_view_proj() -> Mat4 {
    Camera::looking_at_origin(CAMERA_START_Z, W / H).view_projection()
}

#[test]
fn six_labels_sit_outside_the_sphere() {
    let labels = basis_labels(SPHERE_RADIUS);
    let texts: Vec<&str> = labels.iter().map(|l| l.text).collect();
    assert_eq!(texts, ["|0⟩", "|1⟩", "|+⟩", "|-⟩", "|+i⟩", "|-i⟩"]);
    for label in labels {
        assert!((label.anchor.length() - (SPHERE_RADIUS + LABEL_OFFSET)).abs() < 1e-5);
    }
}

#[test]
fn origin_projects_to_viewport_center() {
    let p = project_to_screen(Vec3::ZERO, default_view_proj(), W, H);
    assert!((p.x - W / 2.0).abs() < 1e-3);
    assert!((p.y - H / 2.0).abs() < 1e-3);
    assert!(p.in_front);
}

#[test]
fn poles_land_on_expected_sides() {
    let vp = default_view_proj();
    let labels = basis_labels(SPHERE_RADIUS);
    let zero = project_to_screen(labels[0].anchor, vp, W, H);
    let one = project_to_screen(labels[1].anchor, vp, W, H);
    let plus = project_to_screen(labels[2].anchor, vp, W, H);
    let minus = project_to_screen(labels[3].anchor, vp, W, H);
    // screen y grows downwards
    assert!(zero.y < H / 2.0);
    assert!(one.y > H / 2.0);
    assert!(plus.x > W / 2.0);
    assert!(minus.x < W / 2.0);
    assert!((zero.x - W / 2.0).abs() < 1e-3);
}

#[test]
fn points_behind_camera_are_flagged() {
    let vp = default_view_proj();
    assert!(!project_to_screen(Vec3::new(0.0, 0.0, 40.0), vp, W, H).in_front);
    assert!(project_to_screen(Vec3::new(0.0, 0.0, 11.5), vp, W, H).in_front);
}

#[test]
fn projection_is_deterministic() {
    let mut camera = Camera::looking_at_origin(25.0, 1.5);
    camera.eye = Vec3::new(7.0, 3.0, 20.0);
    let vp = camera.view_projection();
    for label in basis_labels(SPHERE_RADIUS) {
        let a = project_to_screen(label.anchor, vp, W, H);
        let b = project_to_screen(label.anchor, vp, W, H);
        assert_eq!(a, b);
    }
}

#[test]
fn transform_centers_element_on_point() {
    let t = label_transform(ScreenPoint {
        x: 12.5,
        y: 3.0,
        in_front: true,
    });
    assert_eq!(t, "translate(-50%, -50%) translate(12.50px, 3.00px)");
}
