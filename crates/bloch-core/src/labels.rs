//! Basis-state labels and their projection into screen space.

use crate::constants::LABEL_OFFSET;
use glam::{Mat4, Vec3, Vec4};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BasisLabel {
    pub text: &'static str,
    pub anchor: Vec3,
}

/// The six labeled poles of a sphere of `radius`, each pushed out by
/// [`LABEL_OFFSET`] along its axis.
pub fn basis_labels(radius: f32) -> [BasisLabel; 6] {
    let r = radius + LABEL_OFFSET;
    [
        BasisLabel { text: "|0⟩", anchor: Vec3::new(0.0, r, 0.0) },
        BasisLabel { text: "|1⟩", anchor: Vec3::new(0.0, -r, 0.0) },
        BasisLabel { text: "|+⟩", anchor: Vec3::new(r, 0.0, 0.0) },
        BasisLabel { text: "|-⟩", anchor: Vec3::new(-r, 0.0, 0.0) },
        BasisLabel { text: "|+i⟩", anchor: Vec3::new(0.0, 0.0, r) },
        BasisLabel { text: "|-i⟩", anchor: Vec3::new(0.0, 0.0, -r) },
    ]
}

/// Pixel position of a projected point, origin at the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    /// False when the point lies behind the camera plane.
    pub in_front: bool,
}

/// Project a world-space anchor into a `width` x `height` viewport.
pub fn project_to_screen(anchor: Vec3, view_proj: Mat4, width: f32, height: f32) -> ScreenPoint {
    let clip: Vec4 = view_proj * anchor.extend(1.0);
    let w = if clip.w.abs() > f32::EPSILON { clip.w } else { f32::EPSILON };
    let ndc_x = clip.x / w;
    let ndc_y = clip.y / w;
    ScreenPoint {
        x: (ndc_x * 0.5 + 0.5) * width,
        y: (ndc_y * -0.5 + 0.5) * height,
        in_front: clip.w > 0.0,
    }
}

/// CSS transform that centers an overlay element on `point`.
pub fn label_transform(point: ScreenPoint) -> String {
    format!(
        "translate(-50%, -50%) translate({:.2}px, {:.2}px)",
        point.x, point.y
    )
}
