//! CPU-side packing of the scene into GPU buffer layouts.

use bloch_core::geometry::{axis_lines, uv_sphere, wireframe_edges};
use bloch_core::{
    AMBIENT_INTENSITY, AXIS_COLOR, AXIS_EXTENT, CUBE_COLOR, EQUATOR_COLOR,
    POINT_LIGHT_POSITION, SPHERE_COLOR, SPHERE_SEGMENTS, STAR_COLOR, STAR_RADIUS,
    VECTOR_HEAD_COLOR, VECTOR_HEAD_RADIUS, VECTOR_LINE_COLOR, WIREFRAME_COLOR,
};
use glam::{Mat4, Quat, Vec3};
use std::f32::consts::FRAC_PI_2;

/// Per-frame inputs to [`crate::Renderer::render`].
#[derive(Clone, Copy, Debug)]
pub struct FrameScene {
    pub view_proj: Mat4,
    /// Accumulated spin of the sphere group about +Y, in radians.
    pub group_rotation: f32,
    /// State vector tip in sphere-group space.
    pub tip: Vec3,
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) group: [[f32; 4]; 4],
    pub(crate) light: [f32; 4],
}

impl Globals {
    pub(crate) fn for_frame(frame: &FrameScene) -> Self {
        Self {
            view_proj: frame.view_proj.to_cols_array_2d(),
            group: group_matrix(frame.group_rotation).to_cols_array_2d(),
            light: [
                POINT_LIGHT_POSITION[0],
                POINT_LIGHT_POSITION[1],
                POINT_LIGHT_POSITION[2],
                AMBIENT_INTENSITY,
            ],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct InstanceRaw {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
    // x: 1.0 = lit by the point light, 0.0 = flat color
    pub(crate) shading: [f32; 4],
}

impl InstanceRaw {
    pub(crate) fn new(model: Mat4, color: [f32; 4], lit: bool) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color,
            shading: [if lit { 1.0 } else { 0.0 }, 0.0, 0.0, 0.0],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct LineVertex {
    pub(crate) position: [f32; 3],
    pub(crate) color: [f32; 4],
}

// Slots in the per-frame group instance buffer
pub(crate) const GROUP_HEAD: u32 = 0;
pub(crate) const GROUP_EQUATOR: u32 = 1;
pub(crate) const GROUP_SPHERE: u32 = 2;
pub(crate) const GROUP_INSTANCE_COUNT: usize = 3;

#[inline]
pub(crate) fn group_matrix(rotation: f32) -> Mat4 {
    Mat4::from_rotation_y(rotation)
}

pub(crate) fn star_instances(stars: &[Vec3]) -> Vec<InstanceRaw> {
    stars
        .iter()
        .map(|p| {
            let model = Mat4::from_scale_rotation_translation(
                Vec3::splat(STAR_RADIUS),
                Quat::IDENTITY,
                *p,
            );
            InstanceRaw::new(model, STAR_COLOR, true)
        })
        .collect()
}

pub(crate) fn cube_instances(cubes: &[Vec3]) -> Vec<InstanceRaw> {
    cubes
        .iter()
        .map(|p| InstanceRaw::new(Mat4::from_translation(*p), CUBE_COLOR, false))
        .collect()
}

/// Head marker, equator ring and the translucent sphere, in slot order.
///
/// The equator mesh is built in the XY plane and tipped onto XZ here.
pub(crate) fn group_instances(
    rotation: f32,
    tip: Vec3,
    radius: f32,
) -> [InstanceRaw; GROUP_INSTANCE_COUNT] {
    let group = group_matrix(rotation);
    let head = group
        * Mat4::from_scale_rotation_translation(
            Vec3::splat(VECTOR_HEAD_RADIUS),
            Quat::IDENTITY,
            tip,
        );
    let equator = group * Mat4::from_rotation_x(FRAC_PI_2);
    let sphere = group * Mat4::from_scale(Vec3::splat(radius));
    [
        InstanceRaw::new(head, VECTOR_HEAD_COLOR, false),
        InstanceRaw::new(equator, EQUATOR_COLOR, false),
        InstanceRaw::new(sphere, SPHERE_COLOR, true),
    ]
}

/// Wireframe and axes; these never change after start-up.
pub(crate) fn static_lines(radius: f32) -> Vec<LineVertex> {
    let sphere = uv_sphere(radius, SPHERE_SEGMENTS, SPHERE_SEGMENTS);
    let mut lines: Vec<LineVertex> = wireframe_edges(&sphere)
        .into_iter()
        .map(|position| LineVertex {
            position,
            color: WIREFRAME_COLOR,
        })
        .collect();
    lines.extend(axis_lines(radius * AXIS_EXTENT).map(|position| LineVertex {
        position,
        color: AXIS_COLOR,
    }));
    lines
}

#[inline]
pub(crate) fn vector_line(tip: Vec3) -> [LineVertex; 2] {
    [
        LineVertex {
            position: [0.0, 0.0, 0.0],
            color: VECTOR_LINE_COLOR,
        },
        LineVertex {
            position: tip.to_array(),
            color: VECTOR_LINE_COLOR,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_follows_rotated_tip() {
        let tip = Vec3::new(10.0, 0.0, 0.0);
        let [head, _, _] = group_instances(FRAC_PI_2, tip, 10.0);
        let m = Mat4::from_cols_array_2d(&head.model);
        let p = m.transform_point3(Vec3::ZERO);
        // +X spun a quarter turn about +Y lands on -Z
        assert!((p - Vec3::new(0.0, 0.0, -10.0)).length() < 1e-4);
    }

    #[test]
    fn vector_line_starts_at_origin() {
        let line = vector_line(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(line[0].position, [0.0, 0.0, 0.0]);
        assert_eq!(line[1].position, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn static_lines_end_with_axes() {
        let lines = static_lines(10.0);
        assert_eq!(lines.len() % 2, 0);
        let last = lines[lines.len() - 1];
        assert_eq!(last.position[0], 0.0);
        assert!((last.position[2] - 12.0).abs() < 1e-4);
        assert_eq!(last.color, AXIS_COLOR);
    }

    #[test]
    fn instance_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<InstanceRaw>(), 96);
        assert_eq!(std::mem::size_of::<LineVertex>(), 28);
        assert_eq!(std::mem::size_of::<Globals>(), 144);
    }
}
