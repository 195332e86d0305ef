//! Mesh builders for the sphere, equator ring, cubes and line overlays.

use std::collections::HashSet;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

fn normalize(v: [f32; 3]) -> [f32; 3] {
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if len > 0.0 {
        [v[0] / len, v[1] / len, v[2] / len]
    } else {
        [0.0, 1.0, 0.0]
    }
}

/// Latitude/longitude sphere centred on the origin.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> Mesh {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut vertices = Vec::with_capacity(((ws + 1) * (hs + 1)) as usize);
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let p = [
                -radius * (u * TAU).cos() * (v * PI).sin(),
                radius * (v * PI).cos(),
                radius * (u * TAU).sin() * (v * PI).sin(),
            ];
            vertices.push(Vertex {
                position: p,
                normal: normalize(p),
            });
        }
    }
    let row = ws + 1;
    let mut indices = Vec::with_capacity((ws * hs * 6) as usize);
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            // pole rows collapse to a single triangle per quad
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    Mesh { vertices, indices }
}

/// Torus in the XY plane around the Z axis.
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> Mesh {
    let rs = radial_segments.max(3);
    let ts = tubular_segments.max(3);
    let mut vertices = Vec::with_capacity(((rs + 1) * (ts + 1)) as usize);
    for j in 0..=rs {
        let v = j as f32 / rs as f32 * TAU;
        for i in 0..=ts {
            let u = i as f32 / ts as f32 * TAU;
            let p = [
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            ];
            let center = [radius * u.cos(), radius * u.sin(), 0.0];
            vertices.push(Vertex {
                position: p,
                normal: normalize([p[0] - center[0], p[1] - center[1], p[2] - center[2]]),
            });
        }
    }
    let row = ts + 1;
    let mut indices = Vec::with_capacity((rs * ts * 6) as usize);
    for j in 1..=rs {
        for i in 1..=ts {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    Mesh { vertices, indices }
}

/// Axis-aligned cube with edge length `size`, flat-shaded.
pub fn cuboid(size: f32) -> Mesh {
    let h = size * 0.5;
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ];
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (normal, u, v) in faces {
        let base = vertices.len() as u32;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let position = [
                (normal[0] + su * u[0] + sv * v[0]) * h,
                (normal[1] + su * u[1] + sv * v[1]) * h,
                (normal[2] + su * u[2] + sv * v[2]) * h,
            ];
            vertices.push(Vertex { position, normal });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    Mesh { vertices, indices }
}

/// Unique triangle edges of `mesh` as a line list (two points per edge).
pub fn wireframe_edges(mesh: &Mesh) -> Vec<[f32; 3]> {
    let mut seen: HashSet<(u32, u32)> = HashSet::new();
    let mut lines = Vec::new();
    for tri in mesh.indices.chunks_exact(3) {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            let key = (a.min(b), a.max(b));
            if seen.insert(key) {
                lines.push(mesh.vertices[key.0 as usize].position);
                lines.push(mesh.vertices[key.1 as usize].position);
            }
        }
    }
    lines
}

/// X, Y and Z axes through the origin, each running from `-extent` to `extent`.
pub fn axis_lines(extent: f32) -> [[f32; 3]; 6] {
    [
        [-extent, 0.0, 0.0],
        [extent, 0.0, 0.0],
        [0.0, -extent, 0.0],
        [0.0, extent, 0.0],
        [0.0, 0.0, -extent],
        [0.0, 0.0, extent],
    ]
}
