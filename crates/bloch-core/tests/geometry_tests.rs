// Mesh builders.

use bloch_core::geometry::*;

#[test]
fn sphere_vertices_lie_on_radius() {
    let mesh = uv_sphere(10.0, 32, 32);
    assert_eq!(mesh.vertices.len(), 33 * 33);
    // pole rows contribute one triangle per segment
    assert_eq!(mesh.triangle_count(), 32 * (2 * 32 - 2));
    for v in &mesh.vertices {
        let p = glam::Vec3::from(v.position);
        assert!((p.length() - 10.0).abs() < 1e-4);
        let n = glam::Vec3::from(v.normal);
        assert!((n.length() - 1.0).abs() < 1e-4);
    }
    assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
}

#[test]
fn torus_hugs_its_ring() {
    let mesh = torus(10.0, 0.05, 16, 100);
    assert_eq!(mesh.triangle_count(), 16 * 100 * 2);
    for v in &mesh.vertices {
        let [x, y, z] = v.position;
        let ring = (x * x + y * y).sqrt();
        assert!((ring - 10.0).abs() <= 0.05 + 1e-4);
        assert!(z.abs() <= 0.05 + 1e-6);
    }
}

#[test]
fn cuboid_has_flat_faces() {
    let mesh = cuboid(3.0);
    assert_eq!(mesh.vertices.len(), 24);
    assert_eq!(mesh.indices.len(), 36);
    for v in &mesh.vertices {
        for c in v.position {
            assert!(c.abs() <= 1.5 + 1e-6);
        }
        // each vertex sits on the face its normal points out of
        let along: f32 = v
            .position
            .iter()
            .zip(v.normal.iter())
            .map(|(p, n)| p * n)
            .sum();
        assert!((along - 1.5).abs() < 1e-5);
    }
}

#[test]
fn wireframe_lists_each_edge_once() {
    // 6 separate quads, each two triangles: 4 sides plus a diagonal
    let lines = wireframe_edges(&cuboid(2.0));
    assert_eq!(lines.len(), 6 * 5 * 2);
}

#[test]
fn axes_span_both_directions() {
    let axes = axis_lines(12.0);
    assert_eq!(axes[0], [-12.0, 0.0, 0.0]);
    assert_eq!(axes[1], [12.0, 0.0, 0.0]);
    assert_eq!(axes[3], [0.0, 12.0, 0.0]);
    assert_eq!(axes[5], [0.0, 0.0, 12.0]);
}
