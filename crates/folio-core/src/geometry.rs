//! Wireframe line lists for the decorative primitives.
//!
//! Every function returns vertex pairs (line-list topology) in mesh-local
//! space.

use crate::meshes::MeshKind;
use glam::Vec3;
use std::f32::consts::TAU;

pub const TORUS_RADIUS: f32 = 0.5;
pub const TORUS_TUBE: f32 = 0.2;
pub const TORUS_RADIAL_SEGMENTS: usize = 16;
pub const TORUS_TUBULAR_SEGMENTS: usize = 100;
pub const OCTAHEDRON_RADIUS: f32 = 0.4;
pub const ICOSAHEDRON_RADIUS: f32 = 0.4;
pub const TETRAHEDRON_RADIUS: f32 = 0.5;

pub fn wireframe(kind: MeshKind) -> Vec<Vec3> {
    match kind {
        MeshKind::Torus => torus(
            TORUS_RADIUS,
            TORUS_TUBE,
            TORUS_RADIAL_SEGMENTS,
            TORUS_TUBULAR_SEGMENTS,
        ),
        MeshKind::Octahedron => polyhedron_edges(&octahedron_vertices(OCTAHEDRON_RADIUS)),
        MeshKind::Icosahedron => polyhedron_edges(&icosahedron_vertices(ICOSAHEDRON_RADIUS)),
        MeshKind::Tetrahedron => polyhedron_edges(&tetrahedron_vertices(TETRAHEDRON_RADIUS)),
    }
}

pub fn torus(radius: f32, tube: f32, radial: usize, tubular: usize) -> Vec<Vec3> {
    let radial = radial.max(3);
    let tubular = tubular.max(3);
    let point = |j: usize, i: usize| {
        let v = (j % radial) as f32 / radial as f32 * TAU;
        let u = (i % tubular) as f32 / tubular as f32 * TAU;
        Vec3::new(
            (radius + tube * v.cos()) * u.cos(),
            (radius + tube * v.cos()) * u.sin(),
            tube * v.sin(),
        )
    };
    let mut lines = Vec::with_capacity(radial * tubular * 4);
    for j in 0..radial {
        for i in 0..tubular {
            let p = point(j, i);
            lines.extend_from_slice(&[p, point(j, i + 1), p, point(j + 1, i)]);
        }
    }
    lines
}

pub fn octahedron_vertices(radius: f32) -> Vec<Vec3> {
    vec![
        Vec3::X * radius,
        -Vec3::X * radius,
        Vec3::Y * radius,
        -Vec3::Y * radius,
        Vec3::Z * radius,
        -Vec3::Z * radius,
    ]
}

pub fn icosahedron_vertices(radius: f32) -> Vec<Vec3> {
    let t = (1.0 + 5f32.sqrt()) / 2.0;
    [
        (-1.0, t, 0.0),
        (1.0, t, 0.0),
        (-1.0, -t, 0.0),
        (1.0, -t, 0.0),
        (0.0, -1.0, t),
        (0.0, 1.0, t),
        (0.0, -1.0, -t),
        (0.0, 1.0, -t),
        (t, 0.0, -1.0),
        (t, 0.0, 1.0),
        (-t, 0.0, -1.0),
        (-t, 0.0, 1.0),
    ]
    .iter()
    .map(|&(x, y, z)| Vec3::new(x, y, z).normalize() * radius)
    .collect()
}

pub fn tetrahedron_vertices(radius: f32) -> Vec<Vec3> {
    [(1.0, 1.0, 1.0), (-1.0, -1.0, 1.0), (-1.0, 1.0, -1.0), (1.0, -1.0, -1.0)]
        .iter()
        .map(|&(x, y, z)| Vec3::new(x, y, z).normalize() * radius)
        .collect()
}

/// Edges of a regular convex polyhedron: every vertex pair at the shortest
/// inter-vertex distance.
pub fn polyhedron_edges(vertices: &[Vec3]) -> Vec<Vec3> {
    let mut shortest = f32::MAX;
    for (i, a) in vertices.iter().enumerate() {
        for b in &vertices[i + 1..] {
            shortest = shortest.min(a.distance(*b));
        }
    }
    let tolerance = shortest * 1e-3;
    let mut lines = Vec::new();
    for (i, a) in vertices.iter().enumerate() {
        for b in &vertices[i + 1..] {
            if (a.distance(*b) - shortest).abs() <= tolerance {
                lines.push(*a);
                lines.push(*b);
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge_count(kind: MeshKind) -> usize {
        wireframe(kind).len() / 2
    }

    #[test]
    fn regular_solids_have_expected_edges() {
        assert_eq!(edge_count(MeshKind::Tetrahedron), 6);
        assert_eq!(edge_count(MeshKind::Octahedron), 12);
        assert_eq!(edge_count(MeshKind::Icosahedron), 30);
    }

    #[test]
    fn torus_grid_lines() {
        let lines = torus(0.5, 0.2, 16, 100);
        assert_eq!(lines.len(), 16 * 100 * 4);
        for p in &lines {
            let ring = (p.x * p.x + p.y * p.y).sqrt();
            assert!(ring >= 0.3 - 1e-4 && ring <= 0.7 + 1e-4);
        }
    }
}
