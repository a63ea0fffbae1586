//! Vertex normals for surface meshes.

use glam::DVec3;

/// Twice the vector area of a polygon, fanned from its first corner.
///
/// Its direction is the face normal and its length grows with the face area.
fn fan_area_vector(vertices: &[DVec3], face: &[u32]) -> DVec3 {
    let v0 = vertices[face[0] as usize];
    face[1..]
        .windows(2)
        .map(|w| {
            let v1 = vertices[w[0] as usize];
            let v2 = vertices[w[1] as usize];
            (v1 - v0).cross(v2 - v0)
        })
        .sum()
}

/// Area-weighted average of the normals of the faces around each vertex.
///
/// `faces` must already be validated against `vertices`.
pub(super) fn vertex_normals(vertices: &[DVec3], faces: &[Vec<u32>]) -> Vec<DVec3> {
    let mut normals = vec![DVec3::ZERO; vertices.len()];
    for face in faces {
        let weighted = fan_area_vector(vertices, face);
        for &vi in face {
            normals[vi as usize] += weighted;
        }
    }
    for normal in &mut normals {
        *normal = normal.normalize_or_zero();
    }
    normals
}
