//! Surface mesh structure.

mod builder;
mod geometry;

use glam::DVec3;
use hopf_core::error::{HopfError, Result};
use hopf_core::structure::Structure;

pub use builder::{weave_fibres, MeshBuilder};

/// A polygonal surface mesh.
///
/// Faces are stored as 0-based index lists. Vertex normals are derived when
/// the mesh is created.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceMesh {
    name: String,
    vertices: Vec<DVec3>,
    faces: Vec<Vec<u32>>,
    vertex_normals: Vec<DVec3>,
}

impl SurfaceMesh {
    /// Creates a surface mesh, validating every face.
    pub fn new(
        name: impl Into<String>,
        vertices: Vec<DVec3>,
        faces: Vec<Vec<u32>>,
    ) -> Result<Self> {
        validate_faces(&faces, vertices.len())?;
        let vertex_normals = geometry::vertex_normals(&vertices, &faces);
        Ok(Self {
            name: name.into(),
            vertices,
            faces,
            vertex_normals,
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[must_use]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Returns the vertex positions.
    #[must_use]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the faces as 0-based vertex index lists.
    #[must_use]
    pub fn faces(&self) -> &[Vec<u32>] {
        &self.faces
    }

    /// Returns one unit normal per vertex, zero where every incident face is degenerate.
    #[must_use]
    pub fn vertex_normals(&self) -> &[DVec3] {
        &self.vertex_normals
    }

    /// Checks that every face has at least three in-range indices.
    pub fn validate(&self) -> Result<()> {
        validate_faces(&self.faces, self.vertices.len())
    }
}

fn validate_faces(faces: &[Vec<u32>], len: usize) -> Result<()> {
    for (face_idx, face) in faces.iter().enumerate() {
        if face.len() < 3 {
            return Err(HopfError::InvalidFace {
                face: face_idx,
                len: face.len(),
            });
        }
        if let Some(&index) = face.iter().find(|&&i| i as usize >= len) {
            return Err(HopfError::IndexOutOfBounds {
                index: index as usize,
                len,
            });
        }
    }
    Ok(())
}

impl Structure for SurfaceMesh {
    fn name(&self) -> &str {
        &self.name
    }

    fn type_name(&self) -> &'static str {
        "SurfaceMesh"
    }

    fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }
}
