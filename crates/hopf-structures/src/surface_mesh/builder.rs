//! Incremental mesh construction and fibre weaving.

use std::collections::HashMap;

use glam::DVec3;
use hopf_core::error::{HopfError, Result};
use hopf_core::structure::index_u32;

use super::SurfaceMesh;

/// Builds a [`SurfaceMesh`] one face at a time.
///
/// Vertices are deduplicated on their exact coordinates, so faces sharing a
/// corner share an index.
#[derive(Debug, Default, Clone)]
pub struct MeshBuilder {
    vertex_lookup: HashMap<[u64; 3], u32>,
    vertices: Vec<DVec3>,
    faces: Vec<Vec<u32>>,
    collapsed_faces: usize,
}

impl MeshBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex, returning the index of an identical earlier vertex if one exists.
    pub fn add_vertex(&mut self, p: DVec3) -> Result<u32> {
        // Adding zero folds -0.0 into 0.0 before hashing the bits.
        let key = (p + DVec3::ZERO).to_array().map(f64::to_bits);
        if let Some(&index) = self.vertex_lookup.get(&key) {
            return Ok(index);
        }
        let index = index_u32(self.vertices.len(), "mesh vertices")?;
        self.vertices.push(p);
        self.vertex_lookup.insert(key, index);
        Ok(index)
    }

    /// Adds a polygon given by its corner positions, anti-clockwise.
    ///
    /// Consecutive corners that collapse onto the same vertex are merged; a
    /// face left with fewer than three corners is dropped.
    pub fn add_face(&mut self, corners: &[DVec3]) -> Result<()> {
        let mut face: Vec<u32> = Vec::with_capacity(corners.len());
        for &p in corners {
            let index = self.add_vertex(p)?;
            if face.last() != Some(&index) {
                face.push(index);
            }
        }
        while face.len() > 1 && face.first() == face.last() {
            face.pop();
        }

        if face.len() < 3 {
            self.collapsed_faces += 1;
        } else {
            self.faces.push(face);
        }
        Ok(())
    }

    /// Adds a triangle.
    pub fn add_triangle(&mut self, p0: DVec3, p1: DVec3, p2: DVec3) -> Result<()> {
        self.add_face(&[p0, p1, p2])
    }

    /// Adds a quad.
    pub fn add_quad(&mut self, p0: DVec3, p1: DVec3, p2: DVec3, p3: DVec3) -> Result<()> {
        self.add_face(&[p0, p1, p2, p3])
    }

    /// Returns the number of distinct vertices so far.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces so far.
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Finishes the mesh.
    pub fn build(self, name: impl Into<String>) -> Result<SurfaceMesh> {
        if self.collapsed_faces > 0 {
            log::debug!("dropped {} collapsed face(s)", self.collapsed_faces);
        }
        SurfaceMesh::new(name, self.vertices, self.faces)
    }
}

/// Stitches neighbouring fibres into a band of quads.
///
/// Every fibre must have the same number of samples. Sample `k` of fibre `i`
/// is joined to sample `k` of fibre `i + 1`; when `closed` is set the last
/// sample of each fibre also joins the first.
pub fn weave_fibres(
    name: impl Into<String>,
    fibres: &[Vec<DVec3>],
    closed: bool,
) -> Result<SurfaceMesh> {
    if fibres.len() < 2 {
        return Err(HopfError::TooFewSamples {
            requested: fibres.len(),
            minimum: 2,
        });
    }
    let n = fibres[0].len();
    if n < 2 {
        return Err(HopfError::TooFewSamples {
            requested: n,
            minimum: 2,
        });
    }
    if let Some(bad) = fibres.iter().find(|f| f.len() != n) {
        return Err(HopfError::SizeMismatch {
            expected: n,
            actual: bad.len(),
        });
    }

    let mut builder = MeshBuilder::new();
    for pair in fibres.windows(2) {
        let (last, next) = (&pair[0], &pair[1]);

        //  0 - 3
        //  |   |
        //  1 - 2
        for k in 1..n {
            builder.add_quad(last[k - 1], last[k], next[k], next[k - 1])?;
        }
        if closed {
            builder.add_quad(last[n - 1], last[0], next[0], next[n - 1])?;
        }
    }
    log::debug!(
        "wove {} fibres into {} faces over {} vertices",
        fibres.len(),
        builder.num_faces(),
        builder.num_vertices()
    );
    builder.build(name)
}
