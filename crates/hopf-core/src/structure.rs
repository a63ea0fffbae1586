//! Structure trait.
//!
//! A [`Structure`] is a named geometric object produced from sampled fibres,
//! such as a point cloud, curve network, or surface mesh.

use glam::DVec3;

use crate::error::{HopfError, Result};

/// A named geometric object ready for export.
pub trait Structure {
    /// Returns the name of this structure.
    fn name(&self) -> &str;

    /// Returns the type name of this structure (e.g., "`PointCloud`", "`SurfaceMesh`").
    fn type_name(&self) -> &'static str;

    /// Returns the positions of all vertices.
    fn vertices(&self) -> &[DVec3];

    /// Returns the number of vertices.
    fn num_vertices(&self) -> usize {
        self.vertices().len()
    }

    /// Returns the axis-aligned bounding box.
    ///
    /// Returns `None` if the structure has no vertices.
    fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        bounding_box(self.vertices())
    }

    /// Returns a characteristic length scale: the bounding box diagonal.
    fn length_scale(&self) -> f64 {
        self.bounding_box()
            .map_or(0.0, |(min, max)| (max - min).length())
    }
}

/// Axis-aligned bounding box of `points`, ignoring non-finite entries.
pub fn bounding_box(points: &[DVec3]) -> Option<(DVec3, DVec3)> {
    points
        .iter()
        .filter(|p| p.is_finite())
        .fold(None, |acc, &p| match acc {
            None => Some((p, p)),
            Some((min, max)) => Some((min.min(p), max.max(p))),
        })
}

/// Converts a vertex count or offset into the `u32` used for stored indices.
pub fn index_u32(n: usize, what: &'static str) -> Result<u32> {
    u32::try_from(n).map_err(|_| HopfError::CountOverflow { what })
}
