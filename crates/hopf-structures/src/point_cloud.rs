//! Point cloud structure.

use glam::DVec3;
use hopf_core::structure::Structure;

/// An ordered set of projected points without connectivity.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud {
    name: String,
    points: Vec<DVec3>,
}

impl PointCloud {
    /// Creates a new point cloud.
    pub fn new(name: impl Into<String>, points: Vec<DVec3>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Creates a point cloud from fibres, concatenated in order.
    pub fn from_fibres<I>(name: impl Into<String>, fibres: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<[DVec3]>,
    {
        let mut points = Vec::new();
        for fibre in fibres {
            points.extend_from_slice(fibre.as_ref());
        }
        Self::new(name, points)
    }

    /// Returns the number of points.
    #[must_use]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Returns true if there are no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the points.
    #[must_use]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Replaces the point positions.
    pub fn update_points(&mut self, points: Vec<DVec3>) {
        self.points = points;
    }

    /// Appends points to the cloud.
    pub fn extend(&mut self, points: impl IntoIterator<Item = DVec3>) {
        self.points.extend(points);
    }
}

impl Structure for PointCloud {
    fn name(&self) -> &str {
        &self.name
    }

    fn type_name(&self) -> &'static str {
        "PointCloud"
    }

    fn vertices(&self) -> &[DVec3] {
        &self.points
    }
}
