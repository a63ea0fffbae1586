//! Configuration options for sampling and export.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::projection::PolePolicy;
use crate::reparam::DEFAULT_DETAIL;

/// Options shared by the generators and exporters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Number of samples taken along each fibre.
    pub points_per_fibre: usize,

    /// Treatment of samples on the projection pole.
    pub pole_policy: PolePolicy,

    /// How `alpha` values are spread along a fibre.
    pub spacing: Spacing,

    /// PLY body encoding.
    pub ply_encoding: PlyEncoding,

    /// PLY coordinate scalar type.
    pub ply_scalar: PlyScalar,

    /// Write per-vertex normals with meshes.
    pub vertex_normals: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            points_per_fibre: 100,
            pole_policy: PolePolicy::Skip,
            spacing: Spacing::Uniform,
            ply_encoding: PlyEncoding::Ascii,
            ply_scalar: PlyScalar::Double,
            vertex_normals: false,
        }
    }
}

impl Options {
    /// Parses options from a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serializes the options as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Spacing of samples along a fibre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Spacing {
    /// Equal steps in `alpha`.
    #[default]
    Uniform,
    /// Equal steps in arc length of the projected curve.
    ///
    /// `detail` is the number of dense samples used to measure the curve.
    ArcLength { detail: usize },
}

impl Spacing {
    /// Arc-length spacing measured with [`DEFAULT_DETAIL`] segments.
    pub const fn arc_length() -> Self {
        Self::ArcLength {
            detail: DEFAULT_DETAIL,
        }
    }
}

/// Encoding of a PLY body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PlyEncoding {
    #[default]
    Ascii,
    BinaryLittleEndian,
    BinaryBigEndian,
}

/// Scalar type used for PLY coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PlyScalar {
    Float,
    #[default]
    Double,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let options = Options::from_json_str(r#"{ "points_per_fibre": 12 }"#)
            .unwrap();
        assert_eq!(options.points_per_fibre, 12);
        assert_eq!(options.pole_policy, PolePolicy::Skip);
        assert_eq!(options.spacing, Spacing::Uniform);
        assert!(!options.vertex_normals);
    }

    #[test]
    fn test_json_roundtrip() {
        let options = Options {
            points_per_fibre: 40,
            pole_policy: PolePolicy::Clamp,
            spacing: Spacing::ArcLength { detail: 2000 },
            ply_encoding: PlyEncoding::BinaryLittleEndian,
            ply_scalar: PlyScalar::Float,
            vertex_normals: true,
        };
        let json = options.to_json_string().unwrap();
        assert_eq!(Options::from_json_str(&json).unwrap(), options);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Options::from_json_str("{ not json").is_err());
    }
}
