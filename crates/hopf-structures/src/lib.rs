//! Structure implementations for hopf-rs.
//!
//! This crate provides concrete geometric structures built from projected fibres:
//! - Point clouds
//! - Curve networks (one polyline per fibre)
//! - Surface meshes (fibres woven into quad bands)
//!
//! and the [`io`] module that writes them as PLY or OBJ files.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod curve_network;
pub mod io;
pub mod point_cloud;
pub mod surface_mesh;

pub use curve_network::{Curve, CurveNetwork};
pub use point_cloud::PointCloud;
pub use surface_mesh::{weave_fibres, MeshBuilder, SurfaceMesh};
