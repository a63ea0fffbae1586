//! hopf-rs: point clouds and meshes from the Hopf fibration.
//!
//! Every point of the 2-sphere has a circle of preimages, its *fibre*, on the
//! 3-sphere. hopf-rs samples those fibres, projects them stereographically into
//! 3D space, and writes the result as PLY or OBJ files.
//!
//! # Quick Start
//!
//! ```no_run
//! use hopf::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     // Eighteen fibres over a circle of latitude.
//!     let seeds = ring(80f64.to_radians(), 0.0, 10f64.to_radians(), 18);
//!     let curves = fibre_curves("fibre", seeds, &Options::default())?;
//!
//!     save_obj_lines(&curves, "fibres.obj")?;
//!     Ok(())
//! }
//! ```
//!
//! # Pipeline
//!
//! - [`hopf_point`] maps `(theta, phi, alpha)` onto the unit 3-sphere
//! - [`stereographic`] projects a 3-sphere point into 3D space
//! - [`PointCloud`], [`CurveNetwork`] and [`SurfaceMesh`] collect the projected points
//! - the [`io`] writers and the `save_*` helpers serialize them

mod export;
mod generate;
mod init;

// Re-export core types
pub use hopf_core::{
    arc_length_alphas, bracket, hopf_base, hopf_point, inverse_stereographic, path_length,
    polyline_length, project_all, ring, stereographic, stereographic_clamped, weave, AxisSamples,
    BasePoint, Bracket, DVec3, DVec4, Fibre, FibreParams, HopfError, Options, PlyEncoding,
    PlyScalar, PolePolicy, Result, SamplingGrid, Spacing, Structure, SurfacePoint, FULL_TURN,
    POLE_EPSILON,
};

// Re-export structures and their writers
pub use hopf_structures::{weave_fibres, Curve, CurveNetwork, MeshBuilder, PointCloud, SurfaceMesh};

pub use hopf_structures::io::{self, ObjFormat, PlyFormat};

pub use export::{save_obj_lines, save_obj_mesh, save_obj_points, save_ply_mesh, save_ply_points};
pub use generate::{
    fibre_curves, fibre_point_cloud, grid_point_cloud, project_params, sample_fibres, woven_surface,
};
pub use init::init_logging;
