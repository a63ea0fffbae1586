//! File export for structures.
//!
//! - [`ply`]: point clouds and meshes in the PLY format (via `ply-rs`)
//! - [`obj`]: points, polylines, and meshes in the Wavefront OBJ format

pub mod obj;
pub mod ply;

pub use obj::{write_obj_lines, write_obj_mesh, write_obj_points, ObjFormat};
pub use ply::{read_ply_points, write_mesh_ply, write_ply_points, PlyFormat};
