//! Writing structures to files.
//!
//! Every helper creates (or truncates) the file at `path`, writes through a
//! buffered writer and logs a summary at `info`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use hopf_core::{Result, Structure};
use hopf_structures::io::{self, ObjFormat, PlyFormat};
use hopf_structures::{CurveNetwork, SurfaceMesh};

fn create(path: &Path) -> Result<BufWriter<File>> {
    Ok(BufWriter::new(File::create(path)?))
}

/// Writes the vertices of any structure as a PLY point cloud.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn save_ply_points(
    structure: &dyn Structure,
    path: impl AsRef<Path>,
    format: &PlyFormat,
) -> Result<()> {
    let path = path.as_ref();
    let mut out = create(path)?;
    io::write_ply_points(structure.vertices(), &mut out, format)?;
    out.flush()?;
    log::info!(
        "saved {} '{}' ({} points) to {}",
        structure.type_name(),
        structure.name(),
        structure.num_vertices(),
        path.display()
    );
    Ok(())
}

/// Writes a surface mesh as PLY, with vertex normals when `format.normals` is set.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written, or a PLY
/// error for a face with more than 255 corners.
pub fn save_ply_mesh(
    mesh: &SurfaceMesh,
    path: impl AsRef<Path>,
    format: &PlyFormat,
) -> Result<()> {
    let path = path.as_ref();
    let mut out = create(path)?;
    io::write_mesh_ply(mesh, &mut out, format)?;
    out.flush()?;
    log::info!("saved mesh '{}' to {}", mesh.name(), path.display());
    Ok(())
}

/// Writes a surface mesh as OBJ, with `vn` lines when `format.normals` is set.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn save_obj_mesh(
    mesh: &SurfaceMesh,
    path: impl AsRef<Path>,
    format: &ObjFormat,
) -> Result<()> {
    let path = path.as_ref();
    let mut out = create(path)?;
    io::write_obj_mesh(mesh, &mut out, format)?;
    out.flush()?;
    log::info!("saved mesh '{}' to {}", mesh.name(), path.display());
    Ok(())
}

/// Writes a curve network as OBJ polylines.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn save_obj_lines(network: &CurveNetwork, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut out = create(path)?;
    io::write_obj_lines(network, &mut out)?;
    out.flush()?;
    log::info!(
        "saved {} polylines '{}' to {}",
        network.curves().len(),
        network.name(),
        path.display()
    );
    Ok(())
}

/// Writes the vertices of any structure as OBJ `v` lines.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn save_obj_points(structure: &dyn Structure, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut out = create(path)?;
    io::write_obj_points(structure.vertices(), &mut out)?;
    out.flush()?;
    log::info!(
        "saved {} points '{}' to {}",
        structure.num_vertices(),
        structure.name(),
        path.display()
    );
    Ok(())
}
