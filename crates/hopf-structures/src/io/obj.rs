//! Wavefront OBJ export.
//!
//! OBJ indices run from 1 to N, so every stored 0-based index is shifted by
//! one on the way out.

use std::io::Write;

use glam::DVec3;
use hopf_core::error::Result;
use hopf_core::options::Options;
use hopf_core::structure::Structure;

use crate::curve_network::CurveNetwork;
use crate::surface_mesh::SurfaceMesh;

/// Settings for OBJ mesh output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ObjFormat {
    /// Writes `vn` lines and `f v//vn` corners.
    pub normals: bool,
}

impl From<&Options> for ObjFormat {
    fn from(options: &Options) -> Self {
        Self {
            normals: options.vertex_normals,
        }
    }
}

fn write_vec3s<W: Write>(tag: &str, values: &[DVec3], out: &mut W) -> Result<()> {
    for v in values {
        writeln!(out, "{tag} {} {} {}", v.x, v.y, v.z)?;
    }
    Ok(())
}

fn write_indices<W, I>(tag: &str, indices: I, out: &mut W) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = usize>,
{
    write!(out, "{tag}")?;
    for i in indices {
        write!(out, " {}", i + 1)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Writes bare `v` lines.
pub fn write_obj_points<W: Write>(points: &[DVec3], out: &mut W) -> Result<()> {
    write_vec3s("v", points, out)?;
    log::debug!("wrote {} OBJ vertices", points.len());
    Ok(())
}

/// Writes each curve as its own object: `o <name>_<i>`, its `v` lines, then one `l` line.
///
/// A polyline needs two vertices, so curves with fewer nodes are left out
/// and the indices of later curves close the gap. Networks without recorded
/// curves are written as a single object with one `l` line per edge.
pub fn write_obj_lines<W: Write>(network: &CurveNetwork, out: &mut W) -> Result<()> {
    let nodes = network.nodes();
    if network.curves().is_empty() {
        writeln!(out, "o {}", network.name())?;
        write_vec3s("v", nodes, out)?;
        for [tail, tip] in network.edges() {
            write_indices("l", [tail as usize, tip as usize], out)?;
        }
        return Ok(());
    }

    let mut written = 0;
    let mut skipped = 0;
    for (i, (curve, run)) in network
        .curves()
        .iter()
        .zip(network.polylines())
        .enumerate()
    {
        if run.len() < 2 {
            skipped += 1;
            continue;
        }
        let range = curve.nodes.start as usize..curve.nodes.end as usize;
        writeln!(out, "o {}_{i}", network.name())?;
        write_vec3s("v", &nodes[range.clone()], out)?;
        let offset = written;
        let local = run.iter().map(|&n| n as usize - range.start + offset);
        write_indices("l", local, out)?;
        written += range.len();
    }

    if skipped > 0 {
        log::debug!("skipped {skipped} curve(s) with fewer than 2 nodes");
    }
    log::debug!(
        "wrote {} OBJ polylines over {written} vertices",
        network.curves().len() - skipped
    );
    Ok(())
}

/// Writes `o <name>`, every vertex, optionally every vertex normal, then every face.
pub fn write_obj_mesh<W: Write>(
    mesh: &SurfaceMesh,
    out: &mut W,
    format: &ObjFormat,
) -> Result<()> {
    mesh.validate()?;
    writeln!(out, "o {}", mesh.name())?;
    write_vec3s("v", mesh.vertices(), out)?;
    if format.normals {
        write_vec3s("vn", mesh.vertex_normals(), out)?;
    }
    for face in mesh.faces() {
        if format.normals {
            write!(out, "f")?;
            for &i in face {
                let i = u64::from(i) + 1;
                write!(out, " {i}//{i}")?;
            }
            writeln!(out)?;
        } else {
            write_indices("f", face.iter().map(|&i| i as usize), out)?;
        }
    }
    log::debug!(
        "wrote OBJ mesh with {} vertices and {} faces",
        mesh.num_vertices(),
        mesh.num_faces()
    );
    Ok(())
}
