//! Weaves neighbouring fibres into a band of quads and writes it as OBJ on stdout.
//!
//! Run with: cargo run --example `points2obj_mesh` > band.obj

use std::io::{BufWriter, Write};

use hopf::{io, woven_surface, BasePoint, ObjFormat, Options, Result};

fn main() -> Result<()> {
    env_logger::init();

    let options = Options {
        points_per_fibre: 48,
        vertex_normals: true,
        ..Options::default()
    };
    // Twenty seeds one degree apart on the 10 degree circle.
    let start = BasePoint::from_degrees(10.0, 10.0);
    let end = BasePoint::from_degrees(10.0, 30.0);
    let mesh = woven_surface("hopf_band", start, end, 20, &options)?;

    let stdout = std::io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    io::write_obj_mesh(&mesh, &mut writer, &ObjFormat::from(&options))?;
    writer.flush()?;
    Ok(())
}
