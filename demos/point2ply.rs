//! Writes a single fibre as a PLY point cloud on stdout.
//!
//! Samples are spaced by arc length so the projected circle is evenly covered.
//!
//! Run with: cargo run --example `point2ply` > fibre.ply

use std::io::{BufWriter, Write};

use hopf::{io, Fibre, Options, PlyFormat, Result, Spacing, SurfacePoint};

fn main() -> Result<()> {
    env_logger::init();

    let options = Options {
        points_per_fibre: 20,
        spacing: Spacing::arc_length(),
        ..Options::default()
    };
    let fibre = Fibre::full(SurfacePoint::from_degrees(5.0, 5.0));
    let points = fibre.projected_with(&options)?;

    let stdout = std::io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    io::write_ply_points(&points, &mut writer, &PlyFormat::from(&options))?;
    writer.flush()?;
    Ok(())
}
