//! Writes three rings of fibres as OBJ polylines on stdout.
//!
//! Each fibre becomes its own `o fibre_<i>` object with a closed `l` line.
//!
//! Run with: cargo run --example `points2obj_lines` > fibres.obj

use std::io::{BufWriter, Write};

use hopf::{fibre_curves, io, ring, BasePoint, Options, Result, Spacing};

fn seeds() -> Vec<BasePoint> {
    let deg = f64::to_radians;
    let mut seeds: Vec<BasePoint> = ring(deg(10.0), deg(10.0), deg(1.0), 270).collect();
    seeds.extend(ring(deg(20.0), deg(30.0), deg(5.0), 54));
    seeds.extend(ring(deg(30.0), deg(70.0), deg(10.0), 27));
    seeds
}

fn main() -> Result<()> {
    env_logger::init();

    let options = Options {
        points_per_fibre: 40,
        spacing: Spacing::arc_length(),
        ..Options::default()
    };
    let curves = fibre_curves("fibre", seeds(), &options)?;

    let stdout = std::io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    io::write_obj_lines(&curves, &mut writer)?;
    writer.flush()?;
    Ok(())
}
