//! Samples a (theta, phi, alpha) grid over the whole base sphere and saves it as PLY.
//!
//! Options are read from the JSON file named by `HOPF_OPTIONS` when it is set.
//!
//! Run with: HOPF_OPTIONS=options.json cargo run --example `sphere_grid`

use hopf::{grid_point_cloud, save_ply_points, Options, PlyFormat, Result, SamplingGrid};

fn main() -> Result<()> {
    env_logger::init();

    let options = match std::env::var_os("HOPF_OPTIONS") {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    log::info!("options: {options:?}");

    let grid = SamplingGrid::sphere(12, 24, options.points_per_fibre);
    let cloud = grid_point_cloud("sphere_grid", &grid, options.pole_policy)?;

    let format = PlyFormat::from(&options).with_comment("hopf fibration sphere grid");
    save_ply_points(&cloud, "sphere_grid.ply", &format)?;
    Ok(())
}
