//! Generators turning base-sphere seeds into exportable structures.
//!
//! Each generator samples one fibre per seed according to [`Options`], projects
//! it, and assembles the result into a structure.

use glam::DVec3;
use hopf_core::{
    project_all, BasePoint, Fibre, FibreParams, Options, PolePolicy, Result, SamplingGrid,
};
use hopf_structures::{weave_fibres, CurveNetwork, PointCloud, SurfaceMesh};

/// Evaluates and projects a list of parameter tuples.
///
/// # Errors
///
/// NaN or infinite parameters fail with
/// [`HopfError::NonFiniteParameter`](hopf_core::HopfError::NonFiniteParameter).
/// Samples on the projection pole fail only under [`PolePolicy::Error`].
pub fn project_params<I>(params: I, policy: PolePolicy) -> Result<Vec<DVec3>>
where
    I: IntoIterator<Item = FibreParams>,
{
    let points = params
        .into_iter()
        .map(FibreParams::evaluate)
        .collect::<Result<Vec<_>>>()?;
    project_all(&points, policy)
}

/// Samples every tuple of `grid` into a point cloud.
///
/// # Errors
///
/// Returns [`HopfError::CountOverflow`](hopf_core::HopfError::CountOverflow)
/// if the grid size does not fit a `usize`, otherwise fails as [`project_params`].
pub fn grid_point_cloud(
    name: impl Into<String>,
    grid: &SamplingGrid,
    policy: PolePolicy,
) -> Result<PointCloud> {
    let total = grid.len()?;
    let points = project_params(grid.params(), policy)?;
    log::debug!("sampled {} of {total} grid tuples", points.len());
    Ok(PointCloud::new(name, points))
}

/// Samples and projects one complete fibre per seed.
///
/// # Errors
///
/// Fails when arc-length spacing meets a degenerate fibre or too few
/// samples, or when a sample hits the pole under [`PolePolicy::Error`].
pub fn sample_fibres<I>(seeds: I, options: &Options) -> Result<Vec<Vec<DVec3>>>
where
    I: IntoIterator,
    I::Item: Into<BasePoint>,
{
    seeds
        .into_iter()
        .map(|seed| Fibre::full(seed).projected_with(options))
        .collect()
}

/// One complete fibre per seed, flattened into a point cloud.
///
/// # Errors
///
/// Fails as [`sample_fibres`].
pub fn fibre_point_cloud<I>(
    name: impl Into<String>,
    seeds: I,
    options: &Options,
) -> Result<PointCloud>
where
    I: IntoIterator,
    I::Item: Into<BasePoint>,
{
    let fibres = sample_fibres(seeds, options)?;
    log::debug!("sampled {} fibres", fibres.len());
    Ok(PointCloud::from_fibres(name, &fibres))
}

/// One closed polyline per seed.
///
/// # Errors
///
/// Fails as [`sample_fibres`], or with
/// [`HopfError::CountOverflow`](hopf_core::HopfError::CountOverflow) when the
/// nodes outgrow `u32` indices.
pub fn fibre_curves<I>(
    name: impl Into<String>,
    seeds: I,
    options: &Options,
) -> Result<CurveNetwork>
where
    I: IntoIterator,
    I::Item: Into<BasePoint>,
{
    let fibres = sample_fibres(seeds, options)?;
    log::debug!("sampled {} fibres", fibres.len());
    CurveNetwork::from_fibres(name, fibres, true)
}

/// Weaves the fibres over `n_loops` seeds between `start` and `end` into a surface.
///
/// Neighbouring fibres are joined sample by sample, so every fibre must keep
/// `options.points_per_fibre` samples after projection.
///
/// # Errors
///
/// Fails as [`sample_fibres`], with
/// [`HopfError::TooFewSamples`](hopf_core::HopfError::TooFewSamples) for fewer
/// than two seeds or samples, and with
/// [`HopfError::SizeMismatch`](hopf_core::HopfError::SizeMismatch) when the pole
/// policy dropped samples from some fibres.
pub fn woven_surface(
    name: impl Into<String>,
    start: BasePoint,
    end: BasePoint,
    n_loops: usize,
    options: &Options,
) -> Result<SurfaceMesh> {
    let fibres = sample_fibres(hopf_core::weave(start, end, n_loops), options)?;
    weave_fibres(name, &fibres, true)
}
