//! The Hopf fibre mapping.
//!
//! A point on the base sphere, given as colatitude `theta` and azimuth `phi`,
//! has a great circle of preimages on the unit 3-sphere. The parameter `alpha`
//! walks that circle; a full turn takes `alpha` across `[0, 4 PI)`.

use std::f64::consts::PI;
use std::ops::RangeInclusive;

use glam::{DVec3, DVec4};
use serde::{Deserialize, Serialize};

use crate::base::BasePoint;
use crate::error::{HopfError, Result};
use crate::options::{Options, Spacing};
use crate::projection::{project_all, stereographic_clamped, PolePolicy};
use crate::reparam::arc_length_alphas;

/// Upper end of the fibre parameter; `alpha` in `[0, FULL_TURN]` covers a fibre once.
pub const FULL_TURN: f64 = 4.0 * PI;

/// Evaluates the fibre mapping at `(theta, phi, alpha)`.
///
/// The components are stored as `x = X0, y = X1, z = X2, w = X3`. The result lies
/// on the unit 3-sphere for every real input.
#[allow(non_snake_case)]
pub fn hopf_point(theta: f64, phi: f64, alpha: f64) -> DVec4 {
    let (sin_half_theta, cos_half_theta) = (theta / 2.0).sin_cos();
    let (sin_sum, cos_sum) = ((alpha + phi) / 2.0).sin_cos();
    let (sin_diff, cos_diff) = ((alpha - phi) / 2.0).sin_cos();

    let X0 = cos_sum * sin_half_theta;
    let X1 = sin_sum * sin_half_theta;
    let X2 = cos_diff * cos_half_theta;
    let X3 = sin_diff * cos_half_theta;
    DVec4::new(X0, X1, X2, X3)
}

/// Maps a point of the 3-sphere back down to the unit base sphere.
///
/// Every point of the fibre over `(theta, phi)` lands on
/// `(sin theta cos phi, sin theta sin phi, cos theta)`.
pub fn hopf_base(p: DVec4) -> DVec3 {
    let re = p.x * p.z + p.y * p.w;
    let im = p.y * p.z - p.x * p.w;
    let height = (p.z * p.z + p.w * p.w) - (p.x * p.x + p.y * p.y);
    DVec3::new(2.0 * re, 2.0 * im, height)
}

/// A parameter tuple selecting one point of one fibre.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FibreParams {
    pub theta: f64,
    pub phi: f64,
    pub alpha: f64,
}

impl FibreParams {
    pub const fn new(theta: f64, phi: f64, alpha: f64) -> Self {
        Self { theta, phi, alpha }
    }

    /// Returns `self` if every component is finite.
    pub fn checked(self) -> Result<Self> {
        if self.theta.is_finite() && self.phi.is_finite() && self.alpha.is_finite() {
            Ok(self)
        } else {
            Err(HopfError::NonFiniteParameter {
                theta: self.theta,
                phi: self.phi,
                alpha: self.alpha,
            })
        }
    }

    /// Evaluates the fibre mapping, rejecting NaN and infinite input.
    pub fn evaluate(self) -> Result<DVec4> {
        let p = self.checked()?;
        Ok(hopf_point(p.theta, p.phi, p.alpha))
    }

    /// The base point these parameters sit over.
    pub fn base(&self) -> BasePoint {
        BasePoint::new(self.theta, self.phi)
    }
}

/// A fibre over a base point, restricted to an interval of `alpha`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fibre {
    base: BasePoint,
    alpha_start: f64,
    alpha_end: f64,
}

impl Fibre {
    /// Creates a fibre segment.
    ///
    /// `alpha_start` is clamped into `[0, 4 PI]` and `alpha_end` into
    /// `[alpha_start, 4 PI]`.
    pub fn new(base: impl Into<BasePoint>, alpha_start: f64, alpha_end: f64) -> Self {
        // max/min rather than clamp: a NaN bound collapses onto the interval.
        let alpha_start = alpha_start.max(0.0).min(FULL_TURN);
        let alpha_end = alpha_end.max(alpha_start).min(FULL_TURN);
        Self {
            base: base.into(),
            alpha_start,
            alpha_end,
        }
    }

    /// Creates the complete fibre, `alpha` in `[0, 4 PI]`.
    pub fn full(base: impl Into<BasePoint>) -> Self {
        Self::new(base, 0.0, FULL_TURN)
    }

    /// Returns the base point.
    pub fn base(&self) -> BasePoint {
        self.base
    }

    /// Returns the `alpha` interval.
    pub fn alpha_range(&self) -> RangeInclusive<f64> {
        self.alpha_start..=self.alpha_end
    }

    /// Returns true when the interval covers the whole circle.
    pub fn is_closed(&self) -> bool {
        (self.alpha_end - self.alpha_start - FULL_TURN).abs() < 1e-12
    }

    /// The point of the fibre at `alpha`.
    pub fn point_at(&self, alpha: f64) -> DVec4 {
        hopf_point(self.base.theta, self.base.phi, alpha)
    }

    /// `n` evenly spaced values of `alpha`, start inclusive, end exclusive.
    #[allow(clippy::cast_precision_loss)]
    pub fn alphas(&self, n: usize) -> Vec<f64> {
        if n == 0 {
            return Vec::new();
        }
        let delta = (self.alpha_end - self.alpha_start) / n as f64;
        (0..n)
            .map(|i| (i as f64).mul_add(delta, self.alpha_start))
            .collect()
    }

    /// `n` points of the fibre on the 3-sphere.
    pub fn sample(&self, n: usize) -> Vec<DVec4> {
        self.alphas(n)
            .into_iter()
            .map(|a| self.point_at(a))
            .collect()
    }

    /// `n` points of the fibre, stereographically projected.
    pub fn projected(&self, n: usize, policy: PolePolicy) -> Result<Vec<DVec3>> {
        project_all(&self.sample(n), policy)
    }

    /// A closure mapping `alpha` to the projected fibre point.
    ///
    /// Samples on the pole are clamped so the closure is total.
    pub fn projected_fn(&self) -> impl Fn(f64) -> DVec3 + '_ {
        move |alpha| stereographic_clamped(self.point_at(alpha))
    }

    /// The `alpha` schedule selected by `spacing`.
    pub fn schedule(&self, n: usize, spacing: Spacing) -> Result<Vec<f64>> {
        match spacing {
            Spacing::Uniform => Ok(self.alphas(n)),
            Spacing::ArcLength { detail } => {
                arc_length_alphas(self.projected_fn(), self.alpha_range(), n, detail)
            }
        }
    }

    /// Samples and projects the fibre according to `options`.
    pub fn projected_with(&self, options: &Options) -> Result<Vec<DVec3>> {
        let points: Vec<DVec4> = self
            .schedule(options.points_per_fibre, options.spacing)?
            .into_iter()
            .map(|a| self.point_at(a))
            .collect();
        project_all(&points, options.pole_policy)
    }
}
