//! Parameter grids and seed layouts on the base sphere.

#![allow(clippy::cast_precision_loss)]

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use crate::base::BasePoint;
use crate::error::{HopfError, Result};
use crate::fibre::{FibreParams, FULL_TURN};

/// Evenly spaced samples of one parameter axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSamples {
    pub start: f64,
    pub end: f64,
    pub count: usize,
    /// Whether the last sample sits on `end`.
    pub inclusive: bool,
}

impl AxisSamples {
    /// Samples `[start, end]`, both ends included.
    pub const fn closed(start: f64, end: f64, count: usize) -> Self {
        Self {
            start,
            end,
            count,
            inclusive: true,
        }
    }

    /// Samples `[start, end)`.
    pub const fn half_open(start: f64, end: f64, count: usize) -> Self {
        Self {
            start,
            end,
            count,
            inclusive: false,
        }
    }

    /// A single fixed value.
    pub const fn constant(value: f64) -> Self {
        Self::closed(value, value, 1)
    }

    /// Step between consecutive samples.
    pub fn step(&self) -> f64 {
        let intervals = if self.inclusive {
            self.count.saturating_sub(1)
        } else {
            self.count
        };
        if intervals == 0 {
            0.0
        } else {
            (self.end - self.start) / intervals as f64
        }
    }

    /// The `i`-th sample value.
    pub fn value(&self, i: usize) -> f64 {
        (i as f64).mul_add(self.step(), self.start)
    }

    /// All sample values in order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(|i| self.value(i))
    }
}

/// A rectangular grid over `(theta, phi, alpha)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingGrid {
    pub theta: AxisSamples,
    pub phi: AxisSamples,
    pub alpha: AxisSamples,
}

impl SamplingGrid {
    /// A grid covering the whole base sphere with complete fibres.
    pub const fn sphere(n_theta: usize, n_phi: usize, n_alpha: usize) -> Self {
        Self {
            theta: AxisSamples::closed(0.0, PI, n_theta),
            phi: AxisSamples::half_open(0.0, TAU, n_phi),
            alpha: AxisSamples::half_open(0.0, FULL_TURN, n_alpha),
        }
    }

    /// Total number of parameter tuples.
    ///
    /// Fails with [`HopfError::CountOverflow`] when the product does not fit a `usize`.
    pub fn len(&self) -> Result<usize> {
        self.theta
            .count
            .checked_mul(self.phi.count)
            .and_then(|n| n.checked_mul(self.alpha.count))
            .ok_or(HopfError::CountOverflow {
                what: "grid samples",
            })
    }

    /// Returns true if the grid has no tuples.
    pub fn is_empty(&self) -> bool {
        self.theta.count == 0 || self.phi.count == 0 || self.alpha.count == 0
    }

    /// Base points in theta-major order.
    pub fn base_points(&self) -> impl Iterator<Item = BasePoint> + '_ {
        self.theta
            .values()
            .flat_map(move |theta| self.phi.values().map(move |phi| BasePoint::new(theta, phi)))
    }

    /// Every `(theta, phi, alpha)` tuple, alpha varying fastest.
    pub fn params(&self) -> impl Iterator<Item = FibreParams> + '_ {
        self.base_points().flat_map(move |b| {
            self.alpha
                .values()
                .map(move |alpha| FibreParams::new(b.theta, b.phi, alpha))
        })
    }
}

/// Divides the segment from `start` to `end` into `n_loops` seeds.
///
/// The start is included and the end excluded, so consecutive segments chain
/// without repeating a seed.
pub fn weave(start: BasePoint, end: BasePoint, n_loops: usize) -> impl Iterator<Item = BasePoint> {
    (0..n_loops).map(move |i| start.lerp(&end, i as f64 / n_loops as f64))
}

/// `count` seeds at a fixed `theta`, stepping `phi` by `phi_step` from `phi_start`.
pub fn ring(
    theta: f64,
    phi_start: f64,
    phi_step: f64,
    count: usize,
) -> impl Iterator<Item = BasePoint> {
    (0..count).map(move |i| BasePoint::new(theta, (i as f64).mul_add(phi_step, phi_start)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_closed_hits_both_ends() {
        let axis = AxisSamples::closed(0.0, 1.0, 5);
        let values: Vec<f64> = axis.values().collect();
        assert_eq!(values.len(), 5);
        assert!((values[4] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_axis_half_open_excludes_end() {
        let axis = AxisSamples::half_open(0.0, 1.0, 4);
        let values: Vec<f64> = axis.values().collect();
        assert!((values[3] - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_axis_constant() {
        let axis = AxisSamples::constant(2.5);
        assert_eq!(axis.values().collect::<Vec<_>>(), vec![2.5]);
    }

    #[test]
    fn test_grid_order_and_len() {
        let grid = SamplingGrid::sphere(3, 4, 5);
        assert_eq!(grid.len().unwrap(), 60);
        assert!(!grid.is_empty());
        let params: Vec<FibreParams> = grid.params().collect();
        assert_eq!(params.len(), 60);
        assert_eq!(params[0].alpha, 0.0);
        assert!(params[1].alpha > 0.0);
        assert_eq!(params[0].phi, params[4].phi);
        assert!(params[5].phi > params[4].phi);
        assert!((params[59].theta - PI).abs() < 1e-12);
    }

    #[test]
    fn test_grid_len_overflow() {
        let grid = SamplingGrid::sphere(usize::MAX, 2, 1);
        assert!(matches!(grid.len(), Err(HopfError::CountOverflow { .. })));

        let empty = SamplingGrid::sphere(usize::MAX, 0, 3);
        assert!(empty.is_empty());
        assert_eq!(empty.len().unwrap(), 0);
    }

    #[test]
    fn test_weave_excludes_end() {
        let start = BasePoint::new(0.5, 0.0);
        let end = BasePoint::new(0.5, 1.0);
        let seeds: Vec<BasePoint> = weave(start, end, 4).collect();
        assert_eq!(seeds.len(), 4);
        assert_eq!(seeds[0], start);
        assert!((seeds[3].phi - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_ring_steps_phi() {
        let seeds: Vec<BasePoint> = ring(0.3, 1.0, 0.5, 3).collect();
        assert!((seeds[2].phi - 2.0).abs() < 1e-12);
        assert!(seeds.iter().all(|s| (s.theta - 0.3).abs() < 1e-12));
    }
}
