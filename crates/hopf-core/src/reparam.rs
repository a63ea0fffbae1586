//! Arc-length reparametrization.
//!
//! Evenly stepping `alpha` bunches projected fibre points together on the far
//! side of the curve and spreads them out near the pole. [`arc_length_alphas`]
//! picks the `alpha` values whose images are evenly spaced along the curve
//! instead: it measures the curve densely, then inverts the cumulative length
//! table with [`bracket`] and linear interpolation.

#![allow(clippy::cast_precision_loss)]

use std::ops::RangeInclusive;

use glam::DVec3;

use crate::error::{HopfError, Result};

/// Dense sample count used when none is configured.
pub const DEFAULT_DETAIL: usize = 1000;

/// Position of a value relative to a sorted slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// The value equals the element at this index.
    Exact(usize),
    /// The value lies strictly between the elements at `(low, high)`.
    Between(usize, usize),
    /// The value is outside the slice (or the slice is empty).
    OutOfBounds,
}

/// Binary search of `target` in a non-decreasing slice.
pub fn bracket<T: PartialOrd + Copy>(sorted: &[T], target: T) -> Bracket {
    let (Some(&first), Some(&last)) = (sorted.first(), sorted.last()) else {
        return Bracket::OutOfBounds;
    };
    // Written so that an unordered target (NaN) also lands here.
    if !(first <= target && target <= last) {
        return Bracket::OutOfBounds;
    }

    let i = sorted.partition_point(|v| *v < target);
    if sorted[i] <= target {
        Bracket::Exact(i)
    } else {
        Bracket::Between(i - 1, i)
    }
}

/// Returns `n_out` values of `alpha` in `range` (start inclusive, end exclusive)
/// whose images under `f` are evenly spaced by arc length.
///
/// The curve is measured with `n_detail` straight segments.
pub fn arc_length_alphas(
    f: impl Fn(f64) -> DVec3,
    range: RangeInclusive<f64>,
    n_out: usize,
    n_detail: usize,
) -> Result<Vec<f64>> {
    if n_out == 0 {
        return Err(HopfError::TooFewSamples {
            requested: n_out,
            minimum: 1,
        });
    }
    if n_detail < 2 {
        return Err(HopfError::TooFewSamples {
            requested: n_detail,
            minimum: 2,
        });
    }

    let (start, end) = (*range.start(), *range.end());
    let xs: Vec<f64> = (0..=n_detail)
        .map(|i| start + (end - start) * (i as f64) / (n_detail as f64))
        .collect();

    let mut dist = Vec::with_capacity(xs.len());
    let mut total = 0.0;
    let mut last = f(xs[0]);
    dist.push(0.0);
    for &x in &xs[1..] {
        let next = f(x);
        total += last.distance(next);
        last = next;
        dist.push(total);
    }

    if !(total.is_finite() && total > 0.0) {
        return Err(HopfError::DegenerateCurve);
    }
    log::debug!("arc length {total} measured over {n_detail} segments");

    let spacing = total / n_out as f64;
    (0..n_out)
        .map(|i| {
            let target = spacing * i as f64;
            match bracket(&dist, target) {
                Bracket::Exact(j) => Ok(xs[j]),
                Bracket::Between(lo, hi) => {
                    // Where the target falls within the bracket, in [0, 1].
                    let t = (target - dist[lo]) / (dist[hi] - dist[lo]);
                    Ok(t.mul_add(xs[hi] - xs[lo], xs[lo]))
                }
                Bracket::OutOfBounds => Err(HopfError::DegenerateCurve),
            }
        })
        .collect()
}
