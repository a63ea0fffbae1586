//! Length estimates for sampled curves.

use std::ops::RangeInclusive;

use glam::DVec3;

/// Estimates the length of `alpha -> f(alpha)` over `range` with `n` straight steps.
///
/// `alpha` does not move at constant speed along a projected fibre, so the
/// estimate only converges as `n` grows.
#[allow(clippy::cast_precision_loss)]
pub fn path_length(f: impl Fn(f64) -> DVec3, range: &RangeInclusive<f64>, n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let (start, end) = (*range.start(), *range.end());
    let step = (end - start) / n as f64;

    let mut last = f(start);
    (1..=n).fold(0.0, |acc, i| {
        let next = f((i as f64).mul_add(step, start));
        let d = last.distance(next);
        last = next;
        acc + d
    })
}

/// Sum of the segment lengths of an open polyline.
pub fn polyline_length(points: &[DVec3]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}
