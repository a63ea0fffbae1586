//! Stereographic projection from the 3-sphere into 3D space.
//!
//! The projection is taken from the pole `(0, 0, 0, 1)`. Points at (or within
//! [`POLE_EPSILON`] of) the pole have no finite image; what happens to them is
//! chosen with [`PolePolicy`].

use glam::{DVec3, DVec4};
use serde::{Deserialize, Serialize};

use crate::error::{HopfError, Result};

/// Distance from `X3 = 1` below which a point counts as the pole.
pub const POLE_EPSILON: f64 = 16.0 * f64::EPSILON;

/// How samples landing on the projection pole are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PolePolicy {
    /// Drop the sample.
    #[default]
    Skip,
    /// Clamp the denominator to [`POLE_EPSILON`], giving a distant but finite point.
    Clamp,
    /// Fail with [`HopfError::ProjectionPole`].
    Error,
}

/// Projects `p` to `(X0, X1, X2) / (1 - X3)`.
pub fn stereographic(p: DVec4) -> Result<DVec3> {
    if !p.is_finite() {
        return Err(HopfError::NonFinitePoint);
    }
    let denom = 1.0 - p.w;
    if denom.abs() < POLE_EPSILON {
        return Err(HopfError::ProjectionPole { w: p.w });
    }
    Ok(p.truncate() / denom)
}

/// Projects `p`, clamping the denominator away from zero.
pub fn stereographic_clamped(p: DVec4) -> DVec3 {
    let denom = 1.0 - p.w;
    let denom = if denom.abs() < POLE_EPSILON {
        POLE_EPSILON
    } else {
        denom
    };
    p.truncate() / denom
}

/// Maps a point of 3D space back onto the unit 3-sphere.
pub fn inverse_stereographic(q: DVec3) -> DVec4 {
    let r2 = q.length_squared();
    let scale = 1.0 / (r2 + 1.0);
    (2.0 * q).extend(r2 - 1.0) * scale
}

/// Projects every point of `points`, treating the pole according to `policy`.
pub fn project_all(points: &[DVec4], policy: PolePolicy) -> Result<Vec<DVec3>> {
    let mut out = Vec::with_capacity(points.len());
    let mut skipped = 0usize;
    let mut clamped = 0usize;

    for &p in points {
        match stereographic(p) {
            Ok(q) => out.push(q),
            Err(HopfError::ProjectionPole { .. }) => match policy {
                PolePolicy::Skip => skipped += 1,
                PolePolicy::Clamp => {
                    clamped += 1;
                    out.push(stereographic_clamped(p));
                }
                PolePolicy::Error => return Err(HopfError::ProjectionPole { w: p.w }),
            },
            Err(e) => return Err(e),
        }
    }

    if skipped > 0 {
        log::debug!("skipped {skipped} sample(s) on the projection pole");
    }
    if clamped > 0 {
        log::warn!("clamped {clamped} sample(s) on the projection pole");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fibre::hopf_point;
    use std::f64::consts::{FRAC_PI_2, SQRT_2};

    const POLE: DVec4 = DVec4::new(0.0, 0.0, 0.0, 1.0);

    #[test]
    fn test_equator_end_to_end() {
        let q = stereographic(hopf_point(FRAC_PI_2, 0.0, 0.0)).unwrap();
        let h = SQRT_2 / 2.0;
        assert!((q - DVec3::new(h, 0.0, h)).length() < 1e-9);
    }

    #[test]
    fn test_south_pole_maps_to_origin() {
        let q = stereographic(DVec4::new(0.0, 0.0, 0.0, -1.0)).unwrap();
        assert!(q.length() < 1e-12);
    }

    #[test]
    fn test_pole_is_an_error() {
        let err = stereographic(POLE).unwrap_err();
        assert!(matches!(err, HopfError::ProjectionPole { .. }));
    }

    #[test]
    fn test_non_finite_point() {
        let err = stereographic(DVec4::new(f64::NAN, 0.0, 0.0, 0.0))
            .unwrap_err();
        assert!(matches!(err, HopfError::NonFinitePoint));
    }

    #[test]
    fn test_inverse_roundtrip() {
        for i in 0..50 {
            let t = f64::from(i) * 0.37;
            let p = hopf_point(0.3 + t * 0.05, t, 2.0 * t);
            if (1.0 - p.w).abs() < 1e-6 {
                continue;
            }
            let back = inverse_stereographic(stereographic(p).unwrap());
            assert!((back - p).length() < 1e-9, "{p} -> {back}");
        }
    }

    #[test]
    fn test_project_all_policies() {
        let points = [DVec4::new(1.0, 0.0, 0.0, 0.0), POLE];

        let skipped = project_all(&points, PolePolicy::Skip).unwrap();
        assert_eq!(skipped.len(), 1);

        let clamped = project_all(&points, PolePolicy::Clamp).unwrap();
        assert_eq!(clamped.len(), 2);
        assert!(clamped[1].is_finite());

        assert!(project_all(&points, PolePolicy::Error).is_err());
    }

    #[test]
    fn test_project_all_propagates_nan() {
        let points = [DVec4::splat(f64::NAN)];
        assert!(project_all(&points, PolePolicy::Skip).is_err());
    }
}
