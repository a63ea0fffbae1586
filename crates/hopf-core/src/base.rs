//! Points on the base 2-sphere.
//!
//! [`BasePoint`] is the form the fibre mapper consumes: colatitude `theta`
//! measured from the north pole and azimuth `phi`. [`SurfacePoint`] is the
//! geographic latitude/longitude form used when picking seeds by hand.

use std::f64::consts::FRAC_PI_2;
use std::ops::Add;

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// A point on the base sphere in (colatitude, azimuth) radians.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BasePoint {
    /// Colatitude in `[0, PI]`.
    pub theta: f64,
    /// Azimuth in `[0, 2 PI)`.
    pub phi: f64,
}

impl BasePoint {
    /// Creates a base point from radians.
    pub const fn new(theta: f64, phi: f64) -> Self {
        Self { theta, phi }
    }

    /// Creates a base point from degrees.
    pub fn from_degrees(theta: f64, phi: f64) -> Self {
        Self::new(theta.to_radians(), phi.to_radians())
    }

    /// Returns true if both angles are finite.
    pub fn is_finite(&self) -> bool {
        self.theta.is_finite() && self.phi.is_finite()
    }

    /// Linear interpolation in (theta, phi) space.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            theta: t.mul_add(other.theta - self.theta, self.theta),
            phi: t.mul_add(other.phi - self.phi, self.phi),
        }
    }
}

impl From<(f64, f64)> for BasePoint {
    fn from((theta, phi): (f64, f64)) -> Self {
        Self::new(theta, phi)
    }
}

/// Point on a sphere given by latitude and longitude (radians).
#[derive(Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfacePoint {
    /// Latitude in radians, `+PI/2` at the north pole.
    pub lat: f64,
    /// Longitude in radians.
    pub lon: f64,
}

// Stored in radians, displayed in degrees.
impl std::fmt::Debug for SurfacePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfacePoint")
            .field("lat_degrees", &self.lat.to_degrees())
            .field("lon_degrees", &self.lon.to_degrees())
            .finish()
    }
}

impl SurfacePoint {
    /// Creates a surface point from radians.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Creates a surface point from degrees.
    pub fn from_degrees(lat: f64, lon: f64) -> Self {
        Self::new(lat.to_radians(), lon.to_radians())
    }

    /// Converts to the base point consumed by the fibre mapper.
    pub fn to_base(&self) -> BasePoint {
        BasePoint::new(FRAC_PI_2 - self.lat, self.lon)
    }

    /// Cartesian position on a sphere of radius `r`, right-handed Y-up.
    ///
    /// The north pole (`lat = 90deg`) is +Y and `lon = 90deg` on the equator is -Z.
    pub fn to_cartesian(&self, r: f64) -> DVec3 {
        let (sin_lat, cos_lat) = self.lat.sin_cos();
        let (sin_lon, cos_lon) = self.lon.sin_cos();
        DVec3::new(r * cos_lat * cos_lon, r * sin_lat, -r * cos_lat * sin_lon)
    }
}

impl From<SurfacePoint> for BasePoint {
    fn from(sp: SurfacePoint) -> Self {
        sp.to_base()
    }
}

/// Offsets latitude by `x` and longitude by `y`.
impl Add<DVec2> for SurfacePoint {
    type Output = Self;

    fn add(self, rhs: DVec2) -> Self {
        Self {
            lat: self.lat + rhs.x,
            lon: self.lon + rhs.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compass() {
        let cases = [
            (SurfacePoint::from_degrees(0.0, 0.0), DVec3::X),
            (SurfacePoint::from_degrees(0.0, 90.0), DVec3::NEG_Z),
            (SurfacePoint::from_degrees(90.0, 0.0), DVec3::Y),
        ];

        for (sp, expected) in cases {
            let output = sp.to_cartesian(1.0);
            assert!(
                (output - expected).length() < 1e-12,
                "{sp:?} -> {output} expected {expected}"
            );
        }
    }

    #[test]
    fn test_north_pole_maps_to_zero_colatitude() {
        let base = SurfacePoint::from_degrees(90.0, 45.0).to_base();
        assert!(base.theta.abs() < 1e-12);
        assert!((base.phi - 45f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn test_debug_shows_degrees() {
        let text = format!("{:?}", SurfacePoint::new(0.0, 0.0));
        assert_eq!(text, "SurfacePoint { lat_degrees: 0.0, lon_degrees: 0.0 }");
    }

    #[test]
    fn test_lerp_midpoint() {
        let a = BasePoint::new(0.0, 0.0);
        let b = BasePoint::new(1.0, 2.0);
        assert_eq!(a.lerp(&b, 0.5), BasePoint::new(0.5, 1.0));
    }

    #[test]
    fn test_add_offset() {
        let sp = SurfacePoint::new(0.1, 0.2) + DVec2::new(0.1, 0.3);
        assert!((sp.lat - 0.2).abs() < 1e-12);
        assert!((sp.lon - 0.5).abs() < 1e-12);
    }
}
