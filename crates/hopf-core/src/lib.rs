//! Core math for hopf-rs.
//!
//! This crate provides the pieces every other hopf-rs crate builds on:
//! - The fibre mapping [`hopf_point`] and the [`Fibre`] type
//! - Stereographic projection with a configurable [`PolePolicy`]
//! - Parameter grids and seed layouts on the base sphere
//! - Path length and arc-length reparametrization
//! - The [`Structure`] trait, [`Options`], and the [`HopfError`] type

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Constructors and accessors return plain values
#![allow(clippy::must_use_candidate)]
// theta/phi and lat/lon pairs are conventional
#![allow(clippy::similar_names)]

pub mod base;
pub mod error;
pub mod fibre;
pub mod length;
pub mod options;
pub mod projection;
pub mod reparam;
pub mod sampling;
pub mod structure;

pub use base::{BasePoint, SurfacePoint};
pub use error::{HopfError, Result};
pub use fibre::{hopf_base, hopf_point, Fibre, FibreParams, FULL_TURN};
pub use length::{path_length, polyline_length};
pub use options::{Options, PlyEncoding, PlyScalar, Spacing};
pub use projection::{
    inverse_stereographic, project_all, stereographic, stereographic_clamped, PolePolicy,
    POLE_EPSILON,
};
pub use reparam::{arc_length_alphas, bracket, Bracket, DEFAULT_DETAIL};
pub use sampling::{ring, weave, AxisSamples, SamplingGrid};
pub use structure::{index_u32, Structure};

// Re-export glam types for convenience
pub use glam::{DVec3, DVec4};
