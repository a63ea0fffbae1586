//! Error types for hopf-rs.

use thiserror::Error;

/// The main error type for hopf-rs operations.
#[derive(Error, Debug)]
pub enum HopfError {
    /// A fibre parameter was NaN or infinite.
    #[error("non-finite fibre parameter (theta = {theta}, phi = {phi}, alpha = {alpha})")]
    NonFiniteParameter { theta: f64, phi: f64, alpha: f64 },

    /// A point handed to the projector had a non-finite component.
    #[error("non-finite point cannot be projected")]
    NonFinitePoint,

    /// The point sits on the projection pole (X3 = 1).
    #[error("point lies on the stereographic pole (X3 = {w})")]
    ProjectionPole { w: f64 },

    /// Not enough samples were requested to perform an operation.
    #[error("too few samples: requested {requested}, need at least {minimum}")]
    TooFewSamples { requested: usize, minimum: usize },

    /// A curve has zero or non-finite length.
    #[error("curve is degenerate (zero or non-finite length)")]
    DegenerateCurve,

    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A count no longer fits the integer type that stores it.
    #[error("too many {what} to index")]
    CountOverflow { what: &'static str },

    /// A vertex index points outside the vertex buffer.
    #[error("index {index} out of bounds for {len} vertices")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A face has fewer than three corners.
    #[error("face {face} has {len} vertices, need at least 3")]
    InvalidFace { face: usize, len: usize },

    /// Malformed PLY content.
    #[error("PLY error: {0}")]
    Ply(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for hopf-rs operations.
pub type Result<T> = std::result::Result<T, HopfError>;
