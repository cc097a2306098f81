//! Validation failures for trajectory evaluation.
//!
//! Every check happens before any sample is computed, so a returned error
//! never leaves a partially-filled output behind that should be trusted.
use thiserror::Error;

/// Why a trajectory could not be evaluated.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TrajectoryError {
    /// Smoothness order outside the coefficient table.
    #[error("Unsupported smoothness order {order}, expected 1..=7")]
    UnsupportedOrder { order: usize },

    /// Start and end vectors differ in length.
    #[error("Dimension mismatch: {start} start values vs {end} end values")]
    DimensionMismatch { start: usize, end: usize },

    /// Final time sample is not exactly the transition time.
    #[error("Final time sample {last} does not equal transition time {transition_time}")]
    BoundaryTimeMismatch { last: f64, transition_time: f64 },

    /// Time samples are empty (`index: None`), or decrease or are NaN at `index`.
    #[error("Invalid times: samples must be non-empty and non-decreasing (index {index:?})")]
    InvalidTimes { index: Option<usize> },

    /// Transition time is zero, negative, or not finite.
    #[error("Transition time must be finite and positive, got {transition_time}")]
    InvalidTransitionTime { transition_time: f64 },

    /// Default grid step is zero, negative, or not finite.
    #[error("Grid step must be finite and positive, got {step}")]
    InvalidStep { step: f64 },

    /// Output storage does not match the number of samples times dimensions.
    #[error("Output size mismatch: expected {expected} entries, got {actual}")]
    OutputSizeMismatch { expected: usize, actual: usize },

    /// More dimensions than the fixed-capacity evaluator can hold.
    #[error("Too many dimensions: {ndims} exceeds maximum of {max}")]
    TooManyDimensions { ndims: usize, max: usize },

    /// More polynomial terms than the fixed-capacity representation holds.
    #[error("Too many polynomial terms: {nterms} exceeds maximum of {max}")]
    TooManyTerms { nterms: usize, max: usize },

    /// A constant or derived coefficient does not fit in the working float type.
    #[error("Unrepresentable number")]
    Unrepresentable,
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, TrajectoryError>;
