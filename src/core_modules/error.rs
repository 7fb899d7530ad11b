// THEORY:
// The `error` module defines the single failure surface of the scanning engine.
// Every error is a validation error: once a bound set and a set of channel
// planes have passed the checks, a scan cannot fail. Because of this, every
// variant is detected *before* any pixel is touched, and each one carries
// enough context for a caller to identify the exact offending input — which
// bound field, at which index in the set, with what expected and actual
// lengths — without re-running the validation themselves.

use thiserror::Error;

/// Identifies which side of a bound pair failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundField {
    Lower,
    Upper,
}

impl std::fmt::Display for BoundField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundField::Lower => write!(f, "lower"),
            BoundField::Upper => write!(f, "upper"),
        }
    }
}

/// All the ways a scan invocation can be rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScanError {
    /// A lower or upper bound has an inadmissible length for the requested
    /// channel check mode.
    #[error("{field} bound of box {index} must have {expected} values, got {actual}")]
    InvalidBoundShape {
        field: BoundField,
        index: usize,
        expected: &'static str,
        actual: usize,
    },

    /// A bound box pairs a lower and an upper bound of different lengths.
    #[error("bound box {index} has mismatched bound lengths (lower: {lower}, upper: {upper})")]
    UnevenBounds {
        index: usize,
        lower: usize,
        upper: usize,
    },

    /// A bound box disagrees with the rest of its set on dimensionality.
    #[error(
        "bound box {index} has {actual} dimensions but the set established {expected}; \
         all boxes scanned together must share one dimensionality"
    )]
    MismatchedBoundSet {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// The channel planes contain no pixels. Scanning would make every
    /// fraction 0/0, so empty planes are rejected up front.
    #[error("channel planes are empty; nothing to scan")]
    EmptyPlanes,

    /// The declared image width was zero, which makes the flat-index to
    /// (row, col) mapping undefined.
    #[error("image width must be greater than zero")]
    InvalidWidth,

    /// The three channel planes do not agree on pixel count.
    #[error(
        "channel planes must have equal lengths (hue: {hue}, saturation: {saturation}, value: {value})"
    )]
    PlaneLengthMismatch {
        hue: usize,
        saturation: usize,
        value: usize,
    },

    /// The parallel worker pool shut down before a dispatched scan completed.
    #[error("scan worker pool is no longer running")]
    WorkerPoolClosed,
}
