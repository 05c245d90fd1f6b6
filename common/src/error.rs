use thiserror::Error;

/// Precondition violations. Data-quality problems (NaN values, degenerate
/// geometry, missing dies) are never reported through this type.
#[derive(Debug, Error, PartialEq)]
pub enum WaferError {
    #[error("die size must be positive and finite, got {width} x {height}")]
    InvalidDieSize { width: f64, height: f64 },

    #[error("wafer diameter must be positive and finite, got {0}")]
    InvalidDiameter(f64),

    #[error("{name} exclusion must be non-negative and finite, got {value}")]
    NegativeExclusion { name: &'static str, value: f64 },

    #[error("grid center must be finite, got ({x}, {y})")]
    InvalidGridCenter { x: f64, y: f64 },

    #[error("a gradient needs at least two colors, got {0}")]
    InvalidGradient(usize),
}
