//! Error types for DrishtiEval

use thiserror::Error;

/// DrishtiEval error type.
///
/// Expected evaluation outcomes (an unmatched detection, a step with no
/// samples or no vehicles) are not errors; only misconfiguration and
/// out-of-range dataset access surface here.
#[derive(Error, Debug)]
pub enum EvalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Simulation step {index} out of range (dataset has {steps} steps)")]
    StepOutOfRange { index: usize, steps: usize },
}

pub type Result<T> = std::result::Result<T, EvalError>;
