//! Device calibration utilities
//!
//! This crate provides passive center calibration for racing wheel axes.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod center;
pub mod types;

pub use center::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalibrationError {
    #[error("Invalid calibration config: {0}")]
    InvalidConfig(String),
}

pub type CalibrationResult<T> = Result<T, CalibrationError>;
