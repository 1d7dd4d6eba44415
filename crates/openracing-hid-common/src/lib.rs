//! Common HID input abstractions for racing wheel protocol drivers
//!
//! Protocol crates decode raw reports; this crate describes what they hand
//! the host input layer: device identity, axis and key codes, capability
//! registration and event emission.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod device_info;
pub mod input;
pub mod mock;

pub use device_info::*;
pub use input::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HidCommonError {
    #[error("Capability registration failed: {0}")]
    RegistrationFailed(String),
}

pub type HidCommonResult<T> = Result<T, HidCommonError>;
