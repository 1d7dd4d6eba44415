//! Thrustmaster T80 HID protocol: input report decoding and steering
//! auto-calibration.
//!
//! This crate is I/O-free. Raw reports come in as byte slices; decoded
//! axis and button values go out through the
//! [`openracing_hid_common::InputSink`] the host provides.

#![deny(static_mut_refs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod buttons;
pub mod driver;
pub mod ids;
pub mod input;
pub mod report;
pub mod steering;

pub use buttons::{DpadDirections, HAT_DIRECTIONS, HatSwitch, T80Buttons, decode_buttons};
pub use driver::{RawEventOutcome, T80Config, T80Driver, T80Wheel, emit_input};
pub use ids::{THRUSTMASTER_VENDOR_ID, model_name, product_ids};
pub use input::{DecodedReport, T80InputState, T80ReportDecoder, decode_input};
pub use report::{T80_REPORT_LEN, T80RawReport};
pub use steering::{STEERING_CENTER_OUT, remap_steering};

use openracing_calibration::CalibrationError;
use openracing_hid_common::HidCommonError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum T80Error {
    #[error("T80 initialization failed: {0}")]
    Initialization(#[from] HidCommonError),

    #[error("No input device registered for T80")]
    NoInputTarget,

    #[error("Invalid T80 config: {0}")]
    Config(#[from] CalibrationError),
}

pub type T80Result<T> = Result<T, T80Error>;
