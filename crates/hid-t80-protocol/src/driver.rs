//! T80 driver lifecycle: configure, raw report handling, removal.
//!
//! The host framework owns device enumeration and the input device; this
//! module only registers capabilities on it and pushes decoded batches into
//! it. Each configured wheel gets its own [`T80Wheel`] handle holding the
//! per-device calibration state; dropping the handle releases it.

#![deny(static_mut_refs)]

use crate::buttons::KEY_BINDINGS;
use crate::ids::model_name;
use crate::input::{DecodedReport, T80InputState, T80ReportDecoder};
use crate::report::{T80_REPORT_LEN, T80RawReport};
use crate::{T80Error, T80Result};
use openracing_calibration::{CenterCalibrationConfig, CenterCalibrator, CenterObservation};
use openracing_hid_common::{
    AbsAxis, AbsInfo, HidCommonResult, HidDeviceInfo, InputCapabilities, InputSink, Key,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

const T80_LOG_BUTTONS_ENV: &str = "OPENRACING_T80_LOG_BUTTONS";

/// Axes registered for every wheel: steering, gas, brake.
pub const T80_AXES: [AbsAxis; 3] = [AbsAxis::X, AbsAxis::Y, AbsAxis::Z];

/// Keys registered for every wheel.
pub const T80_KEYS: [Key; 16] = [
    Key::South,
    Key::East,
    Key::West,
    Key::North,
    Key::TL,
    Key::TR,
    Key::TL2,
    Key::TR2,
    Key::ThumbL,
    Key::ThumbR,
    Key::Start,
    Key::Select,
    Key::DpadUp,
    Key::DpadDown,
    Key::DpadLeft,
    Key::DpadRight,
];

/// Driver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct T80Config {
    pub calibration: CenterCalibrationConfig,
    /// Log bytes 5..=9 at debug level whenever any of them is non-zero.
    /// Used to work out button mappings.
    pub log_button_bytes: bool,
}

fn parse_bool_env(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on" | "enable" | "enabled"
    )
}

impl T80Config {
    /// Default config with `log_button_bytes` taken from
    /// `OPENRACING_T80_LOG_BUTTONS`.
    pub fn from_env() -> Self {
        Self {
            log_button_bytes: std::env::var(T80_LOG_BUTTONS_ENV)
                .ok()
                .is_some_and(|v| parse_bool_env(&v)),
            ..Self::default()
        }
    }
}

/// Outcome of handling one raw report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawEventOutcome {
    /// Events were emitted and the batch synced.
    Handled,
    /// The report was too short; nothing was emitted.
    Skipped,
}

/// Driver entry point shared by every T80 attached to the host.
#[derive(Debug, Clone, Default)]
pub struct T80Driver {
    config: T80Config,
}

impl T80Driver {
    /// # Errors
    ///
    /// Returns [`T80Error::Config`] if the calibration config is invalid.
    pub fn new(config: T80Config) -> T80Result<Self> {
        config.calibration.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &T80Config {
        &self.config
    }

    /// Registers capabilities on `input` and allocates per-device state.
    ///
    /// # Errors
    ///
    /// Returns [`T80Error::Initialization`] if the framework rejects a
    /// capability; the device is then unusable.
    pub fn configure(
        &self,
        info: &HidDeviceInfo,
        input: &mut dyn InputCapabilities,
    ) -> T80Result<T80Wheel> {
        register_capabilities(input).inspect_err(|e| {
            error!(device = %info.usb_id(), error = %e, "T80 capability registration failed");
        })?;

        let decoder = T80ReportDecoder::new(self.config.calibration)?;
        info!(
            device = %info.usb_id(),
            model = model_name(info.product_id),
            path = %info.path,
            "T80 racing wheel configured"
        );
        Ok(T80Wheel {
            info: info.clone(),
            decoder,
            log_button_bytes: self.config.log_button_bytes,
        })
    }
}

fn register_capabilities(input: &mut dyn InputCapabilities) -> HidCommonResult<()> {
    input.clear_capabilities();
    for axis in T80_AXES {
        input.set_abs_params(axis, AbsInfo::full_u16())?;
    }
    for key in T80_KEYS {
        input.set_key_capability(key)?;
    }
    Ok(())
}

/// Pushes one decoded report into `sink` and closes the batch.
pub fn emit_input<S: InputSink + ?Sized>(state: &T80InputState, sink: &mut S) {
    sink.report_abs(AbsAxis::X, i32::from(state.steering));
    sink.report_abs(AbsAxis::Y, i32::from(state.gas));
    sink.report_abs(AbsAxis::Z, i32::from(state.brake));

    for (key, pressed) in state.dpad().key_states() {
        sink.report_key(key, pressed);
    }
    for (button, key) in KEY_BINDINGS {
        sink.report_key(key, state.is_pressed(button));
    }
    sink.sync();
}

/// Per-device handle created by [`T80Driver::configure`].
#[derive(Debug, Clone)]
pub struct T80Wheel {
    info: HidDeviceInfo,
    decoder: T80ReportDecoder,
    log_button_bytes: bool,
}

impl T80Wheel {
    pub fn info(&self) -> &HidDeviceInfo {
        &self.info
    }

    pub fn calibration(&self) -> &CenterCalibrator {
        self.decoder.calibrator()
    }

    /// Handles one raw report from the device.
    ///
    /// # Errors
    ///
    /// Returns [`T80Error::NoInputTarget`] when `input` is `None`. The wheel
    /// stays usable and later reports are handled normally.
    pub fn raw_event<S: InputSink + ?Sized>(
        &mut self,
        data: &[u8],
        input: Option<&mut S>,
    ) -> T80Result<RawEventOutcome> {
        if data.len() < T80_REPORT_LEN {
            return Ok(RawEventOutcome::Skipped);
        }
        let Some(sink) = input else {
            error!(device = %self.info.usb_id(), "no inputs found");
            return Err(T80Error::NoInputTarget);
        };
        let Some(decoded) = self.decoder.decode(data) else {
            return Ok(RawEventOutcome::Skipped);
        };

        self.log_report(data, &decoded);
        emit_input(&decoded.input, sink);
        Ok(RawEventOutcome::Handled)
    }

    fn log_report(&self, data: &[u8], decoded: &DecodedReport) {
        if let CenterObservation::Completed { center } = decoded.calibration {
            info!(
                device = %self.info.usb_id(),
                center,
                "Auto-calibrated center position"
            );
        }

        if self.log_button_bytes
            && let Some(report) = T80RawReport::new(data)
        {
            let [b5, b6, b7, b8, b9] = report.button_block();
            if b5 | b6 | b7 | b8 | b9 != 0 {
                debug!(
                    device = %self.info.usb_id(),
                    "Buttons: b5={b5:02x} b6={b6:02x} b7={b7:02x} b8={b8:02x} b9={b9:02x}"
                );
            }
        }
    }

    /// Releases the per-device state.
    pub fn remove(self) {
        debug!(
            device = %self.info.usb_id(),
            calibrated = self.calibration().is_calibrated(),
            center = self.calibration().center(),
            "T80 removed"
        );
    }
}
