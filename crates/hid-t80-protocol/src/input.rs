//! T80 input report decoding.
//!
//! [`decode_input`] is a pure function over a report view and a center
//! value. [`T80ReportDecoder`] adds the per-device calibration state. Each
//! report's raw steering is fed to the calibrator before remapping, so the
//! remap always uses the freshest center.

#![deny(static_mut_refs)]

use crate::buttons::{DpadDirections, HatSwitch, T80Buttons, decode_buttons};
use crate::report::T80RawReport;
use crate::steering::remap_steering;
use openracing_calibration::{
    CalibrationResult, CenterCalibrationConfig, CenterCalibrator, CenterObservation,
};

/// Decoded state of one T80 input report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct T80InputState {
    /// Steering remapped around the learned center, `0..=65535`, center 32768.
    pub steering: u16,
    /// Steering as read from the report.
    pub steering_raw: u16,
    /// Gas pedal, `0..=65535`, passed through unmodified.
    pub gas: u16,
    /// Brake pedal, `0..=65535`, passed through unmodified.
    pub brake: u16,
    pub buttons: T80Buttons,
    pub hat: HatSwitch,
    /// Bytes 7..=9, unmapped.
    pub reserved: [u8; 3],
}

impl T80InputState {
    pub fn dpad(&self) -> DpadDirections {
        self.hat.directions()
    }

    pub fn is_pressed(&self, button: T80Buttons) -> bool {
        self.buttons.contains(button)
    }
}

/// Decodes a report using a fixed `center`.
pub fn decode_input(report: &T80RawReport<'_>, center: u16) -> T80InputState {
    let steering_raw = report.steering_raw();
    T80InputState {
        steering: remap_steering(steering_raw, center),
        steering_raw,
        gas: report.gas(),
        brake: report.brake(),
        buttons: decode_buttons(report.hat_face_byte(), report.buttons_byte()),
        hat: HatSwitch::from_raw(report.hat_nibble()),
        reserved: report.reserved(),
    }
}

/// Result of decoding one report through a [`T80ReportDecoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedReport {
    pub input: T80InputState,
    /// What the calibrator did with this report's steering sample.
    pub calibration: CenterObservation,
    /// Center used for this report's remap.
    pub center: u16,
}

/// Per-device decoder: owns the steering calibrator.
#[derive(Debug, Clone, Default)]
pub struct T80ReportDecoder {
    calibrator: CenterCalibrator,
}

impl T80ReportDecoder {
    /// # Errors
    ///
    /// Returns [`openracing_calibration::CalibrationError::InvalidConfig`]
    /// for an invalid calibration config.
    pub fn new(config: CenterCalibrationConfig) -> CalibrationResult<Self> {
        Ok(Self {
            calibrator: CenterCalibrator::new(config)?,
        })
    }

    pub fn with_calibrator(calibrator: CenterCalibrator) -> Self {
        Self { calibrator }
    }

    pub fn calibrator(&self) -> &CenterCalibrator {
        &self.calibrator
    }

    /// Decodes one report, updating calibration first.
    ///
    /// Returns `None` for reports shorter than
    /// [`T80_REPORT_LEN`](crate::report::T80_REPORT_LEN); calibration state
    /// is left untouched in that case.
    pub fn decode(&mut self, data: &[u8]) -> Option<DecodedReport> {
        let report = T80RawReport::new(data)?;
        let calibration = self.calibrator.observe(report.steering_raw());
        let center = self.calibrator.center();
        Some(DecodedReport {
            input: decode_input(&report, center),
            calibration,
            center,
        })
    }
}
