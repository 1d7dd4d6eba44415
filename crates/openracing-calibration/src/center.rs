//! Passive center calibration for self-centering axes.
//!
//! The calibrator never asks the user to hold the wheel straight. It watches
//! raw samples and treats any sample that differs from the previous one by
//! less than the rest threshold as a reading of the rest position. Once
//! enough rest samples have been collected their mean becomes the fixed
//! center for the rest of the device's lifetime.

use crate::{
    CalibrationResult, CenterCalibrationConfig, CenterCalibrationState, CenterObservation,
};

/// Per-device center tracker.
///
/// Owns the previous-sample reference used for rest detection, so two
/// devices never influence each other's calibration.
///
/// # Examples
///
/// ```
/// use openracing_calibration::{CenterCalibrator, CenterObservation};
///
/// let mut calibrator = CenterCalibrator::default();
/// let mut outcome = CenterObservation::Inactive;
/// for _ in 0..60 {
///     outcome = calibrator.observe(40);
///     if outcome.is_completed() {
///         break;
///     }
/// }
/// assert_eq!(outcome, CenterObservation::Completed { center: 40 });
/// assert_eq!(calibrator.center(), 40);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CenterCalibrator {
    config: CenterCalibrationConfig,
    state: CenterCalibrationState,
    last_raw: u16,
}

impl Default for CenterCalibrator {
    fn default() -> Self {
        Self {
            config: CenterCalibrationConfig::default(),
            state: CenterCalibrationState::default(),
            last_raw: 0,
        }
    }
}

impl CenterCalibrator {
    /// Creates an uncalibrated tracker.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CalibrationError::InvalidConfig`] if `config` fails
    /// [`CenterCalibrationConfig::validate`].
    pub fn new(config: CenterCalibrationConfig) -> CalibrationResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: CenterCalibrationState::default(),
            last_raw: 0,
        })
    }

    /// Creates a tracker that is already calibrated at `center`.
    ///
    /// A center of 0 is stored as 1.
    pub fn precalibrated(config: CenterCalibrationConfig, center: u16) -> Self {
        Self {
            config,
            state: CenterCalibrationState::Calibrated {
                center: center.max(1),
            },
            last_raw: 0,
        }
    }

    pub fn config(&self) -> &CenterCalibrationConfig {
        &self.config
    }

    pub fn state(&self) -> CenterCalibrationState {
        self.state
    }

    /// Current center estimate; the configured initial center until calibrated.
    pub fn center(&self) -> u16 {
        match self.state {
            CenterCalibrationState::Calibrated { center } => center,
            CenterCalibrationState::Uncalibrated { .. } => self.config.initial_center,
        }
    }

    pub fn is_calibrated(&self) -> bool {
        matches!(self.state, CenterCalibrationState::Calibrated { .. })
    }

    /// Accepted rest samples; frozen at the target once calibrated.
    pub fn sample_count(&self) -> u32 {
        match self.state {
            CenterCalibrationState::Uncalibrated { sample_count, .. } => sample_count,
            CenterCalibrationState::Calibrated { .. } => self.config.target_samples,
        }
    }

    pub fn accumulated_sum(&self) -> Option<u64> {
        match self.state {
            CenterCalibrationState::Uncalibrated {
                accumulated_sum, ..
            } => Some(accumulated_sum),
            CenterCalibrationState::Calibrated { .. } => None,
        }
    }

    /// Last sample seen while tracking was active.
    pub fn last_raw(&self) -> u16 {
        self.last_raw
    }

    /// Feeds one raw sample.
    pub fn observe(&mut self, raw: u16) -> CenterObservation {
        let CenterCalibrationState::Uncalibrated {
            sample_count,
            accumulated_sum,
        } = self.state
        else {
            return CenterObservation::Inactive;
        };
        if sample_count >= self.config.max_samples {
            return CenterObservation::Inactive;
        }

        let delta = i16::from_le_bytes(raw.wrapping_sub(self.last_raw).to_le_bytes());
        self.last_raw = raw;
        if delta.unsigned_abs() >= self.config.rest_threshold {
            return CenterObservation::Moving;
        }

        let sample_count = sample_count.saturating_add(1);
        let accumulated_sum = accumulated_sum.saturating_add(u64::from(raw));

        if sample_count >= self.config.target_samples {
            let mean = accumulated_sum / u64::from(sample_count);
            let center = u16::try_from(mean).unwrap_or(u16::MAX).max(1);
            self.state = CenterCalibrationState::Calibrated { center };
            return CenterObservation::Completed { center };
        }

        self.state = CenterCalibrationState::Uncalibrated {
            sample_count,
            accumulated_sum,
        };
        CenterObservation::Accumulated { sample_count }
    }
}
