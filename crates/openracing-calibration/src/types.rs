//! Calibration type definitions

use crate::{CalibrationError, CalibrationResult};
use serde::{Deserialize, Serialize};

/// Assumed electrical midpoint of a 16-bit axis before any samples are seen.
pub const DEFAULT_INITIAL_CENTER: u16 = 32767;
/// Sample-to-sample delta below which the axis is considered at rest.
pub const DEFAULT_REST_THRESHOLD: u16 = 100;
/// Accepted rest samples required to fix the center.
pub const DEFAULT_TARGET_SAMPLES: u32 = 50;
/// Accepted rest samples after which tracking stops regardless of outcome.
pub const DEFAULT_MAX_SAMPLES: u32 = 100;

/// Tuning for passive center calibration.
///
/// # Examples
///
/// ```
/// use openracing_calibration::CenterCalibrationConfig;
///
/// let config = CenterCalibrationConfig::default();
/// assert_eq!(config.initial_center, 32767);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CenterCalibrationConfig {
    /// Center used until calibration completes. Must be non-zero.
    pub initial_center: u16,
    /// A sample is "at rest" when `|raw - previous| < rest_threshold`.
    pub rest_threshold: u16,
    /// Accepted samples averaged into the final center.
    pub target_samples: u32,
    /// Sample budget; tracking halts once this many samples were accepted.
    pub max_samples: u32,
}

impl Default for CenterCalibrationConfig {
    fn default() -> Self {
        Self {
            initial_center: DEFAULT_INITIAL_CENTER,
            rest_threshold: DEFAULT_REST_THRESHOLD,
            target_samples: DEFAULT_TARGET_SAMPLES,
            max_samples: DEFAULT_MAX_SAMPLES,
        }
    }
}

impl CenterCalibrationConfig {
    /// Checks the invariants the calibrator relies on.
    ///
    /// # Errors
    ///
    /// Returns [`CalibrationError::InvalidConfig`] when the initial center is
    /// zero, the rest threshold is zero, or `target_samples` is outside
    /// `1..=max_samples`.
    pub fn validate(&self) -> CalibrationResult<()> {
        if self.initial_center == 0 {
            return Err(CalibrationError::InvalidConfig(
                "initial_center must be non-zero".to_string(),
            ));
        }
        if self.rest_threshold == 0 {
            return Err(CalibrationError::InvalidConfig(
                "rest_threshold must be non-zero".to_string(),
            ));
        }
        if self.target_samples == 0 || self.target_samples > self.max_samples {
            return Err(CalibrationError::InvalidConfig(format!(
                "target_samples {} must be within 1..={}",
                self.target_samples, self.max_samples
            )));
        }
        Ok(())
    }
}

/// Two-state calibration lifecycle.
///
/// The transition `Uncalibrated -> Calibrated` happens once and is never
/// reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CenterCalibrationState {
    Uncalibrated {
        sample_count: u32,
        accumulated_sum: u64,
    },
    Calibrated {
        center: u16,
    },
}

impl Default for CenterCalibrationState {
    fn default() -> Self {
        Self::Uncalibrated {
            sample_count: 0,
            accumulated_sum: 0,
        }
    }
}

/// Outcome of feeding one sample to the calibrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterObservation {
    /// Calibrated already, or the sample budget is spent. Nothing changed.
    Inactive,
    /// The axis moved; the sample was not accumulated.
    Moving,
    /// The sample was accumulated.
    Accumulated { sample_count: u32 },
    /// This sample completed calibration.
    Completed { center: u16 },
}

impl CenterObservation {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}
