use thiserror::Error;

/// Reference approach duration in milliseconds at AR 1.0.
pub const DEFAULT_AR: f64 = 1833.0;

/// Reference early hit tolerance in milliseconds at OD 1.0.
pub const DEFAULT_OD_MINUS: f64 = 366.0;

/// Reference late hit tolerance in milliseconds at OD 1.0.
pub const DEFAULT_OD_PLUS: f64 = 166.0;

#[derive(Debug, Error)]
pub enum DifficultyError {
    #[error("approach rate must be positive, got {0}")]
    NonPositiveAr(f64),

    #[error("overall difficulty must be positive, got {0}")]
    NonPositiveOd(f64),
}

/// Session-wide difficulty parameters.
///
/// Approach rate (AR) controls how long before its nominal time an object
/// becomes judgeable; overall difficulty (OD) controls the width of the hit
/// window. Both divide the reference constants, so higher values mean
/// shorter durations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    ar: f64,
    od: f64,
}

impl Difficulty {
    /// Create a difficulty setting. Both parameters must be positive.
    pub fn new(ar: f64, od: f64) -> Result<Self, DifficultyError> {
        if !(ar > 0.0) {
            return Err(DifficultyError::NonPositiveAr(ar));
        }
        if !(od > 0.0) {
            return Err(DifficultyError::NonPositiveOd(od));
        }
        Ok(Self { ar, od })
    }

    /// Approach rate parameter.
    pub fn ar(self) -> f64 {
        self.ar
    }

    /// Overall difficulty parameter.
    pub fn od(self) -> f64 {
        self.od
    }

    /// Milliseconds an object is visible before its nominal time.
    pub fn approach_duration(self) -> f64 {
        DEFAULT_AR / self.ar
    }

    /// Milliseconds before the nominal time a press still counts.
    pub fn early_tolerance(self) -> f64 {
        DEFAULT_OD_MINUS / self.od
    }

    /// Milliseconds after the nominal time a press still counts.
    pub fn late_tolerance(self) -> f64 {
        DEFAULT_OD_PLUS / self.od
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self { ar: 1.0, od: 1.0 }
    }
}
