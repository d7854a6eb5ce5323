//! Score and multiple-range value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A normalized readiness score on the 0.0–1.0 scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    /// Zero readiness.
    pub const ZERO: Self = Self(0.0);

    /// Full readiness.
    pub const ONE: Self = Self(1.0);

    /// Creates a new Score, clamping to the valid range.
    ///
    /// Non-finite input maps to zero so arithmetic dust from upstream
    /// aggregation can never produce an out-of-band score.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Creates a Score, returning an error if outside [0.0, 1.0].
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::not_finite("score"));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range("score", 0.0, 1.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the complement (1 − score), the "unreadiness" remainder.
    pub fn complement(&self) -> f64 {
        1.0 - self.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// A validated low/high valuation multiple band.
///
/// Invariant: `0 < low <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MultipleRange {
    low: f64,
    high: f64,
}

impl MultipleRange {
    /// Creates a range, validating the invariant.
    pub fn try_new(low: f64, high: f64) -> Result<Self, ValidationError> {
        if !low.is_finite() || !high.is_finite() {
            return Err(ValidationError::not_finite("multiple range"));
        }
        if low <= 0.0 || high < low {
            return Err(ValidationError::invalid_range(low, high));
        }
        Ok(Self { low, high })
    }

    /// Lower bound of the band.
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound of the band.
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Returns the point inside the band at the given position.
    ///
    /// A position of 0.0 yields the low end, 1.0 the high end.
    pub fn at(&self, position: Score) -> f64 {
        self.low + position.value() * (self.high - self.low)
    }
}

impl fmt::Display for MultipleRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}x–{:.1}x", self.low, self.high)
    }
}
