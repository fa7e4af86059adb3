use crate::foundation::error::{WipeError, WipeResult};

/// Normalized advancement through a trigger region, always in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Progress(f64);

impl Progress {
    /// Trigger start.
    pub const ZERO: Self = Self(0.0);
    /// Trigger end.
    pub const ONE: Self = Self(1.0);

    /// Clamp `value` into `[0, 1]`; non-finite input is rejected.
    pub fn new(value: f64) -> WipeResult<Self> {
        if !value.is_finite() {
            return Err(WipeError::validation("progress must be finite"));
        }
        Ok(Self(value.clamp(0.0, 1.0)))
    }

    /// Raw value in `[0, 1]`.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Rescale into a sub-range `[lo, hi)` of the trigger, clamped to `[0, 1]`.
    pub fn local(self, lo: f64, hi: f64) -> f64 {
        let span = hi - lo;
        if span <= 0.0 {
            return if self.0 >= hi { 1.0 } else { 0.0 };
        }
        ((self.0 - lo) / span).clamp(0.0, 1.0)
    }
}

impl TryFrom<f64> for Progress {
    type Error = WipeError;

    fn try_from(value: f64) -> WipeResult<Self> {
        Self::new(value)
    }
}

impl From<Progress> for f64 {
    fn from(p: Progress) -> Self {
        p.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
