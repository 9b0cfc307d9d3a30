//! Low-Pass Filter Bandwidth Configuration
//!
//! The estimator smooths each axis with a shift-only one-pole filter
//! (see [`crate::filter`]). The shift selects the filter bandwidth:
//! the retained-history coefficient is `1 - 2^-shift`, so each step up
//! roughly doubles the settling time while halving the residual noise.
//!
//! Selection is a balance between:
//! - Noise reduction (higher shift)
//! - Response time to a new orientation (lower shift)
//!
//! The shift may be changed at any time; the filter adapts forward from
//! its current state and never recomputes past history.

/// Filter bandwidth selector.
///
/// The numeric value is the right-shift applied in the filter update, so
/// only small powers of two are expressible. This is deliberate: the
/// filter runs on integer hardware without division.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "postcard-experimental",
    derive(postcard::experimental::max_size::MaxSize)
)]
pub enum FilterShift {
    /// No smoothing; output follows the input sample-for-sample.
    Shift0 = 0,

    /// Light smoothing, quick response.
    Shift1 = 1,

    /// Moderate smoothing; good general-purpose setting.
    Shift2 = 2,

    /// Strong smoothing; steady readout at the cost of lag.
    Shift3 = 3,

    /// Maximum smoothing; best for a device at rest.
    Shift4 = 4,
}

impl FilterShift {
    /// The right-shift amount applied in the filter update.
    pub const fn shift(self) -> u32 {
        self as u32
    }

    /// Builds a `FilterShift` from a persisted integer setting.
    ///
    /// Values above the supported range saturate to the heaviest filter
    /// rather than failing, so a stale or corrupt stored setting still
    /// yields a working estimator.
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Shift0,
            1 => Self::Shift1,
            2 => Self::Shift2,
            3 => Self::Shift3,
            _ => Self::Shift4,
        }
    }
}

impl Default for FilterShift {
    fn default() -> Self {
        Self::Shift2
    }
}
