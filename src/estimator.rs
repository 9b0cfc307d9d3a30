//! Tilt Estimator
//!
//! Turns the raw accelerometer stream into the current gravity estimate:
//!
//! ```text
//! raw sample -> gate -> per-axis low-pass -> normalize -> GravityVector
//!                                                             |
//!                                              tilt_angle() via acos(|z|)
//! ```
//!
//! The estimator holds all mutable state; the host calls
//! [`TiltEstimator::process_sample`] from its sensor callback or poll
//! timer (observed cadence ~10 Hz / 67 ms) and reads the vector or angle
//! whenever it redraws. Everything runs on the caller's thread in a
//! bounded handful of integer operations, so no synchronization is needed.
//! In a polled setup, re-arming the timer is the host's job and must
//! happen whether or not the sample was accepted.

use crate::acos::acos_fixed;
use crate::angle::TiltAngle;
use crate::config::FilterShift;
use crate::filter::FilterState;
use crate::gravity::GravityVector;
use crate::sample::RawSample;

/// Accepted squared-magnitude window for raw samples, i.e. |a| within
/// [800, 1200] raw counts (roughly 0.8 g to 1.2 g). Readings outside it
/// are dominated by device motion rather than gravity; vibration-flagged
/// readings are mechanically corrupted. Rejecting them trades update rate
/// for estimate fidelity. This is a heuristic, not a stationarity test:
/// motion that happens to land inside the window still gets through
/// (truly rejecting it would need a gyro).
const GATE_MIN_MAGSQ: u32 = 640_000;
const GATE_MAX_MAGSQ: u32 = 1_440_000;

/// Gravity estimator over a raw accelerometer stream.
///
/// Single writer of [`GravityVector`]; renderers and text displays read
/// the last accepted estimate between updates.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct TiltEstimator {
    filter: FilterState,
    shift: FilterShift,
    gravity: GravityVector,
    primed: bool,
}

impl TiltEstimator {
    pub fn new(shift: FilterShift) -> Self {
        Self {
            filter: FilterState::new(),
            shift,
            // Flat pose until the first accepted sample arrives.
            gravity: GravityVector::default(),
            primed: false,
        }
    }

    /// Current filter bandwidth.
    pub fn filter_shift(&self) -> FilterShift {
        self.shift
    }

    /// Changes the filter bandwidth for subsequent samples.
    ///
    /// Takes effect on the next update only; accumulated filter state is
    /// carried forward unchanged. Since the accumulators store
    /// `value << shift`, the filtered magnitude transiently rescales by
    /// `2^(old - new)` after a switch. The rescale is uniform across the
    /// axes and normalization cancels it, so the gravity estimate keeps
    /// its direction and unit length throughout.
    pub fn set_filter_shift(&mut self, shift: FilterShift) {
        self.shift = shift;
    }

    /// Feeds one raw sample through the gate, filter and normalizer.
    ///
    /// Every sample is either accepted (updates the estimate) or silently
    /// dropped by the gate; there is no error to report either way.
    pub fn process_sample(&mut self, sample: RawSample) {
        if sample.vibration {
            return;
        }
        let magsq = sample.magnitude_squared();
        if !(GATE_MIN_MAGSQ..=GATE_MAX_MAGSQ).contains(&magsq) {
            return;
        }

        let (x, y, z) = (sample.x as i32, sample.y as i32, sample.z as i32);
        let shift = self.shift.shift();
        if !self.primed {
            // First accepted sample: seed the filter so the estimate is
            // live immediately instead of ramping up from zero.
            self.filter.seed(x, y, z, shift);
            self.primed = true;
        }
        let (fx, fy, fz) = self.filter.update(x, y, z, shift);

        // The gate's lower bound keeps any single accepted sample well
        // away from zero magnitude, but the filter blends samples whose
        // directions may oppose, so the filtered vector can in principle
        // still collapse. Keep the previous estimate in that case.
        if let Some(gravity) = GravityVector::normalize(fx, fy, fz) {
            self.gravity = gravity;
        }
    }

    /// The current gravity direction (last accepted estimate).
    pub fn gravity(&self) -> GravityVector {
        self.gravity
    }

    /// Tilt from the device z-axis, in [0.0°, 90.0°].
    ///
    /// Computed as `acos(|z|)`: 0.0° with the device flat on either face,
    /// 90.0° standing on edge. The absolute value folds face-up and
    /// face-down poses together, which is what a level readout wants.
    pub fn tilt_angle(&self) -> TiltAngle {
        TiltAngle(acos_fixed(self.gravity.z.abs()))
    }
}

impl Default for TiltEstimator {
    fn default() -> Self {
        Self::new(FilterShift::default())
    }
}
