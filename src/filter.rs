//! Per-Axis Low-Pass Filtering
//!
//! One-pole IIR filter implemented with shifts only, no division:
//!
//! ```text
//! state    = state - (state >> shift) + input
//! filtered = state >> shift
//! ```
//!
//! The transfer coefficient is `1 - 2^-shift` for the retained history and
//! `2^-shift` for the new sample. At steady state under a constant input
//! the accumulator settles at `input << shift`, so the filtered output
//! converges to the input exactly (unity DC gain), for both signs.
//!
//! Width contract: gated inputs are bounded by ±1200 raw counts and the
//! accumulator magnitude is bounded by `|input| << shift` with shift <= 4,
//! so an `i32` accumulator cannot overflow even if fed unfiltered `i16`
//! extremes.

/// The three per-axis filter accumulators.
///
/// Owned exclusively by the estimator; lives for the whole display session
/// and is never reset in place (construct a fresh estimator instead).
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct FilterState {
    x: AxisFilter,
    y: AxisFilter,
    z: AxisFilter,
}

impl FilterState {
    pub const fn new() -> Self {
        Self {
            x: AxisFilter::new(),
            y: AxisFilter::new(),
            z: AxisFilter::new(),
        }
    }

    /// Seeds all three accumulators so the filtered output equals the
    /// given sample immediately, instead of ramping up from zero.
    pub fn seed(&mut self, x: i32, y: i32, z: i32, shift: u32) {
        self.x.seed(x, shift);
        self.y.seed(y, shift);
        self.z.seed(z, shift);
    }

    /// Runs one filter step on each axis, returning the filtered vector.
    ///
    /// The shift is taken per call rather than stored, so a configuration
    /// change applies from the next sample onward without touching the
    /// accumulated state. The accumulator holds `value << shift`, so the
    /// first updates after a shift change read it rescaled by
    /// `2^(old - new)` until the filter re-converges; all three axes
    /// rescale uniformly, so the direction of the filtered vector is
    /// unaffected.
    pub fn update(&mut self, x: i32, y: i32, z: i32, shift: u32) -> (i32, i32, i32) {
        (
            self.x.update(x, shift),
            self.y.update(y, shift),
            self.z.update(z, shift),
        )
    }
}

/// A single one-pole accumulator.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct AxisFilter {
    state: i32,
}

impl AxisFilter {
    pub const fn new() -> Self {
        Self { state: 0 }
    }

    pub fn seed(&mut self, input: i32, shift: u32) {
        self.state = input << shift;
    }

    pub fn update(&mut self, input: i32, shift: u32) -> i32 {
        self.state = self.state - (self.state >> shift) + input;
        self.state >> shift
    }
}

#[cfg(test)]
mod tests {
    use super::AxisFilter;

    #[test]
    fn converges_to_constant_input() {
        for shift in 0..=4u32 {
            let mut filter = AxisFilter::new();
            let mut out = 0;
            for _ in 0..200 {
                out = filter.update(1000, shift);
            }
            assert_eq!(out, 1000, "shift {} did not converge", shift);
        }
    }

    #[test]
    fn converges_for_negative_input() {
        // Arithmetic right shift rounds toward negative infinity; the
        // fixed point still lands on the exact input.
        let mut filter = AxisFilter::new();
        let mut out = 0;
        for _ in 0..200 {
            out = filter.update(-1000, 4);
        }
        assert_eq!(out, -1000);
    }

    #[test]
    fn seed_makes_output_immediate() {
        let mut filter = AxisFilter::new();
        filter.seed(-873, 4);
        assert_eq!(filter.update(-873, 4), -873);
    }

    #[test]
    fn shift_zero_tracks_input() {
        let mut filter = AxisFilter::new();
        assert_eq!(filter.update(317, 0), 317);
        assert_eq!(filter.update(-41, 0), -41);
    }

    #[test]
    fn shift_change_keeps_accumulated_state() {
        // Track the accumulator with the update law spelled out, then
        // switch to a lower shift: the stored value is read as-is, only
        // the forward update law changes. Because the accumulator holds
        // `value << shift`, the first post-switch output is inflated by
        // the shift gap; that is the documented behavior, not a bug.
        let mut filter = AxisFilter::new();
        let mut state = 0i32;
        for _ in 0..10 {
            filter.update(800, 4);
            state = state - (state >> 4) + 800;
        }
        assert_eq!(state, 6091);

        let expected = {
            let s = state - (state >> 1);
            s >> 1
        };
        assert_eq!(filter.update(0, 1), expected);
        assert_eq!(expected, 1523);

        // An identical twin that stays at shift 4 reads the same state
        // through the old law.
        let mut stayed = AxisFilter::new();
        for _ in 0..10 {
            stayed.update(800, 4);
        }
        assert_eq!(stayed.update(0, 4), (state - (state >> 4)) >> 4);
    }

    #[test]
    fn heavier_shift_smooths_more() {
        let mut light = AxisFilter::new();
        let mut heavy = AxisFilter::new();
        for _ in 0..3 {
            light.update(1000, 1);
            heavy.update(1000, 4);
        }
        let l = light.update(1000, 1);
        let h = heavy.update(1000, 4);
        assert!(l > h, "shift 1 should be closer to the input ({} vs {})", l, h);
    }
}
