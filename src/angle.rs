//! Tilt Angle
//!
//! The displayed tilt readout: the angle between the measured gravity
//! direction and the device z-axis, in tenths of a degree. Because it is
//! derived from `acos(|z|)` the value here stays in [0, 900] — 0.0° with
//! the device flat (gravity aligned with either face), 90.0° on edge.

use core::fmt;

/// A tilt angle in tenths of a degree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "postcard-experimental",
    derive(postcard::experimental::max_size::MaxSize)
)]
pub struct TiltAngle(pub i16);

impl TiltAngle {
    /// The raw value in tenths of a degree.
    pub const fn tenths(self) -> i16 {
        self.0
    }

    /// Whole degrees (truncated).
    pub const fn degrees(self) -> i16 {
        self.0 / 10
    }

    /// The single fractional digit after the decimal point.
    pub const fn fraction(self) -> i16 {
        self.0 % 10
    }
}

/// Formats as the display string, e.g. `12.3°`.
impl fmt::Display for TiltAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}\u{00B0}", self.degrees(), self.fraction())
    }
}

#[cfg(test)]
mod tests {
    use super::TiltAngle;

    // Formatting needs an allocating target; fine under the test harness.
    extern crate std;
    use std::string::ToString;

    #[test]
    fn splits_degrees_and_fraction() {
        let a = TiltAngle(123);
        assert_eq!(a.degrees(), 12);
        assert_eq!(a.fraction(), 3);
        assert_eq!(TiltAngle(900).degrees(), 90);
        assert_eq!(TiltAngle(0).fraction(), 0);
    }

    #[test]
    fn display_matches_readout_format() {
        assert_eq!(TiltAngle(123).to_string(), "12.3°");
        assert_eq!(TiltAngle(0).to_string(), "0.0°");
        assert_eq!(TiltAngle(900).to_string(), "90.0°");
    }
}
