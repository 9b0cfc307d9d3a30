//! Fixed-Point Inverse Cosine
//!
//! Table-driven arccosine over the crate's 21.10 fixed-point convention:
//! the input is a cosine scaled by 1024, the output is an angle in tenths
//! of a degree.
//!
//! The table covers [0, 1) in 1024 steps; negative inputs are obtained by
//! reflection (`acos(-x) = 180° - acos(x)`), and inputs at or beyond unit
//! magnitude clamp to the domain endpoints. Each table entry is rounded to
//! the nearest tenth of a degree (worst-case entry error 0.5 tenth); index
//! truncation adds at most the step between adjacent entries, which grows
//! toward |x| = 1 where the arccosine slope steepens.

use crate::acos_table::ACOS_TABLE;

/// Fixed-point arccosine.
///
/// `x` is a cosine value scaled by 1024. Returns the angle in tenths of a
/// degree, in [0, 1800]. Out-of-domain inputs clamp: anything at or above
/// +1.0 maps to 0 (0.0°), anything at or below -1.0 maps to 1800 (180.0°).
pub fn acos_fixed(x: i32) -> i16 {
    if x > 1023 {
        0
    } else if x < -1023 {
        1800
    } else if x >= 0 {
        // Positive cosine: 0-90 degrees.
        ACOS_TABLE[x as usize]
    } else {
        // Negative cosine: 90-180 degrees by reflection.
        1800 - ACOS_TABLE[(-x) as usize]
    }
}
