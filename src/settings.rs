//! Persisted User Preferences
//!
//! The value types the host round-trips through its settings store. The
//! crate only defines them (with serde derives for hosts that serialize);
//! reading, writing and the settings UI belong to the host.

use crate::config::FilterShift;

/// How the tilt indicator is drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "postcard-experimental",
    derive(postcard::experimental::max_size::MaxSize)
)]
pub enum DisplayStyle {
    /// A spirit-level bubble offset from center.
    Bubble,
    /// A crosshair marking the tilt direction.
    Crosshair,
}

/// User-configurable settings, persisted by the host between sessions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "postcard-experimental",
    derive(postcard::experimental::max_size::MaxSize)
)]
pub struct Preferences {
    /// Estimator filter bandwidth.
    pub filter_shift: FilterShift,
    /// Tilt indicator style.
    pub display_style: DisplayStyle,
    /// Keep the backlight on while the level is displayed.
    pub backlight_always_on: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            filter_shift: FilterShift::default(),
            display_style: DisplayStyle::Bubble,
            backlight_always_on: false,
        }
    }
}
