/// One raw accelerometer reading at native sensor resolution.
///
/// Axis values are in raw sensor counts (roughly 1000 counts per g on the
/// observed hardware). The `vibration` flag reports whether the device's
/// vibration motor was active while the sample was taken; such samples are
/// mechanically coupled to the sensor and carry no usable gravity
/// information.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct RawSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
    /// True if the vibration motor ran during this sample.
    pub vibration: bool,
}

impl RawSample {
    pub const fn new(x: i16, y: i16, z: i16, vibration: bool) -> Self {
        Self { x, y, z, vibration }
    }

    /// Squared magnitude of the acceleration vector.
    ///
    /// Computed in `u32`: three squared `i16` values sum to at most
    /// `3 * 2^30`, which fits without overflow.
    pub fn magnitude_squared(&self) -> u32 {
        let x = self.x as i32;
        let y = self.y as i32;
        let z = self.z as i32;
        (x * x) as u32 + (y * y) as u32 + (z * z) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::RawSample;

    #[test]
    fn magnitude_squared_handles_extreme_readings() {
        // Worst case: all three axes railed at i16::MIN.
        let sample = RawSample::new(i16::MIN, i16::MIN, i16::MIN, false);
        assert_eq!(sample.magnitude_squared(), 3 * 32768u32 * 32768u32);

        let sample = RawSample::new(0, -600, 800, false);
        assert_eq!(sample.magnitude_squared(), 600 * 600 + 800 * 800);
    }
}
