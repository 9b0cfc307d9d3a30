//! Gravity Vector
//!
//! The gravity vector is the normalized direction of measured acceleration
//! in the device frame, the authoritative "current tilt" estimate:
//! - x: lean toward the right/left edge of the device
//! - y: lean toward the top/bottom edge
//! - z: vertical alignment (-1024 when the device lies flat, face up)
//!
//! Components are 21.10 fixed point: a unit-length vector has magnitude
//! [`GravityVector::UNITY`] (1024). Keeping ten fractional bits preserves
//! the sensor's native resolution through normalization.

use crate::sqrt::isqrt;

/// A unit vector in 21.10 fixed point giving the direction of gravity.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "postcard-experimental",
    derive(postcard::experimental::max_size::MaxSize)
)]
pub struct GravityVector {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl GravityVector {
    /// Fixed-point scale: the magnitude of a unit vector.
    pub const UNITY: i32 = 1024;

    /// Normalizes a raw (filtered) acceleration vector to unit length.
    ///
    /// Each component is scaled by `UNITY / magnitude` using `i32`
    /// intermediates; with gated inputs bounded by ±1200 the products stay
    /// far below `i32::MAX`. Returns `None` for the zero vector, which has
    /// no direction.
    pub fn normalize(x: i32, y: i32, z: i32) -> Option<Self> {
        let magsq = (x * x) as u32 + (y * y) as u32 + (z * z) as u32;
        let mag = isqrt(magsq) as i32;
        if mag == 0 {
            return None;
        }
        Some(Self {
            x: x * Self::UNITY / mag,
            y: y * Self::UNITY / mag,
            z: z * Self::UNITY / mag,
        })
    }

    /// Magnitude of the vector in fixed-point units (1024 for a unit
    /// vector, up to truncation).
    pub fn magnitude(&self) -> u32 {
        let magsq = (self.x * self.x) as u32 + (self.y * self.y) as u32 + (self.z * self.z) as u32;
        isqrt(magsq)
    }

    /// Projects the x/y tilt onto a display as an offset from center.
    ///
    /// `half_width`/`half_height` are the display half-extents in pixels;
    /// a full 1 g lean along an axis puts the bubble at the display edge.
    /// Screen x is mirrored (the bubble drifts opposite the lean, like an
    /// air bubble in a spirit level) and screen y grows downward.
    pub fn screen_offset(&self, half_width: i32, half_height: i32) -> (i32, i32) {
        (
            -self.x * half_width / Self::UNITY,
            self.y * half_height / Self::UNITY,
        )
    }
}

impl Default for GravityVector {
    /// The flat, face-up pose: gravity along -z.
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            z: -Self::UNITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GravityVector;

    #[test]
    fn normalize_produces_unit_magnitude() {
        // A spread of in-gate-window vectors; truncation may cost one unit.
        let cases = [
            (0, 0, -1000),
            (1000, 0, 0),
            (600, 600, 600),
            (700, -700, 500),
            (-300, 400, -900),
            (800, 0, -800),
        ];
        for (x, y, z) in cases {
            let v = GravityVector::normalize(x, y, z).unwrap();
            let mag = v.magnitude() as i32;
            assert!(
                (GravityVector::UNITY - mag).abs() <= 1,
                "normalize({}, {}, {}) has magnitude {}",
                x,
                y,
                z,
                mag
            );
        }
    }

    #[test]
    fn normalize_preserves_direction() {
        let v = GravityVector::normalize(0, 0, -1000).unwrap();
        assert_eq!((v.x, v.y), (0, 0));
        assert_eq!(v.z, -GravityVector::UNITY);

        let v = GravityVector::normalize(500, 0, 0).unwrap();
        assert_eq!(v.x, GravityVector::UNITY);
    }

    #[test]
    fn zero_vector_has_no_direction() {
        assert_eq!(GravityVector::normalize(0, 0, 0), None);
    }

    #[test]
    fn screen_offset_scales_by_half_extent() {
        // Flat device: bubble centered.
        let flat = GravityVector::default();
        assert_eq!(flat.screen_offset(72, 84), (0, 0));

        // Full lean along +x: bubble at the opposite edge.
        let lean = GravityVector {
            x: GravityVector::UNITY,
            y: 0,
            z: 0,
        };
        assert_eq!(lean.screen_offset(72, 84), (-72, 0));

        // Half lean along +y: halfway down.
        let lean = GravityVector {
            x: 0,
            y: GravityVector::UNITY / 2,
            z: 0,
        };
        assert_eq!(lean.screen_offset(72, 84), (0, 42));
    }
}
