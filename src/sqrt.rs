//! Integer Square Root
//!
//! Binary digit-by-digit square root: one result bit per iteration using
//! only shift, compare and subtract. No division, no floating point, no
//! recursion, at most 16 iterations for a `u32` input.
//!
//! This covers the full range a squared 3-axis magnitude can reach
//! (`3 * 32768^2`, just under `2^32`) with no intermediate overflow.

/// Returns the largest integer whose square does not exceed `n`.
pub fn isqrt(n: u32) -> u32 {
    let mut n = n;
    let mut root: u32 = 0;
    // Start at the highest even bit position that can contribute.
    let mut bit: u32 = if n >= 0x10000 { 1 << 30 } else { 1 << 14 };

    while bit != 0 {
        let trial = root + bit;
        if n >= trial {
            n -= trial;
            root = trial + bit;
        }
        root >>= 1;
        bit >>= 2;
    }
    root
}

#[cfg(test)]
mod tests {
    use super::isqrt;

    fn check(n: u32) {
        let r = isqrt(n) as u64;
        let n = n as u64;
        assert!(r * r <= n, "isqrt({}) = {} overshoots", n, r);
        assert!((r + 1) * (r + 1) > n, "isqrt({}) = {} undershoots", n, r);
    }

    #[test]
    fn exhaustive_small_inputs() {
        for n in 0..=70_000u32 {
            check(n);
        }
    }

    #[test]
    fn boundary_inputs() {
        for n in [
            0,
            1,
            2,
            3,
            4,
            0xFFFF,
            0x10000,
            0x10001,
            640_000,
            1_440_000,
            3 * 32768 * 32768,
            u32::MAX - 1,
            u32::MAX,
        ] {
            check(n);
        }
    }

    #[test]
    fn perfect_squares() {
        for r in (0..=65_535u32).step_by(13) {
            assert_eq!(isqrt(r * r), r);
            if r > 0 {
                assert_eq!(isqrt(r * r - 1), r - 1);
            }
        }
    }
}
