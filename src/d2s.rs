//! Shortest-digit decimal conversion for `f64`.
//!
//! Given the raw IEEE-754 mantissa and exponent of a finite, non-zero double,
//! [`d2d`] computes the unique decimal mantissa/exponent pair with the fewest
//! significant digits that still parses back to the original bit pattern.
//! Ties between equally short candidates go to the one closest to the true
//! binary value, and an exact halfway case rounds to an even last digit.

use crate::common::{decimal_length17, log10_pow2, log10_pow5, pow5bits};
use crate::d2s_full_table::{
    DOUBLE_POW5_BITCOUNT, DOUBLE_POW5_INV_BITCOUNT, DOUBLE_POW5_INV_SPLIT, DOUBLE_POW5_SPLIT,
};
use crate::d2s_intrinsics::{
    mul_shift_all_64, multiple_of_power_of_2, multiple_of_power_of_5,
};

pub const DOUBLE_MANTISSA_BITS: u32 = 52;
pub const DOUBLE_EXPONENT_BITS: u32 = 11;
const DOUBLE_BIAS: i32 = 1023;

/// A decimal floating-point number: `value = mantissa * 10^exponent`.
///
/// The mantissa carries no trailing zero digits.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FloatingDecimal64 {
    pub mantissa: u64,
    pub exponent: i32,
}

impl FloatingDecimal64 {
    /// Number of significant decimal digits in the mantissa, at most 17.
    #[inline]
    pub fn digit_count(&self) -> u32 {
        decimal_length17(self.mantissa)
    }
}

/// Converts the IEEE-754 fields of a finite, non-zero double into its
/// shortest round-tripping decimal form.
pub fn d2d(ieee_mantissa: u64, ieee_exponent: u32) -> FloatingDecimal64 {
    let (e2, m2): (i32, u64) = if ieee_exponent == 0 {
        // Subnormal: no implicit leading bit.
        (
            1 - DOUBLE_BIAS - DOUBLE_MANTISSA_BITS as i32 - 2,
            ieee_mantissa,
        )
    } else {
        (
            ieee_exponent as i32 - DOUBLE_BIAS - DOUBLE_MANTISSA_BITS as i32 - 2,
            (1u64 << DOUBLE_MANTISSA_BITS) | ieee_mantissa,
        )
    };
    let even = (m2 & 1) == 0;
    let accept_bounds = even;

    // Step 2: the interval of legal decimal representations. The lower
    // boundary is closer when the mantissa is a power of two (and the
    // exponent is not the smallest), since the predecessor then lives in
    // the next binade down.
    let mv = 4 * m2;
    let mm_shift = (ieee_mantissa != 0 || ieee_exponent <= 1) as u32;

    // Step 3: convert the interval to a decimal power base. vr tracks the
    // scaled midpoint, vp/vm the upper and lower interval ends.
    let mut vr: u64;
    let mut vp: u64 = 0;
    let mut vm: u64 = 0;
    let e10: i32;
    let mut vm_is_trailing_zeros = false;
    let mut vr_is_trailing_zeros = false;
    if e2 >= 0 {
        // This expression is slightly faster than max(0, log10_pow2(e2) - 1).
        let q = log10_pow2(e2) - (e2 > 3) as u32;
        e10 = q as i32;
        let k = DOUBLE_POW5_INV_BITCOUNT + pow5bits(q as i32) - 1;
        let i = -e2 + q as i32 + k;
        vr = mul_shift_all_64(
            m2,
            &DOUBLE_POW5_INV_SPLIT[q as usize],
            i as u32,
            &mut vp,
            &mut vm,
            mm_shift,
        );
        if q <= 21 {
            // Only one of mp, mv, and mm can be a multiple of 5, if any.
            if mv % 5 == 0 {
                vr_is_trailing_zeros = multiple_of_power_of_5(mv, q);
            } else if accept_bounds {
                // Same as min(e2 + (~mm & 1), pow5_factor(mm)) >= q.
                vm_is_trailing_zeros = multiple_of_power_of_5(mv - 1 - mm_shift as u64, q);
            } else {
                vp -= multiple_of_power_of_5(mv + 2, q) as u64;
            }
        }
    } else {
        // This expression is slightly faster than max(0, log10_pow5(-e2) - 1).
        let q = log10_pow5(-e2) - (-e2 > 1) as u32;
        e10 = q as i32 + e2;
        let i = -e2 - q as i32;
        let k = pow5bits(i) - DOUBLE_POW5_BITCOUNT;
        let j = q as i32 - k;
        vr = mul_shift_all_64(
            m2,
            &DOUBLE_POW5_SPLIT[i as usize],
            j as u32,
            &mut vp,
            &mut vm,
            mm_shift,
        );
        if q <= 1 {
            // {vr,vp,vm} is trailing zeros if {mv,mp,mm} has at least q
            // trailing zero bits; mv = 4 * m2, so it always has at least two.
            vr_is_trailing_zeros = true;
            if accept_bounds {
                // mm = mv - 1 - mm_shift, so it has 1 trailing 0 bit iff mm_shift == 1.
                vm_is_trailing_zeros = mm_shift == 1;
            } else {
                // mp = mv + 2, so it always has at least one trailing 0 bit.
                vp -= 1;
            }
        } else if q < 63 {
            vr_is_trailing_zeros = multiple_of_power_of_2(mv, q);
        }
    }

    // Step 4: find the shortest decimal representation in the interval.
    let mut removed = 0i32;
    let mut last_removed_digit = 0u8;
    let output: u64;
    if vm_is_trailing_zeros || vr_is_trailing_zeros {
        // Rare path: trailing zeros have to be tracked so that an exact
        // boundary or halfway value rounds correctly.
        loop {
            let vp_div10 = vp / 10;
            let vm_div10 = vm / 10;
            if vp_div10 <= vm_div10 {
                break;
            }
            let vm_mod10 = (vm - 10 * vm_div10) as u32;
            let vr_div10 = vr / 10;
            let vr_mod10 = (vr - 10 * vr_div10) as u32;
            vm_is_trailing_zeros &= vm_mod10 == 0;
            vr_is_trailing_zeros &= last_removed_digit == 0;
            last_removed_digit = vr_mod10 as u8;
            vr = vr_div10;
            vp = vp_div10;
            vm = vm_div10;
            removed += 1;
        }
        if vm_is_trailing_zeros {
            loop {
                let vm_div10 = vm / 10;
                let vm_mod10 = (vm - 10 * vm_div10) as u32;
                if vm_mod10 != 0 {
                    break;
                }
                let vp_div10 = vp / 10;
                let vr_div10 = vr / 10;
                let vr_mod10 = (vr - 10 * vr_div10) as u32;
                vr_is_trailing_zeros &= last_removed_digit == 0;
                last_removed_digit = vr_mod10 as u8;
                vr = vr_div10;
                vp = vp_div10;
                vm = vm_div10;
                removed += 1;
            }
        }
        if vr_is_trailing_zeros && last_removed_digit == 5 && vr % 2 == 0 {
            // Round even if the exact value is .....50..0.
            last_removed_digit = 4;
        }
        // We need to take vr + 1 if vr is outside bounds or we need to round up.
        output = vr
            + ((vr == vm && (!accept_bounds || !vm_is_trailing_zeros)) || last_removed_digit >= 5)
                as u64;
    } else {
        // Common path: no trailing zeros in play, only track whether the
        // last removed digit forces rounding up.
        let mut round_up = false;
        let vp_div100 = vp / 100;
        let vm_div100 = vm / 100;
        // Optimization: remove two digits at a time (~86.2%).
        if vp_div100 > vm_div100 {
            let vr_div100 = vr / 100;
            let vr_mod100 = (vr - 100 * vr_div100) as u32;
            round_up = vr_mod100 >= 50;
            vr = vr_div100;
            vp = vp_div100;
            vm = vm_div100;
            removed += 2;
        }
        loop {
            let vp_div10 = vp / 10;
            let vm_div10 = vm / 10;
            if vp_div10 <= vm_div10 {
                break;
            }
            let vr_div10 = vr / 10;
            let vr_mod10 = (vr - 10 * vr_div10) as u32;
            round_up = vr_mod10 >= 5;
            vr = vr_div10;
            vp = vp_div10;
            vm = vm_div10;
            removed += 1;
        }
        // We need to take vr + 1 if vr is outside bounds or we need to round up.
        output = vr + (vr == vm || round_up) as u64;
    }
    let exp = e10 + removed;

    FloatingDecimal64 {
        exponent: exp,
        mantissa: output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shortest(f: f64) -> FloatingDecimal64 {
        let bits = f.to_bits();
        let ieee_mantissa = bits & ((1u64 << DOUBLE_MANTISSA_BITS) - 1);
        let ieee_exponent =
            (bits >> DOUBLE_MANTISSA_BITS) as u32 & ((1u32 << DOUBLE_EXPONENT_BITS) - 1);
        d2d(ieee_mantissa, ieee_exponent)
    }

    #[test]
    fn test_one() {
        assert_eq!(
            shortest(1.0),
            FloatingDecimal64 {
                mantissa: 1,
                exponent: 0
            }
        );
    }

    #[test]
    fn test_point_one() {
        assert_eq!(
            shortest(0.1),
            FloatingDecimal64 {
                mantissa: 1,
                exponent: -1
            }
        );
    }

    #[test]
    fn test_pi() {
        assert_eq!(
            shortest(core::f64::consts::PI),
            FloatingDecimal64 {
                mantissa: 3141592653589793,
                exponent: -15
            }
        );
    }

    #[test]
    fn test_smallest_subnormal() {
        assert_eq!(
            shortest(5e-324),
            FloatingDecimal64 {
                mantissa: 5,
                exponent: -324
            }
        );
    }

    #[test]
    fn test_largest_finite() {
        assert_eq!(
            shortest(f64::MAX),
            FloatingDecimal64 {
                mantissa: 17976931348623157,
                exponent: 292
            }
        );
    }

    #[test]
    fn test_smallest_normal() {
        assert_eq!(
            shortest(2.2250738585072014e-308),
            FloatingDecimal64 {
                mantissa: 22250738585072014,
                exponent: -324
            }
        );
    }

    #[test]
    fn test_no_trailing_zero_digits() {
        for f in [1e20, 100.0, 1024.0, 5e-324, 2.0f64.powi(60)] {
            let d = shortest(f);
            assert!(d.mantissa % 10 != 0, "trailing zero digit for {}", f);
        }
    }

    #[test]
    fn test_digit_count_bound() {
        for f in [
            f64::MAX,
            f64::MIN_POSITIVE,
            core::f64::consts::E,
            1.0 / 3.0,
            0.30000000000000004,
        ] {
            assert!(shortest(f).digit_count() <= 17);
        }
    }
}
