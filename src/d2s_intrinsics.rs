// 128-bit helpers for the shortest-digit core. The multiplications against
// the 125-bit power-of-five tables are done with two 64x64 -> 128 products.

/// Computes `(m * (mul.1 << 64 | mul.0)) >> shift`, where `shift >= 64`.
#[inline]
pub fn mul_shift_64(m: u64, mul: &(u64, u64), shift: u32) -> u64 {
    debug_assert!(shift >= 64);
    let b0 = m as u128 * mul.0 as u128;
    let b2 = m as u128 * mul.1 as u128;
    (((b0 >> 64) + b2) >> (shift - 64)) as u64
}

/// Scales the midpoint `4 * m` and the two rounding-interval endpoints by the
/// same power of ten. Returns the scaled midpoint; the endpoints are written
/// through `vp` and `vm`.
#[inline]
pub fn mul_shift_all_64(
    m: u64,
    mul: &(u64, u64),
    j: u32,
    vp: &mut u64,
    vm: &mut u64,
    mm_shift: u32,
) -> u64 {
    *vp = mul_shift_64(4 * m + 2, mul, j);
    *vm = mul_shift_64(4 * m - 1 - mm_shift as u64, mul, j);
    mul_shift_64(4 * m, mul, j)
}

/// Returns the number of times `value` is divisible by 5.
#[inline]
pub fn pow5_factor(mut value: u64) -> u32 {
    let mut count = 0u32;
    loop {
        debug_assert!(value != 0);
        let q = value / 5;
        let r = (value - 5 * q) as u32;
        if r != 0 {
            break;
        }
        value = q;
        count += 1;
    }
    count
}

/// Returns true if `value` is divisible by `5^p`.
#[inline]
pub fn multiple_of_power_of_5(value: u64, p: u32) -> bool {
    // I tried a case distinction on p, but there was no performance difference.
    pow5_factor(value) >= p
}

/// Returns true if `value` is divisible by `2^p`.
#[inline]
pub fn multiple_of_power_of_2(value: u64, p: u32) -> bool {
    debug_assert!(value != 0);
    debug_assert!(p < 64);
    (value & ((1u64 << p) - 1)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow5_factor() {
        assert_eq!(pow5_factor(1), 0);
        assert_eq!(pow5_factor(5), 1);
        assert_eq!(pow5_factor(25), 2);
        assert_eq!(pow5_factor(125), 3);
        assert_eq!(pow5_factor(10), 1);
        assert_eq!(pow5_factor(12), 0);
    }

    #[test]
    fn test_multiple_of_power_of_5() {
        assert!(multiple_of_power_of_5(1, 0));
        assert!(!multiple_of_power_of_5(1, 1));
        assert!(multiple_of_power_of_5(625, 4));
        assert!(!multiple_of_power_of_5(625, 5));
    }

    #[test]
    fn test_multiple_of_power_of_2() {
        assert!(multiple_of_power_of_2(8, 3));
        assert!(!multiple_of_power_of_2(8, 4));
        assert!(multiple_of_power_of_2(12, 2));
    }

    #[test]
    fn test_mul_shift_64() {
        // (1 * 2^64) >> 64 == 1
        assert_eq!(mul_shift_64(1, &(0, 1), 64), 1);
        // (10 * 2^64) >> 65 == 5
        assert_eq!(mul_shift_64(10, &(0, 1), 65), 5);
    }
}
