/// Returns the number of decimal digits in `v`, where `v < 10^17`.
#[inline]
pub fn decimal_length17(v: u64) -> u32 {
    // The shortest-digit core never produces more than 17 significant digits.
    debug_assert!(v < 100_000_000_000_000_000);

    if v >= 10_000_000_000_000_000 {
        17
    } else if v >= 1_000_000_000_000_000 {
        16
    } else if v >= 100_000_000_000_000 {
        15
    } else if v >= 10_000_000_000_000 {
        14
    } else if v >= 1_000_000_000_000 {
        13
    } else if v >= 100_000_000_000 {
        12
    } else if v >= 10_000_000_000 {
        11
    } else if v >= 1_000_000_000 {
        10
    } else if v >= 100_000_000 {
        9
    } else if v >= 10_000_000 {
        8
    } else if v >= 1_000_000 {
        7
    } else if v >= 100_000 {
        6
    } else if v >= 10_000 {
        5
    } else if v >= 1_000 {
        4
    } else if v >= 100 {
        3
    } else if v >= 10 {
        2
    } else {
        1
    }
}

/// Returns `e == 0 ? 1 : ceil(log_2(5^e))`; requires `0 <= e <= 3528`.
#[inline]
pub fn pow5bits(e: i32) -> i32 {
    // ((e * 1217359) >> 19) + 1 is the same as ceil(e * log_2(5)) + 1
    // for this range, computed without floating point.
    debug_assert!((0..=3528).contains(&e));
    (((e as u32 * 1_217_359) >> 19) + 1) as i32
}

/// Returns `floor(log_10(2^e))`; requires `0 <= e <= 1650`.
#[inline]
pub fn log10_pow2(e: i32) -> u32 {
    debug_assert!((0..=1650).contains(&e));
    (e as u32 * 78_913) >> 18
}

/// Returns `floor(log_10(5^e))`; requires `0 <= e <= 2620`.
#[inline]
pub fn log10_pow5(e: i32) -> u32 {
    debug_assert!((0..=2620).contains(&e));
    (e as u32 * 732_923) >> 20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_length17() {
        assert_eq!(decimal_length17(1), 1);
        assert_eq!(decimal_length17(9), 1);
        assert_eq!(decimal_length17(10), 2);
        assert_eq!(decimal_length17(99_999_999_999_999_999), 17);
        assert_eq!(decimal_length17(10_000_000_000_000_000), 17);
        assert_eq!(decimal_length17(9_999_999_999_999_999), 16);
    }

    #[test]
    fn test_log10_pow2() {
        assert_eq!(log10_pow2(1), 0);
        assert_eq!(log10_pow2(10), 3);
        assert_eq!(log10_pow2(100), 30);
        assert_eq!(log10_pow2(1650), 496);
    }

    #[test]
    fn test_log10_pow5() {
        assert_eq!(log10_pow5(1), 0);
        assert_eq!(log10_pow5(2), 1);
        assert_eq!(log10_pow5(3), 2);
        assert_eq!(log10_pow5(2620), 1831);
    }

    #[test]
    fn test_pow5bits() {
        assert_eq!(pow5bits(0), 1);
        assert_eq!(pow5bits(1), 3);
        assert_eq!(pow5bits(2), 5);
        assert_eq!(pow5bits(3), 7);
        assert_eq!(pow5bits(4), 10);
    }
}
