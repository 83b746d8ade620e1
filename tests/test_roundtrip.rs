use ecma_dtoa::Buffer;
use rand::Rng;

/// Splits a formatted finite value into `(significant digits, power of ten)`
/// such that the value equals `digits * 10^power`, with trailing zeros
/// stripped from the digits.
fn decompose(s: &str) -> Option<(u64, i32)> {
    let s = s.strip_prefix('-').unwrap_or(s);
    let (mantissa, exp) = match s.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap()),
        None => (s, 0),
    };
    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((i, f)) => (i, f),
        None => (mantissa, ""),
    };
    let mut power = exp - frac_part.len() as i32;
    let digits: String = int_part.chars().chain(frac_part.chars()).collect();
    // Plain-integer outputs can be up to 21 digits long, so strip the
    // padding zeros in u128 before narrowing.
    let mut digits: u128 = digits.parse().unwrap();
    if digits == 0 {
        return None;
    }
    while digits % 10 == 0 {
        digits /= 10;
        power += 1;
    }
    // At most 17 significant digits remain.
    Some((u64::try_from(digits).unwrap(), power))
}

fn digit_count(mut v: u64) -> u32 {
    let mut n = 1;
    while v >= 10 {
        v /= 10;
        n += 1;
    }
    n
}

/// Checks every testable property for one value: bounded length, bit-exact
/// round-trip through a correct parser, and that no string with fewer
/// significant digits round-trips too.
fn check(f: f64) {
    assert!(f.is_finite());
    let mut buf = Buffer::new();
    let s = buf.format(f);
    assert!(s.len() <= ecma_dtoa::MAX_LEN, "{} too long for {}", s, f);

    let parsed: f64 = s.parse().unwrap();
    if f == 0.0 {
        // The sign of zero is dropped, so only value equality holds.
        assert_eq!(s, "0");
        assert_eq!(parsed, 0.0);
        return;
    }
    assert_eq!(
        parsed.to_bits(),
        f.to_bits(),
        "{} does not round-trip (parsed back as {})",
        s,
        parsed
    );

    // Shortest-digits: removing the last significant digit, rounding either
    // down or up, must produce a value that no longer parses back to f. Any
    // even shorter candidate lies on a coarser subgrid of these, so checking
    // the two immediate neighbors is enough.
    let (digits, power) = decompose(s).unwrap();
    if digit_count(digits) > 1 {
        for shorter in [digits / 10, digits / 10 + 1] {
            let candidate = format!("{}e{}", shorter, power + 1);
            let reparsed: f64 = candidate.parse().unwrap();
            // The candidates are unsigned; compare magnitudes.
            assert_ne!(
                reparsed.to_bits(),
                f.abs().to_bits(),
                "shorter representation {} also round-trips to {}",
                candidate,
                s
            );
        }
    }
}

#[test]
fn test_exhaustive_properties_uniform_bits() {
    let mut rng = rand::thread_rng();
    let mut checked = 0u32;
    while checked < 50_000 {
        let f = f64::from_bits(rng.gen::<u64>());
        if !f.is_finite() {
            continue;
        }
        check(f);
        checked += 1;
    }
}

#[test]
fn test_exhaustive_properties_all_binades() {
    // Uniform bits rarely hit small exponents; sweep every exponent value
    // explicitly, including the subnormal binade (ieee_exponent == 0).
    let mut rng = rand::thread_rng();
    for ieee_exponent in 0u64..2047 {
        for _ in 0..20 {
            let mantissa = rng.gen::<u64>() & ((1u64 << 52) - 1);
            let sign = rng.gen::<bool>() as u64;
            let f = f64::from_bits(sign << 63 | ieee_exponent << 52 | mantissa);
            check(f);
        }
    }
}

#[test]
fn test_powers_of_two() {
    // Normal binades: 2^-1022 through 2^1023.
    for exp in 1u64..2047 {
        check(f64::from_bits(exp << 52));
    }
    // Subnormal powers of two: 2^-1074 through 2^-1023.
    for bit in 0..52 {
        check(f64::from_bits(1u64 << bit));
    }
}

#[test]
fn test_powers_of_ten() {
    for e in -323..=308 {
        let f: f64 = format!("1e{}", e).parse().unwrap();
        check(f);
    }
}

#[test]
fn test_boundary_neighbors() {
    // Values straddling the mantissa carry points and the extremes of the
    // format, where the rounding interval is asymmetric.
    for bits in [
        0x0000000000000001u64, // smallest subnormal
        0x0000000000000002,
        0x000fffffffffffff, // largest subnormal
        0x0010000000000000, // smallest normal
        0x0010000000000001,
        0x001fffffffffffff,
        0x7fefffffffffffff, // largest finite
        0x7feffffffffffffe,
        0x3ff0000000000001, // nextafter(1.0)
        0x3fefffffffffffff, // nextbefore(1.0)
        0x4340000000000000, // 2^53
        0x4340000000000001,
        0x433fffffffffffff,
    ] {
        check(f64::from_bits(bits));
        check(f64::from_bits(bits | 1 << 63));
    }
}
