use ecma_dtoa::Buffer;

#[test]
fn test_special_values() {
    let mut buf = Buffer::new();
    assert_eq!(buf.format(0.0), "0");
    assert_eq!(buf.format(-0.0), "0");
    assert_eq!(buf.format(f64::NAN), "NaN");
    assert_eq!(buf.format(f64::INFINITY), "Infinity");
    assert_eq!(buf.format(f64::NEG_INFINITY), "-Infinity");
}

#[test]
fn test_nan_payloads() {
    // Every NaN bit pattern prints as "NaN": quiet, signaling, negative,
    // and arbitrary payloads.
    let mut buf = Buffer::new();
    for bits in [
        0x7ff8000000000000u64,
        0xfff8000000000000,
        0x7ff0000000000001,
        0xfff0000000000001,
        0x7fffffffffffffff,
        0xffffffffffffffff,
        0x7ff8deadbeef0000,
    ] {
        assert_eq!(buf.format(f64::from_bits(bits)), "NaN", "bits {:#x}", bits);
    }
}

#[test]
fn test_notation_window_boundaries() {
    let mut buf = Buffer::new();
    // k = 21 is the last magnitude rendered as a plain integer; k = 22
    // switches to exponential notation.
    assert_eq!(buf.format(1e20), "100000000000000000000");
    assert_eq!(buf.format(9.999999999999999e20), "999999999999999900000");
    assert_eq!(buf.format(1e21), "1e+21");
    assert_eq!(buf.format(-1e21), "-1e+21");
    // k = -5 is the last magnitude rendered in fixed notation; k = -6
    // switches to exponential notation.
    assert_eq!(buf.format(0.000001), "0.000001");
    assert_eq!(buf.format(0.0000001), "1e-7");
}

#[test]
fn test_table() {
    let cases: &[(f64, &str)] = &[
        (1.0, "1"),
        (-1.0, "-1"),
        (2.0, "2"),
        (0.5, "0.5"),
        (0.25, "0.25"),
        (0.125, "0.125"),
        (100.0, "100"),
        (12.0, "12"),
        (1024.0, "1024"),
        (123.456, "123.456"),
        (-123.456, "-123.456"),
        (123456.789, "123456.789"),
        (11.11, "11.11"),
        (271.828, "271.828"),
        (0.001, "0.001"),
        (-0.001, "-0.001"),
        (0.00001, "0.00001"),
        (0.0001234, "0.0001234"),
        (0.1, "0.1"),
        (0.2, "0.2"),
        (0.3, "0.3"),
        (0.1 + 0.2, "0.30000000000000004"),
        (1.0 / 3.0, "0.3333333333333333"),
        (3.141592653589793, "3.141592653589793"),
        (2.718281828459045, "2.718281828459045"),
        (1e7, "10000000"),
        (1e15, "1000000000000000"),
        (1e16, "10000000000000000"),
        (9007199254740991.0, "9007199254740991"),
        (1e22, "1e+22"),
        (1.23e22, "1.23e+22"),
        (1.5e22, "1.5e+22"),
        (4.35e21, "4.35e+21"),
        (123e45, "1.23e+47"),
        (1.23e-7, "1.23e-7"),
        (9.5367431640625e-7, "9.5367431640625e-7"),
        (5e-324, "5e-324"),
        (-5e-324, "-5e-324"),
        (1.5e-323, "1.5e-323"),
        (2.2250738585072014e-308, "2.2250738585072014e-308"),
        (1.7976931348623157e308, "1.7976931348623157e+308"),
    ];
    let mut buf = Buffer::new();
    for (input, expected) in cases {
        assert_eq!(buf.format(*input), *expected);
    }
}

#[test]
fn test_deterministic() {
    let mut a = Buffer::new();
    let mut b = Buffer::new();
    for f in [0.1, 1e21, 5e-324, 123.456, f64::MAX, f64::NAN] {
        let first = a.format(f).to_owned();
        assert_eq!(first, b.format(f));
        assert_eq!(first, a.format(f));
    }
}

#[test]
fn test_max_len() {
    let mut buf = Buffer::new();
    // The worst case the formatter can produce: sign, "0.", five leading
    // zeros, then all 17 significant digits.
    let s = buf.format(-1.2345678901234567e-6);
    assert_eq!(s, "-0.0000012345678901234567");
    assert_eq!(s.len(), ecma_dtoa::MAX_LEN);
}

#[test]
fn test_raw_format64() {
    let mut bytes = [0u8; ecma_dtoa::MAX_LEN];
    let len = ecma_dtoa::raw::format64(123.456, &mut bytes);
    assert_eq!(&bytes[..len], b"123.456");

    let len = ecma_dtoa::raw::format64(-0.0, &mut bytes);
    assert_eq!(&bytes[..len], b"0");
}

#[test]
fn test_to_string() {
    assert_eq!(ecma_dtoa::to_string(1.234), "1.234");
    assert_eq!(ecma_dtoa::to_string(f64::NEG_INFINITY), "-Infinity");
    assert_eq!(ecma_dtoa::to_string(-0.0), "0");
}
