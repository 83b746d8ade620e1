//! Convert IEEE-754 double-precision values to the shortest string that
//! round-trips, laid out per the ECMAScript `Number::toString(10)` grammar.
//!
//! Among all decimal strings that parse back to the same `f64`, the one with
//! the fewest significant digits is chosen (ties go to the candidate closest
//! to the true binary value, then to an even last digit). Digit generation is
//! the Ryū algorithm; layout follows the ECMAScript rules, so values use
//! fixed notation inside the `1e-6..1e21` magnitude window and exponential
//! notation outside it:
//!
//! ```
//! let mut buffer = ecma_dtoa::Buffer::new();
//! assert_eq!(buffer.format(123.456), "123.456");
//! assert_eq!(buffer.format(1e21), "1e+21");
//! assert_eq!(buffer.format(0.0000001), "1e-7");
//! assert_eq!(buffer.format(f64::NAN), "NaN");
//! ```
//!
//! Formatting is total: every one of the 2^64 bit patterns, including NaN,
//! the infinities, subnormals, and both zeros, has a defined output and no
//! input panics. Parsing the output of [`Buffer::format`] for a finite value
//! with [`str::parse::<f64>`](str::parse) yields the original bit pattern,
//! except that the sign of `-0.0` is dropped per the grammar.
//!
//! ## no_std
//!
//! Disable the default `std` feature to use the crate without the standard
//! library; only the [`to_string`] convenience goes away.

#![cfg_attr(not(feature = "std"), no_std)]
#![doc(html_root_url = "https://docs.rs/ecma-dtoa/0.1.0")]
#![deny(unsafe_op_in_unsafe_fn)]

mod buffer;
mod common;
mod d2s;
mod d2s_full_table;
mod d2s_intrinsics;
mod digit_table;
mod pretty;

pub use crate::buffer::{Buffer, MAX_LEN};

/// Functions that mirror the unchecked core of the formatter.
pub mod raw {
    /// Print a finite f64 into the head of `result`, returning the number of
    /// bytes written (at most [`MAX_LEN`](crate::MAX_LEN)).
    ///
    /// The caller must supply a slice of at least [`MAX_LEN`](crate::MAX_LEN)
    /// bytes and a finite value; NaN and the infinities print as some
    /// correctly formatted but unspecified numerical value.
    pub use crate::pretty::format64;
}

/// Print a double to an owned `String`.
///
/// Allocates per call; prefer [`Buffer`] when formatting in a loop.
#[cfg(feature = "std")]
pub fn to_string(f: f64) -> String {
    Buffer::new().format(f).to_owned()
}
