//! Regenerates `src/d2s_full_table.rs` from exact big-integer arithmetic.
//!
//! ```text
//! cargo run -p ecma-dtoa-dev
//! ```

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use num_bigint::BigUint;

const POW5_BITCOUNT: u32 = 125;
const POW5_TABLE_SIZE: u32 = 326;
const POW5_INV_TABLE_SIZE: u32 = 292;

fn main() -> Result<()> {
    let pow5 = pow5_table();
    let pow5_inv = pow5_inv_table();

    let mut out = String::new();
    out.push_str(
        "//! Precomputed 125-bit powers of five for the shortest-digit core.\n\
         //!\n\
         //! Generated by `ecma-dtoa-dev`; do not edit by hand. Each entry stores a\n\
         //! 125-bit value split as `(lo, hi)` with `value = hi << 64 | lo`.\n\n\
         pub const DOUBLE_POW5_INV_BITCOUNT: i32 = 125;\n\
         pub const DOUBLE_POW5_BITCOUNT: i32 = 125;\n\n",
    );
    write_table(
        &mut out,
        "DOUBLE_POW5_SPLIT",
        "/// The most significant 125 bits of `5^i`, truncated.",
        &pow5,
    )?;
    out.push('\n');
    write_table(
        &mut out,
        "DOUBLE_POW5_INV_SPLIT",
        "/// `floor(2^(pow5bits(q) - 1 + 125) / 5^q) + 1`.",
        &pow5_inv,
    )?;

    let dest = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .context("crate has no parent directory")?
        .join("src")
        .join("d2s_full_table.rs");
    fs::write(&dest, out).with_context(|| format!("failed to write {}", dest.display()))?;
    println!("wrote {}", dest.display());
    Ok(())
}

/// The top 125 bits of `5^i` for each table index.
fn pow5_table() -> Vec<(u64, u64)> {
    (0..POW5_TABLE_SIZE)
        .map(|i| {
            let pow = BigUint::from(5u32).pow(i);
            let bits = pow.bits() as u32;
            let value = if bits <= POW5_BITCOUNT {
                pow << (POW5_BITCOUNT - bits)
            } else {
                pow >> (bits - POW5_BITCOUNT)
            };
            split(&value)
        })
        .collect()
}

/// `floor(2^(bits(5^q) - 1 + 125) / 5^q) + 1` for each table index.
fn pow5_inv_table() -> Vec<(u64, u64)> {
    (0..POW5_INV_TABLE_SIZE)
        .map(|q| {
            let pow = BigUint::from(5u32).pow(q);
            let bits = pow.bits() as u32;
            let value = (BigUint::from(1u32) << (bits - 1 + POW5_BITCOUNT)) / pow + 1u32;
            split(&value)
        })
        .collect()
}

fn split(value: &BigUint) -> (u64, u64) {
    let mut digits = value.to_u64_digits();
    digits.resize(2, 0);
    (digits[0], digits[1])
}

fn write_table(out: &mut String, name: &str, doc: &str, table: &[(u64, u64)]) -> Result<()> {
    ensure!(!table.is_empty(), "empty table {}", name);
    writeln!(out, "{}", doc)?;
    writeln!(out, "pub static {}: [(u64, u64); {}] = [", name, table.len())?;
    for (lo, hi) in table {
        writeln!(out, "    (0x{:016x}, 0x{:016x}),", lo, hi)?;
    }
    writeln!(out, "];")?;
    Ok(())
}
