// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt::Display;

use alloy::primitives::utils::{parse_units, ParseUnits};
use eyre::{bail, WrapErr};

pub use style::{BOLD, ERROR, VALUE};

mod style;

/// Parses a decimal gwei amount such as `1.5` into wei.
pub fn convert_gwei_to_wei(fee_str: &str) -> eyre::Result<u128> {
    let parsed = parse_units(fee_str.trim(), "gwei")
        .wrap_err_with(|| format!("invalid max fee per gas value: {fee_str}"))?;
    match parsed {
        ParseUnits::U256(wei) => {
            u128::try_from(wei).wrap_err("max fee per gas is outside the valid range for wei")
        }
        ParseUnits::I256(_) => bail!("max fee per gas must be non-negative"),
    }
}

pub fn print_error(err: impl Display) {
    eprintln!("{ERROR}error{ERROR:#}{BOLD}:{BOLD:#} {err}");
}

/// Prints a labelled value to stdout.
pub fn print_field(label: &str, value: impl Display) {
    println!("{BOLD}{label}{BOLD:#}: {VALUE}{value}{VALUE:#}");
}
