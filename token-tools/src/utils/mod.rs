// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.

use alloy::primitives::{utils::format_units, U256};

use color::Color;

pub mod color;

/// Pretty-prints a token amount given the token's decimals.
///
/// Falls back to the raw base-unit amount if the decimals are out of range.
pub fn format_token_amount(amount: U256, decimals: u8) -> String {
    match format_units(amount, decimals) {
        Ok(text) => text.mint(),
        Err(_) => amount.to_string().mint(),
    }
}

/// Strips an optional `0x` prefix and surrounding whitespace from a hex string.
pub fn strip0x(text: &str) -> &str {
    let text = text.trim();
    text.strip_prefix("0x").unwrap_or(text)
}
