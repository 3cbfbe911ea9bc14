// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::core::wallet::Wallet;

/// Generates a new random wallet.
pub fn create_wallet() -> Wallet {
    Wallet::random()
}
