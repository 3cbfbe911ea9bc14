// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Token operations.
//!
//! Each operation is a thin wrapper around one backend call plus, for state-changing
//! calls, one confirmation wait.

pub use balance::token_balance;
pub use burn::burn_tokens;
pub use deploy::deploy_token;
pub use mint::mint_tokens;
pub use transfer::{transfer_all_tokens, transfer_tokens};
pub use wallet::create_wallet;

mod balance;
mod burn;
mod deploy;
mod mint;
mod transfer;
mod wallet;
