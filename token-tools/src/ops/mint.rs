// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::{Address, U256};

use crate::{
    core::{
        backend::{Receipt, TokenBackend},
        contract::TokenContract,
        wallet::Wallet,
    },
    error::TransactionError,
    utils::color::DebugColor,
};

/// Mints `amount` tokens to `to`, signed by `minter`.
///
/// Whether `minter` may mint is decided by the contract.
pub async fn mint_tokens<B: TokenBackend>(
    contract: &TokenContract<B>,
    minter: &Wallet,
    to: Address,
    amount: U256,
) -> Result<Receipt, TransactionError> {
    let receipt = contract
        .connect(minter)
        .mint(to, amount)
        .await?
        .wait()
        .await?;
    debug!(@grey, "minted {} to {} in tx {}", amount, to, receipt.tx_hash.debug_lavender());
    Ok(receipt)
}
