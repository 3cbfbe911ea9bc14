// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::U256;

use crate::{
    core::{
        backend::{Receipt, TokenBackend},
        contract::TokenContract,
        wallet::Wallet,
    },
    error::TransactionError,
    utils::color::DebugColor,
};

/// Burns `amount` of the burner's own tokens.
pub async fn burn_tokens<B: TokenBackend>(
    contract: &TokenContract<B>,
    burner: &Wallet,
    amount: U256,
) -> Result<Receipt, TransactionError> {
    let receipt = contract.connect(burner).burn(amount).await?.wait().await?;
    debug!(@grey, "burned {} in tx {}", amount, receipt.tx_hash.debug_lavender());
    Ok(receipt)
}
