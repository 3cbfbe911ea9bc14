// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::{Address, U256};

use crate::{
    core::{
        backend::{Receipt, TokenBackend},
        contract::TokenContract,
        wallet::Wallet,
    },
    error::{Error, TransactionError},
    utils::color::DebugColor,
};

/// Transfers `amount` tokens from `from` to `to`.
pub async fn transfer_tokens<B: TokenBackend>(
    contract: &TokenContract<B>,
    from: &Wallet,
    to: Address,
    amount: U256,
) -> Result<Receipt, TransactionError> {
    let receipt = contract
        .connect(from)
        .transfer(to, amount)
        .await?
        .wait()
        .await?;
    debug!(@grey, "transferred {} to {} in tx {}", amount, to, receipt.tx_hash.debug_lavender());
    Ok(receipt)
}

/// Transfers the whole balance of `from` to `to`.
///
/// Returns `None` without sending anything when the balance is zero.
///
/// The balance is read first and the transfer sent afterwards. The two steps are not
/// atomic: if the balance drops in between the transfer fails, and anything received
/// in between stays behind.
pub async fn transfer_all_tokens<B: TokenBackend>(
    contract: &TokenContract<B>,
    from: &Wallet,
    to: Address,
) -> Result<Option<Receipt>, Error> {
    let balance = contract.balance_of(from.address()).await?;
    if balance.is_zero() {
        debug!(@grey, "{} holds no tokens, nothing to transfer", from.address());
        return Ok(None);
    }
    let receipt = transfer_tokens(contract, from, to, balance).await?;
    Ok(Some(receipt))
}
