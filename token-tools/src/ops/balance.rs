// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::{Address, U256};

use crate::{
    core::{backend::TokenBackend, contract::TokenContract},
    error::QueryError,
};

/// Reads the token balance of `owner`.
pub async fn token_balance<B: TokenBackend>(
    contract: &TokenContract<B>,
    owner: Address,
) -> Result<U256, QueryError> {
    contract.balance_of(owner).await
}
