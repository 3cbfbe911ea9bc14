// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Chain client seam.
//!
//! Token operations only talk to a [`TokenBackend`]. [`RpcBackend`] forwards to a chain
//! node through `alloy`; [`MemoryBackend`] keeps an in-process ledger for tests.

use std::future::Future;

use alloy::{
    primitives::{Address, Bytes, TxHash, U256},
    rpc::types::TransactionReceipt,
};

use crate::{
    core::wallet::Wallet,
    error::{DeploymentError, QueryError, TransactionError},
};

pub use crate::core::{network::RpcConfig, token::TokenCall};
pub use memory::{CallCounts, MemoryBackend};
pub use rpc::RpcBackend;

mod memory;
mod rpc;

/// Summary of a confirmed transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
    pub gas_used: u64,
    /// Whether the tx executed successfully
    pub status: bool,
    /// Address of the created contract, for deployments
    pub contract_address: Option<Address>,
}

impl From<&TransactionReceipt> for Receipt {
    fn from(receipt: &TransactionReceipt) -> Self {
        Self {
            tx_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
            gas_used: receipt.gas_used,
            status: receipt.status(),
            contract_address: receipt.contract_address,
        }
    }
}

/// Client operations a token contract needs.
///
/// Submission and confirmation are separate steps so callers decide when to block on
/// the chain. Authorization is left entirely to the contract. Implementations may
/// write the methods as `async fn`; the returned futures must be `Send` so token
/// operations can run on spawned tasks.
pub trait TokenBackend: Clone + Send + Sync {
    /// Sends a contract-creation tx signed by `deployer` and waits for its receipt.
    fn deploy(
        &self,
        deployer: &Wallet,
        init_code: Bytes,
    ) -> impl Future<Output = Result<Receipt, DeploymentError>> + Send;

    /// Sends `call` to `contract` signed by `signer`, without waiting for inclusion.
    fn submit(
        &self,
        contract: Address,
        signer: &Wallet,
        call: TokenCall,
    ) -> impl Future<Output = Result<TxHash, TransactionError>> + Send;

    /// Waits until a submitted tx is confirmed.
    fn confirm(
        &self,
        tx_hash: TxHash,
    ) -> impl Future<Output = Result<Receipt, TransactionError>> + Send;

    /// Reads `balanceOf(owner)` without sending a tx.
    fn balance_of(
        &self,
        contract: Address,
        owner: Address,
    ) -> impl Future<Output = Result<U256, QueryError>> + Send;
}
