// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for deploying and operating ERC20 token contracts.
//!
//! The [`ops`] module holds the user-facing operations. They depend only on the
//! [`TokenBackend`](core::backend::TokenBackend) trait, which is implemented over an
//! `alloy` provider by [`RpcBackend`](core::backend::RpcBackend) and in memory by
//! [`MemoryBackend`](core::backend::MemoryBackend).

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod ops;
pub mod utils;

#[cfg(feature = "integration-tests")]
pub mod devnet;

pub use crate::core::{
    artifact::ContractArtifact,
    backend::{MemoryBackend, Receipt, RpcBackend, RpcConfig, TokenBackend, TokenCall},
    contract::{PendingTokenTx, SignedToken, TokenContract},
    wallet::Wallet,
};
pub use error::{
    ArtifactError, DeploymentError, Error, QueryError, Result, TransactionError, WalletError,
};
