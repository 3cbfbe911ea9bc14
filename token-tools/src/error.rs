// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::{
    primitives::{Address, TxHash},
    sol_types::SolInterface,
    transports::{RpcError, TransportErrorKind},
};

use crate::utils::color::DebugColor;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Any error produced by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Wallet(#[from] WalletError),
    #[error("{0}")]
    Artifact(#[from] ArtifactError),
    #[error("{0}")]
    Deployment(#[from] DeploymentError),
    #[error("{0}")]
    Transaction(#[from] TransactionError),
    #[error("{0}")]
    Query(#[from] QueryError),
    #[error("{0}")]
    Network(#[from] crate::core::network::NetworkError),
}

#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("signer error: {0}")]
    Signer(#[from] alloy::signers::local::LocalSignerError),

    #[error("empty private key")]
    EmptyKey,
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A contract-creation transaction was rejected or never confirmed.
#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("rpc error: {0}")]
    Rpc(#[from] RpcError<TransportErrorKind>),

    #[error("artifact has no deployable bytecode")]
    EmptyBytecode,
    #[error("invalid constructor: {0}")]
    InvalidConstructor(String),
    #[error("deployment rejected: {0}")]
    Rejected(String),
    #[error("tx failed to complete")]
    FailedToComplete,
    #[error("deploy tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("missing address: {0}")]
    NoContractAddress(String),
}

/// A state-changing call was rejected by the network or by the contract.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    #[error("rpc error: {0}")]
    Rpc(#[from] RpcError<TransportErrorKind>),

    #[error("call rejected: {0}")]
    Rejected(String),
    #[error("tx failed to complete")]
    FailedToComplete,
    #[error("tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("unknown tx {}", .tx_hash.debug_red())]
    UnknownTransaction { tx_hash: TxHash },
}

/// A read-only query failed.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("rpc error: {0}")]
    Rpc(#[from] RpcError<TransportErrorKind>),
    #[error("contract error: {0}")]
    Contract(#[from] alloy::contract::Error),

    #[error("no token contract at {}", .0.debug_red())]
    UnknownContract(Address),
}

#[derive(Debug, thiserror::Error)]
pub enum ContractDecodeError {
    #[error("no error payload found in response: {0:?}")]
    NoErrorPayload(RpcError<TransportErrorKind>),
    #[error("failed to decode error: {0:?}")]
    FailedToDecode(alloy::rpc::json_rpc::ErrorPayload),
}

/// Decodes the revert data carried by a node error into one of the errors of `E`.
pub fn decode_contract_error<E: SolInterface>(
    err: RpcError<TransportErrorKind>,
) -> Result<E, ContractDecodeError> {
    let Some(err_resp) = err.as_error_resp() else {
        return Err(ContractDecodeError::NoErrorPayload(err));
    };
    let Some(errs) = err_resp.as_decoded_interface_error::<E>() else {
        return Err(ContractDecodeError::FailedToDecode(err_resp.clone()));
    };
    Ok(errs)
}
