// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::transports::http::reqwest::Url;
use typed_builder::TypedBuilder;

use crate::utils::color::Color;

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("invalid endpoint {}: {}", .0.red(), .1)]
    InvalidEndpoint(String, String),
    #[error("unsupported endpoint scheme {} (expected http or https)", .0.red())]
    UnsupportedScheme(String),
}

/// Connection settings for [`RpcBackend`](super::backend::RpcBackend).
#[derive(Debug, Clone, TypedBuilder)]
#[builder(field_defaults(default, setter(into)))]
pub struct RpcConfig {
    /// HTTP(S) JSON-RPC endpoint of the chain node
    #[builder(!default)]
    pub endpoint: String,
    /// Overrides the max fee per gas of every submitted tx
    pub max_fee_per_gas_wei: Option<u128>,
    /// Overrides the max priority fee per gas of every submitted tx
    pub max_priority_fee_per_gas_wei: Option<u128>,
    /// Blocks to wait for before a tx counts as confirmed
    #[builder(default = 1)]
    pub confirmations: u64,
}

pub fn check_endpoint(endpoint: &str) -> Result<Url, NetworkError> {
    let url = endpoint
        .trim()
        .parse::<Url>()
        .map_err(|err| NetworkError::InvalidEndpoint(endpoint.to_owned(), err.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(NetworkError::UnsupportedScheme(scheme.to_owned())),
    }
}
