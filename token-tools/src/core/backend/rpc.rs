// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, TxHash, U256},
    providers::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    transports::{http::reqwest::Url, RpcError, TransportErrorKind},
};

use super::{Receipt, TokenBackend, TokenCall};
use crate::{
    core::{
        network::{check_endpoint, NetworkError, RpcConfig},
        token::{describe_revert, IToken, TokenMetadata},
        wallet::Wallet,
    },
    error::{
        decode_contract_error, ContractDecodeError, DeploymentError, QueryError, TransactionError,
    },
    utils::color::DebugColor,
};

/// Backend that talks to a chain node over HTTP JSON-RPC.
///
/// Reads and receipt polling go through a shared provider. Each submission builds a
/// wallet-filling provider for its signer, so nonce, gas and chain id come from the node.
#[derive(Clone)]
pub struct RpcBackend {
    url: Url,
    config: RpcConfig,
    reader: DynProvider,
}

impl RpcBackend {
    pub fn new(config: RpcConfig) -> Result<Self, NetworkError> {
        let url = check_endpoint(&config.endpoint)?;
        let reader = ProviderBuilder::new().connect_http(url.clone()).erased();
        Ok(Self {
            url,
            config,
            reader,
        })
    }

    pub fn config(&self) -> &RpcConfig {
        &self.config
    }

    /// Read-only provider for the configured endpoint.
    pub fn provider(&self) -> &DynProvider {
        &self.reader
    }

    /// Reads name, symbol, decimals and total supply of a token.
    pub async fn metadata(&self, contract: Address) -> Result<TokenMetadata, QueryError> {
        let token = IToken::new(contract, &self.reader);
        Ok(TokenMetadata {
            name: token.name().call().await.map_err(|err| query_error(contract, err))?,
            symbol: token.symbol().call().await.map_err(|err| query_error(contract, err))?,
            decimals: token.decimals().call().await.map_err(|err| query_error(contract, err))?,
            total_supply: token
                .totalSupply()
                .call()
                .await
                .map_err(|err| query_error(contract, err))?,
        })
    }

    fn signing_provider(&self, signer: &Wallet) -> impl Provider {
        ProviderBuilder::new()
            .wallet(signer.ethereum_wallet())
            .connect_http(self.url.clone())
    }

    fn with_fees(&self, mut tx: TransactionRequest) -> TransactionRequest {
        if let Some(wei) = self.config.max_fee_per_gas_wei {
            tx.max_fee_per_gas = Some(wei);
        }
        if let Some(wei) = self.config.max_priority_fee_per_gas_wei {
            tx.max_priority_fee_per_gas = Some(wei);
        }
        tx
    }
}

impl fmt::Debug for RpcBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcBackend")
            .field("url", &self.url.as_str())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TokenBackend for RpcBackend {
    async fn deploy(
        &self,
        deployer: &Wallet,
        init_code: Bytes,
    ) -> Result<Receipt, DeploymentError> {
        let tx = TransactionRequest::default()
            .with_from(deployer.address())
            .with_deploy_code(init_code);
        let tx = self.with_fees(tx);

        let pending = self
            .signing_provider(deployer)
            .send_transaction(tx)
            .await
            .map_err(deployment_error)?;
        let tx_hash = *pending.tx_hash();
        debug!(@grey, "sent deploy tx: {}", tx_hash.debug_lavender());

        let receipt = pending
            .with_required_confirmations(self.config.confirmations)
            .get_receipt()
            .await
            .or(Err(DeploymentError::FailedToComplete))?;
        if !receipt.status() {
            return Err(DeploymentError::Reverted { tx_hash });
        }
        Ok(Receipt::from(&receipt))
    }

    async fn submit(
        &self,
        contract: Address,
        signer: &Wallet,
        call: TokenCall,
    ) -> Result<TxHash, TransactionError> {
        let tx = TransactionRequest::default()
            .with_from(signer.address())
            .with_to(contract)
            .with_input(call.calldata());
        let tx = self.with_fees(tx);

        let pending = self
            .signing_provider(signer)
            .send_transaction(tx)
            .await
            .map_err(transaction_error)?;
        let tx_hash = *pending.tx_hash();
        debug!(@grey, "sent {} tx: {}", call.name(), tx_hash.debug_lavender());
        Ok(tx_hash)
    }

    async fn confirm(&self, tx_hash: TxHash) -> Result<Receipt, TransactionError> {
        let receipt = PendingTransactionBuilder::new(self.reader.root().clone(), tx_hash)
            .with_required_confirmations(self.config.confirmations)
            .get_receipt()
            .await
            .or(Err(TransactionError::FailedToComplete))?;
        if !receipt.status() {
            return Err(TransactionError::Reverted { tx_hash });
        }
        Ok(Receipt::from(&receipt))
    }

    async fn balance_of(&self, contract: Address, owner: Address) -> Result<U256, QueryError> {
        IToken::new(contract, &self.reader)
            .balanceOf(owner)
            .call()
            .await
            .map_err(|err| query_error(contract, err))
    }
}

fn deployment_error(err: RpcError<TransportErrorKind>) -> DeploymentError {
    if let Some(payload) = err.as_error_resp() {
        return DeploymentError::Rejected(payload.message.to_string());
    }
    DeploymentError::Rpc(err)
}

fn transaction_error(err: RpcError<TransportErrorKind>) -> TransactionError {
    match decode_contract_error::<IToken::ITokenErrors>(err) {
        Ok(revert) => TransactionError::Rejected(describe_revert(&revert)),
        Err(ContractDecodeError::FailedToDecode(payload)) => {
            TransactionError::Rejected(payload.message.to_string())
        }
        Err(ContractDecodeError::NoErrorPayload(err)) => TransactionError::Rpc(err),
    }
}

fn query_error(contract: Address, err: alloy::contract::Error) -> QueryError {
    match err {
        // Calls to an address without code come back empty.
        alloy::contract::Error::ZeroData(..) => QueryError::UnknownContract(contract),
        err => QueryError::Contract(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unsupported_endpoint() {
        let config = RpcConfig::builder().endpoint("ws://localhost:8546").build();
        assert!(matches!(
            RpcBackend::new(config),
            Err(NetworkError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn applies_fee_overrides() {
        let config = RpcConfig::builder()
            .endpoint("http://localhost:8545")
            .max_fee_per_gas_wei(Some(3_000_000_000))
            .build();
        let backend = RpcBackend::new(config).unwrap();
        let tx = backend.with_fees(TransactionRequest::default());
        assert_eq!(tx.max_fee_per_gas, Some(3_000_000_000));
        assert_eq!(tx.max_priority_fee_per_gas, None);
    }

    #[test]
    fn debug_shows_endpoint() {
        let config = RpcConfig::builder().endpoint("http://localhost:8545").build();
        let backend = RpcBackend::new(config).unwrap();
        assert!(format!("{backend:?}").contains("localhost:8545"));
    }
}
