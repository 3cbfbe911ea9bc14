// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use eyre::{Result, WrapErr};
use reqwest::{header::HeaderValue, Method, Response};
use testcontainers::{
    core::{wait::HttpWaitStrategy, IntoContainerPort, WaitFor},
    runners::AsyncRunner,
    ContainerAsync, GenericImage, ImageExt,
};

use crate::core::{
    backend::{RpcBackend, RpcConfig},
    wallet::Wallet,
};

/// First prefunded Anvil dev account.
pub const DEVNET_PRIVATE_KEY: &str = DEVNET_ACCOUNT_KEYS[0];

/// Keys of the first prefunded Anvil dev accounts.
pub const DEVNET_ACCOUNT_KEYS: [&str; 3] = [
    "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
    "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d",
    "5de4111afa1a4b94908f83103eb1f1706367c2e68ca870fc3fb9a804cdab365a",
];

pub mod addresses {
    pub use alloy::primitives::{address, Address};

    pub const ACCOUNT_0: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
    pub const ACCOUNT_1: Address = address!("0x70997970C51812dc3A010C7d01b50e0d17dc79C8");
    pub const ACCOUNT_2: Address = address!("0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC");
}

const ANVIL_IMAGE_NAME: &str = "ghcr.io/foundry-rs/foundry";
const ANVIL_IMAGE_TAG: &str = "stable";
const ANVIL_PORT: u16 = 8545;

/// Manage an Anvil devnet node for deploying token contracts.
pub struct Node {
    _container: ContainerAsync<GenericImage>,
    rpc: String,
}

impl Node {
    /// Starts a new Anvil node in the background.
    /// This node will be shutdown when this struct is dropped.
    pub async fn new() -> Result<Self> {
        let wait_strategy = HttpWaitStrategy::new("/")
            .with_port(ANVIL_PORT.into())
            .with_method(Method::POST)
            .with_header("Content-Type", HeaderValue::from_static("application/json"))
            .with_body(r#"{"jsonrpc":"2.0","method":"eth_chainId","params":[],"id":1}"#)
            .with_response_matcher_async(anvil_response_matcher);
        // The image entrypoint is `sh -c`, so the whole command is a single argument.
        let container = GenericImage::new(ANVIL_IMAGE_NAME, ANVIL_IMAGE_TAG)
            .with_exposed_port(ANVIL_PORT.tcp())
            .with_wait_for(WaitFor::Http(wait_strategy))
            .with_cmd(vec!["anvil --host 0.0.0.0"])
            .start()
            .await
            .wrap_err("failed to start Anvil container")?;
        let port = container
            .get_host_port_ipv4(ANVIL_PORT)
            .await
            .wrap_err("failed to get Anvil RPC port")?;
        Ok(Node {
            _container: container,
            rpc: format!("http://localhost:{port}"),
        })
    }

    /// Get the Anvil node RPC.
    pub fn rpc(&self) -> &str {
        &self.rpc
    }

    /// Backend connected to this node.
    pub fn backend(&self) -> Result<RpcBackend> {
        let config = RpcConfig::builder().endpoint(self.rpc()).build();
        Ok(RpcBackend::new(config)?)
    }

    /// Wallet holding the first prefunded dev account.
    pub fn funded_wallet(&self) -> Result<Wallet> {
        self.account(0)
    }

    /// Wallet holding the prefunded dev account at `index`.
    pub fn account(&self, index: usize) -> Result<Wallet> {
        let Some(key) = DEVNET_ACCOUNT_KEYS.get(index) else {
            eyre::bail!("no prefunded devnet account {index}");
        };
        Wallet::from_private_key(key).wrap_err("failed to load devnet key")
    }
}

async fn anvil_response_matcher(response: Response) -> bool {
    let Ok(text) = response.text().await else {
        return false;
    };
    text.contains("result")
}

#[cfg(test)]
mod tests {
    use alloy::{json_abi::JsonAbi, primitives::U256, providers::Provider};

    use super::*;
    use crate::{core::artifact::ContractArtifact, error::QueryError, ops};

    #[test]
    fn account_keys_match_prefunded_addresses() {
        let expected = [addresses::ACCOUNT_0, addresses::ACCOUNT_1, addresses::ACCOUNT_2];
        for (key, address) in DEVNET_ACCOUNT_KEYS.iter().zip(expected) {
            assert_eq!(Wallet::from_private_key(key).unwrap().address(), address);
        }
    }

    #[tokio::test]
    async fn node_deploys_contracts() -> Result<()> {
        let devnode = Node::new().await?;
        let backend = devnode.backend()?;
        let deployer = devnode.funded_wallet()?;

        // Init code that leaves a single STOP byte as runtime code.
        let artifact = ContractArtifact::new(
            JsonAbi::default(),
            alloy::hex::decode("6001600c60003960016000f300")?,
        );
        let token = ops::deploy_token(&backend, &deployer, &artifact, &[]).await?;
        assert!(!token.address().is_zero());

        let code = backend.provider().get_code_at(token.address()).await?;
        assert_eq!(code.len(), 1);

        // The runtime code returns nothing, so balance queries cannot decode.
        let err = ops::token_balance(&token, deployer.address()).await.unwrap_err();
        assert!(matches!(err, QueryError::UnknownContract(_) | QueryError::Contract(_)));

        let balance = backend.provider().get_balance(deployer.address()).await?;
        assert!(balance > U256::ZERO);
        Ok(())
    }
}
