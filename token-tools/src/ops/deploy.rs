// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Token deployment.

use alloy::dyn_abi::DynSolValue;

use crate::{
    core::{
        artifact::ContractArtifact, backend::TokenBackend, contract::TokenContract,
        wallet::Wallet,
    },
    error::DeploymentError,
    utils::color::DebugColor,
};

/// Deploys `artifact` signed by `deployer` and waits for the creation tx to confirm.
///
/// Pass an empty `constructor_args` for contracts without constructor parameters.
pub async fn deploy_token<B: TokenBackend>(
    backend: &B,
    deployer: &Wallet,
    artifact: &ContractArtifact,
    constructor_args: &[DynSolValue],
) -> Result<TokenContract<B>, DeploymentError> {
    let init_code = artifact.init_code(constructor_args)?;
    debug!(@grey, "deployer address: {}", deployer.address().debug_lavender());

    let receipt = backend.deploy(deployer, init_code).await?;
    let address = receipt
        .contract_address
        .filter(|address| !address.is_zero())
        .ok_or_else(|| DeploymentError::NoContractAddress("in receipt".to_owned()))?;

    info!(@grey, "deployed token at address: {}", address.debug_lavender());
    info!(@grey, "deployment tx hash: {}", receipt.tx_hash.debug_lavender());
    Ok(TokenContract::at(address, backend.clone()))
}
