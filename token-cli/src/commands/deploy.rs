// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use token_tools::{ops, ContractArtifact};

use crate::{
    common_args::{AuthArgs, ProviderArgs},
    error::TokenCliResult,
    utils::print_field,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Path to a compiled contract artifact (Hardhat or Foundry JSON)
    #[arg(long)]
    artifact: PathBuf,
    /// The constructor arguments.
    #[arg(
        long,
        num_args(0..),
        value_name = "ARGS",
        allow_hyphen_values = true,
    )]
    constructor_args: Vec<String>,

    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> TokenCliResult {
    let artifact = ContractArtifact::from_path(&args.artifact)?;
    let constructor_args = artifact.parse_constructor_args(&args.constructor_args)?;
    let deployer = args.auth.wallet()?;
    let backend = args.provider.backend()?;

    let token = ops::deploy_token(&backend, &deployer, &artifact, &constructor_args).await?;
    print_field("contract", token.address());

    // Informational only, the artifact may not expose ERC20 metadata.
    match backend.metadata(token.address()).await {
        Ok(metadata) => {
            print_field("name", &metadata.name);
            print_field("symbol", &metadata.symbol);
            print_field("decimals", metadata.decimals);
        }
        Err(err) => log::debug!("could not read token metadata: {err}"),
    }
    Ok(())
}
