// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::Address;
use token_tools::{ops, utils::format_token_amount};

use crate::{
    common_args::{ContractArgs, ProviderArgs},
    error::TokenCliResult,
    utils::print_field,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Account to query
    #[arg(long)]
    owner: Address,

    #[command(flatten)]
    contract: ContractArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> TokenCliResult {
    let backend = args.provider.backend()?;
    let token = args.contract.token(backend.clone());
    let balance = ops::token_balance(&token, args.owner).await?;
    print_field("balance", balance);

    if let Ok(metadata) = backend.metadata(token.address()).await {
        log::info!(
            "{} {}",
            format_token_amount(balance, metadata.decimals),
            metadata.symbol
        );
    }
    Ok(())
}
