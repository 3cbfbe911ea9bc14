// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::U256;
use token_tools::ops;

use crate::{
    common_args::{AuthArgs, ContractArgs, ProviderArgs},
    error::TokenCliResult,
    utils::print_field,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Amount in base units
    #[arg(long)]
    amount: U256,

    #[command(flatten)]
    contract: ContractArgs,
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> TokenCliResult {
    let burner = args.auth.wallet()?;
    let token = args.contract.token(args.provider.backend()?);
    let receipt = ops::burn_tokens(&token, &burner, args.amount).await?;
    print_field("tx hash", receipt.tx_hash);
    Ok(())
}
