// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::{Address, U256};
use token_tools::ops;

use crate::{
    common_args::{AuthArgs, ContractArgs, ProviderArgs},
    error::TokenCliResult,
    utils::print_field,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Receiving account
    #[arg(long)]
    to: Address,
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
    let from = args.auth.wallet()?;
    let token = args.contract.token(args.provider.backend()?);
    let receipt = ops::transfer_tokens(&token, &from, args.to, args.amount).await?;
    print_field("tx hash", receipt.tx_hash);
    Ok(())
}
