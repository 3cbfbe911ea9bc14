// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::Address;
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
    match ops::transfer_all_tokens(&token, &from, args.to).await? {
        Some(receipt) => print_field("tx hash", receipt.tx_hash),
        None => log::info!("{} holds no tokens, nothing sent", from.address()),
    }
    Ok(())
}
