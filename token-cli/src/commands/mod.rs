// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::TokenCliResult;

mod balance;
mod burn;
mod deploy;
mod mint;
mod new_wallet;
mod transfer;
mod transfer_all;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Print the token balance of an account
    #[clap(visible_alias = "b")]
    Balance(balance::Args),
    /// Burn tokens held by the signer
    Burn(burn::Args),
    /// Deploy a token contract from a compiled artifact
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
    /// Mint tokens to an account
    #[clap(visible_alias = "m")]
    Mint(mint::Args),
    /// Generate a new random wallet
    NewWallet(new_wallet::Args),
    /// Transfer tokens from the signer to an account
    #[clap(visible_alias = "t")]
    Transfer(transfer::Args),
    /// Transfer the signer's whole balance to an account
    TransferAll(transfer_all::Args),
}

pub async fn exec(cmd: Command) -> TokenCliResult {
    match cmd {
        Command::Balance(args) => balance::exec(args).await,
        Command::Burn(args) => burn::exec(args).await,
        Command::Deploy(args) => deploy::exec(args).await,
        Command::Mint(args) => mint::exec(args).await,
        Command::NewWallet(args) => new_wallet::exec(args),
        Command::Transfer(args) => transfer::exec(args).await,
        Command::TransferAll(args) => transfer_all::exec(args).await,
    }
}
