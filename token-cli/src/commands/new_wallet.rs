// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use token_tools::ops;

use crate::{error::TokenCliResult, utils::print_field};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Print the wallet as a JSON object
    #[arg(long)]
    json: bool,
}

pub fn exec(args: Args) -> TokenCliResult {
    let wallet = ops::create_wallet();
    if args.json {
        let json = serde_json::json!({
            "address": wallet.address().to_string(),
            "private_key": wallet.private_key().to_string(),
        });
        println!("{json}");
    } else {
        print_field("address", wallet.address());
        print_field("private key", wallet.private_key());
    }
    Ok(())
}
