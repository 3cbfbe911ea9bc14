// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::PathBuf};

use alloy::primitives::Address;
use eyre::{bail, WrapErr};
use token_tools::{RpcBackend, RpcConfig, TokenContract, Wallet};

use crate::{constants::DEFAULT_ENDPOINT, utils::convert_gwei_to_wei};

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// File path to a text file containing a hex-encoded private key
    #[arg(long)]
    private_key_path: Option<PathBuf>,
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long)]
    private_key: Option<String>,
    /// Path to an Ethereum wallet keystore file (e.g. clef)
    #[arg(long)]
    keystore_path: Option<PathBuf>,
    /// Keystore password file
    #[arg(long)]
    keystore_password_path: Option<PathBuf>,
}

impl AuthArgs {
    pub fn wallet(&self) -> eyre::Result<Wallet> {
        if let Some(key) = &self.private_key {
            return Ok(Wallet::from_private_key(key)?);
        }

        if let Some(file) = &self.private_key_path {
            return Wallet::from_private_key_file(file).wrap_err("could not load private key file");
        }

        let Some(keystore) = &self.keystore_path else {
            bail!("no wallet given: pass --private-key, --private-key-path or --keystore-path");
        };
        let password = match &self.keystore_password_path {
            Some(path) => fs::read_to_string(path).wrap_err("could not read keystore password")?,
            None => String::new(),
        };
        let password = password.trim_end_matches(['\r', '\n']);
        Wallet::from_keystore(keystore, password).wrap_err("could not decrypt keystore")
    }
}

#[derive(Debug, clap::Args)]
pub struct ContractArgs {
    /// Address of the deployed token contract
    #[arg(long)]
    pub contract: Address,
}

impl ContractArgs {
    pub fn token(&self, backend: RpcBackend) -> TokenContract<RpcBackend> {
        TokenContract::at(self.contract, backend)
    }
}

#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// JSON-RPC endpoint of the chain node
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
    /// Optional max fee per gas in gwei units.
    #[arg(long)]
    max_fee_per_gas_gwei: Option<String>,
}

impl ProviderArgs {
    pub fn get_max_fee_per_gas_wei(&self) -> eyre::Result<Option<u128>> {
        self.max_fee_per_gas_gwei
            .as_deref()
            .map(convert_gwei_to_wei)
            .transpose()
    }

    pub fn backend(&self) -> eyre::Result<RpcBackend> {
        let config = RpcConfig::builder()
            .endpoint(self.endpoint.as_str())
            .max_fee_per_gas_wei(self.get_max_fee_per_gas_wei()?)
            .build();
        Ok(RpcBackend::new(config)?)
    }
}
