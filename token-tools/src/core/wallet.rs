// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Signing wallets.

use std::{fmt, fs, path::Path};

use alloy::{
    network::EthereumWallet,
    primitives::{Address, B256},
    signers::local::{LocalSigner, PrivateKeySigner},
};

use crate::{error::WalletError, utils::strip0x};

/// A private key and the address derived from it.
///
/// Wallets are immutable once created. The [`Debug`] impl only shows the address.
#[derive(Clone)]
pub struct Wallet {
    signer: PrivateKeySigner,
}

impl Wallet {
    /// Generates a new random key pair.
    pub fn random() -> Self {
        Self {
            signer: PrivateKeySigner::random(),
        }
    }

    /// Loads a wallet from a hex-encoded private key, with or without `0x`.
    pub fn from_private_key(key: &str) -> Result<Self, WalletError> {
        let key = strip0x(key);
        if key.is_empty() {
            return Err(WalletError::EmptyKey);
        }
        Ok(Self {
            signer: key.parse()?,
        })
    }

    /// Loads a wallet from a file containing a hex-encoded private key.
    pub fn from_private_key_file(path: impl AsRef<Path>) -> Result<Self, WalletError> {
        let key = fs::read_to_string(path)?;
        Self::from_private_key(&key)
    }

    /// Decrypts an Ethereum keystore file (e.g. clef or geth).
    pub fn from_keystore(
        path: impl AsRef<Path>,
        password: impl AsRef<[u8]>,
    ) -> Result<Self, WalletError> {
        Ok(Self {
            signer: LocalSigner::decrypt_keystore(path, password)?,
        })
    }

    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Raw private key bytes.
    pub fn private_key(&self) -> B256 {
        self.signer.to_bytes()
    }

    pub fn signer(&self) -> &PrivateKeySigner {
        &self.signer
    }

    /// Wraps the signer for use with a wallet-filling provider.
    pub fn ethereum_wallet(&self) -> EthereumWallet {
        EthereumWallet::from(self.signer.clone())
    }
}

impl From<PrivateKeySigner> for Wallet {
    fn from(signer: PrivateKeySigner) -> Self {
        Self { signer }
    }
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}
