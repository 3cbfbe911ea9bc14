// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Handles to deployed token contracts.

use alloy::primitives::{Address, TxHash, U256};

use crate::{
    core::{
        backend::{Receipt, TokenBackend, TokenCall},
        wallet::Wallet,
    },
    error::{QueryError, TransactionError},
};

/// A token contract at a chain address, bound to the backend it was reached through.
#[derive(Debug, Clone)]
pub struct TokenContract<B> {
    address: Address,
    backend: B,
}

impl<B: TokenBackend> TokenContract<B> {
    /// Attaches to an already deployed contract.
    pub fn at(address: Address, backend: B) -> Self {
        Self { address, backend }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Binds the contract to a signer for state-changing calls.
    pub fn connect<'a>(&'a self, signer: &'a Wallet) -> SignedToken<'a, B> {
        SignedToken {
            contract: self,
            signer,
        }
    }

    pub async fn balance_of(&self, owner: Address) -> Result<U256, QueryError> {
        self.backend.balance_of(self.address, owner).await
    }
}

/// A [`TokenContract`] bound to a signing wallet.
#[derive(Debug)]
pub struct SignedToken<'a, B> {
    contract: &'a TokenContract<B>,
    signer: &'a Wallet,
}

impl<'a, B: TokenBackend> SignedToken<'a, B> {
    pub fn signer(&self) -> &Wallet {
        self.signer
    }

    pub async fn mint(
        &self,
        to: Address,
        amount: U256,
    ) -> Result<PendingTokenTx<'a, B>, TransactionError> {
        self.send(TokenCall::Mint { to, amount }).await
    }

    pub async fn transfer(
        &self,
        to: Address,
        amount: U256,
    ) -> Result<PendingTokenTx<'a, B>, TransactionError> {
        self.send(TokenCall::Transfer { to, amount }).await
    }

    pub async fn burn(&self, amount: U256) -> Result<PendingTokenTx<'a, B>, TransactionError> {
        self.send(TokenCall::Burn { amount }).await
    }

    pub async fn send(&self, call: TokenCall) -> Result<PendingTokenTx<'a, B>, TransactionError> {
        let contract = self.contract;
        let tx_hash = contract
            .backend
            .submit(contract.address, self.signer, call)
            .await?;
        Ok(PendingTokenTx {
            backend: &contract.backend,
            tx_hash,
        })
    }
}

/// A submitted token call that has not been waited on yet.
#[derive(Debug)]
#[must_use = "a pending tx does nothing unless waited on"]
pub struct PendingTokenTx<'a, B> {
    backend: &'a B,
    tx_hash: TxHash,
}

impl<B: TokenBackend> PendingTokenTx<'_, B> {
    pub fn tx_hash(&self) -> TxHash {
        self.tx_hash
    }

    /// Blocks until the tx is confirmed.
    pub async fn wait(self) -> Result<Receipt, TransactionError> {
        self.backend.confirm(self.tx_hash).await
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::Bytes;

    use super::*;
    use crate::core::backend::MemoryBackend;

    #[tokio::test]
    async fn rebinds_to_different_signers() {
        let backend = MemoryBackend::new();
        let owner = Wallet::random();
        let holder = Wallet::random();
        let receipt = backend
            .deploy(&owner, Bytes::from_static(&[0x00]))
            .await
            .unwrap();
        let token = TokenContract::at(receipt.contract_address.unwrap(), backend.clone());

        token
            .connect(&owner)
            .mint(holder.address(), U256::from(10))
            .await
            .unwrap()
            .wait()
            .await
            .unwrap();

        let signed = token.connect(&holder);
        assert_eq!(signed.signer().address(), holder.address());
        let pending = signed.burn(U256::from(4)).await.unwrap();
        let tx_hash = pending.tx_hash();
        assert_eq!(pending.wait().await.unwrap().tx_hash, tx_hash);

        assert_eq!(
            token.balance_of(holder.address()).await.unwrap(),
            U256::from(6)
        );
    }
}
