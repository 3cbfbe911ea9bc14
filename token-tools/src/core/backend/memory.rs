// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{collections::HashMap, fmt, sync::Arc};

use alloy::primitives::{keccak256, Address, Bytes, TxHash, U256};
use parking_lot::Mutex;

use super::{Receipt, TokenBackend, TokenCall};
use crate::{
    core::{
        token::{
            describe_revert,
            IToken::{
                ERC20InsufficientBalance, ERC20InvalidReceiver, ITokenErrors,
                OwnableUnauthorizedAccount,
            },
        },
        wallet::Wallet,
    },
    error::{DeploymentError, QueryError, TransactionError},
};

const TX_BASE_GAS: u64 = 21_000;
const CALL_GAS: u64 = 30_000;
const CODE_BYTE_GAS: u64 = 200;

/// Number of backend calls made so far.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CallCounts {
    pub deployments: usize,
    pub submissions: usize,
    pub confirmations: usize,
    pub queries: usize,
}

/// In-memory ERC20 chain.
///
/// Every deployed contract behaves like an ownable, mintable, burnable ERC20: the
/// deployer is the owner and the only account allowed to mint. Calls execute when
/// submitted and their receipts are handed out by [`TokenBackend::confirm`]. Clones
/// share the same ledger.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    ledger: Arc<Mutex<Ledger>>,
}

#[derive(Debug, Default)]
struct Ledger {
    block: u64,
    nonces: HashMap<Address, u64>,
    tokens: HashMap<Address, TokenState>,
    pending: HashMap<TxHash, Receipt>,
    counts: CallCounts,
}

#[derive(Debug)]
struct TokenState {
    owner: Address,
    balances: HashMap<Address, U256>,
    total_supply: U256,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counts(&self) -> CallCounts {
        self.ledger.lock().counts
    }

    /// Balance lookup that bypasses the query counter.
    pub fn peek_balance(&self, contract: Address, owner: Address) -> U256 {
        self.ledger
            .lock()
            .tokens
            .get(&contract)
            .map(|token| token.balance(owner))
            .unwrap_or_default()
    }

    pub fn total_supply(&self, contract: Address) -> Option<U256> {
        let ledger = self.ledger.lock();
        ledger.tokens.get(&contract).map(|token| token.total_supply)
    }

    pub fn owner(&self, contract: Address) -> Option<Address> {
        let ledger = self.ledger.lock();
        ledger.tokens.get(&contract).map(|token| token.owner)
    }
}

impl Ledger {
    /// Allocates the sender's next nonce and a unique tx hash for it.
    fn next_tx(&mut self, sender: Address) -> (u64, TxHash) {
        let nonce = self.nonces.entry(sender).or_default();
        let current = *nonce;
        *nonce += 1;
        let mut preimage = sender.to_vec();
        preimage.extend_from_slice(&current.to_be_bytes());
        (current, keccak256(preimage))
    }

    /// Includes a tx in a new block.
    fn include(
        &mut self,
        tx_hash: TxHash,
        gas_used: u64,
        contract_address: Option<Address>,
    ) -> Receipt {
        self.block += 1;
        Receipt {
            tx_hash,
            block_number: Some(self.block),
            gas_used,
            status: true,
            contract_address,
        }
    }
}

impl TokenState {
    fn balance(&self, owner: Address) -> U256 {
        self.balances.get(&owner).copied().unwrap_or_default()
    }

    fn execute(&mut self, sender: Address, call: TokenCall) -> Result<(), Revert> {
        match call {
            TokenCall::Mint { to, amount } => {
                if sender != self.owner {
                    return Err(ITokenErrors::OwnableUnauthorizedAccount(
                        OwnableUnauthorizedAccount { account: sender },
                    )
                    .into());
                }
                if to.is_zero() {
                    return Err(invalid_receiver(to).into());
                }
                let total_supply = self
                    .total_supply
                    .checked_add(amount)
                    .ok_or(Revert::Overflow)?;
                let balance = self.balance(to).checked_add(amount).ok_or(Revert::Overflow)?;
                self.total_supply = total_supply;
                self.balances.insert(to, balance);
            }
            TokenCall::Transfer { to, amount } => {
                if to.is_zero() {
                    return Err(invalid_receiver(to).into());
                }
                self.debit(sender, amount)?;
                *self.balances.entry(to).or_default() += amount;
            }
            TokenCall::Burn { amount } => {
                self.debit(sender, amount)?;
                self.total_supply -= amount;
            }
        }
        Ok(())
    }

    fn debit(&mut self, from: Address, amount: U256) -> Result<(), Revert> {
        let balance = self.balance(from);
        if balance < amount {
            return Err(ITokenErrors::ERC20InsufficientBalance(
                ERC20InsufficientBalance {
                    sender: from,
                    balance,
                    needed: amount,
                },
            )
            .into());
        }
        self.balances.insert(from, balance - amount);
        Ok(())
    }
}

/// Why a call was rolled back.
#[derive(Debug)]
enum Revert {
    Token(ITokenErrors),
    /// Checked arithmetic failed, like a Solidity `Panic(0x11)`.
    Overflow,
}

impl From<ITokenErrors> for Revert {
    fn from(err: ITokenErrors) -> Self {
        Self::Token(err)
    }
}

impl fmt::Display for Revert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(err) => f.write_str(&describe_revert(err)),
            Self::Overflow => f.write_str("arithmetic overflow"),
        }
    }
}

fn invalid_receiver(receiver: Address) -> ITokenErrors {
    ITokenErrors::ERC20InvalidReceiver(ERC20InvalidReceiver { receiver })
}

impl TokenBackend for MemoryBackend {
    async fn deploy(
        &self,
        deployer: &Wallet,
        init_code: Bytes,
    ) -> Result<Receipt, DeploymentError> {
        let mut ledger = self.ledger.lock();
        ledger.counts.deployments += 1;
        if init_code.is_empty() {
            return Err(DeploymentError::EmptyBytecode);
        }

        let owner = deployer.address();
        let (nonce, tx_hash) = ledger.next_tx(owner);
        let address = owner.create(nonce);
        ledger.tokens.insert(
            address,
            TokenState {
                owner,
                balances: HashMap::new(),
                total_supply: U256::ZERO,
            },
        );
        let gas_used = TX_BASE_GAS + CODE_BYTE_GAS * init_code.len() as u64;
        Ok(ledger.include(tx_hash, gas_used, Some(address)))
    }

    async fn submit(
        &self,
        contract: Address,
        signer: &Wallet,
        call: TokenCall,
    ) -> Result<TxHash, TransactionError> {
        let mut ledger = self.ledger.lock();
        ledger.counts.submissions += 1;

        let sender = signer.address();
        let Some(token) = ledger.tokens.get_mut(&contract) else {
            return Err(TransactionError::Rejected(format!(
                "no token contract at {contract}"
            )));
        };
        token
            .execute(sender, call)
            .map_err(|err| TransactionError::Rejected(err.to_string()))?;

        let (_, tx_hash) = ledger.next_tx(sender);
        let receipt = ledger.include(tx_hash, TX_BASE_GAS + CALL_GAS, None);
        ledger.pending.insert(tx_hash, receipt);
        Ok(tx_hash)
    }

    async fn confirm(&self, tx_hash: TxHash) -> Result<Receipt, TransactionError> {
        let mut ledger = self.ledger.lock();
        ledger.counts.confirmations += 1;
        ledger
            .pending
            .remove(&tx_hash)
            .ok_or(TransactionError::UnknownTransaction { tx_hash })
    }

    async fn balance_of(&self, contract: Address, owner: Address) -> Result<U256, QueryError> {
        let mut ledger = self.ledger.lock();
        ledger.counts.queries += 1;
        ledger
            .tokens
            .get(&contract)
            .map(|token| token.balance(owner))
            .ok_or(QueryError::UnknownContract(contract))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn deployed(backend: &MemoryBackend, owner: &Wallet) -> Address {
        let receipt = backend
            .deploy(owner, Bytes::from_static(&[0x00]))
            .await
            .unwrap();
        receipt.contract_address.unwrap()
    }

    #[tokio::test]
    async fn deploy_assigns_create_address() {
        let backend = MemoryBackend::new();
        let owner = Wallet::random();
        let first = deployed(&backend, &owner).await;
        let second = deployed(&backend, &owner).await;
        assert_eq!(first, owner.address().create(0));
        assert_eq!(second, owner.address().create(1));
        assert_eq!(backend.owner(first), Some(owner.address()));
        assert_eq!(backend.counts().deployments, 2);
    }

    #[tokio::test]
    async fn rejects_empty_init_code() {
        let backend = MemoryBackend::new();
        let err = backend
            .deploy(&Wallet::random(), Bytes::new())
            .await
            .unwrap_err();
        assert!(matches!(err, DeploymentError::EmptyBytecode));
    }

    #[tokio::test]
    async fn only_owner_mints() {
        let backend = MemoryBackend::new();
        let owner = Wallet::random();
        let other = Wallet::random();
        let token = deployed(&backend, &owner).await;

        let call = TokenCall::Mint {
            to: other.address(),
            amount: U256::from(5),
        };
        let err = backend.submit(token, &other, call).await.unwrap_err();
        assert!(err.to_string().contains("not the contract owner"));
        assert_eq!(backend.peek_balance(token, other.address()), U256::ZERO);

        let tx_hash = backend.submit(token, &owner, call).await.unwrap();
        let receipt = backend.confirm(tx_hash).await.unwrap();
        assert_eq!(receipt.tx_hash, tx_hash);
        assert_eq!(backend.peek_balance(token, other.address()), U256::from(5));
        assert_eq!(backend.total_supply(token), Some(U256::from(5)));
    }

    #[tokio::test]
    async fn overdraft_is_rejected() {
        let backend = MemoryBackend::new();
        let owner = Wallet::random();
        let token = deployed(&backend, &owner).await;

        let call = TokenCall::Burn {
            amount: U256::from(1),
        };
        let err = backend.submit(token, &owner, call).await.unwrap_err();
        assert!(err.to_string().contains("insufficient balance"));
    }

    #[tokio::test]
    async fn mint_overflow_is_rejected() {
        let backend = MemoryBackend::new();
        let owner = Wallet::random();
        let holder = Wallet::random();
        let token = deployed(&backend, &owner).await;

        let mint = |amount| TokenCall::Mint {
            to: holder.address(),
            amount,
        };
        let tx_hash = backend.submit(token, &owner, mint(U256::MAX)).await.unwrap();
        backend.confirm(tx_hash).await.unwrap();

        let err = backend
            .submit(token, &owner, mint(U256::from(1)))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("overflow"));
        assert_eq!(backend.peek_balance(token, holder.address()), U256::MAX);
        assert_eq!(backend.total_supply(token), Some(U256::MAX));
    }

    #[tokio::test]
    async fn receipts_are_handed_out_once() {
        let backend = MemoryBackend::new();
        let owner = Wallet::random();
        let token = deployed(&backend, &owner).await;
        let call = TokenCall::Mint {
            to: owner.address(),
            amount: U256::from(1),
        };
        let tx_hash = backend.submit(token, &owner, call).await.unwrap();
        backend.confirm(tx_hash).await.unwrap();
        assert!(matches!(
            backend.confirm(tx_hash).await,
            Err(TransactionError::UnknownTransaction { .. })
        ));
    }

    #[tokio::test]
    async fn unknown_contract() {
        let backend = MemoryBackend::new();
        let wallet = Wallet::random();
        let nowhere = Address::repeat_byte(0x42);
        assert!(matches!(
            backend.balance_of(nowhere, wallet.address()).await,
            Err(QueryError::UnknownContract(address)) if address == nowhere
        ));
        let call = TokenCall::Burn { amount: U256::ZERO };
        assert!(backend.submit(nowhere, &wallet, call).await.is_err());
    }
}
