// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::{json_abi::JsonAbi, primitives::U256};
use eyre::Result;
use token_tools::{
    ops::{
        burn_tokens, create_wallet, deploy_token, mint_tokens, token_balance,
        transfer_all_tokens, transfer_tokens,
    },
    ContractArtifact, Error, MemoryBackend, TokenContract, TransactionError, Wallet,
};

fn artifact() -> ContractArtifact {
    // Returns a single STOP byte as runtime code.
    ContractArtifact::new(
        JsonAbi::default(),
        vec![0x60, 0x01, 0x60, 0x0c, 0x60, 0x00, 0x39, 0x60, 0x01, 0x60, 0x00, 0xf3, 0x00],
    )
}

async fn setup() -> Result<(MemoryBackend, Wallet, TokenContract<MemoryBackend>)> {
    let backend = MemoryBackend::new();
    let owner = create_wallet();
    let token = deploy_token(&backend, &owner, &artifact(), &[]).await?;
    Ok((backend, owner, token))
}

#[test]
fn wallets_are_unique() {
    let a = create_wallet();
    let b = create_wallet();
    assert!(!a.address().is_zero());
    assert_ne!(a.address(), b.address());
}

#[tokio::test]
async fn mint_transfer_burn_scenario() -> Result<()> {
    let (_, owner, token) = setup().await?;
    let a = create_wallet();
    let b = create_wallet();

    mint_tokens(&token, &owner, a.address(), U256::from(100)).await?;
    transfer_tokens(&token, &a, b.address(), U256::from(40)).await?;
    burn_tokens(&token, &a, U256::from(30)).await?;

    assert_eq!(token_balance(&token, a.address()).await?, U256::from(30));
    assert_eq!(token_balance(&token, b.address()).await?, U256::from(40));
    Ok(())
}

#[tokio::test]
async fn each_call_submits_once_and_waits_once() -> Result<()> {
    let (backend, owner, token) = setup().await?;
    let holder = create_wallet();

    let before = backend.counts();
    mint_tokens(&token, &owner, holder.address(), U256::from(10)).await?;
    let after = backend.counts();
    assert_eq!(after.submissions - before.submissions, 1);
    assert_eq!(after.confirmations - before.confirmations, 1);

    let before = after;
    transfer_tokens(&token, &holder, owner.address(), U256::from(3)).await?;
    let after = backend.counts();
    assert_eq!(after.submissions - before.submissions, 1);
    assert_eq!(after.confirmations - before.confirmations, 1);

    let before = after;
    burn_tokens(&token, &holder, U256::from(2)).await?;
    let after = backend.counts();
    assert_eq!(after.submissions - before.submissions, 1);
    assert_eq!(after.confirmations - before.confirmations, 1);
    assert_eq!(after.queries, before.queries);
    Ok(())
}

#[tokio::test]
async fn transfer_all_with_zero_balance_sends_nothing() -> Result<()> {
    let (backend, _, token) = setup().await?;
    let empty = create_wallet();
    let to = create_wallet();

    let before = backend.counts();
    let receipt = transfer_all_tokens(&token, &empty, to.address()).await?;
    let after = backend.counts();

    assert!(receipt.is_none());
    assert_eq!(after.queries, before.queries + 1);
    assert_eq!(after.submissions, before.submissions);
    assert_eq!(after.confirmations, before.confirmations);
    Ok(())
}

#[tokio::test]
async fn transfer_all_moves_the_whole_balance() -> Result<()> {
    let (backend, owner, token) = setup().await?;
    let from = create_wallet();
    let to = create_wallet();
    let balance = U256::from(1_234_567u64);
    mint_tokens(&token, &owner, from.address(), balance).await?;

    let before = backend.counts();
    let receipt = transfer_all_tokens(&token, &from, to.address()).await?;
    assert!(receipt.is_some());
    assert_eq!(backend.counts().submissions, before.submissions + 1);

    assert_eq!(backend.peek_balance(token.address(), from.address()), U256::ZERO);
    assert_eq!(backend.peek_balance(token.address(), to.address()), balance);
    Ok(())
}

#[tokio::test]
async fn non_owner_cannot_mint() -> Result<()> {
    let (backend, _, token) = setup().await?;
    let intruder = create_wallet();

    let err = mint_tokens(&token, &intruder, intruder.address(), U256::from(1))
        .await
        .unwrap_err();
    assert!(matches!(err, TransactionError::Rejected(_)));
    assert_eq!(backend.total_supply(token.address()), Some(U256::ZERO));
    Ok(())
}

#[tokio::test]
async fn overdrawn_transfer_is_rejected() -> Result<()> {
    let (_, owner, token) = setup().await?;
    let from = create_wallet();
    mint_tokens(&token, &owner, from.address(), U256::from(5)).await?;

    let err = transfer_tokens(&token, &from, owner.address(), U256::from(6))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("insufficient balance"));
    assert_eq!(token_balance(&token, from.address()).await?, U256::from(5));
    Ok(())
}

#[tokio::test]
async fn transfer_all_on_unknown_contract_is_a_query_error() -> Result<()> {
    let backend = MemoryBackend::new();
    let token = TokenContract::at(create_wallet().address(), backend.clone());
    let from = create_wallet();

    let err = transfer_all_tokens(&token, &from, create_wallet().address())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Query(_)));
    assert_eq!(backend.counts().submissions, 0);
    Ok(())
}

#[tokio::test]
async fn handle_is_reusable_across_clones() -> Result<()> {
    let (backend, owner, token) = setup().await?;
    let copy = token.clone();
    let holder = create_wallet();

    mint_tokens(&copy, &owner, holder.address(), U256::from(7)).await?;
    assert_eq!(
        backend.peek_balance(token.address(), holder.address()),
        U256::from(7)
    );
    Ok(())
}

#[tokio::test]
async fn operations_run_on_spawned_tasks() -> Result<()> {
    let (backend, owner, token) = setup().await?;
    let holder = create_wallet();
    let to = holder.address();

    let receipt = tokio::spawn(async move {
        mint_tokens(&token, &owner, to, U256::from(9)).await
    })
    .await??;
    assert!(receipt.status);
    assert!(receipt.block_number.is_some());
    assert!(receipt.contract_address.is_none());
    assert_eq!(backend.counts().confirmations, 1);
    Ok(())
}

#[tokio::test]
async fn foundry_artifact_deploys() -> Result<()> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/token.json");
    let artifact = ContractArtifact::from_path(path)?;
    assert!(artifact.abi.constructor().is_none());
    assert!(artifact.abi.function("mint").is_some());

    let backend = MemoryBackend::new();
    let owner = create_wallet();
    let token = deploy_token(&backend, &owner, &artifact, &[]).await?;
    assert_eq!(backend.owner(token.address()), Some(owner.address()));
    Ok(())
}
