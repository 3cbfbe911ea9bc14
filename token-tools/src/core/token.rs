// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The ERC20 token interface this crate talks to.

use alloy::{
    primitives::{Address, Bytes, U256},
    sol,
    sol_types::SolCall,
};

sol! {
    #[sol(rpc, all_derives)]
    interface IToken {
        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
        function balanceOf(address owner) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
        function mint(address to, uint256 amount) external;
        function burn(uint256 amount) external;

        error InsufficientBalance(address from, uint256 have, uint256 want);
        error ERC20InsufficientBalance(address sender, uint256 balance, uint256 needed);
        error ERC20InvalidReceiver(address receiver);
        error OwnableUnauthorizedAccount(address account);
        error AccessControlUnauthorizedAccount(address account, bytes32 neededRole);
    }
}

/// A state-changing token call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCall {
    Mint { to: Address, amount: U256 },
    Transfer { to: Address, amount: U256 },
    Burn { amount: U256 },
}

impl TokenCall {
    /// ABI-encoded calldata for this call.
    pub fn calldata(&self) -> Bytes {
        match *self {
            Self::Mint { to, amount } => IToken::mintCall { to, amount }.abi_encode(),
            Self::Transfer { to, amount } => IToken::transferCall { to, amount }.abi_encode(),
            Self::Burn { amount } => IToken::burnCall { amount }.abi_encode(),
        }
        .into()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Mint { .. } => "mint",
            Self::Transfer { .. } => "transfer",
            Self::Burn { .. } => "burn",
        }
    }
}

/// Human-readable description of a decoded token revert.
pub fn describe_revert(err: &IToken::ITokenErrors) -> String {
    use IToken::ITokenErrors as E;
    match err {
        E::InsufficientBalance(e) => format!(
            "insufficient balance for {}: have {}, want {}",
            e.from, e.have, e.want
        ),
        E::ERC20InsufficientBalance(e) => format!(
            "insufficient balance for {}: have {}, want {}",
            e.sender, e.balance, e.needed
        ),
        E::ERC20InvalidReceiver(e) => format!("invalid receiver {}", e.receiver),
        E::OwnableUnauthorizedAccount(e) => format!("{} is not the contract owner", e.account),
        E::AccessControlUnauthorizedAccount(e) => {
            format!("{} is missing role {}", e.account, e.neededRole)
        }
    }
}

/// Read-only token metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: U256,
}

#[cfg(test)]
mod tests {
    use alloy::{
        primitives::{address, hex},
        sol_types::SolInterface,
    };

    use super::*;

    const TO: Address = address!("0x70997970C51812dc3A010C7d01b50e0d17dc79C8");

    #[test]
    fn encodes_selectors() {
        let mint = TokenCall::Mint {
            to: TO,
            amount: U256::from(100),
        };
        assert_eq!(mint.calldata()[..4], hex!("40c10f19"));
        assert_eq!(mint.calldata().len(), 4 + 2 * 32);

        let transfer = TokenCall::Transfer {
            to: TO,
            amount: U256::from(40),
        };
        assert_eq!(transfer.calldata()[..4], hex!("a9059cbb"));

        let burn = TokenCall::Burn {
            amount: U256::from(30),
        };
        assert_eq!(burn.calldata()[..4], hex!("42966c68"));
        assert_eq!(burn.calldata().len(), 4 + 32);
        assert_eq!(burn.name(), "burn");
    }

    #[test]
    fn describes_owner_revert() {
        let err = IToken::ITokenErrors::OwnableUnauthorizedAccount(
            IToken::OwnableUnauthorizedAccount { account: TO },
        );
        let data = err.abi_encode();
        let decoded = IToken::ITokenErrors::abi_decode(&data).unwrap();
        assert!(describe_revert(&decoded).contains("not the contract owner"));
    }
}
