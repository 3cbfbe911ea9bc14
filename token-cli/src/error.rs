// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fmt, process::ExitCode};

use token_tools::core::network::NetworkError;

pub type TokenCliResult = Result<(), TokenCliError>;

#[derive(Debug)]
pub struct TokenCliError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl TokenCliError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for TokenCliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

/// Errors that all map to a plain failure exit code.
macro_rules! failure_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for TokenCliError {
                fn from(err: $ty) -> Self {
                    Self {
                        error: err.into(),
                        exit_code: ExitCode::FAILURE,
                    }
                }
            }
        )*
    };
}

failure_from!(
    std::io::Error,
    token_tools::Error,
    token_tools::ArtifactError,
    token_tools::DeploymentError,
    token_tools::QueryError,
    token_tools::TransactionError,
    token_tools::WalletError,
    NetworkError,
);

impl From<eyre::Error> for TokenCliError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}
