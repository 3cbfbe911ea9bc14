// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts.
//!
//! Both the Hardhat layout (`"bytecode": "0x…"`) and the Foundry layout
//! (`"bytecode": { "object": "0x…" }`) are accepted.

use std::{fs, path::Path};

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt, Specifier},
    json_abi::JsonAbi,
    primitives::Bytes,
};
use serde::Deserialize;

use crate::error::{ArtifactError, DeploymentError};

/// Interface description and creation bytecode of a contract.
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    pub abi: JsonAbi,
    pub bytecode: Bytes,
}

#[derive(Deserialize)]
struct RawArtifact {
    abi: JsonAbi,
    bytecode: RawBytecode,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBytecode {
    Hex(Bytes),
    Object { object: Bytes },
}

impl ContractArtifact {
    pub fn new(abi: JsonAbi, bytecode: impl Into<Bytes>) -> Self {
        Self {
            abi,
            bytecode: bytecode.into(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ArtifactError> {
        let raw: RawArtifact = serde_json::from_str(json)?;
        let bytecode = match raw.bytecode {
            RawBytecode::Hex(bytes) | RawBytecode::Object { object: bytes } => bytes,
        };
        Ok(Self::new(raw.abi, bytecode))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Builds the contract-creation payload: bytecode followed by the ABI-encoded
    /// constructor arguments.
    ///
    /// Arguments are checked against the artifact's constructor. An artifact without a
    /// constructor accepts only an empty argument list.
    pub fn init_code(&self, args: &[DynSolValue]) -> Result<Bytes, DeploymentError> {
        if self.bytecode.is_empty() {
            return Err(DeploymentError::EmptyBytecode);
        }
        let encoded = match self.abi.constructor() {
            Some(constructor) => constructor
                .abi_encode_input(args)
                .map_err(|err| DeploymentError::InvalidConstructor(err.to_string()))?,
            None if args.is_empty() => Vec::new(),
            None => {
                return Err(DeploymentError::InvalidConstructor(format!(
                    "contract has no constructor but {} arguments were given",
                    args.len()
                )))
            }
        };
        let mut code = Vec::with_capacity(self.bytecode.len() + encoded.len());
        code.extend_from_slice(&self.bytecode);
        code.extend(encoded);
        Ok(code.into())
    }

    /// Parses textual constructor arguments using the types of the artifact's constructor.
    pub fn parse_constructor_args(
        &self,
        args: &[String],
    ) -> Result<Vec<DynSolValue>, DeploymentError> {
        let inputs = self
            .abi
            .constructor()
            .map(|constructor| constructor.inputs.as_slice())
            .unwrap_or_default();
        if args.len() != inputs.len() {
            return Err(DeploymentError::InvalidConstructor(format!(
                "mismatch number of constructor arguments (want {}; got {})",
                inputs.len(),
                args.len(),
            )));
        }

        let mut values = Vec::with_capacity(args.len());
        for (arg, param) in args.iter().zip(inputs) {
            let ty = param.resolve().map_err(|err| {
                DeploymentError::InvalidConstructor(format!(
                    "could not resolve constructor arg {param}: {err}"
                ))
            })?;
            let value = ty.coerce_str(arg).map_err(|err| {
                DeploymentError::InvalidConstructor(format!(
                    "could not parse constructor arg {param}: {err}"
                ))
            })?;
            values.push(value);
        }
        Ok(values)
    }
}
