// Copyright (c) 2026 Thoth Namer
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Deterministic core types: identities, amounts, and canonical encoding helpers.

use bincode::Options;
use ring::digest;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Canonical serialization error.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("serialization")]
    Serialize,
    #[error("deserialization")]
    Deserialize,
    #[error("size limit exceeded")]
    TooLarge,
}

/// Canonical bincode options (deterministic).
fn bincode_opts() -> impl Options {
    // Fixint encoding provides a stable integer representation.
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .reject_trailing_bytes()
}

/// Encode with deterministic rules. Requires deterministic container ordering (use BTreeMap/BTreeSet).
pub fn encode_canonical<T: Serialize>(v: &T) -> Result<Vec<u8>, CodecError> {
    bincode_opts()
        .serialize(v)
        .map_err(|_| CodecError::Serialize)
}

/// Decode with a hard size cap.
pub fn decode_canonical_limited<T: DeserializeOwned>(
    bytes: &[u8],
    max: usize,
) -> Result<T, CodecError> {
    if bytes.len() > max {
        return Err(CodecError::TooLarge);
    }
    // Cap inside the deserializer as well, so container length fields cannot
    // request allocations beyond the wire payload bound.
    bincode_opts()
        .with_limit(max as u64)
        .deserialize(bytes)
        .map_err(|_| CodecError::Deserialize)
}

/// Token amount in base units.
pub type Amount = u64;

/// Canonical map type alias.
pub type CanonicalMap<K, V> = BTreeMap<K, V>;

/// Raw address length: version byte + 20-byte key hash + 4-byte checksum.
pub const ADDRESS_LEN: usize = 25;

/// P2PKH version prefix for displayable addresses.
const ADDRESS_VERSION: u8 = 0x28;

const CHECKSUM_LEN: usize = 4;

/// Address parsing errors.
#[derive(Debug, Error)]
pub enum AddressError {
    #[error("base58 decode")]
    Base58,
    #[error("bad length")]
    Length,
    #[error("bad checksum")]
    Checksum,
}

fn sha256(data: &[u8]) -> [u8; 32] {
    let d = digest::digest(&digest::SHA256, data);
    let mut out = [0u8; 32];
    out.copy_from_slice(d.as_ref());
    out
}

/// Double-SHA-256 checksum over the version + key-hash payload.
fn address_checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let d = sha256(&sha256(payload));
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&d[..CHECKSUM_LEN]);
    out
}

/// Caller / owner identity (25 raw bytes, displayable as base58).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// Construct from raw bytes already validated by the host.
    ///
    /// Use [`Address::from_base58`] for untrusted text input.
    pub fn from_bytes(b: [u8; ADDRESS_LEN]) -> Self {
        Self(b)
    }

    /// Build an address from a 20-byte public-key hash, computing the checksum.
    pub fn from_key_hash(key_hash: &[u8; 20]) -> Self {
        let mut b = [0u8; ADDRESS_LEN];
        b[0] = ADDRESS_VERSION;
        b[1..21].copy_from_slice(key_hash);
        let cs = address_checksum(&b[..21]);
        b[21..].copy_from_slice(&cs);
        Self(b)
    }

    /// Parse the displayable base58 form, verifying length and checksum.
    pub fn from_base58(s: &str) -> Result<Self, AddressError> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|_| AddressError::Base58)?;
        if bytes.len() != ADDRESS_LEN {
            return Err(AddressError::Length);
        }
        let mut b = [0u8; ADDRESS_LEN];
        b.copy_from_slice(&bytes);
        if address_checksum(&b[..21]) != b[21..] {
            return Err(AddressError::Checksum);
        }
        Ok(Self(b))
    }

    /// Displayable base58 form.
    pub fn to_base58(&self) -> String {
        bs58::encode(&self.0).into_string()
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_base58())
    }
}

/// Token uid parsing error.
#[derive(Debug, Error)]
pub enum TokenUidError {
    #[error("hex decode")]
    Hex,
}

/// Fungible-token identifier.
///
/// The chain's native token is the single zero byte; custom tokens carry
/// their creation-transaction hash.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TokenUid(Vec<u8>);

impl TokenUid {
    /// Native token uid.
    pub fn native() -> Self {
        Self(vec![0x00])
    }

    /// Construct from raw uid bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Parse a hex uid string.
    pub fn from_hex(s: &str) -> Result<Self, TokenUidError> {
        let bytes = hex::decode(s.trim()).map_err(|_| TokenUidError::Hex)?;
        Ok(Self(bytes))
    }

    /// Hex form.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Raw uid bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Whether this is the native token uid.
    pub fn is_native(&self) -> bool {
        self.0 == [0x00]
    }
}

impl fmt::Debug for TokenUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenUid({})", self.to_hex())
    }
}

/// Instance configuration root for the CLI host shell.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NamerConfig {
    /// Instance settings.
    pub instance: InstanceSettings,
    /// Chain-level parameters.
    #[serde(default)]
    pub chain: ChainSettings,
}

/// Instance settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InstanceSettings {
    /// Human-readable instance name.
    pub name: String,
    /// Data directory (registry store).
    pub data_dir: String,
}

/// Chain-level parameters.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ChainSettings {
    /// Registration token uid in hex. Empty selects the native token.
    #[serde(default)]
    pub registration_token_hex: String,
}

impl ChainSettings {
    /// Resolve the configured registration token.
    pub fn registration_token(&self) -> Result<TokenUid, TokenUidError> {
        if self.registration_token_hex.trim().is_empty() {
            return Ok(TokenUid::native());
        }
        TokenUid::from_hex(&self.registration_token_hex)
    }
}
