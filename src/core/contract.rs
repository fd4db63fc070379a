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

//! Contract instance: binds the pure registry state machine to a store.
//!
//! Every public operation runs load -> execute -> commit. The pure state
//! machine checks all preconditions before touching its in-memory copy, and
//! only the fields an operation changed are written back, in one atomic
//! batch. A returned error therefore commits nothing.

use crate::core::context::CallContext;
use crate::core::registry::error::RegistryError;
use crate::core::registry::state::{NameRecord, NameRegistry};
use crate::core::state::merkle::Digest32;
use crate::core::state::store::{KvOp, StateStore, StoreError};
use crate::core::types::{
    decode_canonical_limited, encode_canonical, Address, Amount, CanonicalMap, CodecError,
    TokenUid,
};
use tracing::info;

/// Persisted field keys.
const KEY_DOMAIN: &[u8] = b"domain";
const KEY_FEE: &[u8] = b"fee";
const KEY_TOTAL_FEE: &[u8] = b"total_fee";
const KEY_DEV_ADDRESS: &[u8] = b"dev_address";
const NAME_PREFIX: &[u8] = b"names/";

/// Decode cap for any single persisted value. Records and scalars are tens
/// of bytes; the cap only has to bound a corrupted store read.
const MAX_VALUE_LEN: usize = 1024;

/// Contract-layer errors: lifecycle violations plus wrapped lower layers.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// `initialize` called against a non-empty store.
    #[error("already initialized")]
    AlreadyInitialized,
    /// A non-initialize operation called against an empty store.
    #[error("not initialized")]
    NotInitialized,
    /// Registry precondition violation.
    #[error("registry: {0}")]
    Registry(#[from] RegistryError),
    /// Store backend failure.
    #[error("store: {0}")]
    Store(#[from] StoreError),
    /// Persisted value failed to decode.
    #[error("codec: {0}")]
    Codec(#[from] CodecError),
}

fn name_key(name: &str) -> Vec<u8> {
    let mut key = Vec::with_capacity(NAME_PREFIX.len() + name.len());
    key.extend_from_slice(NAME_PREFIX);
    key.extend_from_slice(name.as_bytes());
    key
}

fn put<T: serde::Serialize>(key: &[u8], value: &T) -> Result<KvOp, ContractError> {
    Ok(KvOp::Put {
        key: key.to_vec(),
        value: encode_canonical(value)?,
    })
}

/// One deployed registry instance over a store.
pub struct NamerContract<S: StateStore> {
    store: S,
    registration_token: TokenUid,
}

impl<S: StateStore> NamerContract<S> {
    /// Bind a contract instance to `store`, paying fees in
    /// `registration_token`.
    pub fn new(store: S, registration_token: TokenUid) -> Self {
        Self {
            store,
            registration_token,
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Designated registration token.
    pub fn registration_token(&self) -> &TokenUid {
        &self.registration_token
    }

    /// Commitment root over the instance's persisted state.
    pub fn state_root(&self) -> Result<Digest32, ContractError> {
        Ok(self.store.state_root()?)
    }

    fn is_initialized(&self) -> Result<bool, ContractError> {
        Ok(self.store.get(KEY_DOMAIN)?.is_some())
    }

    fn get_required<T: serde::de::DeserializeOwned>(&self, key: &[u8]) -> Result<T, ContractError> {
        let bytes = self
            .store
            .get(key)?
            .ok_or(ContractError::NotInitialized)?;
        Ok(decode_canonical_limited(&bytes, MAX_VALUE_LEN)?)
    }

    /// Load the full registry state. Fails `NotInitialized` on an empty
    /// store.
    fn load(&self) -> Result<NameRegistry, ContractError> {
        let domain: String = self.get_required(KEY_DOMAIN)?;
        let fee: Amount = self.get_required(KEY_FEE)?;
        let total_fee: Amount = self.get_required(KEY_TOTAL_FEE)?;
        let dev_address: Address = self.get_required(KEY_DEV_ADDRESS)?;

        let mut names = CanonicalMap::new();
        for (key, value) in self.store.scan_prefix(NAME_PREFIX)? {
            let name = String::from_utf8(key[NAME_PREFIX.len()..].to_vec())
                .map_err(|_| CodecError::Deserialize)?;
            let record: NameRecord = decode_canonical_limited(&value, MAX_VALUE_LEN)?;
            names.insert(name, record);
        }

        Ok(NameRegistry::from_parts(
            domain,
            fee,
            total_fee,
            dev_address,
            names,
        ))
    }

    /// Initialize this instance. Fails `AlreadyInitialized` if any prior
    /// initialization committed.
    pub fn initialize(
        &self,
        ctx: &CallContext,
        domain: &str,
        fee: Amount,
    ) -> Result<(), ContractError> {
        if self.is_initialized()? {
            return Err(ContractError::AlreadyInitialized);
        }
        let registry = NameRegistry::initialize(ctx, domain, fee)?;
        self.store.commit_atomic(vec![
            put(KEY_DOMAIN, &registry.domain().to_string())?,
            put(KEY_FEE, &registry.fee())?,
            put(KEY_TOTAL_FEE, &registry.total_fee())?,
            put(KEY_DEV_ADDRESS, registry.dev_address())?,
        ])?;
        info!(domain, fee, dev = %ctx.caller, "registry initialized");
        Ok(())
    }

    /// Register `name` to the caller, charging the current fee.
    pub fn create_name(&self, ctx: &CallContext, name: &str) -> Result<(), ContractError> {
        let mut registry = self.load()?;
        registry.create_name(ctx, name, &self.registration_token)?;
        let record = registry
            .record(name)
            .ok_or(RegistryError::NameNotFound)?;
        self.store.commit_atomic(vec![
            put(&name_key(name), record)?,
            put(KEY_TOTAL_FEE, &registry.total_fee())?,
        ])?;
        info!(name, owner = %ctx.caller, total_fee = registry.total_fee(), "name registered");
        Ok(())
    }

    /// Change the registration fee. Administrator only.
    pub fn change_fee(&self, ctx: &CallContext, fee: Amount) -> Result<(), ContractError> {
        let mut registry = self.load()?;
        registry.change_fee(ctx, fee)?;
        self.store.commit_atomic(vec![put(KEY_FEE, &fee)?])?;
        info!(fee, "fee changed");
        Ok(())
    }

    /// Hand administrator rights over. Administrator only.
    pub fn change_dev_address(
        &self,
        ctx: &CallContext,
        new_dev_address: Address,
    ) -> Result<(), ContractError> {
        let mut registry = self.load()?;
        registry.change_dev_address(ctx, new_dev_address)?;
        self.store
            .commit_atomic(vec![put(KEY_DEV_ADDRESS, &new_dev_address)?])?;
        info!(dev = %new_dev_address, "dev address changed");
        Ok(())
    }

    /// Transfer ownership of `name`. Current owner only.
    pub fn change_name_owner(
        &self,
        ctx: &CallContext,
        name: &str,
        new_owner_address: Address,
    ) -> Result<(), ContractError> {
        let mut registry = self.load()?;
        registry.change_name_owner(ctx, name, new_owner_address)?;
        let record = registry
            .record(name)
            .ok_or(RegistryError::NameNotFound)?;
        self.store
            .commit_atomic(vec![put(&name_key(name), record)?])?;
        info!(name, owner = %new_owner_address, "name owner changed");
        Ok(())
    }

    /// Point `name` at a new resolving address. Current owner only.
    pub fn change_resolving_address(
        &self,
        ctx: &CallContext,
        name: &str,
        new_resolving_address: Address,
    ) -> Result<(), ContractError> {
        let mut registry = self.load()?;
        registry.change_resolving_address(ctx, name, new_resolving_address)?;
        let record = registry
            .record(name)
            .ok_or(RegistryError::NameNotFound)?;
        self.store
            .commit_atomic(vec![put(&name_key(name), record)?])?;
        info!(name, resolving = %new_resolving_address, "resolving address changed");
        Ok(())
    }

    /// Resolving address of `name`, displayable base58 form.
    pub fn resolve_name(&self, name: &str) -> Result<String, ContractError> {
        Ok(self.load()?.resolve_name(name)?)
    }

    /// Owner identity of `name`.
    pub fn get_name_owner(&self, name: &str) -> Result<Address, ContractError> {
        Ok(self.load()?.get_name_owner(name)?)
    }

    /// Whether `name` is registered.
    pub fn check_name_existence(&self, name: &str) -> Result<bool, ContractError> {
        if !self.is_initialized()? {
            return Err(ContractError::NotInitialized);
        }
        Ok(self.store.get(&name_key(name))?.is_some())
    }

    /// Administrator identity, displayable base58 form.
    pub fn get_dev_address(&self) -> Result<String, ContractError> {
        if !self.is_initialized()? {
            return Err(ContractError::NotInitialized);
        }
        let dev: Address = self.get_required(KEY_DEV_ADDRESS)?;
        Ok(dev.to_base58())
    }

    /// Snapshot of the scalar fields, for the CLI shell.
    pub fn info(&self) -> Result<(String, Amount, Amount, Address), ContractError> {
        let registry = self.load()?;
        Ok((
            registry.domain().to_string(),
            registry.fee(),
            registry.total_fee(),
            *registry.dev_address(),
        ))
    }
}
