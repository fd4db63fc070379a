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

//! Deterministic name-registry state machine.
//!
//! One `NameRegistry` per deployed contract instance. Every mutation checks
//! all of its preconditions before writing any field, so a returned error
//! means the state is untouched. Registered names are never deleted; only a
//! record's owner and resolving addresses may change, and only by the
//! current owner.

use crate::core::context::CallContext;
use crate::core::registry::error::RegistryError;
use crate::core::registry::guard::admit_transfer;
use crate::core::registry::name::validate_name;
use crate::core::types::{Address, Amount, CanonicalMap, TokenUid};
use serde::{Deserialize, Serialize};

/// Longest accepted namespace label, in bytes. Keeps every persisted
/// scalar well under the contract layer's decode cap.
pub const DOMAIN_MAX_LEN: usize = 255;

/// Per-name record. The owner controls both fields; the name resolves to
/// `resolving_address`, which may differ from the owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    /// Identity authorized to mutate this record.
    pub owner_address: Address,
    /// Identity the name currently resolves to.
    pub resolving_address: Address,
}

/// Registry state and its public operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameRegistry {
    /// Namespace label, immutable after initialization.
    domain: String,
    /// Current registration fee.
    fee: Amount,
    /// Sum of fees charged across all successful registrations.
    total_fee: Amount,
    /// Administrator identity.
    dev_address: Address,
    /// Registered names.
    names: CanonicalMap<String, NameRecord>,
}

impl NameRegistry {
    /// Initialize a fresh instance: set the namespace label, the
    /// registration fee, and the caller as administrator.
    pub fn initialize(ctx: &CallContext, domain: &str, fee: Amount) -> Result<Self, RegistryError> {
        if domain.is_empty() || domain.len() > DOMAIN_MAX_LEN {
            return Err(RegistryError::InvalidDomain);
        }
        if fee == 0 {
            return Err(RegistryError::InvalidFee);
        }
        Ok(Self {
            domain: domain.to_string(),
            fee,
            total_fee: 0,
            dev_address: ctx.caller,
            names: CanonicalMap::new(),
        })
    }

    /// Rebuild from persisted fields. Callers must pass fields that were
    /// written by this module; no validation is re-run here.
    pub(crate) fn from_parts(
        domain: String,
        fee: Amount,
        total_fee: Amount,
        dev_address: Address,
        names: CanonicalMap<String, NameRecord>,
    ) -> Self {
        Self {
            domain,
            fee,
            total_fee,
            dev_address,
            names,
        }
    }

    /// Register `name` to the caller, charging the current fee from the
    /// admitted transfer action.
    ///
    /// Any surplus over the fee stays in the contract balance (the host's
    /// ledger); `total_fee` grows by exactly the fee.
    pub fn create_name(
        &mut self,
        ctx: &CallContext,
        name: &str,
        registration_token: &TokenUid,
    ) -> Result<(), RegistryError> {
        if !validate_name(name) {
            return Err(RegistryError::InvalidNameFormat);
        }
        if self.names.contains_key(name) {
            return Err(RegistryError::NameAlreadyExists);
        }
        let action = admit_transfer(ctx, &self.dev_address, registration_token)?;
        if action.amount < self.fee {
            return Err(RegistryError::InsufficientBalance);
        }

        self.names.insert(
            name.to_string(),
            NameRecord {
                owner_address: ctx.caller,
                resolving_address: ctx.caller,
            },
        );
        self.total_fee = self.total_fee.saturating_add(self.fee);
        Ok(())
    }

    /// Change the registration fee. Administrator only.
    pub fn change_fee(&mut self, ctx: &CallContext, fee: Amount) -> Result<(), RegistryError> {
        if ctx.caller != self.dev_address {
            return Err(RegistryError::NotAuthorized);
        }
        if fee == 0 {
            return Err(RegistryError::InvalidFee);
        }
        self.fee = fee;
        Ok(())
    }

    /// Hand administrator rights to `new_dev_address`. Administrator only.
    pub fn change_dev_address(
        &mut self,
        ctx: &CallContext,
        new_dev_address: Address,
    ) -> Result<(), RegistryError> {
        if ctx.caller != self.dev_address {
            return Err(RegistryError::NotAuthorized);
        }
        self.dev_address = new_dev_address;
        Ok(())
    }

    /// Transfer ownership of `name` to the supplied new owner, leaving the
    /// resolving address untouched. Current owner only.
    pub fn change_name_owner(
        &mut self,
        ctx: &CallContext,
        name: &str,
        new_owner_address: Address,
    ) -> Result<(), RegistryError> {
        let record = self
            .names
            .get_mut(name)
            .ok_or(RegistryError::NameNotFound)?;
        if record.owner_address != ctx.caller {
            return Err(RegistryError::NotAuthorized);
        }
        record.owner_address = new_owner_address;
        Ok(())
    }

    /// Point `name` at a new resolving address, leaving ownership
    /// untouched. Current owner only.
    pub fn change_resolving_address(
        &mut self,
        ctx: &CallContext,
        name: &str,
        new_resolving_address: Address,
    ) -> Result<(), RegistryError> {
        let record = self
            .names
            .get_mut(name)
            .ok_or(RegistryError::NameNotFound)?;
        if record.owner_address != ctx.caller {
            return Err(RegistryError::NotAuthorized);
        }
        record.resolving_address = new_resolving_address;
        Ok(())
    }

    /// Resolving address of `name`, in displayable base58 form.
    pub fn resolve_name(&self, name: &str) -> Result<String, RegistryError> {
        let record = self.names.get(name).ok_or(RegistryError::NameNotFound)?;
        Ok(record.resolving_address.to_base58())
    }

    /// Owner identity of `name`.
    pub fn get_name_owner(&self, name: &str) -> Result<Address, RegistryError> {
        let record = self.names.get(name).ok_or(RegistryError::NameNotFound)?;
        Ok(record.owner_address)
    }

    /// Whether `name` is registered.
    pub fn check_name_existence(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Administrator identity, in displayable base58 form.
    pub fn get_dev_address(&self) -> String {
        self.dev_address.to_base58()
    }

    /// Namespace label.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Current registration fee.
    pub fn fee(&self) -> Amount {
        self.fee
    }

    /// Accumulated fees.
    pub fn total_fee(&self) -> Amount {
        self.total_fee
    }

    /// Administrator identity, raw.
    pub fn dev_address(&self) -> &Address {
        &self.dev_address
    }

    /// Stored record for `name`, if registered.
    pub fn record(&self, name: &str) -> Option<&NameRecord> {
        self.names.get(name)
    }

    /// Number of registered names.
    pub fn name_count(&self) -> usize {
        self.names.len()
    }
}
