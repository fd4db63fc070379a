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

//! Registry store boundary: get / scan / atomic-commit semantics over a
//! key-value backend, plus a deterministic commitment over the full
//! contents.

use crate::core::state::merkle::{
    commitment_root, inclusion_proof, verify_inclusion, Digest32, InclusionProof,
};
use std::collections::BTreeMap;
use std::sync::Mutex;
use thiserror::Error;

/// Store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend failed to open.
    #[error("db open")]
    DbOpen,
    /// Backend read/write failure.
    #[error("db io")]
    DbIo,
    /// Transactional commit conflict.
    #[error("tx conflict")]
    TxConflict,
}

/// One write in an atomic batch.
#[derive(Clone, Debug)]
pub enum KvOp {
    /// Put key/value.
    Put {
        /// Field key.
        key: Vec<u8>,
        /// Encoded value.
        value: Vec<u8>,
    },
    /// Delete key.
    Del {
        /// Field key.
        key: Vec<u8>,
    },
}

/// Persistent key-value boundary the registry binds to.
///
/// The host engine may supply its own trie-backed implementation; this
/// crate ships [`MemoryStore`] and the sled-backed
/// [`PersistentStore`](crate::core::state::persistent::PersistentStore).
pub trait StateStore {
    /// Read one field.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;

    /// Apply a batch of writes atomically: either all land or none do.
    fn commit_atomic(&self, ops: Vec<KvOp>) -> Result<(), StoreError>;

    /// All (key, value) pairs, sorted by key.
    fn pairs_sorted(&self) -> Result<Vec<(Vec<u8>, Vec<u8>)>, StoreError>;

    /// All pairs whose key starts with `prefix`, sorted by key.
    fn scan_prefix(&self, prefix: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>, StoreError> {
        let mut pairs = self.pairs_sorted()?;
        pairs.retain(|(k, _)| k.starts_with(prefix));
        Ok(pairs)
    }

    /// Deterministic commitment root over the full store contents.
    fn state_root(&self) -> Result<Digest32, StoreError> {
        Ok(commitment_root(&self.pairs_sorted()?))
    }

    /// Inclusion proof for `key`, if present.
    fn prove_key(&self, key: &[u8]) -> Result<Option<(Digest32, InclusionProof)>, StoreError> {
        let pairs = self.pairs_sorted()?;
        let Ok(idx) = pairs.binary_search_by(|p| p.0.as_slice().cmp(key)) else {
            return Ok(None);
        };
        let root = commitment_root(&pairs);
        Ok(inclusion_proof(&pairs, idx).map(|p| (root, p)))
    }
}

/// Check an inclusion proof against a commitment root.
pub fn verify_proof(root: Digest32, proof: &InclusionProof) -> bool {
    verify_inclusion(root, proof)
}

/// In-memory store for tests and embedded hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: Mutex<BTreeMap<Vec<u8>, Vec<u8>>>,
}

impl MemoryStore {
    /// Fresh empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        let map = self.map.lock().map_err(|_| StoreError::DbIo)?;
        Ok(map.get(key).cloned())
    }

    fn commit_atomic(&self, ops: Vec<KvOp>) -> Result<(), StoreError> {
        let mut map = self.map.lock().map_err(|_| StoreError::DbIo)?;
        for op in ops {
            match op {
                KvOp::Put { key, value } => {
                    map.insert(key, value);
                }
                KvOp::Del { key } => {
                    map.remove(&key);
                }
            }
        }
        Ok(())
    }

    fn pairs_sorted(&self) -> Result<Vec<(Vec<u8>, Vec<u8>)>, StoreError> {
        let map = self.map.lock().map_err(|_| StoreError::DbIo)?;
        Ok(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }
}
