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

//! Sled-backed registry store with transactional atomic commits.

use crate::core::state::store::{KvOp, StateStore, StoreError};
use sled::transaction::ConflictableTransactionError;

/// Durable store over a sled database directory.
#[derive(Clone)]
pub struct PersistentStore {
    db: sled::Db,
}

impl PersistentStore {
    /// Open the sled database at `path` (a directory).
    pub fn open(path: &str) -> Result<Self, StoreError> {
        let db = sled::open(path).map_err(|_| StoreError::DbOpen)?;
        Ok(Self { db })
    }
}

impl StateStore for PersistentStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        let v = self.db.get(key).map_err(|_| StoreError::DbIo)?;
        Ok(v.map(|iv| iv.to_vec()))
    }

    fn commit_atomic(&self, ops: Vec<KvOp>) -> Result<(), StoreError> {
        let res = self.db.transaction(|t| {
            for op in ops.iter() {
                match op {
                    KvOp::Put { key, value } => {
                        t.insert(key.as_slice(), value.as_slice())
                            .map_err(|_| ConflictableTransactionError::Abort(StoreError::DbIo))?;
                    }
                    KvOp::Del { key } => {
                        t.remove(key.as_slice())
                            .map_err(|_| ConflictableTransactionError::Abort(StoreError::DbIo))?;
                    }
                }
            }
            Ok(())
        });

        match res {
            Ok(()) => Ok(()),
            Err(sled::transaction::TransactionError::Abort(e)) => Err(e),
            Err(sled::transaction::TransactionError::Storage(_)) => Err(StoreError::DbIo),
        }
    }

    fn pairs_sorted(&self) -> Result<Vec<(Vec<u8>, Vec<u8>)>, StoreError> {
        let mut pairs = Vec::new();
        for item in self.db.iter() {
            let (k, v) = item.map_err(|_| StoreError::DbIo)?;
            pairs.push((k.to_vec(), v.to_vec()));
        }
        // sled iterates in key order already; keep the sort as the trait's
        // stated contract rather than a backend detail.
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(pairs)
    }

    fn scan_prefix(&self, prefix: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>, StoreError> {
        let mut pairs = Vec::new();
        for item in self.db.scan_prefix(prefix) {
            let (k, v) = item.map_err(|_| StoreError::DbIo)?;
            pairs.push((k.to_vec(), v.to_vec()));
        }
        Ok(pairs)
    }
}
