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

//! Per-call context supplied by the host for every contract invocation.

use crate::core::types::{Address, Amount, TokenUid};
use serde::{Deserialize, Serialize};

/// Direction of a value transfer relative to the contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    /// Funds entering the contract balance.
    Deposit,
    /// Funds leaving the contract balance.
    Withdrawal,
}

/// A host-validated value transfer attached to the current call.
///
/// The surrounding transaction has already been balance-checked by the host;
/// the registry only inspects direction, token, and amount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferAction {
    /// Transfer direction.
    pub kind: ActionKind,
    /// Token moved by this action.
    pub token: TokenUid,
    /// Amount moved, in base units.
    pub amount: Amount,
}

impl TransferAction {
    /// Deposit of `amount` of `token`.
    pub fn deposit(token: TokenUid, amount: Amount) -> Self {
        Self {
            kind: ActionKind::Deposit,
            token,
            amount,
        }
    }

    /// Withdrawal of `amount` of `token`.
    pub fn withdrawal(token: TokenUid, amount: Amount) -> Self {
        Self {
            kind: ActionKind::Withdrawal,
            token,
            amount,
        }
    }
}

/// Call context: who calls, what value moves, and when.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CallContext {
    /// Authenticated caller identity.
    pub caller: Address,
    /// Value-transfer actions attached to this call.
    pub actions: Vec<TransferAction>,
    /// Transaction timestamp (seconds). Carried for the host; unused by registry logic.
    pub timestamp: u64,
}

impl CallContext {
    /// Context with an arbitrary action set.
    pub fn new(caller: Address, actions: Vec<TransferAction>, timestamp: u64) -> Self {
        Self {
            caller,
            actions,
            timestamp,
        }
    }

    /// Context carrying no value transfer.
    pub fn plain(caller: Address, timestamp: u64) -> Self {
        Self::new(caller, Vec::new(), timestamp)
    }

    /// Context carrying a single deposit, the common registration shape.
    pub fn with_deposit(caller: Address, token: TokenUid, amount: Amount, timestamp: u64) -> Self {
        Self::new(caller, vec![TransferAction::deposit(token, amount)], timestamp)
    }
}
