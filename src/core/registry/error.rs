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

//! Registry failure kinds.
//!
//! Every precondition violation maps to exactly one kind and aborts the
//! whole call; nothing is swallowed or downgraded. The host surfaces the
//! kind as the transaction rejection reason.

use thiserror::Error;

/// Registry errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Namespace label empty or over-long at initialization.
    #[error("domain must be 1..=255 bytes")]
    InvalidDomain,
    /// Fee not strictly positive.
    #[error("fee must be positive")]
    InvalidFee,
    /// Candidate name rejected by the lexical validator.
    #[error("invalid name format")]
    InvalidNameFormat,
    /// Name already registered.
    #[error("name already exists")]
    NameAlreadyExists,
    /// Name not registered.
    #[error("name not found")]
    NameNotFound,
    /// Caller lacks the required authority.
    #[error("not authorized")]
    NotAuthorized,
    /// Admitted transfer amount below the registration fee.
    #[error("amount below registration fee")]
    InsufficientBalance,
    /// Not exactly one transfer action attached to the call.
    #[error("exactly one action supported")]
    TooManyActions,
    /// Withdrawal attempted by a caller other than the administrator.
    #[error("only dev may withdraw")]
    WithdrawalNotAllowed,
    /// Reserved kind; no operation raises it today.
    #[error("deposit not allowed")]
    DepositNotAllowed,
    /// Transfer carries a token other than the registration token.
    #[error("wrong payment token")]
    InvalidToken,
}
