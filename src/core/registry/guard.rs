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

//! Transfer admission: which attached value transfer may pay for a call.

use crate::core::context::{ActionKind, CallContext, TransferAction};
use crate::core::registry::error::RegistryError;
use crate::core::types::{Address, TokenUid};

/// Admit the single transfer action attached to `ctx`.
///
/// Rules, in order:
/// - exactly one action must be attached (zero fails the same way);
/// - a withdrawal is admitted only when the caller is the administrator;
/// - the action must carry the designated registration token.
///
/// The admitted action is returned unchanged.
pub fn admit_transfer<'a>(
    ctx: &'a CallContext,
    dev_address: &Address,
    registration_token: &TokenUid,
) -> Result<&'a TransferAction, RegistryError> {
    if ctx.actions.len() != 1 {
        return Err(RegistryError::TooManyActions);
    }
    let action = &ctx.actions[0];
    if action.kind == ActionKind::Withdrawal && ctx.caller != *dev_address {
        return Err(RegistryError::WithdrawalNotAllowed);
    }
    if action.token != *registration_token {
        return Err(RegistryError::InvalidToken);
    }
    Ok(action)
}
