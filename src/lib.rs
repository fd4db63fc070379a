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

//! Thoth Namer - deterministic name-registry contract core.
//!
//! This repository provides:
//! - Deterministic types & canonical encoding (addresses, token uids)
//! - A pure registry state machine (register, ownership, resolution, fees)
//! - Transfer admission rules gating fee payment
//! - A contract binding with atomic per-call commits over a key-value
//!   store (in-memory and sled backends) and deterministic state roots
//!
//! The surrounding contract-execution engine (dispatch, transaction
//! inclusion, the funds ledger) is a host concern; each operation here is
//! one synchronous unit of work that either commits fully or aborts.

/// Core protocol primitives (types, context, registry, state binding).
pub mod core;
