#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Core: deterministic types, call context, registry logic, state binding.

pub mod context;
pub mod contract;
pub mod registry;
pub mod state;
pub mod types;
