#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Name registry: validator, transfer admission, and the state machine.

pub mod error;
pub mod guard;
pub mod name;
pub mod state;
