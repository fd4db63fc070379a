#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Registry store boundary, backends, and state commitments.

pub mod merkle;
pub mod persistent;
pub mod store;
