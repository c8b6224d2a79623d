//! # landcheck-contracts
//!
//! Shared types for the landcheck land-record verification engine.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate, only data definitions and the error type.

pub mod error;
pub mod finding;
pub mod history;
pub mod record;
pub mod verdict;
