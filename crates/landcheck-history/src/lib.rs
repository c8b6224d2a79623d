//! # landcheck-history
//!
//! Document history for hosts of the landcheck engine.
//!
//! ## Overview
//!
//! Every verified upload becomes a `DocumentHistoryEntry`: a sequential id,
//! the file name, the upload date, the resulting status and, when the bytes
//! were available, a SHA-256 fingerprint of the file. The engine itself
//! never touches history.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use landcheck_history::{fingerprint, InMemoryHistory};
//! use landcheck_core::traits::HistoryStore;
//!
//! let history = InMemoryHistory::new();
//! history.record_report(&report, Some(fingerprint(&bytes)))?;
//! for entry in history.entries()? { /* newest first */ }
//! ```

pub mod fingerprint;
pub mod memory;

pub use fingerprint::fingerprint;
pub use memory::InMemoryHistory;

// ── Tests ─────────────────────────────────────────────────────────────────────
