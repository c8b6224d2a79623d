//! # landcheck-fixtures
//!
//! Record sources for demos and tests while no real extractor exists:
//! randomly fabricated records, four canned scenarios with known outcomes,
//! and a seeded upload history.

pub mod mock_data;
pub mod scenarios;

pub use mock_data::{mock_history, random_record};
pub use scenarios::Scenario;

// ── Tests ─────────────────────────────────────────────────────────────────────
