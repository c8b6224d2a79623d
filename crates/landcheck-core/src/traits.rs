//! Seam traits for the landcheck verification pipeline.
//!
//! - `RuleSet`     : turns a record into findings and findings into advice
//! - `Scorer`      : places a confidence score inside a status band
//! - `HistoryStore`: append-only list of past uploads, owned by the host
//!
//! The `Engine` only talks to rules and scoring. History belongs to the
//! hosting surface and is declared here so every host shares one contract.

use chrono::{DateTime, Utc};

use landcheck_contracts::{
    error::LandcheckResult,
    finding::{Finding, FindingTally},
    history::DocumentHistoryEntry,
    record::DocumentRecord,
    verdict::VerificationStatus,
};

/// The validation rules applied to a land record.
///
/// Implementations must be pure: the same record and `now` always yield the
/// same findings, and no call may block or touch shared state.
pub trait RuleSet: Send + Sync {
    /// Run every field-group validator and return the concatenated findings
    /// in field-group order.
    fn evaluate(&self, record: &DocumentRecord, now: DateTime<Utc>) -> Vec<Finding>;

    /// Map a status and the complete (untruncated) finding set to advisory
    /// strings, most general first.
    fn recommend(&self, status: VerificationStatus, findings: &[Finding]) -> Vec<String>;
}

/// Produces the confidence score for a classified record.
///
/// The returned value must fall inside `scoring::score_band(status)`.
pub trait Scorer: Send + Sync {
    fn score(&self, status: VerificationStatus, tally: &FindingTally) -> u8;
}

/// Append-only record of documents the host has verified.
pub trait HistoryStore: Send + Sync {
    /// Append a new entry and return it with its assigned id.
    fn record(
        &self,
        name: &str,
        status: VerificationStatus,
        uploaded_at: DateTime<Utc>,
        fingerprint: Option<String>,
    ) -> LandcheckResult<DocumentHistoryEntry>;

    /// All entries, newest first.
    fn entries(&self) -> LandcheckResult<Vec<DocumentHistoryEntry>>;

    /// Look up one entry by id.
    fn get(&self, id: &str) -> LandcheckResult<Option<DocumentHistoryEntry>>;
}
