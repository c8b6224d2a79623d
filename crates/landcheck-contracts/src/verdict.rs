//! Verdict and report types returned to the hosting surface.
//!
//! `VerificationVerdict` is the engine's output. `VerificationReport` wraps
//! it with the document metadata the result card shows.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::finding::Finding;

/// Document type label shown on every report.
pub const LAND_EXTRACT_DOCUMENT_TYPE: &str = "7/12 Land Extract";

/// Three-way classification derived from error and warning counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Authentic,
    Suspicious,
    Invalid,
}

impl VerificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authentic => "authentic",
            Self::Suspicious => "suspicious",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The aggregate outcome of one verification run.
///
/// Built once per call and never updated; a new upload produces a new verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationVerdict {
    pub status: VerificationStatus,
    /// Confidence score in `0..=100`, always inside the band of `status`.
    pub score: u8,
    /// Leading findings in field-group order, truncated to the engine's limit.
    pub findings: Vec<Finding>,
    pub recommendations: Vec<String>,
}

/// Unique identifier for a single verification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerificationId(pub uuid::Uuid);

impl VerificationId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for VerificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VerificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Everything the result card displays for one uploaded document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationReport {
    pub verification_id: VerificationId,
    pub document_name: String,
    pub document_type: String,
    pub verified_at: DateTime<Utc>,
    /// Creation date read from the record itself.
    pub issue_date: DateTime<Utc>,
    pub verdict: VerificationVerdict,
}

impl VerificationReport {
    /// Render a date the way the result card does, e.g. `"May 15, 2023"`.
    pub fn display_date(date: &DateTime<Utc>) -> String {
        date.format("%B %-d, %Y").to_string()
    }
}
