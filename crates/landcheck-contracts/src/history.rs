//! Document history entries kept by the hosting surface.
//!
//! The engine never reads or writes history; these types exist so the CLI
//! and the history store agree on a shape.

use serde::{Deserialize, Serialize};

use crate::verdict::VerificationStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentHistoryEntry {
    /// Sequential identifier assigned by the store (`"1"`, `"2"`, ...).
    pub id: String,
    pub name: String,
    /// Display date, e.g. `"April 28, 2023"`.
    pub date_uploaded: String,
    pub status: VerificationStatus,
    /// Lowercase hex SHA-256 of the uploaded bytes, when they were available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}
