//! In-memory implementation of `HistoryStore`.
//!
//! `InMemoryHistory` keeps entries in a `Vec` behind an `Arc<Mutex<_>>`, so
//! clones share one list and the store can be handed across threads.
//! Entries are only ever appended; listing returns them newest first.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use tracing::info;

use landcheck_contracts::{
    error::{LandcheckError, LandcheckResult},
    history::DocumentHistoryEntry,
    verdict::{VerificationReport, VerificationStatus},
};
use landcheck_core::traits::HistoryStore;

/// Append-only document history shared by clones.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistory {
    entries: Arc<Mutex<Vec<DocumentHistoryEntry>>>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `entries`, given oldest first.
    pub fn with_entries(entries: Vec<DocumentHistoryEntry>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(entries)),
        }
    }

    pub fn len(&self) -> LandcheckResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> LandcheckResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    /// Most recent entry whose upload had the given content fingerprint.
    pub fn find_by_fingerprint(&self, fingerprint: &str) -> LandcheckResult<Option<DocumentHistoryEntry>> {
        let entries = self.lock()?;
        Ok(entries
            .iter()
            .rev()
            .find(|e| e.fingerprint.as_deref() == Some(fingerprint))
            .cloned())
    }

    /// Append the outcome of a finished verification.
    pub fn record_report(
        &self,
        report: &VerificationReport,
        fingerprint: Option<String>,
    ) -> LandcheckResult<DocumentHistoryEntry> {
        self.record(
            &report.document_name,
            report.verdict.status,
            report.verified_at,
            fingerprint,
        )
    }

    fn lock(&self) -> LandcheckResult<MutexGuard<'_, Vec<DocumentHistoryEntry>>> {
        self.entries.lock().map_err(|e| LandcheckError::HistoryError {
            reason: format!("history lock poisoned: {}", e),
        })
    }
}

impl HistoryStore for InMemoryHistory {
    /// Append one entry. Its id is the store length after the append.
    fn record(
        &self,
        name: &str,
        status: VerificationStatus,
        uploaded_at: DateTime<Utc>,
        fingerprint: Option<String>,
    ) -> LandcheckResult<DocumentHistoryEntry> {
        let mut entries = self.lock()?;

        let entry = DocumentHistoryEntry {
            id: (entries.len() + 1).to_string(),
            name: name.to_string(),
            date_uploaded: VerificationReport::display_date(&uploaded_at),
            status,
            fingerprint,
        };
        entries.push(entry.clone());

        info!(id = %entry.id, name = %entry.name, %status, "history entry recorded");
        Ok(entry)
    }

    fn entries(&self) -> LandcheckResult<Vec<DocumentHistoryEntry>> {
        let entries = self.lock()?;
        Ok(entries.iter().rev().cloned().collect())
    }

    fn get(&self, id: &str) -> LandcheckResult<Option<DocumentHistoryEntry>> {
        let entries = self.lock()?;
        Ok(entries.iter().find(|e| e.id == id).cloned())
    }
}
