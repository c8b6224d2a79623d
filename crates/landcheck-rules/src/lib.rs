//! # landcheck-rules
//!
//! The land-record rule set for the landcheck engine.
//!
//! [`LandRecordRules`] implements [`landcheck_core::traits::RuleSet`] by
//! running the six field-group validators in reporting order and mapping
//! the outcome to recommendations:
//!
//! 1. **Basic information**: survey and khata number format
//! 2. **Owner**: name characters, address completeness, ZIP code
//! 3. **Land**: classification, area, unit
//! 4. **Encumbrance**: clear, disputed or under lien
//! 5. **Dates**: creation and update ordering against "now"
//! 6. **Metadata**: attachments and signatures
//!
//! [`schema::parse_record`] is the intake check for records arriving as JSON.

pub mod recommend;
pub mod schema;
pub mod validators;

use chrono::{DateTime, Utc};

use landcheck_contracts::{finding::Finding, record::DocumentRecord, verdict::VerificationStatus};
use landcheck_core::traits::RuleSet;

pub use recommend::generate_recommendations;
pub use schema::{parse_record, parse_record_str};

/// The standard 7/12 extract rule set.
#[derive(Debug, Clone, Copy, Default)]
pub struct LandRecordRules;

impl LandRecordRules {
    pub fn new() -> Self {
        Self
    }
}

impl RuleSet for LandRecordRules {
    fn evaluate(&self, record: &DocumentRecord, now: DateTime<Utc>) -> Vec<Finding> {
        let mut findings = validators::validate_basic_info(&record.basic_info);
        findings.extend(validators::validate_owner_details(&record.owner_details));
        findings.extend(validators::validate_land_details(&record.land_details));
        findings.extend(validators::validate_encumbrance(&record.encumbrance));
        findings.extend(validators::validate_dates(&record.dates, now));
        findings.extend(validators::validate_metadata(&record.metadata));
        findings
    }

    fn recommend(&self, status: VerificationStatus, findings: &[Finding]) -> Vec<String> {
        generate_recommendations(status, findings)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
