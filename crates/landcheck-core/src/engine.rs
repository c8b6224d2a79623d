//! The landcheck engine: record in, verdict out.
//!
//! Every call runs the same pipeline:
//!
//!   Record → RuleSet::evaluate → tally → classify → Scorer → RuleSet::recommend → truncate
//!
//! Content problems never fail the call. They show up as findings and push
//! the status down; the engine has no error path of its own.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use landcheck_contracts::{
    finding::FindingTally,
    record::DocumentRecord,
    verdict::{
        VerificationId, VerificationReport, VerificationStatus, VerificationVerdict,
        LAND_EXTRACT_DOCUMENT_TYPE,
    },
};

use crate::traits::{RuleSet, Scorer};

/// Derive the status from error and warning counts. First match wins:
///
/// 1. more than two errors → `Invalid`
/// 2. any error, or more than two warnings → `Suspicious`
/// 3. otherwise → `Authentic`
pub fn classify(tally: &FindingTally) -> VerificationStatus {
    if tally.errors > 2 {
        VerificationStatus::Invalid
    } else if tally.errors > 0 || tally.warnings > 2 {
        VerificationStatus::Suspicious
    } else {
        VerificationStatus::Authentic
    }
}

/// Runs a `RuleSet` and a `Scorer` over document records.
///
/// Holds no mutable state of its own, so one engine can serve concurrent
/// verifications.
pub struct Engine {
    rules: Box<dyn RuleSet>,
    scorer: Box<dyn Scorer>,
    max_findings: usize,
}

impl Engine {
    /// Number of findings a verdict carries unless configured otherwise.
    pub const DEFAULT_MAX_FINDINGS: usize = 6;

    pub fn new(rules: Box<dyn RuleSet>, scorer: Box<dyn Scorer>) -> Self {
        Self {
            rules,
            scorer,
            max_findings: Self::DEFAULT_MAX_FINDINGS,
        }
    }

    /// Change how many leading findings a verdict keeps.
    pub fn with_max_findings(mut self, max_findings: usize) -> Self {
        self.max_findings = max_findings;
        self
    }

    pub fn max_findings(&self) -> usize {
        self.max_findings
    }

    /// Verify `record` against the current wall-clock time.
    pub fn verify(&self, record: &DocumentRecord) -> VerificationVerdict {
        self.verify_at(record, Utc::now())
    }

    /// Verify `record` as if the current time were `now`.
    ///
    /// Status, score and recommendations are computed from every finding;
    /// only the returned finding list is truncated.
    pub fn verify_at(&self, record: &DocumentRecord, now: DateTime<Utc>) -> VerificationVerdict {
        let mut findings = self.rules.evaluate(record, now);
        let tally = FindingTally::of(&findings);
        let status = classify(&tally);
        let score = self.scorer.score(status, &tally);
        let recommendations = self.rules.recommend(status, &findings);

        debug!(
            total_findings = findings.len(),
            errors = tally.errors,
            warnings = tally.warnings,
            "findings aggregated"
        );

        findings.truncate(self.max_findings);

        info!(%status, score, "verification complete");

        VerificationVerdict {
            status,
            score,
            findings,
            recommendations,
        }
    }

    /// Verify `record` and wrap the verdict with the metadata the result card
    /// shows for `document_name`.
    pub fn verify_document(&self, document_name: &str, record: &DocumentRecord) -> VerificationReport {
        let verified_at = Utc::now();
        let verdict = self.verify_at(record, verified_at);

        VerificationReport {
            verification_id: VerificationId::new(),
            document_name: document_name.to_string(),
            document_type: LAND_EXTRACT_DOCUMENT_TYPE.to_string(),
            verified_at,
            issue_date: record.dates.creation_date,
            verdict,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::{Duration, TimeZone};

    use landcheck_contracts::{
        finding::{Finding, FindingCode},
        record::{
            Address, BasicInformation, DocumentDates, DocumentMetadata, EncumbranceDetails,
            EncumbranceStatus, LandDetails, OwnerDetails,
        },
    };

    use super::*;
    use crate::scoring::{score_band, BandedRandomScorer, WeightedScorer};

    // ── Mock components ───────────────────────────────────────────────────────

    /// Returns a fixed finding list and records what `recommend` was given.
    struct FixedRules {
        codes: Vec<FindingCode>,
        seen: Arc<Mutex<Option<(VerificationStatus, usize)>>>,
    }

    impl FixedRules {
        fn new(codes: Vec<FindingCode>) -> Self {
            Self {
                codes,
                seen: Arc::new(Mutex::new(None)),
            }
        }
    }

    impl RuleSet for FixedRules {
        fn evaluate(&self, _record: &DocumentRecord, _now: DateTime<Utc>) -> Vec<Finding> {
            self.codes
                .iter()
                .enumerate()
                .map(|(i, code)| Finding::new(*code, format!("finding {i}")))
                .collect()
        }

        fn recommend(&self, status: VerificationStatus, findings: &[Finding]) -> Vec<String> {
            *self.seen.lock().unwrap() = Some((status, findings.len()));
            vec![format!("advice for {status}")]
        }
    }

    fn record() -> DocumentRecord {
        let created = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        DocumentRecord {
            basic_info: BasicInformation {
                survey_number: "123".to_string(),
                khata_number: "K-45/A".to_string(),
            },
            owner_details: OwnerDetails {
                name: "Amit Kumar".to_string(),
                address: Address::default(),
            },
            land_details: LandDetails {
                land_type: "forest".to_string(),
                area: 2.0,
                unit: "hectares".to_string(),
            },
            encumbrance: EncumbranceDetails {
                status: EncumbranceStatus::Clear,
                details: None,
            },
            dates: DocumentDates {
                creation_date: created,
                last_updated: created + Duration::days(30),
            },
            metadata: DocumentMetadata {
                has_required_attachments: true,
                has_valid_signatures: true,
            },
        }
    }

    fn engine(codes: Vec<FindingCode>) -> Engine {
        Engine::new(Box::new(FixedRules::new(codes)), Box::new(WeightedScorer::default()))
    }

    use FindingCode::*;

    // ── Classification ────────────────────────────────────────────────────────

    #[test]
    fn test_classify_thresholds() {
        let t = |errors, warnings| FindingTally { errors, warnings };
        assert_eq!(classify(&t(0, 0)), VerificationStatus::Authentic);
        assert_eq!(classify(&t(0, 2)), VerificationStatus::Authentic);
        assert_eq!(classify(&t(0, 3)), VerificationStatus::Suspicious);
        assert_eq!(classify(&t(1, 0)), VerificationStatus::Suspicious);
        assert_eq!(classify(&t(2, 9)), VerificationStatus::Suspicious);
        assert_eq!(classify(&t(3, 0)), VerificationStatus::Invalid);
    }

    // ── Pipeline ──────────────────────────────────────────────────────────────

    #[test]
    fn test_clean_record_is_authentic() {
        let verdict = engine(vec![SurveyValid, KhataValid, AreaValid]).verify(&record());

        assert_eq!(verdict.status, VerificationStatus::Authentic);
        assert!(score_band(VerificationStatus::Authentic).contains(&verdict.score));
        assert_eq!(verdict.findings.len(), 3);
        assert_eq!(verdict.recommendations, vec!["advice for authentic".to_string()]);
    }

    #[test]
    fn test_findings_truncated_to_limit_in_order() {
        let codes = vec![
            SurveyValid, KhataValid, OwnerNameValid, AddressValid, LandTypeValid, AreaValid,
            EncumbranceClear, CreationValid,
        ];
        let verdict = engine(codes.clone()).verify(&record());

        assert_eq!(verdict.findings.len(), 6);
        let kept: Vec<FindingCode> = verdict.findings.iter().map(|f| f.code).collect();
        assert_eq!(kept, codes[..6].to_vec());
        assert_eq!(verdict.findings[5].message, "finding 5");
    }

    #[test]
    fn test_status_counts_findings_beyond_the_limit() {
        // Six successes followed by three errors that will be cut from the list.
        let codes = vec![
            SurveyValid, KhataValid, OwnerNameValid, AddressValid, LandTypeValid, AreaValid,
            CreationInFuture, UpdateInFuture, SignaturesMissing,
        ];
        let rules = FixedRules::new(codes);
        let engine = Engine::new(Box::new(rules), Box::new(BandedRandomScorer::new()));

        let verdict = engine.verify(&record());

        assert_eq!(verdict.status, VerificationStatus::Invalid);
        assert!(verdict.findings.iter().all(|f| !f.is_error()));
        assert!(score_band(VerificationStatus::Invalid).contains(&verdict.score));
    }

    #[test]
    fn test_recommend_sees_every_finding() {
        let codes = vec![SurveyValid; 9];
        let rules = FixedRules::new(codes);
        let seen = Arc::clone(&rules.seen);
        let engine = Engine::new(Box::new(rules), Box::new(WeightedScorer::default()));

        engine.verify(&record());

        assert_eq!(*seen.lock().unwrap(), Some((VerificationStatus::Authentic, 9)));
    }

    #[test]
    fn test_custom_finding_limit() {
        let verdict = engine(vec![SurveyValid; 4]).with_max_findings(2).verify(&record());
        assert_eq!(verdict.findings.len(), 2);
    }

    #[test]
    fn test_verify_document_fills_report_metadata() {
        let rec = record();
        let report = engine(vec![SurveyValid]).verify_document("Survey123.pdf", &rec);

        assert_eq!(report.document_name, "Survey123.pdf");
        assert_eq!(report.document_type, "7/12 Land Extract");
        assert_eq!(report.issue_date, rec.dates.creation_date);
        assert_eq!(report.verdict.status, VerificationStatus::Authentic);
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
    }
}
