//! # landcheck-policy
//!
//! TOML configuration for the landcheck engine and its hosting surface.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use landcheck_policy::VerificationPolicy;
//! use landcheck_rules::LandRecordRules;
//!
//! let policy = VerificationPolicy::from_file(Path::new("landcheck.toml"))?;
//! let engine = policy.build_engine(Box::new(LandRecordRules::new()));
//! ```
//!
//! A missing key falls back to its default; an empty document yields the
//! product defaults (six findings, banded random scoring, PDF/JPEG/PNG up
//! to 10 MiB).

pub mod config;
pub mod intake;

pub use config::{ScoringConfig, ScoringMode, VerificationPolicy};
pub use intake::IntakePolicy;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use landcheck_contracts::{
        error::LandcheckError,
        finding::{Finding, FindingCode},
        record::DocumentRecord,
        verdict::VerificationStatus,
    };
    use landcheck_core::traits::RuleSet;

    use super::*;

    /// Rule set that emits nine successes, for checking the finding limit.
    struct NineSuccesses;

    impl RuleSet for NineSuccesses {
        fn evaluate(&self, _record: &DocumentRecord, _now: chrono::DateTime<Utc>) -> Vec<Finding> {
            (0..9).map(|_| Finding::new(FindingCode::SurveyValid, "ok")).collect()
        }

        fn recommend(&self, _status: VerificationStatus, _findings: &[Finding]) -> Vec<String> {
            Vec::new()
        }
    }

    fn sample_record() -> DocumentRecord {
        serde_json::from_str(
            r#"{
                "basicInfo": { "surveyNumber": "1", "khataNumber": "K-1/A" },
                "ownerDetails": { "name": "Vikram Singh", "address": {} },
                "landDetails": { "type": "forest", "area": 1, "unit": "guntha" },
                "encumbrance": { "status": "clear" },
                "dates": { "creationDate": "2024-01-01T00:00:00Z", "lastUpdated": "2024-02-01T00:00:00Z" },
                "metadata": { "hasRequiredAttachments": true, "hasValidSignatures": true }
            }"#,
        )
        .unwrap()
    }

    // ── 1. defaults ───────────────────────────────────────────────────────────

    #[test]
    fn test_empty_document_is_default_policy() {
        let policy = VerificationPolicy::from_toml_str("").unwrap();
        assert_eq!(policy, VerificationPolicy::default());
        assert_eq!(policy.max_findings, 6);
        assert_eq!(policy.scoring.mode, ScoringMode::Banded);
        assert_eq!(policy.intake.max_bytes, 10 * 1024 * 1024);
    }

    // ── 2. full document ──────────────────────────────────────────────────────

    #[test]
    fn test_full_document() {
        let toml = r#"
            max_findings = 4

            [scoring]
            mode = "weighted"
            error_penalty = 10
            warning_penalty = 2

            [intake]
            allowed_extensions = ["pdf"]
            max_bytes = 1024
        "#;

        let policy = VerificationPolicy::from_toml_str(toml).unwrap();
        assert_eq!(policy.max_findings, 4);
        assert_eq!(policy.scoring.mode, ScoringMode::Weighted);
        assert_eq!(policy.scoring.error_penalty, 10);
        assert_eq!(policy.intake.allowed_extensions, vec!["pdf".to_string()]);
    }

    // ── 3. build_engine honours the policy ────────────────────────────────────

    #[test]
    fn test_build_engine_applies_limit_and_scorer() {
        let toml = r#"
            max_findings = 3
            [scoring]
            mode = "weighted"
        "#;
        let policy = VerificationPolicy::from_toml_str(toml).unwrap();
        let engine = policy.build_engine(Box::new(NineSuccesses));

        let verdict = engine.verify(&sample_record());
        assert_eq!(verdict.findings.len(), 3);
        // Weighted scorer with a clean tally lands on the top of the band.
        assert_eq!(verdict.score, 99);
    }

    #[test]
    fn test_seeded_banded_scoring_is_reproducible() {
        let toml = r#"
            [scoring]
            mode = "banded"
            seed = 42
        "#;
        let a = VerificationPolicy::from_toml_str(toml).unwrap().build_engine(Box::new(NineSuccesses));
        let b = VerificationPolicy::from_toml_str(toml).unwrap().build_engine(Box::new(NineSuccesses));

        let scores_a: Vec<u8> = (0..5).map(|_| a.verify(&sample_record()).score).collect();
        let scores_b: Vec<u8> = (0..5).map(|_| b.verify(&sample_record()).score).collect();
        assert_eq!(scores_a, scores_b);
    }

    // ── 4. validation errors ──────────────────────────────────────────────────

    #[test]
    fn test_zero_findings_is_config_error() {
        match VerificationPolicy::from_toml_str("max_findings = 0") {
            Err(LandcheckError::ConfigError { reason }) => {
                assert!(reason.contains("max_findings"), "unexpected reason: {reason}");
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_scoring_mode_is_config_error() {
        let toml = r#"
            [scoring]
            mode = "vibes"
        "#;
        assert!(matches!(
            VerificationPolicy::from_toml_str(toml),
            Err(LandcheckError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_toml_parse_error() {
        match VerificationPolicy::from_toml_str("this is not valid toml ][[[") {
            Err(LandcheckError::ConfigError { reason }) => {
                assert!(
                    reason.contains("failed to parse policy TOML"),
                    "expected parse error message, got: {reason}"
                );
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_policy_file() {
        let result = VerificationPolicy::from_file(std::path::Path::new("/nonexistent/landcheck.toml"));
        match result {
            Err(LandcheckError::ConfigError { reason }) => {
                assert!(reason.contains("failed to read policy file"));
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    // ── 5. intake ─────────────────────────────────────────────────────────────

    #[test]
    fn test_intake_accepts_supported_types_case_insensitively() {
        let intake = IntakePolicy::default();
        for name in ["deed.pdf", "Deed.PDF", "scan.jpeg", "photo.JPG", "plot.png"] {
            assert!(intake.check(name, 1024).is_ok(), "{name} should be accepted");
        }
    }

    #[test]
    fn test_intake_rejects_unsupported_types() {
        let intake = IntakePolicy::default();
        for name in ["deed.docx", "README", "archive.pdf.zip"] {
            match intake.check(name, 10) {
                Err(LandcheckError::UploadRejected { reason }) => {
                    assert!(reason.contains("not a supported file type"), "{reason}");
                }
                other => panic!("expected UploadRejected for {name}, got {:?}", other),
            }
        }
    }

    fn scratch_file(name: &str, len: usize) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("landcheck-intake-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, vec![0u8; len]).unwrap();
        path
    }

    #[test]
    fn test_intake_path_uses_metadata_size() {
        let intake = IntakePolicy {
            max_bytes: 64,
            ..IntakePolicy::default()
        };

        let small = scratch_file("small.pdf", 64);
        assert_eq!(intake.check_path(&small).unwrap(), 64);

        let large = scratch_file("large.pdf", 65);
        match intake.check_path(&large) {
            Err(LandcheckError::UploadRejected { reason }) => {
                assert!(reason.contains("File size exceeds"), "{reason}");
            }
            other => panic!("expected UploadRejected, got {:?}", other),
        }

        let wrong_type = scratch_file("notes.txt", 1);
        assert!(matches!(
            intake.check_path(&wrong_type),
            Err(LandcheckError::UploadRejected { .. })
        ));
    }

    #[test]
    fn test_intake_path_missing_file_is_io_error() {
        let missing = std::path::Path::new("/nonexistent/landcheck/deed.pdf");
        match IntakePolicy::default().check_path(missing) {
            Err(LandcheckError::Io { path, .. }) => assert!(path.ends_with("deed.pdf")),
            other => panic!("expected Io, got {:?}", other),
        }
    }

    #[test]
    fn test_intake_size_limit() {
        let intake = IntakePolicy::default();
        assert!(intake.check("deed.pdf", 10 * 1024 * 1024).is_ok());
        match intake.check("deed.pdf", 10 * 1024 * 1024 + 1) {
            Err(LandcheckError::UploadRejected { reason }) => {
                assert_eq!(reason, "File size exceeds the 10MB limit");
            }
            other => panic!("expected UploadRejected, got {:?}", other),
        }
    }
}
