//! landcheck: 7/12 land extract verification CLI
//!
//! Accepts scanned extracts, checks them against the upload rules, stands in
//! a fabricated record for OCR, and prints the verification result card.
//! Records that were already extracted can be checked directly from JSON.
//!
//! Usage:
//!   cargo run -p landcheck-demo -- verify Land_Extract_Survey123.pdf
//!   cargo run -p landcheck-demo -- check demo/records/pune_extract.json
//!   cargo run -p landcheck-demo -- scenario disputed
//!   cargo run -p landcheck-demo -- history
//!   cargo run -p landcheck-demo -- --policy landcheck.toml --json scenario lien

use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use chrono::Utc;
use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use landcheck_contracts::{
    error::{LandcheckError, LandcheckResult},
    finding::FindingKind,
    history::DocumentHistoryEntry,
    verdict::VerificationReport,
};
use landcheck_core::{traits::HistoryStore, Engine};
use landcheck_fixtures::{mock_history, random_record, Scenario};
use landcheck_history::{fingerprint, InMemoryHistory};
use landcheck_policy::{IntakePolicy, VerificationPolicy};
use landcheck_rules::{parse_record_str, LandRecordRules};

// ── CLI definition ────────────────────────────────────────────────────────────

/// landcheck: field validation for 7/12 land extracts.
#[derive(Parser)]
#[command(
    name = "landcheck",
    about = "Verify 7/12 land extract documents",
    long_about = "Validates the fields of 7/12 land extracts, classifies each document as\n\
                  authentic, suspicious or invalid, and prints a scored result card."
)]
struct Cli {
    /// Verification policy (TOML). Defaults apply when omitted.
    #[arg(long, global = true, value_name = "FILE.toml")]
    policy: Option<PathBuf>,

    /// Print reports as JSON instead of a result card.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Upload scanned documents and verify a fabricated extraction of each.
    Verify {
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
        /// Pause after each processing step.
        #[arg(long, default_value_t = 400)]
        step_delay_ms: u64,
        /// Seed the record fabricator for a reproducible run.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Verify an already extracted record from a JSON file.
    Check {
        #[arg(value_name = "RECORD.json")]
        record: PathBuf,
    },
    /// Verify one of the canned records (clean, invalid, disputed, lien).
    Scenario {
        name: String,
    },
    /// List previously verified documents, newest first.
    History,
}

const PROCESSING_STEPS: [&str; 4] = [
    "Document Analysis",
    "Data Extraction",
    "Verification",
    "Validation",
];

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug to see each validator group.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    if !cli.json {
        print_banner();
    }

    if let Err(e) = run(cli) {
        eprintln!("landcheck error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> LandcheckResult<()> {
    let policy = match &cli.policy {
        Some(path) => VerificationPolicy::from_file(path)?,
        None => VerificationPolicy::default(),
    };
    let engine = policy.build_engine(Box::new(LandRecordRules::new()));
    let history = InMemoryHistory::with_entries(mock_history(&mut rand::thread_rng()));

    match cli.command {
        Command::Verify {
            files,
            step_delay_ms,
            seed,
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let mut reports = Vec::with_capacity(files.len());
            for path in &files {
                let (report, entry) = run_upload(
                    &policy.intake,
                    &engine,
                    &history,
                    path,
                    step_delay_ms,
                    &mut rng,
                    cli.json,
                )?;
                if cli.json {
                    reports.push(report);
                } else {
                    print_report(&report);
                    print_saved(&entry);
                }
            }
            if cli.json {
                println!("{}", to_json(&reports)?);
            }
            Ok(())
        }
        Command::Check { record } => {
            let (report, entry) = check_record(&engine, &history, &record)?;
            emit(&report, cli.json)?;
            if !cli.json {
                print_saved(&entry);
            }
            Ok(())
        }
        Command::Scenario { name } => {
            let scenario: Scenario = name.parse()?;
            info!(%scenario, "running canned scenario");
            if !cli.json {
                println!("Scenario '{}': {}", scenario, scenario.description());
                println!("Expected status: {}", scenario.expected_status());
                println!();
            }
            let record = scenario.record(Utc::now());
            let report = engine.verify_document(&format!("{}.pdf", scenario), &record);
            emit(&report, cli.json)
        }
        Command::History => print_history(&history.entries()?, cli.json),
    }
}

// ── Upload flow ───────────────────────────────────────────────────────────────

/// Run one file through intake, the simulated processing steps and the
/// engine, and append the outcome to `history`.
fn run_upload(
    intake: &IntakePolicy,
    engine: &Engine,
    history: &InMemoryHistory,
    path: &Path,
    step_delay_ms: u64,
    rng: &mut StdRng,
    json: bool,
) -> LandcheckResult<(VerificationReport, DocumentHistoryEntry)> {
    let name = display_name(path);
    // Size comes from metadata so an oversize file is never read.
    let size = intake.check_path(path)?;
    let bytes = std::fs::read(path).map_err(|e| io_error(path, e))?;

    let print = fingerprint(&bytes);
    if let Some(previous) = history.find_by_fingerprint(&print)? {
        warn!(
            name = %name,
            previous_id = %previous.id,
            "same file content was already verified"
        );
        if !json {
            println!(
                "Note: '{}' has the same content as history entry #{} ('{}', {}).",
                name, previous.id, previous.name, previous.status
            );
        }
    }

    if !json {
        println!("Processing '{}' ({} bytes)", name, size);
    }
    for (i, step) in PROCESSING_STEPS.iter().enumerate() {
        thread::sleep(Duration::from_millis(step_delay_ms));
        info!(step = *step, name = %name, "processing step complete");
        if !json {
            println!("  [{}/{}] {}", i + 1, PROCESSING_STEPS.len(), step);
        }
    }
    if !json {
        println!();
    }

    let record = random_record(rng, Utc::now());
    let report = engine.verify_document(&name, &record);
    let entry = history.record_report(&report, Some(print))?;
    Ok((report, entry))
}

/// Verify an extracted record read from a JSON file and log it to `history`.
fn check_record(
    engine: &Engine,
    history: &InMemoryHistory,
    path: &Path,
) -> LandcheckResult<(VerificationReport, DocumentHistoryEntry)> {
    let text = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    let record = parse_record_str(&text)?;
    let report = engine.verify_document(&display_name(path), &record);
    let entry = history.record_report(&report, Some(fingerprint(text.as_bytes())))?;
    Ok((report, entry))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn io_error(path: &Path, e: std::io::Error) -> LandcheckError {
    LandcheckError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

fn to_json<T: Serialize + ?Sized>(value: &T) -> LandcheckResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| LandcheckError::Io {
        path: "<stdout>".to_string(),
        reason: format!("failed to serialize output: {}", e),
    })
}

fn emit(report: &VerificationReport, json: bool) -> LandcheckResult<()> {
    if json {
        println!("{}", to_json(report)?);
    } else {
        print_report(report);
    }
    Ok(())
}

fn print_saved(entry: &DocumentHistoryEntry) {
    println!("Saved to history as entry #{}.", entry.id);
    println!();
}

fn print_report(report: &VerificationReport) {
    let verdict = &report.verdict;

    println!("Verification Result: {}", verdict.status.as_str().to_uppercase());
    println!("Confidence score: {}%", verdict.score);
    println!("---------------------------------");
    println!("  Document:     {}", report.document_name);
    println!("  Type:         {}", report.document_type);
    println!("  Verified on:  {}", VerificationReport::display_date(&report.verified_at));
    println!("  Issue date:   {}", VerificationReport::display_date(&report.issue_date));
    println!("  Reference:    {}", report.verification_id);
    println!();

    println!("Findings:");
    for finding in &verdict.findings {
        let marker = match finding.kind {
            FindingKind::Success => "[ok]",
            FindingKind::Info => "[i] ",
            FindingKind::Warning => "[!] ",
            FindingKind::Error => "[x] ",
        };
        println!("  {} {}", marker, finding.message);
    }
    println!();

    println!("Recommendations:");
    for recommendation in &verdict.recommendations {
        println!("  - {}", recommendation);
    }
    println!();
}

fn print_history(entries: &[DocumentHistoryEntry], json: bool) -> LandcheckResult<()> {
    if json {
        println!("{}", to_json(entries)?);
        return Ok(());
    }

    println!("Document History");
    println!("---------------------------------");
    if entries.is_empty() {
        println!("  No documents verified yet.");
    }
    for entry in entries {
        println!(
            "  #{:<3} {:<34} {:<16} {}",
            entry.id, entry.name, entry.date_uploaded, entry.status
        );
    }
    println!();
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("landcheck: 7/12 Land Extract Verification");
    println!("==========================================");
    println!();
    println!("Each document passes through:");
    println!("  [1] Intake: file type and size limits");
    println!("  [2] Field validation: basic info, owner, land, encumbrance, dates, metadata");
    println!("  [3] Classification: >2 errors invalid; any error or >2 warnings suspicious");
    println!("  [4] Score within the status band, plus recommendations");
    println!();
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use landcheck_core::scoring::WeightedScorer;

    use super::*;

    fn engine() -> Engine {
        Engine::new(
            Box::new(LandRecordRules::new()),
            Box::new(WeightedScorer::default()),
        )
    }

    fn seeded_history() -> InMemoryHistory {
        InMemoryHistory::with_entries(mock_history(&mut StdRng::seed_from_u64(3)))
    }

    fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("landcheck-demo-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    // ── check ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_check_record_is_saved_after_seeded_entries() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("records/pune_extract.json");
        let history = seeded_history();

        let (report, entry) = check_record(&engine(), &history, &path).unwrap();

        assert_eq!(report.document_name, "pune_extract.json");
        assert_eq!(entry.id, "4");
        assert_eq!(entry.status, report.verdict.status);
        assert_eq!(history.entries().unwrap()[0].id, "4");
    }

    // ── verify ────────────────────────────────────────────────────────────────

    #[test]
    fn test_oversize_upload_rejected() {
        let path = scratch_dir().join("big.pdf");
        std::fs::write(&path, vec![0u8; 32]).unwrap();
        let intake = IntakePolicy {
            max_bytes: 16,
            ..IntakePolicy::default()
        };
        let history = seeded_history();

        let result = run_upload(
            &intake,
            &engine(),
            &history,
            &path,
            0,
            &mut StdRng::seed_from_u64(1),
            true,
        );

        assert!(matches!(result, Err(LandcheckError::UploadRejected { .. })));
        assert_eq!(history.len().unwrap(), 3);
    }

    #[test]
    fn test_multiple_reports_render_as_one_json_array() {
        let dir = scratch_dir();
        let a = dir.join("a.pdf");
        let b = dir.join("b.png");
        std::fs::write(&a, b"first scan").unwrap();
        std::fs::write(&b, b"second scan").unwrap();

        let engine = engine();
        let history = seeded_history();
        let mut rng = StdRng::seed_from_u64(9);
        let intake = IntakePolicy::default();

        let reports: Vec<VerificationReport> = [a, b]
            .iter()
            .map(|path| run_upload(&intake, &engine, &history, path, 0, &mut rng, true).unwrap().0)
            .collect();

        let value: serde_json::Value = serde_json::from_str(&to_json(&reports).unwrap()).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["documentName"], "a.pdf");
        assert_eq!(array[1]["documentName"], "b.png");
    }
}
