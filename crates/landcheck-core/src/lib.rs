//! # landcheck-core
//!
//! The verification engine for 7/12 land records.
//!
//! This crate provides:
//! - The seam traits (`RuleSet`, `Scorer`, `HistoryStore`)
//! - The two scoring strategies (`BandedRandomScorer`, `WeightedScorer`)
//! - The `Engine` that runs rules, classifies, scores and recommends
//!
//! ## Usage
//!
//! ```rust,ignore
//! use landcheck_core::{Engine, scoring::BandedRandomScorer};
//! use landcheck_rules::LandRecordRules;
//!
//! let engine = Engine::new(Box::new(LandRecordRules::new()), Box::new(BandedRandomScorer::new()));
//! let verdict = engine.verify(&record);
//! ```

pub mod engine;
pub mod scoring;
pub mod traits;

pub use engine::{classify, Engine};
