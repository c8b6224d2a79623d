//! Verification policy: how many findings to report and how to score.
//!
//! A `VerificationPolicy` is deserialized from TOML. Every field has a
//! default, so an empty document is a valid policy.
//!
//! ```toml
//! max_findings = 6
//!
//! [scoring]
//! mode = "weighted"
//! error_penalty = 8
//! warning_penalty = 3
//!
//! [intake]
//! allowed_extensions = ["pdf", "jpg", "jpeg", "png"]
//! max_bytes = 10485760
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use landcheck_contracts::error::{LandcheckError, LandcheckResult};
use landcheck_core::{
    scoring::{BandedRandomScorer, WeightedScorer},
    traits::{RuleSet, Scorer},
    Engine,
};

use crate::intake::IntakePolicy;

/// Which `Scorer` the engine is built with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringMode {
    /// Uniform random score inside the status band.
    #[default]
    Banded,
    /// Deterministic score from error and warning counts.
    Weighted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub mode: ScoringMode,
    /// Seed for `banded` mode. Unset means a fresh thread-local generator.
    pub seed: Option<u64>,
    /// Points a `weighted` score loses per error.
    pub error_penalty: u8,
    /// Points a `weighted` score loses per warning.
    pub warning_penalty: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            mode: ScoringMode::default(),
            seed: None,
            error_penalty: WeightedScorer::DEFAULT_ERROR_PENALTY,
            warning_penalty: WeightedScorer::DEFAULT_WARNING_PENALTY,
        }
    }
}

impl ScoringConfig {
    pub fn build_scorer(&self) -> Box<dyn Scorer> {
        match (self.mode, self.seed) {
            (ScoringMode::Banded, None) => Box::new(BandedRandomScorer::new()),
            (ScoringMode::Banded, Some(seed)) => Box::new(BandedRandomScorer::seeded(seed)),
            (ScoringMode::Weighted, _) => {
                Box::new(WeightedScorer::new(self.error_penalty, self.warning_penalty))
            }
        }
    }
}

/// Top-level policy document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationPolicy {
    /// How many leading findings a verdict keeps. Must be at least 1.
    pub max_findings: usize,
    pub scoring: ScoringConfig,
    pub intake: IntakePolicy,
}

impl Default for VerificationPolicy {
    fn default() -> Self {
        Self {
            max_findings: Engine::DEFAULT_MAX_FINDINGS,
            scoring: ScoringConfig::default(),
            intake: IntakePolicy::default(),
        }
    }
}

impl VerificationPolicy {
    /// Parse `s` as TOML and validate the result.
    ///
    /// Returns `LandcheckError::ConfigError` if the TOML is malformed, does
    /// not match the policy shape, or holds out-of-range values.
    pub fn from_toml_str(s: &str) -> LandcheckResult<Self> {
        let policy: Self = toml::from_str(s).map_err(|e| LandcheckError::ConfigError {
            reason: format!("failed to parse policy TOML: {}", e),
        })?;
        policy.validate()?;
        debug!(
            max_findings = policy.max_findings,
            scoring = ?policy.scoring.mode,
            "verification policy loaded"
        );
        Ok(policy)
    }

    /// Read the file at `path` and parse it as a policy document.
    pub fn from_file(path: &Path) -> LandcheckResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| LandcheckError::ConfigError {
            reason: format!("failed to read policy file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> LandcheckResult<()> {
        if self.max_findings == 0 {
            return Err(LandcheckError::ConfigError {
                reason: "max_findings must be at least 1".to_string(),
            });
        }
        if self.intake.max_bytes == 0 {
            return Err(LandcheckError::ConfigError {
                reason: "intake.max_bytes must be greater than 0".to_string(),
            });
        }
        if self.intake.allowed_extensions.is_empty() {
            return Err(LandcheckError::ConfigError {
                reason: "intake.allowed_extensions must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Assemble an `Engine` around `rules` using this policy's scorer and
    /// finding limit.
    pub fn build_engine(&self, rules: Box<dyn RuleSet>) -> Engine {
        Engine::new(rules, self.scoring.build_scorer()).with_max_findings(self.max_findings)
    }
}
