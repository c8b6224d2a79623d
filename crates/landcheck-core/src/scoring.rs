//! Status bands and the two scoring strategies.
//!
//! `BandedRandomScorer` draws uniformly inside the status band, which is what
//! the product shows today. `WeightedScorer` derives the score from the
//! finding tally so that the same record always gets the same number.

use std::ops::Range;
use std::sync::Mutex;

use rand::{rngs::StdRng, Rng, SeedableRng};

use landcheck_contracts::{finding::FindingTally, verdict::VerificationStatus};

use crate::traits::Scorer;

/// Half-open score range a status may be reported with.
pub fn score_band(status: VerificationStatus) -> Range<u8> {
    match status {
        VerificationStatus::Invalid => 10..50,
        VerificationStatus::Suspicious => 50..80,
        VerificationStatus::Authentic => 85..100,
    }
}

/// Uniform random score inside the status band.
///
/// Uses the thread-local generator unless built with `seeded`, in which case
/// draws come from one shared `StdRng` and are reproducible.
#[derive(Debug, Default)]
pub struct BandedRandomScorer {
    seeded: Option<Mutex<StdRng>>,
}

impl BandedRandomScorer {
    pub fn new() -> Self {
        Self { seeded: None }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            seeded: Some(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }
}

impl Scorer for BandedRandomScorer {
    fn score(&self, status: VerificationStatus, _tally: &FindingTally) -> u8 {
        let band = score_band(status);
        match &self.seeded {
            // A panic mid-draw cannot leave StdRng in a bad state.
            Some(rng) => rng
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .gen_range(band),
            None => rand::thread_rng().gen_range(band),
        }
    }
}

/// Deterministic score: start at the top of the band and subtract a fixed
/// penalty per error and per warning, never leaving the band.
#[derive(Debug, Clone, Copy)]
pub struct WeightedScorer {
    pub error_penalty: u8,
    pub warning_penalty: u8,
}

impl WeightedScorer {
    pub const DEFAULT_ERROR_PENALTY: u8 = 8;
    pub const DEFAULT_WARNING_PENALTY: u8 = 3;

    pub fn new(error_penalty: u8, warning_penalty: u8) -> Self {
        Self {
            error_penalty,
            warning_penalty,
        }
    }
}

impl Default for WeightedScorer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ERROR_PENALTY, Self::DEFAULT_WARNING_PENALTY)
    }
}

impl Scorer for WeightedScorer {
    fn score(&self, status: VerificationStatus, tally: &FindingTally) -> u8 {
        let band = score_band(status);
        let top = band.end - 1;
        let span = usize::from(top - band.start);

        let penalty = tally
            .errors
            .saturating_mul(usize::from(self.error_penalty))
            .saturating_add(tally.warnings.saturating_mul(usize::from(self.warning_penalty)))
            .min(span);

        // penalty <= span < 256, so the narrowing cannot truncate.
        top - penalty as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUSES: [VerificationStatus; 3] = [
        VerificationStatus::Authentic,
        VerificationStatus::Suspicious,
        VerificationStatus::Invalid,
    ];

    fn tally(errors: usize, warnings: usize) -> FindingTally {
        FindingTally { errors, warnings }
    }

    #[test]
    fn bands_match_status_thresholds() {
        assert_eq!(score_band(VerificationStatus::Invalid), 10..50);
        assert_eq!(score_band(VerificationStatus::Suspicious), 50..80);
        assert_eq!(score_band(VerificationStatus::Authentic), 85..100);
    }

    #[test]
    fn random_scores_stay_in_band() {
        let scorer = BandedRandomScorer::new();
        for status in STATUSES {
            let band = score_band(status);
            for _ in 0..500 {
                let score = scorer.score(status, &tally(0, 0));
                assert!(band.contains(&score), "{score} outside {band:?} for {status}");
            }
        }
    }

    #[test]
    fn seeded_scorers_agree() {
        let a = BandedRandomScorer::seeded(7);
        let b = BandedRandomScorer::seeded(7);
        let draws_a: Vec<u8> = (0..20)
            .map(|_| a.score(VerificationStatus::Suspicious, &tally(1, 0)))
            .collect();
        let draws_b: Vec<u8> = (0..20)
            .map(|_| b.score(VerificationStatus::Suspicious, &tally(1, 0)))
            .collect();
        assert_eq!(draws_a, draws_b);
    }

    #[test]
    fn weighted_clean_record_scores_top_of_band() {
        let scorer = WeightedScorer::default();
        assert_eq!(scorer.score(VerificationStatus::Authentic, &tally(0, 0)), 99);
        assert_eq!(scorer.score(VerificationStatus::Authentic, &tally(0, 2)), 93);
    }

    #[test]
    fn weighted_penalises_errors_more_than_warnings() {
        let scorer = WeightedScorer::default();
        let one_error = scorer.score(VerificationStatus::Suspicious, &tally(1, 0));
        let one_warning = scorer.score(VerificationStatus::Suspicious, &tally(0, 3));
        assert_eq!(one_error, 71);
        assert_eq!(one_warning, 70);
        assert!(scorer.score(VerificationStatus::Suspicious, &tally(2, 0)) < one_error);
    }

    #[test]
    fn weighted_never_leaves_band() {
        let scorer = WeightedScorer::default();
        for status in STATUSES {
            let band = score_band(status);
            for errors in 0..20 {
                for warnings in 0..20 {
                    let score = scorer.score(status, &tally(errors, warnings));
                    assert!(band.contains(&score), "{score} outside {band:?}");
                }
            }
        }
        assert_eq!(scorer.score(VerificationStatus::Invalid, &tally(usize::MAX, usize::MAX)), 10);
    }
}
