//! Random perturbation of board scores
//!
//! Breaks ties between near-equal branches so the engine does not play the
//! same game every time. Tests use [`Jitter::disabled`] or a fixed seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::patterns::ShapeScore;

/// Relative amplitude of the perturbation (±10%)
const JITTER_RATIO: f64 = 0.1;

/// Injectable score jitter
#[derive(Debug, Clone)]
pub struct Jitter {
    rng: Option<StdRng>,
}

impl Jitter {
    /// No perturbation; scores pass through unchanged
    pub fn disabled() -> Self {
        Self { rng: None }
    }

    /// Reproducible perturbation
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Some(StdRng::seed_from_u64(seed)),
        }
    }

    /// Perturbation seeded from the OS
    pub fn from_entropy() -> Self {
        Self {
            rng: Some(StdRng::from_entropy()),
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.rng.is_some()
    }

    /// Scale `score` by a uniform factor in `[0.9, 1.1]`.
    ///
    /// Decisive scores are returned untouched so a won or lost position always
    /// stays at or beyond the five threshold.
    #[allow(clippy::cast_possible_truncation)]
    pub fn apply(&mut self, score: i32) -> i32 {
        let Some(rng) = self.rng.as_mut() else {
            return score;
        };
        if score == 0 || score.abs() >= ShapeScore::LIVE_FIVE {
            return score;
        }
        let factor = rng.gen_range(1.0 - JITTER_RATIO..=1.0 + JITTER_RATIO);
        (f64::from(score) * factor).round() as i32
    }
}

impl Default for Jitter {
    fn default() -> Self {
        Self::from_entropy()
    }
}
