//! Weighted sampling on the 1-5 answer scale
//!
//! Real survey answers are rarely uniform. Each profile skews the scale a
//! different way; the survey generator picks profiles per respondent scenario.

use crate::types::matrix_label;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Answer distribution over the 1-5 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleProfile {
    /// Leans towards 4 and 5
    Positive,
    /// Closer to balanced, mild positive lean
    Neutral,
    /// Heavily concentrated on 4 and 5
    SuperPositive,
    /// Concentrated on 1 and 2
    Negative,
    /// Super-positive variant used for matrix (text) answers
    SuperPositiveMatrix,
}

impl ScaleProfile {
    /// Probability of each value 1..=5
    pub fn weights(&self) -> [f64; 5] {
        match self {
            ScaleProfile::Positive => [0.05, 0.10, 0.20, 0.35, 0.30],
            ScaleProfile::Neutral => [0.10, 0.15, 0.25, 0.30, 0.20],
            ScaleProfile::SuperPositive => [0.01, 0.04, 0.10, 0.35, 0.50],
            ScaleProfile::Negative => [0.45, 0.30, 0.15, 0.07, 0.03],
            ScaleProfile::SuperPositiveMatrix => [0.02, 0.05, 0.13, 0.35, 0.45],
        }
    }

    /// Draw a value on the 1-5 scale
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        let weights = self.weights();
        let choices: [(u8, f64); 5] = [
            (1, weights[0]),
            (2, weights[1]),
            (3, weights[2]),
            (4, weights[3]),
            (5, weights[4]),
        ];
        choices
            .choose_weighted(rng, |(_, weight)| *weight)
            .map(|(value, _)| *value)
            .unwrap_or(3)
    }

    /// Draw a matrix label (Pésimo..Genial)
    pub fn sample_label<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        matrix_label(self.sample(rng))
    }
}
