//! Coherence scoring between a comment template and a survey row.
//!
//! The score ranks candidates; it is never used as a threshold. Two
//! components add up to at most 100 points:
//!
//! | Component    | In range | One step off | Otherwise |
//! |--------------|----------|--------------|-----------|
//! | Satisfaction | 40       | 20           | 0         |
//! | Aspect       | 60       | 30           | 0         |
//!
//! A template that addresses no aspect metric earns a flat 30 aspect points.
//! A template whose metric is missing from the row earns 0 aspect points for
//! that row only.

use crate::types::{AspectVariable, CommentTemplate, ScoreRange, SurveyRow};
use serde::{Deserialize, Serialize};

pub const SATISFACTION_MATCH: u32 = 40;
pub const SATISFACTION_NEAR: u32 = 20;
pub const ASPECT_MATCH: u32 = 60;
pub const ASPECT_NEAR: u32 = 30;
pub const ASPECT_UNSPECIFIED: u32 = 30;

/// Highest attainable coherence score
pub const MAX_SCORE: u32 = SATISFACTION_MATCH + ASPECT_MATCH;

/// Per-component view of a coherence score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub satisfaction: u32,
    pub aspect: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.satisfaction + self.aspect
    }
}

fn tiered(range: &ScoreRange, value: f64, full: u32, near: u32) -> u32 {
    if range.contains(value) {
        full
    } else if range.distance(value) == 1.0 {
        near
    } else {
        0
    }
}

/// Satisfaction component (0, 20 or 40)
pub fn satisfaction_points(template: &CommentTemplate, row: &SurveyRow) -> u32 {
    tiered(
        &template.satisfaction_range,
        row.satisfaction as f64,
        SATISFACTION_MATCH,
        SATISFACTION_NEAR,
    )
}

/// Aspect component (0, 30 or 60)
pub fn aspect_points(template: &CommentTemplate, row: &SurveyRow) -> u32 {
    match &template.aspect_variable {
        AspectVariable::None => ASPECT_UNSPECIFIED,
        AspectVariable::Metric(name) => match row.aspect(name) {
            Some(value) => tiered(
                &template.aspect_range,
                value.to_scale(),
                ASPECT_MATCH,
                ASPECT_NEAR,
            ),
            None => 0,
        },
    }
}

pub fn score_breakdown(template: &CommentTemplate, row: &SurveyRow) -> ScoreBreakdown {
    ScoreBreakdown {
        satisfaction: satisfaction_points(template, row),
        aspect: aspect_points(template, row),
    }
}

/// Coherence score of `template` for `row`, in `0..=MAX_SCORE`
pub fn coherence_score(template: &CommentTemplate, row: &SurveyRow) -> u32 {
    score_breakdown(template, row).total()
}
