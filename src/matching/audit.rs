//! Uniqueness audit over annotated survey rows

use crate::types::SurveyRow;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Character-length statistics of the non-empty comments
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LengthStats {
    pub mean: f64,
    pub min: usize,
    pub max: usize,
    pub median: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniquenessAudit {
    pub total_rows: usize,
    pub non_empty: usize,
    pub unique: usize,
    pub empty: usize,
    /// Texts assigned more than once, most repeated first
    pub duplicates: Vec<(String, usize)>,
    pub lengths: Option<LengthStats>,
}

impl UniquenessAudit {
    pub fn is_unique(&self) -> bool {
        self.duplicates.is_empty()
    }

    /// Rows carrying a text that another row also carries, beyond the first
    pub fn duplicate_rows(&self) -> usize {
        self.non_empty - self.unique
    }
}

/// Check that no comment text is shared by two rows
pub fn audit_uniqueness<'a, I>(rows: I) -> UniquenessAudit
where
    I: IntoIterator<Item = &'a SurveyRow>,
{
    let mut total_rows = 0;
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut lengths: Vec<usize> = Vec::new();

    for row in rows {
        total_rows += 1;
        if let Some(text) = row.comment() {
            *counts.entry(text).or_insert(0) += 1;
            lengths.push(text.chars().count());
        }
    }

    let non_empty = lengths.len();
    let mut duplicates: Vec<(String, usize)> = counts
        .iter()
        .filter(|(_, count)| **count > 1)
        .map(|(text, count)| (text.to_string(), *count))
        .collect();
    duplicates.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    UniquenessAudit {
        total_rows,
        non_empty,
        unique: counts.len(),
        empty: total_rows - non_empty,
        duplicates,
        lengths: length_stats(&mut lengths),
    }
}

fn length_stats(lengths: &mut [usize]) -> Option<LengthStats> {
    if lengths.is_empty() {
        return None;
    }
    lengths.sort_unstable();

    let n = lengths.len();
    let median = if n % 2 == 1 {
        lengths[n / 2] as f64
    } else {
        (lengths[n / 2 - 1] + lengths[n / 2]) as f64 / 2.0
    };

    Some(LengthStats {
        mean: lengths.iter().sum::<usize>() as f64 / n as f64,
        min: lengths[0],
        max: lengths[n - 1],
        median,
    })
}
