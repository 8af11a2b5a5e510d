//! Comment allocation
//!
//! Walks survey rows in the order given and hands each one the best-scoring
//! comment still available. Ties at the top score are broken uniformly at
//! random with the caller's generator, so a seeded generator gives a
//! reproducible allocation.
//!
//! The pool is owned by the caller and mutated in place. Instances are
//! removed one by one, but availability is decided by text: once a text has
//! been handed out, every other instance carrying the same text is skipped.

use crate::matching::score::coherence_score;
use crate::types::{CommentTemplate, Polarity, SurveyRow, Topic};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// What to do for a row once no unused comment text is left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExhaustionPolicy {
    /// Leave the row with an empty comment. Uniqueness always holds.
    #[default]
    LeaveEmpty,

    /// Reuse the best-scoring instance still in the pool, even though its
    /// text was already assigned. Rows only end up empty once the pool holds
    /// no instances at all. Uniqueness no longer holds in this mode.
    ReuseBest,
}

impl std::fmt::Display for ExhaustionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExhaustionPolicy::LeaveEmpty => write!(f, "leave_empty"),
            ExhaustionPolicy::ReuseBest => write!(f, "reuse_best"),
        }
    }
}

impl FromStr for ExhaustionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "leave_empty" | "empty" => Ok(ExhaustionPolicy::LeaveEmpty),
            "reuse_best" | "reuse" => Ok(ExhaustionPolicy::ReuseBest),
            other => Err(format!(
                "unknown exhaustion policy '{}' (expected leave_empty or reuse_best)",
                other
            )),
        }
    }
}

/// Comment templates available for allocation
#[derive(Debug, Clone, Default)]
pub struct CommentPool {
    templates: Vec<CommentTemplate>,
    consumed: HashSet<String>,
}

impl CommentPool {
    pub fn new(templates: Vec<CommentTemplate>) -> Self {
        Self {
            templates,
            consumed: HashSet::new(),
        }
    }

    /// Instances still held by the pool, including ones whose text is consumed
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Whether this instance may still be handed out
    pub fn is_available(&self, template: &CommentTemplate) -> bool {
        let key = template.key();
        !key.is_empty() && !self.consumed.contains(key)
    }

    /// Number of distinct texts that can still be assigned
    pub fn distinct_available(&self) -> usize {
        self.templates
            .iter()
            .filter(|t| self.is_available(t))
            .map(|t| t.key())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Record a text as used without taking an instance (e.g. a comment a
    /// row already carried before allocation)
    pub fn mark_consumed(&mut self, text: &str) {
        let key = text.trim();
        if !key.is_empty() {
            self.consumed.insert(key.to_string());
        }
    }

    pub fn templates(&self) -> &[CommentTemplate] {
        &self.templates
    }

    fn candidates(&self) -> impl Iterator<Item = (usize, &CommentTemplate)> + '_ {
        self.templates
            .iter()
            .enumerate()
            .filter(move |(_, t)| self.is_available(t))
    }

    /// Remove the instance at `index` and mark its text consumed
    fn take(&mut self, index: usize) -> CommentTemplate {
        let template = self.templates.remove(index);
        self.consumed.insert(template.key().to_string());
        template
    }
}

impl From<Vec<CommentTemplate>> for CommentPool {
    fn from(templates: Vec<CommentTemplate>) -> Self {
        Self::new(templates)
    }
}

/// Outcome for a single row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Position of the row in the input sequence
    pub row: usize,
    pub row_id: String,
    /// Assigned text; empty when nothing was available
    pub comment: String,
    pub score: u32,
    pub polarity: Option<Polarity>,
    pub topic: Option<Topic>,
    /// Text had already been assigned to an earlier row
    pub reused: bool,
}

impl Assignment {
    fn empty(row: usize, row_id: &str) -> Self {
        Self {
            row,
            row_id: row_id.to_string(),
            comment: String::new(),
            score: 0,
            polarity: None,
            topic: None,
            reused: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.comment.is_empty()
    }
}

/// Diagnostics for one allocation pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllocationReport {
    pub assignments: Vec<Assignment>,
    /// Rows skipped because they already carried a comment
    pub preassigned: usize,
}

impl AllocationReport {
    pub fn assigned_count(&self) -> usize {
        self.assignments.iter().filter(|a| !a.is_empty()).count()
    }

    pub fn empty_count(&self) -> usize {
        self.assignments.iter().filter(|a| a.is_empty()).count()
    }

    pub fn reused_count(&self) -> usize {
        self.assignments.iter().filter(|a| a.reused).count()
    }

    fn scores(&self) -> impl Iterator<Item = u32> + '_ {
        self.assignments
            .iter()
            .filter(|a| !a.is_empty())
            .map(|a| a.score)
    }

    pub fn mean_score(&self) -> Option<f64> {
        let count = self.assigned_count();
        if count == 0 {
            return None;
        }
        Some(self.scores().map(f64::from).sum::<f64>() / count as f64)
    }

    pub fn min_score(&self) -> Option<u32> {
        self.scores().min()
    }

    pub fn max_score(&self) -> Option<u32> {
        self.scores().max()
    }

    /// How many assigned comments carry each polarity
    pub fn polarity_distribution(&self) -> BTreeMap<Polarity, usize> {
        let mut distribution = BTreeMap::new();
        for polarity in self.assignments.iter().filter_map(|a| a.polarity) {
            *distribution.entry(polarity).or_insert(0) += 1;
        }
        distribution
    }
}

/// Greedy, row-ordered comment allocator
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentAllocator {
    policy: ExhaustionPolicy,
}

impl CommentAllocator {
    pub fn new(policy: ExhaustionPolicy) -> Self {
        Self { policy }
    }

    /// Assign at most one comment to every row that does not carry one yet.
    ///
    /// Rows that already have `assigned_comment` set are left untouched and
    /// their text is marked consumed before any row is processed. That
    /// includes `Some("")` from an earlier run whose pool ran dry, so feeding
    /// annotated output back in never fills those rows. Every other row ends
    /// with `Some(text)`, where `text` is empty if the pool ran dry.
    ///
    /// The template text is stored as given. Uniqueness compares trimmed
    /// text, so `"Bien."` and `" Bien. "` count as the same comment.
    pub fn allocate<'a, I, R>(&self, rows: I, pool: &mut CommentPool, rng: &mut R) -> AllocationReport
    where
        I: IntoIterator<Item = &'a mut SurveyRow>,
        R: Rng + ?Sized,
    {
        let mut rows: Vec<&'a mut SurveyRow> = rows.into_iter().collect();
        let mut report = AllocationReport::default();

        for row in rows.iter().filter(|r| r.assigned_comment.is_some()) {
            if let Some(text) = row.assigned_comment.as_deref() {
                pool.mark_consumed(text);
            }
            report.preassigned += 1;
        }

        debug!(
            "Allocating comments for {} rows from {} templates ({} distinct available, policy {})",
            rows.len() - report.preassigned,
            pool.len(),
            pool.distinct_available(),
            self.policy
        );

        let mut exhausted_logged = false;

        for (position, row) in rows.iter_mut().enumerate() {
            if row.assigned_comment.is_some() {
                continue;
            }

            let assignment = match self.pick_unused(row, pool, rng) {
                Some((index, score)) => {
                    let template = pool.take(index);
                    Assignment {
                        row: position,
                        row_id: row.id.clone(),
                        comment: template.text.clone(),
                        score,
                        polarity: Some(template.polarity),
                        topic: template.topic,
                        reused: false,
                    }
                }
                None => {
                    if !exhausted_logged {
                        warn!(
                            "Comment pool exhausted at row {} ({}); remaining rows use policy {}",
                            position, row.id, self.policy
                        );
                        exhausted_logged = true;
                    }
                    match self.policy {
                        ExhaustionPolicy::LeaveEmpty => Assignment::empty(position, &row.id),
                        ExhaustionPolicy::ReuseBest => Self::pick_reused(row, pool)
                            .map(|(template, score)| Assignment {
                                row: position,
                                row_id: row.id.clone(),
                                comment: template.text.clone(),
                                score,
                                polarity: Some(template.polarity),
                                topic: template.topic,
                                reused: true,
                            })
                            .unwrap_or_else(|| Assignment::empty(position, &row.id)),
                    }
                }
            };

            row.assigned_comment = Some(assignment.comment.clone());
            report.assignments.push(assignment);
        }

        info!(
            "Comment allocation complete: {} assigned, {} empty, {} reused, {} preassigned",
            report.assigned_count(),
            report.empty_count(),
            report.reused_count(),
            report.preassigned
        );

        report
    }

    /// Index and score of an unused candidate with the highest score, ties
    /// broken uniformly at random
    fn pick_unused<R>(&self, row: &SurveyRow, pool: &CommentPool, rng: &mut R) -> Option<(usize, u32)>
    where
        R: Rng + ?Sized,
    {
        let scored: Vec<(usize, u32)> = pool
            .candidates()
            .map(|(index, template)| (index, coherence_score(template, row)))
            .collect();

        let best_score = scored.iter().map(|(_, score)| *score).max()?;
        let best: Vec<(usize, u32)> = scored
            .into_iter()
            .filter(|(_, score)| *score == best_score)
            .collect();

        best.choose(rng).copied()
    }

    /// First instance with the highest score, regardless of consumption
    fn pick_reused<'p>(row: &SurveyRow, pool: &'p CommentPool) -> Option<(&'p CommentTemplate, u32)> {
        let mut best: Option<(&CommentTemplate, u32)> = None;
        for template in pool.templates().iter().filter(|t| !t.key().is_empty()) {
            let score = coherence_score(template, row);
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((template, score));
            }
        }
        best
    }
}

/// Allocate with the canonical policy over an owned set of templates,
/// returning the report and whatever is left of the pool
pub fn allocate_comments<R>(
    rows: &mut [SurveyRow],
    templates: Vec<CommentTemplate>,
    rng: &mut R,
) -> (AllocationReport, CommentPool)
where
    R: Rng + ?Sized,
{
    let mut pool = CommentPool::new(templates);
    let report = CommentAllocator::default().allocate(rows.iter_mut(), &mut pool, rng);
    (report, pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::score::MAX_SCORE;
    use crate::types::ScoreRange;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn positive(text: &str) -> CommentTemplate {
        CommentTemplate::new(text, Polarity::VeryPositive)
    }

    fn negative(text: &str) -> CommentTemplate {
        CommentTemplate::new(text, Polarity::VeryNegative)
    }

    #[test]
    fn test_best_score_wins() {
        let mut rows = vec![SurveyRow::new("E0001", 5), SurveyRow::new("E0002", 1)];
        let templates = vec![negative("Muy mal."), positive("Excelente.")];

        let (report, pool) = allocate_comments(&mut rows, templates, &mut rng());

        assert_eq!(rows[0].assigned_comment.as_deref(), Some("Excelente."));
        assert_eq!(rows[1].assigned_comment.as_deref(), Some("Muy mal."));
        assert_eq!(report.assigned_count(), 2);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_single_comment_serves_only_first_row() {
        let mut rows = vec![SurveyRow::new("E0001", 1), SurveyRow::new("E0002", 5)];
        let (report, _) = allocate_comments(&mut rows, vec![positive("X")], &mut rng());

        assert_eq!(rows[0].assigned_comment.as_deref(), Some("X"));
        assert_eq!(rows[1].assigned_comment.as_deref(), Some(""));
        assert_eq!(report.empty_count(), 1);
    }

    #[test]
    fn test_duplicate_texts_are_used_once() {
        let mut rows: Vec<SurveyRow> = (0..4).map(|i| SurveyRow::new(format!("E{i}"), 5)).collect();
        let templates = vec![positive("A"), positive("A "), positive("B"), positive("A")];

        let (report, pool) = allocate_comments(&mut rows, templates, &mut rng());

        let mut assigned: Vec<&str> = rows
            .iter()
            .filter_map(|r| r.comment())
            .map(str::trim)
            .collect();
        assigned.sort();
        assert_eq!(assigned, vec!["A", "B"]);
        assert_eq!(report.empty_count(), 2);
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.distinct_available(), 0);
    }

    #[test]
    fn test_empty_pool_leaves_rows_empty() {
        let mut rows = vec![SurveyRow::new("E0001", 3)];
        let (report, _) = allocate_comments(&mut rows, Vec::new(), &mut rng());

        assert_eq!(rows[0].assigned_comment.as_deref(), Some(""));
        assert_eq!(report.assigned_count(), 0);
        assert!(report.mean_score().is_none());
    }

    #[test]
    fn test_blank_texts_are_never_assigned() {
        let mut rows = vec![SurveyRow::new("E0001", 3)];
        let (_, _) = allocate_comments(&mut rows, vec![positive("   ")], &mut rng());
        assert_eq!(rows[0].assigned_comment.as_deref(), Some(""));
    }

    #[test]
    fn test_zero_score_ties_still_assign() {
        let mut rows = vec![SurveyRow::new("E0001", 5)];
        let templates = vec![
            CommentTemplate::new("a", Polarity::VeryNegative)
                .with_aspect("puntualidad", ScoreRange::new(1, 2)),
            CommentTemplate::new("b", Polarity::VeryNegative)
                .with_aspect("puntualidad", ScoreRange::new(1, 2)),
        ];
        let (report, _) = allocate_comments(&mut rows, templates, &mut rng());

        assert!(rows[0].comment().is_some());
        assert_eq!(report.assignments[0].score, 0);
    }

    #[test]
    fn test_seeded_tie_break_is_reproducible() {
        let templates: Vec<CommentTemplate> =
            (0..20).map(|i| positive(&format!("Comentario {i}"))).collect();

        let run = |seed| {
            let mut rows: Vec<SurveyRow> =
                (0..5).map(|i| SurveyRow::new(format!("E{i}"), 5)).collect();
            let mut rng = StdRng::seed_from_u64(seed);
            allocate_comments(&mut rows, templates.clone(), &mut rng);
            rows.into_iter()
                .map(|r| r.assigned_comment.unwrap_or_default())
                .collect::<Vec<_>>()
        };

        assert_eq!(run(7), run(7));
    }

    #[test]
    fn test_tie_break_spreads_over_tied_candidates() {
        let texts = ["Uno.", "Dos.", "Tres.", "Cuatro."];
        let mut wins: HashMap<String, usize> = HashMap::new();

        for seed in 0..400 {
            let mut rows = vec![SurveyRow::new("E0001", 5)];
            let templates = texts.iter().map(|t| positive(t)).collect();
            let (report, _) =
                allocate_comments(&mut rows, templates, &mut StdRng::seed_from_u64(seed));

            assert_eq!(report.assignments[0].score, MAX_SCORE - 30);
            *wins.entry(report.assignments[0].comment.clone()).or_insert(0) += 1;
        }

        assert_eq!(wins.len(), texts.len());
        // 100 expected per text
        assert!(wins.values().all(|&count| count > 50 && count < 160));
    }

    #[test]
    fn test_padded_text_is_stored_verbatim() {
        let mut rows = vec![SurveyRow::new("E0001", 5), SurveyRow::new("E0002", 5)];
        let templates = vec![positive("  Buen curso.  ")];

        let (report, _) = allocate_comments(&mut rows, templates, &mut rng());

        assert_eq!(rows[0].assigned_comment.as_deref(), Some("  Buen curso.  "));
        assert_eq!(report.assignments[0].comment, "  Buen curso.  ");
        assert_eq!(rows[1].assigned_comment.as_deref(), Some(""));
    }

    #[test]
    fn test_padded_duplicate_is_not_reassigned() {
        let mut rows = vec![SurveyRow::new("E0001", 5), SurveyRow::new("E0002", 5)];
        let templates = vec![positive("  Buen curso.  "), positive("Buen curso.")];

        allocate_comments(&mut rows, templates, &mut rng());

        assert_eq!(rows.iter().filter(|r| r.comment().is_some()).count(), 1);
        assert_eq!(rows[1].assigned_comment.as_deref(), Some(""));
    }

    #[test]
    fn test_empty_rows_from_earlier_run_stay_empty() {
        let mut drained = SurveyRow::new("E0001", 5);
        drained.assigned_comment = Some(String::new());
        let mut rows = vec![drained, SurveyRow::new("E0002", 5)];

        let (report, pool) = allocate_comments(&mut rows, vec![positive("Nuevo.")], &mut rng());

        assert_eq!(rows[0].assigned_comment.as_deref(), Some(""));
        assert_eq!(rows[1].assigned_comment.as_deref(), Some("Nuevo."));
        assert_eq!(report.preassigned, 1);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_preassigned_rows_are_kept_and_their_text_consumed() {
        let mut first = SurveyRow::new("E0001", 5);
        first.assigned_comment = Some("Excelente.".to_string());
        let mut rows = vec![first, SurveyRow::new("E0002", 5)];

        let (report, _) =
            allocate_comments(&mut rows, vec![positive("Excelente.")], &mut rng());

        assert_eq!(rows[0].assigned_comment.as_deref(), Some("Excelente."));
        assert_eq!(rows[1].assigned_comment.as_deref(), Some(""));
        assert_eq!(report.preassigned, 1);
        assert_eq!(report.assignments.len(), 1);
        assert_eq!(report.assignments[0].row, 1);
    }

    #[test]
    fn test_reuse_policy_falls_back_to_consumed_duplicates() {
        let mut rows = vec![SurveyRow::new("E0001", 5), SurveyRow::new("E0002", 1)];
        let mut pool = CommentPool::new(vec![positive("Excelente."), positive("Excelente.")]);

        let report = CommentAllocator::new(ExhaustionPolicy::ReuseBest).allocate(
            rows.iter_mut(),
            &mut pool,
            &mut rng(),
        );

        assert_eq!(rows[1].assigned_comment.as_deref(), Some("Excelente."));
        assert_eq!(report.reused_count(), 1);
        assert!(report.assignments[1].reused);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_reuse_policy_with_drained_pool_is_empty() {
        let mut rows = vec![SurveyRow::new("E0001", 5), SurveyRow::new("E0002", 5)];
        let mut pool = CommentPool::new(vec![positive("Única.")]);

        let report = CommentAllocator::new(ExhaustionPolicy::ReuseBest).allocate(
            rows.iter_mut(),
            &mut pool,
            &mut rng(),
        );

        assert_eq!(rows[1].assigned_comment.as_deref(), Some(""));
        assert_eq!(report.reused_count(), 0);
    }

    #[test]
    fn test_report_statistics() {
        let mut rows = vec![
            SurveyRow::new("E0001", 5),
            SurveyRow::new("E0002", 1),
            SurveyRow::new("E0003", 3),
        ];
        let templates = vec![positive("Bien."), negative("Mal.")];
        let (report, _) = allocate_comments(&mut rows, templates, &mut rng());

        assert_eq!(report.max_score(), Some(MAX_SCORE - 30));
        assert_eq!(report.min_score(), Some(70));
        assert_eq!(report.mean_score(), Some(70.0));
        let distribution = report.polarity_distribution();
        assert_eq!(distribution.get(&Polarity::VeryPositive), Some(&1));
        assert_eq!(distribution.get(&Polarity::VeryNegative), Some(&1));
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!(
            "reuse-best".parse::<ExhaustionPolicy>().unwrap(),
            ExhaustionPolicy::ReuseBest
        );
        assert_eq!(
            "leave_empty".parse::<ExhaustionPolicy>().unwrap(),
            ExhaustionPolicy::LeaveEmpty
        );
        assert!("sometimes".parse::<ExhaustionPolicy>().is_err());
        assert_eq!(ExhaustionPolicy::default().to_string(), "leave_empty");
    }
}
