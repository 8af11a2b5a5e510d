//! Synthetic comment pool generation
//!
//! Each comment is assembled from phrase banks for a random polarity, topic,
//! tone and length, then tagged with the satisfaction and aspect ranges its
//! polarity is coherent with. Texts are unique within a generated pool.

use crate::generation::phrases::{
    base_sentences, tone_sentence, variations, CLOSINGS, MEDIUM_CLOSINGS, OPENINGS,
};
use crate::types::{
    AspectVariable, CommentLength, CommentTemplate, Polarity, ScoreRange, Tone, Topic,
};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Probability of prefixing a context opening
const OPENING_PROBABILITY: f64 = 0.65;
/// Probability of appending a topic variation
const VARIATION_PROBABILITY: f64 = 0.65;
/// Probability that a short comment is cut down to its first sentence
const SHORT_TRUNCATE_PROBABILITY: f64 = 0.5;
/// Probability that a medium comment receives a closing reflection
const MEDIUM_CLOSING_PROBABILITY: f64 = 0.35;

pub const DEFAULT_MAX_ATTEMPTS_FACTOR: usize = 50;

const TERMINAL: &[char] = &['.', '!', '?'];

fn pick<R: Rng + ?Sized>(items: &[&'static str], rng: &mut R) -> &'static str {
    items.choose(rng).copied().unwrap_or_default()
}

/// Lowercase the first alphabetic character, leaving the rest untouched
fn lowercase_first_letter(text: &str) -> String {
    match text.char_indices().find(|(_, c)| c.is_alphabetic()) {
        Some((idx, c)) => {
            let mut out = String::with_capacity(text.len());
            out.push_str(&text[..idx]);
            out.extend(c.to_lowercase());
            out.push_str(&text[idx + c.len_utf8()..]);
            out
        }
        None => text.to_string(),
    }
}

/// Trim and make sure the text ends in `.`, `!` or `?`
fn ensure_terminal_punctuation(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.ends_with(TERMINAL) {
        trimmed.to_string()
    } else {
        format!("{}.", trimmed)
    }
}

fn append_sentence(text: &str, sentence: &str) -> String {
    format!("{} {}", ensure_terminal_punctuation(text), sentence)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Builds pools of unique comment templates
#[derive(Debug, Clone, Copy)]
pub struct CommentGenerator {
    max_attempts_factor: usize,
}

impl Default for CommentGenerator {
    fn default() -> Self {
        Self {
            max_attempts_factor: DEFAULT_MAX_ATTEMPTS_FACTOR,
        }
    }
}

impl CommentGenerator {
    /// `max_attempts_factor` bounds generation at `target × factor` draws
    pub fn new(max_attempts_factor: usize) -> Self {
        Self {
            max_attempts_factor: max_attempts_factor.max(1),
        }
    }

    /// Assemble one comment text
    pub fn compose<R: Rng + ?Sized>(
        &self,
        polarity: Polarity,
        topic: Topic,
        tone: Tone,
        length: CommentLength,
        rng: &mut R,
    ) -> String {
        let base = pick(base_sentences(topic, polarity), rng).trim();

        let mut comment = if rng.gen_bool(OPENING_PROBABILITY) {
            format!("{} {}", pick(OPENINGS, rng), lowercase_first_letter(base))
        } else {
            base.to_string()
        };

        if let Some(sentence) = tone_sentence(tone) {
            comment = append_sentence(&comment, sentence);
        }

        let topic_variations = variations(topic);
        if !topic_variations.is_empty() && rng.gen_bool(VARIATION_PROBABILITY) {
            comment = append_sentence(&comment, pick(topic_variations, rng));
        }

        match length {
            CommentLength::Short => {
                if rng.gen_bool(SHORT_TRUNCATE_PROBABILITY) {
                    let first = comment.split('.').next().unwrap_or_default().to_string();
                    comment = ensure_terminal_punctuation(&first);
                }
            }
            CommentLength::Medium => {
                if rng.gen_bool(MEDIUM_CLOSING_PROBABILITY) {
                    comment = append_sentence(&comment, pick(&CLOSINGS[..MEDIUM_CLOSINGS], rng));
                }
            }
            CommentLength::Long => {
                comment = append_sentence(&comment, pick(CLOSINGS, rng));
            }
        }

        collapse_whitespace(&ensure_terminal_punctuation(&comment))
    }

    /// Draw one template with random attributes
    pub fn template<R: Rng + ?Sized>(&self, rng: &mut R) -> CommentTemplate {
        let polarity = *Polarity::ALL.choose(rng).unwrap_or(&Polarity::Neutral);
        let topic = *Topic::ALL.choose(rng).unwrap_or(&Topic::General);
        let tone = *Tone::allowed_for(polarity)
            .choose(rng)
            .unwrap_or(&Tone::Formal);
        let length = *CommentLength::ALL
            .choose(rng)
            .unwrap_or(&CommentLength::Medium);

        let text = self.compose(polarity, topic, tone, length, rng);

        let (aspect_variable, aspect_range) = match topic.aspect_metrics().choose(rng) {
            Some(metric) => (AspectVariable::metric(*metric), polarity.coherent_range()),
            None => (AspectVariable::None, ScoreRange::FULL),
        };

        CommentTemplate {
            text,
            polarity,
            satisfaction_range: polarity.coherent_range(),
            aspect_variable,
            aspect_range,
            topic: Some(topic),
            tone: Some(tone),
            length: Some(length),
        }
    }

    /// Generate up to `target` templates with distinct texts.
    ///
    /// Returns fewer than `target` when the attempt budget runs out; that is
    /// logged, not reported as an error.
    pub fn generate<R: Rng + ?Sized>(&self, target: usize, rng: &mut R) -> Vec<CommentTemplate> {
        let max_attempts = target.saturating_mul(self.max_attempts_factor);
        let mut seen: HashSet<String> = HashSet::new();
        let mut pool = Vec::with_capacity(target);
        let mut attempts = 0;

        while pool.len() < target && attempts < max_attempts {
            attempts += 1;
            if attempts % 1000 == 0 {
                debug!(
                    "Comment generation progress: {}/{} after {} attempts",
                    pool.len(),
                    target,
                    attempts
                );
            }

            let template = self.template(rng);
            if !seen.insert(template.text.clone()) {
                continue;
            }
            pool.push(template);
        }

        if pool.len() < target {
            warn!(
                "Only {} unique comments generated out of {} requested ({} attempts)",
                pool.len(),
                target,
                attempts
            );
        } else {
            info!("Generated {} unique comments in {} attempts", pool.len(), attempts);
        }

        pool
    }
}
