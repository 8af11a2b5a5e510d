//! Core data types for Feedsynth
//!
//! Survey rows, comment templates and the small vocabularies that tie them
//! together. Both sides are plain serde structs so pools and survey sets can
//! be moved around as JSON without a bespoke schema.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Ordered five-point text vocabulary used by the matrix questions of the form
pub const MATRIX_SCALE: [(&str, u8); 5] = [
    ("Pésimo", 1),
    ("Mal", 2),
    ("Regular", 3),
    ("Bien", 4),
    ("Genial", 5),
];

/// Value used when a text answer is not part of [`MATRIX_SCALE`]
pub const NEUTRAL_SCALE_VALUE: f64 = 3.0;

/// Map a matrix label to its position on the 1-5 scale
pub fn matrix_label_value(label: &str) -> Option<u8> {
    MATRIX_SCALE
        .iter()
        .find(|(name, _)| *name == label.trim())
        .map(|(_, value)| *value)
}

/// Matrix label for a 1-5 value, clamped into the scale
pub fn matrix_label(value: u8) -> &'static str {
    let idx = value.clamp(1, 5) as usize - 1;
    MATRIX_SCALE[idx].0
}

/// Coarse sentiment label carried by a comment template
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    VeryNegative,
}

impl Polarity {
    pub const ALL: [Polarity; 5] = [
        Polarity::VeryPositive,
        Polarity::Positive,
        Polarity::Neutral,
        Polarity::Negative,
        Polarity::VeryNegative,
    ];

    /// Satisfaction scores a comment of this polarity is coherent with.
    /// The aspect range uses the same table.
    pub fn coherent_range(&self) -> ScoreRange {
        match self {
            Polarity::VeryPositive => ScoreRange::new(4, 5),
            Polarity::Positive => ScoreRange::new(3, 5),
            Polarity::Neutral => ScoreRange::new(2, 4),
            Polarity::Negative => ScoreRange::new(1, 3),
            Polarity::VeryNegative => ScoreRange::new(1, 2),
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Polarity::VeryPositive => write!(f, "very_positive"),
            Polarity::Positive => write!(f, "positive"),
            Polarity::Neutral => write!(f, "neutral"),
            Polarity::Negative => write!(f, "negative"),
            Polarity::VeryNegative => write!(f, "very_negative"),
        }
    }
}

/// What a comment talks about
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Professor,
    Methodology,
    Content,
    Class,
    Technology,
    Support,
    General,
}

impl Topic {
    pub const ALL: [Topic; 7] = [
        Topic::Professor,
        Topic::Methodology,
        Topic::Content,
        Topic::Class,
        Topic::Technology,
        Topic::Support,
        Topic::General,
    ];

    /// Aspect metrics a comment on this topic may address.
    /// An empty slice means the topic is not tied to any metric.
    pub fn aspect_metrics(&self) -> &'static [&'static str] {
        match self {
            Topic::Professor => &[
                "preparado_clases",
                "dominio_materia",
                "mantiene_atencion",
                "accesible_y_atiende_consultas",
                "recomendaria_profesor",
            ],
            Topic::Methodology => &[
                "organiza_actividades",
                "contenidos_adecuados",
                "grado_dificultad",
                "conocimientos_utiles_futuro",
            ],
            Topic::Content => &["contenidos_adecuados", "conocimientos_utiles_futuro"],
            Topic::Class => &["clase_duracion", "clase_horario", "clase_conveniencia_dia"],
            Topic::Technology => &[
                "clase_calidad_conexion",
                "clase_calidad_audio",
                "clase_visibilidad_pantalla",
            ],
            Topic::Support => &["velocidad_respuesta", "utilidad_anuncios"],
            Topic::General => &[],
        }
    }
}

/// Register of a generated comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Formal,
    Informal,
    Constructive,
    Complaint,
    Praise,
    Suggestion,
}

impl Tone {
    /// Tones that read naturally with a given polarity
    pub fn allowed_for(polarity: Polarity) -> &'static [Tone] {
        match polarity {
            Polarity::VeryPositive => &[Tone::Formal, Tone::Informal, Tone::Praise],
            Polarity::Positive => &[
                Tone::Formal,
                Tone::Informal,
                Tone::Praise,
                Tone::Constructive,
                Tone::Suggestion,
            ],
            Polarity::Neutral => &[
                Tone::Formal,
                Tone::Informal,
                Tone::Constructive,
                Tone::Suggestion,
            ],
            Polarity::Negative => &[
                Tone::Formal,
                Tone::Informal,
                Tone::Complaint,
                Tone::Constructive,
            ],
            Polarity::VeryNegative => &[Tone::Formal, Tone::Complaint],
        }
    }
}

/// Target length bucket of a generated comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentLength {
    Short,
    Medium,
    Long,
}

impl CommentLength {
    pub const ALL: [CommentLength; 3] =
        [CommentLength::Short, CommentLength::Medium, CommentLength::Long];
}

/// Inclusive integer bounds on the 1-5 scale
///
/// Bounds supplied in the wrong order are widened rather than rejected, so
/// `[5, 3]` behaves like `[3, 5]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: i32,
    pub max: i32,
}

impl ScoreRange {
    pub const FULL: ScoreRange = ScoreRange { min: 1, max: 5 };

    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    fn bounds(&self) -> (f64, f64) {
        let lo = self.min.min(self.max) as f64;
        let hi = self.min.max(self.max) as f64;
        (lo, hi)
    }

    /// Whether `value` lies within the bounds, inclusive
    pub fn contains(&self, value: f64) -> bool {
        let (lo, hi) = self.bounds();
        lo <= value && value <= hi
    }

    /// Distance from `value` to the nearest bound; zero when contained
    pub fn distance(&self, value: f64) -> f64 {
        let (lo, hi) = self.bounds();
        if value < lo {
            lo - value
        } else if value > hi {
            value - hi
        } else {
            0.0
        }
    }
}

impl Default for ScoreRange {
    fn default() -> Self {
        Self::FULL
    }
}

/// Answer recorded for an aspect metric: a number, a matrix label, or
/// anything else an upstream export left behind (booleans, lists, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AspectValue {
    Numeric(f64),
    Text(String),
    Other(serde_json::Value),
}

impl AspectValue {
    /// Position on the 1-5 scale. Numbers pass through unchanged; labels
    /// outside the vocabulary fall back to the neutral midpoint.
    pub fn to_scale(&self) -> f64 {
        match self {
            AspectValue::Numeric(value) if value.is_finite() => *value,
            AspectValue::Numeric(_) => NEUTRAL_SCALE_VALUE,
            AspectValue::Text(label) => matrix_label_value(label)
                .map(f64::from)
                .unwrap_or(NEUTRAL_SCALE_VALUE),
            AspectValue::Other(_) => NEUTRAL_SCALE_VALUE,
        }
    }
}

impl From<u8> for AspectValue {
    fn from(value: u8) -> Self {
        AspectValue::Numeric(value as f64)
    }
}

impl From<&str> for AspectValue {
    fn from(label: &str) -> Self {
        AspectValue::Text(label.to_string())
    }
}

/// Aspect metric a comment addresses, if any.
///
/// Serialized as the metric name, with the sentinel `"none"` for comments
/// that speak about the course in general. `"ninguno"` and blank names are
/// read as `None` too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AspectVariable {
    #[default]
    None,
    Metric(String),
}

impl AspectVariable {
    pub const NONE_SENTINEL: &'static str = "none";

    /// Spellings read as "no metric"
    const NONE_ALIASES: [&'static str; 2] = [Self::NONE_SENTINEL, "ninguno"];

    pub fn metric(name: impl Into<String>) -> Self {
        AspectVariable::Metric(name.into())
    }
}

impl From<String> for AspectVariable {
    fn from(raw: String) -> Self {
        let trimmed = raw.trim();
        let is_none = Self::NONE_ALIASES
            .iter()
            .any(|alias| trimmed.eq_ignore_ascii_case(alias));
        if trimmed.is_empty() || is_none {
            AspectVariable::None
        } else {
            AspectVariable::Metric(trimmed.to_string())
        }
    }
}

impl From<AspectVariable> for String {
    fn from(variable: AspectVariable) -> Self {
        match variable {
            AspectVariable::None => AspectVariable::NONE_SENTINEL.to_string(),
            AspectVariable::Metric(name) => name,
        }
    }
}

/// Pre-generated comment that may be attached to one survey row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentTemplate {
    pub text: String,
    pub polarity: Polarity,
    pub satisfaction_range: ScoreRange,
    #[serde(default)]
    pub aspect_variable: AspectVariable,
    /// Only consulted when `aspect_variable` names a metric
    #[serde(default)]
    pub aspect_range: ScoreRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<Topic>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<CommentLength>,
}

impl CommentTemplate {
    /// Template whose ranges follow its polarity, not tied to any metric
    pub fn new(text: impl Into<String>, polarity: Polarity) -> Self {
        Self {
            text: text.into(),
            polarity,
            satisfaction_range: polarity.coherent_range(),
            aspect_variable: AspectVariable::None,
            aspect_range: ScoreRange::FULL,
            topic: None,
            tone: None,
            length: None,
        }
    }

    pub fn with_aspect(mut self, metric: impl Into<String>, range: ScoreRange) -> Self {
        self.aspect_variable = AspectVariable::metric(metric);
        self.aspect_range = range;
        self
    }

    pub fn with_satisfaction_range(mut self, range: ScoreRange) -> Self {
        self.satisfaction_range = range;
        self
    }

    /// Text used for uniqueness checks
    pub fn key(&self) -> &str {
        self.text.trim()
    }
}

/// One survey answer set, as seen by the comment allocator
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SurveyRow {
    #[serde(default)]
    pub id: String,
    pub satisfaction: i32,
    /// `null` answers are dropped on load, as if the metric was not asked
    #[serde(default, deserialize_with = "deserialize_aspect_values")]
    pub aspect_values: BTreeMap<String, AspectValue>,
    /// Written once by the allocator; an empty string means nothing was left
    #[serde(default)]
    pub assigned_comment: Option<String>,
}

fn deserialize_aspect_values<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, AspectValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: BTreeMap<String, Option<AspectValue>> = BTreeMap::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(metric, value)| value.map(|value| (metric, value)))
        .collect())
}

impl SurveyRow {
    pub fn new(id: impl Into<String>, satisfaction: i32) -> Self {
        Self {
            id: id.into(),
            satisfaction,
            aspect_values: BTreeMap::new(),
            assigned_comment: None,
        }
    }

    pub fn with_aspect(mut self, metric: impl Into<String>, value: impl Into<AspectValue>) -> Self {
        self.aspect_values.insert(metric.into(), value.into());
        self
    }

    pub fn aspect(&self, metric: &str) -> Option<&AspectValue> {
        self.aspect_values.get(metric)
    }

    /// Non-empty assigned comment, if any
    pub fn comment(&self) -> Option<&str> {
        self.assigned_comment
            .as_deref()
            .filter(|text| !text.is_empty())
    }
}

/// How a course is delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassType {
    Online,
    Hybrid,
    InPerson,
}

impl ClassType {
    /// Whether connectivity questions (connection, audio, screen) apply
    pub fn has_remote_component(&self) -> bool {
        matches!(self, ClassType::Online | ClassType::Hybrid)
    }
}

/// Full synthetic feedback record: survey answers plus identifying metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    #[serde(flatten)]
    pub survey: SurveyRow,
    pub user_id: String,
    pub course_id: String,
    pub class_type: ClassType,
    pub submitted_at: NaiveDateTime,
}
