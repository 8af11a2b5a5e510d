//! Synthetic survey generation
//!
//! Respondents fall into three scenarios. Superfans and critics have their
//! overall satisfaction pinned to 5 and 1 and rate every metric with a
//! matching skew; balanced respondents derive satisfaction from the mean of
//! the core teaching metrics plus gaussian noise.

use crate::config::SurveyConfig;
use crate::error::{FeedsynthError, Result};
use crate::generation::weighted::ScaleProfile;
use crate::types::{AspectValue, ClassType, FeedbackRecord, SurveyRow};
use chrono::{Duration, NaiveDateTime};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Whether a metric follows the respondent's positive or neutral profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lean {
    Positive,
    Neutral,
}

const NUMERIC_METRICS: &[(&str, Lean)] = &[
    ("preparado_clases", Lean::Positive),
    ("dominio_materia", Lean::Positive),
    ("mantiene_atencion", Lean::Positive),
    ("relaciona_con_ejemplos", Lean::Positive),
    ("ejemplos_mundo_profesional", Lean::Positive),
    ("accesible_y_atiende_consultas", Lean::Positive),
    ("fomenta_colaboracion", Lean::Positive),
    ("puntualidad", Lean::Positive),
    ("referencias_en_redes", Lean::Neutral),
    ("recomendaria_profesor", Lean::Positive),
    ("organiza_actividades", Lean::Positive),
    ("contenidos_adecuados", Lean::Positive),
    ("grado_dificultad", Lean::Neutral),
    ("conocimientos_utiles_futuro", Lean::Positive),
    ("velocidad_respuesta", Lean::Positive),
    ("utilidad_anuncios", Lean::Neutral),
];

const MATRIX_METRICS: &[(&str, Lean)] = &[
    ("clase_duracion", Lean::Positive),
    ("clase_horario", Lean::Positive),
    ("clase_conveniencia_dia", Lean::Positive),
];

/// Only asked when the course has a remote component
const REMOTE_MATRIX_METRICS: &[(&str, Lean)] = &[
    ("clase_calidad_conexion", Lean::Neutral),
    ("clase_visibilidad_pantalla", Lean::Positive),
    ("clase_calidad_audio", Lean::Positive),
];

/// Metrics whose mean drives a balanced respondent's satisfaction
const SATISFACTION_DRIVERS: &[&str] = &[
    "preparado_clases",
    "dominio_materia",
    "mantiene_atencion",
    "relaciona_con_ejemplos",
    "accesible_y_atiende_consultas",
    "recomendaria_profesor",
    "organiza_actividades",
    "contenidos_adecuados",
    "conocimientos_utiles_futuro",
];

/// Respondent archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    Superfan,
    Critic,
    Balanced,
}

impl Scenario {
    fn numeric_profile(&self, lean: Lean) -> ScaleProfile {
        match (self, lean) {
            (Scenario::Superfan, Lean::Positive) => ScaleProfile::SuperPositive,
            (Scenario::Superfan, Lean::Neutral) => ScaleProfile::Positive,
            (Scenario::Critic, _) => ScaleProfile::Negative,
            (Scenario::Balanced, Lean::Positive) => ScaleProfile::Positive,
            (Scenario::Balanced, Lean::Neutral) => ScaleProfile::Neutral,
        }
    }

    fn matrix_profile(&self, lean: Lean) -> ScaleProfile {
        match (self, lean) {
            (Scenario::Superfan, _) => ScaleProfile::SuperPositiveMatrix,
            (Scenario::Critic, _) => ScaleProfile::Negative,
            (Scenario::Balanced, Lean::Positive) => ScaleProfile::Positive,
            (Scenario::Balanced, Lean::Neutral) => ScaleProfile::Neutral,
        }
    }

    fn pinned_satisfaction(&self) -> Option<i32> {
        match self {
            Scenario::Superfan => Some(5),
            Scenario::Critic => Some(1),
            Scenario::Balanced => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub class_type: ClassType,
}

impl Course {
    /// Course from a catalog modality label. Anything mentioning "online" is
    /// online; every other modality is delivered as hybrid.
    pub fn from_modality(id: impl Into<String>, modality: &str) -> Self {
        let class_type = if modality.to_lowercase().contains("online") {
            ClassType::Online
        } else {
            ClassType::Hybrid
        };
        Self {
            id: id.into().trim().to_uppercase(),
            class_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCatalog {
    courses: Vec<Course>,
}

impl CourseCatalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl Default for CourseCatalog {
    /// C0010..C0031 with alternating online and in-person modality
    fn default() -> Self {
        let courses = (10..32)
            .enumerate()
            .map(|(i, n)| {
                let modality = if i % 2 == 0 { "Online" } else { "Presencial" };
                Course::from_modality(format!("C{:04}", n), modality)
            })
            .collect();
        Self { courses }
    }
}

pub struct SurveyGenerator {
    config: SurveyConfig,
    catalog: CourseCatalog,
    noise: Normal<f64>,
}

impl SurveyGenerator {
    pub fn new(config: SurveyConfig, catalog: CourseCatalog) -> Result<Self> {
        config.validate()?;
        if catalog.is_empty() {
            return Err(FeedsynthError::InvalidInput(
                "course catalog is empty".to_string(),
            ));
        }
        let noise = Normal::new(0.0, config.satisfaction_noise)
            .map_err(|e| FeedsynthError::InvalidInput(format!("satisfaction noise: {}", e)))?;

        Ok(Self {
            config,
            catalog,
            noise,
        })
    }

    /// Shuffled scenario per respondent
    fn scenarios<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Scenario> {
        let n = self.config.count;
        let superfans = (n as f64 * self.config.superfan_share) as usize;
        let critics = ((n as f64 * self.config.critic_share) as usize).min(n - superfans);

        let mut scenarios = Vec::with_capacity(n);
        scenarios.extend(std::iter::repeat(Scenario::Superfan).take(superfans));
        scenarios.extend(std::iter::repeat(Scenario::Critic).take(critics));
        scenarios.resize(n, Scenario::Balanced);
        scenarios.shuffle(rng);
        scenarios
    }

    /// Sorted timestamps, uniform to the second over the inclusive window
    fn timestamps<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<NaiveDateTime> {
        let start = self.config.start_date.and_time(chrono::NaiveTime::MIN);
        let end = self.config.end_date.and_time(chrono::NaiveTime::MIN);
        let span = (end - start).num_seconds().max(0);

        let mut stamps: Vec<NaiveDateTime> = (0..self.config.count)
            .map(|_| start + Duration::seconds(rng.gen_range(0..=span)))
            .collect();
        stamps.sort();
        stamps
    }

    fn survey_row<R: Rng + ?Sized>(
        &self,
        id: String,
        scenario: Scenario,
        class_type: ClassType,
        rng: &mut R,
    ) -> SurveyRow {
        let mut row = SurveyRow::new(id, 0);

        for (metric, lean) in NUMERIC_METRICS {
            let value = scenario.numeric_profile(*lean).sample(rng);
            row.aspect_values
                .insert(metric.to_string(), AspectValue::from(value));
        }

        let remote: &[(&str, Lean)] = if class_type.has_remote_component() {
            REMOTE_MATRIX_METRICS
        } else {
            &[]
        };
        for (metric, lean) in MATRIX_METRICS.iter().chain(remote) {
            let label = scenario.matrix_profile(*lean).sample_label(rng);
            row.aspect_values
                .insert(metric.to_string(), AspectValue::from(label));
        }

        row.satisfaction = match scenario.pinned_satisfaction() {
            Some(pinned) => pinned,
            None => {
                let mean = SATISFACTION_DRIVERS
                    .iter()
                    .filter_map(|metric| row.aspect(metric))
                    .map(AspectValue::to_scale)
                    .sum::<f64>()
                    / SATISFACTION_DRIVERS.len() as f64;
                let noisy = (mean + self.noise.sample(rng)).round();
                noisy.clamp(2.0, 5.0) as i32
            }
        };

        row
    }

    /// Generate the configured number of feedback records
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<FeedbackRecord> {
        let n = self.config.count;
        let scenarios = self.scenarios(rng);
        let timestamps = self.timestamps(rng);

        let mut user_ids: Vec<String> = (1..=n).map(|i| format!("U{:04}", i)).collect();
        user_ids.shuffle(rng);

        let courses = self.catalog.courses();
        let mut records = Vec::with_capacity(n);

        for (i, ((scenario, submitted_at), user_id)) in scenarios
            .into_iter()
            .zip(timestamps)
            .zip(user_ids)
            .enumerate()
        {
            let course = &courses[rng.gen_range(0..courses.len())];
            let survey = self.survey_row(format!("E{:04}", i + 1), scenario, course.class_type, rng);

            records.push(FeedbackRecord {
                survey,
                user_id,
                course_id: course.id.clone(),
                class_type: course.class_type,
                submitted_at,
            });
        }

        debug!(
            "Satisfaction extremes: {} rows at 5, {} rows at 1",
            records.iter().filter(|r| r.survey.satisfaction == 5).count(),
            records.iter().filter(|r| r.survey.satisfaction == 1).count()
        );
        info!("Generated {} survey records", records.len());

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn config(count: usize) -> SurveyConfig {
        SurveyConfig {
            count,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            ..SurveyConfig::default()
        }
    }

    fn generate(count: usize, seed: u64) -> Vec<FeedbackRecord> {
        let generator = SurveyGenerator::new(config(count), CourseCatalog::default()).unwrap();
        generator.generate(&mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_default_catalog() {
        let catalog = CourseCatalog::default();
        assert_eq!(catalog.courses().len(), 22);
        assert_eq!(catalog.courses()[0].id, "C0010");
        assert_eq!(catalog.courses()[0].class_type, ClassType::Online);
        assert_eq!(catalog.courses()[1].class_type, ClassType::Hybrid);
    }

    #[test]
    fn test_ids_and_order() {
        let records = generate(100, 1);
        assert_eq!(records.len(), 100);
        assert_eq!(records[0].survey.id, "E0001");
        assert_eq!(records[99].survey.id, "E0100");

        let users: HashSet<&str> = records.iter().map(|r| r.user_id.as_str()).collect();
        assert_eq!(users.len(), 100);

        assert!(records
            .windows(2)
            .all(|w| w[0].submitted_at <= w[1].submitted_at));
    }

    #[test]
    fn test_timestamps_within_window() {
        let records = generate(200, 2);
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        for record in &records {
            assert!(record.submitted_at >= start && record.submitted_at <= end);
        }
    }

    #[test]
    fn test_scenario_mix() {
        let records = generate(1000, 3);
        let fives = records.iter().filter(|r| r.survey.satisfaction == 5).count();
        let ones = records.iter().filter(|r| r.survey.satisfaction == 1).count();

        // superfans pin exactly 300 fives; balanced rows may add more.
        assert!(fives >= 300);
        // only critics can score 1, balanced satisfaction is clamped to 2..=5
        assert_eq!(ones, 100);
        assert!(records
            .iter()
            .all(|r| (1..=5).contains(&r.survey.satisfaction)));
    }

    #[test]
    fn test_aspects_follow_class_type() {
        let catalog = CourseCatalog::new(vec![Course {
            id: "C0100".to_string(),
            class_type: ClassType::InPerson,
        }]);
        let generator = SurveyGenerator::new(config(20), catalog).unwrap();
        let records = generator.generate(&mut StdRng::seed_from_u64(4));

        for record in &records {
            assert!(record.survey.aspect("clase_calidad_audio").is_none());
            assert!(matches!(
                record.survey.aspect("clase_horario"),
                Some(AspectValue::Text(_))
            ));
            assert!(matches!(
                record.survey.aspect("dominio_materia"),
                Some(AspectValue::Numeric(_))
            ));
        }

        let remote = generate(20, 4);
        assert!(remote
            .iter()
            .all(|r| r.survey.aspect("clase_calidad_audio").is_some()));
    }

    #[test]
    fn test_rows_start_without_comment() {
        assert!(generate(10, 5)
            .iter()
            .all(|r| r.survey.assigned_comment.is_none()));
    }

    #[test]
    fn test_generation_is_reproducible() {
        assert_eq!(generate(50, 6), generate(50, 6));
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        let result = SurveyGenerator::new(config(10), CourseCatalog::new(Vec::new()));
        assert!(matches!(result, Err(FeedsynthError::InvalidInput(_))));
    }

    #[test]
    fn test_invalid_window_is_rejected() {
        let mut cfg = config(10);
        cfg.end_date = cfg.start_date;
        let result = SurveyGenerator::new(cfg, CourseCatalog::default());
        assert!(matches!(result, Err(FeedsynthError::Config(_))));
    }
}
