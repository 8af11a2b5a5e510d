//! End-to-end pipeline tests
//!
//! Generate a comment pool and a survey set, persist both to disk, reload
//! them and allocate. Also covers the hand-built scenarios from the
//! matching rules.

use feedsynth_core::config::SurveyConfig;
use feedsynth_core::dataset::{self, SurveySet};
use feedsynth_core::{
    allocate_comments, audit_uniqueness, coherence_score, CommentAllocator, CommentGenerator,
    CommentPool, CommentTemplate, CourseCatalog, ExhaustionPolicy, FeedsynthConfig, Polarity,
    ScoreRange, SurveyGenerator, SurveyRow,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

fn survey_config(count: usize) -> SurveyConfig {
    SurveyConfig {
        count,
        ..SurveyConfig::default()
    }
}

#[test]
fn test_generated_data_round_trip_and_allocate() {
    let dir = TempDir::new().unwrap();
    let comments_path = dir.path().join("comments.json");
    let surveys_path = dir.path().join("surveys.json");
    let output_path = dir.path().join("out").join("annotated.json");

    let mut rng = StdRng::seed_from_u64(42);
    let pool = CommentGenerator::default().generate(300, &mut rng);
    assert_eq!(pool.len(), 300);
    dataset::save_json(&comments_path, &pool).unwrap();

    let generator = SurveyGenerator::new(survey_config(200), CourseCatalog::default()).unwrap();
    let records = generator.generate(&mut rng);
    SurveySet::Records(records).save(&surveys_path).unwrap();

    let mut set = SurveySet::load(&surveys_path).unwrap();
    assert!(matches!(set, SurveySet::Records(_)));
    let mut pool = CommentPool::new(dataset::load_comment_pool(&comments_path).unwrap());

    let report = CommentAllocator::default().allocate(set.rows_mut(), &mut pool, &mut rng);
    assert_eq!(report.assigned_count(), 200);
    assert_eq!(report.empty_count(), 0);
    set.save(&output_path).unwrap();

    let annotated = SurveySet::load(&output_path).unwrap();
    let audit = audit_uniqueness(annotated.rows());
    assert_eq!(audit.total_rows, 200);
    assert_eq!(audit.unique, 200);
    assert!(audit.is_unique());
}

#[test]
fn test_small_pool_leaves_tail_empty() {
    let mut rng = StdRng::seed_from_u64(7);
    let pool = CommentGenerator::default().generate(20, &mut rng);
    let generator = SurveyGenerator::new(survey_config(50), CourseCatalog::default()).unwrap();
    let mut rows: Vec<SurveyRow> = generator
        .generate(&mut rng)
        .into_iter()
        .map(|record| record.survey)
        .collect();

    let (report, leftover) = allocate_comments(&mut rows, pool, &mut rng);

    assert_eq!(report.assigned_count(), 20);
    assert_eq!(report.empty_count(), 30);
    assert_eq!(leftover.distinct_available(), 0);
    assert!(rows[20..].iter().all(|r| r.comment().is_none()));
    assert!(audit_uniqueness(&rows).is_unique());
}

#[test]
fn test_same_seed_same_allocation() {
    let run = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        let pool = CommentGenerator::default().generate(100, &mut rng);
        let generator = SurveyGenerator::new(survey_config(60), CourseCatalog::default()).unwrap();
        let mut rows: Vec<SurveyRow> = generator
            .generate(&mut rng)
            .into_iter()
            .map(|record| record.survey)
            .collect();
        allocate_comments(&mut rows, pool, &mut rng);
        rows
    };

    assert_eq!(run(3), run(3));
}

#[test]
fn test_perfect_match_scores_full_marks() {
    let template = CommentTemplate::new("Excelente dominio del tema.", Polarity::VeryPositive)
        .with_satisfaction_range(ScoreRange::new(4, 5))
        .with_aspect("dominio_materia", ScoreRange::new(4, 5));
    let row = SurveyRow::new("E0001", 5).with_aspect("dominio_materia", "Genial");

    assert_eq!(coherence_score(&template, &row), 100);
}

#[test]
fn test_unspecified_aspect_out_of_range_scores_thirty() {
    let template = CommentTemplate::new("Curso flojo.", Polarity::VeryNegative)
        .with_satisfaction_range(ScoreRange::new(1, 2));
    let row = SurveyRow::new("E0002", 4).with_aspect("dominio_materia", "Bien");

    assert_eq!(coherence_score(&template, &row), 30);
}

#[test]
fn test_single_text_serves_one_row() {
    let mut rows = vec![SurveyRow::new("E1", 4), SurveyRow::new("E2", 4)];
    let pool = vec![CommentTemplate::new("X", Polarity::Positive)];

    let (report, _) = allocate_comments(&mut rows, pool, &mut StdRng::seed_from_u64(1));

    assert_eq!(rows[0].assigned_comment.as_deref(), Some("X"));
    assert_eq!(rows[1].assigned_comment.as_deref(), Some(""));
    assert_eq!(report.empty_count(), 1);
}

#[test]
fn test_reuse_policy_fills_every_row() {
    let mut rows = vec![SurveyRow::new("E1", 4), SurveyRow::new("E2", 4)];
    let mut pool = CommentPool::new(vec![CommentTemplate::new("X", Polarity::Positive)]);

    let report = CommentAllocator::new(ExhaustionPolicy::ReuseBest).allocate(
        rows.iter_mut(),
        &mut pool,
        &mut StdRng::seed_from_u64(1),
    );

    assert_eq!(rows[1].assigned_comment.as_deref(), Some("X"));
    assert_eq!(report.reused_count(), 1);
    assert!(!audit_uniqueness(&rows).is_unique());
}

#[test]
fn test_config_file_drives_generation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("feedsynth.toml");
    std::fs::write(
        &path,
        r#"
seed = 9

[comments]
count = 40

[surveys]
count = 25
start_date = "2024-05-01"
end_date = "2024-05-31"

[allocation]
exhaustion = "reuse_best"
"#,
    )
    .unwrap();

    let config = FeedsynthConfig::from_file(&path).unwrap();
    assert_eq!(config.seed, 9);
    assert_eq!(config.allocation.exhaustion, ExhaustionPolicy::ReuseBest);

    let mut rng = StdRng::seed_from_u64(config.seed);
    let records = SurveyGenerator::new(config.surveys.clone(), CourseCatalog::default())
        .unwrap()
        .generate(&mut rng);
    assert_eq!(records.len(), 25);
    assert!(records
        .iter()
        .all(|r| r.submitted_at.date() >= config.surveys.start_date
            && r.submitted_at.date() <= config.surveys.end_date));
}
