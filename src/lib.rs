//! Feedsynth - Synthetic Course Feedback with Coherent Comments
//!
//! Builds correlated synthetic survey data for course-feedback analysis and
//! attaches a free-text comment to each survey row:
//! - Weighted generation of survey answers per respondent scenario
//! - Generation of a pool of unique, polarity-tagged comment templates
//! - Greedy matching that gives every row the most coherent comment left,
//!   never handing out the same text twice
//! - Uniqueness audit of the annotated output
//!
//! # Architecture
//!
//! - **Types**: Core data structures (SurveyRow, CommentTemplate, ...)
//! - **Matching**: Coherence scoring, allocation and audit
//! - **Generation**: Comment and survey generators
//! - **Config / Dataset**: TOML configuration and JSON persistence
//!
//! # Example
//!
//! ```ignore
//! use feedsynth_core::{allocate_comments, CommentGenerator, SurveyRow};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let pool = CommentGenerator::default().generate(1500, &mut rng);
//!
//! let mut rows = vec![SurveyRow::new("E0001", 4).with_aspect("dominio_materia", "Bien")];
//! let (report, _leftover) = allocate_comments(&mut rows, pool, &mut rng);
//! assert_eq!(report.assigned_count(), 1);
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod generation;
pub mod matching;
pub mod types;

// Re-export commonly used types
pub use config::FeedsynthConfig;
pub use error::{FeedsynthError, Result};
pub use generation::{CommentGenerator, CourseCatalog, SurveyGenerator};
pub use matching::{
    allocate_comments, audit_uniqueness, coherence_score, AllocationReport, CommentAllocator,
    CommentPool, ExhaustionPolicy, UniquenessAudit,
};
pub use types::{
    AspectValue, AspectVariable, CommentTemplate, FeedbackRecord, Polarity, ScoreRange, SurveyRow,
};
