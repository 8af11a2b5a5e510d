//! Comment-to-survey matching
//!
//! - **score**: coherence score of a (template, row) pair
//! - **allocator**: greedy, row-ordered assignment with global text uniqueness
//! - **audit**: after-the-fact uniqueness check of annotated rows

pub mod allocator;
pub mod audit;
pub mod score;

pub use allocator::{
    allocate_comments, AllocationReport, Assignment, CommentAllocator, CommentPool,
    ExhaustionPolicy,
};
pub use audit::{audit_uniqueness, LengthStats, UniquenessAudit};
pub use score::{coherence_score, score_breakdown, ScoreBreakdown, MAX_SCORE};
