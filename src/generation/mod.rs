//! Synthetic data generation
//!
//! Comment pools and survey sets built from weighted random draws. Both
//! generators take the random source as a parameter so a seeded generator
//! reproduces a dataset exactly.

pub mod comments;
mod phrases;
pub mod surveys;
pub mod weighted;

pub use comments::CommentGenerator;
pub use surveys::{Course, CourseCatalog, Scenario, SurveyGenerator};
pub use weighted::ScaleProfile;
