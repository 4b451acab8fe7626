//! Grade validation, aggregation and classification.
//!
//! Every function here is pure: collections go in, a fresh value comes out.
//! Inadmissible entries (out of `[0, 10]` or not interpretable as a number)
//! are filtered out rather than reported as errors.

pub mod grade;
pub mod rescale;
pub mod stats;
pub mod types;
pub mod utility;
pub mod validate;

pub use grade::{APPROVAL_THRESHOLD, REMEDIAL_THRESHOLD, classify};
pub use rescale::rescale;
pub use stats::{average, statistics};
pub use types::{Category, GradeStatistics};
pub use validate::{AsGrade, GRADE_MAX, GRADE_MIN, is_admissible};
