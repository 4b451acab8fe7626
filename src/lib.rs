//! Grade validation, averaging, classification, statistics and rescaling.

pub mod grading;
pub mod output;
pub mod parser;

pub use grading::{
    AsGrade, Category, GradeStatistics, average, classify, is_admissible, rescale, statistics,
};
