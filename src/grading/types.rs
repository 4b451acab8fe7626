//! Data types produced by the grading functions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::grading::grade::classify;

/// Pass/fail category derived from an average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Approved,
    Remedial,
    Failed,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Approved => "Approved",
            Category::Remedial => "Remedial",
            Category::Failed => "Failed",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary over the admissible grades of a collection.
///
/// The [`Default`] value is the record for a collection with no admissible
/// grades: no max, no min, a mean of zero and a count of zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GradeStatistics {
    pub max: Option<f64>,
    pub min: Option<f64>,
    pub mean: f64,
    pub count: usize,
}

impl GradeStatistics {
    /// Classifies the record's mean.
    pub fn category(&self) -> Category {
        classify(self.mean)
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
