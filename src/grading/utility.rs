use tracing::debug;

use crate::grading::validate::{AsGrade, admissible_grade};

/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Interprets every entry and keeps only the admissible ones, in input order.
pub fn admissible_grades<I>(values: I) -> Vec<f64>
where
    I: IntoIterator,
    I::Item: AsGrade,
{
    let mut seen = 0usize;
    let grades: Vec<f64> = values
        .into_iter()
        .inspect(|_| seen += 1)
        .filter_map(|value| admissible_grade(&value))
        .collect();

    debug!(
        admissible = grades.len(),
        discarded = seen - grades.len(),
        "Filtered grade collection"
    );

    grades
}
