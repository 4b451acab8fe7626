use crate::grading::types::GradeStatistics;
use crate::grading::utility::{admissible_grades, mean};
use crate::grading::validate::AsGrade;

/// Mean of the admissible grades in `values`, or 0.0 if there are none.
pub fn average<I>(values: I) -> f64
where
    I: IntoIterator,
    I::Item: AsGrade,
{
    mean(&admissible_grades(values))
}

/// Computes max, min, mean and count over the admissible grades in `values`.
///
/// With no admissible grades the result is [`GradeStatistics::default`].
pub fn statistics<I>(values: I) -> GradeStatistics
where
    I: IntoIterator,
    I::Item: AsGrade,
{
    let grades = admissible_grades(values);
    if grades.is_empty() {
        return GradeStatistics::default();
    }

    let (min, max) = grades
        .iter()
        .skip(1)
        .fold((grades[0], grades[0]), |(min, max), &g| (min.min(g), max.max(g)));

    GradeStatistics {
        max: Some(max),
        min: Some(min),
        mean: mean(&grades),
        count: grades.len(),
    }
}
