use crate::grading::types::Category;

/// Averages at or above this are approved.
pub const APPROVAL_THRESHOLD: f64 = 7.0;
/// Averages at or above this, but below [`APPROVAL_THRESHOLD`], go to remedial.
pub const REMEDIAL_THRESHOLD: f64 = 5.0;

/// Converts an average into a [`Category`].
///
/// | Range           | Category |
/// |-----------------|----------|
/// | >= 7            | Approved |
/// | >= 5 and < 7    | Remedial |
/// | < 5             | Failed   |
///
/// No validation is done on `average`; NaN compares false everywhere and
/// lands in `Failed`.
pub fn classify(average: f64) -> Category {
    match average {
        a if a >= APPROVAL_THRESHOLD => Category::Approved,
        a if a >= REMEDIAL_THRESHOLD => Category::Remedial,
        _ => Category::Failed,
    }
}
