use grade_stats::output::GradeReport;
use grade_stats::parser::parse_grades;
use grade_stats::{Category, GradeStatistics, average, classify, is_admissible, rescale, statistics};
use proptest::prelude::*;
use serde_json::{Value, json};

#[test]
fn test_full_pipeline() {
    let grades = parse_grades(r#"[7, "8.5", null, 11, "abc", 9.5]"#).expect("Failed to parse grades");
    let stats = statistics(&grades);

    assert_eq!(stats.count, 3);
    assert_eq!(stats.max, Some(9.5));
    assert_eq!(stats.min, Some(7.0));
    assert_eq!(stats.mean, 8.333333333333334);
    assert_eq!(classify(average(&grades)), Category::Approved);
}

#[test]
fn test_mixed_list_report() {
    let grades = parse_grades("4, 5, x, -2, 6").unwrap();
    let report = GradeReport::from_grades(&grades);

    assert_eq!(report.statistics.mean, 5.0);
    assert_eq!(report.category, Category::Remedial);
}

#[test]
fn test_nothing_admissible() {
    let grades = vec![json!(-1), json!(15), json!(20), json!("x")];

    assert_eq!(average(&grades), 0.0);
    assert_eq!(statistics(&grades), GradeStatistics::default());
}

#[test]
fn test_rescale_then_classify() {
    let rescaled = rescale(&[72.0, 45.0, 90.0], 90.0);

    assert_eq!(rescaled, vec![8.0, 5.0, 10.0]);
    assert!(rescaled.iter().all(|g| is_admissible(g)));
    assert_eq!(classify(average(&rescaled)), Category::Approved);
}

fn grade_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        (-20.0f64..30.0).prop_map(|v| json!(v)),
        (-20i64..30).prop_map(|v| json!(v)),
        "[a-z]{0,4}".prop_map(Value::String),
        Just(Value::Null),
        Just(json!([1, 2])),
    ]
}

proptest! {
    /// Property: every number in [0, 10] is admissible.
    #[test]
    fn in_range_is_admissible(x in 0.0f64..=10.0) {
        prop_assert!(is_admissible(&x));
    }

    /// Property: every number outside [0, 10] is rejected.
    #[test]
    fn out_of_range_is_rejected(x in prop_oneof![-1e9f64..-1e-9, 10.000001f64..1e9]) {
        prop_assert!(!is_admissible(&x));
    }

    /// Property: classification is a pure function of its input.
    #[test]
    fn classify_is_idempotent(avg in -5.0f64..15.0) {
        prop_assert_eq!(classify(avg), classify(avg));
    }

    /// Property: statistics count equals the number of admissible entries,
    /// and its mean matches the average of the same collection.
    #[test]
    fn count_matches_admissible_subset(values in prop::collection::vec(grade_value(), 0..40)) {
        let stats = statistics(&values);
        let admissible = values.iter().filter(|v| is_admissible(*v)).count();

        prop_assert_eq!(stats.count, admissible);
        prop_assert_eq!(stats.mean, average(&values));
        if admissible == 0 {
            prop_assert_eq!(stats, GradeStatistics::default());
        } else {
            let (min, max) = (stats.min.unwrap(), stats.max.unwrap());
            prop_assert!(min <= stats.mean + 1e-9 && stats.mean <= max + 1e-9);
            prop_assert!((0.0..=10.0).contains(&min) && (0.0..=10.0).contains(&max));
        }
    }

    /// Property: rescaling preserves length for positive scales and is empty otherwise.
    #[test]
    fn rescale_length(values in prop::collection::vec(0.0f64..500.0, 0..20), scale in -100.0f64..500.0) {
        let rescaled = rescale(&values, scale);
        if scale > 0.0 {
            prop_assert_eq!(rescaled.len(), values.len());
        } else {
            prop_assert!(rescaled.is_empty());
        }
    }
}
