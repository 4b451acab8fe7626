//! Report construction and formatting for grade statistics.
//!
//! Supports pretty-printing, JSON serialization, and CSV rows written to any
//! [`Write`] sink.

use anyhow::Result;
use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info};

use crate::grading::{AsGrade, Category, GradeStatistics, statistics};

/// Statistics for one grade collection together with the category of its mean.
#[derive(Debug, Clone, Serialize)]
pub struct GradeReport {
    pub generated_at: DateTime<Utc>,
    pub statistics: GradeStatistics,
    pub category: Category,
}

impl GradeReport {
    pub fn from_grades<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsGrade,
    {
        Self::from_statistics(statistics(values))
    }

    pub fn from_statistics(statistics: GradeStatistics) -> Self {
        GradeReport {
            generated_at: Utc::now(),
            category: statistics.category(),
            statistics,
        }
    }
}

/// Flat CSV shape of a [`GradeReport`]; absent min/max become empty fields.
#[derive(Serialize)]
struct ReportRow {
    generated_at: DateTime<Utc>,
    count: usize,
    min: Option<f64>,
    max: Option<f64>,
    mean: f64,
    category: Category,
}

impl From<&GradeReport> for ReportRow {
    fn from(report: &GradeReport) -> Self {
        ReportRow {
            generated_at: report.generated_at,
            count: report.statistics.count,
            min: report.statistics.min,
            max: report.statistics.max,
            mean: report.statistics.mean,
            category: report.category,
        }
    }
}

/// Logs a report using Rust's debug pretty-print format.
pub fn print_pretty(report: &GradeReport) {
    info!("{:#?}", report);
}

/// Logs a report as pretty-printed JSON.
pub fn print_json(report: &GradeReport) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Writes a report as a single CSV row, preceded by a header line when
/// `with_headers` is set.
pub fn write_csv<W: Write>(writer: W, report: &GradeReport, with_headers: bool) -> Result<()> {
    debug!(with_headers, "Writing CSV report row");

    let mut writer = WriterBuilder::new()
        .has_headers(with_headers)
        .from_writer(writer);

    writer.serialize(ReportRow::from(report))?;
    writer.flush()?;

    Ok(())
}
