//! CLI entry point for the grade statistics tool.
//!
//! Provides subcommands for checking a single grade, averaging and
//! summarizing grade lists, classifying an average, and rescaling scores
//! onto the 0-10 range. Everything is read from arguments.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use grade_stats::output::{GradeReport, print_json, print_pretty, write_csv};
use grade_stats::parser::{parse_grades, parse_numbers};
use grade_stats::{average, classify, is_admissible, rescale};
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "grade_stats")]
#[command(about = "Validate, average, classify and rescale student grades", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a single value is an admissible grade
    Check {
        #[arg(value_name = "VALUE", allow_hyphen_values = true)]
        value: String,
    },
    /// Average the admissible grades of a list
    Average {
        /// Grades as a JSON array or a comma separated list
        #[arg(value_name = "GRADES", allow_hyphen_values = true)]
        grades: String,
    },
    /// Classify an average as Approved, Remedial or Failed
    Classify {
        #[arg(value_name = "AVERAGE", allow_hyphen_values = true)]
        average: f64,
    },
    /// Compute max, min, mean and count over the admissible grades of a list
    Stats {
        /// Grades as a JSON array or a comma separated list
        #[arg(value_name = "GRADES", allow_hyphen_values = true)]
        grades: String,

        /// Output format for the report
        #[arg(short, long, value_enum, default_value_t = Format::Pretty)]
        format: Format,
    },
    /// Rescale scores from 0..SCALE onto 0..10
    Rescale {
        /// Scores as a comma separated list
        #[arg(value_name = "VALUES", allow_hyphen_values = true)]
        values: String,

        /// Upper bound of the source range
        #[arg(short, long, allow_hyphen_values = true)]
        scale: f64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Pretty,
    Json,
    Csv,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    tracing_subscriber::registry().with(stderr_layer).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { value } => {
            let admissible = is_admissible(value.as_str());
            info!(value = %value, admissible, "Checked grade");
        }
        Commands::Average { grades } => {
            let grades = parse_grades(&grades)?;
            let avg = average(&grades);
            info!(average = avg, category = %classify(avg), "Computed average");
        }
        Commands::Classify { average } => {
            info!(average, category = %classify(average), "Classified average");
        }
        Commands::Stats { grades, format } => {
            let grades = parse_grades(&grades)?;
            let report = GradeReport::from_grades(&grades);

            if report.statistics.is_empty() {
                warn!(entries = grades.len(), "No admissible grades in input");
            }

            match format {
                Format::Pretty => print_pretty(&report),
                Format::Json => print_json(&report)?,
                Format::Csv => write_csv(std::io::stdout().lock(), &report, true)?,
            }
        }
        Commands::Rescale { values, scale } => {
            let values = parse_numbers(&values)?;
            let rescaled = rescale(&values, scale);

            if rescaled.is_empty() && !values.is_empty() {
                warn!(scale, "Scale must be positive, nothing rescaled");
            }

            info!(scale, rescaled = ?rescaled, "Rescaled values");
        }
    }

    Ok(())
}
