//! Command implementations: wire ingest → core → report.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use tracing::info;

use ecr_core::normalize_and_deduplicate;
use ecr_ingest::read_raw_records_from_path;
use ecr_normalize::PatternLibrary;
use ecr_report::{
    QualitySummary, admission_trend, age_distribution, average_length_of_stay_hours,
    gender_distribution, quality_summary, write_canonical_csv_to_path,
};

use crate::cli::{CleanArgs, ReportArgs};

/// Result of a `clean` run, for the summary table.
pub struct CleanOutcome {
    pub records_read: usize,
    pub patients: usize,
    pub output: PathBuf,
    pub summary: QualitySummary,
}

/// Result of a `report` run, for the aggregate tables.
pub struct ReportOutcome {
    pub patients: usize,
    pub as_of: NaiveDate,
    pub gender: BTreeMap<String, usize>,
    pub ages: BTreeMap<String, usize>,
    pub average_stay_hours: Option<f64>,
    pub trend: BTreeMap<String, usize>,
    pub summary: QualitySummary,
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanOutcome> {
    let raw = read_raw_records_from_path(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let patterns = PatternLibrary::new();
    let dataset = normalize_and_deduplicate(&raw, &patterns);

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    write_canonical_csv_to_path(&dataset, &output)
        .with_context(|| format!("writing {}", output.display()))?;

    let summary = quality_summary(&dataset);
    if args.summary_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    info!(
        records = raw.len(),
        patients = dataset.len(),
        output = %output.display(),
        "clean run complete"
    );
    Ok(CleanOutcome {
        records_read: raw.len(),
        patients: dataset.len(),
        output,
        summary,
    })
}

pub fn run_report(args: &ReportArgs) -> Result<ReportOutcome> {
    let raw = read_raw_records_from_path(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let patterns = PatternLibrary::new();
    let dataset = normalize_and_deduplicate(&raw, &patterns);

    let as_of = args.as_of.unwrap_or_else(|| Utc::now().date_naive());
    Ok(ReportOutcome {
        patients: dataset.len(),
        as_of,
        gender: gender_distribution(&dataset),
        ages: age_distribution(&dataset, as_of),
        average_stay_hours: average_length_of_stay_hours(&dataset),
        trend: admission_trend(&dataset),
        summary: quality_summary(&dataset),
    })
}

/// `patients.csv` becomes `patients_clean.csv` next to the input.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "encounters".to_string());
    input.with_file_name(format!("{stem}_clean.csv"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_sits_next_to_the_input() {
        let output = default_output_path(&PathBuf::from("data/encounters.csv"));
        assert_eq!(output, PathBuf::from("data/encounters_clean.csv"));
    }
}
