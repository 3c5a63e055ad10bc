//! Terminal rendering of run summaries and aggregate reports.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::{CleanOutcome, ReportOutcome};

pub fn print_clean_summary(outcome: &CleanOutcome) {
    println!("Output: {}", outcome.output.display());
    let mut table = new_table(vec![header_cell("Metric"), header_cell("Count")]);
    let collapsed = outcome.records_read - outcome.patients;
    table.add_row(vec![Cell::new("Records read"), count_cell(outcome.records_read)]);
    table.add_row(vec![Cell::new("Patients retained"), count_cell(outcome.patients)]);
    table.add_row(vec![Cell::new("Duplicates collapsed"), count_cell(collapsed)]);
    println!("{table}");

    println!("Data quality:");
    println!("{}", quality_table(&outcome.summary));
}

pub fn print_report(report: &ReportOutcome) {
    println!("Patients: {}", report.patients);
    println!("Ages as of: {}", report.as_of);

    println!("Gender distribution:");
    println!("{}", distribution_table("Gender", &report.gender));

    println!("Age distribution:");
    println!("{}", distribution_table("Age band", &report.ages));

    match report.average_stay_hours {
        Some(hours) => println!("Average length of stay: {hours:.1} hours"),
        None => println!("Average length of stay: no complete admission/discharge pairs"),
    }

    println!("Admissions by month:");
    println!("{}", distribution_table("Month", &report.trend));

    println!("Data quality:");
    println!("{}", quality_table(&report.summary));
}

fn distribution_table(label: &str, counts: &std::collections::BTreeMap<String, usize>) -> Table {
    let mut table = new_table(vec![header_cell(label), header_cell("Patients")]);
    for (key, count) in counts {
        table.add_row(vec![Cell::new(key), count_cell(*count)]);
    }
    table
}

fn quality_table(summary: &ecr_report::QualitySummary) -> Table {
    let mut table = new_table(vec![header_cell("Check"), header_cell("Count")]);
    let rows = [
        ("Placeholder ids (P-0000)", summary.placeholder_ids),
        ("Unknown names", summary.unknown_names),
        ("Unknown gender", summary.unknown_gender),
        ("Unknown vital type", summary.unknown_vital_type),
        ("Unknown lab test", summary.unknown_lab_test),
        ("Missing birth dates", summary.missing_birth_dates),
        ("Missing admissions", summary.missing_admissions),
        ("Invalid phone numbers", summary.invalid_phones),
        ("Missing phone numbers", summary.missing_phones),
    ];
    for (label, count) in rows {
        table.add_row(vec![Cell::new(label), flag_cell(count)]);
    }
    table
}

fn new_table(header: Vec<Cell>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(value: usize) -> Cell {
    Cell::new(value)
}

/// Non-zero quality findings stand out; zeros stay dim.
fn flag_cell(value: usize) -> Cell {
    if value > 0 {
        Cell::new(value).fg(Color::Yellow).add_attribute(Attribute::Bold)
    } else {
        Cell::new(value).fg(Color::DarkGrey)
    }
}
