//! Terminal rendering for reports and listings

use callqueue_core::application::{CorrectionMode, CorrectionReport, QueueOutcome};
use callqueue_core::domain::QueueSummary;
use colored::Colorize;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct OutcomeRow {
    id: String,
    outcome: String,
    detail: String,
}

#[derive(Tabled)]
struct QueueRow {
    id: String,
    name: String,
    extension: String,
}

fn outcome_row(id: &str, outcome: &QueueOutcome) -> OutcomeRow {
    OutcomeRow {
        id: id.to_string(),
        outcome: outcome.label().to_string(),
        detail: outcome.error().map(ToString::to_string).unwrap_or_default(),
    }
}

pub fn render_report(report: &CorrectionReport, mode: CorrectionMode) -> String {
    let mut out = String::new();

    if let Some(err) = &report.listing_error {
        out.push_str(&format!("{} {}\n", "✗ Could not list call queues:".red().bold(), err));
        return out;
    }

    if report.is_empty() {
        out.push_str(&format!("{}\n", "No call queues found".yellow()));
        return out;
    }

    let rows: Vec<_> = report
        .queues
        .iter()
        .map(|q| outcome_row(&q.id, &q.outcome))
        .collect();
    out.push_str(&Table::new(rows).to_string());
    out.push('\n');

    let verb = match mode {
        CorrectionMode::Apply => "corrected",
        CorrectionMode::DryRun => "to correct",
    };
    let summary = format!(
        "{} {}, {} unchanged, {} failed",
        report.corrected_count(),
        verb,
        report.unchanged_count(),
        report.failure_count()
    );

    if report.has_failures() {
        out.push_str(&format!("{} {}\n", "✗".red(), summary.red().bold()));
    } else {
        out.push_str(&format!("{} {}\n", "✓".green(), summary.green().bold()));
    }
    out
}

pub fn render_queues(queues: &[QueueSummary]) -> String {
    if queues.is_empty() {
        return format!("{}\n", "No call queues found".yellow());
    }

    let rows: Vec<_> = queues
        .iter()
        .map(|q| QueueRow {
            id: q.id.clone(),
            name: q.name.clone().unwrap_or_default(),
            extension: q.extension_number.clone().unwrap_or_default(),
        })
        .collect();
    format!("{}\n", Table::new(rows))
}
