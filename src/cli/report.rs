//! Report formatting and printing utilities.
//!
//! This module provides functions to display issues in cargo-style format.
//! Separate from core logic to allow tscat to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CatalogStatsRow, CommandResult, CommandSummary, InitSummary, LookupSummary, StatsSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, Severity};
use crate::utils::plural;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format. `issues` must already be sorted.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    // Calculate max line number width for alignment
    let max_line_width = calculate_max_line_width(issues);

    for issue in issues {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(issues, writer);
}

/// Print a success message when no issues are found.
pub fn print_success_to<W: Write>(files: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} catalog {} - no issues found",
            files,
            plural(files, "file", "files")
        )
        .green()
    );
}

pub fn print(result: &CommandResult) {
    let stdout = &mut io::stdout().lock();

    match &result.summary {
        CommandSummary::Check => {
            report_to(&result.issues, stdout);
            if result.issues.is_empty() {
                print_success_to(result.files_checked, stdout);
            }
        }
        CommandSummary::Lookup(summary) => print_lookup(summary, stdout),
        CommandSummary::Stats(summary) => {
            print_stats(summary, stdout);
            report_to(&result.issues, stdout);
        }
        CommandSummary::Init(summary) => print_init(summary),
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();

    // Print severity and message (cargo-style)
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Print clickable location: --> path:line
    match loc.line() {
        Some(line) => {
            let _ = writeln!(writer, "  {} {}:{}", "-->".blue(), loc.file_path(), line);
        }
        None => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), loc.file_path());
        }
    }

    // Print details if present (cargo-style note)
    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    // Print hint if present
    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            plural(total_problems, "problem", "problems"),
            total_errors,
            plural(total_errors, "error", "errors").red(),
            total_warnings,
            plural(total_warnings, "warning", "warnings").yellow()
        );
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| i.location().line())
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

fn print_lookup<W: Write>(summary: &LookupSummary, writer: &mut W) {
    let _ = writeln!(writer, "{}", summary.text);
}

fn print_stats<W: Write>(summary: &StatsSummary, writer: &mut W) {
    if summary.json {
        match serde_json::to_string_pretty(&summary.rows) {
            Ok(json) => {
                let _ = writeln!(writer, "{}", json);
            }
            Err(e) => {
                eprintln!("{} Failed to serialize stats: {}", "error:".bold().red(), e);
            }
        }
        return;
    }

    if summary.rows.is_empty() {
        let _ = writeln!(writer, "No catalogs found");
        return;
    }

    let headers = ["Locale", "File", "Translated", "Unfinished", "Vanished", "Coverage"];
    let cells: Vec<[String; 6]> = summary.rows.iter().map(stats_cells).collect();

    let mut widths = headers.map(UnicodeWidthStr::width);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(UnicodeWidthStr::width(cell.as_str()));
        }
    }

    let header_line = format_row(&headers.map(String::from), &widths);
    let _ = writeln!(writer, "{}", header_line.bold());
    for row in &cells {
        let _ = writeln!(writer, "{}", format_row(row, &widths));
    }
}

fn stats_cells(row: &CatalogStatsRow) -> [String; 6] {
    [
        row.locale.clone(),
        row.file_path.clone(),
        row.stats.translated.to_string(),
        row.stats.unfinished.to_string(),
        row.stats.vanished.to_string(),
        format!("{:.1}%", row.stats.coverage_percent),
    ]
}

/// Left-align the first two columns, right-align the numeric ones.
fn format_row(cells: &[String; 6], widths: &[usize; 6]) -> String {
    cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, &width))| {
            let padding = " ".repeat(width.saturating_sub(UnicodeWidthStr::width(cell.as_str())));
            if i < 2 {
                format!("{}{}", cell, padding)
            } else {
                format!("{}{}", padding, cell)
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

fn print_init(summary: &InitSummary) {
    if let Some(error) = &summary.error {
        eprintln!("Error: {}", error);
    } else if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}
