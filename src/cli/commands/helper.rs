use super::{CommandResult, CommandSummary};
use crate::issues::{Issue, ParseErrorIssue, Severity};
use crate::scan::LoadFailure;

/// Sort the issues and tally them into a `CommandResult`.
///
/// A failed `init` counts as one error so the process exits non-zero.
pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    files_checked: usize,
    exit_on_errors: bool,
) -> CommandResult {
    issues.sort();

    let (mut error_count, mut warning_count, mut parse_error_count) = (0, 0, 0);
    for issue in &issues {
        match issue.severity() {
            Severity::Error => error_count += 1,
            Severity::Warning => warning_count += 1,
        }
        if matches!(issue, Issue::ParseError(_)) {
            parse_error_count += 1;
        }
    }

    if matches!(&summary, CommandSummary::Init(init) if init.error.is_some()) {
        error_count += 1;
    }

    CommandResult {
        summary,
        error_count,
        warning_count,
        exit_on_errors,
        issues,
        parse_error_count,
        files_checked,
    }
}

/// Catalog files that failed to load, as reportable issues.
pub fn parse_error_issues(failures: &[LoadFailure]) -> impl Iterator<Item = Issue> + '_ {
    failures.iter().map(|f| {
        Issue::ParseError(ParseErrorIssue {
            file_path: f.file_path.clone(),
            line: f.line,
            error: f.error.clone(),
        })
    })
}
