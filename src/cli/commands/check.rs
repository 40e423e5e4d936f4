use anyhow::Result;
use clap::ValueEnum;

use super::super::{args::CheckCommand, context::CheckContext};
use super::{
    helper::{finish, parse_error_issues},
    {CommandResult, CommandSummary},
};

use crate::{
    config::Config,
    issues::Issue,
    rules::{
        duplicates::check_duplicate_issues, placeholders::check_placeholder_issues,
        unfinished::check_unfinished_issues, vanished::check_vanished_issues,
    },
    scan::CatalogScan,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    Unfinished,
    Vanished,
    Duplicate,
    Placeholders,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::Unfinished,
            CheckRule::Vanished,
            CheckRule::Duplicate,
            CheckRule::Placeholders,
        ]
    }

    /// Rules run when none are named: everything but `vanished`, and
    /// `placeholders` only when the config enables it.
    pub fn defaults(config: &Config) -> Vec<CheckRule> {
        Self::all()
            .into_iter()
            .filter(|rule| match rule {
                CheckRule::Vanished => false,
                CheckRule::Placeholders => config.check_placeholders,
                _ => true,
            })
            .collect()
    }
}

/// Run `rules` over a scan. Parse failures are always reported.
pub fn collect_issues(scan: &CatalogScan, rules: &[CheckRule]) -> Vec<Issue> {
    let catalogs = &scan.catalogs;
    let mut all_issues: Vec<Issue> = Vec::new();

    for rule in rules {
        match rule {
            CheckRule::Unfinished => {
                let issues = check_unfinished_issues(catalogs);
                all_issues.extend(issues.into_iter().map(Issue::Unfinished));
            }
            CheckRule::Vanished => {
                let issues = check_vanished_issues(catalogs);
                all_issues.extend(issues.into_iter().map(Issue::Vanished));
            }
            CheckRule::Duplicate => {
                let issues = check_duplicate_issues(catalogs);
                all_issues.extend(issues.into_iter().map(Issue::DuplicateKey));
            }
            CheckRule::Placeholders => {
                let issues = check_placeholder_issues(catalogs);
                all_issues.extend(issues.into_iter().map(Issue::PlaceholderMismatch));
            }
        }
    }

    all_issues.extend(parse_error_issues(&scan.failures));
    all_issues
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.args.common)?;

    let rules = if cmd.checks.is_empty() {
        CheckRule::defaults(&ctx.config)
    } else {
        cmd.checks.clone()
    };

    let scan = ctx.scan()?;
    let issues = collect_issues(&scan, &rules);

    Ok(finish(
        CommandSummary::Check,
        issues,
        scan.files_checked(),
        true,
    ))
}
