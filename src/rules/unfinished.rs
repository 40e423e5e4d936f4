//! Unfinished message detection rule.
//!
//! Reports messages whose translation is still marked `unfinished` (or has no
//! `<translation>` at all). These display the source text at runtime.
//! Sources without alphabetic characters (`%1`, `...`) are not reported.

use crate::{
    catalog::Status,
    issues::{MessageContext, UnfinishedIssue},
    scan::LoadedCatalog,
    utils::contains_alphabetic,
};

pub fn check_unfinished_issues(catalogs: &[LoadedCatalog]) -> Vec<UnfinishedIssue> {
    let mut issues: Vec<UnfinishedIssue> = catalogs
        .iter()
        .flat_map(|loaded| {
            loaded
                .catalog
                .entries()
                .iter()
                .filter(|e| e.status == Status::Unfinished && contains_alphabetic(&e.source_text))
                .map(|e| UnfinishedIssue {
                    context: MessageContext::new(&loaded.file_path, e),
                    locale: loaded.locale.clone(),
                })
        })
        .collect();

    issues.sort_by(|a, b| {
        a.context
            .file_path
            .cmp(&b.context.file_path)
            .then_with(|| a.context.line.cmp(&b.context.line))
    });
    issues
}
