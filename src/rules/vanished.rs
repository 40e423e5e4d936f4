//! Vanished message detection rule.
//!
//! Reports messages kept as `vanished` or `obsolete`. They never reach the UI
//! but still carry an old translation that tooling may want to reuse.

use crate::{
    catalog::Status,
    issues::{MessageContext, VanishedIssue},
    scan::LoadedCatalog,
};

pub fn check_vanished_issues(catalogs: &[LoadedCatalog]) -> Vec<VanishedIssue> {
    let mut issues = Vec::new();

    for loaded in catalogs {
        for entry in loaded.catalog.entries() {
            if entry.status == Status::Vanished {
                issues.push(VanishedIssue {
                    context: MessageContext::new(&loaded.file_path, entry),
                    locale: loaded.locale.clone(),
                });
            }
        }
    }

    issues.sort_by(|a, b| {
        a.context
            .file_path
            .cmp(&b.context.file_path)
            .then_with(|| a.context.line.cmp(&b.context.line))
    });
    issues
}
