//! Conflicting duplicate key detection rule.
//!
//! A key may legitimately appear twice (for example once vanished, once
//! translated). Only pairs of translated occurrences with different text are
//! reported, since the earlier translation is silently discarded.

use crate::{
    issues::{DuplicateKeyIssue, MessageContext},
    scan::LoadedCatalog,
};

pub fn check_duplicate_issues(catalogs: &[LoadedCatalog]) -> Vec<DuplicateKeyIssue> {
    let mut issues = Vec::new();

    for loaded in catalogs {
        for duplicate in loaded.catalog.duplicates().iter().filter(|d| d.conflicting) {
            issues.push(DuplicateKeyIssue {
                context: MessageContext {
                    file_path: loaded.file_path.clone(),
                    line: duplicate.line,
                    context: duplicate.context.clone(),
                    source_text: duplicate.source_text.clone(),
                    disambiguator: duplicate.disambiguator.clone(),
                },
                first_line: duplicate.first_line,
            });
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
