//! Placeholder mismatch detection rule.
//!
//! A translation must reference the same `%N` placeholders as its source,
//! in any order. A dropped placeholder loses runtime data and an extra one
//! is printed literally. Numerus messages are skipped: their forms commonly
//! spell out the count instead of using `%n`.

use crate::{
    catalog::{Status, placeholders},
    issues::{MessageContext, PlaceholderMismatchIssue},
    scan::LoadedCatalog,
};

pub fn check_placeholder_issues(catalogs: &[LoadedCatalog]) -> Vec<PlaceholderMismatchIssue> {
    let mut issues = Vec::new();

    for loaded in catalogs {
        for entry in loaded.catalog.entries() {
            if entry.status != Status::Translated
                || entry.is_numerus()
                || entry.translated_text.is_empty()
            {
                continue;
            }

            let expected = placeholders(&entry.source_text);
            let actual = placeholders(&entry.translated_text);
            if expected == actual {
                continue;
            }

            issues.push(PlaceholderMismatchIssue {
                context: MessageContext::new(&loaded.file_path, entry),
                translation: entry.translated_text.clone(),
                missing: expected.difference(&actual).copied().collect(),
                unexpected: actual.difference(&expected).copied().collect(),
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
