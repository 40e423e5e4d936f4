//! Numbered placeholder substitution.
//!
//! Placeholders are `%1` to `%99`, optionally in Qt's localized `%L1` form.
//! Substitution is by number, not by position in the string, so a
//! translation may reorder them freely.

use std::{collections::BTreeSet, sync::LazyLock};

use regex::{Captures, Regex};

static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%L?([1-9][0-9]?)").expect("Invalid placeholder regex")
});

/// Substitute `%N` placeholders with `args[N - 1]`.
///
/// Runs in a single pass, so substituted values are never rescanned.
/// Placeholders without a matching argument are left in the output as-is.
///
/// # Examples
///
/// ```
/// use tscat::catalog::format;
///
/// assert_eq!(format("%2 kanaal %1", &["A", "B"]), "B kanaal A");
/// assert_eq!(format("%1 en %2", &["A"]), "A en %2");
/// ```
pub fn format<S: AsRef<str>>(template: &str, args: &[S]) -> String {
    if !template.contains('%') {
        return template.to_string();
    }

    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures| {
            let index: usize = caps[1].parse().unwrap_or(0);
            match index.checked_sub(1).and_then(|i| args.get(i)) {
                Some(value) => value.as_ref().to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Placeholder numbers referenced by `text`, sorted and deduplicated.
pub fn placeholders(text: &str) -> BTreeSet<usize> {
    PLACEHOLDER_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps[1].parse().ok())
        .collect()
}
