//! Immutable translation catalog for one locale.
//!
//! # Invariants
//!
//! 1. **Source fallback**: `lookup` returns the caller's source text whenever
//!    no translated, non-empty entry matches the key. It never fails.
//!
//! 2. **Vanished entries are invisible**: they are kept for tooling
//!    (`find_vanished`) but never returned by `lookup`.
//!
//! 3. **Distinct disambiguators**: `None` and `Some("")` are different keys.
//!
//! 4. **Thread safety**: `Catalog` is `Send + Sync`; nothing mutates after
//!    construction.
//!
//! # Duplicate keys
//!
//! Entries sharing `(context, source_text, disambiguator)` collapse into one.
//! Precedence is `translated > unfinished > vanished`; among equals the
//! later entry wins. Locations of all duplicates are merged in document
//! order. Every collapse is recorded in [`Catalog::duplicates`].

mod entry;
mod format;

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};

pub use entry::{Location, Status, TranslationEntry};
pub use format::{format, placeholders};

use crate::{
    error::ParseError,
    parsers::ts::{TsDocument, parse_ts},
};

/// Two or more entries with the same key were collapsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateKey {
    pub context: String,
    pub source_text: String,
    pub disambiguator: Option<String>,
    /// Line of the first occurrence.
    pub first_line: usize,
    /// Line of the occurrence that collided with it.
    pub line: usize,
    /// Both occurrences are translated but with different text.
    pub conflicting: bool,
}

/// Counts of what a UI would show.
///
/// `translated` only counts entries that `lookup` actually returns, so a
/// translated entry with empty text is counted as unfinished.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub translated: usize,
    pub unfinished: usize,
    pub vanished: usize,
    pub total: usize,
    /// Translated share of the live (non-vanished) entries, 0.0 to 100.0.
    pub coverage_percent: f32,
}

#[derive(Debug, Clone, Default)]
struct SourceSlot {
    plain: Option<usize>,
    by_disambiguator: HashMap<String, usize>,
}

impl SourceSlot {
    fn get(&self, disambiguator: Option<&str>) -> Option<usize> {
        match disambiguator {
            None => self.plain,
            Some(d) => self.by_disambiguator.get(d).copied(),
        }
    }

    fn set(&mut self, disambiguator: Option<&str>, index: usize) {
        match disambiguator {
            None => self.plain = Some(index),
            Some(d) => {
                self.by_disambiguator.insert(d.to_string(), index);
            }
        }
    }
}

/// Translation catalog with source-text fallback.
///
/// # Example
///
/// ```
/// use tscat::catalog::Catalog;
///
/// let catalog = Catalog::load(br#"<TS language="nl">
///   <context>
///     <name>BannedUsersDlg</name>
///     <message>
///       <source>Banned Users</source>
///       <translation>Geblokkeerde gebruikers</translation>
///     </message>
///   </context>
/// </TS>"#).unwrap();
///
/// assert_eq!(catalog.lookup("BannedUsersDlg", "Banned Users", None), "Geblokkeerde gebruikers");
/// assert_eq!(catalog.lookup("BannedUsersDlg", "Unban", None), "Unban");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    version: Option<String>,
    language: Option<String>,
    source_language: Option<String>,
    entries: Vec<TranslationEntry>,
    contexts: Vec<String>,
    index: HashMap<String, HashMap<String, SourceSlot>>,
    duplicates: Vec<DuplicateKey>,
}

impl Catalog {
    /// Parse a `.ts` document and build the lookup index.
    pub fn load(bytes: &[u8]) -> Result<Self, ParseError> {
        let document = parse_ts(bytes)?;
        Ok(Self::from_document(document))
    }

    /// Build a catalog from an already parsed document.
    pub fn from_document(document: TsDocument) -> Self {
        let mut catalog = Self::from_entries(document.language, document.entries);
        catalog.version = document.version;
        catalog.source_language = document.source_language;
        catalog
    }

    /// Build a catalog from entries in document order.
    pub fn from_entries(
        language: Option<String>,
        entries: impl IntoIterator<Item = TranslationEntry>,
    ) -> Self {
        let mut kept: Vec<TranslationEntry> = Vec::new();
        // Parallel to `kept`: line of the first entry seen for that key.
        let mut first_lines: Vec<usize> = Vec::new();
        let mut contexts: Vec<String> = Vec::new();
        let mut index: HashMap<String, HashMap<String, SourceSlot>> = HashMap::new();
        let mut duplicates = Vec::new();

        for entry in entries {
            if !index.contains_key(&entry.context) {
                contexts.push(entry.context.clone());
            }
            let slot = index
                .entry(entry.context.clone())
                .or_default()
                .entry(entry.source_text.clone())
                .or_default();

            let disambiguator = entry.disambiguator.as_deref();
            let Some(existing) = slot.get(disambiguator) else {
                slot.set(disambiguator, kept.len());
                first_lines.push(entry.line);
                kept.push(entry);
                continue;
            };

            let current = &mut kept[existing];
            let duplicate = DuplicateKey {
                context: entry.context.clone(),
                source_text: entry.source_text.clone(),
                disambiguator: entry.disambiguator.clone(),
                first_line: first_lines[existing],
                line: entry.line,
                conflicting: current.status == Status::Translated
                    && entry.status == Status::Translated
                    && current.translated_text != entry.translated_text,
            };
            if duplicate.conflicting {
                warn!(
                    context = %duplicate.context,
                    source = %duplicate.source_text,
                    first_line = duplicate.first_line,
                    line = duplicate.line,
                    "Conflicting translations for duplicate key, keeping the later one"
                );
            } else {
                debug!(
                    context = %duplicate.context,
                    source = %duplicate.source_text,
                    line = duplicate.line,
                    "Collapsed duplicate key"
                );
            }
            duplicates.push(duplicate);

            if entry.status.rank() >= current.status.rank() {
                let mut locations = std::mem::take(&mut current.locations);
                locations.extend(entry.locations.iter().cloned());
                *current = TranslationEntry { locations, ..entry };
            } else {
                current.locations.extend(entry.locations);
            }
        }

        debug!(
            language = language.as_deref().unwrap_or("?"),
            entries = kept.len(),
            duplicates = duplicates.len(),
            "Catalog built"
        );

        Self {
            version: None,
            language,
            source_language: None,
            entries: kept,
            contexts,
            index,
            duplicates,
        }
    }

    /// A catalog without entries: every lookup yields the source text.
    pub fn identity(language: Option<String>) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    /// Resolve the display text for a UI string.
    ///
    /// Returns the translation only for a translated, non-empty entry;
    /// otherwise `source_text` itself.
    pub fn lookup<'a>(
        &'a self,
        context: &str,
        source_text: &'a str,
        disambiguator: Option<&str>,
    ) -> &'a str {
        self.entry(context, source_text, disambiguator)
            .and_then(TranslationEntry::display_text)
            .unwrap_or(source_text)
    }

    /// Substitute `%N` placeholders in a resolved display string.
    pub fn format<S: AsRef<str>>(&self, text: &str, args: &[S]) -> String {
        format(text, args)
    }

    /// `lookup` followed by `format`.
    pub fn tr<S: AsRef<str>>(
        &self,
        context: &str,
        source_text: &str,
        disambiguator: Option<&str>,
        args: &[S],
    ) -> String {
        format(self.lookup(context, source_text, disambiguator), args)
    }

    /// The entry stored under a key, whatever its status.
    pub fn entry(
        &self,
        context: &str,
        source_text: &str,
        disambiguator: Option<&str>,
    ) -> Option<&TranslationEntry> {
        let slot = self.index.get(context)?.get(source_text)?;
        slot.get(disambiguator).and_then(|i| self.entries.get(i))
    }

    /// A retained vanished entry, for reusing an old translation in tooling.
    pub fn find_vanished(
        &self,
        context: &str,
        source_text: &str,
        disambiguator: Option<&str>,
    ) -> Option<&TranslationEntry> {
        self.entry(context, source_text, disambiguator)
            .filter(|e| e.status == Status::Vanished)
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn source_language(&self) -> Option<&str> {
        self.source_language.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Entries after duplicate collapsing, in document order.
    pub fn entries(&self) -> &[TranslationEntry] {
        &self.entries
    }

    /// Context names in order of first appearance.
    pub fn contexts(&self) -> impl Iterator<Item = &str> {
        self.contexts.iter().map(String::as_str)
    }

    pub fn duplicates(&self) -> &[DuplicateKey] {
        &self.duplicates
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CatalogStats {
        let (mut translated, mut unfinished, mut vanished) = (0, 0, 0);
        for entry in &self.entries {
            if entry.status == Status::Vanished {
                vanished += 1;
            } else if entry.display_text().is_some() {
                translated += 1;
            } else {
                unfinished += 1;
            }
        }
        let live = translated + unfinished;
        let coverage_percent = if live == 0 {
            100.0
        } else {
            (translated as f32 / live as f32) * 100.0
        };

        CatalogStats {
            translated,
            unfinished,
            vanished,
            total: self.entries.len(),
            coverage_percent,
        }
    }
}
