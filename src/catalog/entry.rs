use std::fmt;

use serde::Serialize;

/// Translation state of a single message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// An approved translation exists.
    Translated,
    /// No approved translation yet; display falls back to the source text.
    Unfinished,
    /// The source string is gone from the application; kept for reuse only.
    Vanished,
}

impl Status {
    /// Map a `<translation type="...">` attribute value to a status.
    ///
    /// `obsolete` is the pre-Qt5 spelling of `vanished`. Unknown values fall
    /// back to `Unfinished` so a newer producer never leaks unapproved text.
    pub fn from_type_attr(value: Option<&str>) -> Self {
        match value {
            None => Status::Translated,
            Some("unfinished") => Status::Unfinished,
            Some("vanished" | "obsolete") => Status::Vanished,
            Some(_) => Status::Unfinished,
        }
    }

    /// Precedence used when collapsing duplicate keys.
    pub(crate) fn rank(self) -> u8 {
        match self {
            Status::Translated => 2,
            Status::Unfinished => 1,
            Status::Vanished => 0,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Translated => write!(f, "translated"),
            Status::Unfinished => write!(f, "unfinished"),
            Status::Vanished => write!(f, "vanished"),
        }
    }
}

/// Where a source string is used in the application. Provenance only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub file: String,
    pub line: Option<u32>,
}

impl Location {
    pub fn new(file: impl Into<String>, line: Option<u32>) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.file, line),
            None => write!(f, "{}", self.file),
        }
    }
}

/// One message of a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationEntry {
    pub context: String,
    pub source_text: String,
    /// `None` when the message has no `<comment>`; `Some("")` is a distinct key.
    pub disambiguator: Option<String>,
    pub translated_text: String,
    /// Plural forms of a numerus message; empty otherwise.
    pub numerus_forms: Vec<String>,
    pub status: Status,
    pub locations: Vec<Location>,
    pub extra_comment: Option<String>,
    pub translator_comment: Option<String>,
    /// 1-based line of the `<message>` element in the resource document.
    pub line: usize,
}

impl TranslationEntry {
    pub fn new(
        context: impl Into<String>,
        source_text: impl Into<String>,
        translated_text: impl Into<String>,
        status: Status,
    ) -> Self {
        Self {
            context: context.into(),
            source_text: source_text.into(),
            disambiguator: None,
            translated_text: translated_text.into(),
            numerus_forms: Vec::new(),
            status,
            locations: Vec::new(),
            extra_comment: None,
            translator_comment: None,
            line: 0,
        }
    }

    pub fn with_disambiguator(mut self, disambiguator: impl Into<String>) -> Self {
        self.disambiguator = Some(disambiguator.into());
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.locations.push(location);
        self
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    /// Text shown to the user, or `None` when display must fall back.
    ///
    /// Only translated entries with non-empty text qualify.
    pub fn display_text(&self) -> Option<&str> {
        if self.status == Status::Translated && !self.translated_text.is_empty() {
            Some(&self.translated_text)
        } else {
            None
        }
    }

    pub fn is_numerus(&self) -> bool {
        !self.numerus_forms.is_empty()
    }
}
