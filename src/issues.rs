//! Issue types for catalog health checks.
//!
//! Each issue is self-contained with all information the reporters (CLI and
//! MCP) need to display it.

use enum_dispatch::enum_dispatch;

use crate::catalog::TranslationEntry;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    ParseError,
    Unfinished,
    Vanished,
    Duplicate,
    Placeholders,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::ParseError => write!(f, "parse-error"),
            Rule::Unfinished => write!(f, "unfinished"),
            Rule::Vanished => write!(f, "vanished"),
            Rule::Duplicate => write!(f, "duplicate"),
            Rule::Placeholders => write!(f, "placeholders"),
        }
    }
}

// ============================================================
// Message Context
// ============================================================

/// A message inside a catalog file, identified by its full lookup key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContext {
    pub file_path: String,
    pub line: usize,
    pub context: String,
    pub source_text: String,
    pub disambiguator: Option<String>,
}

impl MessageContext {
    pub fn new(file_path: impl Into<String>, entry: &TranslationEntry) -> Self {
        Self {
            file_path: file_path.into(),
            line: entry.line,
            context: entry.context.clone(),
            source_text: entry.source_text.clone(),
            disambiguator: entry.disambiguator.clone(),
        }
    }

    /// `Context` or `Context (disambiguation)` for notes.
    pub fn key_label(&self) -> String {
        match &self.disambiguator {
            Some(d) => format!("{} ({})", self.context, d),
            None => self.context.clone(),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A catalog file that could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub line: Option<usize>,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

/// Message still marked `type="unfinished"`; the UI shows the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfinishedIssue {
    pub context: MessageContext,
    pub locale: String,
}

impl UnfinishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Unfinished
    }
}

/// Message retained as `vanished` or `obsolete`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VanishedIssue {
    pub context: MessageContext,
    pub locale: String,
}

impl VanishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Vanished
    }
}

/// The same key translated twice with different text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeyIssue {
    /// Points at the later occurrence, which is the one kept.
    pub context: MessageContext,
    pub first_line: usize,
}

impl DuplicateKeyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Duplicate
    }
}

/// Translation whose `%N` placeholders differ from its source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMismatchIssue {
    pub context: MessageContext,
    pub translation: String,
    /// Placeholders in the source but not in the translation.
    pub missing: Vec<usize>,
    /// Placeholders in the translation but not in the source.
    pub unexpected: Vec<usize>,
}

impl PlaceholderMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::Placeholders
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A catalog issue found during a check.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    ParseError(ParseErrorIssue),
    Unfinished(UnfinishedIssue),
    Vanished(VanishedIssue),
    DuplicateKey(DuplicateKeyIssue),
    PlaceholderMismatch(PlaceholderMismatchIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::ParseError(_) => ParseErrorIssue::severity(),
            Issue::Unfinished(_) => UnfinishedIssue::severity(),
            Issue::Vanished(_) => VanishedIssue::severity(),
            Issue::DuplicateKey(_) => DuplicateKeyIssue::severity(),
            Issue::PlaceholderMismatch(_) => PlaceholderMismatchIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::ParseError(_) => ParseErrorIssue::rule(),
            Issue::Unfinished(_) => UnfinishedIssue::rule(),
            Issue::Vanished(_) => VanishedIssue::rule(),
            Issue::DuplicateKey(_) => DuplicateKeyIssue::rule(),
            Issue::PlaceholderMismatch(_) => PlaceholderMismatchIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A message inside a catalog.
    Message(&'a MessageContext),
    /// File-level, with a line when the parser reported one.
    File { path: &'a str, line: Option<usize> },
}

impl<'a> ReportLocation<'a> {
    pub fn file_path(&self) -> &'a str {
        match *self {
            ReportLocation::Message(ctx) => &ctx.file_path,
            ReportLocation::File { path, .. } => path,
        }
    }

    pub fn line(&self) -> Option<usize> {
        match *self {
            ReportLocation::Message(ctx) => Some(ctx.line),
            ReportLocation::File { line, .. } => line,
        }
    }
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types; `enum_dispatch` forwards the calls on
/// `Issue` without dynamic dispatch.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (source text, error, etc.).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
            line: self.line,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for UnfinishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source_text.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "in {}, shown untranslated for '{}'",
            self.context.key_label(),
            self.locale
        ))
    }
}

impl Report for VanishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source_text.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("run lupdate with -no-obsolete to drop retired messages")
    }

    fn details(&self) -> Option<String> {
        Some(format!("in {}, no longer used", self.context.key_label()))
    }
}

impl Report for DuplicateKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source_text.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "in {}, also translated at line {}; this translation wins",
            self.context.key_label(),
            self.first_line
        ))
    }
}

impl Report for PlaceholderMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.translation.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let list = |ns: &[usize]| {
            ns.iter()
                .map(|n| format!("%{}", n))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("missing {}", list(&self.missing)));
        }
        if !self.unexpected.is_empty() {
            parts.push(format!("unexpected {}", list(&self.unexpected)));
        }
        Some(format!(
            "{} (source: \"{}\")",
            parts.join("; "),
            self.context.source_text
        ))
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let (a, b) = (self.location(), other.location());
        a.file_path()
            .cmp(b.file_path())
            .then_with(|| a.line().unwrap_or(0).cmp(&b.line().unwrap_or(0)))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
