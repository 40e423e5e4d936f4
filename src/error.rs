//! Error types that cross the library boundary.
//!
//! Only structural problems in a resource document are errors. Missing
//! translations and ambiguous duplicates are normal catalog states and are
//! resolved to the source text instead.

use thiserror::Error;

/// A `.ts` document could not be turned into a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The XML itself is malformed (mismatched tags, bad escapes, invalid UTF-8).
    #[error("line {line}: malformed XML: {message}")]
    Xml { line: usize, message: String },

    /// The root element is not `<TS>`.
    #[error("line {line}: expected a <TS> root element, found <{found}>")]
    NotACatalog { line: usize, found: String },

    /// The document ended while a group was still open.
    #[error("line {line}: <{element}> opened here is never closed")]
    Unterminated { element: String, line: usize },

    /// A `<message>` carries no `<source>` element.
    #[error("line {line}: message in context '{context}' has no <source>")]
    MissingSource { context: String, line: usize },

    /// The document contains no root element at all.
    #[error("document is empty")]
    Empty,
}

impl ParseError {
    /// 1-based line the error points at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Xml { line, .. }
            | ParseError::NotACatalog { line, .. }
            | ParseError::Unterminated { line, .. }
            | ParseError::MissingSource { line, .. } => Some(*line),
            ParseError::Empty => None,
        }
    }
}

/// Locale switching failed; the previously published catalog is untouched.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("no translation resource found for locale '{locale}' (tried {tried})")]
    NotFound { locale: String, tried: String },

    #[error("failed to read translation resource for locale '{locale}'")]
    Read {
        locale: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse translation resource for locale '{locale}'")]
    Parse {
        locale: String,
        #[source]
        source: ParseError,
    },
}
