//! tscat - Qt Linguist translation catalogs for Rust applications
//!
//! tscat loads `.ts` translation resources into an immutable [`Catalog`],
//! resolves UI strings by `(context, source, disambiguator)` with fallback to
//! the source text, substitutes `%N` placeholders, and swaps the active
//! catalog at runtime through a [`LocalizationService`]. The `tscat` binary
//! adds catalog health checks and an MCP server on top of the same core.
//!
//! ## Module Structure
//!
//! - `catalog`: Entry model, lookup index and placeholder formatting
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `error`: Typed errors for loading and locale switching
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `parsers`: `.ts` document reader
//! - `rules`: Catalog health rules
//! - `scan`: Translation file discovery
//! - `service`: Runtime locale switching
//! - `utils`: Shared utility functions
//!
//! [`Catalog`]: catalog::Catalog
//! [`LocalizationService`]: service::LocalizationService

mod macros;

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod issues;
pub mod mcp;
pub mod parsers;
pub mod rules;
pub mod scan;
pub mod service;
pub mod utils;

pub use catalog::{Catalog, format};
pub use error::{ParseError, ServiceError};
pub use service::LocalizationService;
