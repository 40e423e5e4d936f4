//! Readers for translation resource formats.

pub mod ts;
