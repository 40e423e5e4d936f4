//! Rule implementations for tscat.
//!
//! Each rule is a pure function over loaded catalogs that returns a specific
//! issue type, sorted by file and line.
//!
//! ## Module Structure
//!
//! - `unfinished`: Messages still awaiting translation
//! - `vanished`: Messages retained from older sources
//! - `duplicates`: Keys translated twice with different text
//! - `placeholders`: Translations whose `%N` set differs from the source

pub mod duplicates;
pub mod placeholders;
pub mod unfinished;
pub mod vanished;
