//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes read-only catalog tools to AI assistants over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Tool router and server entry point
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{TscatMcpServer, run_server};
