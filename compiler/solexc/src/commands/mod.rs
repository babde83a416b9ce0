//! Command handlers for the solex CLI.
//!
//! Handlers render to strings; `main.rs` owns printing and exit codes.

mod catalog;
mod lex;
mod opcode;

pub use catalog::catalog_report;
pub use lex::{lex_files, render_source, LexReport};
pub use opcode::opcode_lookup;

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
