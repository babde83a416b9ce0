//! Lexical front-end for the solex contract language.
//!
//! Supplies the language's literal tables (keywords, reserved words,
//! delimiters, storage locations, elementary type names, integer widths,
//! assignment operators, number units, opcodes), the priority order the
//! tokenizer tries them in, and a driver that lexes whole sources.
//!
//! The generic classification machinery lives in `solex_lexer_core`; this
//! crate only configures it.
//!
//! ```text
//! data/*.txt ──parse_table──► CatalogEntry* ──► TokenCatalog ──► Tokenizer
//!                                                                  │
//!                                   source bytes ──► lex / TokenStream
//! ```

use std::sync::OnceLock;

mod lex;
mod opcodes;
mod source;
mod tables;

pub use lex::{lex, line_col, LexError, LexOutput, Lexeme, TokenStream};
pub use opcodes::OpCodeTable;
pub use source::{parse_table, parse_value, LineFormat, SourceError};
pub use tables::{build_tokenizer, load_catalog, Boundary, CategoryTable, DEFAULT_TABLES};

pub use solex_lexer_core::{
    Category, Classification, Span, SpanError, Token, TokenCatalog, Tokenizer, UnrecognizedToken,
};

static DEFAULT_TOKENIZER: OnceLock<Result<Tokenizer, SourceError>> = OnceLock::new();

/// The tokenizer built from [`DEFAULT_TABLES`], constructed on first use.
///
/// Construction happens exactly once per process; concurrent first callers
/// block until it completes. A table error is returned on every call, so
/// callers cannot tokenize with a partially valid catalog.
pub fn default_tokenizer() -> Result<&'static Tokenizer, &'static SourceError> {
    DEFAULT_TOKENIZER
        .get_or_init(|| build_tokenizer(&DEFAULT_TABLES))
        .as_ref()
}
