//! Generic multi-literal token classification.
//!
//! Classifies a prefix of raw input bytes into exactly one fixed literal
//! token, across many categories whose literals may prefix one another.
//!
//! # Pipeline
//!
//! ```text
//! CatalogEntry*  ──load──►  TokenCatalog  (validated, immutable)
//!                                │
//!                       per category, in priority order
//!                                ▼
//!              CategoryClassifier = LiteralMatcher + BoundaryRule?
//!                                │
//!                                ▼
//!   input bytes ──► Tokenizer::classify_any ──► Token + rest | UnrecognizedToken
//! ```
//!
//! This crate knows nothing about any particular language's literal
//! tables. `solex_lexer` supplies the catalog data and priority order.

mod boundary;
mod catalog;
mod category;
mod classifier;
mod matcher;
mod span;
mod token;
mod tokenizer;

pub use boundary::{is_word_byte, BoundaryRule, BoundarySet};
pub use catalog::{CatalogEntry, CatalogError, LiteralOverlap, TokenCatalog};
pub use category::Category;
pub use classifier::{CategoryClassifier, NoMatch};
pub use matcher::{Candidate, Candidates, LiteralMatcher, TRIE_THRESHOLD};
pub use span::{Span, SpanError};
pub use token::Token;
pub use tokenizer::{Classification, Tokenizer, TokenizerBuilder, UnrecognizedToken};
