//! The language's literal tables and their priority order.
//!
//! [`DEFAULT_TABLES`] lists every category once, in the order the tokenizer
//! tries them. The order resolves literals declared in more than one
//! category:
//!
//! 1. Keywords, then reserved words: `return` is a keyword, not the opcode.
//! 2. Elementary type names before opcodes: `address` and `byte` are types.
//! 3. Integer widths, storage locations and units: disjoint word sets.
//! 4. Opcodes: only reachable for mnemonics no earlier category claims.
//! 5. Assignment operators before delimiters: `:=` must not split into
//!    `:` and `=`.
//!
//! Every word-like category carries the word boundary rule, so `uint8a`,
//! `isx` or `bytes32` never classify as a shorter literal followed by an
//! identifier tail.

use solex_lexer_core::{BoundarySet, CatalogEntry, Category, TokenCatalog, Tokenizer};
use tracing::debug;

use crate::source::{parse_table, LineFormat, SourceError};

/// Boundary rule attached to a category.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Boundary {
    /// Literal may be followed by anything.
    None,
    /// Literal must not be followed by an identifier byte.
    Word,
}

impl Boundary {
    pub fn allowed(self) -> Option<BoundarySet> {
        match self {
            Boundary::None => None,
            Boundary::Word => Some(BoundarySet::word_boundary()),
        }
    }
}

/// One category's table source and classification settings.
#[derive(Copy, Clone, Debug)]
pub struct CategoryTable {
    pub category: Category,
    pub file: &'static str,
    pub text: &'static str,
    pub format: LineFormat,
    pub boundary: Boundary,
}

impl CategoryTable {
    pub fn entries(&self) -> Result<Vec<CatalogEntry>, SourceError> {
        parse_table(self.file, self.text, self.category, self.format)
    }
}

macro_rules! table {
    ($category:ident, $file:literal, $format:ident, $boundary:ident) => {
        CategoryTable {
            category: Category::$category,
            file: $file,
            text: include_str!(concat!("../data/", $file)),
            format: LineFormat::$format,
            boundary: Boundary::$boundary,
        }
    };
}

/// All tables, in priority order.
pub const DEFAULT_TABLES: [CategoryTable; Category::COUNT] = [
    table!(Keyword, "keywords.txt", Word, Word),
    table!(Reserved, "reserved_words.txt", Word, Word),
    table!(ElementaryType, "elementary_type_names.txt", Word, Word),
    table!(UInt, "uints.txt", WordValue, Word),
    table!(StorageLocation, "storage_locations.txt", Word, Word),
    table!(NumberUnit, "units.txt", Word, Word),
    table!(OpCode, "opcodes.txt", WordValue, Word),
    table!(Assignment, "assignment_operators.txt", NamedLiteral, None),
    table!(Delimiter, "delimiters.txt", NamedLiteral, None),
];

/// Parse and validate every table into one catalog.
#[tracing::instrument(level = "debug", skip_all, fields(tables = tables.len()))]
pub fn load_catalog(tables: &[CategoryTable]) -> Result<TokenCatalog, SourceError> {
    let mut entries = Vec::new();
    for table in tables {
        entries.extend(table.entries()?);
    }
    Ok(TokenCatalog::load(entries)?)
}

/// Build a tokenizer whose priority order is the order of `tables`.
pub fn build_tokenizer(tables: &[CategoryTable]) -> Result<Tokenizer, SourceError> {
    let catalog = load_catalog(tables)?;

    for overlap in catalog.overlaps() {
        debug!(
            literal = %String::from_utf8_lossy(overlap.literal),
            categories = ?overlap.categories,
            "literal declared in several categories"
        );
    }

    let mut builder = Tokenizer::builder(catalog);
    for table in tables {
        builder = match table.boundary.allowed() {
            Some(allowed) => builder.bounded(table.category, allowed),
            None => builder.category(table.category),
        };
    }
    Ok(builder.build()?)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
