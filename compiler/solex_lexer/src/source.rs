//! Declarative literal tables.
//!
//! Each category's literals live in a plain text table, one entry per line:
//!
//! ```text
//! # comment
//! uint8 8          <- LineFormat::WordValue
//! LPAREN (         <- LineFormat::NamedLiteral
//! memory           <- LineFormat::Word
//! ```
//!
//! Fields are separated by ASCII whitespace. Blank lines and lines starting
//! with `#` are skipped. Numeric values are decimal or `0x`-prefixed hex.

use solex_lexer_core::{CatalogEntry, CatalogError, Category};

/// Shape of one table line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LineFormat {
    /// `literal`; the literal doubles as the token name.
    Word,
    /// `name literal`.
    NamedLiteral,
    /// `literal value`; the literal doubles as the token name.
    WordValue,
}

impl LineFormat {
    fn expected(self) -> &'static str {
        match self {
            LineFormat::Word => "`literal`",
            LineFormat::NamedLiteral => "`name literal`",
            LineFormat::WordValue => "`literal value`",
        }
    }

    fn field_count(self) -> usize {
        match self {
            LineFormat::Word => 1,
            LineFormat::NamedLiteral | LineFormat::WordValue => 2,
        }
    }
}

/// Error loading the literal tables.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error("{file}:{line}: expected {expected}, found `{text}`")]
    Malformed {
        file: String,
        line: usize,
        expected: &'static str,
        text: String,
    },
    #[error("{file}:{line}: invalid numeric value `{text}`")]
    InvalidValue {
        file: String,
        line: usize,
        text: String,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Parse one table into catalog entries of `category`.
///
/// `file` is only used for diagnostics. Entries are returned in line order.
pub fn parse_table(
    file: &str,
    text: &str,
    category: Category,
    format: LineFormat,
) -> Result<Vec<CatalogEntry>, SourceError> {
    let mut entries = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_ascii_whitespace().collect();
        if fields.len() != format.field_count() {
            return Err(SourceError::Malformed {
                file: file.to_string(),
                line: idx + 1,
                expected: format.expected(),
                text: line.to_string(),
            });
        }

        let entry = match format {
            LineFormat::Word => CatalogEntry::word(category, fields[0]),
            LineFormat::NamedLiteral => CatalogEntry::new(category, fields[0], fields[1]),
            LineFormat::WordValue => {
                let value = parse_value(fields[1]).ok_or_else(|| SourceError::InvalidValue {
                    file: file.to_string(),
                    line: idx + 1,
                    text: fields[1].to_string(),
                })?;
                CatalogEntry::word(category, fields[0]).with_value(value)
            }
        };
        entries.push(entry);
    }
    Ok(entries)
}

/// Parse a decimal or `0x`-prefixed hexadecimal `u32`.
pub fn parse_value(text: &str) -> Option<u32> {
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => text.parse().ok(),
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
