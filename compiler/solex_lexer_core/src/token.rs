//! Classified tokens.

use std::fmt;

use crate::catalog::CatalogEntry;
use crate::Category;

/// A classified token: one variant per [`Category`].
///
/// Named categories carry the entry's canonical name, borrowed from the
/// catalog that produced the token. `UInt` carries the bit width and
/// `OpCode` the numeric code, so consumers never re-parse the literal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token<'c> {
    Keyword(&'c str),
    Reserved(&'c str),
    Delimiter(&'c str),
    StorageLocation(&'c str),
    ElementaryType(&'c str),
    UInt(u16),
    Assignment(&'c str),
    NumberUnit(&'c str),
    OpCode { name: &'c str, code: u8 },
}

impl<'c> Token<'c> {
    /// Build the token identified by a validated catalog entry.
    ///
    /// Values were range-checked by [`TokenCatalog::load`](crate::TokenCatalog::load),
    /// so the narrowing conversions here cannot fail for a loaded entry.
    pub(crate) fn from_entry(entry: &'c CatalogEntry) -> Self {
        let name = entry.name();
        match entry.category() {
            Category::Keyword => Token::Keyword(name),
            Category::Reserved => Token::Reserved(name),
            Category::Delimiter => Token::Delimiter(name),
            Category::StorageLocation => Token::StorageLocation(name),
            Category::ElementaryType => Token::ElementaryType(name),
            Category::UInt => Token::UInt(
                entry
                    .value()
                    .and_then(|v| u16::try_from(v).ok())
                    .unwrap_or_default(),
            ),
            Category::Assignment => Token::Assignment(name),
            Category::NumberUnit => Token::NumberUnit(name),
            Category::OpCode => Token::OpCode {
                name,
                code: entry
                    .value()
                    .and_then(|v| u8::try_from(v).ok())
                    .unwrap_or_default(),
            },
        }
    }

    pub const fn category(&self) -> Category {
        match self {
            Token::Keyword(_) => Category::Keyword,
            Token::Reserved(_) => Category::Reserved,
            Token::Delimiter(_) => Category::Delimiter,
            Token::StorageLocation(_) => Category::StorageLocation,
            Token::ElementaryType(_) => Category::ElementaryType,
            Token::UInt(_) => Category::UInt,
            Token::Assignment(_) => Category::Assignment,
            Token::NumberUnit(_) => Category::NumberUnit,
            Token::OpCode { .. } => Category::OpCode,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Keyword(name) => write!(f, "Keyword({name})"),
            Token::Reserved(name) => write!(f, "Reserved({name})"),
            Token::Delimiter(name) => write!(f, "Delimiter({name})"),
            Token::StorageLocation(name) => write!(f, "StorageLocation({name})"),
            Token::ElementaryType(name) => write!(f, "ElementaryType({name})"),
            Token::UInt(bits) => write!(f, "UInt({bits})"),
            Token::Assignment(name) => write!(f, "Assignment({name})"),
            Token::NumberUnit(name) => write!(f, "NumberUnit({name})"),
            Token::OpCode { name, code } => write!(f, "OpCode({name} = 0x{code:02x})"),
        }
    }
}
