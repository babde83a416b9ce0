//! The closed set of token categories.
//!
//! Every catalog entry belongs to exactly one category, and every
//! [`Token`](crate::Token) variant corresponds to exactly one category.
//! Discriminants are dense so a category can index a fixed-size table.

use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Category {
    Keyword = 0,
    Reserved = 1,
    Delimiter = 2,
    StorageLocation = 3,
    ElementaryType = 4,
    UInt = 5,
    Assignment = 6,
    NumberUnit = 7,
    OpCode = 8,
}

impl Category {
    /// Number of categories.
    pub const COUNT: usize = 9;

    /// All categories in discriminant order.
    pub const ALL: [Category; Self::COUNT] = [
        Category::Keyword,
        Category::Reserved,
        Category::Delimiter,
        Category::StorageLocation,
        Category::ElementaryType,
        Category::UInt,
        Category::Assignment,
        Category::NumberUnit,
        Category::OpCode,
    ];

    /// Dense index for per-category tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Human-readable name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::Reserved => "reserved word",
            Category::Delimiter => "delimiter",
            Category::StorageLocation => "storage location",
            Category::ElementaryType => "elementary type name",
            Category::UInt => "unsigned integer type",
            Category::Assignment => "assignment operator",
            Category::NumberUnit => "number unit",
            Category::OpCode => "opcode",
        }
    }

    /// Whether entries of this category must carry a numeric value.
    ///
    /// `UInt` entries carry their bit width, `OpCode` entries their code.
    pub const fn requires_value(self) -> bool {
        matches!(self, Category::UInt | Category::OpCode)
    }

    /// Inclusive range a value must fall into for this category.
    pub const fn value_range(self) -> Option<(u32, u32)> {
        match self {
            Category::UInt => Some((1, 256)),
            Category::OpCode => Some((0, 0xFF)),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
