//! Validated, immutable literal tables.
//!
//! A [`TokenCatalog`] is built once from configuration data and is read-only
//! afterwards. Validation happens entirely in [`TokenCatalog::load`]: every
//! later stage (matchers, classifiers, the tokenizer) assumes a well-formed
//! catalog and never re-checks it.
//!
//! # Invariants
//!
//! - Every literal is non-empty.
//! - Within one category no two entries share a literal.
//! - `UInt` and `OpCode` entries carry a value inside
//!   [`Category::value_range`].
//! - Declaration order is preserved per category. It breaks ties between
//!   equal-length candidates and orders diagnostics.

use std::fmt;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::Category;

/// One `(name, literal, category)` row of the catalog.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CatalogEntry {
    name: Box<str>,
    literal: Box<[u8]>,
    category: Category,
    value: Option<u32>,
}

impl CatalogEntry {
    pub fn new(category: Category, name: impl Into<Box<str>>, literal: impl AsRef<[u8]>) -> Self {
        CatalogEntry {
            name: name.into(),
            literal: literal.as_ref().into(),
            category,
            value: None,
        }
    }

    /// Entry whose canonical name is its own literal (`if`, `memory`, ...).
    pub fn word(category: Category, literal: &str) -> Self {
        Self::new(category, literal, literal)
    }

    /// Attach the numeric identity (bit width or opcode value).
    #[must_use]
    pub fn with_value(mut self, value: u32) -> Self {
        self.value = Some(value);
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn literal(&self) -> &[u8] {
        &self.literal
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }

    #[inline]
    pub fn value(&self) -> Option<u32> {
        self.value
    }
}

impl fmt::Debug for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("CatalogEntry");
        s.field("category", &self.category)
            .field("name", &self.name)
            .field("literal", &String::from_utf8_lossy(&self.literal));
        if let Some(value) = self.value {
            s.field("value", &value);
        }
        s.finish()
    }
}

/// Configuration error detected while building the catalog or tokenizer.
///
/// Always fatal: a process must not tokenize with a catalog that failed
/// validation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate {category} literal `{literal}` declared by `{first}` and `{second}`")]
    DuplicateLiteral {
        category: Category,
        literal: String,
        first: String,
        second: String,
    },
    #[error("{category} `{name}` has an empty literal")]
    EmptyLiteral { category: Category, name: String },
    #[error("{category} `{name}` requires a numeric value")]
    MissingValue { category: Category, name: String },
    #[error("{category} `{name}` has value {value}, expected {min}..={max}")]
    ValueOutOfRange {
        category: Category,
        name: String,
        value: u32,
        min: u32,
        max: u32,
    },
    #[error("{0} category appears more than once in the priority order")]
    DuplicatePriority(Category),
}

/// A literal registered in more than one category.
///
/// Not an error: the tokenizer's priority order decides deterministically
/// which category wins. Reported so configuration authors can see which
/// entries are unreachable through the default order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiteralOverlap<'c> {
    pub literal: &'c [u8],
    /// Categories declaring the literal, in [`Category`] order.
    pub categories: Vec<Category>,
}

/// Category-partitioned, validated entry tables.
#[derive(Clone, Debug, Default)]
pub struct TokenCatalog {
    tables: [Vec<CatalogEntry>; Category::COUNT],
}

impl TokenCatalog {
    /// Validate `entries` and build the catalog.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn load(entries: impl IntoIterator<Item = CatalogEntry>) -> Result<Self, CatalogError> {
        let mut tables: [Vec<CatalogEntry>; Category::COUNT] = Default::default();
        for entry in entries {
            check_entry(&entry)?;
            tables[entry.category.index()].push(entry);
        }

        for table in &tables {
            check_unique_literals(table)?;
        }

        for category in Category::ALL {
            let count = tables[category.index()].len();
            if count > 0 {
                debug!(%category, count, "catalog category loaded");
            }
        }

        Ok(TokenCatalog { tables })
    }

    /// Entries of `category` in declaration order.
    #[inline]
    pub fn entries(&self, category: Category) -> &[CatalogEntry] {
        &self.tables[category.index()]
    }

    #[inline]
    pub fn entry(&self, category: Category, index: usize) -> Option<&CatalogEntry> {
        self.tables[category.index()].get(index)
    }

    /// Total number of entries across all categories.
    pub fn len(&self) -> usize {
        self.tables.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.iter().all(Vec::is_empty)
    }

    /// Categories with at least one entry, in [`Category`] order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL
            .into_iter()
            .filter(|c| !self.tables[c.index()].is_empty())
    }

    /// Literals declared in more than one category, sorted by literal.
    pub fn overlaps(&self) -> Vec<LiteralOverlap<'_>> {
        let mut seen: FxHashMap<&[u8], Vec<Category>> = FxHashMap::default();
        for category in Category::ALL {
            for entry in self.entries(category) {
                seen.entry(entry.literal()).or_default().push(category);
            }
        }

        let mut overlaps: Vec<LiteralOverlap<'_>> = seen
            .into_iter()
            .filter(|(_, categories)| categories.len() > 1)
            .map(|(literal, categories)| LiteralOverlap {
                literal,
                categories,
            })
            .collect();
        overlaps.sort_by(|a, b| a.literal.cmp(b.literal));
        overlaps
    }
}

fn check_entry(entry: &CatalogEntry) -> Result<(), CatalogError> {
    let category = entry.category;
    if entry.literal.is_empty() {
        return Err(CatalogError::EmptyLiteral {
            category,
            name: entry.name.to_string(),
        });
    }

    let Some((min, max)) = category.value_range() else {
        return Ok(());
    };
    match entry.value {
        None if category.requires_value() => Err(CatalogError::MissingValue {
            category,
            name: entry.name.to_string(),
        }),
        Some(value) if value < min || value > max => Err(CatalogError::ValueOutOfRange {
            category,
            name: entry.name.to_string(),
            value,
            min,
            max,
        }),
        _ => Ok(()),
    }
}

fn check_unique_literals(table: &[CatalogEntry]) -> Result<(), CatalogError> {
    let mut first_by_literal: FxHashMap<&[u8], &CatalogEntry> = FxHashMap::default();
    for entry in table {
        if let Some(first) = first_by_literal.insert(entry.literal(), entry) {
            return Err(CatalogError::DuplicateLiteral {
                category: entry.category,
                literal: String::from_utf8_lossy(entry.literal()).into_owned(),
                first: first.name.to_string(),
                second: entry.name.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
