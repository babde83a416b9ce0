//! Priority-ordered classification across categories.
//!
//! The [`Tokenizer`] owns the catalog and one [`CategoryClassifier`] per
//! category, in a fixed priority order chosen at build time. Each call tries
//! the classifiers in that order and returns the first success. There is no
//! backtracking across categories: if an earlier category matches, later
//! categories are never consulted, even if they would match a longer
//! literal. The order is part of the contract, so callers configure it
//! explicitly (reserved words before anything that could swallow them,
//! multi-byte operators before single-byte delimiters that share a prefix).
//!
//! Nothing is mutated after [`TokenizerBuilder::build`]; a `Tokenizer` is
//! `Send + Sync` and can be shared by reference across threads.

use tracing::{debug, trace, warn};

use crate::boundary::{BoundaryRule, BoundarySet};
use crate::catalog::{CatalogError, TokenCatalog};
use crate::classifier::CategoryClassifier;
use crate::{Category, Token};

/// A successful classification.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Classification<'t, 'i> {
    pub token: Token<'t>,
    /// Bytes consumed: exactly the matched literal's length.
    pub len: usize,
    /// Unconsumed input, borrowed from the caller's buffer.
    pub rest: &'i [u8],
}

/// No category matched at `offset`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("unrecognized token at byte {offset} ({})", describe_found(.found))]
pub struct UnrecognizedToken {
    /// Byte offset of the first unmatched byte.
    pub offset: usize,
    /// The byte at `offset`, or `None` at end of input.
    pub found: Option<u8>,
}

fn describe_found(found: &Option<u8>) -> String {
    match found {
        None => "end of input".to_string(),
        Some(b) if b.is_ascii_graphic() => format!("found `{}`", char::from(*b)),
        Some(b) => format!("found byte 0x{b:02x}"),
    }
}

#[derive(Clone, Debug)]
pub struct Tokenizer {
    catalog: TokenCatalog,
    classifiers: Vec<CategoryClassifier>,
}

impl Tokenizer {
    /// Start configuring a tokenizer over `catalog`.
    pub fn builder(catalog: TokenCatalog) -> TokenizerBuilder {
        TokenizerBuilder {
            catalog,
            order: Vec::new(),
        }
    }

    #[inline]
    pub fn catalog(&self) -> &TokenCatalog {
        &self.catalog
    }

    /// Classifiers in priority order.
    #[inline]
    pub fn classifiers(&self) -> &[CategoryClassifier] {
        &self.classifiers
    }

    /// Categories in priority order.
    pub fn priority(&self) -> impl Iterator<Item = Category> + '_ {
        self.classifiers.iter().map(CategoryClassifier::category)
    }

    /// Classify the start of `input`.
    ///
    /// Offsets in the error are relative to `input`, so a failure here
    /// always reports offset `0`. Use [`Tokenizer::classify_at`] to report
    /// offsets into a larger buffer.
    pub fn classify_any<'i>(
        &self,
        input: &'i [u8],
    ) -> Result<Classification<'_, 'i>, UnrecognizedToken> {
        self.classify_at(input, 0)
    }

    /// Classify `source[offset..]`, reporting absolute offsets.
    pub fn classify_at<'i>(
        &self,
        source: &'i [u8],
        offset: usize,
    ) -> Result<Classification<'_, 'i>, UnrecognizedToken> {
        let input = source.get(offset..).unwrap_or_default();

        for classifier in &self.classifiers {
            let Ok(candidate) = classifier.classify(input) else {
                continue;
            };
            let category = classifier.category();
            let Some(entry) = self.catalog.entry(category, candidate.index) else {
                continue;
            };
            trace!(offset, %category, len = candidate.len, "classified");
            return Ok(Classification {
                token: Token::from_entry(entry),
                len: candidate.len,
                rest: &input[candidate.len..],
            });
        }

        let err = UnrecognizedToken {
            offset,
            found: input.first().copied(),
        };
        debug!(%err, "no category matched");
        Err(err)
    }
}

/// Configures the category priority order of a [`Tokenizer`].
#[derive(Debug)]
#[must_use]
pub struct TokenizerBuilder {
    catalog: TokenCatalog,
    order: Vec<(Category, Option<BoundaryRule>)>,
}

impl TokenizerBuilder {
    /// Append `category` to the priority order without a boundary rule.
    pub fn category(mut self, category: Category) -> Self {
        self.order.push((category, None));
        self
    }

    /// Append `category` with a boundary rule allowing `allowed`.
    pub fn bounded(mut self, category: Category, allowed: BoundarySet) -> Self {
        self.order.push((category, Some(BoundaryRule::new(allowed))));
        self
    }

    /// Derive the matchers and freeze the tokenizer.
    #[tracing::instrument(level = "debug", skip_all, fields(categories = self.order.len()))]
    pub fn build(self) -> Result<Tokenizer, CatalogError> {
        let mut listed = [false; Category::COUNT];
        for &(category, _) in &self.order {
            if std::mem::replace(&mut listed[category.index()], true) {
                return Err(CatalogError::DuplicatePriority(category));
            }
        }

        for category in self.catalog.categories() {
            if !listed[category.index()] {
                warn!(%category, "catalog category is not in the priority order and will never match");
            }
        }

        let classifiers = self
            .order
            .into_iter()
            .map(|(category, boundary)| {
                CategoryClassifier::new(category, self.catalog.entries(category), boundary)
            })
            .collect();

        Ok(Tokenizer {
            catalog: self.catalog,
            classifiers,
        })
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
