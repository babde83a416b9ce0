//! Per-category classification: longest match with boundary fallback.
//!
//! A boundary rejection is not a classification failure. The classifier
//! walks every candidate the matcher yields, longest first, and takes the
//! first one whose following byte passes the category's boundary rule. A
//! category without a rule takes the longest candidate outright.

use tracing::trace;

use crate::boundary::BoundaryRule;
use crate::catalog::CatalogEntry;
use crate::matcher::{Candidate, LiteralMatcher};
use crate::Category;

/// This category does not apply at the current position.
///
/// Normal control flow inside the tokenizer; never surfaced to its caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NoMatch;

#[derive(Clone, Debug)]
pub struct CategoryClassifier {
    category: Category,
    matcher: LiteralMatcher,
    boundary: Option<BoundaryRule>,
}

impl CategoryClassifier {
    pub fn new(category: Category, entries: &[CatalogEntry], boundary: Option<BoundaryRule>) -> Self {
        CategoryClassifier {
            category,
            matcher: LiteralMatcher::build(entries),
            boundary,
        }
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }

    #[inline]
    pub fn boundary(&self) -> Option<&BoundaryRule> {
        self.boundary.as_ref()
    }

    #[inline]
    pub fn matcher(&self) -> &LiteralMatcher {
        &self.matcher
    }

    /// Classify the start of `input` against this category.
    pub fn classify(&self, input: &[u8]) -> Result<Candidate, NoMatch> {
        let Some(rule) = &self.boundary else {
            return self.matcher.longest_match(input).ok_or(NoMatch);
        };

        for candidate in self.matcher.candidates(input) {
            if rule.accepts(&input[candidate.len..]) {
                return Ok(candidate);
            }
            trace!(
                category = %self.category,
                len = candidate.len,
                next = input.get(candidate.len).copied(),
                "boundary rejected candidate"
            );
        }
        Err(NoMatch)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
