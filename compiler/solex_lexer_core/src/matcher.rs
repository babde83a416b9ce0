//! Longest-first multi-literal prefix matching for one category.
//!
//! A [`LiteralMatcher`] answers one question: which literals of this
//! category are byte-exact prefixes of the input? Every answer is ordered
//! longest first (ties by declaration order), so a shorter literal can never
//! shadow a longer one that also matches (`uint8` vs `uint80`, `gas` vs
//! `gasprice`).
//!
//! Two strategies produce identical candidate sequences:
//!
//! - **Linear**: entries pre-sorted by descending literal length, scanned
//!   with `starts_with`. Cheapest for small categories (delimiters,
//!   storage locations, units).
//! - **Trie**: a byte-indexed jump table for the first byte, then sorted
//!   edge lists. Cost is proportional to the longest match, not to the
//!   category size (opcodes, reserved words, integer widths).
//!
//! [`LiteralMatcher::build`] picks the strategy from the category size.

use std::cmp::Reverse;

use smallvec::SmallVec;
use tracing::debug;

use crate::catalog::CatalogEntry;

/// Categories with more entries than this are matched with a trie.
pub const TRIE_THRESHOLD: usize = 32;

/// A literal that matched as a prefix of the input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// Index of the entry in its category's declaration order.
    pub index: usize,
    /// Length of the matched literal in bytes.
    pub len: usize,
}

/// Candidates for one input position, longest first.
///
/// Almost always zero to two entries, so they live inline.
pub type Candidates = SmallVec<[Candidate; 4]>;

#[derive(Clone, Debug)]
pub struct LiteralMatcher {
    strategy: Strategy,
    entry_count: usize,
    longest: usize,
}

#[derive(Clone, Debug)]
enum Strategy {
    Linear(LinearTable),
    Trie(PrefixTrie),
}

impl LiteralMatcher {
    /// Build a matcher over one category's entries, choosing the strategy
    /// from the entry count.
    pub fn build(entries: &[CatalogEntry]) -> Self {
        if entries.len() > TRIE_THRESHOLD {
            Self::trie(entries)
        } else {
            Self::linear(entries)
        }
    }

    /// Build a matcher that always scans linearly.
    pub fn linear(entries: &[CatalogEntry]) -> Self {
        Self::with_strategy(entries, Strategy::Linear(LinearTable::new(entries)))
    }

    /// Build a matcher that always walks a prefix trie.
    pub fn trie(entries: &[CatalogEntry]) -> Self {
        Self::with_strategy(entries, Strategy::Trie(PrefixTrie::new(entries)))
    }

    fn with_strategy(entries: &[CatalogEntry], strategy: Strategy) -> Self {
        let longest = entries.iter().map(|e| e.literal().len()).max().unwrap_or(0);
        let matcher = LiteralMatcher {
            strategy,
            entry_count: entries.len(),
            longest,
        };
        debug!(
            entries = matcher.entry_count,
            longest,
            trie = matcher.uses_trie(),
            "literal matcher built"
        );
        matcher
    }

    /// Every entry whose literal prefixes `input`, longest first.
    pub fn candidates(&self, input: &[u8]) -> Candidates {
        match &self.strategy {
            Strategy::Linear(table) => table.candidates(input),
            Strategy::Trie(trie) => trie.candidates(input),
        }
    }

    /// The longest entry whose literal prefixes `input`.
    pub fn longest_match(&self, input: &[u8]) -> Option<Candidate> {
        match &self.strategy {
            Strategy::Linear(table) => table.first(input),
            Strategy::Trie(trie) => trie.candidates(input).first().copied(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entry_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }

    /// Length of the longest literal, in bytes.
    #[inline]
    pub fn longest_literal(&self) -> usize {
        self.longest
    }

    #[inline]
    pub fn uses_trie(&self) -> bool {
        matches!(self.strategy, Strategy::Trie(_))
    }
}

// === Linear strategy ===

/// Literals sorted by descending length; the sort is stable so equal
/// lengths keep declaration order.
#[derive(Clone, Debug)]
struct LinearTable {
    order: Vec<(Box<[u8]>, usize)>,
}

impl LinearTable {
    fn new(entries: &[CatalogEntry]) -> Self {
        let mut order: Vec<(Box<[u8]>, usize)> = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (Box::from(entry.literal()), index))
            .collect();
        order.sort_by_key(|(literal, _)| Reverse(literal.len()));
        LinearTable { order }
    }

    fn matching<'a>(&'a self, input: &'a [u8]) -> impl Iterator<Item = Candidate> + 'a {
        self.order
            .iter()
            .filter(move |(literal, _)| input.starts_with(literal))
            .map(|(literal, index)| Candidate {
                index: *index,
                len: literal.len(),
            })
    }

    fn candidates(&self, input: &[u8]) -> Candidates {
        self.matching(input).collect()
    }

    fn first(&self, input: &[u8]) -> Option<Candidate> {
        self.matching(input).next()
    }
}

// === Trie strategy ===

/// Index of the root node. Never a child, so `0` in the jump table means
/// "no edge".
const ROOT: u32 = 0;

#[derive(Clone, Debug, Default)]
struct TrieNode {
    /// Outgoing edges sorted by byte.
    edges: Vec<(u8, u32)>,
    /// Entry whose literal ends at this node.
    terminal: Option<usize>,
}

impl TrieNode {
    #[inline]
    fn child(&self, byte: u8) -> Option<u32> {
        self.edges
            .binary_search_by_key(&byte, |&(b, _)| b)
            .ok()
            .map(|i| self.edges[i].1)
    }
}

#[derive(Clone, Debug)]
struct PrefixTrie {
    /// First-byte dispatch: node reached after consuming that byte.
    root: Box<[u32; 256]>,
    nodes: Vec<TrieNode>,
}

impl PrefixTrie {
    fn new(entries: &[CatalogEntry]) -> Self {
        let mut trie = PrefixTrie {
            root: Box::new([ROOT; 256]),
            nodes: vec![TrieNode::default()],
        };
        for (index, entry) in entries.iter().enumerate() {
            trie.insert(entry.literal(), index);
        }
        trie
    }

    fn push_node(&mut self) -> u32 {
        let id = u32::try_from(self.nodes.len()).unwrap_or(u32::MAX);
        self.nodes.push(TrieNode::default());
        id
    }

    fn insert(&mut self, literal: &[u8], index: usize) {
        let Some((&first, tail)) = literal.split_first() else {
            return;
        };

        let mut node = self.root[usize::from(first)];
        if node == ROOT {
            node = self.push_node();
            self.root[usize::from(first)] = node;
        }

        for &byte in tail {
            let current = node as usize;
            node = match self.nodes[current]
                .edges
                .binary_search_by_key(&byte, |&(b, _)| b)
            {
                Ok(i) => self.nodes[current].edges[i].1,
                Err(pos) => {
                    let child = self.push_node();
                    self.nodes[current].edges.insert(pos, (byte, child));
                    child
                }
            };
        }

        // Keep the first declaration if a literal repeats.
        let terminal = &mut self.nodes[node as usize].terminal;
        if terminal.is_none() {
            *terminal = Some(index);
        }
    }

    fn candidates(&self, input: &[u8]) -> Candidates {
        let mut found = Candidates::new();
        let Some(&first) = input.first() else {
            return found;
        };

        let mut node = self.root[usize::from(first)];
        if node == ROOT {
            return found;
        }

        let mut depth = 1;
        loop {
            let current = &self.nodes[node as usize];
            if let Some(index) = current.terminal {
                found.push(Candidate { index, len: depth });
            }
            let Some(&byte) = input.get(depth) else {
                break;
            };
            match current.child(byte) {
                Some(next) => {
                    node = next;
                    depth += 1;
                }
                None => break,
            }
        }

        // Collected shortest first while descending.
        found.reverse();
        found
    }
}
