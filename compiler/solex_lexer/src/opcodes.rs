//! Opcode mnemonic ↔ code lookup.
//!
//! Pure data derived from the opcode catalog entries. The tokenizer already
//! puts the code into `Token::OpCode`; this table serves consumers that
//! start from a name or a code (disassembly listings, the CLI).

use rustc_hash::FxHashMap;
use solex_lexer_core::{Category, TokenCatalog};

#[derive(Clone, Debug, Default)]
pub struct OpCodeTable {
    /// `(mnemonic, code)` in declaration order.
    entries: Vec<(Box<str>, u8)>,
    by_name: FxHashMap<Box<str>, u8>,
    /// Index into `entries` of the first mnemonic declared for each code.
    by_code: FxHashMap<u8, usize>,
}

impl OpCodeTable {
    pub fn new(catalog: &TokenCatalog) -> Self {
        let mut table = OpCodeTable::default();
        for entry in catalog.entries(Category::OpCode) {
            let Some(code) = entry.value().and_then(|v| u8::try_from(v).ok()) else {
                continue;
            };
            let index = table.entries.len();
            table.entries.push((entry.name().into(), code));
            table.by_name.insert(entry.name().into(), code);
            table.by_code.entry(code).or_insert(index);
        }
        table
    }

    pub fn code(&self, name: &str) -> Option<u8> {
        self.by_name.get(name).copied()
    }

    pub fn name(&self, code: u8) -> Option<&str> {
        self.by_code
            .get(&code)
            .map(|&index| &*self.entries[index].0)
    }

    /// `(mnemonic, code)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> + '_ {
        self.entries.iter().map(|(name, code)| (&**name, *code))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
