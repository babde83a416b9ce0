//! Boundary disambiguation for literals that prefix longer identifiers.
//!
//! A literal such as `uint8` is a proper prefix of `uint80`, and `is` is a
//! proper prefix of `iszero`. Longest-match alone cannot tell `uint8` apart
//! from the start of an identifier `uint8a`, so categories of word-like
//! literals attach a [`BoundaryRule`]: the byte after a candidate must be in
//! the rule's [`BoundarySet`] (end of input always passes).

use std::fmt;

/// A fixed set of bytes, stored as a 256-bit bitmap.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct BoundarySet {
    bits: [u64; 4],
}

impl BoundarySet {
    /// The empty set. Only end of input passes a rule built from it.
    pub const EMPTY: BoundarySet = BoundarySet { bits: [0; 4] };

    /// Set containing exactly `bytes`.
    pub const fn from_bytes(bytes: &[u8]) -> Self {
        let mut bits = [0u64; 4];
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            bits[(b >> 6) as usize] |= 1 << (b & 63);
            i += 1;
        }
        BoundarySet { bits }
    }

    /// Every byte that cannot continue an identifier.
    ///
    /// Identifier bytes are ASCII letters, digits, `_` and `$`. Bytes at or
    /// above `0x80` are also excluded so a literal is never split from a
    /// trailing multi-byte character.
    pub const fn word_boundary() -> Self {
        let mut bits = [0u64; 4];
        let mut b: usize = 0;
        while b < 0x80 {
            let byte = b as u8;
            if !is_word_byte(byte) {
                bits[b >> 6] |= 1 << (b & 63);
            }
            b += 1;
        }
        BoundarySet { bits }
    }

    #[inline]
    pub const fn contains(&self, byte: u8) -> bool {
        self.bits[(byte >> 6) as usize] & (1 << (byte & 63)) != 0
    }

    #[must_use]
    pub const fn union(self, other: BoundarySet) -> Self {
        BoundarySet {
            bits: [
                self.bits[0] | other.bits[0],
                self.bits[1] | other.bits[1],
                self.bits[2] | other.bits[2],
                self.bits[3] | other.bits[3],
            ],
        }
    }

    pub const fn len(&self) -> u32 {
        self.bits[0].count_ones()
            + self.bits[1].count_ones()
            + self.bits[2].count_ones()
            + self.bits[3].count_ones()
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(|&b| self.contains(b))
    }
}

impl fmt::Debug for BoundarySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(|b| char::from(b).escape_default().to_string()))
            .finish()
    }
}

/// Bytes that may continue an identifier.
#[inline]
pub const fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'$'
}

/// Rejects a candidate unless the byte after it is a boundary byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoundaryRule {
    allowed: BoundarySet,
}

impl BoundaryRule {
    pub const fn new(allowed: BoundarySet) -> Self {
        BoundaryRule { allowed }
    }

    #[inline]
    pub const fn allowed(&self) -> &BoundarySet {
        &self.allowed
    }

    /// Check the input left over after a candidate literal.
    #[inline]
    pub fn accepts(&self, rest: &[u8]) -> bool {
        match rest.first() {
            None => true,
            Some(&next) => self.allowed.contains(next),
        }
    }
}
