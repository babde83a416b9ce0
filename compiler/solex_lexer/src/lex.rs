//! Whole-source lexing on top of the single-position tokenizer.
//!
//! The tokenizer classifies one position at a time and reports failure
//! without guessing. This layer walks a whole buffer: it skips ASCII
//! whitespace between tokens, attaches byte spans, and (in [`lex`]) keeps
//! going after an unrecognized token by skipping the offending run.

use std::iter::FusedIterator;

use solex_lexer_core::{is_word_byte, Span, SpanError, Token, Tokenizer, UnrecognizedToken};
use tracing::trace;

/// A token and where it came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Lexeme<'t> {
    pub token: Token<'t>,
    pub span: Span,
}

/// A skipped run of unrecognized input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LexError {
    pub error: UnrecognizedToken,
    /// Bytes skipped to resume lexing.
    pub span: Span,
}

/// Result of lexing a whole source with recovery.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput<'t> {
    pub tokens: Vec<Lexeme<'t>>,
    pub errors: Vec<LexError>,
}

impl LexOutput<'_> {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[inline]
fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0C)
}

/// Reject sources whose offsets do not fit a [`Span`].
fn check_source_len(len: usize) -> Result<(), SpanError> {
    Span::try_from_range(0..len).map(|_| ())
}

/// Span for a byte range within a source accepted by [`check_source_len`].
fn span(start: usize, end: usize) -> Span {
    let offset = |offset: usize| u32::try_from(offset).unwrap_or(u32::MAX);
    Span::new(offset(start), offset(end))
}

/// Iterator over the tokens of a source, stopping at the first error.
///
/// Yields `Err` once for an unrecognized token and then ends.
#[derive(Clone, Debug)]
pub struct TokenStream<'t, 's> {
    tokenizer: &'t Tokenizer,
    source: &'s [u8],
    pos: usize,
    done: bool,
}

impl<'t, 's> TokenStream<'t, 's> {
    /// Fails if `source` is too large for `u32` byte spans.
    pub fn new(tokenizer: &'t Tokenizer, source: &'s [u8]) -> Result<Self, SpanError> {
        check_source_len(source.len())?;
        Ok(TokenStream {
            tokenizer,
            source,
            pos: 0,
            done: false,
        })
    }

    /// Current byte offset into the source.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn skip_whitespace(&mut self) {
        while self.source.get(self.pos).copied().is_some_and(is_whitespace) {
            self.pos += 1;
        }
    }

    /// Skip the run starting at the current position: an identifier-like
    /// run of word bytes, otherwise one character.
    fn skip_unrecognized(&mut self) -> usize {
        let start = self.pos;
        let rest = &self.source[start..];
        let len = match rest.first() {
            None => 0,
            Some(&b) if is_word_byte(b) => rest.iter().take_while(|&&b| is_word_byte(b)).count(),
            Some(_) => 1 + rest[1..].iter().take_while(|&&b| b & 0xC0 == 0x80).count(),
        };
        self.pos += len;
        len
    }
}

impl<'t> Iterator for TokenStream<'t, '_> {
    type Item = Result<Lexeme<'t>, UnrecognizedToken>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.skip_whitespace();
        if self.pos >= self.source.len() {
            self.done = true;
            return None;
        }

        let start = self.pos;
        match self.tokenizer.classify_at(self.source, start) {
            Ok(classified) => {
                self.pos += classified.len;
                Some(Ok(Lexeme {
                    token: classified.token,
                    span: span(start, self.pos),
                }))
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for TokenStream<'_, '_> {}

/// Lex all of `source`, recording unrecognized runs and continuing past them.
///
/// Fails only if `source` is too large for `u32` byte spans.
pub fn lex<'t>(tokenizer: &'t Tokenizer, source: &[u8]) -> Result<LexOutput<'t>, SpanError> {
    let mut output = LexOutput::default();
    let mut stream = TokenStream::new(tokenizer, source)?;

    loop {
        match stream.next() {
            Some(Ok(lexeme)) => output.tokens.push(lexeme),
            Some(Err(error)) => {
                let start = stream.position();
                let skipped = stream.skip_unrecognized();
                trace!(offset = start, skipped, "skipping unrecognized run");
                output.errors.push(LexError {
                    error,
                    span: span(start, start + skipped),
                });
                stream.done = false;
            }
            None => break,
        }
    }

    Ok(output)
}

/// 1-based line and column (in bytes) of `offset` within `source`.
pub fn line_col(source: &[u8], offset: usize) -> (usize, usize) {
    let before = &source[..offset.min(source.len())];
    let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
    let line_start = before.iter().rposition(|&b| b == b'\n').map_or(0, |i| i + 1);
    (line, before.len() - line_start + 1)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
