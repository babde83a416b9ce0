//! Behaviour of the tokenizer built from the shipped literal tables.

#![allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]

use pretty_assertions::assert_eq;
use solex_lexer::{default_tokenizer, lex, Category, Token, Tokenizer, UnrecognizedToken};

fn tokenizer() -> &'static Tokenizer {
    match default_tokenizer() {
        Ok(tokenizer) => tokenizer,
        Err(err) => panic!("default tables failed to load: {err}"),
    }
}

fn tokens_of(source: &str) -> Vec<Option<Token<'static>>> {
    let output = lex(tokenizer(), source.as_bytes()).unwrap();
    let mut merged: Vec<(u32, Option<Token<'static>>)> = output
        .tokens
        .iter()
        .map(|l| (l.span.start, Some(l.token)))
        .chain(output.errors.iter().map(|e| (e.span.start, None)))
        .collect();
    merged.sort_by_key(|(start, _)| *start);
    merged.into_iter().map(|(_, token)| token).collect()
}

#[test]
fn every_reachable_literal_round_trips() {
    let tokenizer = tokenizer();
    let catalog = tokenizer.catalog();
    let priority: Vec<Category> = tokenizer.priority().collect();

    for (rank, &category) in priority.iter().enumerate() {
        for entry in catalog.entries(category) {
            let shadowed = priority[..rank].iter().any(|&earlier| {
                catalog
                    .entries(earlier)
                    .iter()
                    .any(|e| e.literal() == entry.literal())
            });
            if shadowed {
                continue;
            }

            let mut input = entry.literal().to_vec();
            input.push(b' ');
            let result = tokenizer
                .classify_any(&input)
                .unwrap_or_else(|err| panic!("{entry:?}: {err}"));
            assert_eq!(result.token.category(), category, "{entry:?}");
            assert_eq!(result.len, entry.literal().len(), "{entry:?}");
            assert_eq!(result.rest, b" ", "{entry:?}");
        }
    }
}

#[test]
fn uint_boundary_cases() {
    let tokenizer = tokenizer();
    assert_eq!(
        tokenizer.classify_any(b"uint8a"),
        Err(UnrecognizedToken {
            offset: 0,
            found: Some(b'u'),
        })
    );

    let result = tokenizer.classify_any(b"uint8 ").unwrap();
    assert_eq!(result.token, Token::UInt(8));
    assert_eq!(result.rest, b" ");

    let result = tokenizer.classify_any(b"uint16)").unwrap();
    assert_eq!(result.token, Token::UInt(16));
    assert_eq!(result.rest, b")");

    assert_eq!(tokenizer.classify_any(b"uint ").unwrap().token, Token::UInt(256));
    assert_eq!(tokenizer.classify_any(b"uint160,").unwrap().token, Token::UInt(160));
}

#[test]
fn overlapping_literals_follow_priority() {
    let tokenizer = tokenizer();
    assert_eq!(
        tokenizer.classify_any(b"return;").unwrap().token,
        Token::Keyword("return")
    );
    assert_eq!(
        tokenizer.classify_any(b"address)").unwrap().token,
        Token::ElementaryType("address")
    );
    assert_eq!(
        tokenizer.classify_any(b"byte ").unwrap().token,
        Token::ElementaryType("byte")
    );
}

#[test]
fn word_boundaries_reject_identifier_tails() {
    let tokenizer = tokenizer();
    assert_eq!(
        tokenizer.classify_any(b"iszero(").unwrap().token,
        Token::OpCode {
            name: "iszero",
            code: 0x15
        }
    );
    assert_eq!(
        tokenizer.classify_any(b"returns (").unwrap().token,
        Token::Keyword("returns")
    );
    assert!(tokenizer.classify_any(b"bytes32 ").is_err());
    assert!(tokenizer.classify_any(b"iffy").is_err());
}

#[test]
fn compound_assignment_is_not_split() {
    let tokenizer = tokenizer();
    assert_eq!(
        tokenizer.classify_any(b":= 1").unwrap().token,
        Token::Assignment("assign_assembly")
    );
    assert_eq!(
        tokenizer.classify_any(b">>>= 1").unwrap().token,
        Token::Assignment("assign_arithmetic_right_shift")
    );
    assert_eq!(
        tokenizer.classify_any(b": ").unwrap().token,
        Token::Delimiter("COLON")
    );
}

#[test]
fn lexes_function_header() {
    let tokens = tokens_of(
        "function transfer(address to, uint256 amount) external returns (bool) {",
    );
    assert_eq!(
        tokens,
        vec![
            Some(Token::Keyword("function")),
            None,
            Some(Token::Delimiter("LPAREN")),
            Some(Token::ElementaryType("address")),
            None,
            Some(Token::Delimiter("COMMA")),
            Some(Token::UInt(256)),
            None,
            Some(Token::Delimiter("RPAREN")),
            Some(Token::Keyword("external")),
            Some(Token::Keyword("returns")),
            Some(Token::Delimiter("LPAREN")),
            Some(Token::ElementaryType("bool")),
            Some(Token::Delimiter("RPAREN")),
            Some(Token::Delimiter("LBRACE")),
        ]
    );
}

#[test]
fn lexes_inline_assembly() {
    let tokens = tokens_of("assembly { let x := add(mload(0x40), 32) }");
    assert_eq!(
        tokens,
        vec![
            Some(Token::Keyword("assembly")),
            Some(Token::Delimiter("LBRACE")),
            Some(Token::Reserved("let")),
            None,
            Some(Token::Assignment("assign_assembly")),
            Some(Token::OpCode {
                name: "add",
                code: 0x01
            }),
            Some(Token::Delimiter("LPAREN")),
            Some(Token::OpCode {
                name: "mload",
                code: 0x51
            }),
            Some(Token::Delimiter("LPAREN")),
            None,
            Some(Token::Delimiter("RPAREN")),
            Some(Token::Delimiter("COMMA")),
            None,
            Some(Token::Delimiter("RPAREN")),
            Some(Token::Delimiter("RBRACE")),
        ]
    );
}

#[test]
fn lexes_units_and_storage() {
    let tokens = tokens_of("uint[] memory fees = 1 ether;");
    assert_eq!(
        tokens,
        vec![
            Some(Token::UInt(256)),
            Some(Token::Delimiter("LBRACKET")),
            Some(Token::Delimiter("RBRACKET")),
            Some(Token::StorageLocation("memory")),
            None,
            Some(Token::Assignment("assign")),
            None,
            Some(Token::NumberUnit("ether")),
            Some(Token::Delimiter("SEMICOLON")),
        ]
    );
}

#[test]
fn shared_across_threads() {
    let results: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    let tokenizer = tokenizer();
                    let result = tokenizer.classify_any(b"selfdestruct(").unwrap();
                    result.token.to_string()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(results.iter().all(|r| r == "OpCode(selfdestruct = 0xff)"));
}
