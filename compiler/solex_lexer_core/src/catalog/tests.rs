use pretty_assertions::assert_eq;

use super::*;

fn keyword(literal: &str) -> CatalogEntry {
    CatalogEntry::word(Category::Keyword, literal)
}

// === Loading ===

#[test]
fn preserves_declaration_order_per_category() {
    let catalog = TokenCatalog::load([
        keyword("if"),
        CatalogEntry::new(Category::Delimiter, "LPAREN", "("),
        keyword("else"),
        keyword("for"),
    ])
    .unwrap();

    let names: Vec<&str> = catalog
        .entries(Category::Keyword)
        .iter()
        .map(CatalogEntry::name)
        .collect();
    assert_eq!(names, vec!["if", "else", "for"]);
    assert_eq!(catalog.entries(Category::Delimiter).len(), 1);
    assert_eq!(catalog.len(), 4);
    assert!(!catalog.is_empty());
}

#[test]
fn empty_catalog_is_valid() {
    let catalog = TokenCatalog::load(Vec::<CatalogEntry>::new()).unwrap();
    assert!(catalog.is_empty());
    assert_eq!(catalog.categories().count(), 0);
}

#[test]
fn categories_lists_non_empty_in_order() {
    let catalog = TokenCatalog::load([
        CatalogEntry::word(Category::OpCode, "add").with_value(1),
        keyword("if"),
    ])
    .unwrap();
    let categories: Vec<Category> = catalog.categories().collect();
    assert_eq!(categories, vec![Category::Keyword, Category::OpCode]);
}

#[test]
fn entry_lookup_by_index() {
    let catalog = TokenCatalog::load([keyword("if"), keyword("else")]).unwrap();
    assert_eq!(
        catalog.entry(Category::Keyword, 1).map(CatalogEntry::name),
        Some("else")
    );
    assert!(catalog.entry(Category::Keyword, 2).is_none());
    assert!(catalog.entry(Category::Reserved, 0).is_none());
}

// === Validation ===

#[test]
fn rejects_duplicate_literal_in_one_category() {
    let err = TokenCatalog::load([
        CatalogEntry::new(Category::Delimiter, "LPAREN", "("),
        CatalogEntry::new(Category::Delimiter, "OPEN", "("),
    ])
    .unwrap_err();
    assert_eq!(
        err,
        CatalogError::DuplicateLiteral {
            category: Category::Delimiter,
            literal: "(".to_string(),
            first: "LPAREN".to_string(),
            second: "OPEN".to_string(),
        }
    );
}

#[test]
fn same_literal_in_different_categories_is_allowed() {
    let catalog = TokenCatalog::load([
        keyword("return"),
        CatalogEntry::word(Category::OpCode, "return").with_value(0xF3),
    ])
    .unwrap();
    assert_eq!(catalog.len(), 2);
}

#[test]
fn rejects_empty_literal() {
    let err = TokenCatalog::load([keyword("if"), CatalogEntry::new(Category::Keyword, "nothing", "")])
        .unwrap_err();
    assert_eq!(
        err,
        CatalogError::EmptyLiteral {
            category: Category::Keyword,
            name: "nothing".to_string(),
        }
    );
}

#[test]
fn rejects_uint_without_width() {
    let err = TokenCatalog::load([CatalogEntry::word(Category::UInt, "uint8")]).unwrap_err();
    assert_eq!(
        err,
        CatalogError::MissingValue {
            category: Category::UInt,
            name: "uint8".to_string(),
        }
    );
}

#[test]
fn rejects_opcode_value_above_byte() {
    let err = TokenCatalog::load([CatalogEntry::word(Category::OpCode, "bogus").with_value(0x100)])
        .unwrap_err();
    assert!(matches!(
        err,
        CatalogError::ValueOutOfRange {
            category: Category::OpCode,
            value: 0x100,
            ..
        }
    ));
}

#[test]
fn rejects_zero_width_uint() {
    let err =
        TokenCatalog::load([CatalogEntry::word(Category::UInt, "uint0").with_value(0)]).unwrap_err();
    assert!(matches!(err, CatalogError::ValueOutOfRange { min: 1, max: 256, .. }));
}

#[test]
fn value_on_named_category_is_ignored() {
    let catalog = TokenCatalog::load([keyword("if").with_value(99_999)]).unwrap();
    assert_eq!(catalog.entries(Category::Keyword)[0].value(), Some(99_999));
}

#[test]
fn error_messages_name_the_entry() {
    let err = CatalogError::DuplicateLiteral {
        category: Category::Keyword,
        literal: "if".to_string(),
        first: "if".to_string(),
        second: "IF".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "duplicate keyword literal `if` declared by `if` and `IF`"
    );
    assert_eq!(
        CatalogError::DuplicatePriority(Category::UInt).to_string(),
        "unsigned integer type category appears more than once in the priority order"
    );
}

// === Overlaps ===

#[test]
fn overlaps_report_cross_category_literals() {
    let catalog = TokenCatalog::load([
        keyword("return"),
        keyword("if"),
        CatalogEntry::word(Category::ElementaryType, "address"),
        CatalogEntry::word(Category::OpCode, "return").with_value(0xF3),
        CatalogEntry::word(Category::OpCode, "address").with_value(0x30),
        CatalogEntry::word(Category::OpCode, "add").with_value(0x01),
    ])
    .unwrap();

    let overlaps = catalog.overlaps();
    assert_eq!(
        overlaps,
        vec![
            LiteralOverlap {
                literal: b"address",
                categories: vec![Category::ElementaryType, Category::OpCode],
            },
            LiteralOverlap {
                literal: b"return",
                categories: vec![Category::Keyword, Category::OpCode],
            },
        ]
    );
}

#[test]
fn entry_debug_shows_literal_text() {
    let entry = CatalogEntry::new(Category::Delimiter, "LPAREN", "(");
    let rendered = format!("{entry:?}");
    assert!(rendered.contains("LPAREN"));
    assert!(rendered.contains("\"(\""));
}
