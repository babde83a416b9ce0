use std::fmt::Write as _;

use solex_lexer::Tokenizer;
use solex_lexer_core::{BoundaryRule, BoundarySet};

fn describe_boundary(rule: Option<&BoundaryRule>) -> String {
    match rule {
        None => "none".to_string(),
        Some(rule) if *rule.allowed() == BoundarySet::word_boundary() => "word".to_string(),
        Some(rule) => format!("{} bytes", rule.allowed().len()),
    }
}

/// Categories in priority order, then every literal claimed by more than one.
pub fn catalog_report(tokenizer: &Tokenizer) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<4}{:<24}{:>8}  {:<10}matcher", "#", "category", "entries", "boundary");
    for (rank, classifier) in tokenizer.classifiers().iter().enumerate() {
        let matcher = classifier.matcher();
        let _ = writeln!(
            out,
            "{:<4}{:<24}{:>8}  {:<10}{}",
            rank + 1,
            classifier.category().name(),
            matcher.len(),
            describe_boundary(classifier.boundary()),
            if matcher.uses_trie() { "trie" } else { "linear" },
        );
    }

    let overlaps = tokenizer.catalog().overlaps();
    if !overlaps.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "overlapping literals:");
        for overlap in &overlaps {
            let names: Vec<&str> = overlap.categories.iter().map(|c| c.name()).collect();
            let _ = writeln!(
                out,
                "  {:<12}{}",
                String::from_utf8_lossy(overlap.literal),
                names.join(", ")
            );
        }
    }
    out
}
