//! Internal helpers for validation and text normalization.
//!
//! These utilities are **not** part of the public API.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};
use uuid::Uuid;

use crate::{EngineError, ResultEngine};

/// Parse a UUID from storage and return a labeled error on failure.
pub(crate) fn parse_uuid(value: &str, label: &str) -> ResultEngine<Uuid> {
    Uuid::parse_str(value).map_err(|_| EngineError::InvalidId(format!("invalid {label} id")))
}

/// Trim a category label and collapse inner whitespace runs to one space.
///
/// Returns `None` for blank input.
pub(crate) fn normalize_category_display(input: &str) -> Option<String> {
    let mut out = String::new();
    for token in input.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    if out.is_empty() { None } else { Some(out) }
}

/// Fold text for case- and accent-insensitive matching.
///
/// NFKD decomposition, combining marks dropped, lowercased. Punctuation and
/// spacing are kept.
pub(crate) fn fold(input: &str) -> String {
    input
        .nfkd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_display_collapses_whitespace() {
        assert_eq!(
            normalize_category_display("  Eating \t out "),
            Some("Eating out".to_string())
        );
        assert_eq!(normalize_category_display(" \n "), None);
    }

    #[test]
    fn fold_ignores_case_and_accents() {
        assert_eq!(fold("FOOD"), "food");
        assert_eq!(fold("Café"), "cafe");
        assert_eq!(fold("Dépôt-Vente"), "depot-vente");
    }

    #[test]
    fn parse_uuid_labels_errors() {
        assert_eq!(
            parse_uuid("nope", "expense"),
            Err(EngineError::InvalidId("invalid expense id".to_string()))
        );
    }
}
