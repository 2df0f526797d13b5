//! Required-section check.
//!
//! A section counts as present when its name appears as a standalone
//! token somewhere in the document — "Experience" satisfies
//! "experience", "experienced" does not. Section names are not
//! localized.

use std::collections::HashSet;

use super::annotate::AnnotatedText;

/// Canonical required sections, in reporting order.
pub const REQUIRED_SECTIONS: [&str; 3] = ["experience", "education", "skills"];

/// Returns the required section names missing from the document, in
/// canonical order.
pub fn check_sections(annotated: &AnnotatedText) -> Vec<String> {
    let tokens: HashSet<&str> = annotated.tokens().iter().map(String::as_str).collect();
    REQUIRED_SECTIONS
        .iter()
        .filter(|section| !tokens.contains(**section))
        .map(|section| section.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotated_with_tokens(tokens: &[&str]) -> AnnotatedText {
        AnnotatedText::new(tokens.iter().map(|t| t.to_string()).collect(), Vec::new())
    }

    #[test]
    fn test_all_sections_present() {
        let annotated = annotated_with_tokens(&["experience", "education", "skills"]);
        assert!(check_sections(&annotated).is_empty());
    }

    #[test]
    fn test_missing_sections_in_canonical_order() {
        // Only education present; the two absentees come back in
        // canonical order, not discovery order.
        let annotated = annotated_with_tokens(&["education"]);
        assert_eq!(check_sections(&annotated), ["experience", "skills"]);
    }

    #[test]
    fn test_whole_token_only_no_substring_credit() {
        // "experienced" contains "experience" but is a different token.
        let annotated = annotated_with_tokens(&["experienced", "education", "skills"]);
        assert_eq!(check_sections(&annotated), ["experience"]);
    }

    #[test]
    fn test_empty_document_misses_everything() {
        let annotated = annotated_with_tokens(&[]);
        assert_eq!(
            check_sections(&annotated),
            ["experience", "education", "skills"]
        );
    }
}
