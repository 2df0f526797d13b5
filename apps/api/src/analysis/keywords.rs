//! Keyword coverage check.
//!
//! Matching policy: a keyword matches when its lowercase form equals
//! some lowercase token in the document. Known limitation: a keyword
//! with internal whitespace ("machine learning") can never match,
//! because tokenization never yields a token containing whitespace.
//! Phrase-spanning matches are deliberately not attempted.

use std::collections::HashSet;

use super::annotate::AnnotatedText;

/// Returns the subset of `keywords` found in the document, preserving
/// the caller's order, casing, and duplicates. Two identical keywords
/// that match the same token each appear in the result.
pub fn match_keywords(annotated: &AnnotatedText, keywords: &[String]) -> Vec<String> {
    let tokens: HashSet<&str> = annotated.tokens().iter().map(String::as_str).collect();
    keywords
        .iter()
        .filter(|keyword| tokens.contains(keyword.to_lowercase().as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotated_with_tokens(tokens: &[&str]) -> AnnotatedText {
        AnnotatedText::new(tokens.iter().map(|t| t.to_string()).collect(), Vec::new())
    }

    fn keywords(list: &[&str]) -> Vec<String> {
        list.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_matching_is_case_insensitive_and_preserves_input_case() {
        let annotated = annotated_with_tokens(&["python", "sql"]);
        let found = match_keywords(&annotated, &keywords(&["Python", "SQL", "Java"]));
        assert_eq!(found, ["Python", "SQL"]);
    }

    #[test]
    fn test_duplicates_each_match_independently() {
        let annotated = annotated_with_tokens(&["python"]);
        let found = match_keywords(&annotated, &keywords(&["Python", "python", "Java"]));
        assert_eq!(found, ["Python", "python"]);
    }

    #[test]
    fn test_order_follows_keyword_list_not_document() {
        let annotated = annotated_with_tokens(&["sql", "python"]);
        let found = match_keywords(&annotated, &keywords(&["python", "sql"]));
        assert_eq!(found, ["python", "sql"]);
    }

    #[test]
    fn test_whole_token_only() {
        // Token "pythonic" does not satisfy keyword "python".
        let annotated = annotated_with_tokens(&["pythonic"]);
        assert!(match_keywords(&annotated, &keywords(&["python"])).is_empty());
    }

    #[test]
    fn test_multiword_phrases_never_match() {
        let annotated = annotated_with_tokens(&["machine", "learning"]);
        assert!(match_keywords(&annotated, &keywords(&["machine learning"])).is_empty());
    }
}
