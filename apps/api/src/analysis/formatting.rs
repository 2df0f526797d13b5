//! Formatting risk check.
//!
//! ATS parsers routinely mangle exact numeric dates, so any `DATE`
//! entity shaped like `03/04/2021` gets flagged. The check reads entity
//! surfaces, not raw text — a numeric-looking substring the annotator
//! did not classify as a date is left alone.

use lazy_static::lazy_static;
use regex::Regex;

use super::annotate::{AnnotatedText, EntityLabel};

lazy_static! {
    /// Two-or-more-digit groups separated by slashes, e.g. 03/04/2021.
    static ref STRICT_NUMERIC_DATE: Regex =
        Regex::new(r"\d{2,}/\d{2,}/\d{2,4}").expect("STRICT_NUMERIC_DATE regex is valid");
}

/// Returns one issue per offending date entity, in the order the
/// entities appear. A date written twice is flagged twice.
pub fn check_formatting(annotated: &AnnotatedText) -> Vec<String> {
    annotated
        .entities()
        .iter()
        .filter(|e| e.label == EntityLabel::Date)
        .filter(|e| STRICT_NUMERIC_DATE.is_match(&e.surface))
        .map(|e| {
            format!(
                "Avoid using exact dates like {}, use months and years instead.",
                e.surface
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::annotate::Entity;

    fn annotated_with(entities: Vec<Entity>) -> AnnotatedText {
        AnnotatedText::new(Vec::new(), entities)
    }

    fn date(surface: &str) -> Entity {
        Entity {
            surface: surface.to_string(),
            label: EntityLabel::Date,
        }
    }

    #[test]
    fn test_numeric_date_entity_produces_one_issue() {
        let issues = check_formatting(&annotated_with(vec![date("03/04/2021")]));
        assert_eq!(
            issues,
            ["Avoid using exact dates like 03/04/2021, use months and years instead."]
        );
    }

    #[test]
    fn test_month_year_entity_is_not_flagged() {
        let issues = check_formatting(&annotated_with(vec![date("March 2021")]));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_single_digit_groups_are_not_strict_matches() {
        // The annotator may classify 3/4/21 as a date, but it is not a
        // two-or-more-digit-group pattern.
        let issues = check_formatting(&annotated_with(vec![date("3/4/21")]));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_non_date_entities_are_ignored() {
        let issues = check_formatting(&annotated_with(vec![Entity {
            surface: "10/20/2020".to_string(),
            label: EntityLabel::Url,
        }]));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_duplicate_dates_each_produce_an_issue() {
        let issues =
            check_formatting(&annotated_with(vec![date("03/04/2021"), date("03/04/2021")]));
        assert_eq!(issues.len(), 2);
    }

    #[test]
    fn test_issues_follow_entity_order() {
        let issues =
            check_formatting(&annotated_with(vec![date("01/01/2020"), date("12/31/2021")]));
        assert!(issues[0].contains("01/01/2020"));
        assert!(issues[1].contains("12/31/2021"));
    }
}
