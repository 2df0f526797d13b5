//! Scorer/aggregator — folds the three checker outputs into the final
//! report. Pure; the only failure mode is an empty keyword list.

use crate::errors::AppError;
use crate::models::report::AnalysisReport;

/// `score = matched / total * 100`, unrounded. Fails with
/// `EmptyKeywordSet` when `keywords` is empty (undefined division).
pub fn build_report(
    formatting_issues: Vec<String>,
    missing_sections: Vec<String>,
    found_keywords: Vec<String>,
    keywords: &[String],
) -> Result<AnalysisReport, AppError> {
    if keywords.is_empty() {
        return Err(AppError::EmptyKeywordSet);
    }
    let score = found_keywords.len() as f64 / keywords.len() as f64 * 100.0;
    Ok(AnalysisReport {
        formatting_issues,
        missing_sections,
        found_keywords,
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(list: &[&str]) -> Vec<String> {
        list.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_empty_keyword_set_is_an_error() {
        let err = build_report(vec![], vec![], vec![], &[]).unwrap_err();
        assert!(matches!(err, AppError::EmptyKeywordSet));
    }

    #[test]
    fn test_score_is_matched_over_total() {
        let report = build_report(
            vec![],
            vec![],
            keywords(&["python", "sql"]),
            &keywords(&["python", "sql", "java"]),
        )
        .unwrap();
        assert!((report.score - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_full_match_is_100() {
        let report =
            build_report(vec![], vec![], keywords(&["rust"]), &keywords(&["rust"])).unwrap();
        assert_eq!(report.score, 100.0);
    }

    #[test]
    fn test_no_match_is_0() {
        let report = build_report(vec![], vec![], vec![], &keywords(&["rust"])).unwrap();
        assert_eq!(report.score, 0.0);
    }

    #[test]
    fn test_score_is_monotonic_in_matches() {
        let total = keywords(&["a", "b", "c", "d"]);
        let mut previous = -1.0;
        for matched in 0..=4 {
            let found: Vec<String> = total[..matched].to_vec();
            let report = build_report(vec![], vec![], found, &total).unwrap();
            assert!(report.score > previous);
            assert!((0.0..=100.0).contains(&report.score));
            previous = report.score;
        }
    }

    #[test]
    fn test_checker_outputs_pass_through_unchanged() {
        let report = build_report(
            vec!["issue".to_string()],
            vec!["skills".to_string()],
            keywords(&["rust"]),
            &keywords(&["rust"]),
        )
        .unwrap();
        assert_eq!(report.formatting_issues, ["issue"]);
        assert_eq!(report.missing_sections, ["skills"]);
    }
}
