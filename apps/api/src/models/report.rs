use serde::{Deserialize, Serialize};

/// The output of one analysis request. Constructed once by the
/// aggregator and returned to the caller; no lifecycle beyond that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Human-readable formatting warnings, in the order the offending
    /// entities appear in the document.
    pub formatting_issues: Vec<String>,
    /// Required section names absent from the document, in canonical
    /// order (experience, education, skills).
    pub missing_sections: Vec<String>,
    /// The subset of the caller's keywords found in the document,
    /// preserving the caller's order, casing, and duplicates.
    pub found_keywords: Vec<String>,
    /// Keyword match score in [0, 100]. Unrounded; rounding is a
    /// presentation concern.
    pub score: f64,
}
