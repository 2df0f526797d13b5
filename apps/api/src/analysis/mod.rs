// Document analysis pipeline:
// extract → (optional) condense → annotate → {formatting, sections, keywords} → report.
// The HTTP layer in handlers.rs is a thin shell over `analyze`.

pub mod annotate;
pub mod condense;
pub mod extract;
pub mod formatting;
pub mod handlers;
pub mod keywords;
pub mod scoring;
pub mod sections;

use std::sync::Arc;
use std::time::Duration;

use anyhow::anyhow;
use tracing::warn;

use crate::errors::AppError;
use crate::models::document::Document;
use crate::models::report::AnalysisReport;

use annotate::Annotator;
use condense::{word_count, CondensationBand, Condenser};

/// Per-request knobs for `analyze`.
#[derive(Debug, Clone, Copy)]
pub struct AnalyzeOptions {
    pub enable_condensation: bool,
    pub band: CondensationBand,
    /// Processing budget for the whole pipeline; exceeding it fails the
    /// request with `Timeout`.
    pub timeout_secs: u64,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            enable_condensation: true,
            band: CondensationBand::default(),
            timeout_secs: 30,
        }
    }
}

/// Runs the full analysis pipeline for one document.
///
/// Extraction and annotation are CPU-bound and run on the blocking
/// pool. The timeout abandons the request rather than cancelling
/// in-flight blocking work; the checkers are short-lived relative to
/// extraction and condensation.
pub async fn analyze(
    document: Document,
    keywords: Vec<String>,
    options: AnalyzeOptions,
    annotator: Arc<dyn Annotator>,
    condenser: Arc<dyn Condenser>,
) -> Result<AnalysisReport, AppError> {
    let budget = Duration::from_secs(options.timeout_secs);
    tokio::time::timeout(
        budget,
        run_pipeline(document, keywords, options, annotator, condenser),
    )
    .await
    .map_err(|_| AppError::Timeout(options.timeout_secs))?
}

async fn run_pipeline(
    document: Document,
    keywords: Vec<String>,
    options: AnalyzeOptions,
    annotator: Arc<dyn Annotator>,
    condenser: Arc<dyn Condenser>,
) -> Result<AnalysisReport, AppError> {
    let extracted = tokio::task::spawn_blocking(move || extract::extract(&document))
        .await
        .map_err(|e| AppError::Internal(anyhow!("extraction task failed: {e}")))??;
    let text = extracted.into_text();

    // Condensation is skipped for trivially short documents and falls
    // back to the raw text when the backend fails; the checks still run,
    // only with possibly noisier input.
    let text = if options.enable_condensation && word_count(&text) >= options.band.min_words {
        match condenser.condense(&text, options.band).await {
            Ok(summary) => summary,
            Err(e) => {
                warn!(error = %e, "condensation failed, analyzing raw text");
                text
            }
        }
    } else {
        text
    };

    tokio::task::spawn_blocking(move || {
        let annotated = annotator.annotate(&text);
        let formatting_issues = formatting::check_formatting(&annotated);
        let missing_sections = sections::check_sections(&annotated);
        let found_keywords = keywords::match_keywords(&annotated, &keywords);
        scoring::build_report(formatting_issues, missing_sections, found_keywords, &keywords)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow!("analysis task failed: {e}")))?
}
