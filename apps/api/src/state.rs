use std::sync::Arc;

use crate::analysis::annotate::Annotator;
use crate::analysis::condense::{CondensationBand, Condenser};
use crate::analysis::AnalyzeOptions;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum
/// extractors. The annotator ruleset is the only cross-request shared
/// resource; it is read-only after startup and safe for concurrent use.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub annotator: Arc<dyn Annotator>,
    pub condenser: Arc<dyn Condenser>,
}

impl AppState {
    /// Analysis options derived from configuration, applied per request.
    pub fn analyze_options(&self) -> AnalyzeOptions {
        AnalyzeOptions {
            enable_condensation: self.config.enable_condensation,
            band: CondensationBand {
                min_words: self.config.condensation_min_words,
                max_words: self.config.condensation_max_words,
            },
            timeout_secs: self.config.analysis_timeout_secs,
        }
    }
}
