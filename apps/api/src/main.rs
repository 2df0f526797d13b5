mod analysis;
mod config;
mod errors;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::annotate::{Annotator, RuleAnnotator};
use crate::analysis::condense::{self, Condenser, HttpCondenser, NoopCondenser};
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS analysis API v{}", env!("CARGO_PKG_VERSION"));

    // The annotator ruleset is process-wide, read-only after this point,
    // and shared by every in-flight analysis. A load failure aborts
    // startup rather than failing individual requests.
    let annotator: Arc<dyn Annotator> = Arc::new(RuleAnnotator::load()?);
    info!("annotator ruleset loaded");

    let condenser: Arc<dyn Condenser> = match &config.summarizer_url {
        Some(url) => {
            info!("summarizer client initialized (model: {})", condense::MODEL);
            Arc::new(HttpCondenser::new(
                url.clone(),
                config.summarizer_api_key.clone(),
            )?)
        }
        None => {
            info!("no summarizer configured, condensation is a pass-through");
            Arc::new(NoopCondenser)
        }
    };

    let state = AppState {
        config: config.clone(),
        annotator,
        condenser,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
