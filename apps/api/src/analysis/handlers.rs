use std::io::Write;

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::document::{Document, DocumentFormat};
use crate::models::report::AnalysisReport;
use crate::state::AppState;

use super::analyze;

/// POST /api/v1/analyze
///
/// Multipart fields: `resume` (the file, format inferred from the
/// filename extension) and `keywords` (comma-separated). The upload is
/// spooled to a temporary file for the duration of the request and
/// removed when the handler returns, success or failure.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let analysis_id = Uuid::new_v4();

    let mut upload: Option<(String, Bytes)> = None;
    let mut keywords_raw: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("unreadable file part: {e}")))?;
                upload = Some((filename, data));
            }
            "keywords" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("unreadable keywords: {e}")))?;
                keywords_raw = Some(text);
            }
            _ => {}
        }
    }

    let (filename, data) = upload
        .ok_or_else(|| AppError::Validation("missing 'resume' file part".to_string()))?;
    if filename.is_empty() {
        return Err(AppError::Validation("no file selected".to_string()));
    }
    let format = DocumentFormat::from_filename(&filename)?;

    let keywords = parse_keyword_list(&keywords_raw.unwrap_or_default());
    if keywords.is_empty() {
        return Err(AppError::EmptyKeywordSet);
    }

    // Spool to disk for the lifetime of the request; the temp file is
    // removed on drop whether analysis succeeds or fails. Analysis
    // works on the bytes already in memory.
    let _spool = spool_upload(&data)?;

    info!(
        %analysis_id,
        file = %filename,
        bytes = data.len(),
        keywords = keywords.len(),
        "analysis request"
    );

    let report = analyze(
        Document::new(data.to_vec(), format),
        keywords,
        state.analyze_options(),
        state.annotator.clone(),
        state.condenser.clone(),
    )
    .await?;

    info!(%analysis_id, score = report.score, "analysis complete");
    Ok(Json(report))
}

fn spool_upload(data: &[u8]) -> Result<tempfile::NamedTempFile, AppError> {
    let mut spool = tempfile::NamedTempFile::new()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to create spool file: {e}")))?;
    spool
        .write_all(data)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to spool upload: {e}")))?;
    Ok(spool)
}

/// Splits a comma-separated keyword field, trimming whitespace and
/// dropping empty entries. Casing and duplicates are preserved — the
/// matcher reports them back exactly as supplied.
pub fn parse_keyword_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
        .collect()
}
