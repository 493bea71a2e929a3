//! Axum handler for the resume analysis endpoint: upload → extract →
//! categorize → analyze → respond.

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::analysis::{analyze_resume, resolve_job_description, AnalysisOutcome};
use crate::categorizer::{categorize, SectionBuckets};
use crate::errors::AppError;
use crate::extraction::extract_document;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ExtractTextResponse {
    #[serde(rename = "numPages")]
    pub num_pages: usize,
    pub categories: SectionBuckets,
    pub text: String,
    pub analysis: AnalysisOutcome,
}

/// POST /extract-text
///
/// Multipart form with a "resume" PDF file and an optional "jobDescription"
/// text field. All request state is local; nothing outlives the response.
pub async fn handle_extract_text(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractTextResponse>, AppError> {
    let mut resume_bytes: Option<Vec<u8>> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_upload)? {
        match field.name() {
            Some("resume") => {
                resume_bytes = Some(field.bytes().await.map_err(bad_upload)?.to_vec());
            }
            Some("jobDescription") => {
                job_description = Some(field.text().await.map_err(bad_upload)?);
            }
            _ => {}
        }
    }

    let data =
        resume_bytes.ok_or_else(|| AppError::Input("No resume file uploaded".to_string()))?;

    // Spool the upload to a temp file for the extractor. The file is removed
    // right after extraction; on error paths the drop handles removal.
    let temp = NamedTempFile::new().map_err(|e| AppError::Internal(e.into()))?;
    tokio::fs::write(temp.path(), &data)
        .await
        .map_err(|e| AppError::Internal(e.into()))?;

    let path = temp.path().to_path_buf();
    let extracted = tokio::task::spawn_blocking(move || extract_document(&path))
        .await
        .map_err(|e| AppError::Internal(e.into()))??;

    if let Err(e) = temp.close() {
        warn!("Failed to remove temporary upload: {e}");
    }

    info!(pages = extracted.page_count, "Extracted resume text");

    let categories = categorize(&extracted.text);

    let jd = resolve_job_description(job_description.as_deref());
    let analysis = analyze_resume(state.llm.as_ref(), &extracted.text, jd).await?;

    Ok(Json(ExtractTextResponse {
        num_pages: extracted.page_count,
        categories,
        text: extracted.text,
        analysis,
    }))
}

fn bad_upload(e: MultipartError) -> AppError {
    AppError::Input(format!("Failed to read multipart form: {e}"))
}
