//! Axum route handlers for the Analysis API.

use axum::extract::{Multipart, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::skills::Category;
use crate::analysis::{analyze, AnalysisResult};
use crate::errors::AppError;
use crate::extract::{document_to_text, DocumentFormat};
use crate::report;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analyzed_at: DateTime<Utc>,
    pub category: Category,
    pub result: AnalysisResult,
}

#[derive(Debug, Deserialize)]
pub struct ExportParams {
    pub format: ExportFormat,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Txt,
    Csv,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryInfo>,
}

#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    pub category: Category,
    pub vocabulary_size: usize,
}

/// Everything pulled out of the multipart request body.
struct AnalyzeUpload {
    resume_bytes: Bytes,
    format: DocumentFormat,
    job_description: Option<String>,
    category: Category,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Multipart upload: `resume` file part (required, format from the filename
/// extension), `job_description` text part (optional), `category` text part
/// (optional, defaults to `it`). Returns the full analysis as JSON.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let upload = read_upload(multipart).await?;
    info!(
        format = %upload.format,
        category = upload.category.label(),
        "analyzing resume upload"
    );
    let result = run_analysis(&state, &upload)?;
    Ok(Json(AnalyzeResponse {
        analyzed_at: Utc::now(),
        category: upload.category,
        result,
    }))
}

/// POST /api/v1/analyze/export?format=txt|csv
///
/// Same multipart input as `/analyze`; returns the rendered text report or
/// the flat CSV record instead of JSON.
pub async fn handle_export(
    State(state): State<AppState>,
    Query(params): Query<ExportParams>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let upload = read_upload(multipart).await?;
    let result = run_analysis(&state, &upload)?;

    let (content_type, body) = match params.format {
        ExportFormat::Txt => (
            "text/plain; charset=utf-8",
            report::render_text_report(&result),
        ),
        ExportFormat::Csv => (
            "text/csv; charset=utf-8",
            report::render_csv_record(&result)?,
        ),
    };

    Ok(([(header::CONTENT_TYPE, content_type)], body).into_response())
}

/// GET /api/v1/categories
///
/// Lists the vocabulary categories the store knows, with vocabulary sizes.
pub async fn handle_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    let categories = state
        .vocabularies
        .categories()
        .map(|(category, vocabulary)| CategoryInfo {
            category,
            vocabulary_size: vocabulary.len(),
        })
        .collect();
    Json(CategoriesResponse { categories })
}

// ────────────────────────────────────────────────────────────────────────────
// Shared plumbing
// ────────────────────────────────────────────────────────────────────────────

async fn read_upload(mut multipart: Multipart) -> Result<AnalyzeUpload, AppError> {
    let mut resume: Option<(Bytes, DocumentFormat)> = None;
    let mut job_description = None;
    let mut category = Category::It;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                if filename.is_empty() {
                    return Err(AppError::Validation(
                        "resume part must carry a filename".to_string(),
                    ));
                }
                // Format resolution is a hard stop on unknown extensions;
                // nothing downstream runs on a guessed format.
                let format = DocumentFormat::from_tag(&filename)?;
                let data = field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("failed to read resume upload: {e}"))
                })?;
                resume = Some((data, format));
            }
            "job_description" => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("failed to read job_description: {e}"))
                })?;
                if !text.trim().is_empty() {
                    job_description = Some(text);
                }
            }
            "category" => {
                let tag = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read category: {e}")))?;
                category = Category::parse(&tag).ok_or_else(|| {
                    AppError::Validation(format!(
                        "unknown category '{}' (expected one of: it, psychology)",
                        tag.trim()
                    ))
                })?;
            }
            _ => {} // ignore unknown parts
        }
    }

    let (resume_bytes, format) = resume.ok_or_else(|| {
        AppError::Validation("missing required 'resume' file part".to_string())
    })?;

    Ok(AnalyzeUpload {
        resume_bytes,
        format,
        job_description,
        category,
    })
}

fn run_analysis(state: &AppState, upload: &AnalyzeUpload) -> Result<AnalysisResult, AppError> {
    let text = document_to_text(&upload.resume_bytes, upload.format)?;
    if text.is_empty() {
        warn!("document extraction produced no text; all signals will be absent");
    }

    let vocabulary = state.vocabularies.get(upload.category);
    Ok(analyze(
        &text,
        upload.job_description.as_deref(),
        vocabulary,
        upload.category,
    ))
}
