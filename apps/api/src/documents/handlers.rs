//! Axum route handlers for the document API.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;

use crate::compose::DocumentRequest;
use crate::documents::{generate_document, preview_document};
use crate::errors::AppError;
use crate::generate::ContentSource;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub body: String,
    pub source: ContentSource,
    pub word_count: usize,
}

/// POST /api/v1/documents/preview
///
/// Composer + Generator only: returns the body text for on-page display,
/// along with its source and a word count.
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(request): Json<DocumentRequest>,
) -> Result<Json<PreviewResponse>, AppError> {
    let content = preview_document(&state.generator, &request).await?;
    let word_count = content.body.split_whitespace().count();

    Ok(Json(PreviewResponse {
        body: content.body,
        source: content.source,
        word_count,
    }))
}

/// POST /api/v1/documents/generate
///
/// Full pipeline: returns the PDF as an attachment download with a
/// type-derived filename.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<DocumentRequest>,
) -> Result<Response, AppError> {
    let document =
        generate_document(&state.generator, &state.page_config, &request, Utc::now()).await?;

    let disposition = format!("attachment; filename=\"{}\"", document.filename);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document.bytes,
    )
        .into_response())
}
