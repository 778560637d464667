//! Document pipeline — one linear pass per user action.
//!
//! Preview: Composer → Generator, returning text for display.
//! Generate: Composer → Generator → Renderer, returning a downloadable PDF.
//! Nothing here retains state between requests.

pub mod handlers;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::compose::{compose_instruction, DocumentRequest, DocumentType};
use crate::errors::AppError;
use crate::generate::{ContentGenerator, GeneratedContent};
use crate::layout::PageConfig;
use crate::render::render_document;

/// The rendered artifact handed to the caller for download.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub filename: String,
}

/// Runs Composer → Generator and returns the body text for display.
pub async fn preview_document(
    generator: &ContentGenerator,
    request: &DocumentRequest,
) -> Result<GeneratedContent, AppError> {
    let instruction = compose_instruction(request.document_type, &request.requirements)?;
    Ok(generator
        .generate(request.document_type, &instruction, &request.requirements)
        .await)
}

/// Runs the full pipeline and returns the PDF artifact.
///
/// `now` feeds both the download filename and the footer date, injected so
/// the pipeline stays deterministic under test.
pub async fn generate_document(
    generator: &ContentGenerator,
    page_config: &PageConfig,
    request: &DocumentRequest,
    now: DateTime<Utc>,
) -> Result<RenderedDocument, AppError> {
    let instruction = compose_instruction(request.document_type, &request.requirements)?;
    let content = generator
        .generate(request.document_type, &instruction, &request.requirements)
        .await;

    let title = request.document_type.title();
    let bytes = render_document(title, &content.body, now.date_naive(), page_config)
        .map_err(|e| AppError::Render(e.to_string()))?;

    let filename = suggested_filename(request.document_type, now);
    info!(
        "Rendered {} ({} bytes, source: {:?})",
        filename,
        bytes.len(),
        content.source
    );

    Ok(RenderedDocument { bytes, filename })
}

/// Download filename: type stem plus a UTC timestamp, e.g.
/// `Cover_Letter_20260807_153000.pdf`.
pub fn suggested_filename(document_type: DocumentType, now: DateTime<Utc>) -> String {
    format!(
        "{}_{}.pdf",
        document_type.filename_stem(),
        now.format("%Y%m%d_%H%M%S")
    )
}
