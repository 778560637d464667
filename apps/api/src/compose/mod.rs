//! Prompt Composer — turns a document-type selection plus free-text
//! requirements into the instruction sent to the generation backend.
//!
//! Pure functions only: validation and string assembly, no I/O.

pub mod prompts;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// The supported document types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    CoverLetter,
    Resume,
    Proposal,
    Letter,
}

impl DocumentType {
    pub const ALL: [DocumentType; 4] = [
        DocumentType::CoverLetter,
        DocumentType::Resume,
        DocumentType::Proposal,
        DocumentType::Letter,
    ];

    /// Display title, used as the PDF title and on the form page.
    pub fn title(&self) -> &'static str {
        match self {
            DocumentType::CoverLetter => "Cover Letter",
            DocumentType::Resume => "Resume",
            DocumentType::Proposal => "Business Proposal",
            DocumentType::Letter => "Formal Letter",
        }
    }

    /// Stem for the download filename: the title with underscores.
    pub fn filename_stem(&self) -> &'static str {
        match self {
            DocumentType::CoverLetter => "Cover_Letter",
            DocumentType::Resume => "Resume",
            DocumentType::Proposal => "Business_Proposal",
            DocumentType::Letter => "Formal_Letter",
        }
    }

    /// System prompt framing the model call for this document type.
    pub fn system_prompt(&self) -> &'static str {
        match self {
            DocumentType::CoverLetter => prompts::COVER_LETTER_SYSTEM,
            DocumentType::Resume => prompts::RESUME_SYSTEM,
            DocumentType::Proposal => prompts::PROPOSAL_SYSTEM,
            DocumentType::Letter => prompts::LETTER_SYSTEM,
        }
    }
}

/// One user submission: a document type plus free-text requirements.
/// Created per request, immutable, discarded once the response is produced.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentRequest {
    pub document_type: DocumentType,
    pub requirements: String,
}

/// The composed instruction for the generation backend: a type-specific
/// system prompt paired with the user message carrying the requirements.
#[derive(Debug, Clone)]
pub struct Instruction {
    pub system: &'static str,
    pub user: String,
}

/// Composes the instruction for a document type and requirements string.
///
/// The requirements text is embedded verbatim. Empty or whitespace-only
/// requirements fail here, before any network or render work happens.
pub fn compose_instruction(
    document_type: DocumentType,
    requirements: &str,
) -> Result<Instruction, AppError> {
    if requirements.trim().is_empty() {
        return Err(AppError::Validation(
            "requirements cannot be empty".to_string(),
        ));
    }

    let user = format!(
        "Please write a professional {} based on the following requirements:\n\n{}",
        document_type.title().to_lowercase(),
        requirements
    );

    Ok(Instruction {
        system: document_type.system_prompt(),
        user,
    })
}
