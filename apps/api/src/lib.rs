//! Scribe — a single-page document generator.
//!
//! A form collects a document-type selection and free-text requirements,
//! a composed instruction goes to a hosted text-generation API (or falls
//! back to a static template), and the resulting text is rendered into a
//! downloadable PDF. Each request is one linear pass: Composer → Generator
//! → Renderer. Nothing persists between requests.

pub mod compose;
pub mod config;
pub mod documents;
pub mod errors;
pub mod generate;
pub mod layout;
pub mod llm_client;
pub mod render;
pub mod routes;
pub mod state;
