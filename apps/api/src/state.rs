use crate::config::Config;
use crate::generate::ContentGenerator;
use crate::layout::PageConfig;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Every field is read-only after startup; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub generator: ContentGenerator,
    /// Page geometry and font sizes for the renderer.
    pub page_config: PageConfig,
}
