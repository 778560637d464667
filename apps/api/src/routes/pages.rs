use askama::Template;
use axum::{extract::State, response::IntoResponse};

use crate::state::AppState;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// True when no LLM credential is configured; the page shows an
    /// informational banner instead of an error.
    pub template_mode: bool,
}

pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    IndexTemplate {
        template_mode: !state.generator.is_model_backed(),
    }
}
