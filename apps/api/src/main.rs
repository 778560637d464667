use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use scribe::config::Config;
use scribe::generate::ContentGenerator;
use scribe::layout::default_page_config;
use scribe::llm_client::{LlmClient, MODEL};
use scribe::routes::build_router;
use scribe::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Scribe API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the content generator. The credential is injected here and
    // nowhere else; absence selects template-only mode.
    let llm = config.llm_api_key.clone().map(LlmClient::new);
    match &llm {
        Some(_) => info!("LLM client initialized (model: {MODEL})"),
        None => info!("No LLM credential configured; running in template-only mode"),
    }
    let generator = ContentGenerator::new(llm);

    // Page geometry for the renderer: US letter, 1" margins
    let page_config = default_page_config();

    // Build app state
    let state = AppState {
        config: config.clone(),
        generator,
        page_config,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
