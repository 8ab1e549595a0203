use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use hour_records::modules::hours::adapters::outbound::hour_store_in_memory::InMemoryHourStore;
use hour_records::shell::config::AppConfig;
use hour_records::shell::http::router;
use hour_records::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // In-memory store with a reference project and a few tags for now
    let store = Arc::new(
        InMemoryHourStore::new()
            .with_project("internal", "Internal")
            .with_tag("meeting", "Meeting")
            .with_tag("review", "Review")
            .with_tag("support", "Support"),
    );
    let state = AppState::new(store, config.default_page_size);

    let app = router(state).layer(TraceLayer::new_for_http());

    tracing::info!("REST endpoint: http://{}/hours", config.bind_addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
