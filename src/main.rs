use tracing_subscriber::EnvFilter;

use vibe_alchemy::{
    config::Config,
    routes::{create_router, AppState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!(
        model = %config.together_model,
        model_key_loaded = config.model_credential().is_some(),
        tmdb_key_loaded = config.tmdb_credential().is_some(),
        "Configuration loaded"
    );

    // Initialize application state
    let state = AppState::from_config(&config);

    // Create the router with all routes
    let app = create_router(state);

    // Start the server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
