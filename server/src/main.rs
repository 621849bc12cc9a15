use anyhow::Context;
use recipe_box_server::{api, telemetry, Config, RecipeStore};
use std::env;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Check for --openapi flag to dump spec and exit
    if env::args().any(|arg| arg == "--openapi") {
        println!("{}", api::openapi().to_pretty_json()?);
        return Ok(());
    }

    telemetry::init_telemetry();

    let config = Config::from_env()?;

    let store = if config.seed_recipes {
        RecipeStore::seeded()
    } else {
        RecipeStore::new()
    };
    tracing::info!("Loaded {} recipes", store.len().await);

    let app = recipe_box_server::app(Arc::new(store));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    let local_addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", local_addr);
    tracing::info!(
        "OpenAPI spec available at http://{}{}",
        local_addr,
        recipe_box_server::OPENAPI_PATH
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
