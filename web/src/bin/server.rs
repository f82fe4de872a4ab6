//! Todo API Server
//!
//! Main server process for the todo HTTP API.
//!
//! This binary:
//! - Loads environment configuration (`.env` supported)
//! - Selects the store backend (MongoDB or in-memory)
//! - Pings MongoDB before serving, failing fast if unreachable
//! - Serves the four API routes until Ctrl+C
//!
//! # Usage
//!
//! ```bash
//! # Against a local MongoDB
//! cargo run --bin server
//!
//! # Without infrastructure
//! TODO_BACKEND=memory cargo run --bin server
//! ```

use std::sync::Arc;
use todo_store::{MemoryTodoStore, MongoTodoStore, TodoStore};
use todo_web::{build_router, AppState, Backend, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,todo_web=debug,todo_store=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();

    // Select the store backend
    let store: Arc<dyn TodoStore> = match config.backend {
        Backend::Mongodb => {
            tracing::info!(uri = %config.mongo.uri, "Using MongoDB backend");
            Arc::new(
                MongoTodoStore::connect(
                    &config.mongo.uri,
                    &config.mongo.database,
                    &config.mongo.collection,
                )
                .await?,
            )
        }
        Backend::Memory => {
            tracing::info!("Using in-memory backend");
            Arc::new(MemoryTodoStore::new())
        }
    };

    let app = build_router(AppState::new(store));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Todo API server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down gracefully...");
    Ok(())
}

/// Resolve when the process receives Ctrl+C.
async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
