//! Course Server binary
//!
//! Starts the HTTP service on the configured address with the configured
//! registry backend (in-memory by default, sqlite when requested).

use anyhow::{Context, Result};
use course_registry::{CourseRegistry, MemoryRegistry, SqliteRegistry};
use course_server::config::{load_config, StoreKind};
use course_server::{app, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Course Server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let config = load_config().await.context("Failed to load configuration")?;

    // Pick the registry backend
    let registry: Arc<dyn CourseRegistry> = match config.store {
        StoreKind::Memory => {
            info!("Using in-memory course registry");
            Arc::new(MemoryRegistry::new())
        }
        StoreKind::Sqlite => {
            info!("Using sqlite course registry at {}", config.database_path);
            Arc::new(
                SqliteRegistry::new(&config.database_path)
                    .await
                    .context("Failed to initialize sqlite registry")?,
            )
        }
    };

    let state = AppState { registry };
    let router = app(state);

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, router).await.context("Server error")?;

    Ok(())
}
