//! Environment-driven configuration

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

/// Which backend the registry runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
    Sqlite,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub store: StoreKind,
    pub database_path: String,
}

pub async fn load_config() -> Result<Config> {
    info!("Loading configuration from environment...");

    let bind_address =
        std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3333".to_string());

    let store = match std::env::var("COURSE_STORE").as_deref() {
        Err(_) | Ok("memory") => StoreKind::Memory,
        Ok("sqlite") => StoreKind::Sqlite,
        Ok(other) => {
            anyhow::bail!("Unknown COURSE_STORE '{}' (expected 'memory' or 'sqlite')", other)
        }
    };

    let data_dir = std::env::var("DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./data"));

    let database_path = std::env::var("DATABASE_PATH")
        .unwrap_or_else(|_| data_dir.join("courses.db").to_string_lossy().to_string());

    // The data directory only matters for the sqlite backend
    if store == StoreKind::Sqlite {
        tokio::fs::create_dir_all(&data_dir).await.with_context(|| {
            format!("Failed to create data directory {}", data_dir.display())
        })?;
    }

    info!(
        "Config loaded: bind={}, store={:?}, db={}",
        bind_address, store, database_path
    );

    Ok(Config {
        bind_address,
        store,
        database_path,
    })
}
