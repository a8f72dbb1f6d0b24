//! Study-plan HTTP server binary.
//!
//! Initializes the snapshot repository, sets up the HTTP router, and
//! starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin studyplan-server --features http-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `STUDYPLAN_CONFIG`: Optional path to a TOML file with `host`/`port`
//! - `OPENROUTER_API_KEY`: Enables the /v1/explain endpoint
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use studyplan_rust::db::LocalRepository;
use studyplan_rust::http::{create_router, AppState};

/// Optional file-based overrides, env takes precedence.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    host: Option<String>,
    port: Option<u16>,
}

fn load_file_config() -> anyhow::Result<FileConfig> {
    match env::var("STUDYPLAN_CONFIG") {
        Ok(path) => {
            let raw = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&raw)?)
        }
        Err(_) => Ok(FileConfig::default()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting study-plan HTTP server");

    let file_config = load_file_config()?;

    let repository = Arc::new(LocalRepository::new());
    let state = AppState::new(repository);
    if state.explainer.is_none() {
        info!("No explainer API key configured; /v1/explain is disabled");
    }

    let app = create_router(state);

    // Determine bind address: env over file over defaults
    let host = env::var("HOST")
        .ok()
        .or(file_config.host)
        .unwrap_or_else(|| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .or(file_config.port)
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
