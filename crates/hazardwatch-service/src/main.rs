//! HazardWatch backend HTTP service entry point.
//!
//! # Configuration
//!
//! - `HAZARDWATCH_CONTENT_DIR` - Directory holding `emergency_messages.json`
//!   and `quiz_questions.json` (default: `./content`)
//! - `HAZARDWATCH_FEED_URL` - Upstream hazard feed endpoint (default: EONET)
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - `json` (default) or `text`

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::{error, info};

use hazardwatch_lib::FeedConfig;
use hazardwatch_lib::feed::DEFAULT_FEED_URL;
use hazardwatch_service::logging::{LoggingConfig, init_logging};
use hazardwatch_service::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(&LoggingConfig::from_env());

    // Load configuration from environment
    let content_dir = env::var("HAZARDWATCH_CONTENT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./content"));
    let feed_url =
        env::var("HAZARDWATCH_FEED_URL").unwrap_or_else(|_| DEFAULT_FEED_URL.to_string());
    let port: u16 = env::var("SERVICE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    info!(
        content_dir = %content_dir.display(),
        feed_url = %feed_url,
        port = port,
        "starting hazardwatch service"
    );

    // Load application state
    let state = AppState::load(FeedConfig::with_base_url(feed_url), &content_dir).map_err(|e| {
        error!(error = %e, content_dir = %content_dir.display(), "failed to load application state");
        e
    })?;

    let app = hazardwatch_service::app(state);

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
