mod error;
mod handlers;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::routing::{delete, get};
use axum::Router;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::handlers::{delete_config, get_config, health, update_config};
use crate::state::{create_default_settings, load_settings, AppState};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[arg(long, default_value = "stampede.toml")]
    config: PathBuf,
    #[arg(long, default_value = "0.0.0.0:8080")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if !args.config.exists() {
        warn!("settings file missing, creating default settings");
        let _ = create_default_settings(&args.config);
    }

    let settings = load_settings(&args.config)?;
    let state = Arc::new(AppState::from_settings(&settings)?);

    let app = Router::new()
        .route("/v1/config", get(get_config).put(update_config))
        .route("/v1/config/:key", delete(delete_config))
        .route("/health", get(health))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    info!("stampede-server listening on {}", args.listen);
    let listener = tokio::net::TcpListener::bind(args.listen).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
