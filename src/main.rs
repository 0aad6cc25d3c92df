use std::sync::Arc;

use schedule_engine::api::{AppState, create_router};
use schedule_engine::config::ConfigLoader;
use schedule_engine::store::SystemClock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "schedule_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_dir =
        std::env::var("SCHEDULE_ENGINE_CONFIG").unwrap_or_else(|_| "./config/default".into());
    let config = ConfigLoader::load(&config_dir)?;
    let state = AppState::from_config(&config, Arc::new(SystemClock))?;

    let addr = config.settings().bind_address.clone();
    let listener = tokio::net::TcpListener::bind(addr.as_str()).await?;
    tracing::info!("Starting server on {addr}");

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
