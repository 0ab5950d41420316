use std::sync::Arc;

use insight_site_api::config::{self, Environment};
use insight_site_api::routes;
use insight_site_api::state::AppState;
use insight_site_api::storage::{MemStorage, PgStorage, Storage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL and friends
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting Insight site API in {:?} mode", config.environment);

    // Backend selection happens exactly once, here
    let storage: Arc<dyn Storage> = match (&config.database.url, config.environment) {
        (Some(url), _) => {
            Arc::new(PgStorage::connect(url, config.database.max_connections).await?)
        }
        (None, Environment::Development) => {
            tracing::warn!("DATABASE_URL not set; using in-memory storage with sample data");
            Arc::new(MemStorage::with_sample_data())
        }
        (None, Environment::Production) => {
            anyhow::bail!("DATABASE_URL must be set. Did you forget to provision a database?")
        }
    };

    let app = routes::router(AppState::new(storage));

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    println!("🚀 Insight site API listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
