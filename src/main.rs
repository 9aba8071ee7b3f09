use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{info, warn};

use camp::database::{self, schema};
use camp::{logging, web, AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    logging::init_tracing();

    let config = AppConfig::from_env();
    info!(database_url = %config.database_url, "connecting to database");

    let pool = database::connect(&config.database_url)
        .await
        .with_context(|| format!("cannot connect to {}", config.database_url))?;
    schema::ensure_schema(&pool)
        .await
        .context("cannot create schema")?;

    let app = web::router(pool);

    let listener = match TcpListener::bind(config.bind_addr()).await {
        Ok(l) => l,
        Err(e) => {
            warn!(
                addr = %config.bind_addr(),
                error = %e,
                "bind failed, trying {}",
                config.fallback_bind_addr()
            );
            TcpListener::bind(config.fallback_bind_addr())
                .await
                .with_context(|| format!("cannot bind {}", config.fallback_bind_addr()))?
        }
    };

    info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await.context("server stopped")?;
    Ok(())
}
