use anyhow::Result;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

mod error;
mod models;
mod repositories;
mod routes;
mod validation;

use common::database::{ensure_pool, run_migrations};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting admin service");

    // Connect and migrate at boot when the database is reachable;
    // otherwise the service still starts and each request retries the
    // connection until it comes back.
    match ensure_pool().await {
        Ok(pool) => {
            info!("Database connection successful");
            run_migrations(pool).await?;
        }
        Err(e) => {
            warn!("Database unavailable at startup: {}", e);
        }
    }

    info!("Admin service initialized successfully");

    // Start the web server
    let app = routes::create_router();

    let listener = TcpListener::bind("0.0.0.0:3000").await?;
    info!("Admin service listening on 0.0.0.0:3000");

    axum::serve(listener, app).await?;

    Ok(())
}
