use anyhow::Result;
use axum::{extract::Request, ServiceExt};
use tokio::net::TcpListener;
use tracing::{error, info};

use bookmarks_backend::config::Settings;
use bookmarks_backend::{create_router, initialize_backend, logging};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    logging::init_tracing(&settings.log)?;

    let app_state = initialize_backend(&settings.storage).await?;
    let app = create_router(app_state, &settings.api)?;

    let listener = TcpListener::bind((settings.server.host.as_str(), settings.server.port)).await?;
    info!(
        "Bookmarks API listening on http://{}{}",
        listener.local_addr()?,
        settings.api.mount_path
    );

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
