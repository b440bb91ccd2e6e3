use anyhow::Context;
use core_rtx::{get_api_base_url, setup_logging};

use api_rtx::routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    setup_logging("api_rtx=debug,core_rtx=info,tower_http=debug");

    let app = routes::router();

    let addr = get_api_base_url().context("Invalid HOST or PORT")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to address: {}", addr))?;
    tracing::info!("listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
