#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    let addr = std::env::var("CATALOG_API_ADDR").unwrap_or_else(|_| {
        tracing::warn!("CATALOG_API_ADDR not set; defaulting to 0.0.0.0:8080");
        "0.0.0.0:8080".to_string()
    });

    let app = catalog_api::app::build_app();

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
