use std::net::SocketAddr;
use std::sync::Arc;

use comment_serve::api::server::create_router;
use comment_serve::app_state::AppState;
use comment_serve::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // .env is optional; the variables may come from the real environment.
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    let state = Arc::new(AppState::new(&config)?);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
