use quizboot::core::state::connect_pool;
use quizboot::{AppState, Config, create_router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    config.print_info();

    let pool = connect_pool(&config.database_url, config.max_connections).await?;

    // composition root: tutto viene costruito qui, niente container
    let state = Arc::new(AppState::new(
        pool,
        config.jwt_secret.clone(),
        config.quiz.clone(),
    ));
    state.beans.log_all();

    let app = create_router(state);

    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
