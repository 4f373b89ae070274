use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;

use staffhub::{
    config::AppConfig, db, logging::init_tracing, routes, services::ServiceContext,
    state::AppState,
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("server failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env()?;
    init_tracing(&cfg.log_level);

    let db = db::connect(&cfg).await?;
    let state = AppState::new(cfg, db);

    let services = ServiceContext::from_state(state.as_ref());
    services.auth(&state.jwt).seed_admin(&state.config).await?;

    let app = routes::app(Arc::clone(&state));

    let addr: SocketAddr = format!("{}:{}", state.config.host, state.config.port)
        .parse()
        .context("invalid host/port")?;
    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
