use anyhow::Context;
use clap::Parser;
use handscore::Scorer;
use tokio::net::TcpListener;

use handscore_server::config::Cli;
use handscore_server::logging::init_logging;
use handscore_server::{AppState, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let options = cli.scoring_options();
    let state = AppState::new(Scorer::new(options));
    let addr = cli.addr();

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(
        %addr,
        duplicate_names = ?options.duplicate_names,
        "backend server listening"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving requests")?;

    tracing::info!("backend server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
}
