//! parley: serves the voice skill over HTTP.

use parley_common::ParleyError;
use parley_config::ParleyConfig;
use parley_server::{bootstrap, cli, create_router, logging};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    let args = cli::parse();

    let loaded = parley_config::load_config_with(args.config.as_deref(), |config| {
        if let Some(port) = args.port {
            config.server.port = port;
        }
    });
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("parley: failed to load config: {e}");
            std::process::exit(1);
        }
    };

    logging::init(args.log_level.as_deref(), &config.logging);
    tracing::info!("Parley v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server exited with error");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}

async fn run(config: ParleyConfig) -> Result<(), ParleyError> {
    let client =
        bootstrap::bedrock_client(&config.inference).map_err(|e| ParleyError::Ai(e.to_string()))?;
    let state = bootstrap::build_state(&config, client);
    let router = create_router(state, &config.server.path);

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    let local = listener.local_addr()?;
    tracing::info!(
        addr = %local,
        path = %config.server.path,
        "Listening for skill requests"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ParleyError::Server(e.to_string()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
