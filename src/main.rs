use std::{process, sync::Arc};

use flowchat::{
    app::app,
    config::{self, Config},
    state::{AppState, State},
};
use tracing::{event, Level};

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    config::load_dotenv(config::is_debug());

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            event!(Level::ERROR, "{err}");
            process::exit(1);
        }
    };

    event!(
        Level::INFO,
        langflow_id = %config.langflow_id,
        debug = config.debug,
        "Configuration loaded."
    );

    let state: AppState = match State::new(&config) {
        Ok(state) => Arc::new(state),
        Err(err) => {
            event!(Level::ERROR, error = %err, "Failed to compile page templates.");
            process::exit(1);
        }
    };

    event!(Level::INFO, address = %config.bind_address, "Starting server...");

    let listener = match tokio::net::TcpListener::bind(config.bind_address).await {
        Ok(listener) => listener,
        Err(err) => {
            event!(Level::ERROR, error = %err, "Failed to bind.");
            process::exit(1);
        }
    };

    if let Err(err) = axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown())
        .await
    {
        event!(Level::ERROR, error = %err, "Server stopped unexpectedly.");
        process::exit(1);
    }
}

async fn shutdown() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    event!(Level::INFO, "Shutting down.");
}
