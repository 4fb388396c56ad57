//! warmnest - HTTP and WebSocket server

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use warmnest::adapters::http::{api_router, BreathingAppState, FocusAppState, HealthState};
use warmnest::adapters::{InMemoryExerciseCatalog, YamlExerciseCatalog};
use warmnest::config::AppConfig;
use warmnest::ports::ExerciseCatalog;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.server.log_level))?;
    if config.is_production() {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init();
    }

    info!("warmnest v{}", env!("CARGO_PKG_VERSION"));
    config.validate()?;

    let catalog: Arc<dyn ExerciseCatalog> = match &config.catalog.path {
        Some(path) => Arc::new(YamlExerciseCatalog::load(path).await?),
        None => {
            info!("No catalog file configured, serving built-in exercises");
            Arc::new(InMemoryExerciseCatalog::builtin())
        }
    };

    let focus = FocusAppState {
        pomodoro: config.focus.pomodoro(),
        two_minute_seconds: config.focus.two_minute_seconds,
    };
    let app = api_router(
        &config.server,
        HealthState::new(catalog.clone()),
        BreathingAppState::new(catalog),
        focus,
    );

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
