use crate::config::DadosConfig;
use crate::database::postgres::PgDadosRepository;
use crate::database::{connect_pool, DadosRepository};
use anyhow::Context;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

pub mod config;
mod database;
mod domain;
mod error;
mod features;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    // None when the pool failed to come up; /dados answers 503 until restart
    pub repo: Option<Arc<dyn DadosRepository>>,
    pub config: Arc<DadosConfig>,
}

pub fn app_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(features::health::health_router())
        .merge(features::dados::dados_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    let config = DadosConfig::from_env();
    tracing::debug!(?config, "Loaded configuration");

    let pool = connect_pool(&config).await;
    let repo = pool.clone().map(|pool| {
        Arc::new(PgDadosRepository::new(pool)) as Arc<dyn DadosRepository>
    });

    let bind_addr = config.bind_addr.clone();
    let app_state = AppState {
        repo,
        config: Arc::new(config),
    };
    let app = app_router(app_state);

    let listener = TcpListener::bind(bind_addr.as_str())
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    tracing::info!("Server listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pool) = pool {
        pool.close().await;
        tracing::info!("Connection pool closed");
    }

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::warn!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            tracing::warn!("Received SIGTERM, shutting down");
        }
    }
}
