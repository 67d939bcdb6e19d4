use crate::config::AppConfig;
use crate::error::AppError;
use crate::handlers;
use crate::services::{DbHandle, MongoDb};
use axum::{routing::get, Router};
use std::future::IntoFuture;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub db: DbHandle,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    pub async fn build(config: AppConfig) -> Result<Self, AppError> {
        // One-shot connectivity check. A failure degrades the handle instead of
        // aborting startup; there is no retry for the lifetime of the process.
        let db = match Self::connect(&config).await {
            Ok(db) => {
                tracing::info!(
                    database = %config.mongodb.database,
                    "Successfully connected to MongoDB"
                );
                DbHandle::Connected(db)
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to connect to MongoDB, serving with database unavailable: {}",
                    e
                );
                DbHandle::Unavailable
            }
        };

        let state = AppState { db };

        let app = Router::new()
            .route("/", get(handlers::home))
            .route("/test", get(handlers::test_db))
            .route("/data", get(handlers::show_data))
            .layer(TraceLayer::new_for_http())
            .with_state(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::ConfigError(anyhow::Error::new(e))
        })?;
        let port = listener
            .local_addr()
            .map_err(|e| AppError::ConfigError(anyhow::Error::new(e)))?
            .port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    async fn connect(config: &AppConfig) -> Result<MongoDb, AppError> {
        let db = MongoDb::connect(&config.mongodb).await?;
        db.ping().await?;
        Ok(db)
    }

    pub fn db(&self) -> &DbHandle {
        &self.state.db
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
