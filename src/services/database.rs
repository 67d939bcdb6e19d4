use crate::config::MongoConfig;
use crate::error::AppError;
use mongodb::{
    bson::{doc, Document},
    options::ClientOptions,
    Client as MongoClient, Collection, Database,
};
use std::time::Duration;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
    collection_name: String,
}

impl MongoDb {
    pub async fn connect(config: &MongoConfig) -> Result<Self, AppError> {
        tracing::info!(uri = %config.uri, "Connecting to MongoDB");

        let mut options = ClientOptions::parse(&config.uri).await.map_err(|e| {
            tracing::error!("Failed to parse MongoDB URI {}: {}", config.uri, e);
            AppError::from(e)
        })?;
        options.server_selection_timeout =
            Some(Duration::from_millis(config.server_selection_timeout_ms));

        let client = MongoClient::with_options(options)?;
        let db = client.database(&config.database);

        Ok(Self {
            client,
            db,
            collection_name: config.collection.clone(),
        })
    }

    /// Admin-level liveness probe against the server.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await?;
        Ok(())
    }

    pub fn documents(&self) -> Collection<Document> {
        self.db.collection(&self.collection_name)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}

/// Outcome of the one-shot startup connectivity check. Set once, read by every
/// request handler, never revisited for the lifetime of the process.
#[derive(Clone)]
pub enum DbHandle {
    Connected(MongoDb),
    Unavailable,
}

impl DbHandle {
    pub fn get(&self) -> Result<&MongoDb, AppError> {
        match self {
            DbHandle::Connected(db) => Ok(db),
            DbHandle::Unavailable => Err(AppError::NotConnected),
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, DbHandle::Connected(_))
    }
}
