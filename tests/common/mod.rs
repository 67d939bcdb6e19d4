use mongo_probe_service::config::{AppConfig, MongoConfig};
use mongo_probe_service::services::DbHandle;
use mongo_probe_service::startup::Application;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db: DbHandle,
    pub db_name: String,
}

impl TestApp {
    /// Spawn the app against the given MongoDB URI with a unique database
    /// per test run.
    pub async fn spawn(mongo_uri: &str, selection_timeout_ms: u64) -> Self {
        let db_name = format!("probe_test_{}", Uuid::new_v4());

        let config = AppConfig {
            port: 0,
            mongodb: MongoConfig {
                uri: mongo_uri.to_string(),
                database: db_name.clone(),
                collection: "test_collection".to_string(),
                server_selection_timeout_ms: selection_timeout_ms,
            },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept requests by polling the root route.
        let client = reqwest::Client::new();
        let root_url = format!("{}/", address);
        for _ in 0..50 {
            if client.get(&root_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            db,
            db_name,
        }
    }

    /// Spawn against a refused address so the startup probe fails fast and the
    /// app serves with the database unavailable.
    pub async fn spawn_unreachable() -> Self {
        Self::spawn("mongodb://127.0.0.1:9/", 200).await
    }

    /// Spawn against a live MongoDB. Returns `None` when no server is
    /// reachable, letting callers skip instead of fail on infra-less runners.
    pub async fn spawn_connected() -> Option<Self> {
        let uri = std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017/".to_string());

        let app = Self::spawn(&uri, 2000).await;
        if app.db.is_connected() {
            Some(app)
        } else {
            None
        }
    }

    /// Drop the per-test database.
    pub async fn cleanup(&self) {
        if let Ok(db) = self.db.get() {
            let _ = db.client().database(&self.db_name).drop(None).await;
        }
    }
}
