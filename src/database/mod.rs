pub mod store;
#[cfg(test)]
pub mod memory;

pub use store::*;

use crate::config::DatabaseConfig;
use crate::utils::error::AppError;
use mongodb::{Collection, Database};
use std::error::Error;
use std::future::IntoFuture;
use std::time::Duration;

pub const USERS: &str = "users";
pub const PROJECTS: &str = "projects";
pub const EVENTS: &str = "events";

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
    query_timeout: Duration,
}

impl MongoDB {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(&config.uri).await?;

        // Connection pool
        client_options.max_pool_size = Some(config.max_pool_size);
        client_options.min_pool_size = Some(config.min_pool_size);
        client_options.max_idle_time = Some(Duration::from_secs(300));

        // Timeouts explícitos (conexão e aquisição de servidor)
        client_options.connect_timeout = Some(config.connect_timeout);
        client_options.server_selection_timeout = Some(config.server_selection_timeout);

        let db_name = config
            .name
            .clone()
            .or_else(|| client_options.default_database.clone())
            .unwrap_or_else(|| DatabaseConfig::default_name().to_string());

        let client = mongodb::Client::with_options(client_options)?;
        let db = client.database(&db_name);

        // Test connection
        db.list_collection_names().await?;
        log::info!("Successfully connected to MongoDB database: {}", db_name);

        let mongodb = Self { db, query_timeout: config.query_timeout };
        mongodb.ensure_indexes().await;

        Ok(mongodb)
    }

    /// Creates the lookup indexes used by the API. Failures are logged and ignored.
    async fn ensure_indexes(&self) {
        use mongodb::bson::Document;
        use mongodb::IndexModel;

        log::info!("🔧 Creating database indexes...");

        let indexes = [
            (USERS, "ethereumAddress"),
            (PROJECTS, "Category"),
            (EVENTS, "category"),
        ];

        for (collection, field) in indexes {
            let mut keys = Document::new();
            keys.insert(field, 1);
            let model = IndexModel::builder().keys(keys).build();
            match self.collection::<Document>(collection).create_index(model).await {
                Ok(_) => log::info!("   ✅ Index created: {}({})", collection, field),
                Err(e) => log::debug!("   ℹ️  Index not created for {}({}): {}", collection, field, e),
            }
        }

        log::info!("✅ Database indexes ready");
    }

    /// Runs a store operation under the per-query timeout.
    async fn timed<T, F>(&self, operation: &str, fut: F) -> Result<T, AppError>
    where
        F: IntoFuture<Output = mongodb::error::Result<T>>,
    {
        match tokio::time::timeout(self.query_timeout, fut.into_future()).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(AppError::DatabaseError(format!("{} failed: {}", operation, e))),
            Err(_) => Err(AppError::Timeout(format!(
                "{} exceeded {:?}",
                operation, self.query_timeout
            ))),
        }
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
