use mongodb::bson::{doc, Document};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, Database, IndexModel};

use crate::config::Config;
use crate::models::ID_FIELD;

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    /// Connect with driver defaults and check that the server answers.
    pub async fn new(uri: &str, db_name: &str) -> Result<Self, mongodb::error::Error> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(db_name);

        // Test connection
        db.run_command(doc! { "ping": 1 }).await?;

        Ok(Self { db })
    }

    pub async fn from_config(config: &Config) -> Result<Self, mongodb::error::Error> {
        Self::new(&config.mongodb_uri, &config.database).await
    }

    /// Unique, sparse index on `id`; documents without an `id` are not indexed
    pub async fn ensure_user_indexes(
        collection: &Collection<Document>,
    ) -> Result<(), mongodb::error::Error> {
        log::info!("🔧 Ensuring unique index on {}({})", collection.name(), ID_FIELD);

        let options = IndexOptions::builder().unique(true).sparse(true).build();
        let index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(options)
            .build();

        collection.create_index(index).await?;
        log::info!("   ✅ Index ready: {}({})", collection.name(), ID_FIELD);

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
