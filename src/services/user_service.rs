// ==================== USER STORE ====================
// Gateway between the HTTP layer and the users collection.
// Every operation is one round trip, update/remove are lookup-then-mutate.

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{self, doc, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::Collection;

use crate::{
    database::MongoDB,
    models::{parse_record, record_id, UserRecord, ID_FIELD},
    utils::AppError,
};

pub const UPDATE_NOT_FOUND: &str = "User not found to update";
pub const REMOVE_NOT_FOUND: &str = "User not found to remove";

const DUPLICATE_KEY_CODE: i32 = 11000;

/// Storage operations behind the user routes.
///
/// A missing user on lookup is `Ok(None)`; a missing user on update or
/// remove is `AppError::NotFound`.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users, storage `_id` stripped. Empty when the collection is.
    async fn list_all(&self) -> Result<Vec<UserRecord>, AppError>;

    async fn get_by_id(&self, id: &str) -> Result<Option<UserRecord>, AppError>;

    /// Insert the user described by `json`; its `id` must not exist yet.
    async fn create(&self, json: &str) -> Result<(), AppError>;

    /// Replace every field of the user whose `id` matches the one in `json`.
    async fn update(&self, json: &str) -> Result<(), AppError>;

    async fn remove(&self, id: &str) -> Result<(), AppError>;
}

/// `UserStore` over a MongoDB collection
pub struct MongoUserStore {
    collection: Collection<Document>,
}

impl MongoUserStore {
    /// Wrap `collection`, making sure the unique index on `id` exists first.
    pub async fn new(collection: Collection<Document>) -> Result<Self, mongodb::error::Error> {
        MongoDB::ensure_user_indexes(&collection).await?;
        Ok(Self { collection })
    }

    #[cfg(test)]
    pub fn collection(&self) -> &Collection<Document> {
        &self.collection
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn list_all(&self) -> Result<Vec<UserRecord>, AppError> {
        log::info!("📋 [GET] Getting all users...");

        let cursor = self
            .collection
            .find(doc! {})
            .projection(without_storage_id())
            .await?;
        let documents: Vec<Document> = cursor.try_collect().await?;

        Ok(documents.into_iter().map(to_record).collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<UserRecord>, AppError> {
        log::info!("🔍 [GET] Getting user with id {}", id);

        let document = self
            .collection
            .find_one(doc! { "id": id })
            .projection(without_storage_id())
            .await?;

        Ok(document.map(to_record))
    }

    async fn create(&self, json: &str) -> Result<(), AppError> {
        log::info!("📝 [CREATE] Parsing JSON...");
        let record = parse_record(json)?;
        if record_id(&record).is_none() {
            return Err(AppError::MalformedInput(format!(
                "Field '{}' is required and must be a string",
                ID_FIELD
            )));
        }

        let document = to_document(&record)?;
        log::info!("📝 [CREATE] JSON parsed as: {}", document);

        match self.collection.insert_one(document).await {
            Ok(_) => Ok(()),
            Err(e) => match duplicate_key_message(&e) {
                Some(message) => {
                    log::warn!("⚠️ [CREATE] {}", message);
                    Err(AppError::DuplicateKey(message))
                }
                None => {
                    log::error!("❌ [CREATE] Insert failed: {}", e);
                    Err(e.into())
                }
            },
        }
    }

    async fn update(&self, json: &str) -> Result<(), AppError> {
        log::info!("🔧 [UPDATE] Parsing JSON...");
        let record = parse_record(json)?;

        // Without a string id nothing can match
        let id = match record_id(&record) {
            Some(id) => id.to_owned(),
            None => {
                log::warn!("⚠️ [UPDATE] No '{}' in request body", ID_FIELD);
                return Err(AppError::NotFound(UPDATE_NOT_FOUND.to_string()));
            }
        };

        log::info!("🔍 [UPDATE] Finding user with id {}", id);
        if self.collection.find_one(doc! { "id": &id }).await?.is_none() {
            log::warn!("⚠️ [UPDATE] User {} not found", id);
            return Err(AppError::NotFound(UPDATE_NOT_FOUND.to_string()));
        }

        log::info!("🔧 [UPDATE] User found! Replacing...");
        let replacement = to_document(&record)?;
        let result = self
            .collection
            .replace_one(doc! { "id": &id }, replacement)
            .await?;

        // Removed between lookup and replace
        if result.matched_count == 0 {
            log::warn!("⚠️ [UPDATE] User {} vanished before replace", id);
            return Err(AppError::NotFound(UPDATE_NOT_FOUND.to_string()));
        }

        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), AppError> {
        log::info!("🔍 [REMOVE] Finding user with id {}", id);

        if self.collection.find_one(doc! { "id": id }).await?.is_none() {
            log::warn!("⚠️ [REMOVE] User {} not found", id);
            return Err(AppError::NotFound(REMOVE_NOT_FOUND.to_string()));
        }

        log::info!("🗑️  [REMOVE] User found! Removing...");
        self.collection.delete_one(doc! { "id": id }).await?;

        Ok(())
    }
}

fn without_storage_id() -> Document {
    doc! { "_id": 0 }
}

/// BSON document to user record, values as relaxed extended JSON
pub fn to_record(document: Document) -> UserRecord {
    document
        .into_iter()
        .map(|(key, value)| (key, value.into_relaxed_extjson()))
        .collect()
}

pub fn to_document(record: &UserRecord) -> Result<Document, AppError> {
    bson::to_document(record).map_err(|e| AppError::MalformedInput(e.to_string()))
}

fn duplicate_key_message(err: &mongodb::error::Error) -> Option<String> {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE =>
        {
            Some(write_error.message.clone())
        }
        _ => None,
    }
}
