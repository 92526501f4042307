use async_trait::async_trait;
use super::model::{StylistRecord, UpdateStylistPayload};

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum StoreError {
    #[error("Stylist not found: {0}")]
    NotFound(String),
    #[error("Stylist already exists: {0}")]
    AlreadyExists(String),
    #[error("Store error: {0}")]
    Backend(String),
}

/// Document store holding the "stylists" collection.
///
/// No transactions and no schema: each call is an independent request keyed
/// by the identity that owns the record.
#[async_trait]
pub trait StylistStore: Send + Sync {
    /// Write a new record. Fails with `AlreadyExists` if the identity already has one.
    async fn create(&self, record: &StylistRecord) -> Result<(), StoreError>;

    async fn get(&self, id: &str) -> Result<Option<StylistRecord>, StoreError>;

    /// Every record, in the store's natural order
    async fn list(&self) -> Result<Vec<StylistRecord>, StoreError>;

    /// Merge the present fields of `patch` into the stored document
    async fn update_fields(&self, id: &str, patch: &UpdateStylistPayload) -> Result<(), StoreError>;

    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}
