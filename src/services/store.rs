use async_trait::async_trait;
use thiserror::Error;

use crate::core::PropertyFilter;
use crate::models::{Owner, Property};

/// Errors that can occur when reading from the document store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("MongoDB error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Read access to the `properties` and `owners` collections
///
/// Paginated reads return properties ordered by identifier ascending so that
/// page contents are stable between requests. Identifiers that are not in the
/// store's native format match nothing.
#[async_trait]
pub trait PropertyStore: Send + Sync {
    /// Count properties matching the filter, ignoring pagination
    async fn count_properties(&self, filter: &PropertyFilter) -> Result<u64, StoreError>;

    /// Fetch up to `limit` matching properties after skipping `skip`
    async fn find_properties(
        &self,
        filter: &PropertyFilter,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Property>, StoreError>;

    async fn find_property(&self, id: &str) -> Result<Option<Property>, StoreError>;

    async fn find_owner(&self, id: &str) -> Result<Option<Owner>, StoreError>;

    /// Batch lookup of owners; unknown ids are silently absent from the result
    async fn find_owners(&self, ids: &[String]) -> Result<Vec<Owner>, StoreError>;

    /// Check connectivity
    async fn ping(&self) -> Result<(), StoreError>;
}
