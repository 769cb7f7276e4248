use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use std::time::Duration;

use crate::config::DatabaseSettings;
use crate::core::{FilterPredicate, PropertyFilter};
use crate::core::filters::escape_regex;
use crate::models::{Owner, Property};
use crate::services::store::{PropertyStore, StoreError};

/// MongoDB-backed property store
///
/// Holds a single client whose connection pool is shared by every request.
#[derive(Clone)]
pub struct MongoStore {
    database: Database,
    properties: Collection<Property>,
    owners: Collection<Owner>,
}

impl MongoStore {
    /// Connect using the database settings
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(&settings.uri).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.max_pool_size = settings.max_pool_size;
        options.min_pool_size = settings.min_pool_size;
        options.server_selection_timeout = settings
            .server_selection_timeout_secs
            .map(Duration::from_secs);

        let client = Client::with_options(options)?;
        let database = client.database(&settings.name);

        tracing::info!(
            "Using MongoDB database '{}' (properties: '{}', owners: '{}')",
            settings.name,
            settings.properties_collection,
            settings.owners_collection
        );

        Ok(Self::from_database(
            database,
            &settings.properties_collection,
            &settings.owners_collection,
        ))
    }

    pub fn from_database(database: Database, properties: &str, owners: &str) -> Self {
        Self {
            properties: database.collection(properties),
            owners: database.collection(owners),
            database,
        }
    }
}

/// Translate a property filter into a MongoDB query document
pub fn filter_document(filter: &PropertyFilter) -> Document {
    if filter.is_empty() {
        return Document::new();
    }

    let clauses: Vec<Bson> = filter
        .predicates()
        .iter()
        .map(|predicate| {
            let clause = match predicate {
                FilterPredicate::NameContains(term) => {
                    doc! { "name": { "$regex": escape_regex(term), "$options": "i" } }
                }
                FilterPredicate::AddressContains(term) => {
                    doc! { "address": { "$regex": escape_regex(term), "$options": "i" } }
                }
                FilterPredicate::MinPrice(min) => doc! { "price": { "$gte": *min } },
                FilterPredicate::MaxPrice(max) => doc! { "price": { "$lte": *max } },
            };
            Bson::Document(clause)
        })
        .collect();

    doc! { "$and": clauses }
}

fn parse_object_id(id: &str) -> Option<ObjectId> {
    match ObjectId::parse_str(id.trim()) {
        Ok(oid) => Some(oid),
        Err(_) => {
            tracing::debug!("Ignoring identifier that is not an ObjectId: {}", id);
            None
        }
    }
}

/// Skip and limit as the driver encodes them (signed 64-bit).
///
/// `None` when the skip cannot be encoded; no collection holds that many
/// documents, so the page is empty.
fn page_window(skip: u64, limit: u64) -> Option<(u64, i64)> {
    i64::try_from(skip).ok()?;
    Some((skip, i64::try_from(limit).unwrap_or(i64::MAX)))
}

#[async_trait]
impl PropertyStore for MongoStore {
    async fn count_properties(&self, filter: &PropertyFilter) -> Result<u64, StoreError> {
        let count = self.properties.count_documents(filter_document(filter)).await?;
        Ok(count)
    }

    async fn find_properties(
        &self,
        filter: &PropertyFilter,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Property>, StoreError> {
        let Some((skip, limit)) = page_window(skip, limit) else {
            tracing::debug!("Skip {} is past any stored document", skip);
            return Ok(vec![]);
        };

        let cursor = self
            .properties
            .find(filter_document(filter))
            .sort(doc! { "_id": 1 })
            .skip(skip)
            .limit(limit)
            .await?;

        let properties: Vec<Property> = cursor.try_collect().await?;

        tracing::debug!(
            "Fetched {} properties (skip: {}, limit: {})",
            properties.len(),
            skip,
            limit
        );

        Ok(properties)
    }

    async fn find_property(&self, id: &str) -> Result<Option<Property>, StoreError> {
        let Some(oid) = parse_object_id(id) else {
            return Ok(None);
        };

        Ok(self.properties.find_one(doc! { "_id": oid }).await?)
    }

    async fn find_owner(&self, id: &str) -> Result<Option<Owner>, StoreError> {
        let Some(oid) = parse_object_id(id) else {
            return Ok(None);
        };

        Ok(self.owners.find_one(doc! { "_id": oid }).await?)
    }

    async fn find_owners(&self, ids: &[String]) -> Result<Vec<Owner>, StoreError> {
        let oids: Vec<ObjectId> = ids.iter().filter_map(|id| parse_object_id(id)).collect();
        if oids.is_empty() {
            return Ok(vec![]);
        }

        let cursor = self.owners.find(doc! { "_id": { "$in": oids } }).await?;
        let owners: Vec<Owner> = cursor.try_collect().await?;

        tracing::debug!("Resolved {} of {} owners", owners.len(), ids.len());

        Ok(owners)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
