use async_trait::async_trait;
use std::collections::HashMap;

use crate::core::PropertyFilter;
use crate::models::{Owner, Property};
use crate::services::store::{PropertyStore, StoreError};

/// Property store held entirely in memory
///
/// Evaluates filters with [`PropertyFilter::matches`] and orders results by
/// identifier like the MongoDB store. Used for tests and benchmarks.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    properties: Vec<Property>,
    owners: HashMap<String, Owner>,
}

impl InMemoryStore {
    pub fn new(properties: Vec<Property>, owners: Vec<Owner>) -> Self {
        let mut properties = properties;
        properties.sort_by(|a, b| a.id.cmp(&b.id));

        Self {
            properties,
            owners: owners.into_iter().map(|o| (o.id.clone(), o)).collect(),
        }
    }
}

#[async_trait]
impl PropertyStore for InMemoryStore {
    async fn count_properties(&self, filter: &PropertyFilter) -> Result<u64, StoreError> {
        Ok(self.properties.iter().filter(|p| filter.matches(p)).count() as u64)
    }

    async fn find_properties(
        &self,
        filter: &PropertyFilter,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Property>, StoreError> {
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(self
            .properties
            .iter()
            .filter(|p| filter.matches(p))
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_property(&self, id: &str) -> Result<Option<Property>, StoreError> {
        Ok(self.properties.iter().find(|p| p.id == id).cloned())
    }

    async fn find_owner(&self, id: &str) -> Result<Option<Owner>, StoreError> {
        Ok(self.owners.get(id).cloned())
    }

    async fn find_owners(&self, ids: &[String]) -> Result<Vec<Owner>, StoreError> {
        Ok(ids.iter().filter_map(|id| self.owners.get(id).cloned()).collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
