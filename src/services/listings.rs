use std::sync::Arc;
use thiserror::Error;

use crate::core::{
    distinct_owner_ids, to_detail_dto, to_list_dto, to_property_dto, OwnerLookup, PageRequest,
    PropertyFilter, PropertySearch,
};
use crate::models::{
    PaginatedResponse, PaginationDto, Property, PropertyDetailDto, PropertyDto, PropertyListDto,
};
use crate::services::store::{PropertyStore, StoreError};

/// Errors surfaced by the listing service
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Property not found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Paginated, filtered reads over properties joined with their owners
///
/// The service holds no per-request state; one instance is shared by all
/// HTTP workers.
#[derive(Clone)]
pub struct ListingService {
    store: Arc<dyn PropertyStore>,
}

impl ListingService {
    pub fn new(store: Arc<dyn PropertyStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn PropertyStore> {
        &self.store
    }

    /// List properties with an owner summary for each
    ///
    /// Owners are resolved for the fetched page only, in one batch lookup.
    /// Properties whose owner does not resolve carry an empty owner summary.
    pub async fn list_properties(
        &self,
        search: &PropertySearch,
        page: PageRequest,
    ) -> Result<PaginatedResponse<PropertyDto>, ServiceError> {
        let filter = PropertyFilter::from_search(search);
        let (total_items, properties) = self.fetch_page(&filter, page).await?;

        let owners = if properties.is_empty() {
            OwnerLookup::default()
        } else {
            let owner_ids = distinct_owner_ids(&properties);
            OwnerLookup::new(self.store.find_owners(&owner_ids).await?)
        };

        let data = properties
            .into_iter()
            .map(|p| to_property_dto(p, &owners))
            .collect();

        Ok(PaginatedResponse {
            data,
            pagination: PaginationDto::new(page, total_items),
        })
    }

    /// List properties as compact list entries; no owner lookup is made
    pub async fn list_properties_minimal(
        &self,
        search: &PropertySearch,
        page: PageRequest,
    ) -> Result<PaginatedResponse<PropertyListDto>, ServiceError> {
        let filter = PropertyFilter::from_search(search);
        let (total_items, properties) = self.fetch_page(&filter, page).await?;

        Ok(PaginatedResponse {
            data: properties.into_iter().map(to_list_dto).collect(),
            pagination: PaginationDto::new(page, total_items),
        })
    }

    /// Fetch one property with its complete owner record
    pub async fn get_property_by_id(&self, id: &str) -> Result<PropertyDetailDto, ServiceError> {
        let property = self
            .store
            .find_property(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;

        let owner = self.store.find_owner(&property.owner_id).await?;

        Ok(to_detail_dto(property, owner))
    }

    /// Count and fetch one page; the two reads are independent and run together
    async fn fetch_page(
        &self,
        filter: &PropertyFilter,
        page: PageRequest,
    ) -> Result<(u64, Vec<Property>), ServiceError> {
        let (total_items, properties) = tokio::try_join!(
            self.store.count_properties(filter),
            self.store.find_properties(filter, page.skip(), page.limit()),
        )?;

        tracing::debug!(
            "Page {} of {} matching properties returned {} rows",
            page.page(),
            total_items,
            properties.len()
        );

        Ok((total_items, properties))
    }
}
