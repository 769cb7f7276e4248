//! Realty API - read-only property listings service
//!
//! This library provides the query and assembly layer behind the listings
//! API: filter composition, pagination, owner resolution and DTO shaping,
//! over a pluggable document store.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{PageRequest, PropertyFilter, PropertySearch};
pub use models::{PaginatedResponse, PaginationDto, PropertyDetailDto, PropertyDto, PropertyListDto};
pub use services::{InMemoryStore, ListingService, MongoStore, PropertyStore};
