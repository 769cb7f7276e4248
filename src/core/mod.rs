// Query composition and DTO assembly
pub mod assembly;
pub mod filters;
pub mod pagination;

pub use assembly::{distinct_owner_ids, main_image, to_detail_dto, to_list_dto, to_property_dto, OwnerLookup};
pub use filters::{FilterPredicate, PropertyFilter, PropertySearch};
pub use pagination::PageRequest;
