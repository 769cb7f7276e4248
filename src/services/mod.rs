// Service exports
pub mod listings;
pub mod memory;
pub mod mongo;
pub mod store;

pub use listings::{ListingService, ServiceError};
pub use memory::InMemoryStore;
pub use mongo::MongoStore;
pub use store::{PropertyStore, StoreError};
