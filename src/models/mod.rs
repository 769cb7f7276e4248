// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Owner, Property, PropertyImage, PropertyTrace};
pub use requests::PropertiesQuery;
pub use responses::{
    ErrorResponse, HealthResponse, ImageDto, OwnerDetailDto, OwnerSummaryDto, PaginatedResponse,
    PaginationDto, PropertyDetailDto, PropertyDto, PropertyListDto, TraceDto,
};
