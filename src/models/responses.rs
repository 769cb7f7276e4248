use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::{unset_datetime, PropertyImage, PropertyTrace};

/// Generic paginated response wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationDto,
}

/// Pagination metadata returned with every listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub current_page: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Compact projection used by list views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyListDto {
    pub id: String,
    pub name: String,
    pub address: String,
    pub price: f64,
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub main_image: Option<String>,
}

/// Property with a summary of its owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDto {
    pub id: String,
    pub name: String,
    pub address: String,
    pub price: f64,
    pub code_internal: String,
    pub year: i32,
    pub owner: OwnerSummaryDto,
    pub images: Vec<ImageDto>,
    pub trace: Vec<TraceDto>,
}

/// Property with the complete owner record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetailDto {
    pub id: String,
    pub name: String,
    pub address: String,
    pub price: f64,
    pub code_internal: String,
    pub year: i32,
    pub owner: OwnerDetailDto,
    pub images: Vec<ImageDto>,
    pub trace: Vec<TraceDto>,
}

/// Owner fields shown next to a property in listings.
///
/// The default value (no id, empty strings) stands in for an owner reference
/// that does not resolve.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OwnerSummaryDto {
    pub id: Option<String>,
    pub name: String,
    pub address: String,
}

/// Complete owner fields for the detail view.
///
/// Like [`OwnerSummaryDto`], the default value stands in for a missing owner;
/// its birthday is `0001-01-01T00:00:00Z`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerDetailDto {
    pub id: Option<String>,
    pub name: String,
    pub address: String,
    pub photo: String,
    pub birthday: DateTime<Utc>,
}

impl Default for OwnerDetailDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            address: String::new(),
            photo: String::new(),
            birthday: unset_datetime(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageDto {
    pub file: String,
    pub enabled: bool,
}

impl From<PropertyImage> for ImageDto {
    fn from(image: PropertyImage) -> Self {
        Self {
            file: image.file,
            enabled: image.enabled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceDto {
    pub date_sale: DateTime<Utc>,
    pub name: String,
    pub value: f64,
    pub tax: f64,
}

impl From<PropertyTrace> for TraceDto {
    fn from(trace: PropertyTrace) -> Self {
        Self {
            date_sale: trace.date_sale,
            name: trace.name,
            value: trace.value,
            tax: trace.tax,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_wire_names() {
        let pagination = PaginationDto {
            current_page: 2,
            page_size: 10,
            total_items: 25,
            total_pages: 3,
            has_next: true,
            has_previous: true,
        };

        let json = serde_json::to_value(pagination).unwrap();
        assert_eq!(json["currentPage"], 2);
        assert_eq!(json["pageSize"], 10);
        assert_eq!(json["totalItems"], 25);
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["hasNext"], true);
        assert_eq!(json["hasPrevious"], true);
    }

    #[test]
    fn test_list_dto_omits_missing_main_image() {
        let dto = PropertyListDto {
            id: "65a1".to_string(),
            name: "Loft".to_string(),
            address: "Main St".to_string(),
            price: 100.0,
            year: 2001,
            main_image: None,
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("mainImage").is_none());
    }

    #[test]
    fn test_empty_owner_detail() {
        let owner = OwnerDetailDto::default();
        let json = serde_json::to_value(&owner).unwrap();

        assert!(json["id"].is_null());
        assert_eq!(json["name"], "");
        assert_eq!(json["photo"], "");
        assert_eq!(json["birthday"], "0001-01-01T00:00:00Z");
    }
}
