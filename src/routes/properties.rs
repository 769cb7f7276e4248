use actix_web::{web, HttpResponse};

use crate::models::PropertiesQuery;
use crate::routes::{ApiError, AppState};
use crate::services::ServiceError;

/// Configure property routes
///
/// `/properties/list` is registered before `/properties/{id}` so it is not
/// captured as an identifier.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/properties", web::get().to(list_properties))
        .route("/properties/list", web::get().to(list_properties_minimal))
        .route("/properties/{id}", web::get().to(get_property));
}

/// List properties with owner summaries
///
/// GET /api/properties?name=&address=&minPrice=&maxPrice=&page=1&pageSize=10
async fn list_properties(
    state: web::Data<AppState>,
    query: web::Query<PropertiesQuery>,
) -> Result<HttpResponse, ApiError> {
    query.check().map_err(ApiError::bad_request)?;

    let search = query.search();
    let page = query.page_request();

    tracing::info!(
        "Listing properties: page {}, page size {}, filters {:?}",
        page.page(),
        page.page_size(),
        search
    );

    match state.listings.list_properties(&search, page).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => {
            tracing::error!("Failed to list properties: {}", e);
            Err(ApiError::internal("An error occurred while retrieving properties"))
        }
    }
}

/// List properties as compact entries for list views
///
/// GET /api/properties/list (same query parameters as /api/properties)
async fn list_properties_minimal(
    state: web::Data<AppState>,
    query: web::Query<PropertiesQuery>,
) -> Result<HttpResponse, ApiError> {
    query.check().map_err(ApiError::bad_request)?;

    let search = query.search();
    let page = query.page_request();

    match state.listings.list_properties_minimal(&search, page).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => {
            tracing::error!("Failed to list properties: {}", e);
            Err(ApiError::internal("An error occurred while retrieving properties"))
        }
    }
}

/// Property detail with complete owner information
///
/// GET /api/properties/{id}
async fn get_property(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    if id.trim().is_empty() {
        return Err(ApiError::bad_request("Property ID cannot be empty"));
    }

    match state.listings.get_property_by_id(&id).await {
        Ok(property) => Ok(HttpResponse::Ok().json(property)),
        Err(ServiceError::NotFound(_)) => Err(ApiError::not_found(format!(
            "Property with ID '{}' not found",
            id
        ))),
        Err(e) => {
            tracing::error!("Failed to fetch property {}: {}", id, e);
            Err(ApiError::internal("An error occurred while retrieving the property"))
        }
    }
}
