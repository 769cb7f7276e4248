use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::core::{PageRequest, PropertySearch};

/// Query string accepted by the property listing endpoints
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_price_range"))]
pub struct PropertiesQuery {
    pub name: Option<String>,
    pub address: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "Page must be greater than 0"))]
    pub page: i64,
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 100, message = "PageSize must be between 1 and 100"))]
    pub page_size: i64,
}

impl Default for PropertiesQuery {
    fn default() -> Self {
        Self {
            name: None,
            address: None,
            min_price: None,
            max_price: None,
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    10
}

fn validate_price_range(query: &PropertiesQuery) -> Result<(), ValidationError> {
    if let (Some(min), Some(max)) = (query.min_price, query.max_price) {
        if min > max {
            let mut error = ValidationError::new("price_range");
            error.message = Some("minPrice cannot be greater than maxPrice".into());
            return Err(error);
        }
    }
    Ok(())
}

impl PropertiesQuery {
    /// Validate and return the first failure as a human-readable message.
    ///
    /// Fields are reported in a fixed order (page, pageSize, price range) so
    /// a request with several problems always gets the same answer.
    pub fn check(&self) -> Result<(), String> {
        match self.validate() {
            Ok(()) => Ok(()),
            Err(errors) => Err(first_message(&errors)),
        }
    }

    pub fn search(&self) -> PropertySearch {
        PropertySearch {
            name: self.name.clone(),
            address: self.address.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
        }
    }

    /// Page request for an already validated query
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page.max(1) as u64, self.page_size.max(1) as u64)
    }
}

fn first_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();

    ["page", "page_size", "__all__"]
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .chain(field_errors.values())
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: i64, page_size: i64) -> PropertiesQuery {
        PropertiesQuery {
            page,
            page_size,
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_from_empty_query_string() {
        let parsed: PropertiesQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.page, 1);
        assert_eq!(parsed.page_size, 10);
        assert!(parsed.check().is_ok());
    }

    #[test]
    fn test_page_must_be_positive() {
        assert_eq!(query(0, 10).check().unwrap_err(), "Page must be greater than 0");
        assert_eq!(query(-3, 10).check().unwrap_err(), "Page must be greater than 0");
    }

    #[test]
    fn test_page_size_bounds() {
        assert!(query(1, 1).check().is_ok());
        assert!(query(1, 100).check().is_ok());
        assert_eq!(
            query(1, 0).check().unwrap_err(),
            "PageSize must be between 1 and 100"
        );
        assert_eq!(
            query(1, 101).check().unwrap_err(),
            "PageSize must be between 1 and 100"
        );
    }

    #[test]
    fn test_price_range_order() {
        let mut q = query(1, 10);
        q.min_price = Some(2_000_000.0);
        q.max_price = Some(1_000_000.0);
        assert_eq!(q.check().unwrap_err(), "minPrice cannot be greater than maxPrice");

        q.max_price = Some(2_000_000.0);
        assert!(q.check().is_ok());
    }

    #[test]
    fn test_page_reported_before_page_size() {
        assert_eq!(query(0, 500).check().unwrap_err(), "Page must be greater than 0");
    }
}
