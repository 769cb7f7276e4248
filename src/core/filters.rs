use crate::models::Property;

/// Raw optional search parameters for a property listing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertySearch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

/// A single constraint narrowing the property listing
#[derive(Debug, Clone, PartialEq)]
pub enum FilterPredicate {
    /// Case-insensitive substring of the property name
    NameContains(String),
    /// Case-insensitive substring of the property address
    AddressContains(String),
    /// Price greater than or equal to the bound
    MinPrice(f64),
    /// Price less than or equal to the bound
    MaxPrice(f64),
}

impl FilterPredicate {
    #[inline]
    pub fn matches(&self, property: &Property) -> bool {
        match self {
            FilterPredicate::NameContains(term) => contains_ignore_case(&property.name, term),
            FilterPredicate::AddressContains(term) => contains_ignore_case(&property.address, term),
            FilterPredicate::MinPrice(min) => property.price >= *min,
            FilterPredicate::MaxPrice(max) => property.price <= *max,
        }
    }
}

/// Conjunction of predicates applied to the `properties` collection
///
/// An empty filter matches every property. Store implementations either
/// evaluate it directly with [`PropertyFilter::matches`] or translate it to
/// their native query form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    predicates: Vec<FilterPredicate>,
}

impl PropertyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter with one predicate per provided search parameter.
    ///
    /// Text parameters are trimmed and ignored when blank.
    pub fn from_search(search: &PropertySearch) -> Self {
        let mut filter = Self::new();

        if let Some(name) = non_blank(search.name.as_deref()) {
            filter = filter.with(FilterPredicate::NameContains(name));
        }
        if let Some(address) = non_blank(search.address.as_deref()) {
            filter = filter.with(FilterPredicate::AddressContains(address));
        }
        if let Some(min) = search.min_price {
            filter = filter.with(FilterPredicate::MinPrice(min));
        }
        if let Some(max) = search.max_price {
            filter = filter.with(FilterPredicate::MaxPrice(max));
        }

        filter
    }

    pub fn with(mut self, predicate: FilterPredicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn predicates(&self) -> &[FilterPredicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Check whether a property satisfies every predicate
    #[inline]
    pub fn matches(&self, property: &Property) -> bool {
        self.predicates.iter().all(|p| p.matches(property))
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[inline]
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Escape regular expression metacharacters so the term matches literally
pub fn escape_regex(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(
            c,
            '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$' | '#' | '-'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
