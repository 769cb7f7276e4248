use crate::models::PaginationDto;

/// 1-based page position requested by a caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    page_size: u64,
}

impl PageRequest {
    /// Create a page request; zero values are raised to 1.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Number of matching records preceding this page
    pub fn skip(&self) -> u64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

impl PaginationDto {
    /// Pagination metadata for `request` over `total_items` matching records
    pub fn new(request: PageRequest, total_items: u64) -> Self {
        let total_pages = total_items.div_ceil(request.page_size());

        Self {
            current_page: request.page(),
            page_size: request.page_size(),
            total_items,
            total_pages,
            has_next: request.page() < total_pages,
            has_previous: request.page() > 1,
        }
    }
}
