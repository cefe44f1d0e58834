//! List-request parameters
//!
//! Deserialized straight from the query string by the HTTP layer. Paging
//! inputs are clamped, never rejected: the effective page size always
//! lands in `[1, MAX_PAGE_SIZE]` and the page number is floored at 1.

use serde::Deserialize;

/// Page size used when the client does not send one
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Hard cap on the page size; larger requests are silently clamped
pub const MAX_PAGE_SIZE: u32 = 50;

/// Query parameters for the band list endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandQuery {
    #[serde(default)]
    pub main_genre: Option<String>,
    #[serde(default)]
    pub search_query: Option<String>,
    #[serde(default = "default_page_number")]
    pub page_number: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_order_by")]
    pub order_by: String,
    #[serde(default)]
    pub fields: Option<String>,
}

fn default_page_number() -> u32 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_order_by() -> String {
    "name".to_string()
}

impl Default for BandQuery {
    fn default() -> Self {
        Self {
            main_genre: None,
            search_query: None,
            page_number: default_page_number(),
            page_size: default_page_size(),
            order_by: default_order_by(),
            fields: None,
        }
    }
}

impl BandQuery {
    /// Effective page number, floored at 1.
    pub fn page(&self) -> u32 {
        self.page_number.max(1)
    }

    /// Effective page size, clamped to `[1, MAX_PAGE_SIZE]`.
    pub fn size(&self) -> u32 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }
}
