//! Query engine: filtering, search, pagination and aggregation over a
//! borrowed view of the collection. Everything here is pure and synchronous.

use axum_helpers::QueryPairs;
use std::collections::BTreeMap;
use std::ops::Range;

use crate::models::{Product, ProductPage, ProductQuery, ProductStats};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// Parse a positive integer from the leading digits of `raw`.
///
/// Mirrors lenient query-string handling: surrounding whitespace and a
/// leading `+` are accepted, trailing garbage is ignored (`"3abc"` is 3).
/// Missing, non-numeric, zero, and negative values yield `default`; values
/// too large for `usize` saturate.
pub fn parse_positive(raw: Option<&str>, default: usize) -> usize {
    let Some(raw) = raw else {
        return default;
    };

    let trimmed = raw.trim_start();
    let unsigned = match trimmed.strip_prefix('-') {
        Some(_) => return default,
        None => trimmed.strip_prefix('+').unwrap_or(trimmed),
    };

    let digits_len = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return default;
    }

    match unsigned[..digits_len].parse::<usize>() {
        Ok(0) => default,
        Ok(n) => n,
        Err(_) => usize::MAX,
    }
}

/// Page selection for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    pub fn from_params(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: parse_positive(page, DEFAULT_PAGE),
            limit: parse_positive(limit, DEFAULT_LIMIT),
        }
    }

    /// Half-open index window `[(page-1)*limit, page*limit)`.
    pub fn window(&self) -> Range<usize> {
        let start = (self.page - 1).saturating_mul(self.limit);
        let end = self.page.saturating_mul(self.limit);
        start..end
    }

    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.limit)
    }
}

/// Normalized listing criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCriteria {
    pub category: Option<String>,
    pub search: Option<String>,
    pub pagination: Pagination,
}

/// Repeated keys resolve to their first value.
impl From<&QueryPairs> for ProductQuery {
    fn from(pairs: &QueryPairs) -> Self {
        let first = |key: &str| pairs.first(key).map(str::to_string);
        Self {
            category: first("category"),
            search: first("search"),
            page: first("page"),
            limit: first("limit"),
        }
    }
}

impl From<ProductQuery> for ListCriteria {
    fn from(query: ProductQuery) -> Self {
        let pagination = Pagination::from_params(query.page.as_deref(), query.limit.as_deref());
        Self {
            category: query.category.filter(|c| !c.is_empty()),
            search: query.search.filter(|s| !s.is_empty()),
            pagination,
        }
    }
}

impl ListCriteria {
    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .is_none_or(|category| product.category.to_lowercase() == category.to_lowercase());

        let search_ok = self
            .search
            .as_deref()
            .is_none_or(|search| product.name.to_lowercase().contains(&search.to_lowercase()));

        category_ok && search_ok
    }
}

/// Filter by category, then by name search, then slice out one page.
///
/// Totals reflect the filtered set before pagination. Pages past the end are
/// empty, never an error.
pub fn list(products: &[Product], criteria: &ListCriteria) -> ProductPage {
    let matching: Vec<&Product> = products.iter().filter(|p| criteria.matches(p)).collect();
    let total = matching.len();
    let window = criteria.pagination.window();

    let page = matching
        .into_iter()
        .skip(window.start)
        .take(window.end - window.start)
        .cloned()
        .collect();

    ProductPage {
        total_products: total,
        total_pages: criteria.pagination.total_pages(total),
        current_page: criteria.pagination.page,
        page_size: criteria.pagination.limit,
        products: page,
    }
}

/// Count products overall and per stored category.
pub fn stats(products: &[Product]) -> ProductStats {
    let mut count_by_category = BTreeMap::new();
    for product in products {
        *count_by_category.entry(product.category.clone()).or_insert(0) += 1;
    }

    ProductStats {
        total_count: products.len(),
        count_by_category,
    }
}
