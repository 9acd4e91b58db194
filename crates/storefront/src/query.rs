//! Catalog query pipeline.
//!
//! A pure function of (catalog, parameters) → visible page. The steps run
//! in a fixed order: search filter, category filter, price filter, sort,
//! paginate. Nothing here touches storage.
//!
//! [`QueryParams`] keeps its fields private so the page-reset rule can't be
//! bypassed: every filter or sort change puts the viewer back on page 1,
//! exactly as the listing screen behaves.

use serde::{Deserialize, Serialize};

use mercato_core::{Category, Price};

use crate::catalog::{Catalog, Product};

/// Products shown per listing page by default.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Upper bound of the price filter's full range.
pub const PRICE_RANGE_MAX: u32 = 20_000;

/// Listing sort modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Catalog order.
    #[default]
    Featured,
    /// Cheapest first; catalog order breaks ties.
    PriceAscending,
    /// Most expensive first; catalog order breaks ties.
    PriceDescending,
    /// Most recently listed first (by `created_at`); catalog order breaks
    /// ties.
    Newest,
}

/// Filter, sort, and pagination parameters for the product listing.
///
/// Transient view state; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryParams {
    search: String,
    categories: Vec<Category>,
    price_min: Price,
    price_max: Price,
    sort: SortOrder,
    page: usize,
    page_size: usize,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            search: String::new(),
            categories: Vec::new(),
            price_min: Price::ZERO,
            price_max: Price::from_units(PRICE_RANGE_MAX),
            sort: SortOrder::Featured,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryParams {
    /// Default parameters with an explicit page size.
    #[must_use]
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            ..Self::default()
        }
    }

    /// Current search string.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Currently selected categories.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Current inclusive price range.
    #[must_use]
    pub const fn price_range(&self) -> (Price, Price) {
        (self.price_min, self.price_max)
    }

    /// Current sort mode.
    #[must_use]
    pub const fn sort(&self) -> SortOrder {
        self.sort
    }

    /// Current 1-based page number.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Products per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Set the search string and return to page 1.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Select or deselect a category and return to page 1.
    pub fn toggle_category(&mut self, category: Category) {
        if let Some(pos) = self.categories.iter().position(|&c| c == category) {
            self.categories.remove(pos);
        } else {
            self.categories.push(category);
        }
        self.page = 1;
    }

    /// Replace the selected categories and return to page 1.
    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
        self.page = 1;
    }

    /// Set the inclusive price range and return to page 1.
    ///
    /// An inverted range is accepted as-is; it simply matches nothing.
    pub fn set_price_range(&mut self, min: Price, max: Price) {
        self.price_min = min;
        self.price_max = max;
        self.page = 1;
    }

    /// Set the sort mode and return to page 1.
    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
        self.page = 1;
    }

    /// Navigate to a page. Clamped to at least 1; pages past the end
    /// resolve to an empty slice in [`run_query`].
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Restore defaults: empty search, no categories, the full price
    /// range, featured order, page 1. This is the "clear all filters"
    /// operation behind the no-results state.
    pub fn reset(&mut self) {
        *self = Self::with_page_size(self.page_size);
    }
}

/// One visible page of query results.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    /// The products on this page, in sorted order.
    pub products: Vec<Product>,
    /// Total pages for the filtered set (0 when nothing matched).
    pub total_pages: usize,
    /// The 1-based page these products came from.
    pub page: usize,
}

impl ProductPage {
    /// Whether the whole filtered set is empty (the "no results" state).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_pages == 0
    }
}

/// Run the filter → sort → paginate pipeline.
///
/// Deterministic: the same catalog and parameters always produce the same
/// page. All sorts are stable, so equal keys keep their catalog order.
#[must_use]
pub fn run_query(catalog: &Catalog, params: &QueryParams) -> ProductPage {
    let needle = params.search.to_lowercase();
    let (min, max) = params.price_range();

    let mut filtered: Vec<&Product> = catalog
        .products()
        .iter()
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .filter(|p| params.categories.is_empty() || params.categories.contains(&p.category))
        .filter(|p| p.price >= min && p.price <= max)
        .collect();

    match params.sort {
        SortOrder::Featured => {}
        SortOrder::PriceAscending => filtered.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOrder::PriceDescending => filtered.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOrder::Newest => filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }

    let page_size = params.page_size.max(1);
    let total_pages = filtered.len().div_ceil(page_size);
    let start = (params.page - 1).saturating_mul(page_size);

    let products = filtered
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    ProductPage {
        products,
        total_pages,
        page: params.page,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mercato_core::ProductId;

    fn test_product(id: i32, name: &str, category: Category, price: u32, day: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            category,
            price: Price::from_units(price),
            image: String::new(),
            description: String::new(),
            colors: Vec::new(),
            details: None,
            created_at: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
        }
    }

    /// Eight products priced 100..=800, alternating categories, listed a
    /// day apart.
    fn eight_product_catalog() -> Catalog {
        let products = (1..=8)
            .map(|i| {
                let category = if i % 2 == 0 {
                    Category::HomeLiving
                } else {
                    Category::HealthWellness
                };
                test_product(i, &format!("Product {i}"), category, (i as u32) * 100, i as u32)
            })
            .collect();
        Catalog::new(products)
    }

    fn ids(page: &ProductPage) -> Vec<i32> {
        page.products.iter().map(|p| p.id.as_i32()).collect()
    }

    #[test]
    fn test_default_params_return_first_page() {
        let catalog = eight_product_catalog();
        let page = run_query(&catalog, &QueryParams::default());
        assert_eq!(ids(&page), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let catalog = Catalog::new(vec![
            test_product(1, "Herbal Wellness Tea", Category::HealthWellness, 450, 1),
            test_product(2, "Ceramic Coffee Set", Category::HomeLiving, 1600, 2),
        ]);
        let mut params = QueryParams::default();
        params.set_search("WELLNESS");
        assert_eq!(ids(&run_query(&catalog, &params)), vec![1]);
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let catalog = eight_product_catalog();
        let mut params = QueryParams::default();
        params.set_search("");
        assert_eq!(run_query(&catalog, &params).total_pages, 2);
    }

    #[test]
    fn test_category_filter() {
        let catalog = eight_product_catalog();
        let mut params = QueryParams::default();
        params.toggle_category(Category::HomeLiving);
        assert_eq!(ids(&run_query(&catalog, &params)), vec![2, 4, 6, 8]);
    }

    #[test]
    fn test_no_category_selection_means_no_filter() {
        let catalog = eight_product_catalog();
        let mut params = QueryParams::default();
        params.toggle_category(Category::HomeLiving);
        params.toggle_category(Category::HomeLiving);
        assert_eq!(run_query(&catalog, &params).total_pages, 2);
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let catalog = eight_product_catalog();
        let mut params = QueryParams::default();
        params.set_price_range(Price::from_units(300), Price::from_units(600));
        assert_eq!(ids(&run_query(&catalog, &params)), vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_inverted_price_range_yields_no_results() {
        let catalog = eight_product_catalog();
        let mut params = QueryParams::default();
        params.set_price_range(Price::from_units(600), Price::from_units(300));
        let page = run_query(&catalog, &params);
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_spec_scenario_price_window_ascending_page_one() {
        // 8 products priced 100..800; range [300,600]; ascending; size 2.
        let catalog = eight_product_catalog();
        let mut params = QueryParams::with_page_size(2);
        params.set_price_range(Price::from_units(300), Price::from_units(600));
        params.set_sort(SortOrder::PriceAscending);

        let page = run_query(&catalog, &params);
        assert_eq!(ids(&page), vec![3, 4]);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_price_sorts_are_stable_and_reversed() {
        // Two pairs of tied prices; ties must keep catalog order in both
        // directions.
        let catalog = Catalog::new(vec![
            test_product(1, "A", Category::HomeLiving, 500, 1),
            test_product(2, "B", Category::HomeLiving, 300, 2),
            test_product(3, "C", Category::HomeLiving, 500, 3),
            test_product(4, "D", Category::HomeLiving, 300, 4),
        ]);

        let mut params = QueryParams::default();
        params.set_sort(SortOrder::PriceAscending);
        let ascending = ids(&run_query(&catalog, &params));
        assert_eq!(ascending, vec![2, 4, 1, 3]);

        params.set_sort(SortOrder::PriceDescending);
        let descending = ids(&run_query(&catalog, &params));
        assert_eq!(descending, vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_newest_sorts_by_listing_date_descending() {
        let catalog = eight_product_catalog();
        let mut params = QueryParams::default();
        params.set_sort(SortOrder::Newest);
        assert_eq!(ids(&run_query(&catalog, &params)), vec![8, 7, 6, 5, 4, 3]);
    }

    #[test]
    fn test_filter_changes_reset_page() {
        let mut params = QueryParams::default();
        params.set_page(3);
        params.set_search("tea");
        assert_eq!(params.page(), 1);

        params.set_page(3);
        params.toggle_category(Category::HomeLiving);
        assert_eq!(params.page(), 1);

        params.set_page(3);
        params.set_price_range(Price::ZERO, Price::from_units(500));
        assert_eq!(params.page(), 1);

        params.set_page(3);
        params.set_sort(SortOrder::Newest);
        assert_eq!(params.page(), 1);
    }

    #[test]
    fn test_page_past_end_is_empty_slice() {
        let catalog = eight_product_catalog();
        let mut params = QueryParams::default();
        params.set_page(5);
        let page = run_query(&catalog, &params);
        assert!(page.products.is_empty());
        assert_eq!(page.total_pages, 2);
        assert!(!page.is_empty(), "filtered set itself is not empty");
    }

    #[test]
    fn test_deterministic_for_same_inputs() {
        let catalog = eight_product_catalog();
        let mut params = QueryParams::with_page_size(3);
        params.set_sort(SortOrder::PriceDescending);
        params.set_page(2);

        let first = run_query(&catalog, &params);
        let second = run_query(&catalog, &params);
        assert_eq!(first, second);
    }

    #[test]
    fn test_reset_restores_defaults_but_keeps_page_size() {
        let mut params = QueryParams::with_page_size(3);
        params.set_search("tea");
        params.toggle_category(Category::HomeLiving);
        params.set_price_range(Price::from_units(100), Price::from_units(200));
        params.set_sort(SortOrder::Newest);
        params.reset();

        assert_eq!(params.search(), "");
        assert!(params.categories().is_empty());
        assert_eq!(
            params.price_range(),
            (Price::ZERO, Price::from_units(PRICE_RANGE_MAX))
        );
        assert_eq!(params.sort(), SortOrder::Featured);
        assert_eq!(params.page(), 1);
        assert_eq!(params.page_size(), 3);
    }
}
