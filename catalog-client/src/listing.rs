//! Product listing view state
//!
//! Drives the infinite-scroll product grid: criteria changes restart the
//! listing at page one, "load more" appends the next page, and responses
//! from superseded requests are discarded so a slow page never
//! overwrites a newer one.

use shared::{ProductListParams, ProductPage, Product, SortOrder};

/// Page size for the admin grid
const VIEW_PAGE_LIMIT: u32 = 12;

/// Sentinel meaning "no category filter"
const ALL_CATEGORIES: &str = "all";

/// Handle for one in-flight listing request
///
/// Only the most recently issued ticket is applied; earlier tickets are
/// stale the moment a newer fetch begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    id: u64,
    page: u32,
}

/// Accumulated listing state
#[derive(Debug, Clone)]
pub struct ProductListView {
    items: Vec<Product>,
    search: String,
    category: String,
    sort: SortOrder,
    page: u32,
    pages: u32,
    total: u64,
    latest_fetch: u64,
    loading: bool,
}

impl Default for ProductListView {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductListView {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
            sort: SortOrder::default(),
            page: 1,
            pages: 0,
            total: 0,
            latest_fetch: 0,
            loading: false,
        }
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether another page is available
    pub fn has_more(&self) -> bool {
        self.page < self.pages
    }

    /// Query parameters for the page currently being requested
    pub fn params(&self) -> ProductListParams {
        ProductListParams {
            page: Some(self.page),
            limit: Some(VIEW_PAGE_LIMIT),
            search: (!self.search.is_empty()).then(|| self.search.clone()),
            category: (self.category != ALL_CATEGORIES).then(|| self.category.clone()),
            sort: Some(self.sort),
        }
    }

    /// Start a fetch for the current page, superseding any in-flight one
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_fetch += 1;
        self.loading = true;
        FetchTicket {
            id: self.latest_fetch,
            page: self.page,
        }
    }

    /// Apply a response; returns false when the ticket is stale
    ///
    /// Page one replaces the accumulated list, later pages append.
    pub fn apply(&mut self, ticket: FetchTicket, response: ProductPage) -> bool {
        if ticket.id != self.latest_fetch {
            return false;
        }

        if ticket.page <= 1 {
            self.items = response.items;
        } else {
            self.items.extend(response.items);
        }
        self.total = response.total;
        self.pages = response.pages;
        self.loading = false;
        true
    }

    fn reset_to_first_page(&mut self) {
        self.page = 1;
    }

    /// Change the search needle; the listing restarts at page one
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.reset_to_first_page();
    }

    /// Change the category filter ("all" clears it)
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        self.reset_to_first_page();
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
        self.reset_to_first_page();
    }

    /// Advance to the next page if one exists
    pub fn load_more(&mut self) -> bool {
        if self.has_more() {
            self.page += 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> Product {
        Product {
            id: format!("product:{id}"),
            name: format!("Product {id}"),
            category: "Audio".to_string(),
            price: 10.0,
            discount_percentage: 0.0,
            description: "test".to_string(),
            in_stock: true,
            image_url: String::new(),
            image_file_id: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    fn page(ids: &[&str], total: u64, page_no: u32, pages: u32) -> ProductPage {
        ProductPage {
            items: ids.iter().map(|id| product(id)).collect(),
            total,
            page: page_no,
            pages,
        }
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut view = ProductListView::new();

        let slow = view.begin_fetch();
        view.set_search("head");
        let fresh = view.begin_fetch();

        // The superseded response must not land
        assert!(!view.apply(slow, page(&["old1", "old2"], 2, 1, 1)));
        assert!(view.items().is_empty());

        assert!(view.apply(fresh, page(&["new1"], 1, 1, 1)));
        assert_eq!(view.items().len(), 1);
        assert_eq!(view.items()[0].name, "Product new1");
    }

    #[test]
    fn later_pages_accumulate() {
        let mut view = ProductListView::new();

        let first = view.begin_fetch();
        assert!(view.apply(first, page(&["a", "b"], 4, 1, 2)));
        assert_eq!(view.items().len(), 2);
        assert!(view.has_more());

        assert!(view.load_more());
        let second = view.begin_fetch();
        assert_eq!(second.page, 2);
        assert!(view.apply(second, page(&["c", "d"], 4, 2, 2)));

        assert_eq!(view.items().len(), 4);
        assert!(!view.has_more());
        assert!(!view.load_more());
    }

    #[test]
    fn criteria_change_restarts_at_page_one() {
        let mut view = ProductListView::new();

        let first = view.begin_fetch();
        view.apply(first, page(&["a", "b"], 30, 1, 3));
        view.load_more();
        let second = view.begin_fetch();
        view.apply(second, page(&["c"], 30, 2, 3));
        assert_eq!(view.items().len(), 3);

        view.set_category("Audio");
        assert_eq!(view.page(), 1);

        // The page-one response for the new criteria replaces everything
        let refreshed = view.begin_fetch();
        assert!(view.apply(refreshed, page(&["x"], 1, 1, 1)));
        assert_eq!(view.items().len(), 1);
    }

    #[test]
    fn params_reflect_criteria() {
        let mut view = ProductListView::new();
        let params = view.params();
        assert_eq!(params.page, Some(1));
        assert_eq!(params.limit, Some(12));
        assert_eq!(params.search, None);
        assert_eq!(params.category, None);

        view.set_search("mouse");
        view.set_category("Peripherals");
        view.set_sort(SortOrder::Oldest);
        let params = view.params();
        assert_eq!(params.search.as_deref(), Some("mouse"));
        assert_eq!(params.category.as_deref(), Some("Peripherals"));
        assert_eq!(params.sort, Some(SortOrder::Oldest));
    }
}
