use super::filter::{CategoryFilter, FilterCriteria, filter_products, page_count, paginate};
use super::product::Product;
use crate::config::Config;

/// Working state of the products view: the base list, the active criteria,
/// the filtered subset and the selected page.
///
/// Every mutation recomputes the filtered subset and, except for `set_page`,
/// returns to page 1.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductTable {
    products: Vec<Product>,
    criteria: FilterCriteria,
    filtered: Vec<Product>,
    page: usize,
    page_size: usize,
}

impl Default for ProductTable {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ProductTable {
    pub fn new(products: Vec<Product>) -> Self {
        Self::with_page_size(products, Config::PAGE_SIZE)
    }

    pub fn with_page_size(products: Vec<Product>, page_size: usize) -> Self {
        let mut table = Self {
            products,
            criteria: FilterCriteria::default(),
            filtered: Vec::new(),
            page: 1,
            page_size,
        };
        table.recompute();
        table
    }

    fn recompute(&mut self) {
        self.filtered = filter_products(&self.products, &self.criteria);
        self.page = 1;
    }

    /// Replaces the base list, e.g. after a fresh fetch
    pub fn replace_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.recompute();
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.recompute();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.criteria.query = query.into();
        self.recompute();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.criteria.category = category;
        self.recompute();
    }

    pub fn set_min_price(&mut self, min_price: f64) {
        self.criteria.min_price = min_price;
        self.recompute();
    }

    pub fn set_max_price(&mut self, max_price: f64) {
        self.criteria.max_price = max_price;
        self.recompute();
    }

    pub fn set_min_rating(&mut self, min_rating: f64) {
        self.criteria.min_rating = min_rating;
        self.recompute();
    }

    pub fn clear_filters(&mut self) {
        self.set_criteria(FilterCriteria::default());
    }

    /// Drops a product from the base list. Nothing is sent upstream.
    ///
    /// Returns true if a product with that id was present.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        let removed = self.products.len() != before;
        self.recompute();
        removed
    }

    /// Selects a 1-based page. Out-of-range pages are kept and render empty.
    pub const fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    pub const fn current_page(&self) -> usize {
        self.page
    }

    pub const fn page_count(&self) -> usize {
        page_count(self.filtered.len(), self.page_size)
    }

    pub fn page_items(&self) -> &[Product] {
        paginate(&self.filtered, self.page, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::product::Rating;

    fn catalog(len: u32) -> Vec<Product> {
        (1..=len)
            .map(|id| Product {
                id,
                title: format!("Item {id}"),
                price: f64::from(id) * 10.0,
                description: String::new(),
                category: if id % 2 == 0 { "even" } else { "odd" }.to_string(),
                image: String::new(),
                rating: Some(Rating {
                    rate: f64::from(id % 5),
                    count: id,
                }),
            })
            .collect()
    }

    #[test]
    fn test_new_table_shows_everything() {
        let table = ProductTable::new(catalog(12));
        assert_eq!(table.filtered().len(), 12);
        assert_eq!(table.current_page(), 1);
        assert_eq!(table.page_count(), 3);
        assert_eq!(table.page_items().len(), 5);
    }

    #[test]
    fn test_criteria_change_resets_page() {
        let mut table = ProductTable::new(catalog(12));
        table.set_page(3);
        assert_eq!(table.page_items().len(), 2);

        table.set_category(CategoryFilter::Only("even".to_string()));
        assert_eq!(table.current_page(), 1);
        assert_eq!(table.filtered().len(), 6);
        assert!(table.filtered().iter().all(|p| p.category == "even"));
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let mut table = ProductTable::new(catalog(4));
        table.set_page(9);
        assert_eq!(table.current_page(), 9);
        assert!(table.page_items().is_empty());
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut table = ProductTable::new(catalog(3));
        table.set_page(2);
        assert!(!table.remove(42));
        assert_eq!(table.products().len(), 3);
        assert_eq!(table.current_page(), 1);
    }

    #[test]
    fn test_replace_products_keeps_criteria() {
        let mut table = ProductTable::new(catalog(3));
        table.set_min_price(25.0);
        assert_eq!(table.filtered().len(), 1);

        table.replace_products(catalog(6));
        assert_eq!(table.criteria().min_price, 25.0);
        assert_eq!(table.filtered().len(), 4);
    }
}
