use super::product::Product;
use crate::config::Config;

/// Category constraint of the product table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    Any,
    Only(String),
}

impl CategoryFilter {
    /// Builds a filter from a select value, where the empty string means "any"
    pub fn from_value(value: &str) -> Self {
        if value.is_empty() {
            Self::Any
        } else {
            Self::Only(value.to_string())
        }
    }

    /// Value used by the category select element
    pub fn value(&self) -> &str {
        match self {
            Self::Any => "",
            Self::Only(category) => category,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Only(selected) => selected == category,
        }
    }
}

/// Conjunctive constraints narrowing the product list.
///
/// `min_price > max_price` is allowed and simply matches nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub query: String,
    pub category: CategoryFilter,
    pub min_price: f64,
    pub max_price: f64,
    pub min_rating: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: CategoryFilter::Any,
            min_price: Config::DEFAULT_MIN_PRICE,
            max_price: Config::DEFAULT_MAX_PRICE,
            min_rating: 0.0,
        }
    }
}

impl FilterCriteria {
    /// Returns true if the product satisfies every constraint
    pub fn matches(&self, product: &Product) -> bool {
        product
            .title
            .to_lowercase()
            .contains(&self.query.to_lowercase())
            && self.category.matches(&product.category)
            && product.price >= self.min_price
            && product.price <= self.max_price
            && product.rate() >= self.min_rating
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Ordered subsequence of `products` matching `criteria`
pub fn filter_products(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    products
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect()
}

/// Number of pages needed for `len` items
pub const fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Returns the 1-based `page` of `items`. Page 0 and pages past the end are empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = page.saturating_mul(page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::product::Rating;

    fn product(id: u32, title: &str, price: f64, category: &str, rate: f64) -> Product {
        Product {
            id,
            title: title.to_string(),
            price,
            description: String::new(),
            category: category.to_string(),
            image: format!("https://fakestoreapi.com/img/{id}.jpg"),
            rating: Some(Rating { rate, count: 1 }),
        }
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let products = vec![
            product(1, "Cotton Jacket", 55.99, "men's clothing", 4.7),
            product(2, "Rain Coat", 39.99, "women's clothing", 3.8),
        ];
        let criteria = FilterCriteria {
            query: "JACKET".to_string(),
            ..FilterCriteria::default()
        };

        let result = filter_products(&products, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let products = vec![
            product(1, "A", 30.0, "x", 1.0),
            product(2, "B", 60.0, "x", 1.0),
            product(3, "C", 60.01, "x", 1.0),
        ];
        let criteria = FilterCriteria {
            min_price: 30.0,
            max_price: 60.0,
            ..FilterCriteria::default()
        };

        let ids: Vec<u32> = filter_products(&products, &criteria)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_inverted_price_range_matches_nothing() {
        let products = vec![product(1, "A", 50.0, "x", 1.0)];
        let criteria = FilterCriteria {
            min_price: 100.0,
            max_price: 10.0,
            ..FilterCriteria::default()
        };
        assert!(filter_products(&products, &criteria).is_empty());
    }

    #[test]
    fn test_missing_rating_counts_as_zero() {
        let mut unrated = product(1, "A", 10.0, "x", 0.0);
        unrated.rating = None;
        let products = vec![unrated];

        assert_eq!(filter_products(&products, &FilterCriteria::default()).len(), 1);

        let criteria = FilterCriteria {
            min_rating: 1.0,
            ..FilterCriteria::default()
        };
        assert!(filter_products(&products, &criteria).is_empty());
    }

    #[test]
    fn test_category_filter_from_value() {
        assert_eq!(CategoryFilter::from_value(""), CategoryFilter::Any);
        assert_eq!(
            CategoryFilter::from_value("electronics"),
            CategoryFilter::Only("electronics".to_string())
        );
        assert!(CategoryFilter::Any.matches("jewelery"));
        assert!(!CategoryFilter::Only("electronics".to_string()).matches("jewelery"));
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 5), 0);
        assert_eq!(page_count(5, 5), 1);
        assert_eq!(page_count(6, 5), 2);
        assert_eq!(page_count(20, 5), 4);
        assert_eq!(page_count(3, 0), 0);
    }

    #[test]
    fn test_paginate_out_of_range() {
        let items = [1, 2, 3, 4, 5, 6, 7];
        assert_eq!(paginate(&items, 1, 5), &[1, 2, 3, 4, 5]);
        assert_eq!(paginate(&items, 2, 5), &[6, 7]);
        assert!(paginate(&items, 3, 5).is_empty());
        assert!(paginate(&items, 0, 5).is_empty());
    }
}
