use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Customer rating attached to a product
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    /// Average score between 0 and 5
    pub rate: f64,
    /// Number of reviews behind the score
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub image: String,

    /// Missing in malformed records; rendered blank and counted as 0
    #[serde(default)]
    pub rating: Option<Rating>,
}

impl Product {
    /// Rating score, or 0 when the record carries no rating
    pub fn rate(&self) -> f64 {
        self.rating.map_or(0.0, |r| r.rate)
    }

    /// Host name of the product image URL
    pub fn image_domain(&self) -> Option<String> {
        reqwest::Url::parse(&self.image)
            .ok()
            .and_then(|url| url.host_str().map(str::to_owned))
    }
}

/// Products and categories fetched together for the list views
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub categories: Vec<String>,
    pub fetched_at: DateTime<Utc>,
}

impl Catalog {
    pub fn new(products: Vec<Product>, categories: Vec<String>) -> Self {
        Self {
            products,
            categories,
            fetched_at: Utc::now(),
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Local time of the fetch, formatted for display
    pub fn updated_label(&self) -> String {
        self.fetched_at
            .with_timezone(&chrono::Local)
            .format("%H:%M")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCT_JSON: &str = r#"{
        "id": 1,
        "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
        "price": 109.95,
        "description": "Your perfect pack for everyday use and walks in the forest.",
        "category": "men's clothing",
        "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
        "rating": { "rate": 3.9, "count": 120 }
    }"#;

    #[test]
    fn test_product_deserialization() {
        let product: Product = serde_json::from_str(PRODUCT_JSON).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.price, 109.95);
        assert_eq!(product.category, "men's clothing");
        assert_eq!(
            product.rating,
            Some(Rating {
                rate: 3.9,
                count: 120
            })
        );
    }

    #[test]
    fn test_product_without_rating_or_description() {
        let json = r#"{
            "id": 7,
            "title": "Ring",
            "price": 9.99,
            "category": "jewelery",
            "image": "https://example.com/ring.jpg"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.rating, None);
        assert_eq!(product.rate(), 0.0);
        assert!(product.description.is_empty());
    }

    #[test]
    fn test_image_domain() {
        let product: Product = serde_json::from_str(PRODUCT_JSON).unwrap();
        assert_eq!(product.image_domain().as_deref(), Some("fakestoreapi.com"));
    }

    #[test]
    fn test_image_domain_invalid_url() {
        let mut product: Product = serde_json::from_str(PRODUCT_JSON).unwrap();
        product.image = "not a url".to_string();
        assert_eq!(product.image_domain(), None);
    }
}
