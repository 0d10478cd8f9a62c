use crate::models::{error::AppError, product::Catalog, product::Product, user::User};
use serde::de::DeserializeOwned;

// CONSTANTS
pub const BASE_URL: &str = "https://fakestoreapi.com";

// API CONFIGURATION
/// Configuration for the shop API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the full product list.
    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    /// URL of a single product.
    pub fn product_url(&self, id: u32) -> String {
        format!("{}/products/{id}", self.base_url)
    }

    /// URL of the category name list.
    pub fn categories_url(&self) -> String {
        format!("{}/products/categories", self.base_url)
    }

    /// URL of the user list.
    pub fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        let base_url = self.base_url.unwrap_or_else(|| BASE_URL.to_string());
        ApiConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

// SHOP CLIENT
/// HTTP client for the shop API.
pub struct ShopClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ShopClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Fetches every product.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, AppError> {
        self.fetch(&self.config.products_url()).await
    }

    /// Fetches the category names.
    pub async fn fetch_categories(&self) -> Result<Vec<String>, AppError> {
        self.fetch(&self.config.categories_url()).await
    }

    /// Fetches every user.
    pub async fn fetch_users(&self) -> Result<Vec<User>, AppError> {
        self.fetch(&self.config.users_url()).await
    }

    /// Fetches one product by id.
    pub async fn fetch_product(&self, id: u32) -> Result<Product, AppError> {
        self.fetch(&self.config.product_url(id)).await
    }

    /// Fetches products and categories concurrently; fails if either request fails.
    pub async fn fetch_catalog(&self) -> Result<Catalog, AppError> {
        let (products, categories) =
            futures::try_join!(self.fetch_products(), self.fetch_categories())?;
        Ok(Catalog::new(products, categories))
    }

    /// Executes a single GET and decodes the JSON body.
    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(error_for_status(status, &body));
        }

        decode(&body)
    }

    /// Converts a reqwest error into an appropriate `AppError`.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }
}

/// Parses a response body.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
    serde_json::from_str(body)
        .map_err(|e| AppError::DataError(format!("Failed to parse response: {e}")))
}

/// Creates an error based on HTTP status code.
pub fn error_for_status(status: reqwest::StatusCode, body: &str) -> AppError {
    match status.as_u16() {
        404 => AppError::NotFound(format!("Resource not found: {body}")),
        400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
        500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
        _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches products and categories using default configuration.
pub async fn fetch_catalog() -> Result<Catalog, AppError> {
    ShopClient::new()?.fetch_catalog().await
}

/// Fetches users using default configuration.
pub async fn fetch_users() -> Result<Vec<User>, AppError> {
    ShopClient::new()?.fetch_users().await
}

/// Fetches a single product using default configuration.
pub async fn fetch_product(id: u32) -> Result<Product, AppError> {
    ShopClient::new()?.fetch_product(id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_config_builder_defaults() {
        let config = ApiConfig::builder().build();
        assert_eq!(config.base_url(), "https://fakestoreapi.com");
    }

    #[test]
    fn test_endpoint_urls() {
        let config = ApiConfig::default();
        assert_eq!(config.products_url(), "https://fakestoreapi.com/products");
        assert_eq!(config.product_url(3), "https://fakestoreapi.com/products/3");
        assert_eq!(
            config.categories_url(),
            "https://fakestoreapi.com/products/categories"
        );
        assert_eq!(config.users_url(), "https://fakestoreapi.com/users");
    }

    #[test]
    fn test_custom_base_url_trailing_slash() {
        let config = ApiConfig::builder()
            .base_url("http://localhost:8080/")
            .build();
        assert_eq!(config.products_url(), "http://localhost:8080/products");
    }

    #[test]
    fn test_client_creation() {
        let client = ShopClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_error_for_status() {
        assert!(matches!(
            error_for_status(StatusCode::NOT_FOUND, ""),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            error_for_status(StatusCode::BAD_REQUEST, "bad"),
            AppError::ApiError(msg) if msg.contains("Client error")
        ));
        assert!(matches!(
            error_for_status(StatusCode::BAD_GATEWAY, ""),
            AppError::ApiError(msg) if msg.contains("Server error")
        ));
    }

    #[test]
    fn test_decode_categories() {
        let json = r#"["electronics","jewelery","men's clothing","women's clothing"]"#;
        let categories: Vec<String> = decode(json).unwrap();
        assert_eq!(categories.len(), 4);
        assert_eq!(categories[2], "men's clothing");
    }

    #[test]
    fn test_decode_rejects_non_json() {
        let result: Result<Vec<Product>, _> = decode("<html>Service Unavailable</html>");
        assert!(matches!(result, Err(AppError::DataError(_))));
    }

    #[test]
    fn test_decode_empty_single_product() {
        let result: Result<Product, _> = decode("");
        assert!(matches!(result, Err(AppError::DataError(_))));
    }
}
