//! Marketplace product API client.
//!
//! Thin REST client over `reqwest` with `moka` caching for catalog reads
//! (5-minute TTL). The backend is the source of truth; nothing is synced
//! locally. Searches and mutations always hit the server.
//!
//! # Example
//!
//! ```rust,ignore
//! use mercadito_storefront::{ProductClient, StorefrontConfig};
//!
//! let client = ProductClient::new(&StorefrontConfig::from_env()?);
//! let products = client.fetch_active().await?;
//! ```

mod cache;

use std::sync::Arc;
use std::time::Duration;

use mercadito_core::{CategoryRecord, ProductDraft, ProductId, ProductRecord};
use moka::future::Cache;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::config::StorefrontConfig;

use cache::{CacheKey, CacheValue};

/// Errors from the marketplace product API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("unexpected status: {0}")]
    Status(StatusCode),

    /// Response body was not the expected JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),
}

/// Client for the marketplace product API.
///
/// Catalog reads (active list, by id, by category) are cached for 5 minutes;
/// searches and mutations go straight to the server.
#[derive(Clone)]
pub struct ProductClient {
    inner: Arc<ProductClientInner>,
}

struct ProductClientInner {
    client: reqwest::Client,
    base_url: Url,
    timeout: Duration,
    cache: Cache<CacheKey, CacheValue>,
}

impl ProductClient {
    /// Create a new product API client.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            inner: Arc::new(ProductClientInner {
                client: reqwest::Client::new(),
                base_url: config.api_url.clone(),
                timeout: config.request_timeout,
                cache,
            }),
        }
    }

    /// Every product regardless of status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn fetch_all(&self) -> Result<Vec<ProductRecord>, ApiError> {
        self.get_json(self.endpoint(&["products"])).await
    }

    /// The active catalog. Cached.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn fetch_active(&self) -> Result<Vec<ProductRecord>, ApiError> {
        if let Some(CacheValue::Products(products)) =
            self.inner.cache.get(&CacheKey::ActiveProducts).await
        {
            debug!("active products served from cache");
            return Ok(products);
        }

        let products: Vec<ProductRecord> =
            self.get_json(self.endpoint(&["products", "active"])).await?;
        self.inner
            .cache
            .insert(
                CacheKey::ActiveProducts,
                CacheValue::Products(products.clone()),
            )
            .await;
        Ok(products)
    }

    /// One product by id. Cached.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown id, otherwise the usual
    /// transport/status/parse failures.
    pub async fn fetch_by_id(&self, id: &ProductId) -> Result<ProductRecord, ApiError> {
        let key = CacheKey::Product(id.as_str().to_string());
        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&key).await {
            debug!(%id, "product served from cache");
            return Ok(*product);
        }

        let product: ProductRecord = self
            .get_json(self.endpoint(&["products", id.as_str()]))
            .await?;
        self.inner
            .cache
            .insert(key, CacheValue::Product(Box::new(product.clone())))
            .await;
        Ok(product)
    }

    /// Products in one category. Cached.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn fetch_by_category(&self, name: &str) -> Result<Vec<ProductRecord>, ApiError> {
        let key = CacheKey::Category(name.to_string());
        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&key).await {
            debug!(category = name, "category served from cache");
            return Ok(products);
        }

        let products: Vec<ProductRecord> = self
            .get_json(self.endpoint(&["products", "category", name]))
            .await?;
        self.inner
            .cache
            .insert(key, CacheValue::Products(products.clone()))
            .await;
        Ok(products)
    }

    /// Server-side product search. Not cached.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn search(&self, term: &str) -> Result<Vec<ProductRecord>, ApiError> {
        let mut url = self.endpoint(&["products", "search"]);
        url.query_pairs_mut().append_pair("q", term);
        self.get_json(url).await
    }

    /// Every known category.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn fetch_categories(&self) -> Result<Vec<CategoryRecord>, ApiError> {
        self.get_json(self.endpoint(&["products", "categories"]))
            .await
    }

    /// Create a product owned by `username`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn create(
        &self,
        draft: &ProductDraft,
        username: &str,
    ) -> Result<ProductRecord, ApiError> {
        let mut url = self.endpoint(&["products", "create"]);
        url.query_pairs_mut().append_pair("username", username);

        let response = self
            .inner
            .client
            .post(url)
            .timeout(self.inner.timeout)
            .json(draft)
            .send()
            .await?;
        read_json(response).await
    }

    /// Replace a product's fields.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown id, otherwise the usual
    /// transport/status/parse failures.
    pub async fn update(
        &self,
        id: &ProductId,
        draft: &ProductDraft,
    ) -> Result<ProductRecord, ApiError> {
        let response = self
            .inner
            .client
            .put(self.endpoint(&["products", id.as_str()]))
            .timeout(self.inner.timeout)
            .json(draft)
            .send()
            .await?;
        let product: ProductRecord = read_json(response).await?;
        self.inner
            .cache
            .invalidate(&CacheKey::Product(id.as_str().to_string()))
            .await;
        Ok(product)
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown id, otherwise the usual
    /// transport/status failures.
    pub async fn delete(&self, id: &ProductId) -> Result<(), ApiError> {
        let response = self
            .inner
            .client
            .delete(self.endpoint(&["products", id.as_str()]))
            .timeout(self.inner.timeout)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(id.to_string()));
        }
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        self.inner
            .cache
            .invalidate(&CacheKey::Product(id.as_str().to_string()))
            .await;
        Ok(())
    }

    /// Build an endpoint URL from path segments, escaping each segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.inner.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let response = self
            .inner
            .client
            .get(url)
            .timeout(self.inner.timeout)
            .send()
            .await?;
        read_json(response).await
    }
}

/// Shared response handling: status check first, then body parse, with
/// truncated bodies in the failure logs.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let path = response.url().path().to_string();

    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound(path));
    }

    let body = response.text().await?;

    if !status.is_success() {
        tracing::error!(
            status = %status,
            path = %path,
            body = %body.chars().take(200).collect::<String>(),
            "marketplace API returned non-success status"
        );
        return Err(ApiError::Status(status));
    }

    serde_json::from_str(&body).map_err(|error| {
        tracing::error!(
            error = %error,
            path = %path,
            body = %body.chars().take(200).collect::<String>(),
            "failed to parse marketplace API response"
        );
        ApiError::Parse(error)
    })
}
