use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use super::query::{build_url, QueryParams};
use crate::{
    config::Config,
    error::{ClientError, ClientResult},
    models::{
        Article, ArticleFilter, AuthorActivity, Comment, CommentFilter, ContentRow, SearchResults,
        SearchScope, Statistics,
    },
};

pub const AUTHORS_ENDPOINT: &str = "/authors/";
pub const CATEGORIES_ENDPOINT: &str = "/categories/";
pub const ARTICLES_ENDPOINT: &str = "/articles/";
pub const COMMENTS_ENDPOINT: &str = "/comments/";
pub const CONTENT_MANAGEMENT_ENDPOINT: &str = "/content-management/";
pub const AUTHOR_ACTIVITY_ENDPOINT: &str = "/author-activity/";
pub const STATISTICS_ENDPOINT: &str = "/statistics/";
pub const SEARCH_ENDPOINT: &str = "/search/";

/// The backend's `min_length` for `/search/?query=`.
pub const MIN_SEARCH_QUERY_LEN: usize = 2;

const FETCH_ERROR_CONTEXT: &str = "Error fetching data";

/// Anything that can answer a JSON GET. `ApiClient` is the real one; tests
/// substitute scripted fetchers.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    async fn fetch_json(&self, endpoint: &str, params: &QueryParams) -> ClientResult<Value>;
}

#[async_trait]
impl<T: JsonFetcher + ?Sized> JsonFetcher for Arc<T> {
    async fn fetch_json(&self, endpoint: &str, params: &QueryParams) -> ClientResult<Value> {
        (**self).fetch_json(endpoint, params).await
    }
}

/// HTTP client for the blog admin REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GETs `base_url + endpoint` and decodes the body as JSON.
    ///
    /// Failures are logged here and then returned unchanged: non-2xx as
    /// `Http`, transport problems as `Network`, bad bodies as `Decode`.
    pub async fn fetch_json(&self, endpoint: &str, params: &QueryParams) -> ClientResult<Value> {
        if endpoint.is_empty() {
            return Err(ClientError::InvalidInput("endpoint must not be empty".to_string())
                .logged(FETCH_ERROR_CONTEXT));
        }
        let url = build_url(&self.base_url, endpoint, params);
        debug!("GET {}", url);

        let response = self.http.get(&url).send().await.map_err(|e| {
            ClientError::Network(format!("request to {} failed: {}", url, e)).logged(FETCH_ERROR_CONTEXT)
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Http {
                status: status.as_u16(),
                url,
            }
            .logged(FETCH_ERROR_CONTEXT));
        }

        let body = response.bytes().await.map_err(|e| {
            ClientError::Network(format!("reading body from {} failed: {}", url, e))
                .logged(FETCH_ERROR_CONTEXT)
        })?;

        let value = serde_json::from_slice::<Value>(&body).map_err(|e| {
            ClientError::Decode(format!("invalid JSON from {}: {}", url, e)).logged(FETCH_ERROR_CONTEXT)
        })?;
        debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(value)
    }

    async fn fetch_typed<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &QueryParams,
    ) -> ClientResult<T> {
        let value = self.fetch_json(endpoint, params).await?;
        if let Some(message) = api_error_message(&value) {
            return Err(ClientError::Decode(format!("{} reported an error: {}", endpoint, message))
                .logged(FETCH_ERROR_CONTEXT));
        }
        decode(value, endpoint)
    }

    /// `GET /articles/`, newest first, with author and category names filled in by the API.
    pub async fn articles(&self, filter: &ArticleFilter) -> ClientResult<Vec<Article>> {
        self.fetch_typed(ARTICLES_ENDPOINT, &filter.to_params()).await
    }

    /// `GET /articles/{id}`. The API answers a missing id with a 2xx `{"error": ...}` body.
    pub async fn article(&self, id: &str) -> ClientResult<Article> {
        if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(ClientError::InvalidInput(format!("invalid article id '{}'", id))
                .logged(FETCH_ERROR_CONTEXT));
        }
        let endpoint = format!("{}{}", ARTICLES_ENDPOINT, id);
        let value = self.fetch_json(&endpoint, &QueryParams::new()).await?;
        if let Some(message) = api_error_message(&value) {
            return Err(ClientError::NotFound(format!("article {}: {}", id, message))
                .logged(FETCH_ERROR_CONTEXT));
        }
        decode(value, &endpoint)
    }

    pub async fn comments(&self, filter: &CommentFilter) -> ClientResult<Vec<Comment>> {
        self.fetch_typed(COMMENTS_ENDPOINT, &filter.to_params()).await
    }

    pub async fn content_management(&self) -> ClientResult<Vec<ContentRow>> {
        self.fetch_typed(CONTENT_MANAGEMENT_ENDPOINT, &QueryParams::new()).await
    }

    pub async fn author_activity(&self) -> ClientResult<Vec<AuthorActivity>> {
        self.fetch_typed(AUTHOR_ACTIVITY_ENDPOINT, &QueryParams::new()).await
    }

    pub async fn statistics(&self) -> ClientResult<Statistics> {
        self.fetch_typed(STATISTICS_ENDPOINT, &QueryParams::new()).await
    }

    /// Full-text search over article titles/content and comment text.
    pub async fn search(&self, query: &str, scope: SearchScope) -> ClientResult<SearchResults> {
        let query = query.trim();
        if query.chars().count() < MIN_SEARCH_QUERY_LEN {
            return Err(ClientError::InvalidInput(format!(
                "search query must be at least {} characters",
                MIN_SEARCH_QUERY_LEN
            ))
            .logged(FETCH_ERROR_CONTEXT));
        }
        let mut params = QueryParams::new();
        params.insert("query".to_string(), query.to_string());
        params.insert("search_in".to_string(), scope.as_str().to_string());
        self.fetch_typed(SEARCH_ENDPOINT, &params).await
    }
}

#[async_trait]
impl JsonFetcher for ApiClient {
    async fn fetch_json(&self, endpoint: &str, params: &QueryParams) -> ClientResult<Value> {
        ApiClient::fetch_json(self, endpoint, params).await
    }
}

/// Extracts the message from the backend's `{"error": "..."}` convention.
pub fn api_error_message(value: &Value) -> Option<&str> {
    value.as_object()?.get("error")?.as_str()
}

fn decode<T: DeserializeOwned>(value: Value, endpoint: &str) -> ClientResult<T> {
    serde_json::from_value(value).map_err(|e| {
        ClientError::Decode(format!("unexpected shape from {}: {}", endpoint, e))
            .logged(FETCH_ERROR_CONTEXT)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_error_message_detection() {
        assert_eq!(api_error_message(&json!({"error": "Article not found"})), Some("Article not found"));
        assert_eq!(api_error_message(&json!([{"error": "nested"}])), None);
        assert_eq!(api_error_message(&json!({"error": 3})), None);
    }

    #[test]
    fn test_client_keeps_configured_base_url() {
        let client = ApiClient::new(&Config::with_base_url("http://127.0.0.1:9/")).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9");
    }

    #[tokio::test]
    async fn test_empty_endpoint_rejected_without_io() {
        let client = ApiClient::new(&Config::default()).unwrap();
        let err = client.fetch_json("", &QueryParams::new()).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_short_search_query_rejected() {
        let client = ApiClient::new(&Config::default()).unwrap();
        let err = client.search(" a ", SearchScope::All).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_article_id_with_path_characters_rejected() {
        let client = ApiClient::new(&Config::default()).unwrap();
        let err = client.article("../statistics").await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidInput(_)));
    }
}
