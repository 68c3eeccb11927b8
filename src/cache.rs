// src/cache.rs
//! Session-scoped memoization of the three reference lists (authors,
//! categories, articles).
//!
//! Each slot goes from empty to populated once and then stays put: there is no
//! TTL, no eviction and no invalidation. A failed load leaves the slot empty so
//! the next call tries the network again. Concurrent first loads of the same
//! slot are not coalesced; each one issues its own request and the first
//! response to land is the one kept.

use crate::{
    api::{JsonFetcher, QueryParams, ARTICLES_ENDPOINT, AUTHORS_ENDPOINT, CATEGORIES_ENDPOINT},
    error::{ClientError, ClientResult},
};
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::{fmt, sync::Arc};
use tokio::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Authors,
    Categories,
    Articles,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Authors,
        ResourceKind::Categories,
        ResourceKind::Articles,
    ];

    pub fn endpoint(&self) -> &'static str {
        match self {
            ResourceKind::Authors => AUTHORS_ENDPOINT,
            ResourceKind::Categories => CATEGORIES_ENDPOINT,
            ResourceKind::Articles => ARTICLES_ENDPOINT,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Authors => write!(f, "authors"),
            ResourceKind::Categories => write!(f, "categories"),
            ResourceKind::Articles => write!(f, "articles"),
        }
    }
}

/// Result of asking the cache for a slot.
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    /// The API returned data (served from the slot or just fetched).
    Loaded(Arc<Value>),
    /// The API answered successfully with nothing in it.
    Empty,
    /// The fetch failed; the slot is still empty.
    FetchFailed(ClientError),
}

impl LoadOutcome {
    fn from_value(value: Arc<Value>) -> Self {
        if is_empty_payload(&value) {
            LoadOutcome::Empty
        } else {
            LoadOutcome::Loaded(value)
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadOutcome::FetchFailed(_))
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            LoadOutcome::Loaded(value) => Some(&**value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ClientError> {
        match self {
            LoadOutcome::FetchFailed(err) => Some(err),
            _ => None,
        }
    }

    /// Degraded view: the loaded items, or an empty list for both `Empty` and
    /// `FetchFailed`. A loaded non-array value is returned as a single item.
    pub fn items_or_empty(&self) -> Vec<Value> {
        match self {
            LoadOutcome::Loaded(value) => match &**value {
                Value::Array(items) => items.clone(),
                other => vec![other.clone()],
            },
            LoadOutcome::Empty | LoadOutcome::FetchFailed(_) => Vec::new(),
        }
    }

    /// Decodes the loaded array into typed documents. `Empty` decodes to an
    /// empty list; `FetchFailed` hands back the fetch error.
    pub fn decode<T: DeserializeOwned>(&self) -> ClientResult<Vec<T>> {
        match self {
            LoadOutcome::Loaded(value) => Ok(serde_json::from_value(Value::clone(value))?),
            LoadOutcome::Empty => Ok(Vec::new()),
            LoadOutcome::FetchFailed(err) => Err(err.clone()),
        }
    }
}

fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

type Slot = RwLock<Option<Arc<Value>>>;

/// One instance per session. Generic over the fetcher so it can be driven by
/// `ApiClient` or by a scripted fetcher in tests.
pub struct ReferenceCache<F> {
    fetcher: F,
    authors: Slot,
    categories: Slot,
    articles: Slot,
}

impl<F: fmt::Debug> fmt::Debug for ReferenceCache<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferenceCache")
            .field("fetcher", &self.fetcher)
            .field("slots", &"<3 slots>")
            .finish()
    }
}

impl<F: JsonFetcher> ReferenceCache<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            authors: RwLock::new(None),
            categories: RwLock::new(None),
            articles: RwLock::new(None),
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    fn slot(&self, kind: ResourceKind) -> &Slot {
        match kind {
            ResourceKind::Authors => &self.authors,
            ResourceKind::Categories => &self.categories,
            ResourceKind::Articles => &self.articles,
        }
    }

    pub async fn is_populated(&self, kind: ResourceKind) -> bool {
        self.slot(kind).read().await.is_some()
    }

    /// Returns the slot's value, fetching it on first use.
    ///
    /// No lock is held across the network call.
    pub async fn get_or_populate(&self, kind: ResourceKind) -> LoadOutcome {
        let cached = self.slot(kind).read().await.clone();
        if let Some(value) = cached {
            debug!("Cache HIT for {}", kind);
            return LoadOutcome::from_value(value);
        }

        debug!("Cache MISS for {}, fetching {}", kind, kind.endpoint());
        match self.fetcher.fetch_json(kind.endpoint(), &QueryParams::new()).await {
            Ok(value) => {
                let fetched = Arc::new(value);
                let stored = {
                    let mut slot = self.slot(kind).write().await;
                    slot.get_or_insert_with(|| fetched.clone()).clone()
                };
                info!(
                    "Loaded {} into cache ({} items)",
                    kind,
                    stored.as_array().map(Vec::len).unwrap_or(1)
                );
                LoadOutcome::from_value(stored)
            }
            Err(err) => {
                warn!("Error loading {}: {}. Slot left empty for retry.", kind, err);
                LoadOutcome::FetchFailed(err)
            }
        }
    }

    pub async fn authors(&self) -> LoadOutcome {
        self.get_or_populate(ResourceKind::Authors).await
    }

    pub async fn categories(&self) -> LoadOutcome {
        self.get_or_populate(ResourceKind::Categories).await
    }

    pub async fn articles(&self) -> LoadOutcome {
        self.get_or_populate(ResourceKind::Articles).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use serde_json::json;
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;

    /// Replays scripted responses per endpoint and counts calls.
    #[derive(Default)]
    struct ScriptedFetcher {
        responses: Mutex<HashMap<String, VecDeque<ClientResult<Value>>>>,
        calls: Mutex<HashMap<String, usize>>,
    }

    impl ScriptedFetcher {
        fn respond(self, endpoint: &str, response: ClientResult<Value>) -> Self {
            self.responses
                .lock()
                .unwrap()
                .entry(endpoint.to_string())
                .or_default()
                .push_back(response);
            self
        }

        fn calls(&self, endpoint: &str) -> usize {
            self.calls.lock().unwrap().get(endpoint).copied().unwrap_or(0)
        }
    }

    #[async_trait]
    impl JsonFetcher for ScriptedFetcher {
        async fn fetch_json(&self, endpoint: &str, params: &QueryParams) -> ClientResult<Value> {
            assert!(params.is_empty(), "cache slots never send parameters");
            *self.calls.lock().unwrap().entry(endpoint.to_string()).or_default() += 1;
            tokio::task::yield_now().await;
            self.responses
                .lock()
                .unwrap()
                .get_mut(endpoint)
                .and_then(VecDeque::pop_front)
                .unwrap_or_else(|| Err(ClientError::Network("no scripted response".to_string())))
        }
    }

    fn network_down() -> ClientResult<Value> {
        Err(ClientError::Network("connection refused".to_string()))
    }

    #[tokio::test]
    async fn test_successful_load_is_fetched_once() {
        let fetcher = ScriptedFetcher::default()
            .respond(AUTHORS_ENDPOINT, Ok(json!([{"_id": "a1", "full_name": "Анна"}])));
        let cache = ReferenceCache::new(fetcher);

        for _ in 0..3 {
            let outcome = cache.authors().await;
            assert!(outcome.is_loaded());
            assert_eq!(outcome.items_or_empty().len(), 1);
        }
        assert_eq!(cache.fetcher().calls(AUTHORS_ENDPOINT), 1);
        assert!(cache.is_populated(ResourceKind::Authors).await);
    }

    #[tokio::test]
    async fn test_failed_load_is_retried_on_next_call() {
        let fetcher = ScriptedFetcher::default()
            .respond(CATEGORIES_ENDPOINT, network_down())
            .respond(CATEGORIES_ENDPOINT, Ok(json!([{"_id": "c1", "name": "Rust"}])));
        let cache = ReferenceCache::new(fetcher);

        let first = cache.categories().await;
        assert!(first.is_failed());
        assert!(matches!(first.error(), Some(ClientError::Network(_))));
        assert!(first.items_or_empty().is_empty());
        assert!(!cache.is_populated(ResourceKind::Categories).await);

        let second = cache.categories().await;
        assert!(second.is_loaded());
        assert_eq!(cache.fetcher().calls(CATEGORIES_ENDPOINT), 2);

        cache.categories().await;
        assert_eq!(cache.fetcher().calls(CATEGORIES_ENDPOINT), 2);
    }

    #[tokio::test]
    async fn test_empty_array_is_cached_and_reported_empty() {
        let fetcher = ScriptedFetcher::default().respond(ARTICLES_ENDPOINT, Ok(json!([])));
        let cache = ReferenceCache::new(fetcher);

        assert!(matches!(cache.articles().await, LoadOutcome::Empty));
        assert!(matches!(cache.articles().await, LoadOutcome::Empty));
        assert_eq!(cache.fetcher().calls(ARTICLES_ENDPOINT), 1);
        assert!(cache.is_populated(ResourceKind::Articles).await);
    }

    #[tokio::test]
    async fn test_slots_are_independent() {
        let fetcher = ScriptedFetcher::default()
            .respond(AUTHORS_ENDPOINT, Ok(json!([{"_id": "a1"}])))
            .respond(CATEGORIES_ENDPOINT, network_down())
            .respond(ARTICLES_ENDPOINT, Ok(json!([{"_id": "p1"}, {"_id": "p2"}])));
        let cache = ReferenceCache::new(fetcher);

        assert!(cache.authors().await.is_loaded());
        assert!(cache.categories().await.is_failed());
        assert_eq!(cache.articles().await.items_or_empty().len(), 2);

        for kind in ResourceKind::ALL {
            assert_eq!(cache.fetcher().calls(kind.endpoint()), 1);
        }
        assert!(!cache.is_populated(ResourceKind::Categories).await);
    }

    #[tokio::test]
    async fn test_concurrent_first_loads_are_not_coalesced() {
        let fetcher = ScriptedFetcher::default()
            .respond(AUTHORS_ENDPOINT, Ok(json!([{"_id": "first"}])))
            .respond(AUTHORS_ENDPOINT, Ok(json!([{"_id": "second"}])));
        let cache = ReferenceCache::new(fetcher);

        let (a, b) = tokio::join!(cache.authors(), cache.authors());
        assert_eq!(cache.fetcher().calls(AUTHORS_ENDPOINT), 2);
        // Whichever response landed first owns the slot.
        assert_eq!(a.value(), b.value());
        assert_eq!(a.value(), Some(&json!([{"_id": "first"}])));
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Named {
        name: String,
    }

    #[tokio::test]
    async fn test_decode_typed_items() {
        let fetcher = ScriptedFetcher::default()
            .respond(CATEGORIES_ENDPOINT, Ok(json!([{"name": "Rust"}, {"name": "Tokio"}])));
        let cache = ReferenceCache::new(fetcher);

        let named: Vec<Named> = cache.categories().await.decode().unwrap();
        assert_eq!(
            named,
            vec![Named { name: "Rust".into() }, Named { name: "Tokio".into() }]
        );
    }

    #[test]
    fn test_decode_of_failure_returns_fetch_error() {
        let outcome = LoadOutcome::FetchFailed(ClientError::Http {
            status: 502,
            url: "http://localhost:8000/authors/".into(),
        });
        let err = outcome.decode::<Named>().unwrap_err();
        assert!(matches!(err, ClientError::Http { status: 502, .. }));
        assert!(LoadOutcome::Empty.decode::<Named>().unwrap().is_empty());
    }

    #[test]
    fn test_null_payload_counts_as_empty() {
        assert!(matches!(
            LoadOutcome::from_value(Arc::new(Value::Null)),
            LoadOutcome::Empty
        ));
        let single = LoadOutcome::from_value(Arc::new(json!({"total": 1})));
        assert_eq!(single.items_or_empty(), vec![json!({"total": 1})]);
    }
}
