pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod presentation;
pub mod ui;
pub mod utils;

// Re-export the pieces most callers need
pub use api::{ApiClient, JsonFetcher, QueryParams};
pub use cache::{LoadOutcome, ReferenceCache, ResourceKind};
pub use config::Config;
pub use error::{ClientError, ClientResult};
