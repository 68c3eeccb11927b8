//! HTTP access to the blog admin REST API.

pub mod client;
pub mod query;

pub use client::{
    ApiClient, JsonFetcher, ARTICLES_ENDPOINT, AUTHORS_ENDPOINT, CATEGORIES_ENDPOINT,
};
pub use query::{build_url, params, QueryParams};
