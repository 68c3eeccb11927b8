use super::ArticleStatus;
use crate::api::QueryParams;
use std::fmt;
use std::str::FromStr;

/// Query filters for `GET /articles/`. Unset fields are left out of the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub status: Option<ArticleStatus>,
    pub author_id: Option<String>,
    pub category_id: Option<String>,
}

impl ArticleFilter {
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if let Some(status) = self.status {
            params.insert("status".to_string(), status.as_str().to_string());
        }
        insert_non_empty(&mut params, "author_id", self.author_id.as_deref());
        insert_non_empty(&mut params, "category_id", self.category_id.as_deref());
        params
    }
}

/// Query filters for `GET /comments/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentFilter {
    pub article_id: Option<String>,
    pub is_approved: Option<bool>,
}

impl CommentFilter {
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        insert_non_empty(&mut params, "article_id", self.article_id.as_deref());
        if let Some(approved) = self.is_approved {
            params.insert("is_approved".to_string(), approved.to_string());
        }
        params
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchScope {
    #[default]
    All,
    Articles,
    Comments,
}

impl SearchScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchScope::All => "all",
            SearchScope::Articles => "articles",
            SearchScope::Comments => "comments",
        }
    }
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(SearchScope::All),
            "articles" => Ok(SearchScope::Articles),
            "comments" => Ok(SearchScope::Comments),
            other => Err(format!("search scope must be all, articles or comments, got '{}'", other)),
        }
    }
}

// The backend treats an empty id filter the same as no filter.
fn insert_non_empty(params: &mut QueryParams, key: &str, value: Option<&str>) {
    if let Some(v) = value.filter(|v| !v.is_empty()) {
        params.insert(key.to_string(), v.to_string());
    }
}
