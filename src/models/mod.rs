//! Typed views of the documents served by the blog admin API.
//!
//! The cache and `fetch_json` only ever deal in `serde_json::Value`; these
//! structs are an opt-in decoding layer for callers that want field access.
//! Every field the backend may omit is defaulted so a sparse document still
//! decodes.

pub mod filter;

pub use filter::{ArticleFilter, CommentFilter, SearchScope};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ArticleStatus {
    #[serde(rename = "Черновик")]
    Draft,
    #[serde(rename = "На модерации")]
    Moderation,
    #[serde(rename = "Опубликовано")]
    Published,
}

impl ArticleStatus {
    pub const ALL: [ArticleStatus; 3] = [
        ArticleStatus::Draft,
        ArticleStatus::Moderation,
        ArticleStatus::Published,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "Черновик",
            ArticleStatus::Moderation => "На модерации",
            ArticleStatus::Published => "Опубликовано",
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = String;

    /// Accepts the API labels as well as the English variant names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Черновик" => Ok(ArticleStatus::Draft),
            "На модерации" => Ok(ArticleStatus::Moderation),
            "Опубликовано" => Ok(ArticleStatus::Published),
            other => match other.to_ascii_lowercase().as_str() {
                "draft" => Ok(ArticleStatus::Draft),
                "moderation" => Ok(ArticleStatus::Moderation),
                "published" => Ok(ArticleStatus::Published),
                _ => Err(format!("unknown article status '{}'", other)),
            },
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Author {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub registration_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Article {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub category_id: String,
    /// Kept as the raw label so unknown statuses still render.
    pub status: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub published_at: Option<String>,
    pub author_name: Option<String>,
    pub category_name: Option<String>,
}

impl Article {
    pub fn parsed_status(&self) -> Option<ArticleStatus> {
        self.status.parse().ok()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    pub article_id: String,
    pub author_name: String,
    pub content: String,
    pub created_at: Option<String>,
    pub is_approved: bool,
    pub article_title: Option<String>,
}

/// One row of the `/content-management/` summary table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContentRow {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub author_name: String,
    pub category_name: String,
    pub status: String,
    pub created_at: Option<String>,
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AuthorActivity {
    pub author_name: String,
    pub published_articles_count: u64,
    pub total_comments_count: u64,
    pub email: String,
    pub registration_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CategoryCount {
    #[serde(rename = "_id")]
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Statistics {
    pub total_articles: u64,
    pub total_published: u64,
    pub total_moderation: u64,
    pub total_drafts: u64,
    pub total_authors: u64,
    pub total_comments: u64,
    pub total_approved_comments: u64,
    pub categories_distribution: Vec<CategoryCount>,
    pub published_percentage: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchResults {
    pub articles: Option<Vec<Article>>,
    pub comments: Option<Vec<Comment>>,
}
