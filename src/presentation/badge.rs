use super::escape_html;
use crate::models::ArticleStatus;

const DRAFT_CLASS: &str = "badge bg-secondary";
const MODERATION_CLASS: &str = "badge bg-warning text-dark";
const PUBLISHED_CLASS: &str = "badge bg-success";
const UNKNOWN_CLASS: &str = "badge bg-light text-dark";

/// Label and style class for an article status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub text: String,
    pub class: &'static str,
}

impl StatusBadge {
    pub fn to_html(&self) -> String {
        format!("<span class=\"{}\">{}</span>", self.class, escape_html(&self.text))
    }
}

/// Maps a raw status label to its badge. Unknown labels get the neutral style
/// and keep their own text.
pub fn status_badge(status: &str) -> StatusBadge {
    // Exact labels only; the English aliases `ArticleStatus::from_str` accepts are not badges.
    let class = match status {
        "Черновик" => DRAFT_CLASS,
        "На модерации" => MODERATION_CLASS,
        "Опубликовано" => PUBLISHED_CLASS,
        _ => UNKNOWN_CLASS,
    };
    StatusBadge {
        text: status.to_string(),
        class,
    }
}

impl From<ArticleStatus> for StatusBadge {
    fn from(status: ArticleStatus) -> Self {
        status_badge(status.as_str())
    }
}
