//! Formatting glue for admin pages: badges, activity levels, dates, text
//! truncation and table markup. Everything here is pure.

pub mod activity;
pub mod badge;
pub mod format;
pub mod table;

pub use activity::{activity_level, activity_score, level_for_score, ActivityLevel};
pub use badge::{status_badge, StatusBadge};
pub use format::{format_date, truncate_text, DEFAULT_TRUNCATE_LEN};
pub use table::{table_row, TableCell};

/// Escapes the characters that matter inside element text and attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
