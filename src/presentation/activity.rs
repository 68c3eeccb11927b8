use std::fmt;

const HIGH_THRESHOLD: f64 = 20.0;
const MEDIUM_THRESHOLD: f64 = 10.0;
const LOW_THRESHOLD: f64 = 5.0;

/// Ten comments weigh as much as one published article.
const COMMENTS_PER_ARTICLE: f64 = 10.0;

/// Author activity buckets, ordered from least to most active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActivityLevel {
    Minimal,
    Low,
    Medium,
    High,
}

impl ActivityLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Minimal => "Минимальная",
            ActivityLevel::Low => "Низкая",
            ActivityLevel::Medium => "Средняя",
            ActivityLevel::High => "Высокая",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            ActivityLevel::Minimal => "badge bg-secondary",
            ActivityLevel::Low => "badge bg-warning text-dark",
            ActivityLevel::Medium => "badge bg-primary",
            ActivityLevel::High => "badge bg-success",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn activity_score(articles: u64, comments: u64) -> f64 {
    articles as f64 + comments as f64 / COMMENTS_PER_ARTICLE
}

/// Thresholds are inclusive lower bounds. NaN lands in `Minimal`.
pub fn level_for_score(score: f64) -> ActivityLevel {
    if score >= HIGH_THRESHOLD {
        ActivityLevel::High
    } else if score >= MEDIUM_THRESHOLD {
        ActivityLevel::Medium
    } else if score >= LOW_THRESHOLD {
        ActivityLevel::Low
    } else {
        ActivityLevel::Minimal
    }
}

pub fn activity_level(articles: u64, comments: u64) -> ActivityLevel {
    level_for_score(activity_score(articles, comments))
}
