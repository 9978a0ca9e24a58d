//! News item domain model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated announcement shown on the News page and the home page's
/// recent-news strip. News is sorted newest-first and is not filterable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl NewsItem {
    /// Create a new news item with required fields.
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            date,
            summary: String::new(),
            content: None,
            image: None,
        }
    }
}
