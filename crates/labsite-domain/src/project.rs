//! Research project domain model

use crate::record::Record;
use serde::{Deserialize, Serialize};

/// A research project shown on the Research page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResearchProject {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Topic tags, used for facet filtering (no grouping on this view).
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl ResearchProject {
    /// Create a new project with required fields.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tags: Vec::new(),
            thumbnail: None,
            link: None,
        }
    }

    /// Builder method to add tags.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

impl Record for ResearchProject {
    fn display_title(&self) -> &str {
        &self.title
    }

    fn facet_values(&self) -> Vec<&str> {
        self.tags.iter().map(String::as_str).collect()
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}
