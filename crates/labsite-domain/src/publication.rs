//! Publication domain model

use crate::record::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A publication shown on the Publications page.
///
/// Data files list publications in reverse-chronological order within a
/// year; the engine preserves that order when grouping by year.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    /// Publication year, the grouping key on the Publications view.
    pub year: i32,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default, rename = "abstract")]
    pub abstract_text: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Publication {
    /// Create a new publication with required fields.
    pub fn new(title: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            authors: Vec::new(),
            year,
            date: None,
            venue: String::new(),
            link: None,
            abstract_text: None,
            thumbnail: None,
            tags: Vec::new(),
        }
    }

    /// Builder method to add authors.
    pub fn with_authors(mut self, authors: Vec<String>) -> Self {
        self.authors = authors;
        self
    }

    /// Builder method to set the venue.
    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = venue.into();
        self
    }

    /// Builder method to add tags.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Cite key for the generated BibTeX entry: lowercased title with
    /// whitespace runs collapsed to underscores, suffixed with the year.
    pub fn cite_key(&self) -> String {
        let slug = self
            .title
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");
        format!("{}_{}", slug, self.year)
    }

    /// Render the `@article` BibTeX snippet offered by the site's
    /// copy-to-clipboard button.
    pub fn bibtex(&self) -> String {
        format!(
            "@article{{{key},\n  title={{{title}}},\n  author={{{authors}}},\n  journal={{{journal}}},\n  year={{{year}}},\n  url={{{url}}}\n}}",
            key = self.cite_key(),
            title = self.title,
            authors = self.authors.join(" and "),
            journal = self.venue,
            year = self.year,
            url = self.link.as_deref().unwrap_or(""),
        )
    }
}

impl Record for Publication {
    fn display_title(&self) -> &str {
        &self.title
    }

    fn facet_values(&self) -> Vec<&str> {
        self.tags.iter().map(String::as_str).collect()
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        fields.extend(self.authors.iter().map(String::as_str));
        fields.push(self.venue.as_str());
        fields
    }
}
