//! Loaders for the bundled JSON data files.
//!
//! Each loader parses one data file into domain records, preserving the
//! file's ordering (the query engine's stable filter depends on it).
//! Publications may carry a `year`, a `date`, or both; when only a date
//! is present the year is derived from it.

use crate::error::ContentError;
use chrono::{Datelike, NaiveDate};
use labsite_domain::{NewsItem, Person, Publication, ResearchProject};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Parse the research projects data file.
pub fn load_projects(json: &str) -> Result<Vec<ResearchProject>, ContentError> {
    let projects: Vec<ResearchProject> = parse("projects", json)?;
    debug!(count = projects.len(), "loaded research projects");
    Ok(projects)
}

/// Parse the people data file.
pub fn load_people(json: &str) -> Result<Vec<Person>, ContentError> {
    let people: Vec<Person> = parse("people", json)?;
    debug!(count = people.len(), "loaded people");
    Ok(people)
}

/// Parse the news data file.
pub fn load_news(json: &str) -> Result<Vec<NewsItem>, ContentError> {
    let news: Vec<NewsItem> = parse("news", json)?;
    debug!(count = news.len(), "loaded news items");
    Ok(news)
}

/// Parse the publications data file, deriving `year` from `date` for
/// entries that omit it.
pub fn load_publications(json: &str) -> Result<Vec<Publication>, ContentError> {
    let raw: Vec<RawPublication> = parse("publications", json)?;
    let publications = raw
        .into_iter()
        .map(RawPublication::into_publication)
        .collect::<Result<Vec<_>, _>>()?;
    debug!(count = publications.len(), "loaded publications");
    Ok(publications)
}

/// Read and parse the research projects data file.
pub fn load_projects_from_path(path: impl AsRef<Path>) -> Result<Vec<ResearchProject>, ContentError> {
    load_projects(&read(path.as_ref())?)
}

/// Read and parse the publications data file.
pub fn load_publications_from_path(path: impl AsRef<Path>) -> Result<Vec<Publication>, ContentError> {
    load_publications(&read(path.as_ref())?)
}

/// Read and parse the people data file.
pub fn load_people_from_path(path: impl AsRef<Path>) -> Result<Vec<Person>, ContentError> {
    load_people(&read(path.as_ref())?)
}

/// Read and parse the news data file.
pub fn load_news_from_path(path: impl AsRef<Path>) -> Result<Vec<NewsItem>, ContentError> {
    load_news(&read(path.as_ref())?)
}

fn read(path: &Path) -> Result<String, ContentError> {
    std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse<T: for<'de> Deserialize<'de>>(what: &str, json: &str) -> Result<T, ContentError> {
    serde_json::from_str(json).map_err(|source| ContentError::Parse {
        what: what.to_string(),
        source,
    })
}

/// Publication as it appears in the data file, with `year` optional.
#[derive(Deserialize)]
struct RawPublication {
    title: String,
    #[serde(default)]
    authors: Vec<String>,
    #[serde(default)]
    year: Option<i32>,
    #[serde(default)]
    date: Option<NaiveDate>,
    #[serde(default)]
    venue: String,
    #[serde(default)]
    link: Option<String>,
    #[serde(default, rename = "abstract")]
    abstract_text: Option<String>,
    #[serde(default)]
    thumbnail: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

impl RawPublication {
    fn into_publication(self) -> Result<Publication, ContentError> {
        // An explicit year wins over the date-derived one.
        let year = match (self.year, self.date) {
            (Some(year), _) => year,
            (None, Some(date)) => date.year(),
            (None, None) => {
                return Err(ContentError::MissingYear { title: self.title });
            }
        };
        Ok(Publication {
            title: self.title,
            authors: self.authors,
            year,
            date: self.date,
            venue: self.venue,
            link: self.link,
            abstract_text: self.abstract_text,
            thumbnail: self.thumbnail,
            tags: self.tags,
        })
    }
}
