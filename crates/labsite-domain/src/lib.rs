//! labsite-domain: Domain models for lab website content
//!
//! This crate provides the canonical content models for the lab website:
//! - ResearchProject: An ongoing research effort with topic tags
//! - Publication: A paper with authors, venue, year, and tags
//! - Person: A lab member with a role, position, and research interests
//! - NewsItem: A dated announcement
//!
//! All types derive serde and are loaded from the site's bundled JSON
//! data files. The `Record` trait gives the query engine a uniform view
//! over the three filterable variants.

pub mod news;
pub mod person;
pub mod project;
pub mod publication;
pub mod record;

pub use news::*;
pub use person::*;
pub use project::*;
pub use publication::*;
pub use record::*;
