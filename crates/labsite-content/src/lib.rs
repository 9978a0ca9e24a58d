//! labsite-content: Static content loading for the lab website
//!
//! The site bundles its content as JSON data files (projects,
//! publications, people, news). This crate performs the one eager read
//! at startup and hands the query engine already-parsed record
//! sequences. Loading is the only fallible step in the whole pipeline;
//! everything downstream is total.

pub mod error;
pub mod loader;

pub use error::*;
pub use loader::*;
