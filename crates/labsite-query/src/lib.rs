//! labsite-query: In-memory query engine for lab website content
//!
//! The Research, Publications, and People views all run the same
//! pipeline over a small in-memory record store:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      Query Engine                        │
//! ├──────────────────────────────────────────────────────────┤
//! │  store      │ Versioned immutable record store           │
//! │  filter     │ Search + facet predicates (pure)           │
//! │  group      │ Year groups, role buckets, news ordering   │
//! │  facets     │ Memoized facet catalog                     │
//! │  selection  │ Open-detail state, orthogonal to filtering │
//! │  view       │ Per-view owned state (filter + selection)  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is synchronous and total: filters match or they
//! don't, empty result sets are ordinary values, and no operation can
//! fail. Data flows one way, store → filter → group → rendered list.

pub mod facets;
pub mod filter;
pub mod group;
pub mod selection;
pub mod store;
pub mod view;

pub use facets::*;
pub use filter::*;
pub use group::*;
pub use selection::*;
pub use store::*;
pub use view::*;
