//! Uniform record contract for the query engine.

/// The contract every filterable content variant satisfies.
///
/// The query engine never inspects variant-specific fields directly; it
/// sees a title, a set of facet values (tags or role label), and the
/// text fields that free-text search matches against.
pub trait Record {
    /// Title or name shown in list views.
    fn display_title(&self) -> &str;

    /// Values this record contributes to the filter facet catalog.
    fn facet_values(&self) -> Vec<&str>;

    /// Fields matched by case-insensitive substring search.
    fn search_fields(&self) -> Vec<&str>;
}

/// Stable per-session identity of a record: its position in the loaded
/// sequence. The data files carry no persistent ID field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub usize);

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
