//! Property tests for filter stability and grouping completeness.

use labsite_domain::{Publication, ResearchProject};
use labsite_query::{group_by_year, RecordFilter, RecordStore};
use proptest::prelude::*;

fn arb_project() -> impl Strategy<Value = ResearchProject> {
    (
        "[a-z]{0,8}",
        proptest::collection::vec(prop_oneof!["A", "B", "C", "D"], 0..3),
    )
        .prop_map(|(title, tags)| {
            ResearchProject::new(title, "").with_tags(tags.into_iter().map(String::from).collect())
        })
}

fn arb_publication() -> impl Strategy<Value = Publication> {
    ("[a-z]{0,8}", 2019i32..2026).prop_map(|(title, year)| Publication::new(title, year))
}

fn arb_filter() -> impl Strategy<Value = RecordFilter> {
    (
        "[a-z]{0,3}",
        proptest::collection::vec(prop_oneof!["A", "B", "C", "D"], 0..3),
    )
        .prop_map(|(term, facets)| {
            RecordFilter::new()
                .with_search(term)
                .with_facets(facets.into_iter().map(String::from).collect())
        })
}

proptest! {
    /// Filtering is stable: the output is a subsequence of the input.
    #[test]
    fn query_preserves_relative_order(
        projects in proptest::collection::vec(arb_project(), 0..24),
        filter in arb_filter(),
    ) {
        let store = RecordStore::new(projects);
        let hits = store.query(&filter);

        let mut cursor = 0usize;
        for hit in &hits {
            let pos = store.records()[cursor..]
                .iter()
                .position(|r| std::ptr::eq(r, *hit))
                .expect("every hit comes from the store, in order");
            cursor += pos + 1;
        }
    }

    /// Every record the filter accepts appears in the output, and
    /// nothing else does.
    #[test]
    fn query_equals_pointwise_predicate(
        projects in proptest::collection::vec(arb_project(), 0..24),
        filter in arb_filter(),
    ) {
        let store = RecordStore::new(projects);
        let hits = store.query(&filter);
        let expected: Vec<_> = store.records().iter().filter(|r| filter.matches(*r)).collect();
        prop_assert_eq!(hits, expected);
    }

    /// Year grouping partitions the filtered set exactly: no record is
    /// dropped or duplicated, and group years strictly descend.
    #[test]
    fn year_grouping_is_a_partition(
        publications in proptest::collection::vec(arb_publication(), 0..24),
        filter in arb_filter(),
    ) {
        let store = RecordStore::new(publications);
        let hits = store.query(&filter);
        let groups = group_by_year(&hits);

        let total: usize = groups.iter().map(|g| g.publications.len()).sum();
        prop_assert_eq!(total, hits.len());

        for group in &groups {
            for publication in &group.publications {
                prop_assert_eq!(publication.year, group.year);
            }
        }
        for pair in groups.windows(2) {
            prop_assert!(pair[0].year > pair[1].year);
        }
    }
}
