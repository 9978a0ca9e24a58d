//! End-to-end pipeline tests: store -> filter -> group, over data
//! shaped like the site's bundled records.

use labsite_domain::{Person, Publication, RecordId, ResearchProject, Role};
use labsite_query::{
    group_by_role, group_by_year, FacetCatalog, PeopleViewState, RecordFilter, RecordStore,
    RoleFilter, ViewState,
};

fn publication_store() -> RecordStore<Publication> {
    RecordStore::new(vec![
        Publication::new("Quantum-Enhanced Optimization for Healthcare", 2024)
            .with_authors(vec!["Dr. Jane Smith".into(), "Alice Johnson".into()])
            .with_venue("Nature Quantum Information")
            .with_tags(vec!["Quantum Computing".into(), "Healthcare".into()]),
        Publication::new("Federated Learning with Differential Privacy", 2024)
            .with_authors(vec!["Dr. Bob Wilson".into(), "Carol Davis".into()])
            .with_venue("NeurIPS 2024")
            .with_tags(vec!["Federated Learning".into(), "Privacy".into()]),
        Publication::new("Multi-Objective Optimization in Smart Grid Management", 2023)
            .with_authors(vec!["Dr. Eve Brown".into()])
            .with_venue("IEEE Transactions on Smart Grid")
            .with_tags(vec!["Optimization".into(), "Energy".into()]),
    ])
}

fn people_store() -> RecordStore<Person> {
    RecordStore::new(vec![
        Person::new("Dr. Jane Smith", "Director & Founder", Role::Director)
            .with_interests(vec!["Quantum Computing".into(), "Healthcare".into()]),
        Person::new("Alice Johnson", "PhD Student", Role::PhdStudent)
            .with_interests(vec!["Quantum Algorithms".into()]),
        Person::new("Dan Lee", "PhD Student", Role::PhdStudent)
            .with_interests(vec!["Supply Chain".into()]),
        Person::new("Vera Chen", "Visiting Scholar", Role::from_label("Visiting Scholar")),
    ])
}

#[test]
fn publications_group_by_year_descending_with_stable_order() {
    let store = publication_store();
    let hits = store.query(&RecordFilter::new());
    let groups = group_by_year(&hits);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].year, 2024);
    assert_eq!(groups[0].publications.len(), 2);
    assert!(groups[0].publications[0].title.starts_with("Quantum-Enhanced"));
    assert!(groups[0].publications[1].title.starts_with("Federated"));
    assert_eq!(groups[1].year, 2023);
    assert_eq!(groups[1].publications.len(), 1);
}

#[test]
fn publication_search_matches_authors_and_venue() {
    let store = publication_store();

    let by_author = store.query(&RecordFilter::new().with_search("wilson"));
    assert_eq!(by_author.len(), 1);
    assert!(by_author[0].title.starts_with("Federated"));

    let by_venue = store.query(&RecordFilter::new().with_search("neurips"));
    assert_eq!(by_venue.len(), 1);

    let filtered_groups = group_by_year(&by_venue);
    assert_eq!(filtered_groups.len(), 1);
    assert_eq!(filtered_groups[0].year, 2024);
}

#[test]
fn publication_tag_filter_narrows_year_groups() {
    let store = publication_store();
    let filter = RecordFilter::new().with_facets(vec!["Energy".into()]);
    let groups = group_by_year(&store.query(&filter));
    // 2024 produced no match, so no 2024 group is emitted at all.
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].year, 2023);
}

#[test]
fn people_buckets_render_in_priority_order_with_fallback() {
    let store = people_store();
    let view = PeopleViewState::new();
    let hits = store.query_with(|p| view.filter.matches(p) && view.role.matches(&p.role));
    let groups = group_by_role(&hits);
    let headings: Vec<&str> = groups.buckets().iter().map(|(h, _)| *h).collect();

    // Director, then the PhD sub-bucket, then the fallback; no empty
    // "Researchers" or "Alumni" headers.
    assert_eq!(headings, vec!["Director & Founder", "PhD Students", "Other"]);
    assert_eq!(groups.phd_students.len(), 2);
    assert_eq!(groups.other[0].name, "Vera Chen");
    assert_eq!(groups.len(), store.len());
}

#[test]
fn people_search_is_case_insensitive() {
    let store = people_store();
    let hits = store.query(&RecordFilter::new().with_search("JOHN"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Alice Johnson");

    assert!(store.query(&RecordFilter::new().with_search("xyz")).is_empty());
}

#[test]
fn people_role_filter_is_exact_single_select() {
    let store = people_store();
    let role = RoleFilter::from_label("PhD Student");
    let hits = store.query_with(|p| role.matches(&p.role));
    assert_eq!(hits.len(), 2);

    let all = RoleFilter::from_label("All");
    assert_eq!(store.query_with(|p| all.matches(&p.role)).len(), 4);
}

#[test]
fn research_or_facets_and_flat_listing() {
    let store = RecordStore::new(vec![
        ResearchProject::new("First", "").with_tags(vec!["A".into(), "B".into()]),
        ResearchProject::new("Second", "").with_tags(vec!["C".into()]),
    ]);

    let both = store.query(&RecordFilter::new().with_facets(vec!["B".into(), "C".into()]));
    assert_eq!(both.len(), 2);
    assert_eq!(both[0].title, "First");

    let only_first = store.query(&RecordFilter::new().with_facets(vec!["A".into()]));
    assert_eq!(only_first.len(), 1);
    assert_eq!(only_first[0].title, "First");
}

#[test]
fn empty_result_state_is_deterministic() {
    let store = publication_store();
    let filter = RecordFilter::new().with_search("no such publication anywhere");
    let hits = store.query(&filter);
    assert!(hits.is_empty());
    assert!(group_by_year(&hits).is_empty());
    assert_eq!(store.count(&filter), 0);
}

#[test]
fn facet_catalog_ignores_active_filters() {
    let store = publication_store();
    let mut catalog = FacetCatalog::new();
    let before = catalog.facets(&store).to_vec();

    // Applying a filter to a view of the store leaves the catalog as-is.
    let _ = store.query(&RecordFilter::new().with_search("smart grid"));
    let after = catalog.facets(&store).to_vec();

    assert_eq!(before, after);
    assert_eq!(
        before,
        vec![
            "Quantum Computing",
            "Healthcare",
            "Federated Learning",
            "Privacy",
            "Optimization",
            "Energy",
        ]
    );
}

#[test]
fn selection_survives_filter_changes() {
    let store = people_store();
    let mut view = ViewState::new();

    let hits = store.query_indexed(|p| view.filter.matches(p));
    let (alice_id, _) = hits[1];
    view.selection.select(alice_id);

    // Narrow the filter to something that excludes Alice; the open
    // detail stays valid until explicitly closed.
    view.filter.search_term = "smith".into();
    assert_eq!(store.query(&view.filter).len(), 1);
    assert_eq!(view.selection.current(), Some(alice_id));
    assert_eq!(store.get(alice_id).unwrap().name, "Alice Johnson");

    view.selection.clear();
    assert_eq!(view.selection.current(), None);
}

#[test]
fn record_ids_are_stable_positions() {
    let store = people_store();
    assert_eq!(store.get(RecordId(0)).unwrap().name, "Dr. Jane Smith");
    assert_eq!(store.get(RecordId(3)).unwrap().name, "Vera Chen");
    assert!(store.get(RecordId(4)).is_none());
}
