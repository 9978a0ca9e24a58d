//! Grouping and ordering of filtered results for sectioned display.
//!
//! Groups are always derived from the filtered result set, so a year or
//! role with zero matches simply produces no bucket. Within every
//! bucket the filtered sequence's relative order is preserved; data
//! files are already ordered meaningfully (reverse-chronological) and
//! the engine never re-sorts within a group.

use labsite_domain::{NewsItem, Person, Publication, Role};
use std::collections::BTreeMap;

/// One year section of the Publications view.
#[derive(Debug, Clone, PartialEq)]
pub struct YearGroup<'a> {
    pub year: i32,
    pub publications: Vec<&'a Publication>,
}

/// Partition filtered publications by year, most recent year first.
pub fn group_by_year<'a>(publications: &[&'a Publication]) -> Vec<YearGroup<'a>> {
    let mut by_year: BTreeMap<i32, Vec<&'a Publication>> = BTreeMap::new();
    for publication in publications.iter().copied() {
        by_year.entry(publication.year).or_default().push(publication);
    }
    by_year
        .into_iter()
        .rev()
        .map(|(year, publications)| YearGroup { year, publications })
        .collect()
}

/// Section headings of the People view, in display priority order.
pub const DIRECTOR_HEADING: &str = "Director & Founder";
pub const CURRENT_MEMBERS_HEADING: &str = "Current Members";
pub const ALUMNI_HEADING: &str = "Alumni";
/// Fallback heading for roles outside the known set.
pub const OTHER_HEADING: &str = "Other";

/// Filtered people partitioned into the People view's role buckets.
///
/// Display order: director, then the current-member sub-buckets
/// (researchers, PhD students, MSc students, undergraduates), then
/// alumni, then the fallback bucket for unrecognized roles. Records
/// with an unrecognized role are surfaced, never dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeopleGroups<'a> {
    pub directors: Vec<&'a Person>,
    pub researchers: Vec<&'a Person>,
    pub phd_students: Vec<&'a Person>,
    pub msc_students: Vec<&'a Person>,
    pub undergraduates: Vec<&'a Person>,
    pub alumni: Vec<&'a Person>,
    pub other: Vec<&'a Person>,
}

impl<'a> PeopleGroups<'a> {
    /// Current-member sub-buckets with their sub-headings, omitting
    /// empty ones.
    pub fn current_members(&self) -> Vec<(&'static str, &[&'a Person])> {
        let sub_buckets: [(&'static str, &[&'a Person]); 4] = [
            ("Researchers", &self.researchers),
            ("PhD Students", &self.phd_students),
            ("MSc Students", &self.msc_students),
            ("Undergraduates", &self.undergraduates),
        ];
        sub_buckets
            .into_iter()
            .filter(|(_, people)| !people.is_empty())
            .collect()
    }

    /// Every non-empty bucket with its heading, flattened into display
    /// order. The union of the buckets is exactly the filtered set.
    pub fn buckets(&self) -> Vec<(&'static str, &[&'a Person])> {
        let mut buckets: Vec<(&'static str, &[&'a Person])> = Vec::new();
        if !self.directors.is_empty() {
            buckets.push((DIRECTOR_HEADING, &self.directors));
        }
        buckets.extend(self.current_members());
        if !self.alumni.is_empty() {
            buckets.push((ALUMNI_HEADING, &self.alumni));
        }
        if !self.other.is_empty() {
            buckets.push((OTHER_HEADING, &self.other));
        }
        buckets
    }

    /// Total number of grouped people.
    pub fn len(&self) -> usize {
        self.buckets().iter().map(|(_, people)| people.len()).sum()
    }

    /// Whether every bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.buckets().is_empty()
    }
}

/// Partition filtered people into role buckets.
pub fn group_by_role<'a>(people: &[&'a Person]) -> PeopleGroups<'a> {
    let mut groups = PeopleGroups::default();
    for person in people.iter().copied() {
        match &person.role {
            Role::Director => groups.directors.push(person),
            Role::Researcher => groups.researchers.push(person),
            Role::PhdStudent => groups.phd_students.push(person),
            Role::MscStudent => groups.msc_students.push(person),
            Role::Undergraduate => groups.undergraduates.push(person),
            Role::Alumni => groups.alumni.push(person),
            Role::Other(_) => groups.other.push(person),
        }
    }
    groups
}

/// Order news newest-first for the News page and the home page strip.
/// Ties keep loaded order.
pub fn sort_newest_first(news: &[NewsItem]) -> Vec<&NewsItem> {
    let mut sorted: Vec<&NewsItem> = news.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}
