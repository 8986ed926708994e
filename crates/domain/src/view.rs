//! Derived-view rule: source list + filter + sort → displayed list.
//!
//! The displayed list is never patched incrementally. Every time one of the
//! three inputs changes the caller runs [`recompute`] again over the full
//! source list.

use std::cmp::Ordering;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};

use crate::character::CharacterRecord;
use crate::directive::{FilterDirective, SortDirective};

/// Filter then sort `source`, returning a fresh list.
///
/// Filtering keeps source order; sorting is stable, so ties (and the whole
/// list under [`SortDirective::None`]) keep filtered order. `source` is never
/// modified.
#[must_use]
pub fn recompute(
    source: &[CharacterRecord],
    filter: FilterDirective,
    sort: SortDirective,
) -> Vec<CharacterRecord> {
    let mut records = filter_records(source, filter);
    sort_records(&mut records, sort);
    records
}

/// Keep the records whose status passes `filter`, in source order.
#[must_use]
pub fn filter_records(source: &[CharacterRecord], filter: FilterDirective) -> Vec<CharacterRecord> {
    source
        .iter()
        .filter(|record| filter.matches(&record.status))
        .cloned()
        .collect()
}

/// Stable in-place sort of `records` according to `sort`.
pub fn sort_records(records: &mut [CharacterRecord], sort: SortDirective) {
    match sort {
        SortDirective::None => {}
        SortDirective::ByNameAscending => {
            let collator = NameCollator::new();
            records.sort_by(|a, b| collator.compare(&a.name, &b.name));
        }
        // `None < Some(_)`, so unparseable timestamps come first.
        SortDirective::ByCreatedAscending => records.sort_by_cached_key(CharacterRecord::created_at),
    }
}

/// Locale-aware name ordering.
///
/// Uses the root-locale collation table at default (tertiary) strength:
/// accents and case only break ties left by the base letters, and on a
/// case-only tie the lowercase name comes first.
pub struct NameCollator {
    collator: Option<CollatorBorrowed<'static>>,
}

impl NameCollator {
    #[must_use]
    pub fn new() -> Self {
        let collator = Collator::try_new(Default::default(), CollatorOptions::default()).ok();
        Self { collator }
    }

    #[must_use]
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => fold_case(a, b),
        }
    }
}

impl Default for NameCollator {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare two names with a fresh [`NameCollator`].
///
/// Sorting a list should build one collator and reuse it; this is for
/// one-off comparisons.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    NameCollator::new().compare(a, b)
}

// Used only when the compiled collation data cannot be loaded.
fn fold_case(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);
    folded_a.cmp(folded_b).then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::CharacterStatus;

    fn record(id: u64, name: &str, status: &str, created: &str) -> CharacterRecord {
        CharacterRecord::builder()
            .id(id)
            .name(name)
            .status(status)
            .created(created)
            .build()
    }

    fn morty_and_rick() -> Vec<CharacterRecord> {
        vec![
            record(2, "Morty", "Alive", "2020-01-02"),
            record(1, "Rick", "Dead", "2020-01-01"),
        ]
    }

    fn mixed() -> Vec<CharacterRecord> {
        vec![
            record(1, "Rick Sanchez", "Alive", "2017-11-04T18:48:46.250Z"),
            record(2, "morty Smith", "Alive", "2017-11-04T18:50:21.651Z"),
            record(3, "Summer Smith", "Alive", "2017-11-04T19:09:56.428Z"),
            record(4, "Beth Smith", "Alive", "2017-11-04T19:22:43.665Z"),
            record(5, "Abadango Cluster Princess", "Alive", "2017-11-04T19:50:28.250Z"),
            record(6, "Abradolf Lincler", "unknown", "2017-11-04T19:59:20.523Z"),
            record(7, "Adjudicator Rick", "Dead", "2017-11-04T20:03:34.737Z"),
            record(8, "Agency Director", "Dead", "not-a-date"),
            record(9, "Squanchy", "Squanched", "2017-11-04T18:00:00Z"),
        ]
    }

    fn names(records: &[CharacterRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn should_sort_by_name_when_all_selected() {
        let out = recompute(
            &morty_and_rick(),
            FilterDirective::All,
            SortDirective::ByNameAscending,
        );
        assert_eq!(names(&out), ["Morty", "Rick"]);
    }

    #[test]
    fn should_keep_only_dead_records_when_filtering_dead() {
        let out = recompute(&morty_and_rick(), FilterDirective::Dead, SortDirective::None);
        assert_eq!(names(&out), ["Rick"]);
    }

    #[test]
    fn should_keep_only_alive_records_when_sorting_by_created() {
        let out = recompute(
            &morty_and_rick(),
            FilterDirective::Alive,
            SortDirective::ByCreatedAscending,
        );
        assert_eq!(names(&out), ["Morty"]);
    }

    #[test]
    fn should_return_source_unchanged_when_all_and_no_sort() {
        let source = mixed();
        let out = recompute(&source, FilterDirective::All, SortDirective::None);
        assert_eq!(out, source);
    }

    #[test]
    fn should_return_maximal_matching_subsequence_for_each_status() {
        let source = mixed();
        for filter in [
            FilterDirective::Alive,
            FilterDirective::Dead,
            FilterDirective::Unknown,
        ] {
            let out = filter_records(&source, filter);
            assert!(out.iter().all(|r| r.status.as_str() == filter.as_value()));
            let expected: Vec<_> = source
                .iter()
                .filter(|r| r.status.as_str() == filter.as_value())
                .cloned()
                .collect();
            assert_eq!(out, expected);
        }
    }

    #[test]
    fn should_only_show_unrecognised_status_under_all() {
        let source = mixed();
        let squanchy = CharacterStatus::Other("Squanched".to_string());
        for filter in [
            FilterDirective::Alive,
            FilterDirective::Dead,
            FilterDirective::Unknown,
        ] {
            assert!(filter_records(&source, filter).iter().all(|r| r.status != squanchy));
        }
        assert!(filter_records(&source, FilterDirective::All).iter().any(|r| r.status == squanchy));
    }

    #[test]
    fn should_sort_names_case_insensitively() {
        let out = recompute(&mixed(), FilterDirective::Alive, SortDirective::ByNameAscending);
        assert_eq!(
            names(&out),
            [
                "Abadango Cluster Princess",
                "Beth Smith",
                "morty Smith",
                "Rick Sanchez",
                "Summer Smith",
            ]
        );
    }

    #[test]
    fn should_produce_non_decreasing_names_and_be_idempotent() {
        let once = recompute(&mixed(), FilterDirective::All, SortDirective::ByNameAscending);
        assert!(
            once.windows(2)
                .all(|w| compare_names(&w[0].name, &w[1].name) != Ordering::Greater)
        );
        let twice = recompute(&once, FilterDirective::All, SortDirective::ByNameAscending);
        assert_eq!(once, twice);
    }

    #[test]
    fn should_keep_source_order_for_equal_names() {
        let source = vec![
            record(1, "Rick", "Alive", ""),
            record(2, "Rick", "Dead", ""),
            record(3, "Rick", "unknown", ""),
        ];
        let out = recompute(&source, FilterDirective::All, SortDirective::ByNameAscending);
        let ids: Vec<u64> = out.iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn should_put_lowercase_first_when_names_differ_only_by_case() {
        assert_eq!(compare_names("rick", "Rick"), Ordering::Less);
        assert_eq!(compare_names("Rick", "rick"), Ordering::Greater);
        assert_eq!(compare_names("Rick", "Rick"), Ordering::Equal);
        assert_eq!(compare_names("abe", "Abel"), Ordering::Less);
    }

    #[test]
    fn should_sort_accented_names_with_their_base_letter() {
        let source = vec![
            record(1, "Zeep Xanflorp", "Alive", ""),
            record(2, "Émile", "Alive", ""),
            record(3, "Eve", "Alive", ""),
            record(4, "Ezra", "Alive", ""),
        ];
        let out = recompute(&source, FilterDirective::All, SortDirective::ByNameAscending);
        assert_eq!(names(&out), ["Émile", "Eve", "Ezra", "Zeep Xanflorp"]);
    }

    #[test]
    fn should_put_unaccented_name_first_when_only_accent_differs() {
        assert_eq!(compare_names("Emile", "Émile"), Ordering::Less);
        assert_eq!(compare_names("émile", "Emilf"), Ordering::Less);
    }

    #[test]
    fn should_fold_case_when_collation_data_is_missing() {
        assert_eq!(fold_case("rick", "Rick"), Ordering::Less);
        assert_eq!(fold_case("beth", "Abe"), Ordering::Greater);
    }

    #[test]
    fn should_sort_unparseable_created_first() {
        let out = recompute(&mixed(), FilterDirective::Dead, SortDirective::ByCreatedAscending);
        assert_eq!(names(&out), ["Agency Director", "Adjudicator Rick"]);
    }

    #[test]
    fn should_sort_by_created_across_formats() {
        let source = vec![
            record(1, "late", "Alive", "2021-06-01T12:00:00Z"),
            record(2, "bare", "Alive", "2021-06-01"),
            record(3, "early", "Alive", "2019-03-03T03:03:03+03:00"),
            record(4, "junk", "Alive", ""),
        ];
        let out = recompute(&source, FilterDirective::All, SortDirective::ByCreatedAscending);
        assert_eq!(names(&out), ["junk", "early", "bare", "late"]);
    }

    #[test]
    fn should_not_mutate_source() {
        let source = mixed();
        let snapshot = source.clone();
        let _ = recompute(&source, FilterDirective::Dead, SortDirective::ByNameAscending);
        assert_eq!(source, snapshot);
    }

    #[test]
    fn should_return_empty_when_source_empty() {
        for sort in SortDirective::ALL {
            for filter in FilterDirective::ALL {
                assert!(recompute(&[], filter, sort).is_empty());
            }
        }
    }
}
