//! Read-only aggregation and search over the record store.
//!
//! Every function here is pure: it borrows the records, never reorders them,
//! and returns plain data for the caller to print.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, warn};

use crate::error::ExplorerError;
use crate::record::{Field, GeoPoint, ShipRecord};

/// Values of `field` for records that have it. Records without it are skipped.
fn present<'a>(
    records: &'a [ShipRecord],
    field: Field,
    query: &'static str,
) -> impl Iterator<Item = &'a str> {
    let mut skipped = 0usize;
    let total = records.len();
    let mut iter = records.iter().enumerate();
    std::iter::from_fn(move || {
        for (index, record) in iter.by_ref() {
            match field.get(record) {
                Some(value) => return Some(value),
                None => {
                    let err = ExplorerError::DataFieldMissing { field, index };
                    debug!(query, error = %err, "skipping record");
                    skipped += 1;
                }
            }
        }
        if skipped > 0 {
            warn!(query, %field, skipped, total, "records without field were skipped");
            skipped = 0;
        }
        None
    })
}

/// Counts records per distinct value of `field`.
///
/// Sorted by count descending, then key ascending.
pub fn group_count_by(records: &[ShipRecord], field: Field) -> Vec<(&str, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for key in present(records, field, "group_count_by") {
        *counts.entry(key).or_insert(0) += 1;
    }

    let mut grouped: Vec<(&str, usize)> = counts.into_iter().collect();
    grouped.sort_by(|(ka, ca), (kb, cb)| cb.cmp(ca).then_with(|| ka.cmp(kb)));
    grouped
}

/// First `n` entries of an already ranked aggregate.
pub fn top_n<'a>(grouped: &'a [(&'a str, usize)], n: usize) -> &'a [(&'a str, usize)] {
    &grouped[..n.min(grouped.len())]
}

/// Values of `field` containing `term`, ignoring case, in store order.
pub fn search_by_substring<'a>(
    records: &'a [ShipRecord],
    field: Field,
    term: &str,
) -> Vec<&'a str> {
    let needle = term.to_lowercase();
    present(records, field, "search_by_substring")
        .filter(|value| value.to_lowercase().contains(&needle))
        .collect()
}

/// Distinct values of `field`, strictly ascending.
pub fn distinct_sorted(records: &[ShipRecord], field: Field) -> Vec<&str> {
    present(records, field, "distinct_sorted")
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Finite speeds, in store order.
pub fn speeds(records: &[ShipRecord]) -> Vec<f64> {
    records
        .iter()
        .filter_map(|r| r.speed)
        .filter(|s| s.is_finite())
        .collect()
}

/// Positions of records that carry both coordinates.
pub fn positions(records: &[ShipRecord]) -> Vec<GeoPoint> {
    records
        .iter()
        .filter_map(|r| match (r.longitude, r.latitude) {
            (Some(longitude), Some(latitude)) if longitude.is_finite() && latitude.is_finite() => {
                Some(GeoPoint {
                    longitude,
                    latitude,
                })
            }
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fleet() -> Vec<ShipRecord> {
        vec![
            ShipRecord::new("Alpha", "US", "Cargo"),
            ShipRecord::new("Beta", "US", "Tanker"),
            ShipRecord::new("Gamma", "UK", "Cargo"),
        ]
    }

    #[test]
    fn test_group_by_type() {
        let records = fleet();
        assert_eq!(
            group_count_by(&records, Field::TypeSummary),
            vec![("Cargo", 2), ("Tanker", 1)]
        );
    }

    #[test]
    fn test_group_ties_break_by_key() {
        let records = vec![
            ShipRecord::new("a", "NO", "Cargo"),
            ShipRecord::new("b", "DK", "Cargo"),
            ShipRecord::new("c", "SE", "Cargo"),
            ShipRecord::new("d", "SE", "Cargo"),
        ];
        assert_eq!(
            group_count_by(&records, Field::Country),
            vec![("SE", 2), ("DK", 1), ("NO", 1)]
        );
    }

    #[test]
    fn test_group_counts_by_key_not_by_record() {
        // Identical records still land in one bucket per key.
        let records = vec![ShipRecord::new("x", "US", "Cargo"); 4];
        assert_eq!(group_count_by(&records, Field::TypeSummary), vec![("Cargo", 4)]);
    }

    #[test]
    fn test_group_empty_store() {
        assert!(group_count_by(&[], Field::Country).is_empty());
    }

    #[test]
    fn test_group_skips_missing_keys() {
        let mut records = fleet();
        records.push(ShipRecord {
            name: Some("Ghost".into()),
            ..ShipRecord::default()
        });
        let grouped = group_count_by(&records, Field::Country);
        assert_eq!(grouped, vec![("US", 2), ("UK", 1)]);
        assert_eq!(grouped.iter().map(|(_, c)| c).sum::<usize>(), records.len() - 1);
    }

    #[test]
    fn test_top_n() {
        let records = fleet();
        let grouped = group_count_by(&records, Field::Country);
        assert_eq!(top_n(&grouped, 1), &[("US", 2)]);
        assert!(top_n(&grouped, 0).is_empty());
        assert_eq!(top_n(&grouped, 10).len(), 2);
    }

    #[test]
    fn test_search_case_insensitive() {
        let records = fleet();
        assert_eq!(search_by_substring(&records, Field::Name, "ga"), vec!["Gamma"]);
        assert_eq!(search_by_substring(&records, Field::Name, "GA"), vec!["Gamma"]);
        assert_eq!(
            search_by_substring(&records, Field::Name, "A"),
            vec!["Alpha", "Beta", "Gamma"]
        );
        assert!(search_by_substring(&records, Field::Name, "zzz").is_empty());
    }

    #[test]
    fn test_search_keeps_duplicates() {
        let mut records = fleet();
        records.push(ShipRecord::new("Alpha", "FR", "Fishing"));
        assert_eq!(
            search_by_substring(&records, Field::Name, "alp"),
            vec!["Alpha", "Alpha"]
        );
    }

    #[test]
    fn test_distinct_sorted() {
        let records = fleet();
        assert_eq!(distinct_sorted(&records, Field::Country), vec!["UK", "US"]);
    }

    #[test]
    fn test_renderer_inputs_drop_absent_values() {
        let records = vec![
            ShipRecord::new("a", "US", "Cargo").with_speed(12.5),
            ShipRecord::new("b", "US", "Cargo"),
            ShipRecord::new("c", "US", "Cargo").with_speed(f64::NAN),
            ShipRecord::new("d", "US", "Cargo").with_position(10.0, 55.0),
            ShipRecord {
                longitude: Some(3.0),
                ..ShipRecord::default()
            },
        ];
        assert_eq!(speeds(&records), vec![12.5]);
        assert_eq!(
            positions(&records),
            vec![GeoPoint {
                longitude: 10.0,
                latitude: 55.0
            }]
        );
    }

    fn arb_record() -> impl Strategy<Value = ShipRecord> {
        (
            proptest::option::weighted(0.9, "[A-Za-z ]{0,8}"),
            proptest::option::weighted(0.9, "(US|UK|NO|PA|MT|LR)"),
            proptest::option::weighted(0.9, "(Cargo|Tanker|Fishing|Passenger)"),
        )
            .prop_map(|(name, country, type_summary)| ShipRecord {
                name,
                country,
                type_summary,
                ..ShipRecord::default()
            })
    }

    proptest! {
        #[test]
        fn prop_counts_sum_to_present_records(records in proptest::collection::vec(arb_record(), 0..60)) {
            let present = records.iter().filter(|r| r.country.is_some()).count();
            let total: usize = group_count_by(&records, Field::Country).iter().map(|(_, c)| c).sum();
            prop_assert_eq!(total, present);
        }

        #[test]
        fn prop_group_is_ranked(records in proptest::collection::vec(arb_record(), 0..60)) {
            let grouped = group_count_by(&records, Field::TypeSummary);
            for pair in grouped.windows(2) {
                let ((ka, ca), (kb, cb)) = (pair[0], pair[1]);
                prop_assert!(ca > cb || (ca == cb && ka < kb));
            }
        }

        #[test]
        fn prop_distinct_is_strictly_ascending(records in proptest::collection::vec(arb_record(), 0..60)) {
            let values = distinct_sorted(&records, Field::Country);
            prop_assert!(values.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn prop_top_n_length(records in proptest::collection::vec(arb_record(), 0..60), n in 0usize..10) {
            let grouped = group_count_by(&records, Field::Country);
            let distinct = distinct_sorted(&records, Field::Country).len();
            prop_assert_eq!(top_n(&grouped, n).len(), n.min(distinct));
        }

        #[test]
        fn prop_empty_term_returns_all_names(records in proptest::collection::vec(arb_record(), 0..60)) {
            let expected: Vec<&str> = records.iter().filter_map(|r| r.name.as_deref()).collect();
            prop_assert_eq!(search_by_substring(&records, Field::Name, ""), expected);
        }

        #[test]
        fn prop_search_ignores_case(records in proptest::collection::vec(arb_record(), 0..60), term in "[a-zA-Z]{1,3}") {
            prop_assert_eq!(
                search_by_substring(&records, Field::Name, &term.to_uppercase()),
                search_by_substring(&records, Field::Name, &term.to_lowercase())
            );
        }
    }
}
