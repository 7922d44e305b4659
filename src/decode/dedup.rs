//! Shift deduplication.
//!
//! The same shift routinely appears in more than one container across
//! overlapping subtrees of a payload, so collection output must be collapsed
//! before anything downstream counts or exports it.

use std::collections::HashSet;

use crate::models::Shift;

/// Removes repeated shifts, keeping the first occurrence of each key in
/// traversal order.
///
/// The key is `(employee id or empty, qualifier or empty, raw start, raw
/// end)`; the shift's own id takes no part. This is a pure, stable filter:
/// re-running it on its own output is a no-op.
///
/// # Example
///
/// ```
/// use roster_export::decode::dedup_shifts;
/// use roster_export::models::{EmployeeRef, RawInstant, Shift};
///
/// let shift = Shift {
///     id: None,
///     start: RawInstant::Text("2025-08-11T08:00:00".to_string()),
///     end: RawInstant::Text("2025-08-11T14:30:00".to_string()),
///     employee: EmployeeRef { id: None, qualifier: Some("1001".to_string()) },
/// };
/// let deduped = dedup_shifts(vec![shift.clone(), shift]);
/// assert_eq!(deduped.len(), 1);
/// ```
pub fn dedup_shifts(shifts: Vec<Shift>) -> Vec<Shift> {
    let mut seen = HashSet::new();
    shifts
        .into_iter()
        .filter(|shift| seen.insert(shift.dedup_key()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmployeeRef, RawInstant};
    use proptest::prelude::*;

    fn shift(id: Option<&str>, qualifier: &str, start: &str, end: &str) -> Shift {
        Shift {
            id: id.map(String::from),
            start: RawInstant::Text(start.to_string()),
            end: RawInstant::Text(end.to_string()),
            employee: EmployeeRef {
                id: None,
                qualifier: Some(qualifier.to_string()),
            },
        }
    }

    #[test]
    fn test_identical_shifts_collapse_to_first() {
        let first = shift(Some("a"), "1001", "2025-08-11T08:00:00", "2025-08-11T14:30:00");
        let repeat = shift(Some("b"), "1001", "2025-08-11T08:00:00", "2025-08-11T14:30:00");
        let deduped = dedup_shifts(vec![first.clone(), repeat]);

        // same identity tuple, different shift id: first occurrence wins
        assert_eq!(deduped, vec![first]);
    }

    #[test]
    fn test_distinct_employees_are_kept() {
        let a = shift(None, "1001", "2025-08-11T08:00:00", "2025-08-11T14:30:00");
        let b = shift(None, "1002", "2025-08-11T08:00:00", "2025-08-11T14:30:00");
        assert_eq!(dedup_shifts(vec![a.clone(), b.clone()]), vec![a, b]);
    }

    #[test]
    fn test_distinct_times_are_kept() {
        let a = shift(None, "1001", "2025-08-11T08:00:00", "2025-08-11T14:30:00");
        let b = shift(None, "1001", "2025-08-11T14:30:00", "2025-08-11T22:00:00");
        assert_eq!(dedup_shifts(vec![a.clone(), b.clone()]), vec![a, b]);
    }

    #[test]
    fn test_order_is_preserved() {
        let a = shift(None, "1002", "2025-08-11T14:30:00", "2025-08-11T22:00:00");
        let b = shift(None, "1001", "2025-08-11T08:00:00", "2025-08-11T14:30:00");
        let deduped = dedup_shifts(vec![a.clone(), b.clone(), a.clone()]);
        assert_eq!(deduped, vec![a, b]);
    }

    fn arb_shift() -> impl Strategy<Value = Shift> {
        (
            proptest::option::of("[a-c]"),
            proptest::option::of("[1-3]"),
            0i64..4,
            0i64..4,
        )
            .prop_map(|(id, qualifier, start, end)| Shift {
                id: None,
                start: RawInstant::Millis(start),
                end: RawInstant::Millis(end),
                employee: EmployeeRef { id, qualifier },
            })
    }

    proptest! {
        #[test]
        fn prop_dedup_is_idempotent(shifts in proptest::collection::vec(arb_shift(), 0..24)) {
            let once = dedup_shifts(shifts);
            let twice = dedup_shifts(once.clone());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_dedup_output_has_unique_keys(shifts in proptest::collection::vec(arb_shift(), 0..24)) {
            let deduped = dedup_shifts(shifts);
            let keys: std::collections::HashSet<_> =
                deduped.iter().map(Shift::dedup_key).collect();
            prop_assert_eq!(keys.len(), deduped.len());
        }
    }
}
