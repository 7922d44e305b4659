//! Date bucketing for the export date picker.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::models::Shift;

use super::temporal::parse_instant;

/// Derives the distinct local calendar dates touched by a shift set.
///
/// Both the start and the end of each shift contribute a date (when they
/// parse), so an overnight shift makes both of its days selectable. The
/// result is sorted ascending and truncated to `max_dates` entries; this
/// list is the externally published "pick a date" domain.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use roster_export::export::bucket_dates;
/// use roster_export::models::{EmployeeRef, RawInstant, Shift};
///
/// let overnight = Shift {
///     id: None,
///     start: RawInstant::Text("2025-08-11T23:30:00".to_string()),
///     end: RawInstant::Text("2025-08-12T00:30:00".to_string()),
///     employee: EmployeeRef { id: None, qualifier: Some("1001".to_string()) },
/// };
/// let dates = bucket_dates(&[overnight], 7);
/// assert_eq!(
///     dates,
///     vec![
///         NaiveDate::from_ymd_opt(2025, 8, 11).unwrap(),
///         NaiveDate::from_ymd_opt(2025, 8, 12).unwrap(),
///     ]
/// );
/// ```
pub fn bucket_dates(shifts: &[Shift], max_dates: usize) -> Vec<NaiveDate> {
    let mut dates = BTreeSet::new();
    for shift in shifts {
        if let Some(start) = parse_instant(&shift.start) {
            dates.insert(start.date());
        }
        if let Some(end) = parse_instant(&shift.end) {
            dates.insert(end.date());
        }
    }
    dates.into_iter().take(max_dates).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmployeeRef, RawInstant};

    fn shift(start: &str, end: &str) -> Shift {
        Shift {
            id: None,
            start: RawInstant::Text(start.to_string()),
            end: RawInstant::Text(end.to_string()),
            employee: EmployeeRef {
                id: None,
                qualifier: Some("1001".to_string()),
            },
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_dates_sorted_ascending_and_distinct() {
        let shifts = vec![
            shift("2025-08-13T08:00:00", "2025-08-13T14:00:00"),
            shift("2025-08-11T08:00:00", "2025-08-11T14:00:00"),
            shift("2025-08-11T15:00:00", "2025-08-11T22:00:00"),
        ];
        assert_eq!(
            bucket_dates(&shifts, 7),
            vec![date(2025, 8, 11), date(2025, 8, 13)]
        );
    }

    #[test]
    fn test_truncated_to_max_dates() {
        let shifts: Vec<Shift> = (10..20)
            .map(|d| {
                shift(
                    &format!("2025-08-{d}T08:00:00"),
                    &format!("2025-08-{d}T14:00:00"),
                )
            })
            .collect();
        let dates = bucket_dates(&shifts, 7);
        assert_eq!(dates.len(), 7);
        assert_eq!(dates[0], date(2025, 8, 10));
        assert_eq!(dates[6], date(2025, 8, 16));
    }

    #[test]
    fn test_unparseable_values_contribute_nothing() {
        let shifts = vec![
            shift("not a date", "also not"),
            shift("2025-08-11T08:00:00", "nope"),
        ];
        assert_eq!(bucket_dates(&shifts, 7), vec![date(2025, 8, 11)]);
    }

    #[test]
    fn test_empty_input_yields_empty_dates() {
        assert!(bucket_dates(&[], 7).is_empty());
    }
}
