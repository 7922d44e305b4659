//! Per-day schedule export.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::info;

use crate::config::CaptureConfig;
use crate::error::{RosterError, RosterResult};
use crate::models::{CsvFile, EmployeeIndex, ExportRow, Shift};

use super::csv::{serialize_rows, CSV_HEADER};
use super::temporal::{parse_instant, parse_ymd};

/// The result of an export request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// A rendered CSV file with at least one data row.
    File(CsvFile),
    /// No shift touched the requested date. Informational, not a failure.
    NoShifts {
        /// The requested date.
        date: NaiveDate,
    },
}

/// Exports the shifts touching one chosen date as a CSV file.
///
/// A shift is included when the local calendar date of its start or of its
/// end equals the chosen date, so a shift crossing midnight is attributed to
/// both days. Shifts with unparseable times, and shifts without any employee
/// identifier, are skipped. Rows are sorted by their formatted start time
/// and serialized under the fixed header; with zero rows the outcome is
/// [`ExportOutcome::NoShifts`] and no file is produced.
///
/// # Errors
///
/// Returns [`RosterError::InvalidDate`] when `date` is not a syntactically
/// valid `YYYY-MM-DD` string. The date does not have to come from
/// [`bucket_dates`](super::bucket_dates).
pub fn export_for_date(
    shifts: &[Shift],
    index: &EmployeeIndex,
    date: &str,
    config: &CaptureConfig,
) -> RosterResult<ExportOutcome> {
    let target = parse_ymd(date).ok_or_else(|| RosterError::InvalidDate {
        input: date.to_string(),
    })?;
    let day_label = format_day_label(target);
    let threshold_millis = config.break_threshold_minutes * 60_000;

    let mut rows: Vec<ExportRow> = Vec::new();
    for shift in shifts {
        let (Some(start), Some(end)) = (parse_instant(&shift.start), parse_instant(&shift.end))
        else {
            continue;
        };
        if start.date() != target && end.date() != target {
            continue;
        }
        let Some(employee_id) = shift.employee.display_id() else {
            continue;
        };
        let employee_name = index.display_name(&shift.employee).unwrap_or_default();

        rows.push(ExportRow {
            day_label: day_label.clone(),
            employee_id: employee_id.to_string(),
            employee_name: employee_name.to_string(),
            shift_start: start.format("%H:%M").to_string(),
            shift_end: end.format("%H:%M").to_string(),
            break_required: duration_millis(start, end) > threshold_millis,
        });
    }

    if rows.is_empty() {
        return Ok(ExportOutcome::NoShifts { date: target });
    }

    // lexicographic on HH:MM equals chronological within a day; stable sort
    // keeps traversal order for ties
    rows.sort_by(|a, b| a.shift_start.cmp(&b.shift_start));

    let cells = std::iter::once(CSV_HEADER.map(String::from).to_vec())
        .chain(rows.iter().map(|row| {
            row.cells().map(String::from).to_vec()
        }));
    let bytes = serialize_rows(cells);
    let filename = format!("{}{}.csv", config.filename_prefix, target.format("%Y-%m-%d"));

    info!(rows = rows.len(), filename = %filename, "CSV export rendered");
    Ok(ExportOutcome::File(CsvFile { filename, bytes }))
}

/// Computes a shift's duration in milliseconds, wrapping across midnight
/// exactly once when the raw difference is negative.
///
/// Parsed instants carry full dates, so durations longer than 24 hours come
/// out as-is; the wrap only compensates for end-before-start pairs.
pub fn duration_millis(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let mut millis = (end - start).num_milliseconds();
    if millis < 0 {
        millis += 24 * 60 * 60 * 1000;
    }
    millis
}

/// Formats the day label: full weekday name followed by `dd/mm/yyyy`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use roster_export::export::format_day_label;
///
/// let date = NaiveDate::from_ymd_opt(2025, 8, 11).unwrap();
/// assert_eq!(format_day_label(date), "Monday 11/08/2025");
/// ```
pub fn format_day_label(date: NaiveDate) -> String {
    format!("{} {}", date.format("%A"), date.format("%d/%m/%Y"))
}
