//! Derived export row and CSV artifact types.

use serde::{Deserialize, Serialize};

/// One row of the per-day CSV export.
///
/// Rows are derived on demand from the current snapshot and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    /// Human-readable weekday-plus-date label for the chosen day.
    pub day_label: String,
    /// Display identifier: qualifier if present, otherwise internal id.
    pub employee_id: String,
    /// Resolved display name, empty when the index has no entry.
    pub employee_name: String,
    /// Local shift start, 24-hour `HH:MM`.
    pub shift_start: String,
    /// Local shift end, 24-hour `HH:MM`.
    pub shift_end: String,
    /// Whether the shift's duration requires a break.
    pub break_required: bool,
}

impl ExportRow {
    /// Returns the row's CSV cells in column order, with the break flag
    /// rendered as `Yes`/`No`.
    pub fn cells(&self) -> [&str; 6] {
        [
            &self.day_label,
            &self.employee_id,
            &self.employee_name,
            &self.shift_start,
            &self.shift_end,
            if self.break_required { "Yes" } else { "No" },
        ]
    }
}

/// A rendered CSV export ready for the file-delivery collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvFile {
    /// Suggested filename, e.g. `ukg_roster_2025-08-11.csv`.
    pub filename: String,
    /// UTF-8 CSV content with CRLF line endings.
    pub bytes: Vec<u8>,
}
