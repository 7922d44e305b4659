//! Capture configuration types.
//!
//! The upstream schema is vendor-controlled and undocumented; field names vary
//! across payload types. Every field-name fallback list the pipeline probes is
//! collected here as an explicit, reviewable contract instead of literals
//! scattered through the traversal code.

use serde::{Deserialize, Serialize};

/// Configuration for the capture and export pipeline.
///
/// All fields have defaults matching the vendor payloads observed in the
/// wild, so a partial (or absent) configuration file is always usable.
///
/// # Example
///
/// ```
/// use roster_export::config::CaptureConfig;
///
/// let config = CaptureConfig::default();
/// assert_eq!(config.max_dates, 7);
/// assert_eq!(config.break_threshold_minutes, 360);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Message-name prefix identifying relevant schedule payloads.
    pub message_name_prefix: String,
    /// Maximum number of distinct calendar dates offered for export.
    pub max_dates: usize,
    /// Shift duration above which a break is required, in minutes (strict).
    pub break_threshold_minutes: i64,
    /// Prefix for generated CSV filenames.
    pub filename_prefix: String,
    /// Field-name lists used when probing shift records.
    pub shift_fields: ShiftFieldConfig,
    /// Field-name lists used when probing employee records.
    pub employee_fields: EmployeeFieldConfig,
}

/// Field-name fallback lists for locating and normalizing shift records.
///
/// Each list is tried in order; the first present, non-null field wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftFieldConfig {
    /// Object properties whose array values are treated as shift containers.
    pub containers: Vec<String>,
    /// Fields consulted for the record's kind/type string.
    pub kind_fields: Vec<String>,
    /// Kind phrases that disqualify a record (substring match, case- and
    /// whitespace-insensitive within a phrase).
    pub excluded_kinds: Vec<String>,
    /// Boolean fields that, when `true`, mark the record as an open shift.
    pub open_flags: Vec<String>,
    /// Fields consulted for the shift start instant.
    pub start_fields: Vec<String>,
    /// Fields consulted for the shift end instant.
    pub end_fields: Vec<String>,
    /// Fields consulted for the shift's own identifier.
    pub id_fields: Vec<String>,
    /// Dotted paths consulted for the nested employee reference object.
    pub employee_ref_paths: Vec<String>,
    /// Identifier fields tried on the employee reference.
    pub ref_id_fields: Vec<String>,
    /// Identifier fields tried on the shift record itself as a fallback.
    pub record_id_fields: Vec<String>,
    /// Qualifier fields tried on the employee reference.
    pub ref_qualifier_fields: Vec<String>,
    /// Qualifier fields tried on the shift record itself as a fallback.
    pub record_qualifier_fields: Vec<String>,
}

/// Field-name fallback lists for building the employee name index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeFieldConfig {
    /// Object properties whose array values are treated as employee lists.
    pub containers: Vec<String>,
    /// Fields consulted for a complete display name.
    pub name_fields: Vec<String>,
    /// Fields joined (space-separated, empty parts dropped) when no complete
    /// name field is present.
    pub name_part_fields: Vec<String>,
    /// Fields consulted for a nested employee/person reference object.
    pub ref_fields: Vec<String>,
    /// Identifier fields tried on the reference.
    pub ref_id_fields: Vec<String>,
    /// Identifier fields tried on the employee record itself as a fallback.
    pub record_id_fields: Vec<String>,
    /// Qualifier fields tried on the reference.
    pub ref_qualifier_fields: Vec<String>,
    /// Qualifier fields tried on the employee record itself as a fallback.
    pub record_qualifier_fields: Vec<String>,
}

fn strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            message_name_prefix: "locationSchedule.employee.getScheduleForEmployeeList"
                .to_string(),
            max_dates: 7,
            break_threshold_minutes: 360,
            filename_prefix: "ukg_roster_".to_string(),
            shift_fields: ShiftFieldConfig::default(),
            employee_fields: EmployeeFieldConfig::default(),
        }
    }
}

impl Default for ShiftFieldConfig {
    fn default() -> Self {
        Self {
            containers: strings(&["shifts", "employeeShifts", "scheduleItems"]),
            kind_fields: strings(&["itemType", "type", "category", "shiftType"]),
            excluded_kinds: strings(&["BREAK", "MEAL", "TIME OFF", "AVAIL"]),
            open_flags: strings(&["isOpenShift", "openShift", "isOpen", "open"]),
            start_fields: strings(&["startDateTime", "startTime", "start", "startDate"]),
            end_fields: strings(&["endDateTime", "endTime", "end", "endDate"]),
            id_fields: strings(&["id", "shiftId"]),
            employee_ref_paths: strings(&["employee", "employeeRef", "owner.employeeRef"]),
            ref_id_fields: strings(&["id", "employeeId", "personId"]),
            record_id_fields: strings(&["employeeId", "personId"]),
            ref_qualifier_fields: strings(&["qualifier"]),
            record_qualifier_fields: strings(&["employeeNumber"]),
        }
    }
}

impl Default for EmployeeFieldConfig {
    fn default() -> Self {
        Self {
            containers: strings(&["employees", "employeeList"]),
            name_fields: strings(&["fullName", "name"]),
            name_part_fields: strings(&["firstName", "lastName"]),
            ref_fields: strings(&["employeeRef", "personRef"]),
            ref_id_fields: strings(&["id"]),
            record_id_fields: strings(&["id", "employeeId", "personId"]),
            ref_qualifier_fields: strings(&["qualifier"]),
            record_qualifier_fields: strings(&["qualifier", "employeeNumber"]),
        }
    }
}
