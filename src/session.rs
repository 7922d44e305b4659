//! Capture session: the single-writer snapshot state.
//!
//! A session owns the two pieces of process-wide state, the current shift
//! snapshot and the current employee index, plus the last published date
//! list. Processing is single-threaded and event-driven: each inbound frame
//! is handled to completion, and the snapshot pair is replaced atomically
//! from a consumer's point of view, so an export always sees shifts and
//! names from the same payload.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::config::CaptureConfig;
use crate::decode::{build_employee_index, collect_shifts, decode_frame, dedup_shifts};
use crate::error::RosterResult;
use crate::export::{bucket_dates, export_for_date, ExportOutcome};
use crate::models::{EmployeeIndex, Shift};

/// Owns the current decoded snapshot and drives ingest and export.
///
/// # Example
///
/// ```
/// use roster_export::session::CaptureSession;
///
/// let mut session = CaptureSession::with_defaults();
/// let frame = r#"{
///     "shifts": [{
///         "startDateTime": "2025-08-11T08:00:00",
///         "endDateTime": "2025-08-11T14:30:00",
///         "employee": {"qualifier": "1001"}
///     }]
/// }"#;
///
/// let dates = session.ingest_frame(frame);
/// assert_eq!(dates.unwrap().len(), 1);
/// assert_eq!(session.shifts().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct CaptureSession {
    config: CaptureConfig,
    shifts: Vec<Shift>,
    index: EmployeeIndex,
    published_dates: Vec<NaiveDate>,
}

impl CaptureSession {
    /// Creates a session with the given configuration.
    pub fn new(config: CaptureConfig) -> Self {
        Self {
            config,
            shifts: Vec::new(),
            index: EmployeeIndex::new(),
            published_dates: Vec::new(),
        }
    }

    /// Creates a session with the built-in default configuration.
    pub fn with_defaults() -> Self {
        Self::new(CaptureConfig::default())
    }

    /// Returns the session's configuration.
    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    /// Returns the current shift snapshot.
    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    /// Returns the current employee index.
    pub fn employee_index(&self) -> &EmployeeIndex {
        &self.index
    }

    /// Returns the most recently published date list.
    pub fn published_dates(&self) -> &[NaiveDate] {
        &self.published_dates
    }

    /// Processes one raw transport frame.
    ///
    /// A frame that fails to decode, yields no shifts, or yields no usable
    /// dates leaves the snapshot untouched. Otherwise the shift snapshot and
    /// employee index are replaced as a pair, and when the derived date list
    /// differs from the last published one (compared in order) it is stored
    /// and returned for re-publication to the date-selection collaborator.
    ///
    /// The transport collaborator is expected to pre-filter frames by
    /// message name; see [`frame_is_relevant`](crate::decode::frame_is_relevant).
    pub fn ingest_frame(&mut self, text: &str) -> Option<&[NaiveDate]> {
        let roots = decode_frame(text);
        if roots.is_empty() {
            return None;
        }

        let shifts = dedup_shifts(collect_shifts(&roots, &self.config));
        if shifts.is_empty() {
            debug!(roots = roots.len(), "frame carried no shifts");
            return None;
        }

        let dates = bucket_dates(&shifts, self.config.max_dates);
        if dates.is_empty() {
            debug!(shifts = shifts.len(), "no shift produced a usable date");
            return None;
        }

        let index = build_employee_index(&roots, &self.config);
        debug!(
            shifts = shifts.len(),
            employees = index.len(),
            dates = dates.len(),
            "snapshot replaced"
        );
        self.shifts = shifts;
        self.index = index;

        // ordered equality is equivalent to comparing the joined date strings
        if dates != self.published_dates {
            info!(dates = ?dates, "date window changed, republishing");
            self.published_dates = dates;
            Some(&self.published_dates)
        } else {
            None
        }
    }

    /// Exports the current snapshot for one chosen `YYYY-MM-DD` date.
    ///
    /// Always operates on the snapshot current at the moment of the call;
    /// export never mutates session state.
    pub fn export_for_date(&self, date: &str) -> RosterResult<ExportOutcome> {
        export_for_date(&self.shifts, &self.index, date, &self.config)
    }
}
