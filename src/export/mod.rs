//! Date bucketing and CSV export.
//!
//! Consumers of the decoded snapshot: temporal parsing of raw start/end
//! values, derivation of the selectable date list, and rendering of the
//! per-day CSV file with the break-required flag.

mod csv;
mod dates;
mod exporter;
mod temporal;

pub use csv::{escape_field, serialize_rows, CSV_HEADER};
pub use dates::bucket_dates;
pub use exporter::{duration_millis, export_for_date, format_day_label, ExportOutcome};
pub use temporal::{parse_instant, parse_ymd};
