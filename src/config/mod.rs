//! Configuration for the capture and export pipeline.
//!
//! The set of candidate container names and every multi-field fallback list
//! probed by the decoder lives in [`CaptureConfig`], loadable from YAML with
//! defaults matching the observed vendor schema.
//!
//! # Example
//!
//! ```
//! use roster_export::config::CaptureConfig;
//!
//! let config = CaptureConfig::default();
//! assert!(config.message_name_prefix.starts_with("locationSchedule"));
//! ```

mod loader;
mod types;

pub use types::{CaptureConfig, EmployeeFieldConfig, ShiftFieldConfig};
