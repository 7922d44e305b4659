//! Core data models for the roster export engine.

mod employee;
mod export_row;
mod shift;

pub use employee::{EmployeeIndex, EmployeeRef};
pub use export_row::{CsvFile, ExportRow};
pub use shift::{RawInstant, Shift};
