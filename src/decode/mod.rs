//! Message decoding and record normalization.
//!
//! This module turns raw transport frames into a deduplicated sequence of
//! canonical shifts plus an employee name index: frame unwrapping, a generic
//! recursive search for record containers in the untyped payload tree,
//! shift classification and normalization, and deduplication.

mod collector;
mod dedup;
mod employee_index;
mod frame;
pub mod probe;

pub use collector::{collect_shifts, normalize_shift};
pub use dedup::dedup_shifts;
pub use employee_index::build_employee_index;
pub use frame::{decode_frame, frame_is_relevant};
