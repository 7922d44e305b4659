//! Canonical shift model and the raw temporal representation.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::EmployeeRef;

/// A start/end value exactly as received from the stream.
///
/// Vendor payloads carry timestamps either as ISO-style strings or as epoch
/// milliseconds, and the representation is not consistent across payload
/// types. Normalization keeps the raw value; interpreting it as an instant is
/// deferred to the date-bucketing and export stages so that deduplication can
/// compare the received representation directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawInstant {
    /// An epoch-millisecond timestamp.
    Millis(i64),
    /// A textual timestamp, usually ISO 8601.
    Text(String),
}

impl RawInstant {
    /// Captures a JSON value as a raw instant.
    ///
    /// Strings and numbers are the only recognized representations; the empty
    /// string and every other JSON type yield `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .map(RawInstant::Millis),
            Value::String(s) if !s.is_empty() => Some(RawInstant::Text(s.clone())),
            _ => None,
        }
    }

    /// Renders the raw value for use in deduplication keys.
    pub fn as_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RawInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawInstant::Millis(ms) => write!(f, "{}", ms),
            RawInstant::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A canonical, validated record of one employee's scheduled working period.
///
/// Shifts are value objects: their identity is the 4-tuple of employee id,
/// employee qualifier, and the raw start/end values, which also serves as the
/// deduplication key. The optional `id` is carried through for reference but
/// takes no part in identity.
///
/// # Example
///
/// ```
/// use roster_export::models::{EmployeeRef, RawInstant, Shift};
///
/// let shift = Shift {
///     id: Some("sh-1".to_string()),
///     start: RawInstant::Text("2025-08-11T08:00:00".to_string()),
///     end: RawInstant::Text("2025-08-11T14:30:00".to_string()),
///     employee: EmployeeRef {
///         id: None,
///         qualifier: Some("1001".to_string()),
///     },
/// };
/// assert_eq!(shift.dedup_key().1, "1001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shift {
    /// The shift's own identifier, when the payload carries one.
    pub id: Option<String>,
    /// Raw start value as received.
    pub start: RawInstant,
    /// Raw end value as received.
    pub end: RawInstant,
    /// The employee this shift belongs to.
    pub employee: EmployeeRef,
}

impl Shift {
    /// Returns the deduplication key: `(employee id or empty, qualifier or
    /// empty, raw start, raw end)`.
    pub fn dedup_key(&self) -> (String, String, String, String) {
        (
            self.employee.id.clone().unwrap_or_default(),
            self.employee.qualifier.clone().unwrap_or_default(),
            self.start.as_key(),
            self.end.as_key(),
        )
    }
}
