//! Employee reference and name index types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// An employee reference carried by a shift record.
///
/// The upstream payloads identify employees by an internal `id`, a
/// human-facing `qualifier` (badge/employee number), or both. A reference is
/// only usable when at least one of the two is present; the qualifier is
/// preferred wherever a display identifier is needed.
///
/// # Example
///
/// ```
/// use roster_export::models::EmployeeRef;
///
/// let employee = EmployeeRef {
///     id: Some("88412".to_string()),
///     qualifier: Some("1001".to_string()),
/// };
/// assert_eq!(employee.display_id(), Some("1001"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeRef {
    /// Internal employee identifier, if present.
    pub id: Option<String>,
    /// Human-facing employee number, if present.
    pub qualifier: Option<String>,
}

impl EmployeeRef {
    /// Returns the identifier used in export output: qualifier if present,
    /// otherwise the internal id.
    pub fn display_id(&self) -> Option<&str> {
        self.qualifier.as_deref().or(self.id.as_deref())
    }

    /// Returns true if at least one identifier is present.
    pub fn has_identifier(&self) -> bool {
        self.id.is_some() || self.qualifier.is_some()
    }
}

/// Identifier-to-display-name mapping built from one payload batch.
///
/// Both the internal id and the qualifier of each employee record map to the
/// same display name, so shift rows can be joined by whichever identifier
/// they happen to carry. The index is rebuilt in full from every qualifying
/// payload and never merged across payloads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeIndex {
    names: HashMap<String, String>,
}

impl EmployeeIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps an identifier key to a display name. Later inserts for the same
    /// key overwrite earlier ones.
    pub fn insert(&mut self, key: String, name: String) {
        self.names.insert(key, name);
    }

    /// Looks up a display name by raw identifier key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.names.get(key).map(String::as_str)
    }

    /// Resolves the display name for an employee reference, trying the
    /// qualifier before the internal id.
    pub fn display_name(&self, employee: &EmployeeRef) -> Option<&str> {
        employee
            .qualifier
            .as_deref()
            .and_then(|q| self.get(q))
            .or_else(|| employee.id.as_deref().and_then(|id| self.get(id)))
    }

    /// Returns the number of mapped identifier keys.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the index maps no identifiers.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
