//! Employee name index construction.

use serde_json::Value;
use tracing::debug;

use crate::config::{CaptureConfig, EmployeeFieldConfig};
use crate::models::EmployeeIndex;

use super::probe;

/// Builds an identifier-to-name index from a payload's JSON roots.
///
/// The same recursive walk as shift collection, probing every object node
/// for the configured employee containers (`employees` and `employeeList` by
/// default). Elements without a resolvable display name are skipped; both
/// the id and the qualifier of a named element map to its name, and later
/// entries overwrite earlier ones.
pub fn build_employee_index(roots: &[Value], config: &CaptureConfig) -> EmployeeIndex {
    let fields = &config.employee_fields;
    let mut index = EmployeeIndex::new();

    for root in roots {
        probe::walk_objects(root, &mut |node| {
            for container in &fields.containers {
                let Some(Value::Array(items)) = node.get(container) else {
                    continue;
                };
                for item in items {
                    map_employee(&mut index, item, fields);
                }
            }
        });
    }

    debug!(employees = index.len(), "built employee index");
    index
}

fn map_employee(index: &mut EmployeeIndex, record: &Value, fields: &EmployeeFieldConfig) {
    if !record.is_object() {
        return;
    }

    let Some(name) = resolve_display_name(record, fields) else {
        return;
    };

    let reference = probe::first_field(record, &fields.ref_fields);
    let id = probe::resolve_identifier(
        reference,
        record,
        &fields.ref_id_fields,
        &fields.record_id_fields,
    );
    let qualifier = probe::resolve_identifier(
        reference,
        record,
        &fields.ref_qualifier_fields,
        &fields.record_qualifier_fields,
    );

    if let Some(id) = id {
        index.insert(id, name.clone());
    }
    if let Some(qualifier) = qualifier {
        index.insert(qualifier, name);
    }
}

/// Resolves a display name: the first non-empty name field, falling back to
/// the space-joined non-empty name parts (first/last name).
///
/// An empty name field does not short-circuit the chain; later name fields
/// are still tried.
fn resolve_display_name(record: &Value, fields: &EmployeeFieldConfig) -> Option<String> {
    let direct = fields.name_fields.iter().find_map(|field| {
        probe::field(record, field)
            .and_then(probe::scalar_string)
            .filter(|name| !name.is_empty())
    });
    if direct.is_some() {
        return direct;
    }

    let parts: Vec<String> = fields
        .name_part_fields
        .iter()
        .filter_map(|field| probe::field(record, field).and_then(probe::scalar_string))
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn build(roots: Vec<Value>) -> EmployeeIndex {
        build_employee_index(&roots, &CaptureConfig::default())
    }

    #[test]
    fn test_maps_id_and_qualifier_to_full_name() {
        let index = build(vec![json!({
            "employees": [
                {"id": 88412, "qualifier": "1001", "fullName": "Jane Doe"}
            ]
        })]);
        assert_eq!(index.get("88412"), Some("Jane Doe"));
        assert_eq!(index.get("1001"), Some("Jane Doe"));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_name_fallback_order() {
        let index = build(vec![json!({
            "employees": [
                {"id": 1, "name": "J. Doe"},
                {"id": 2, "firstName": "John", "lastName": "Smith"},
                {"id": 3, "firstName": "Cher"},
                {"id": 4, "fullName": "Full Name", "name": "ignored"}
            ]
        })]);
        assert_eq!(index.get("1"), Some("J. Doe"));
        assert_eq!(index.get("2"), Some("John Smith"));
        assert_eq!(index.get("3"), Some("Cher"));
        assert_eq!(index.get("4"), Some("Full Name"));
    }

    #[test]
    fn test_empty_name_field_falls_through_to_next() {
        let index = build(vec![json!({
            "employees": [
                {"id": 1, "fullName": "", "name": "J. Doe"},
                {"id": 2, "fullName": "", "name": "", "firstName": "John", "lastName": "Smith"}
            ]
        })]);
        assert_eq!(index.get("1"), Some("J. Doe"));
        assert_eq!(index.get("2"), Some("John Smith"));
    }

    #[test]
    fn test_unnamed_elements_are_skipped() {
        let index = build(vec![json!({
            "employees": [
                {"id": 1},
                {"id": 2, "firstName": "", "lastName": ""},
                "not an object"
            ]
        })]);
        assert!(index.is_empty());
    }

    #[test]
    fn test_identifiers_resolved_through_person_ref() {
        let index = build(vec![json!({
            "employeeList": [
                {"personRef": {"id": 555, "qualifier": "1002"}, "fullName": "John Smith"}
            ]
        })]);
        assert_eq!(index.get("555"), Some("John Smith"));
        assert_eq!(index.get("1002"), Some("John Smith"));
    }

    #[test]
    fn test_record_fallback_fields() {
        let index = build(vec![json!({
            "employees": [
                {"employeeId": 777, "employeeNumber": "1003", "fullName": "Amy Wong"}
            ]
        })]);
        assert_eq!(index.get("777"), Some("Amy Wong"));
        assert_eq!(index.get("1003"), Some("Amy Wong"));
    }

    #[test]
    fn test_containers_found_in_nested_subtrees() {
        let index = build(vec![json!({
            "data": {"page": {"employees": [{"id": 1, "fullName": "Jane Doe"}]}}
        })]);
        assert_eq!(index.get("1"), Some("Jane Doe"));
    }

    #[test]
    fn test_later_entries_overwrite_within_build() {
        let index = build(vec![json!({
            "employees": [
                {"id": 1, "fullName": "Old Name"},
                {"id": 1, "fullName": "New Name"}
            ]
        })]);
        assert_eq!(index.get("1"), Some("New Name"));
    }
}
