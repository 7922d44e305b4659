//! Safe field-probing helpers over untyped JSON values.
//!
//! The upstream schema is duck-typed: every lookup the pipeline performs is a
//! fallback chain over alternate field names. These helpers make each chain an
//! explicit ordered list tried in sequence, with `null` treated the same as
//! an absent field throughout.

use serde_json::{Map, Value};

/// Returns an object's field value, treating JSON `null` as absent.
pub fn field<'a>(node: &'a Value, name: &str) -> Option<&'a Value> {
    match node.get(name) {
        Some(Value::Null) | None => None,
        Some(v) => Some(v),
    }
}

/// Returns the first present field among `names`, in order.
pub fn first_field<'a>(node: &'a Value, names: &[String]) -> Option<&'a Value> {
    names.iter().find_map(|name| field(node, name))
}

/// Resolves a dotted path such as `owner.employeeRef`, treating `null` at any
/// step as absent.
pub fn field_path<'a>(node: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(node, field)
}

/// Returns the first present dotted path among `paths`, in order.
pub fn first_path<'a>(node: &'a Value, paths: &[String]) -> Option<&'a Value> {
    paths.iter().find_map(|path| field_path(node, path))
}

/// Renders a scalar JSON value as an identifier string.
///
/// Strings and numbers are the only value shapes that act as identifiers in
/// the upstream payloads; booleans, arrays, and objects yield `None`.
pub fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Returns the first field among `names` that holds a scalar identifier.
pub fn first_scalar(node: &Value, names: &[String]) -> Option<String> {
    names
        .iter()
        .find_map(|name| field(node, name).and_then(scalar_string))
}

/// Resolves an identifier by trying `ref_fields` on the nested reference
/// first, then `record_fields` on the record itself.
///
/// This is the shared resolution contract for shift employee references and
/// employee-list entries: the nested reference object wins over sibling
/// fields on the record.
pub fn resolve_identifier(
    reference: Option<&Value>,
    record: &Value,
    ref_fields: &[String],
    record_fields: &[String],
) -> Option<String> {
    reference
        .and_then(|r| first_scalar(r, ref_fields))
        .or_else(|| first_scalar(record, record_fields))
}

/// Visits every object node of a JSON tree in pre-order.
///
/// Objects are visited and then recursed into property by property; arrays
/// are recursed element by element without being visited themselves.
pub fn walk_objects<'a>(root: &'a Value, visit: &mut dyn FnMut(&'a Map<String, Value>)) {
    match root {
        Value::Object(map) => {
            visit(map);
            for value in map.values() {
                walk_objects(value, visit);
            }
        }
        Value::Array(items) => {
            for item in items {
                walk_objects(item, visit);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_field_treats_null_as_absent() {
        let node = json!({"a": null, "b": 1});
        assert_eq!(field(&node, "a"), None);
        assert_eq!(field(&node, "b"), Some(&json!(1)));
        assert_eq!(field(&node, "c"), None);
    }

    #[test]
    fn test_first_field_respects_order() {
        let node = json!({"startTime": "08:00", "start": "ignored"});
        let value = first_field(&node, &names(&["startDateTime", "startTime", "start"]));
        assert_eq!(value, Some(&json!("08:00")));
    }

    #[test]
    fn test_field_path_resolves_nested_reference() {
        let node = json!({"owner": {"employeeRef": {"id": 7}}});
        assert_eq!(
            field_path(&node, "owner.employeeRef"),
            Some(&json!({"id": 7}))
        );
        assert_eq!(field_path(&node, "owner.missing"), None);
        assert_eq!(field_path(&node, "absent.employeeRef"), None);
    }

    #[test]
    fn test_scalar_string_accepts_strings_and_numbers() {
        assert_eq!(scalar_string(&json!("1001")), Some("1001".to_string()));
        assert_eq!(scalar_string(&json!(1001)), Some("1001".to_string()));
        assert_eq!(scalar_string(&json!(true)), None);
        assert_eq!(scalar_string(&json!({"id": 1})), None);
    }

    #[test]
    fn test_resolve_identifier_prefers_reference() {
        let reference = json!({"id": 5});
        let record = json!({"employeeId": 9});
        let resolved = resolve_identifier(
            Some(&reference),
            &record,
            &names(&["id"]),
            &names(&["employeeId"]),
        );
        assert_eq!(resolved, Some("5".to_string()));
    }

    #[test]
    fn test_resolve_identifier_falls_back_to_record() {
        let reference = json!({"qualifier": null});
        let record = json!({"employeeNumber": "1001"});
        let resolved = resolve_identifier(
            Some(&reference),
            &record,
            &names(&["qualifier"]),
            &names(&["employeeNumber"]),
        );
        assert_eq!(resolved, Some("1001".to_string()));
    }

    #[test]
    fn test_walk_objects_visits_nested_and_array_members() {
        let root = json!({
            "data": {"shifts": [{"id": 1}, {"id": 2}]},
            "other": [{"id": 3}]
        });
        let mut visited = 0;
        walk_objects(&root, &mut |_| visited += 1);
        // root, data, two shift elements, one array element
        assert_eq!(visited, 5);
    }
}
