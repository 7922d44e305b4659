//! Shift record collection and normalization.
//!
//! Each payload is an untyped JSON tree whose shape varies between vendor
//! message types. Collection walks every object node looking for the
//! configured container properties (`shifts`, `employeeShifts`,
//! `scheduleItems` by default) and runs every container element through a
//! permissive-source, strict-filter normalizer: field names are probed
//! through redundant fallback chains, but breaks, meal periods, time off,
//! availability records, and open shifts are all rejected outright.

use serde_json::Value;
use tracing::debug;

use crate::config::{CaptureConfig, ShiftFieldConfig};
use crate::models::{EmployeeRef, RawInstant, Shift};

use super::probe;

/// Collects every normalizable shift from a payload's JSON roots.
///
/// The traversal is a full recursive pre-order walk; results across all
/// containers and all roots are returned as one flat sequence in traversal
/// order. The output may contain duplicates when the same shift appears in
/// more than one subtree; callers are expected to deduplicate.
pub fn collect_shifts(roots: &[Value], config: &CaptureConfig) -> Vec<Shift> {
    let fields = &config.shift_fields;
    let mut shifts = Vec::new();

    for root in roots {
        probe::walk_objects(root, &mut |node| {
            for container in &fields.containers {
                let Some(Value::Array(items)) = node.get(container) else {
                    continue;
                };
                for item in items {
                    if let Some(shift) = normalize_shift(item, fields) {
                        shifts.push(shift);
                    }
                }
            }
        });
    }

    debug!(shifts = shifts.len(), roots = roots.len(), "collected shifts");
    shifts
}

/// Normalizes one raw container element into a canonical [`Shift`].
///
/// Rejection conditions, in order:
/// 1. the element is not an object;
/// 2. its kind string (first present of the configured kind fields) matches
///    an excluded phrase such as `BREAK`, `MEAL`, `TIME OFF`, or `AVAIL`;
/// 3. any configured open-shift flag is boolean `true`;
/// 4. no start or no end value is present (string or number);
/// 5. no employee reference is found, or neither an id nor a qualifier can
///    be resolved from it (or from fallback fields on the element itself).
///
/// Start and end are kept in their raw representation; temporal parsing is
/// deferred to date bucketing and export.
pub fn normalize_shift(record: &Value, fields: &ShiftFieldConfig) -> Option<Shift> {
    if !record.is_object() {
        return None;
    }

    let kind = probe::first_scalar(record, &fields.kind_fields)
        .unwrap_or_default()
        .to_uppercase();
    if kind_is_excluded(&kind, &fields.excluded_kinds) {
        return None;
    }

    for flag in &fields.open_flags {
        if record.get(flag) == Some(&Value::Bool(true)) {
            return None;
        }
    }

    let start = RawInstant::from_value(probe::first_field(record, &fields.start_fields)?)?;
    let end = RawInstant::from_value(probe::first_field(record, &fields.end_fields)?)?;

    let reference = probe::first_path(record, &fields.employee_ref_paths)?;
    let employee = EmployeeRef {
        id: probe::resolve_identifier(
            Some(reference),
            record,
            &fields.ref_id_fields,
            &fields.record_id_fields,
        ),
        qualifier: probe::resolve_identifier(
            Some(reference),
            record,
            &fields.ref_qualifier_fields,
            &fields.record_qualifier_fields,
        ),
    };
    if !employee.has_identifier() {
        return None;
    }

    Some(Shift {
        id: probe::first_scalar(record, &fields.id_fields),
        start,
        end,
        employee,
    })
}

/// Returns true if the uppercased kind string matches any excluded phrase.
///
/// A phrase matches as a substring anywhere in the kind; whitespace between
/// a phrase's words matches any run of whitespace in the kind, including
/// none (`TIME OFF` matches `TIMEOFF`, `TIME  OFF`, and `PAID_TIME OFF`).
fn kind_is_excluded(kind: &str, excluded: &[String]) -> bool {
    excluded.iter().any(|phrase| contains_phrase(kind, phrase))
}

fn contains_phrase(haystack: &str, phrase: &str) -> bool {
    let tokens: Vec<&str> = phrase.split_whitespace().collect();
    let Some((first, rest)) = tokens.split_first() else {
        return false;
    };

    let mut search_from = 0;
    while let Some(offset) = haystack[search_from..].find(first) {
        let mut cursor = search_from + offset + first.len();
        let matched = rest.iter().all(|token| {
            let tail = &haystack[cursor..];
            let trimmed = tail.trim_start();
            if trimmed.starts_with(token) {
                cursor += (tail.len() - trimmed.len()) + token.len();
                true
            } else {
                false
            }
        });
        if matched {
            return true;
        }
        // step over the first char of the match so the next find makes progress
        let step = haystack[search_from + offset..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        search_from += offset + step;
    }
    false
}
