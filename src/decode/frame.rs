//! Transport frame unwrapping.
//!
//! The stream delivers SockJS-style frames: an `a`-prefixed JSON array whose
//! elements are themselves JSON-encoded strings (occasionally inline
//! objects), or a plain JSON document. A frame that fails to parse is not an
//! error, it simply carries nothing relevant.

use serde_json::Value;
use tracing::debug;

use super::probe;

/// Unwraps one raw frame into zero or more JSON root values.
///
/// For an `a`-prefixed array frame every string element is parsed again as
/// JSON (elements that fail to parse are skipped, not the whole frame) and
/// every object or array element is taken as-is. Any other frame text is parsed once
/// as a single root. A top-level parse failure yields an empty list.
///
/// # Example
///
/// ```
/// use roster_export::decode::decode_frame;
///
/// let roots = decode_frame(r#"a["{\"name\":\"ping\"}"]"#);
/// assert_eq!(roots.len(), 1);
/// assert_eq!(roots[0]["name"], "ping");
///
/// assert!(decode_frame("h").is_empty());
/// ```
pub fn decode_frame(text: &str) -> Vec<Value> {
    let mut roots = Vec::new();

    if let Some(rest) = text.strip_prefix('a') {
        let Ok(Value::Array(items)) = serde_json::from_str::<Value>(rest) else {
            debug!(frame_len = text.len(), "frame is not a parseable array");
            return roots;
        };
        for item in items {
            match item {
                Value::String(encoded) => {
                    match serde_json::from_str::<Value>(&encoded) {
                        Ok(Value::Null) | Err(_) => {}
                        Ok(root) => roots.push(root),
                    }
                }
                Value::Object(_) | Value::Array(_) => roots.push(item),
                _ => {}
            }
        }
        return roots;
    }

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Null) | Err(_) => {}
        Ok(root) => roots.push(root),
    }
    roots
}

/// Returns true if any root carries a string `name` field starting with the
/// given message-name prefix.
///
/// The transport collaborator owns this filter; the helper is provided so
/// transport implementations agree on what "relevant" means.
pub fn frame_is_relevant(roots: &[Value], name_prefix: &str) -> bool {
    roots.iter().any(|root| {
        probe::field(root, "name")
            .and_then(Value::as_str)
            .is_some_and(|name| name.starts_with(name_prefix))
    })
}
