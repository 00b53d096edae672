//! JSON values to the engine's host value model.

use serde_json::{Map, Value};
use trellis_core::{AttrKey, Constraints, Overrides, RawValue};

/// Prefix marking a JSON string as a symbol (`":north"`).
const SYMBOL_PREFIX: char = ':';

/// Convert a JSON value. Objects have no raw counterpart and yield `None`.
pub fn raw_value(value: &Value) -> Option<RawValue> {
    Some(match value {
        Value::Null => RawValue::Nil,
        Value::Bool(b) => RawValue::Bool(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => RawValue::Int(i),
            None => RawValue::Float(n.as_f64()?),
        },
        Value::String(s) => match s.strip_prefix(SYMBOL_PREFIX) {
            Some(name) if !name.is_empty() => RawValue::Symbol(name.to_string()),
            _ => RawValue::Str(s.clone()),
        },
        Value::Array(items) => RawValue::List(items.iter().filter_map(raw_value).collect()),
        Value::Object(_) => return None,
    })
}

/// Convert a JSON object into overrides, skipping the keys in `reserved`.
pub fn overrides(map: &Map<String, Value>, reserved: &[&str]) -> Overrides {
    let mut overrides = Overrides::new();
    for (key, value) in map {
        if reserved.contains(&key.as_str()) {
            continue;
        }
        match raw_value(value) {
            Some(raw) => overrides.insert(attr_key(key), raw),
            None => log::debug!("ignoring nested object for attribute '{}'", key),
        }
    }
    overrides
}

/// Row or cell constraints; anything but an object means "inherit".
pub fn constraints(value: Option<&Value>) -> Option<Constraints> {
    match value? {
        Value::Object(map) => Some(Constraints::Overrides(overrides(map, &[]))),
        Value::Null => None,
        other => {
            log::debug!("ignoring non-object constraints {}", other);
            None
        }
    }
}

fn attr_key(key: &str) -> AttrKey {
    match key.strip_prefix(SYMBOL_PREFIX) {
        Some(name) => AttrKey::Symbol(name.to_string()),
        None => AttrKey::Str(key.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        assert_eq!(raw_value(&json!(null)), Some(RawValue::Nil));
        assert_eq!(raw_value(&json!(3)), Some(RawValue::Int(3)));
        assert_eq!(raw_value(&json!(0.5)), Some(RawValue::Float(0.5)));
        assert_eq!(raw_value(&json!("12")), Some(RawValue::Str("12".into())));
        assert_eq!(raw_value(&json!(":ne")), Some(RawValue::Symbol("ne".into())));
        assert_eq!(raw_value(&json!(":")), Some(RawValue::Str(":".into())));
        assert_eq!(raw_value(&json!({"a": 1})), None);
    }

    #[test]
    fn test_lists() {
        assert_eq!(
            raw_value(&json!([6, 2, {"skip": true}])),
            Some(RawValue::List(vec![RawValue::Int(6), RawValue::Int(2)]))
        );
    }

    #[test]
    fn test_overrides_keep_order_and_skip_reserved() {
        let value = json!({"component": "ok", "wx": 0.7, ":a": ":n", "nested": {"x": 1}});
        let map = value.as_object().unwrap();
        let overrides = overrides(map, &["component"]);

        let keys: Vec<_> = overrides.iter().map(|(k, _)| k.clone()).collect();
        assert_eq!(keys, vec![AttrKey::Str("wx".into()), AttrKey::Symbol("a".into())]);
    }

    #[test]
    fn test_constraints() {
        assert!(constraints(None).is_none());
        assert!(constraints(Some(&json!(null))).is_none());
        assert!(constraints(Some(&json!(42))).is_none());
        assert!(matches!(
            constraints(Some(&json!({"f": "h"}))),
            Some(Constraints::Overrides(o)) if o.len() == 1
        ));
    }
}
