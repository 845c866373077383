// Nested map merging and flattening over TOML values

use std::collections::BTreeMap;
use toml::Value;
use toml::map::Map;

/// Deep-merge `from` into `to`.
///
/// Plain `extend` would replace a whole nested table; this walks into
/// tables instead and only overwrites leaves.
///
/// - tables merge key by key, recursively
/// - arrays from `from` are appended to an existing array in `to`
/// - any other value in `from` replaces the value in `to`
///
/// # Examples
/// ```
/// use propis::utils::data::merge;
///
/// let mut to: toml::Table = toml::from_str("[level1]\nparam1 = '1'\nparams2 = { a = 'b' }").unwrap();
/// let from: toml::Table = toml::from_str("[level1]\nparam1 = '2'\nparams2 = { a = 'c', d = 'e' }").unwrap();
/// merge(&mut to, from);
/// let flat = propis::utils::data::flatten(&to);
/// assert_eq!(flat["level1.param1"], "2");
/// assert_eq!(flat["level1.params2.d"], "e");
/// ```
pub fn merge(to: &mut Map<String, Value>, from: Map<String, Value>) {
    for (key, value) in from {
        let value = match (to.get_mut(&key), value) {
            (Some(Value::Table(existing)), Value::Table(incoming)) => {
                merge(existing, incoming);
                continue;
            }
            (Some(Value::Array(existing)), Value::Array(incoming)) => {
                existing.extend(incoming);
                continue;
            }
            (_, value) => value,
        };
        to.insert(key, value);
    }
}

/// Flatten nested tables into dotted keys with display-ready values.
///
/// Strings are printed without quotes; arrays and other scalars use their
/// TOML rendering.
pub fn flatten(table: &Map<String, Value>) -> BTreeMap<String, String> {
    let mut result = BTreeMap::new();
    flatten_into(table, "", &mut result);
    result
}

fn flatten_into(table: &Map<String, Value>, prefix: &str, out: &mut BTreeMap<String, String>) {
    for (key, value) in table {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match value {
            Value::Table(nested) => flatten_into(nested, &path, out),
            Value::String(s) => {
                out.insert(path, s.clone());
            }
            other => {
                out.insert(path, other.to_string());
            }
        }
    }
}
