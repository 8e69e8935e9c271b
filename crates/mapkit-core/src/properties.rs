//! Custom key/value properties attached to maps and map objects

use std::collections::BTreeMap;

/// Ordered set of custom properties
pub type Properties = BTreeMap<String, String>;

/// Keys present in `new` whose value differs from `old`, plus keys removed from `old`
pub fn changed_keys(old: &Properties, new: &Properties) -> Vec<String> {
    let mut keys: Vec<String> = new
        .iter()
        .filter(|(key, value)| old.get(*key) != Some(*value))
        .map(|(key, _)| key.clone())
        .collect();
    keys.extend(old.keys().filter(|key| !new.contains_key(*key)).cloned());
    keys.sort();
    keys
}
