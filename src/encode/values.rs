use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Target of an encode call: a `key -> [value]` map in the shape query
/// string and form body builders consume.
pub trait ValueMap {
    /// Replaces whatever is stored under `key` with the single `value`.
    fn set(&mut self, key: &str, value: String);
}

impl<S: BuildHasher> ValueMap for HashMap<String, Vec<String>, S> {
    fn set(&mut self, key: &str, value: String) {
        self.insert(key.to_string(), vec![value]);
    }
}

impl ValueMap for BTreeMap<String, Vec<String>> {
    fn set(&mut self, key: &str, value: String) {
        self.insert(key.to_string(), vec![value]);
    }
}

impl<S: BuildHasher> ValueMap for IndexMap<String, Vec<String>, S> {
    fn set(&mut self, key: &str, value: String) {
        self.insert(key.to_string(), vec![value]);
    }
}
