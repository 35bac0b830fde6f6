use std::collections::BTreeMap;

use serde::Serialize;

/// One parsed configuration object, as flat field-name/value pairs.
///
/// Field values are free text with surrounding quote characters already
/// stripped by the parser. Column ordering is not a property of the record;
/// it is supplied externally by [`KeyOrder`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    /// Store a field value, overwriting any prior value for the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Return the value for a field, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over field name/value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

/// First-seen-order set of field names across all records.
///
/// Defines the output column order: every field name appearing in any record
/// appears exactly once, at the position where it was first registered.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct KeyOrder {
    keys: Vec<String>,
}

impl KeyOrder {
    /// Register a field name. Already-seen names keep their original position.
    pub fn register(&mut self, name: &str) {
        if !self.keys.iter().any(|key| key == name) {
            self.keys.push(name.to_string());
        }
    }

    /// Iterate over field names in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyOrder, Record};

    #[test]
    fn register_keeps_first_seen_order_and_dedups() {
        let mut keys = KeyOrder::default();
        keys.register("name");
        keys.register("subnet");
        keys.register("name");
        keys.register("comment");

        let order: Vec<&str> = keys.iter().collect();
        assert_eq!(order, vec!["name", "subnet", "comment"]);
    }

    #[test]
    fn insert_overwrites_prior_value() {
        let mut record = Record::default();
        record.insert("comment", "first");
        record.insert("comment", "second");

        assert_eq!(record.get("comment"), Some("second"));
        assert_eq!(record.len(), 1);
    }
}
