use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::value::PropertyValue;

/// Ordered mapping from attribute name to value.
///
/// Keeps insertion order; re-inserting an existing name replaces the value in
/// place. Equality ignores order, since two bags holding the same attributes
/// describe the same instance.
#[derive(Debug, Clone, Default)]
pub struct PropertyBag {
    entries: Vec<(String, PropertyValue)>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Insert or replace. Returns the previous value for `name`, if any.
    pub fn insert(&mut self, name: impl Into<String>, value: PropertyValue) -> Option<PropertyValue> {
        let name = name.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<PropertyValue> {
        let pos = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Entries whose names are in `names`, in bag order.
    pub fn only(&self, names: &[&str]) -> PropertyBag {
        self.entries
            .iter()
            .filter(|(key, _)| names.contains(&key.as_str()))
            .cloned()
            .collect()
    }

    /// Entries whose names are not in `names`, in bag order.
    pub fn excluding(&self, names: &[&str]) -> PropertyBag {
        self.entries
            .iter()
            .filter(|(key, _)| !names.contains(&key.as_str()))
            .cloned()
            .collect()
    }

    /// Replace the `owned` slice of this bag with `update`.
    ///
    /// Every owned name is first removed, then the entries of `update` are
    /// inserted. Names outside `owned` keep their value and position; an
    /// `update` entry outside `owned` is ignored.
    pub fn replace_owned(&mut self, owned: &[&str], update: PropertyBag) {
        self.entries.retain(|(key, _)| !owned.contains(&key.as_str()));
        for (name, value) in update.entries {
            if owned.contains(&name.as_str()) {
                self.entries.push((name, value));
            }
        }
    }
}

impl PartialEq for PropertyBag {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(name, value)| other.get(name) == Some(value))
    }
}

impl FromIterator<(String, PropertyValue)> for PropertyBag {
    fn from_iter<I: IntoIterator<Item = (String, PropertyValue)>>(iter: I) -> Self {
        let mut bag = PropertyBag::new();
        for (name, value) in iter {
            bag.insert(name, value);
        }
        bag
    }
}

impl<'a> FromIterator<(&'a str, PropertyValue)> for PropertyBag {
    fn from_iter<I: IntoIterator<Item = (&'a str, PropertyValue)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    }
}

impl IntoIterator for PropertyBag {
    type Item = (String, PropertyValue);
    type IntoIter = std::vec::IntoIter<(String, PropertyValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// Serialized as a plain JSON object, preserving order.
impl Serialize for PropertyBag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PropertyBag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BagVisitor;

        impl<'de> Visitor<'de> for BagVisitor {
            type Value = PropertyBag;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of attribute names to property values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<PropertyBag, A::Error> {
                let mut bag = PropertyBag::new();
                while let Some((name, value)) = access.next_entry::<String, PropertyValue>()? {
                    bag.insert(name, value);
                }
                Ok(bag)
            }
        }

        deserializer.deserialize_map(BagVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PropertyBag {
        [
            ("steward", PropertyValue::string("alice")),
            ("vendorX", PropertyValue::boolean(true)),
            ("confidence", PropertyValue::int(80)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn insert_keeps_order_and_replaces_in_place() {
        let mut bag = sample();
        let previous = bag.insert("vendorX", PropertyValue::boolean(false));
        assert_eq!(previous, Some(PropertyValue::boolean(true)));
        assert_eq!(
            bag.names().collect::<Vec<_>>(),
            vec!["steward", "vendorX", "confidence"]
        );
        assert_eq!(bag.get("vendorX"), Some(&PropertyValue::boolean(false)));
    }

    #[test]
    fn remove_returns_value() {
        let mut bag = sample();
        assert_eq!(bag.remove("steward"), Some(PropertyValue::string("alice")));
        assert_eq!(bag.remove("steward"), None);
        assert_eq!(bag.len(), 2);
    }

    #[test]
    fn equality_ignores_order() {
        let a = sample();
        let b: PropertyBag = [
            ("confidence", PropertyValue::int(80)),
            ("steward", PropertyValue::string("alice")),
            ("vendorX", PropertyValue::boolean(true)),
        ]
        .into_iter()
        .collect();
        assert_eq!(a, b);
        assert_ne!(a, PropertyBag::new());
    }

    #[test]
    fn only_and_excluding_partition_the_bag() {
        let bag = sample();
        let owned = ["confidence", "steward", "missing"];
        let mine = bag.only(&owned);
        let rest = bag.excluding(&owned);
        assert_eq!(mine.names().collect::<Vec<_>>(), vec!["steward", "confidence"]);
        assert_eq!(mine.len() + rest.len(), bag.len());
    }

    #[test]
    fn excluding_keeps_foreign_entries_in_order() {
        let rest = sample().excluding(&["steward", "confidence"]);
        assert_eq!(rest.names().collect::<Vec<_>>(), vec!["vendorX"]);
    }

    #[test]
    fn replace_owned_keeps_foreign_and_drops_cleared() {
        let mut bag = sample();
        let update: PropertyBag = [("steward", PropertyValue::string("bob"))]
            .into_iter()
            .collect();
        bag.replace_owned(&["steward", "confidence"], update);

        assert_eq!(bag.get("steward"), Some(&PropertyValue::string("bob")));
        assert_eq!(bag.get("vendorX"), Some(&PropertyValue::boolean(true)));
        assert!(!bag.contains("confidence"));
    }

    #[test]
    fn replace_owned_ignores_update_outside_owned() {
        let mut bag = sample();
        let update: PropertyBag = [("vendorX", PropertyValue::boolean(false))]
            .into_iter()
            .collect();
        bag.replace_owned(&["steward"], update);
        assert_eq!(bag.get("vendorX"), Some(&PropertyValue::boolean(true)));
        assert!(!bag.contains("steward"));
    }

    #[test]
    fn json_preserves_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        let steward = json.find("steward").unwrap();
        let vendor = json.find("vendorX").unwrap();
        let confidence = json.find("confidence").unwrap();
        assert!(steward < vendor && vendor < confidence);

        let back: PropertyBag = serde_json::from_str(&json).unwrap();
        assert_eq!(
            back.names().collect::<Vec<_>>(),
            vec!["steward", "vendorX", "confidence"]
        );
    }
}
