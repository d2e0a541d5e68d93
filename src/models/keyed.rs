use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A JSON object keyed by record identifier, kept in the order the API sent it.
///
/// `null` deserializes to an empty collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyed<T>(pub IndexMap<String, T>);

impl<T> Default for Keyed<T> {
    fn default() -> Self {
        Keyed(IndexMap::new())
    }
}

impl<T> Keyed<T> {
    pub fn get(&self, key: &str) -> Option<&T> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.values()
    }

    /// Appends `value` under `key`. A key already present keeps its first value.
    pub fn push(&mut self, key: impl Into<String>, value: T) {
        self.0.entry(key.into()).or_insert(value);
    }
}

impl<T: Serialize> Serialize for Keyed<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Keyed<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Option::<IndexMap<String, T>>::deserialize(deserializer)?;
        Ok(Keyed(map.unwrap_or_default()))
    }
}
