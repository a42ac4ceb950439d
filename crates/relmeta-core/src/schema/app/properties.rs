use indexmap::IndexMap;
use std::ops::Index;

/// Maps each property access path of an entity to the property's name.
///
/// Inverse-side resolvers receive this map for the related entity and pick
/// the property representing the opposite end of a relation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertiesMap {
    entries: IndexMap<String, String>,
}

impl PropertiesMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a top-level property, whose access path is its own name.
    pub fn insert(&mut self, property_name: impl Into<String>) {
        let name = property_name.into();
        self.entries.insert(name.clone(), name);
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(path, name)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(path, name)| (path.as_str(), name.as_str()))
    }
}

impl Index<&str> for PropertiesMap {
    type Output = str;

    #[track_caller]
    fn index(&self, path: &str) -> &str {
        match self.get(path) {
            Some(name) => name,
            None => panic!("no property with access path `{path}`"),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for PropertiesMap {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut map = Self::new();
        for name in iter {
            map.insert(name);
        }
        map
    }
}
