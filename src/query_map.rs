/// Value of a query key: a single string, or an ordered sequence of strings
/// when the source query contained the key more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    One(String),
    Many(Vec<String>),
}

impl QueryValue {
    /// First value in order of appearance.
    pub fn first(&self) -> &str {
        match self {
            Self::One(v) => v,
            Self::Many(vs) => vs.first().map_or("", String::as_str),
        }
    }

    /// All values in order of appearance.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        match self {
            Self::One(v) => core::slice::from_ref(v).iter().map(String::as_str),
            Self::Many(vs) => vs.as_slice().iter().map(String::as_str),
        }
    }

    pub fn is_many(&self) -> bool {
        matches!(self, Self::Many(_))
    }

    fn push(&mut self, value: String) {
        match self {
            Self::One(v) => *self = Self::Many(vec![core::mem::take(v), value]),
            Self::Many(vs) => vs.push(value),
        }
    }
}

/// Flat mapping from query key to scalar-or-array value, in insertion order.
///
/// A key is present at most once; its value is [`QueryValue::Many`] iff the
/// source entries contained the key more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMap {
    entries: Vec<(String, QueryValue)>,
}

impl QueryMap {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Collapse an ordered sequence of key/value pairs into a mapping,
    /// merging repeated keys into arrays.
    ///
    /// An alternative to plain map collection that keeps duplicate keys:
    /// the first occurrence of a key stores a scalar, the second converts it
    /// to a two-element array, further occurrences append.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut map = Self::new();
        for (key, value) in entries {
            match map.entries.iter_mut().find(|(k, _)| k == key) {
                Some((_, existing)) => existing.push(value.to_string()),
                None => map
                    .entries
                    .push((key.to_string(), QueryValue::One(value.to_string()))),
            }
        }
        map
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_entries() {
        let map = QueryMap::from_entries([]);
        assert!(map.is_empty());
    }

    #[test]
    fn test_single_key_stays_scalar() {
        let map = QueryMap::from_entries([("c", "c1")]);
        assert_eq!(map.get("c"), Some(&QueryValue::One("c1".to_string())));
        assert!(!map.get("c").is_some_and(QueryValue::is_many));
    }

    #[test]
    fn test_duplicate_key_collapses_to_array() {
        let map = QueryMap::from_entries([("c", "c1"), ("c", "c2")]);
        assert_eq!(
            map.get("c"),
            Some(&QueryValue::Many(vec!["c1".to_string(), "c2".to_string()]))
        );
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_third_occurrence_appends() {
        let map = QueryMap::from_entries([("c", "c1"), ("c", "c2"), ("c", "c3")]);
        let values: Vec<&str> = map.get("c").into_iter().flat_map(QueryValue::iter).collect();
        assert_eq!(values, vec!["c1", "c2", "c3"]);
    }

    #[test]
    fn test_mixed_keys_keep_order() {
        let map = QueryMap::from_entries([("a", "1"), ("b", "2"), ("a", "3")]);
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(
            map.get("a"),
            Some(&QueryValue::Many(vec!["1".to_string(), "3".to_string()]))
        );
        assert_eq!(map.get("b"), Some(&QueryValue::One("2".to_string())));
    }

    #[test]
    fn test_first_value() {
        let map = QueryMap::from_entries([("c", "c1"), ("c", "c2")]);
        assert_eq!(map.get("c").map(QueryValue::first), Some("c1"));
    }
}
