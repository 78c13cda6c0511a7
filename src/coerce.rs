//! Field coercion helpers for [`QuerySchema`](crate::QuerySchema)
//! implementations.
//!
//! Each helper reads one key out of a [`QueryMap`] and coerces it to the
//! field's shape. Missing keys are not an error — every helper maps absence
//! to `None` so optional fields fall out naturally; schemas that require a
//! field turn the `None` into a [`FieldError`] themselves.

use core::fmt::Display;
use core::str::FromStr;

use crate::error::FieldError;
use crate::query_map::{QueryMap, QueryValue};

/// First value for a key, if present.
pub fn string(map: &QueryMap, key: &str) -> Option<String> {
    map.get(key).map(|v| v.first().to_string())
}

/// Parse the first value for a key.
///
/// Missing key yields `Ok(None)`; an unparseable value yields a field error.
pub fn number<T>(map: &QueryMap, key: &str) -> Result<Option<T>, FieldError>
where
    T: FromStr,
    T::Err: Display,
{
    match map.get(key) {
        None => Ok(None),
        Some(value) => value
            .first()
            .parse()
            .map(Some)
            .map_err(|e| FieldError::new(key, format!("invalid number: {e}"))),
    }
}

/// Values for a key as a list of strings.
///
/// A scalar value splits on literal commas; a repeated key passes its values
/// through unchanged.
pub fn string_list(map: &QueryMap, key: &str) -> Option<Vec<String>> {
    map.get(key).map(|value| match value {
        QueryValue::One(v) => v.split(',').map(str::to_string).collect(),
        QueryValue::Many(vs) => vs.clone(),
    })
}

/// Values for a key as a parsed list, with the same splitting rule as
/// [`string_list`].
pub fn number_list<T>(map: &QueryMap, key: &str) -> Result<Option<Vec<T>>, FieldError>
where
    T: FromStr,
    T::Err: Display,
{
    let Some(items) = string_list(map, key) else {
        return Ok(None);
    };
    items
        .iter()
        .map(|item| {
            item.parse()
                .map_err(|e| FieldError::new(key, format!("invalid number: {e}")))
        })
        .collect::<Result<Vec<T>, FieldError>>()
        .map(Some)
}

/// Comma-join a list for re-serialization, the inverse of [`string_list`].
pub fn join_list<S: AsRef<str>>(items: &[S]) -> String {
    let mut joined = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            joined.push(',');
        }
        joined.push_str(item.as_ref());
    }
    joined
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> QueryMap {
        QueryMap::from_entries(entries.iter().copied())
    }

    #[test]
    fn test_string_missing() {
        assert_eq!(string(&map(&[]), "a"), None);
    }

    #[test]
    fn test_string_takes_first() {
        let m = map(&[("a", "x"), ("a", "y")]);
        assert_eq!(string(&m, "a"), Some("x".to_string()));
    }

    #[test]
    fn test_number_parses() {
        let m = map(&[("b", "1")]);
        assert_eq!(number::<u32>(&m, "b"), Ok(Some(1)));
    }

    #[test]
    fn test_number_missing() {
        assert_eq!(number::<u32>(&map(&[]), "b"), Ok(None));
    }

    #[test]
    fn test_number_invalid() {
        let m = map(&[("b", "one")]);
        let err = number::<u32>(&m, "b").unwrap_err();
        assert_eq!(err.key, "b");
    }

    #[test]
    fn test_string_list_splits_scalar() {
        let m = map(&[("c", "c1,c2")]);
        assert_eq!(
            string_list(&m, "c"),
            Some(vec!["c1".to_string(), "c2".to_string()])
        );
    }

    #[test]
    fn test_string_list_passes_repeated_through() {
        let m = map(&[("c", "c1"), ("c", "c2")]);
        assert_eq!(
            string_list(&m, "c"),
            Some(vec!["c1".to_string(), "c2".to_string()])
        );
    }

    #[test]
    fn test_string_list_single_value() {
        let m = map(&[("c", "c1")]);
        assert_eq!(string_list(&m, "c"), Some(vec!["c1".to_string()]));
    }

    #[test]
    fn test_number_list() {
        let m = map(&[("n", "1,2,3")]);
        assert_eq!(number_list::<i64>(&m, "n"), Ok(Some(vec![1, 2, 3])));
    }

    #[test]
    fn test_number_list_invalid_element() {
        let m = map(&[("n", "1,x,3")]);
        assert!(number_list::<i64>(&m, "n").is_err());
    }

    #[test]
    fn test_join_list() {
        assert_eq!(join_list(&["c1", "c2"]), "c1,c2");
        assert_eq!(join_list::<&str>(&[]), "");
    }
}
