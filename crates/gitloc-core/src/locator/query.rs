//! Insertion-ordered locator arguments and their query-string codec.

use serde::ser::{Serialize, SerializeMap, Serializer};
use url::form_urlencoded;

/// Arguments decoded from a locator query, in first-occurrence order.
///
/// Re-inserting an existing name replaces its value but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    entries: Vec<(String, String)>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a form-urlencoded query (`a=1&b=two+words`).
    ///
    /// Names without `=` get an empty value; empty pairs are skipped.
    pub fn parse_query_string(query: &str) -> Self {
        form_urlencoded::parse(query.as_bytes())
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect()
    }

    /// Encodes the arguments back into a query string, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }

    /// Sets `name` to `value`, returning the previous value if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Arguments {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut args = Arguments::new();
        for (name, value) in iter {
            args.insert(name, value);
        }
        args
    }
}

impl Serialize for Arguments {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_pairs_in_order() {
        let args = Arguments::parse_query_string("b=2&a=one%20two&c=x+y");
        let pairs: Vec<_> = args.iter().collect();
        assert_eq!(pairs, vec![("b", "2"), ("a", "one two"), ("c", "x y")]);
    }

    #[test]
    fn name_without_value_is_empty_string() {
        let args = Arguments::parse_query_string("flag&k=v");
        assert!(args.contains("flag"));
        assert_eq!(args.get("flag"), Some(""));
        assert_eq!(args.get("k"), Some("v"));
    }

    #[test]
    fn value_splits_on_first_equals() {
        let args = Arguments::parse_query_string("expr=a=b");
        assert_eq!(args.get("expr"), Some("a=b"));
    }

    #[test]
    fn duplicate_overwrites_in_place() {
        let args = Arguments::parse_query_string("a=1&b=2&a=3");
        let pairs: Vec<_> = args.iter().collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn empty_query_is_empty() {
        let args = Arguments::parse_query_string("");
        assert!(args.is_empty());
        assert_eq!(args.to_query_string(), "");
    }

    #[test]
    fn encodes_reserved_characters() {
        let mut args = Arguments::new();
        args.insert("msg", "fix & test");
        args.insert("path", "a/b");
        assert_eq!(args.to_query_string(), "msg=fix+%26+test&path=a%2Fb");
        assert_eq!(
            Arguments::parse_query_string(&args.to_query_string()),
            args
        );
    }

    #[test]
    fn serializes_as_ordered_map() {
        let args = Arguments::parse_query_string("z=1&a=2");
        let json = serde_json::to_string(&args).unwrap();
        assert_eq!(json, r#"{"z":"1","a":"2"}"#);
    }
}
