//! Ordered, lenient query-string model.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A query string parsed into ordered `key=value` pairs.
///
/// Parsing never fails. Segments without an `=` are dropped and only the first
/// `=` of a segment separates key from value, so values such as base64 padding
/// survive intact. Keys are unique: a repeated key keeps its first position and
/// takes the last value seen. Multi-valued keys are not modelled.
///
/// Nothing is percent-decoded or encoded.
///
/// # Examples
///
/// ```
/// use urlkit::QueryString;
///
/// let mut qs = QueryString::new("?id=1&b=2&x=1234=56");
/// assert_eq!(qs.get("x"), Some("1234=56"));
///
/// qs.set("v", 4);
/// qs.delete("b");
/// assert_eq!(qs.to_string(), "id=1&x=1234=56&v=4");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    raw: String,
    pairs: Vec<(String, String)>,
}

impl QueryString {
    /// Parse a raw query string, with or without the leading '?'.
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        let body = trimmed.strip_prefix('?').unwrap_or(trimmed);

        let mut qs = QueryString {
            raw: raw.to_string(),
            pairs: Vec::new(),
        };
        for segment in body.split('&') {
            if let Some((key, value)) = segment.split_once('=') {
                qs.insert(key.to_string(), value.to_string());
            }
        }
        qs
    }

    /// The string this query string was parsed from, untouched.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.position(key).map(|i| self.pairs[i].1.as_str())
    }

    /// Insert or overwrite `key`. New keys go to the end, existing keys keep their place.
    pub fn set(&mut self, key: impl Into<String>, value: impl fmt::Display) {
        self.insert(key.into(), value.to_string());
    }

    /// Remove `key`, returning its value if it was present.
    pub fn delete(&mut self, key: &str) -> Option<String> {
        self.position(key).map(|i| self.pairs.remove(i).1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(k, _)| k.as_str())
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.pairs.iter().position(|(k, _)| k == key)
    }

    fn insert(&mut self, key: String, value: String) {
        match self.position(&key) {
            Some(i) => self.pairs[i].1 = value,
            None => self.pairs.push((key, value)),
        }
    }
}

/// Serializes the pairs as `k=v&k2=v2`, without a leading '?'.
impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}

impl FromStr for QueryString {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(QueryString::new(s))
    }
}

impl From<&str> for QueryString {
    fn from(raw: &str) -> Self {
        QueryString::new(raw)
    }
}

impl<'a> IntoIterator for &'a QueryString {
    type Item = (&'a str, &'a str);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a str)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl<K: Into<String>, V: fmt::Display> Extend<(K, V)> for QueryString {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: Into<String>, V: fmt::Display> FromIterator<(K, V)> for QueryString {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut qs = QueryString::default();
        qs.extend(iter);
        qs.raw = qs.to_string();
        qs
    }
}
