//! Case-insensitive header storage shared by requests and responses.
//!
//! Names are lowercased on insert and compared case-insensitively on lookup, so
//! `Content-Length` and `content-length` always address the same entry. Each name
//! maps to exactly one value: setting an existing name replaces the old entry in
//! place.
//!
//! Entries iterate in the order their names were first inserted. Replacing a value
//! keeps the entry where it was, which makes serialized output deterministic.

use std::fmt;

/// An owned, case-insensitive `name -> value` header map.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: Vec::with_capacity(capacity) }
    }

    /// Stores `value` under the lowercased `name`.
    ///
    /// If the name is already present the previous name and value are dropped and
    /// the new pair takes their slot, so the number of entries is unchanged.
    pub fn set<N, V>(&mut self, name: N, value: V)
    where
        N: AsRef<str>,
        V: Into<String>,
    {
        let name = name.as_ref().to_ascii_lowercase();
        let value = value.into();

        match self.position(&name) {
            Some(index) => self.entries[index] = (name, value),
            None => self.entries.push((name, value)),
        }
    }

    /// Returns the value stored for `name`, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|index| self.entries[index].1.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Removes the entry for `name` and returns its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.position(name).map(|index| self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates `(name, value)` pairs; names are always lowercase.
    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.entries.iter() }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(key, _)| key.eq_ignore_ascii_case(name))
    }
}

impl fmt::Debug for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Iterator over the entries of a [`Headers`] map.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (String, String)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Headers {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N: AsRef<str>, V: Into<String>> Extend<(N, V)> for Headers {
    fn extend<I: IntoIterator<Item = (N, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}

impl<N: AsRef<str>, V: Into<String>> FromIterator<(N, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        headers.extend(iter);
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_insensitive_get_and_set() {
        let mut headers = Headers::new();
        headers.set("X-Foo", "Bar");

        assert_eq!(headers.get("x-foo"), Some("Bar"));
        assert_eq!(headers.get("X-FOO"), Some("Bar"));
        assert_eq!(headers.get("x-bar"), None);
        assert_eq!(headers.iter().next(), Some(("x-foo", "Bar")));
    }

    #[test]
    fn set_replaces_instead_of_duplicating() {
        let mut headers = Headers::new();
        headers.set("Host", "a");
        headers.set("X-Foo", "Bar");
        assert_eq!(headers.len(), 2);

        headers.set("X-FOO", "Baz");
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("x-foo"), Some("Baz"));

        // replacement keeps the original slot
        let names: Vec<_> = headers.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["host", "x-foo"]);
    }

    #[test]
    fn remove_and_clear() {
        let mut headers: Headers = [("Accept", "*/*"), ("Host", "localhost")].into_iter().collect();

        assert!(headers.contains("ACCEPT"));
        assert_eq!(headers.remove("accept"), Some("*/*".to_string()));
        assert!(!headers.contains("accept"));
        assert_eq!(headers.remove("accept"), None);
        assert_eq!(headers.len(), 1);

        headers.clear();
        assert!(headers.is_empty());
    }

    #[test]
    fn debug_shows_entries() {
        let headers: Headers = [("Content-Type", "text/plain")].into_iter().collect();
        assert_eq!(format!("{headers:?}"), r#"{"content-type": "text/plain"}"#);
    }
}
