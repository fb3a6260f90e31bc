//! Ordered request parameters and their canonical serialization.
//!
//! The request checksum is computed over the serialized parameter string,
//! so serialization must be deterministic: pairs keep the caller's
//! insertion order, values are trimmed and form-urlencoded, and pairs are
//! joined with `&`. The same string is then reused verbatim in the request
//! URL; serializing twice can never disagree with itself.

use url::form_urlencoded;

/// An ordered mapping of request parameters with unique names.
///
/// Insertion order is what the serialized query string preserves. Inserting
/// a name that is already present replaces its value in place without
/// moving the pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    entries: Vec<(String, String)>,
}

impl Parameters {
    /// Creates an empty parameter mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, consuming and returning the mapping.
    ///
    /// Lets a full mapping be built in one expression:
    ///
    /// ```
    /// use bbb_client::Parameters;
    ///
    /// let params = Parameters::new()
    ///     .with("meetingId", "demo-101")
    ///     .with("meetingName", "Weekly Sync");
    /// assert_eq!(params.get("meetingId"), Some("demo-101"));
    /// ```
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts a parameter, replacing the value in place if the name exists.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|entry| entry.0 == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Returns the value stored under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.0 == name)
            .map(|entry| entry.1.as_str())
    }

    /// Number of parameters in the mapping.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping holds no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|entry| (entry.0.as_str(), entry.1.as_str()))
    }

    /// Serializes the mapping as `name=value` pairs joined with `&`.
    ///
    /// Values are trimmed of surrounding whitespace and then
    /// `application/x-www-form-urlencoded`-encoded, so a space becomes `+`.
    /// Names are emitted verbatim. An empty mapping serializes to the empty
    /// string.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut query = String::new();
        for (name, value) in &self.entries {
            if !query.is_empty() {
                query.push('&');
            }
            query.push_str(name);
            query.push('=');
            query.extend(form_urlencoded::byte_serialize(value.trim().as_bytes()));
        }
        query
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut params = Parameters::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_preserves_insertion_order() {
        let params = Parameters::new()
            .with("meetingId", "abc")
            .with("meetingName", "Test")
            .with("attendeePW", "ap");

        assert_eq!(
            params.to_query_string(),
            "meetingId=abc&meetingName=Test&attendeePW=ap"
        );
    }

    #[test]
    fn test_values_are_trimmed_and_encoded() {
        let params = Parameters::new().with("meetingName", "  Weekly Sync  ");
        assert_eq!(params.to_query_string(), "meetingName=Weekly+Sync");
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        let params = Parameters::new().with("meetingName", "Q&A: 50% off?");
        assert_eq!(params.to_query_string(), "meetingName=Q%26A%3A+50%25+off%3F");
    }

    #[test]
    fn test_non_ascii_values_are_percent_encoded() {
        let params = Parameters::new().with("meetingName", "café");
        assert_eq!(params.to_query_string(), "meetingName=caf%C3%A9");
    }

    #[test]
    fn test_insert_replaces_value_in_place() {
        let mut params = Parameters::new()
            .with("meetingId", "abc")
            .with("meetingName", "First");
        params.insert("meetingId", "xyz");

        assert_eq!(params.get("meetingId"), Some("xyz"));
        assert_eq!(params.len(), 2);
        // The replaced pair keeps its original position.
        assert_eq!(params.to_query_string(), "meetingId=xyz&meetingName=First");
    }

    #[test]
    fn test_empty_mapping_serializes_to_empty_string() {
        let params = Parameters::new();
        assert!(params.is_empty());
        assert_eq!(params.to_query_string(), "");
    }

    #[test]
    fn test_get_missing_name_returns_none() {
        let params = Parameters::new().with("meetingId", "abc");
        assert_eq!(params.get("password"), None);
    }

    #[test]
    fn test_from_iterator_collects_pairs_in_order() {
        let params: Parameters = vec![("a", "1"), ("b", "2"), ("a", "3")]
            .into_iter()
            .collect();

        assert_eq!(params.len(), 2);
        assert_eq!(params.to_query_string(), "a=3&b=2");
    }

    #[test]
    fn test_iter_yields_pairs_in_insertion_order() {
        let params = Parameters::new().with("x", "1").with("y", "2");
        let pairs: Vec<(&str, &str)> = params.iter().collect();
        assert_eq!(pairs, vec![("x", "1"), ("y", "2")]);
    }

    #[test]
    fn test_whitespace_only_value_serializes_empty() {
        let params = Parameters::new().with("meetingId", "   ");
        assert_eq!(params.to_query_string(), "meetingId=");
    }
}
