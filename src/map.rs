//! Insertion-ordered mapping from field names to error nodes
//!
//! `ErrorMap` is what validators assemble before handing it to
//! [`ValidationResult::new`](crate::ValidationResult::new). Fields keep the
//! order in which they were first inserted, so reports list fields in the
//! order they were checked.
//!
//! # Examples
//!
//! ```
//! use verdict::ErrorMap;
//!
//! let mut errors = ErrorMap::new();
//! errors.insert("email", vec!["Invalid email"]);
//! errors.insert("address", ErrorMap::from([("street", vec!["Required"])]));
//!
//! assert_eq!(errors.keys().collect::<Vec<_>>(), ["email", "address"]);
//! ```

use indexmap::IndexMap;

use crate::node::{ErrorNode, ErrorValue};

/// Ordered `field -> ErrorNode` mapping.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ErrorMap {
    fields: IndexMap<String, ErrorNode>,
}

impl ErrorMap {
    /// Create an empty mapping.
    pub fn new() -> Self {
        ErrorMap {
            fields: IndexMap::new(),
        }
    }

    /// Record the errors for `field`.
    ///
    /// Replacing an existing field keeps its original position and returns
    /// the previous node.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::{ErrorMap, ErrorNode};
    ///
    /// let mut errors = ErrorMap::new();
    /// errors.insert("email", vec!["Invalid email"]);
    /// errors.insert("name", vec!["Required"]);
    /// let previous = errors.insert("email", vec!["Already taken"]);
    ///
    /// assert_eq!(previous, Some(ErrorNode::from(vec!["Invalid email"])));
    /// assert_eq!(errors.keys().next(), Some("email"));
    /// ```
    pub fn insert(
        &mut self,
        field: impl Into<String>,
        node: impl Into<ErrorNode>,
    ) -> Option<ErrorNode> {
        self.fields.insert(field.into(), node.into())
    }

    /// Key under which a nested mapping keeps messages about the field
    /// itself rather than one of its sub-fields.
    ///
    /// [`flatten`](Self::flatten) reports these messages under the parent's
    /// own path.
    pub const OWN_MESSAGES: &'static str = "";

    /// Append one message for `field`, creating a leaf if the field is absent.
    ///
    /// When `field` already holds a nested mapping, the message goes to that
    /// mapping's [`OWN_MESSAGES`](Self::OWN_MESSAGES) leaf so the sub-field
    /// errors are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::ErrorMap;
    ///
    /// let mut errors = ErrorMap::new();
    /// errors.push_message("password", "Too short");
    /// errors.push_message("password", "Missing digit");
    /// assert_eq!(errors.get("password").map(|node| node.len()), Some(2));
    ///
    /// errors.insert("address", ErrorMap::from([("street", vec!["Required"])]));
    /// errors.push_message("address", "Outside delivery area");
    ///
    /// let paths: Vec<String> = errors
    ///     .flatten()
    ///     .into_iter()
    ///     .map(|(path, message)| format!("{}: {}", path, message))
    ///     .collect();
    /// assert_eq!(
    ///     paths,
    ///     [
    ///         "password: Too short",
    ///         "password: Missing digit",
    ///         "address.street: Required",
    ///         "address: Outside delivery area",
    ///     ]
    /// );
    /// ```
    pub fn push_message(&mut self, field: impl Into<String>, message: impl Into<ErrorValue>) {
        match self
            .fields
            .entry(field.into())
            .or_insert_with(ErrorNode::default)
        {
            ErrorNode::Messages(messages) => messages.push(message.into()),
            ErrorNode::Nested(nested) => nested.push_message(Self::OWN_MESSAGES, message),
        }
    }

    /// Errors recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&ErrorNode> {
        self.fields.get(field)
    }

    /// Returns `true` if `field` is present, even with an empty node.
    pub fn contains_key(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Number of top-level fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no field is present.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    /// `(field, node)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ErrorNode)> + '_ {
        self.fields.iter().map(|(field, node)| (field.as_str(), node))
    }

    /// Every leaf message paired with its dotted field path.
    ///
    /// Nested mappings are walked depth-first in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::ErrorMap;
    ///
    /// let errors = ErrorMap::from([(
    ///     "address",
    ///     ErrorMap::from([("street", vec!["Required"]), ("city", vec!["Invalid"])]),
    /// )]);
    ///
    /// let paths: Vec<String> = errors
    ///     .flatten()
    ///     .into_iter()
    ///     .map(|(path, message)| format!("{}: {}", path, message))
    ///     .collect();
    /// assert_eq!(paths, ["address.street: Required", "address.city: Invalid"]);
    /// ```
    pub fn flatten(&self) -> Vec<(String, &ErrorValue)> {
        let mut out = Vec::new();
        collect_messages(self, None, &mut out);
        out
    }
}

/// Dotted path of `field` below `prefix`; own messages take the parent path.
pub(crate) fn field_path(prefix: Option<&str>, field: &str) -> String {
    match prefix {
        Some(prefix) if field == ErrorMap::OWN_MESSAGES => prefix.to_string(),
        Some(prefix) => format!("{}.{}", prefix, field),
        None => field.to_string(),
    }
}

fn collect_messages<'a>(
    errors: &'a ErrorMap,
    prefix: Option<&str>,
    out: &mut Vec<(String, &'a ErrorValue)>,
) {
    for (field, node) in errors.iter() {
        let path = field_path(prefix, field);
        match node {
            ErrorNode::Messages(messages) => {
                out.extend(messages.iter().map(|message| (path.clone(), message)));
            }
            ErrorNode::Nested(nested) => collect_messages(nested, Some(&path), out),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ErrorMap
where
    K: Into<String>,
    V: Into<ErrorNode>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut errors = ErrorMap::new();
        errors.extend(iter);
        errors
    }
}

impl<K, V> Extend<(K, V)> for ErrorMap
where
    K: Into<String>,
    V: Into<ErrorNode>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (field, node) in iter {
            self.insert(field, node);
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for ErrorMap
where
    K: Into<String>,
    V: Into<ErrorNode>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl IntoIterator for ErrorMap {
    type Item = (String, ErrorNode);
    type IntoIter = indexmap::map::IntoIter<String, ErrorNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorMap {
    type Item = (&'a String, &'a ErrorNode);
    type IntoIter = indexmap::map::Iter<'a, String, ErrorNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_insertion_order() {
        let errors = ErrorMap::from([
            ("username", vec!["Already taken"]),
            ("email", vec!["Invalid email"]),
            ("password", vec!["Too short"]),
        ]);
        assert_eq!(
            errors.keys().collect::<Vec<_>>(),
            ["username", "email", "password"]
        );
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut errors = ErrorMap::new();
        errors.insert("a", vec!["one"]);
        errors.insert("b", vec!["two"]);
        errors.insert("a", vec!["three"]);

        assert_eq!(errors.keys().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(errors.get("a"), Some(&ErrorNode::from(vec!["three"])));
    }

    #[test]
    fn test_push_message_appends_to_leaf() {
        let mut errors = ErrorMap::from([("email", vec!["Invalid email"])]);
        errors.push_message("email", "Already taken");
        errors.push_message("code", 42);

        assert_eq!(
            errors.get("email"),
            Some(&ErrorNode::from(vec!["Invalid email", "Already taken"]))
        );
        assert_eq!(errors.get("code"), Some(&ErrorNode::from(vec![42])));
        assert_eq!(errors.keys().collect::<Vec<_>>(), ["email", "code"]);
    }

    #[test]
    fn test_push_message_keeps_nested_errors() {
        let mut errors = ErrorMap::from([(
            "address",
            ErrorMap::from([("street", vec!["Required"])]),
        )]);

        errors.push_message("address", "Required");
        errors.push_message("address", "Invalid");

        let expected = ErrorMap::from([
            ("street", vec!["Required"]),
            (ErrorMap::OWN_MESSAGES, vec!["Required", "Invalid"]),
        ]);
        assert_eq!(errors.get("address"), Some(&ErrorNode::Nested(expected)));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_flatten_reports_own_messages_under_parent_path() {
        let mut errors = ErrorMap::from([(
            "address",
            ErrorMap::from([("street", vec!["Required"])]),
        )]);
        errors.push_message("address", "Required");

        let flat: Vec<(String, String)> = errors
            .flatten()
            .into_iter()
            .map(|(path, message)| (path, message.to_string()))
            .collect();

        assert_eq!(
            flat,
            vec![
                ("address.street".to_string(), "Required".to_string()),
                ("address".to_string(), "Required".to_string()),
            ]
        );
    }

    #[test]
    fn test_contains_key_with_empty_node() {
        let errors = ErrorMap::from([("email", Vec::<String>::new())]);
        assert!(errors.contains_key("email"));
        assert!(!errors.contains_key("password"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_extend_and_collect() {
        let mut errors: ErrorMap = vec![("a", vec!["x"])].into_iter().collect();
        errors.extend([("b", vec!["y"])]);
        assert_eq!(errors.len(), 2);
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_flatten_nested_paths() {
        let errors = ErrorMap::from([
            ("email", ErrorNode::from(vec!["Invalid email"])),
            (
                "address",
                ErrorNode::from(ErrorMap::from([
                    ("street", ErrorNode::from(vec!["Required"])),
                    (
                        "geo",
                        ErrorNode::from(ErrorMap::from([("lat", vec![91])])),
                    ),
                ])),
            ),
        ]);

        let flat: Vec<(String, String)> = errors
            .flatten()
            .into_iter()
            .map(|(path, message)| (path, message.to_string()))
            .collect();

        assert_eq!(
            flat,
            vec![
                ("email".to_string(), "Invalid email".to_string()),
                ("address.street".to_string(), "Required".to_string()),
                ("address.geo.lat".to_string(), "91".to_string()),
            ]
        );
    }

    #[test]
    fn test_flatten_skips_empty_leaves() {
        let errors = ErrorMap::from([("email", Vec::<String>::new())]);
        assert!(errors.flatten().is_empty());
    }

    #[test]
    fn test_owned_iteration() {
        let errors = ErrorMap::from([("a", vec!["x"]), ("b", vec!["y"])]);
        let fields: Vec<String> = errors.into_iter().map(|(field, _)| field).collect();
        assert_eq!(fields, ["a", "b"]);
    }
}
