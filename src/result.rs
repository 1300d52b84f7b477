//! Immutable validation results
//!
//! A [`ValidationResult`] is a snapshot of every violation a validator found,
//! keyed by field. It is built once and then only queried: every accessor
//! takes `&self` and none hands out a mutable reference, so a result can be
//! shared freely between readers.
//!
//! # Examples
//!
//! ```
//! use verdict::{ErrorMap, ValidationResult};
//!
//! let result = ValidationResult::new(ErrorMap::from([
//!     ("email", vec!["Invalid email"]),
//!     ("password", vec!["Too short", "Missing special character"]),
//! ]));
//!
//! assert!(!result.is_valid());
//! assert_eq!(result.error_count(), 2);
//! assert_eq!(result.first_error("password").as_deref(), Some("Too short"));
//! assert_eq!(result.fields_with_errors(), ["email", "password"]);
//!
//! let ok = ValidationResult::valid();
//! assert!(ok.is_valid());
//! assert_eq!(ok.error_count(), 0);
//! ```

use std::fmt;

use crate::map::{field_path, ErrorMap};
use crate::node::{ErrorNode, ErrorValue, EMPTY_NODE};

/// The outcome of validating an object.
///
/// Holds a hierarchical `field -> errors` mapping. Missing fields are never
/// an error: queries about them return empty or absent answers.
///
/// The result owns its mapping. Constructing from an [`ErrorMap`] moves it
/// in, and constructing from `&ErrorMap` clones it, so later changes to the
/// caller's map can't reach the stored state.
///
/// # Examples
///
/// ```
/// use verdict::{ErrorMap, ValidationResult};
///
/// let mut errors = ErrorMap::from([("email", vec!["Invalid email"])]);
/// let result = ValidationResult::from(&errors);
///
/// errors.insert("password", vec!["Too short"]);
///
/// assert!(!result.has_errors_for_field("password"));
/// assert_eq!(result.error_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ValidationResult {
    errors: ErrorMap,
}

impl ValidationResult {
    /// Create a result from a fully-formed error mapping.
    #[inline]
    pub fn new(errors: ErrorMap) -> Self {
        ValidationResult { errors }
    }

    /// A result with no errors.
    #[inline]
    pub fn valid() -> Self {
        ValidationResult::default()
    }

    /// Returns `true` if no field has been recorded.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Read-only view of the full mapping, as constructed.
    #[inline]
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Consume the result and take back its mapping.
    pub fn into_errors(self) -> ErrorMap {
        self.errors
    }

    /// Returns `true` if `field` is present, even when its node is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::{ErrorMap, ValidationResult};
    ///
    /// let result = ValidationResult::new(ErrorMap::from([("email", Vec::<String>::new())]));
    /// assert!(result.has_errors_for_field("email"));
    /// assert!(!result.has_field_error("email"));
    /// ```
    #[inline]
    pub fn has_errors_for_field(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// The node stored for `field`, or an empty leaf if the field is absent.
    ///
    /// Nested nodes are returned as stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::{ErrorMap, ErrorNode, ValidationResult};
    ///
    /// let address = ErrorMap::from([("street", vec!["Required"]), ("city", vec!["Invalid"])]);
    /// let result = ValidationResult::new(ErrorMap::from([("address", address.clone())]));
    ///
    /// assert_eq!(result.errors_for_field("address"), &ErrorNode::Nested(address));
    /// assert!(result.errors_for_field("phone").is_empty());
    /// ```
    pub fn errors_for_field(&self, field: &str) -> &ErrorNode {
        self.errors.get(field).unwrap_or(&EMPTY_NODE)
    }

    /// Same as [`errors_for_field`](Self::errors_for_field).
    #[inline]
    pub fn field_errors(&self, field: &str) -> &ErrorNode {
        self.errors_for_field(field)
    }

    /// Returns `true` if `field` is present and its node is non-empty.
    pub fn has_field_error(&self, field: &str) -> bool {
        self.errors.get(field).is_some_and(|node| !node.is_empty())
    }

    /// Top-level field names in insertion order.
    pub fn fields_with_errors(&self) -> Vec<&str> {
        self.errors.keys().collect()
    }

    /// Number of top-level fields.
    ///
    /// Nested structure is not counted: a field with five nested errors
    /// counts once.
    #[inline]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Textual form of the first message recorded for `field`.
    ///
    /// Returns `None` when the field is absent, its message list is empty, or
    /// it holds a nested mapping. Numeric codes are rendered as text.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::{ErrorMap, ValidationResult};
    ///
    /// let result = ValidationResult::new(ErrorMap::from([("email", vec![123])]));
    /// assert_eq!(result.first_error("email").as_deref(), Some("123"));
    /// assert_eq!(result.first_error("name"), None);
    /// ```
    pub fn first_error(&self, field: &str) -> Option<String> {
        self.errors.get(field).and_then(ErrorNode::first_message)
    }

    /// Every leaf message paired with its dotted field path.
    pub fn messages(&self) -> Vec<(String, &ErrorValue)> {
        self.errors.flatten()
    }
}

impl From<ErrorMap> for ValidationResult {
    fn from(errors: ErrorMap) -> Self {
        ValidationResult::new(errors)
    }
}

impl From<&ErrorMap> for ValidationResult {
    fn from(errors: &ErrorMap) -> Self {
        ValidationResult::new(errors.clone())
    }
}

impl<K, V> FromIterator<(K, V)> for ValidationResult
where
    K: Into<String>,
    V: Into<ErrorNode>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        ValidationResult::new(iter.into_iter().collect())
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return write!(f, "valid");
        }

        let mut lines = Vec::new();
        report_lines(&self.errors, None, &mut lines);
        write!(f, "{}", lines.join("\n"))
    }
}

/// One line per message; fields without messages are listed by path alone.
fn report_lines(errors: &ErrorMap, prefix: Option<&str>, lines: &mut Vec<String>) {
    for (field, node) in errors.iter() {
        let path = field_path(prefix, field);
        match node {
            node if node.is_empty() => lines.push(path),
            ErrorNode::Messages(messages) => {
                lines.extend(messages.iter().map(|message| format!("{}: {}", path, message)));
            }
            ErrorNode::Nested(nested) => report_lines(nested, Some(&path), lines),
        }
    }
}
