//! Error nodes: the values stored against each field
//!
//! A field's errors are either a flat list of messages or a nested mapping of
//! further fields, which lets a single result describe sub-objects such as
//! `address.street` without flattening them.
//!
//! # Examples
//!
//! ```
//! use verdict::{ErrorMap, ErrorNode};
//!
//! let flat = ErrorNode::from(vec!["Required"]);
//! assert_eq!(flat.first_message().as_deref(), Some("Required"));
//!
//! let nested = ErrorNode::from(ErrorMap::from([
//!     ("street", vec!["Required"]),
//!     ("city", vec!["Invalid"]),
//! ]));
//! assert_eq!(nested.len(), 2);
//! assert_eq!(nested.first_message(), None);
//! ```

use std::fmt;

use crate::map::ErrorMap;

/// A single error message.
///
/// Most messages are text, but validators sometimes report numeric error
/// codes or raw flags. Every variant has a textual form through `Display`;
/// flags render as `"1"` for `true` and `""` for `false`.
///
/// # Examples
///
/// ```
/// use verdict::ErrorValue;
///
/// assert_eq!(ErrorValue::from("Too short").to_string(), "Too short");
/// assert_eq!(ErrorValue::from(123).to_string(), "123");
/// assert_eq!(ErrorValue::from(2.0).to_string(), "2");
/// assert_eq!(ErrorValue::from(true).to_string(), "1");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ErrorValue {
    /// A human readable message
    Text(String),
    /// A numeric error code
    Integer(i64),
    /// A floating point error code or measurement
    Float(f64),
    /// A raw flag
    Bool(bool),
}

impl ErrorValue {
    /// Borrow the message text, if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ErrorValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorValue::Text(text) => f.write_str(text),
            ErrorValue::Integer(code) => write!(f, "{}", code),
            ErrorValue::Float(value) => write!(f, "{}", value),
            ErrorValue::Bool(true) => f.write_str("1"),
            ErrorValue::Bool(false) => Ok(()),
        }
    }
}

impl From<&str> for ErrorValue {
    fn from(text: &str) -> Self {
        ErrorValue::Text(text.to_string())
    }
}

impl From<String> for ErrorValue {
    fn from(text: String) -> Self {
        ErrorValue::Text(text)
    }
}

impl From<i32> for ErrorValue {
    fn from(code: i32) -> Self {
        ErrorValue::Integer(i64::from(code))
    }
}

impl From<u32> for ErrorValue {
    fn from(code: u32) -> Self {
        ErrorValue::Integer(i64::from(code))
    }
}

impl From<i64> for ErrorValue {
    fn from(code: i64) -> Self {
        ErrorValue::Integer(code)
    }
}

impl From<f64> for ErrorValue {
    fn from(value: f64) -> Self {
        ErrorValue::Float(value)
    }
}

impl From<bool> for ErrorValue {
    fn from(flag: bool) -> Self {
        ErrorValue::Bool(flag)
    }
}

/// The errors recorded for one field.
///
/// `Messages` is a leaf holding the field's messages in report order.
/// `Nested` holds the errors of a sub-object, keyed by its own field names.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ErrorNode {
    /// Flat list of error messages
    Messages(Vec<ErrorValue>),
    /// Errors of a nested structure
    Nested(ErrorMap),
}

/// Returned for fields that are not present in a result.
pub(crate) static EMPTY_NODE: ErrorNode = ErrorNode::Messages(Vec::new());

impl ErrorNode {
    /// Create a leaf node from any sequence of messages.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::ErrorNode;
    ///
    /// let node = ErrorNode::messages(["Too short", "Missing digit"]);
    /// assert_eq!(node.len(), 2);
    /// ```
    pub fn messages<I, V>(messages: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ErrorValue>,
    {
        ErrorNode::Messages(messages.into_iter().map(Into::into).collect())
    }

    /// Create a nested node from a sub-mapping.
    pub fn nested(errors: ErrorMap) -> Self {
        ErrorNode::Nested(errors)
    }

    /// Returns `true` if the node carries no messages and no nested fields.
    ///
    /// A nested node whose sub-fields are themselves empty is still
    /// considered non-empty: the sub-fields were mentioned.
    pub fn is_empty(&self) -> bool {
        match self {
            ErrorNode::Messages(messages) => messages.is_empty(),
            ErrorNode::Nested(errors) => errors.is_empty(),
        }
    }

    /// Number of direct entries: messages for a leaf, fields for a nested node.
    pub fn len(&self) -> usize {
        match self {
            ErrorNode::Messages(messages) => messages.len(),
            ErrorNode::Nested(errors) => errors.len(),
        }
    }

    /// Textual form of the first message of a leaf.
    ///
    /// Returns `None` for an empty leaf and for nested nodes, which have no
    /// positional first message.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::ErrorNode;
    ///
    /// assert_eq!(ErrorNode::from(vec![404]).first_message().as_deref(), Some("404"));
    /// assert_eq!(ErrorNode::messages(Vec::<String>::new()).first_message(), None);
    /// ```
    pub fn first_message(&self) -> Option<String> {
        match self {
            ErrorNode::Messages(messages) => messages.first().map(ToString::to_string),
            ErrorNode::Nested(_) => None,
        }
    }

    /// Borrow the messages of a leaf node.
    pub fn as_messages(&self) -> Option<&[ErrorValue]> {
        match self {
            ErrorNode::Messages(messages) => Some(messages),
            ErrorNode::Nested(_) => None,
        }
    }

    /// Borrow the sub-mapping of a nested node.
    pub fn as_nested(&self) -> Option<&ErrorMap> {
        match self {
            ErrorNode::Messages(_) => None,
            ErrorNode::Nested(errors) => Some(errors),
        }
    }
}

impl Default for ErrorNode {
    fn default() -> Self {
        ErrorNode::Messages(Vec::new())
    }
}

impl<V: Into<ErrorValue>> From<Vec<V>> for ErrorNode {
    fn from(messages: Vec<V>) -> Self {
        ErrorNode::messages(messages)
    }
}

impl<V: Into<ErrorValue>, const N: usize> From<[V; N]> for ErrorNode {
    fn from(messages: [V; N]) -> Self {
        ErrorNode::messages(messages)
    }
}

impl From<ErrorMap> for ErrorNode {
    fn from(errors: ErrorMap) -> Self {
        ErrorNode::Nested(errors)
    }
}
