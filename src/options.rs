//! Runtime options for value validators
//!
//! Value validators are stateless; anything that varies between uses (a
//! minimum length, an allowed set, a pattern) is passed per call through
//! [`ValidatorOptions`]. Keys are defined by each validator.
//!
//! # Examples
//!
//! ```
//! use verdict::options::{OptionError, ValidatorOptions};
//!
//! let options = ValidatorOptions::new().with("min", 3).with("trim", true);
//!
//! assert_eq!(options.get_i64("min"), Some(3));
//! assert_eq!(options.require_bool("trim"), Ok(true));
//! assert_eq!(
//!     options.require_str("pattern"),
//!     Err(OptionError::Missing { key: "pattern".to_string() })
//! );
//! ```

use std::error::Error as StdError;
use std::fmt;

use indexmap::IndexMap;

/// A single option value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum OptionValue {
    /// A flag
    Bool(bool),
    /// An integer
    Integer(i64),
    /// A floating point number
    Float(f64),
    /// A string
    Text(String),
    /// A list of values
    List(Vec<OptionValue>),
}

impl OptionValue {
    /// Name of the variant, used in error reports.
    pub fn type_name(&self) -> &'static str {
        match self {
            OptionValue::Bool(_) => "bool",
            OptionValue::Integer(_) => "integer",
            OptionValue::Float(_) => "float",
            OptionValue::Text(_) => "text",
            OptionValue::List(_) => "list",
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Integer(i64::from(value))
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Integer(value)
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        OptionValue::Integer(i64::from(value))
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Float(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl<V: Into<OptionValue>> From<Vec<V>> for OptionValue {
    fn from(values: Vec<V>) -> Self {
        OptionValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// A misconfigured option.
///
/// Raised by the `require_*` lookups. This signals a bug in how a validator
/// was called, not a validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    /// The option was not supplied
    Missing {
        /// Option key
        key: String,
    },
    /// The option was supplied with the wrong type
    WrongType {
        /// Option key
        key: String,
        /// Type the validator asked for
        expected: &'static str,
        /// Type that was supplied
        found: &'static str,
    },
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::Missing { key } => write!(f, "missing option '{}'", key),
            OptionError::WrongType {
                key,
                expected,
                found,
            } => write!(f, "option '{}' must be {}, got {}", key, expected, found),
        }
    }
}

impl StdError for OptionError {}

/// Ordered `key -> OptionValue` mapping passed to value validators.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ValidatorOptions {
    values: IndexMap<String, OptionValue>,
}

impl ValidatorOptions {
    /// Create an empty option set.
    pub fn new() -> Self {
        ValidatorOptions {
            values: IndexMap::new(),
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key`, returning the previous value.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> Option<OptionValue> {
        self.values.insert(key.into(), value.into())
    }

    /// Raw value for `key`.
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    /// Returns `true` if `key` was supplied.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no option was supplied.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> + '_ {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// `key` as a flag, if present and boolean.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            OptionValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// `key` as an integer, if present and integral.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            OptionValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// `key` as a float. Integers are widened.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            OptionValue::Float(value) => Some(*value),
            OptionValue::Integer(value) => Some(*value as f64),
            _ => None,
        }
    }

    /// `key` as a string slice, if present and text.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            OptionValue::Text(value) => Some(value),
            _ => None,
        }
    }

    /// `key` as a flag, or an error naming what went wrong.
    pub fn require_bool(&self, key: &str) -> Result<bool, OptionError> {
        let value = self.require(key)?;
        self.get_bool(key).ok_or_else(|| wrong_type(key, "bool", value))
    }

    /// `key` as an integer, or an error naming what went wrong.
    pub fn require_i64(&self, key: &str) -> Result<i64, OptionError> {
        let value = self.require(key)?;
        self.get_i64(key).ok_or_else(|| wrong_type(key, "integer", value))
    }

    /// `key` as a float, or an error naming what went wrong.
    pub fn require_f64(&self, key: &str) -> Result<f64, OptionError> {
        let value = self.require(key)?;
        self.get_f64(key).ok_or_else(|| wrong_type(key, "float", value))
    }

    /// `key` as text, or an error naming what went wrong.
    pub fn require_str(&self, key: &str) -> Result<&str, OptionError> {
        let value = self.require(key)?;
        self.get_str(key).ok_or_else(|| wrong_type(key, "text", value))
    }

    fn require(&self, key: &str) -> Result<&OptionValue, OptionError> {
        self.get(key).ok_or_else(|| OptionError::Missing {
            key: key.to_string(),
        })
    }
}

fn wrong_type(key: &str, expected: &'static str, found: &OptionValue) -> OptionError {
    OptionError::WrongType {
        key: key.to_string(),
        expected,
        found: found.type_name(),
    }
}

impl<K, V> FromIterator<(K, V)> for ValidatorOptions
where
    K: Into<String>,
    V: Into<OptionValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = ValidatorOptions::new();
        for (key, value) in iter {
            options.insert(key, value);
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ValidatorOptions {
        ValidatorOptions::new()
            .with("min", 3)
            .with("ratio", 0.5)
            .with("pattern", "^[a-z]+$")
            .with("strict", false)
            .with("allowed", vec!["a", "b"])
    }

    #[test]
    fn test_typed_getters() {
        let options = sample();
        assert_eq!(options.get_i64("min"), Some(3));
        assert_eq!(options.get_f64("ratio"), Some(0.5));
        assert_eq!(options.get_str("pattern"), Some("^[a-z]+$"));
        assert_eq!(options.get_bool("strict"), Some(false));
        assert_eq!(
            options.get("allowed"),
            Some(&OptionValue::List(vec![
                OptionValue::from("a"),
                OptionValue::from("b")
            ]))
        );
    }

    #[test]
    fn test_getter_type_mismatch() {
        let options = sample();
        assert_eq!(options.get_bool("min"), None);
        assert_eq!(options.get_i64("ratio"), None);
        assert_eq!(options.get_str("missing"), None);
    }

    #[test]
    fn test_float_accepts_integer() {
        let options = sample();
        assert_eq!(options.get_f64("min"), Some(3.0));
        assert_eq!(options.require_f64("min"), Ok(3.0));
    }

    #[test]
    fn test_require_missing() {
        let err = sample().require_i64("max").unwrap_err();
        assert_eq!(
            err,
            OptionError::Missing {
                key: "max".to_string()
            }
        );
        assert_eq!(err.to_string(), "missing option 'max'");
    }

    #[test]
    fn test_require_wrong_type() {
        let err = sample().require_str("min").unwrap_err();
        assert_eq!(
            err,
            OptionError::WrongType {
                key: "min".to_string(),
                expected: "text",
                found: "integer",
            }
        );
        assert_eq!(err.to_string(), "option 'min' must be text, got integer");
    }

    #[test]
    fn test_insert_replaces_and_keeps_order() {
        let mut options = sample();
        let previous = options.insert("min", 5);
        assert_eq!(previous, Some(OptionValue::Integer(3)));
        assert_eq!(options.iter().next().map(|(key, _)| key), Some("min"));
        assert_eq!(options.len(), 5);
    }

    #[test]
    fn test_empty_options() {
        let options = ValidatorOptions::default();
        assert!(options.is_empty());
        assert!(!options.contains("min"));
    }

    #[test]
    fn test_from_iterator() {
        let options: ValidatorOptions = [("min", 1), ("max", 10)].into_iter().collect();
        assert_eq!(options.require_i64("max"), Ok(10));
    }

    #[test]
    fn test_option_error_is_std_error() {
        let err: Box<dyn StdError> = Box::new(OptionError::Missing {
            key: "min".to_string(),
        });
        assert_eq!(err.to_string(), "missing option 'min'");
    }
}
