//! Testing utilities for code that produces validation results
//!
//! This module provides assertion macros for [`ValidationResult`] and, with
//! the `proptest` feature, `Arbitrary` implementations for error maps and
//! results.
//!
//! # Examples
//!
//! ```rust
//! use verdict::{assert_first_error, assert_invalid, assert_valid, ErrorMap, ValidationResult};
//!
//! assert_valid!(ValidationResult::valid());
//!
//! let result = ValidationResult::new(ErrorMap::from([("email", vec!["Invalid email"])]));
//! assert_invalid!(result);
//! assert_first_error!(result, "email", "Invalid email");
//! ```
//!
//! [`ValidationResult`]: crate::ValidationResult

/// Assert that a validation result has no errors.
///
/// This macro will panic if any field was recorded.
///
/// # Example
///
/// ```rust
/// use verdict::{assert_valid, ValidationResult};
///
/// assert_valid!(ValidationResult::valid());
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($result:expr) => {
        match &$result {
            result if $crate::ValidationResult::is_valid(result) => {}
            result => {
                panic!("Expected valid result, got errors: {:?}", result.errors());
            }
        }
    };
}

/// Assert that a validation result has at least one field recorded.
///
/// # Example
///
/// ```rust
/// use verdict::{assert_invalid, ErrorMap, ValidationResult};
///
/// let result = ValidationResult::new(ErrorMap::from([("name", vec!["Required"])]));
/// assert_invalid!(result);
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($result:expr) => {
        if $crate::ValidationResult::is_valid(&$result) {
            panic!("Expected invalid result, got valid");
        }
    };
}

/// Assert the first error message recorded for a field.
///
/// This macro will panic if the field has no first message or if it differs
/// from the expected text.
///
/// # Example
///
/// ```rust
/// use verdict::{assert_first_error, ErrorMap, ValidationResult};
///
/// let result = ValidationResult::new(ErrorMap::from([("code", vec![404])]));
/// assert_first_error!(result, "code", "404");
/// ```
#[macro_export]
macro_rules! assert_first_error {
    ($result:expr, $field:expr, $expected:expr) => {
        match $crate::ValidationResult::first_error(&$result, $field) {
            Some(message) => assert_eq!(message, $expected),
            None => {
                panic!(
                    "Expected first error {:?} for field {:?}, got none",
                    $expected, $field
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::{ErrorMap, ErrorNode, ErrorValue, ValidationResult};

#[cfg(feature = "proptest")]
impl Arbitrary for ErrorValue {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            3 => "[A-Za-z][A-Za-z ]{0,23}".prop_map(ErrorValue::Text),
            1 => any::<i64>().prop_map(ErrorValue::Integer),
            1 => (-1.0e6..1.0e6f64).prop_map(ErrorValue::Float),
            1 => any::<bool>().prop_map(ErrorValue::Bool),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for ErrorNode {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        let leaf = prop::collection::vec(any::<ErrorValue>(), 0..4).prop_map(ErrorNode::Messages);
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop::collection::vec(("[a-z]{1,8}", inner), 0..4)
                .prop_map(|entries| ErrorNode::Nested(entries.into_iter().collect()))
        })
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for ErrorMap {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop::collection::vec(("[a-z_]{1,10}", any::<ErrorNode>()), 0..6)
            .prop_map(|entries| entries.into_iter().collect())
            .boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for ValidationResult {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        any::<ErrorMap>().prop_map(ValidationResult::new).boxed()
    }
}
