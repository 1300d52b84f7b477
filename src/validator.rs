//! Validator contracts
//!
//! Two capabilities produce validation verdicts:
//!
//! - [`Validator`] checks a whole object and reports every violation as a
//!   [`ValidationResult`].
//! - [`ValueValidator`] checks one value against runtime
//!   [`ValidatorOptions`] and returns an error message or nothing.
//!
//! Both are implemented for plain closures, so small validators don't need
//! a named type.
//!
//! # Example
//!
//! ```rust
//! use verdict::prelude::*;
//!
//! struct Signup {
//!     email: String,
//!     password: String,
//! }
//!
//! struct MinLength;
//!
//! impl ValueValidator<str> for MinLength {
//!     fn validate_value(&self, value: &str, options: &ValidatorOptions) -> Option<String> {
//!         let min = options.get_i64("min").unwrap_or(1) as usize;
//!         (value.chars().count() < min).then(|| format!("Must be at least {} characters", min))
//!     }
//! }
//!
//! struct SignupValidator;
//!
//! impl Validator<Signup> for SignupValidator {
//!     fn validate(&self, data: &Signup) -> ValidationResult {
//!         let mut errors = ErrorMap::new();
//!         let contains_at = |value: &str, _: &ValidatorOptions| {
//!             (!value.contains('@')).then(|| "Invalid email".to_string())
//!         };
//!         contains_at.check_field("email", data.email.as_str(), &ValidatorOptions::new(), &mut errors);
//!         MinLength.check_field(
//!             "password",
//!             data.password.as_str(),
//!             &ValidatorOptions::new().with("min", 8),
//!             &mut errors,
//!         );
//!         ValidationResult::new(errors)
//!     }
//! }
//!
//! let result = SignupValidator.validate(&Signup {
//!     email: "user.example.com".to_string(),
//!     password: "hunter2".to_string(),
//! });
//!
//! assert_eq!(result.fields_with_errors(), ["email", "password"]);
//! assert_eq!(
//!     result.first_error("password").as_deref(),
//!     Some("Must be at least 8 characters")
//! );
//! ```

use crate::map::ErrorMap;
use crate::options::ValidatorOptions;
use crate::result::ValidationResult;

/// Validates a structured object.
///
/// Implementations must always return a result: violations are data, not
/// errors. Truly exceptional conditions belong in a separate `Result` layer
/// around the validator.
pub trait Validator<T: ?Sized> {
    /// Check `data` and report every violation found.
    fn validate(&self, data: &T) -> ValidationResult;
}

// Blanket impl for closures
impl<T: ?Sized, F> Validator<T> for F
where
    F: Fn(&T) -> ValidationResult,
{
    #[inline]
    fn validate(&self, data: &T) -> ValidationResult {
        self(data)
    }
}

/// Validates a single value, independent of any field name.
///
/// Implementations must be stateless: the same `(value, options)` pair
/// always yields the same verdict, which is what lets one instance be shared
/// across fields, objects and threads.
pub trait ValueValidator<T: ?Sized>: Send + Sync {
    /// Returns an error message if `value` is invalid, `None` otherwise.
    fn validate_value(&self, value: &T, options: &ValidatorOptions) -> Option<String>;
}

// Blanket impl for closures
impl<T: ?Sized, F> ValueValidator<T> for F
where
    F: Fn(&T, &ValidatorOptions) -> Option<String> + Send + Sync,
{
    #[inline]
    fn validate_value(&self, value: &T, options: &ValidatorOptions) -> Option<String> {
        self(value, options)
    }
}

/// Convenience methods for value validators.
pub trait ValueValidatorExt<T: ?Sized>: ValueValidator<T> {
    /// Validate with no options.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::prelude::*;
    ///
    /// let not_blank = |value: &str, _: &ValidatorOptions| {
    ///     value.trim().is_empty().then(|| "Required".to_string())
    /// };
    ///
    /// assert_eq!(not_blank.check("  "), Some("Required".to_string()));
    /// assert_eq!(not_blank.check("Ada"), None);
    /// ```
    fn check(&self, value: &T) -> Option<String> {
        self.validate_value(value, &ValidatorOptions::new())
    }

    /// Validate `value` and record a failure under `field`.
    ///
    /// The message is appended with [`ErrorMap::push_message`], so a field
    /// that already holds nested errors keeps them. Returns `true` if the
    /// value passed.
    fn check_field(
        &self,
        field: &str,
        value: &T,
        options: &ValidatorOptions,
        errors: &mut ErrorMap,
    ) -> bool {
        match self.validate_value(value, options) {
            Some(message) => {
                errors.push_message(field, message);
                false
            }
            None => true,
        }
    }
}

impl<T: ?Sized, V: ValueValidator<T>> ValueValidatorExt<T> for V {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::ErrorNode;
    use std::sync::Arc;
    use std::thread;

    struct Range;

    impl ValueValidator<i64> for Range {
        fn validate_value(&self, value: &i64, options: &ValidatorOptions) -> Option<String> {
            let min = options.get_i64("min").unwrap_or(i64::MIN);
            let max = options.get_i64("max").unwrap_or(i64::MAX);
            if *value < min || *value > max {
                Some(format!("Must be between {} and {}", min, max))
            } else {
                None
            }
        }
    }

    #[test]
    fn test_struct_value_validator() {
        let options = ValidatorOptions::new().with("min", 1).with("max", 10);
        assert_eq!(Range.validate_value(&5, &options), None);
        assert_eq!(
            Range.validate_value(&11, &options),
            Some("Must be between 1 and 10".to_string())
        );
    }

    #[test]
    fn test_check_uses_empty_options() {
        assert_eq!(Range.check(&i64::MAX), None);
    }

    #[test]
    fn test_same_input_same_verdict() {
        let options = ValidatorOptions::new().with("max", 3);
        let first = Range.validate_value(&4, &options);
        let second = Range.validate_value(&4, &options);
        assert_eq!(first, second);
    }

    #[test]
    fn test_closure_value_validator() {
        let non_empty = |value: &str, _: &ValidatorOptions| {
            if value.is_empty() {
                Some("Required".to_string())
            } else {
                None
            }
        };
        assert_eq!(non_empty.check(""), Some("Required".to_string()));
        assert_eq!(non_empty.check("x"), None);
    }

    #[test]
    fn test_check_field_records_failures() {
        let mut errors = ErrorMap::new();
        let options = ValidatorOptions::new().with("min", 18);

        assert!(!Range.check_field("age", &12, &options, &mut errors));
        assert!(Range.check_field("age", &30, &options, &mut errors));
        assert!(!Range.check_field("age", &-1, &options, &mut errors));

        let node = errors.get("age").unwrap();
        assert_eq!(node.len(), 2);
        assert_eq!(
            node.first_message().as_deref(),
            Some(format!("Must be between 18 and {}", i64::MAX).as_str())
        );
    }

    #[test]
    fn test_check_field_leaves_passing_fields_out() {
        let mut errors = ErrorMap::new();
        assert!(Range.check_field("age", &5, &ValidatorOptions::new(), &mut errors));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_check_field_on_nested_field_records_failure() {
        let required = |value: &str, _: &ValidatorOptions| {
            value.is_empty().then(|| "Required".to_string())
        };
        let mut errors = ErrorMap::from([(
            "address",
            ErrorMap::from([("street", vec!["Required"])]),
        )]);

        let passed = required.check_field("address", "", &ValidatorOptions::new(), &mut errors);

        assert!(!passed);
        let address = errors.get("address").and_then(ErrorNode::as_nested).unwrap();
        assert_eq!(
            address.get(ErrorMap::OWN_MESSAGES),
            Some(&ErrorNode::from(vec!["Required"]))
        );
        assert_eq!(address.get("street"), Some(&ErrorNode::from(vec!["Required"])));

        let paths: Vec<String> = errors
            .flatten()
            .into_iter()
            .map(|(path, message)| format!("{}: {}", path, message))
            .collect();
        assert_eq!(paths, ["address.street: Required", "address: Required"]);
    }

    #[test]
    fn test_closure_validator() {
        let validator = |name: &str| {
            if name.is_empty() {
                ValidationResult::new(ErrorMap::from([("name", vec!["Required"])]))
            } else {
                ValidationResult::valid()
            }
        };

        assert!(validator.validate("Ada").is_valid());
        let result = validator.validate("");
        assert_eq!(result.errors_for_field("name"), &ErrorNode::from(vec!["Required"]));
    }

    #[test]
    fn test_value_validator_shared_across_threads() {
        let validator: Arc<dyn ValueValidator<i64>> = Arc::new(Range);
        let options = Arc::new(ValidatorOptions::new().with("max", 100));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let validator = Arc::clone(&validator);
                let options = Arc::clone(&options);
                thread::spawn(move || validator.validate_value(&(i * 50), &options))
            })
            .collect();

        let verdicts: Vec<Option<String>> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();

        assert_eq!(verdicts[0], None);
        assert_eq!(verdicts[2], None);
        assert!(verdicts[3].is_some());
    }
}
