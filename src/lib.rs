//! # Verdict
//!
//! Immutable validation results and the validator contracts that produce them.
//!
//! ## Overview
//!
//! - [`ValidationResult`] is a read-only snapshot of pre-computed errors,
//!   keyed by field. A field's errors are either a list of messages or a
//!   nested mapping of the same shape, so sub-objects such as
//!   `address.street` keep their structure.
//! - [`Validator`] validates a whole object and returns a `ValidationResult`.
//! - [`ValueValidator`] checks one value against runtime
//!   [`ValidatorOptions`] and returns an error message or nothing.
//!
//! Validation failures are data. Nothing here returns `Err` for an invalid
//! input, and every query on a result has an answer for every field.
//!
//! ## Quick Example
//!
//! ```rust
//! use verdict::{ErrorMap, ValidationResult};
//!
//! let mut errors = ErrorMap::new();
//! errors.insert("email", vec!["Invalid email"]);
//! errors.insert(
//!     "address",
//!     ErrorMap::from([("street", vec!["Required"]), ("city", vec!["Invalid"])]),
//! );
//!
//! let result = ValidationResult::new(errors);
//!
//! assert!(!result.is_valid());
//! assert_eq!(result.error_count(), 2);
//! assert_eq!(result.first_error("email").as_deref(), Some("Invalid email"));
//! assert!(result.errors_for_field("address").as_nested().is_some());
//! assert_eq!(
//!     result.to_string(),
//!     "email: Invalid email\naddress.street: Required\naddress.city: Invalid"
//! );
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod map;
pub mod node;
pub mod options;
pub mod result;
pub mod testing;
pub mod validator;

#[cfg(feature = "tracing")]
pub mod instrument;

// Re-exports
pub use map::ErrorMap;
pub use node::{ErrorNode, ErrorValue};
pub use options::{OptionError, OptionValue, ValidatorOptions};
pub use result::ValidationResult;
pub use validator::{Validator, ValueValidator, ValueValidatorExt};

#[cfg(feature = "tracing")]
pub use instrument::{Instrumented, ValidatorTracingExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::map::ErrorMap;
    pub use crate::node::{ErrorNode, ErrorValue};
    pub use crate::options::{OptionValue, ValidatorOptions};
    pub use crate::result::ValidationResult;
    pub use crate::validator::{Validator, ValueValidator, ValueValidatorExt};
}
