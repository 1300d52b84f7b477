//! Tracing support for validators.
//!
//! This module provides the [`Instrumented`] wrapper and the `instrument`
//! method for running validators inside a tracing span. Feature-gated behind
//! `#[cfg(feature = "tracing")]`.
//!
//! Each call enters the span and emits one `DEBUG` event describing the
//! verdict. Subscribers are never installed here.

use tracing::Span;

use crate::options::ValidatorOptions;
use crate::result::ValidationResult;
use crate::validator::{Validator, ValueValidator};

/// A validator wrapped in a tracing span.
///
/// Created by [`ValidatorTracingExt::instrument`].
#[derive(Debug, Clone)]
pub struct Instrumented<V> {
    inner: V,
    span: Span,
}

impl<V> Instrumented<V> {
    /// The span entered on every call.
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Unwrap the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<T: ?Sized, V> Validator<T> for Instrumented<V>
where
    V: Validator<T>,
{
    fn validate(&self, data: &T) -> ValidationResult {
        let _entered = self.span.enter();
        let result = self.inner.validate(data);
        if result.is_valid() {
            tracing::debug!(valid = true, "validation passed");
        } else {
            tracing::debug!(
                valid = false,
                error_count = result.error_count(),
                fields = ?result.fields_with_errors(),
                "validation failed"
            );
        }
        result
    }
}

impl<T: ?Sized, V> ValueValidator<T> for Instrumented<V>
where
    V: ValueValidator<T>,
{
    fn validate_value(&self, value: &T, options: &ValidatorOptions) -> Option<String> {
        let _entered = self.span.enter();
        let verdict = self.inner.validate_value(value, options);
        match &verdict {
            None => tracing::debug!(valid = true, options = options.len(), "value passed"),
            Some(message) => tracing::debug!(
                valid = false,
                options = options.len(),
                error = %message,
                "value rejected"
            ),
        }
        verdict
    }
}

/// Extension trait for adding tracing instrumentation to validators.
///
/// This trait is only available when the `tracing` feature is enabled.
pub trait ValidatorTracingExt: Sized {
    /// Wrap this validator in a tracing span.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use verdict::prelude::*;
    /// use verdict::instrument::ValidatorTracingExt;
    /// use tracing::debug_span;
    ///
    /// let validator = SignupValidator.instrument(debug_span!("signup"));
    /// let result = validator.validate(&form);
    /// ```
    fn instrument(self, span: Span) -> Instrumented<Self> {
        Instrumented { inner: self, span }
    }
}

impl<V> ValidatorTracingExt for V {}
