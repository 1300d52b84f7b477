//! Demonstrates tracing integration with validators
//!
//! Run with: cargo run --example tracing_demo --features tracing

use verdict::prelude::*;
use verdict::ValidatorTracingExt;

struct Address {
    street: String,
    city: String,
}

struct AddressValidator;

impl Validator<Address> for AddressValidator {
    fn validate(&self, data: &Address) -> ValidationResult {
        let required = |value: &str, _: &ValidatorOptions| {
            value.trim().is_empty().then(|| "Required".to_string())
        };
        let none = ValidatorOptions::new();

        let mut errors = ErrorMap::new();
        required.check_field("street", data.street.as_str(), &none, &mut errors);
        required.check_field("city", data.city.as_str(), &none, &mut errors);
        ValidationResult::new(errors)
    }
}

fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    tracing::info!("Starting tracing demo");

    let validator = AddressValidator.instrument(tracing::info_span!("address", form = "checkout"));

    let complete = Address {
        street: "12 Analytical Row".to_string(),
        city: "London".to_string(),
    };
    let result = validator.validate(&complete);
    tracing::info!("Complete address: {}", result);

    let partial = Address {
        street: String::new(),
        city: " ".to_string(),
    };
    let result = validator.validate(&partial);
    tracing::info!("Partial address:\n{}", result);

    let min_length = |value: &str, options: &ValidatorOptions| {
        let min = options.get_i64("min").unwrap_or(0).max(0) as usize;
        (value.chars().count() < min).then(|| format!("Must be at least {} characters", min))
    };
    let postcode = min_length.instrument(tracing::debug_span!("postcode"));
    let options = ValidatorOptions::new().with("min", 5);
    tracing::info!("Postcode verdict: {:?}", postcode.validate_value("SW1", &options));
}
