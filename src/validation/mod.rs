//! Validation of piece requests and optimizer settings.

mod validate;

pub use validate::{
    quick_validate, validate_config, validate_request, validate_requests, ValidationResult,
};
