pub mod candidate_validator;
pub mod rules;
pub mod validation_error;

pub use candidate_validator::validate_candidate;
pub use validation_error::{ValidationError, ValidationErrorKind};
