//! Request extractors

mod validated;

pub use validated::{format_validation_errors, ValidatedForm, ValidationError};
