//! Urlencoded forms checked against their `validator` rules
//!
//! `ValidatedForm<T>` decodes the body with axum's `Form` and then calls
//! [`Validate::validate`]. Handlers taking it only ever see input that passed
//! both steps, so anything they schedule is known to be well-formed.
//!
//! ```rust,no_run
//! use himex_web::email::ContactSubmission;
//! use himex_web::extractors::ValidatedForm;
//!
//! async fn greet(ValidatedForm(submission): ValidatedForm<ContactSubmission>) -> String {
//!     format!("Thanks, {}", submission.first_name)
//! }
//! ```

use axum::{
    extract::{rejection::FormRejection, Form, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Form body that decoded and validated successfully
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedForm<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedForm<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync + 'static,
{
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Why a form was refused
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Body could not be decoded into the form type
    ///
    /// Responds with axum's own status: 422 for a missing or mistyped field,
    /// 415 for a body that is not urlencoded, 400 for bad syntax.
    #[error("form could not be decoded: {}", .0.body_text())]
    Decode(#[from] FormRejection),

    /// Body decoded but a field rule failed; responds 422
    #[error("form failed validation: {}", format_validation_errors(.0).replace('\n', "; "))]
    Invalid(#[from] ValidationErrors),
}

impl ValidationError {
    /// Status code sent to the client
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Decode(rejection) => rejection.status(),
            Self::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(%status, error = %self, "Form refused");

        let body = match &self {
            Self::Decode(rejection) => rejection.body_text(),
            Self::Invalid(errors) => format_validation_errors(errors),
        };
        (status, body).into_response()
    }
}

/// One `field: message` line per failed rule, sorted by field
///
/// Rules without a message fall back to their code (for example `email`).
#[must_use]
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut lines: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, failures)| {
            failures.iter().map(move |failure| {
                let reason = failure
                    .message
                    .as_deref()
                    .map_or_else(|| failure.code.to_string(), str::to_string);
                format!("{field}: {reason}")
            })
        })
        .collect();

    lines.sort();
    lines.join("\n")
}
