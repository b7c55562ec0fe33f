//! Contact form submission

use axum::{
    extract::State,
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
};

use crate::email::{ContactEmailJob, ContactSubmission};
use crate::extractors::ValidatedForm;
use crate::state::AppState;

/// Where the submitter is sent after an accepted submission
pub const CONTACT_REDIRECT: &str = "/contact";

/// `POST /sendmail`
///
/// Validation happens in the extractor, so reaching the body means the
/// submission is accepted. The notification is handed to a detached job and
/// the submitter is redirected with `302 Found` whatever its outcome.
pub async fn send_mail(
    State(state): State<AppState>,
    ValidatedForm(submission): ValidatedForm<ContactSubmission>,
) -> impl IntoResponse {
    let job = ContactEmailJob::new(
        submission,
        state.config().mail.identity(),
        state.mailer(),
    );
    let job_id = state.jobs().spawn(job);
    tracing::debug!(%job_id, "Contact submission accepted");

    (StatusCode::FOUND, [(LOCATION, CONTACT_REDIRECT)])
}
