//! # Registration flow
//!
//! [`submit_registration`] runs one form submission from start to finish:
//!
//! 1. If the request carries a non-empty photo, upload it through the [`ImageHost`]
//!    and use the returned display URL. Otherwise use the configured default avatar.
//!    A failed upload ends the submission; the backend is never called.
//! 2. Send a [`CreateProfilePayload`](crate::CreateProfilePayload) through the
//!    [`ProfileService`].
//! 3. Status `200` means [`RegistrationOutcome::Registered`]. Any other status is a
//!    [`RegistrationOutcome::Rejected`] carrying the server's `message`, or
//!    [`REGISTRATION_REJECTED_FALLBACK`] when there is none.
//! 4. Every error along the way (transport, malformed or `null` JSON, upload) becomes
//!    [`RegistrationOutcome::Failed`] with the error's text.
//!
//! The two calls are strictly sequential. Nothing here retries.
//!
//! [`RegistrationState`] is the form-side view of the same thing. It replaces a pair of
//! independent `loading`/`error` flags with one enum, so there is exactly one place
//! that decides whether the submit button is disabled and which error is on screen.

use crate::error::RegistrationError;
use crate::image_host::ImageHost;
use crate::models::{
    PhotoFile, RegistrationRequest, REGISTRATION_REJECTED_FALLBACK, REGISTRATION_SUCCESS,
    UNEXPECTED_ERROR_FALLBACK,
};
use crate::profile::ProfileService;

/// How a submission ended.
#[derive(Clone, Debug, PartialEq)]
pub enum RegistrationOutcome {
    /// Backend answered `200`.
    Registered,
    /// Backend answered with any other status.
    Rejected { status: u16, message: String },
    /// The submission never got a usable answer.
    Failed { message: String },
}

/// Transient notification to show after a submission.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl RegistrationOutcome {
    /// Inline error text, if the submission did not succeed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            RegistrationOutcome::Registered => None,
            RegistrationOutcome::Rejected { message, .. }
            | RegistrationOutcome::Failed { message } => Some(message),
        }
    }

    /// The toast for this outcome. Errors reuse the inline text verbatim.
    pub fn notice(&self) -> Notice {
        match self.error_message() {
            None => Notice::Success(REGISTRATION_SUCCESS.to_string()),
            Some(message) => Notice::Error(message.to_string()),
        }
    }
}

/// Run one registration submission.
pub async fn submit_registration<H, P>(
    host: &H,
    profiles: &P,
    default_avatar_url: &str,
    request: RegistrationRequest,
) -> RegistrationOutcome
where
    H: ImageHost,
    P: ProfileService,
{
    match try_register(host, profiles, default_avatar_url, request).await {
        Ok(outcome) => outcome,
        Err(e) => e.into(),
    }
}

/// Like [`submit_registration`], for a photo that is still being loaded.
///
/// `photo` replaces whatever [`RegistrationRequest::photo`] held. If loading it
/// fails, the submission ends there as [`RegistrationOutcome::Failed`] and neither
/// service is called.
pub async fn submit_with_pending_photo<H, P, F>(
    host: &H,
    profiles: &P,
    default_avatar_url: &str,
    request: RegistrationRequest,
    photo: F,
) -> RegistrationOutcome
where
    H: ImageHost,
    P: ProfileService,
    F: std::future::Future<Output = Result<Option<PhotoFile>, RegistrationError>>,
{
    match photo.await {
        Ok(photo) => {
            let request = RegistrationRequest { photo, ..request };
            submit_registration(host, profiles, default_avatar_url, request).await
        }
        Err(e) => e.into(),
    }
}

async fn try_register<H, P>(
    host: &H,
    profiles: &P,
    default_avatar_url: &str,
    request: RegistrationRequest,
) -> Result<RegistrationOutcome, RegistrationError>
where
    H: ImageHost,
    P: ProfileService,
{
    tracing::debug!(has_photo = request.has_photo(), "Submitting registration");
    let image = match request.photo_to_upload() {
        Some(photo) => host.upload(photo).await?,
        None => default_avatar_url.to_string(),
    };

    let payload = request.into_payload(image);
    let response = profiles.create_profile(&payload).await?;

    if response.is_success() {
        tracing::info!("Registration accepted");
        return Ok(RegistrationOutcome::Registered);
    }

    let message = response
        .error_message()?
        .unwrap_or_else(|| REGISTRATION_REJECTED_FALLBACK.to_string());
    tracing::warn!(status = response.status, %message, "Registration rejected");

    Ok(RegistrationOutcome::Rejected {
        status: response.status,
        message,
    })
}

/// An error that ended a submission early. Shows the error's text, or
/// [`UNEXPECTED_ERROR_FALLBACK`] when it has none.
impl From<RegistrationError> for RegistrationOutcome {
    fn from(err: RegistrationError) -> Self {
        tracing::error!("Registration failed: {}", err);
        let text = err.to_string();
        let message = if text.trim().is_empty() {
            UNEXPECTED_ERROR_FALLBACK.to_string()
        } else {
            text
        };
        RegistrationOutcome::Failed { message }
    }
}

/// Form state across submissions.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RegistrationState {
    #[default]
    Idle,
    /// A submission is in flight. The error from the last attempt stays on screen
    /// until this one finishes.
    Submitting { previous_error: Option<String> },
    Failed(String),
    /// Terminal: the view is about to navigate away, so the form stays disabled.
    Succeeded,
}

impl RegistrationState {
    /// Enter `Submitting`. Returns `false`, leaving the state untouched, if a
    /// submission is already in flight or has already succeeded.
    pub fn begin(&mut self) -> bool {
        match self {
            RegistrationState::Submitting { .. } | RegistrationState::Succeeded => false,
            RegistrationState::Idle | RegistrationState::Failed(_) => {
                let previous_error = self.error_message().map(str::to_string);
                *self = RegistrationState::Submitting { previous_error };
                true
            }
        }
    }

    /// Record how the in-flight submission ended.
    pub fn finish(&mut self, outcome: &RegistrationOutcome) {
        *self = match outcome.error_message() {
            None => RegistrationState::Succeeded,
            Some(message) => RegistrationState::Failed(message.to_string()),
        };
    }

    /// Whether the submit control should be disabled.
    pub fn is_loading(&self) -> bool {
        matches!(
            self,
            RegistrationState::Submitting { .. } | RegistrationState::Succeeded
        )
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            RegistrationState::Submitting { previous_error } => previous_error.as_deref(),
            RegistrationState::Failed(message) => Some(message),
            RegistrationState::Idle | RegistrationState::Succeeded => None,
        }
    }
}
