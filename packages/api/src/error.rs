//! Errors raised while talking to the image host or the registration backend.

use thiserror::Error;

/// Anything that can go wrong before the backend gives us a status code.
///
/// A non-200 answer from the backend is not an error at this level: it comes back
/// as a [`ProfileResponse`](crate::ProfileResponse) and is turned into a rejection
/// by [`submit_registration`](crate::submit_registration).
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// The browser could not hand over the chosen photo. Carries its message as-is,
    /// which may be empty.
    #[error("{0}")]
    PhotoRead(String),
    #[error("Image upload failed: {0}")]
    Upload(String),
    #[error("Unexpected response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
    #[error("Unexpected response: null body")]
    NullBody,
}
