//! # Registration request and the wire types of `/api/CreateProfile`
//!
//! - [`RegistrationRequest`] — what the form collected. Lives only for one submission.
//! - [`CreateProfilePayload`] — the JSON body the backend expects. Field names are
//!   PascalCase on the wire (`Name`, `Password`, `EmailAddress`, `Image`).
//! - [`ProfileResponse`] — status code and raw body. Only status `200` counts as
//!   success; any other status is a rejection whose JSON body may carry a `message`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::PhotoFile;
use crate::error::RegistrationError;

/// Shown when the backend rejects a registration without saying why.
pub const REGISTRATION_REJECTED_FALLBACK: &str =
    "Your email is already registered. Please use a different email or log in.";

/// Shown when an error carries no text of its own.
pub const UNEXPECTED_ERROR_FALLBACK: &str = "An unexpected error occurred.";

/// Toast text after a successful registration.
pub const REGISTRATION_SUCCESS: &str = "Registration successful!";

/// Values collected by the registration form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub photo: Option<PhotoFile>,
}

impl RegistrationRequest {
    /// The photo to upload, if one was chosen and it is not zero bytes.
    pub fn photo_to_upload(&self) -> Option<&PhotoFile> {
        self.photo.as_ref().filter(|p| !p.is_empty())
    }

    pub fn has_photo(&self) -> bool {
        self.photo_to_upload().is_some()
    }

    /// Build the backend payload once the image URL is known.
    pub fn into_payload(self, image: String) -> CreateProfilePayload {
        CreateProfilePayload {
            name: self.name,
            password: self.password,
            email_address: self.email,
            image,
        }
    }
}

/// JSON body of `POST /api/CreateProfile`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateProfilePayload {
    pub name: String,
    pub password: String,
    pub email_address: String,
    pub image: String,
}

/// What the backend answered.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileResponse {
    pub status: u16,
    pub body: String,
}

impl ProfileResponse {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// The non-empty string `message` field of a JSON body, if there is one.
    ///
    /// Any JSON value other than `null` is acceptable: arrays, strings, numbers and
    /// objects without a string `message` all yield `None`. Bodies that are not JSON
    /// at all, or are `null`, are errors.
    pub fn error_message(&self) -> Result<Option<String>, RegistrationError> {
        let value: Value = serde_json::from_str(&self.body)?;
        if value.is_null() {
            return Err(RegistrationError::NullBody);
        }
        Ok(value
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_string))
    }
}
