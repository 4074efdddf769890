//! Client for the registration backend.

use crate::config::ApiConfig;
use crate::error::RegistrationError;
use crate::models::{CreateProfilePayload, ProfileResponse};

/// Async trait for submitting a new profile to the backend.
///
/// Any HTTP status is a successful call at this level; deciding what a status
/// means is left to the registration flow.
pub trait ProfileService {
    fn create_profile(
        &self,
        payload: &CreateProfilePayload,
    ) -> impl std::future::Future<Output = Result<ProfileResponse, RegistrationError>>;
}

/// `POST /api/CreateProfile` over HTTP.
#[derive(Clone, Debug)]
pub struct HttpProfileService {
    client: reqwest::Client,
    url: String,
}

impl HttpProfileService {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: config.create_profile_url(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ProfileService for HttpProfileService {
    async fn create_profile(
        &self,
        payload: &CreateProfilePayload,
    ) -> Result<ProfileResponse, RegistrationError> {
        use reqwest::header::{HeaderValue, CONTENT_TYPE};

        tracing::info!(url = %self.url, email = %payload.email_address, "creating profile");

        let resp = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(payload)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = resp.text().await?;
        tracing::debug!(status, "create profile answered");

        Ok(ProfileResponse { status, body })
    }
}
