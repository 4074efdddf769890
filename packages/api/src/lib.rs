//! # API crate — client side of HopeAid registration
//!
//! Everything the registration form needs that is not UI: where to send requests,
//! what to send, and how to interpret the answers. Nothing in here depends on Dioxus,
//! so the whole flow is testable with plain `tokio` tests.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | [`ClientConfig`]: backend URL, image host URL/key, default avatar. TOML and env loading. |
//! | [`models`] | [`RegistrationRequest`], [`PhotoFile`], and the `/api/CreateProfile` wire types |
//! | [`image_host`] | [`ImageHost`] trait and the imgbb-compatible [`ImgbbClient`] |
//! | [`profile`] | [`ProfileService`] trait and the HTTP [`HttpProfileService`] |
//! | [`registration`] | [`submit_registration`], [`submit_with_pending_photo`], [`RegistrationOutcome`], [`RegistrationState`] |
//!
//! Both network seams are traits with `impl Future` methods rather than boxed
//! futures. The browser runtime is single-threaded and `reqwest` futures are not
//! `Send` on wasm, so no `Send` bounds are required.

pub mod config;
mod error;
pub mod image_host;
pub mod models;
pub mod profile;
pub mod registration;

#[cfg(test)]
mod test_server;

pub use config::{ApiConfig, ClientConfig, ImageHostConfig, DEFAULT_AVATAR_URL};
pub use error::RegistrationError;
pub use image_host::{ImageHost, ImgbbClient};
pub use models::{
    CreateProfilePayload, PhotoFile, ProfileResponse, RegistrationRequest,
    REGISTRATION_REJECTED_FALLBACK, REGISTRATION_SUCCESS, UNEXPECTED_ERROR_FALLBACK,
};
pub use profile::{HttpProfileService, ProfileService};
pub use registration::{
    submit_registration, submit_with_pending_photo, Notice, RegistrationOutcome,
    RegistrationState,
};

/// The production clients, built from one [`ClientConfig`].
#[derive(Clone, Debug)]
pub struct RegistrationClient {
    pub images: ImgbbClient,
    pub profiles: HttpProfileService,
    pub default_avatar_url: String,
}

impl RegistrationClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            images: ImgbbClient::new(config.image_host.clone()),
            profiles: HttpProfileService::new(&config.api),
            default_avatar_url: config.default_avatar_url.clone(),
        }
    }

    /// Run [`submit_with_pending_photo`] against the configured services.
    pub async fn submit_with_photo<F>(
        &self,
        request: RegistrationRequest,
        photo: F,
    ) -> RegistrationOutcome
    where
        F: std::future::Future<Output = Result<Option<PhotoFile>, RegistrationError>>,
    {
        submit_with_pending_photo(
            &self.images,
            &self.profiles,
            &self.default_avatar_url,
            request,
            photo,
        )
        .await
    }
}
