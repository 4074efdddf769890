//! # Client configuration
//!
//! Where the registration client sends its requests. A [`ClientConfig`] can be
//! built three ways:
//!
//! - [`ClientConfig::default`] — points at a backend on `http://localhost:5001` and
//!   the public imgbb upload endpoint, with the stock avatar as fallback image.
//! - [`ClientConfig::from_toml`] — parses a TOML document; every section is optional.
//! - [`ClientConfig::from_env`] — overlays environment variables on the defaults.
//!
//! ```toml
//! default_avatar_url = "https://i.ibb.co/.../avatar.jpg"
//!
//! [api]
//! base_url = "http://localhost:5001"
//!
//! [image_host]
//! upload_url = "https://api.imgbb.com/1/upload"
//! api_key = "..."
//! ```
//!
//! ## Environment variables
//!
//! | Variable | Field |
//! |----------|-------|
//! | `REGISTRATION_API_URL` | `api.base_url` |
//! | `IMAGE_HOST_UPLOAD_URL` | `image_host.upload_url` |
//! | `IMAGE_HOST_API_KEY` | `image_host.api_key` |
//! | `DEFAULT_AVATAR_URL` | `default_avatar_url` |
//!
//! Native builds read them at runtime (after loading `.env` with `dotenvy`). A browser
//! has no process environment, so wasm builds capture them at compile time.

use serde::{Deserialize, Serialize};

/// Avatar used when the user registers without a profile photo.
pub const DEFAULT_AVATAR_URL: &str =
    "https://i.ibb.co/gdGfHLj/profile-user-icon-isolated-on-white-background-eps10-free-vector.jpg";

/// Path of the registration endpoint, relative to [`ApiConfig::base_url`].
pub const CREATE_PROFILE_PATH: &str = "/api/CreateProfile";

/// Top-level client configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub image_host: ImageHostConfig,
    /// Image sent when no photo was chosen.
    #[serde(default = "default_avatar_url")]
    pub default_avatar_url: String,
}

/// Registration backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Third-party image host used for profile photos.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageHostConfig {
    #[serde(default = "default_upload_url")]
    pub upload_url: String,
    /// Empty means "no key", which imgbb will reject; kept optional for self-hosted hosts.
    #[serde(default)]
    pub api_key: String,
}

fn default_avatar_url() -> String {
    DEFAULT_AVATAR_URL.to_string()
}

fn default_base_url() -> String {
    "http://localhost:5001".to_string()
}

fn default_upload_url() -> String {
    "https://api.imgbb.com/1/upload".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            image_host: ImageHostConfig::default(),
            default_avatar_url: default_avatar_url(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for ImageHostConfig {
    fn default() -> Self {
        Self {
            upload_url: default_upload_url(),
            api_key: String::new(),
        }
    }
}

impl ApiConfig {
    /// Full URL of the registration endpoint.
    pub fn create_profile_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), CREATE_PROFILE_PATH)
    }
}

impl ImageHostConfig {
    /// Upload URL with the API key appended as a `key` query parameter.
    pub fn upload_endpoint(&self) -> String {
        if self.api_key.is_empty() {
            return self.upload_url.clone();
        }
        let sep = if self.upload_url.contains('?') { '&' } else { '?' };
        format!("{}{}key={}", self.upload_url, sep, self.api_key)
    }
}

impl ClientConfig {
    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Defaults overlaid with whatever the environment provides.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        dotenvy::dotenv().ok();

        let mut config = Self::default();
        config.apply_overrides(read_var);
        tracing::debug!(
            api = %config.api.base_url,
            image_host = %config.image_host.upload_url,
            "loaded client configuration"
        );
        config
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("REGISTRATION_API_URL") {
            self.api.base_url = url;
        }
        if let Some(url) = lookup("IMAGE_HOST_UPLOAD_URL") {
            self.image_host.upload_url = url;
        }
        if let Some(key) = lookup("IMAGE_HOST_API_KEY") {
            self.image_host.api_key = key;
        }
        if let Some(url) = lookup("DEFAULT_AVATAR_URL") {
            self.default_avatar_url = url;
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(target_arch = "wasm32")]
fn read_var(name: &str) -> Option<String> {
    let value = match name {
        "REGISTRATION_API_URL" => option_env!("REGISTRATION_API_URL"),
        "IMAGE_HOST_UPLOAD_URL" => option_env!("IMAGE_HOST_UPLOAD_URL"),
        "IMAGE_HOST_API_KEY" => option_env!("IMAGE_HOST_API_KEY"),
        "DEFAULT_AVATAR_URL" => option_env!("DEFAULT_AVATAR_URL"),
        _ => None,
    };
    value.filter(|v| !v.trim().is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_empty_toml_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.default_avatar_url, DEFAULT_AVATAR_URL);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "https://hope.example/"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://hope.example/");
        assert_eq!(config.image_host, ImageHostConfig::default());
        assert_eq!(
            config.api.create_profile_url(),
            "https://hope.example/api/CreateProfile"
        );
    }

    #[test]
    fn test_default_create_profile_url() {
        assert_eq!(
            ApiConfig::default().create_profile_url(),
            "http://localhost:5001/api/CreateProfile"
        );
    }

    #[test]
    fn test_upload_endpoint_appends_key() {
        let mut host = ImageHostConfig::default();
        assert_eq!(host.upload_endpoint(), "https://api.imgbb.com/1/upload");

        host.api_key = "abc123".to_string();
        assert_eq!(
            host.upload_endpoint(),
            "https://api.imgbb.com/1/upload?key=abc123"
        );

        host.upload_url = "https://img.example/upload?expiration=600".to_string();
        assert_eq!(
            host.upload_endpoint(),
            "https://img.example/upload?expiration=600&key=abc123"
        );
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("REGISTRATION_API_URL", "https://api.example"),
            ("IMAGE_HOST_API_KEY", "k"),
        ]
        .into_iter()
        .collect();

        let mut config = ClientConfig::default();
        config.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.api.base_url, "https://api.example");
        assert_eq!(config.image_host.api_key, "k");
        assert_eq!(config.image_host.upload_url, default_upload_url());
        assert_eq!(config.default_avatar_url, DEFAULT_AVATAR_URL);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = ClientConfig::default();
        config.image_host.api_key = "secret".to_string();
        let parsed = ClientConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
