//! # Image hosting for profile photos
//!
//! [`ImageHost`] is the seam between the registration flow and whichever service
//! stores the photo. The only thing the flow needs back is a public display URL.
//!
//! [`ImgbbClient`] talks to imgbb (or anything speaking its API): a multipart
//! `POST` with the file in an `image` field, answered by
//! `{ "data": { "display_url": "..." } }`.

use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::config::ImageHostConfig;
use crate::error::RegistrationError;
use crate::models::PhotoFile;

/// Async trait for uploading a photo and getting back its display URL.
pub trait ImageHost {
    fn upload(
        &self,
        photo: &PhotoFile,
    ) -> impl std::future::Future<Output = Result<String, RegistrationError>>;
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    data: UploadData,
}

#[derive(Debug, Deserialize)]
struct UploadData {
    display_url: String,
}

/// Pull `data.display_url` out of an upload response body.
pub(crate) fn parse_display_url(body: &str) -> Result<String, RegistrationError> {
    let parsed: UploadResponse = serde_json::from_str(body)?;
    if parsed.data.display_url.is_empty() {
        return Err(RegistrationError::Upload(
            "image host returned an empty display URL".to_string(),
        ));
    }
    Ok(parsed.data.display_url)
}

/// imgbb upload client.
#[derive(Clone, Debug)]
pub struct ImgbbClient {
    client: reqwest::Client,
    config: ImageHostConfig,
}

impl ImgbbClient {
    pub fn new(config: ImageHostConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

impl ImageHost for ImgbbClient {
    async fn upload(&self, photo: &PhotoFile) -> Result<String, RegistrationError> {
        tracing::info!(file = %photo.name, bytes = photo.size(), "uploading profile photo");

        let part = Part::bytes(photo.bytes.clone())
            .file_name(photo.name.clone())
            .mime_str(photo.mime())?;
        let form = Form::new().part("image", part);

        let resp = self
            .client
            .post(self.config.upload_endpoint())
            .multipart(form)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), body = %text, "image host rejected upload");
            return Err(RegistrationError::Upload(format!(
                "image host answered {}",
                status.as_u16()
            )));
        }

        let url = parse_display_url(&text)?;
        tracing::debug!(%url, "profile photo uploaded");
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::{closed_url, CannedServer};

    const IMGBB_OK: &str =
        r#"{"data":{"display_url":"https://i.ibb.co/98W13PY/me.png"},"success":true,"status":200}"#;

    fn client_at(base_url: &str, api_key: &str) -> ImgbbClient {
        ImgbbClient::new(ImageHostConfig {
            upload_url: format!("{base_url}/1/upload"),
            api_key: api_key.to_string(),
        })
    }

    #[tokio::test]
    async fn test_upload_sends_multipart_image_field() {
        let server = CannedServer::start(200, IMGBB_OK).await;
        let client = client_at(&server.url, "abc123");
        let photo = PhotoFile::new("me.png", b"PNGDATA".to_vec()).with_content_type("image/png");

        let url = client.upload(&photo).await.unwrap();
        let request = server.captured().await;

        assert_eq!(url, "https://i.ibb.co/98W13PY/me.png");
        assert_eq!(request.request_line(), "POST /1/upload?key=abc123 HTTP/1.1");
        assert!(request
            .header("content-type")
            .unwrap()
            .starts_with("multipart/form-data; boundary="));
        let body = request.body_text();
        assert!(body.contains(r#"name="image"; filename="me.png""#), "{body}");
        assert!(body.contains("image/png"), "{body}");
        assert!(body.contains("PNGDATA"), "{body}");
    }

    #[tokio::test]
    async fn test_upload_rejection_reports_status_only() {
        let server = CannedServer::start(400, "<html><body>Invalid API v1 key.</body></html>").await;
        let client = client_at(&server.url, "bad");

        let err = client
            .upload(&PhotoFile::new("me.png", vec![1, 2, 3]))
            .await
            .unwrap_err();
        server.captured().await;

        let RegistrationError::Upload(message) = &err else {
            panic!("expected an upload error, got {err:?}");
        };
        assert_eq!(message, "image host answered 400");
        assert!(!err.to_string().contains("html"));
    }

    #[tokio::test]
    async fn test_upload_malformed_answer() {
        let server = CannedServer::start(200, r#"{"success":true}"#).await;
        let client = client_at(&server.url, "");

        let err = client
            .upload(&PhotoFile::new("me.png", vec![1]))
            .await
            .unwrap_err();
        let request = server.captured().await;

        assert_eq!(request.request_line(), "POST /1/upload HTTP/1.1");
        assert!(matches!(err, RegistrationError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_upload_connection_refused() {
        let client = client_at(&closed_url().await, "k");

        let err = client
            .upload(&PhotoFile::new("me.png", vec![1]))
            .await
            .unwrap_err();

        assert!(matches!(err, RegistrationError::Transport(_)));
    }

    #[test]
    fn test_parse_display_url() {
        let body = r#"{
            "data": {
                "id": "2ndCYJK",
                "url": "https://i.ibb.co/w04Prt6/c1f64245afb2.gif",
                "display_url": "https://i.ibb.co/98W13PY/c1f64245afb2.gif"
            },
            "success": true,
            "status": 200
        }"#;
        assert_eq!(
            parse_display_url(body).unwrap(),
            "https://i.ibb.co/98W13PY/c1f64245afb2.gif"
        );
    }

    #[test]
    fn test_parse_display_url_missing_field() {
        let err = parse_display_url(r#"{"data":{"url":"x"}}"#).unwrap_err();
        assert!(matches!(err, RegistrationError::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_display_url_empty() {
        let err = parse_display_url(r#"{"data":{"display_url":""}}"#).unwrap_err();
        assert!(matches!(err, RegistrationError::Upload(_)));
    }
}
