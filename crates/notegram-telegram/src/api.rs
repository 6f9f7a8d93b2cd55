//! Telegram Bot API client.
//!
//! Only the two calls Notegram needs. Every response is parsed for the
//! `{ok, description}` envelope regardless of HTTP status, since Telegram
//! reports rejections (bad chat id, blocked bot, ...) that way.

use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error};

use notegram_core::config::schema::DEFAULT_API_BASE;

/// Parse mode for captions and messages.
const PARSE_MODE: &str = "Markdown";

/// Fallback when Telegram rejects a call without a description.
const UNKNOWN_ERROR: &str = "Unknown error";

// ─────────────────────────────────────────────
// Errors / responses
// ─────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, TLS, or body transfer failure. The URL (which carries the
    /// bot token) is stripped before this is built.
    #[error("request failed: {0}")]
    Transport(reqwest::Error),

    /// The body was not a Telegram response envelope.
    #[error("invalid response from Telegram: {0}")]
    InvalidResponse(String),

    /// Telegram answered `ok: false`.
    #[error("{0}")]
    Rejected(String),

    /// The attachment could not be read.
    #[error("failed to read attachment: {0}")]
    Resource(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.without_url())
    }
}

/// Response envelope shared by every Bot API method.
#[derive(Clone, Debug, Deserialize)]
pub struct TelegramResponse {
    pub ok: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
}

impl TelegramResponse {
    /// `Ok` on `ok: true`, otherwise the description as a rejection.
    fn into_result(self) -> Result<TelegramResponse, ApiError> {
        if self.ok {
            Ok(self)
        } else {
            let reason = self
                .description
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
            Err(ApiError::Rejected(reason))
        }
    }
}

// ─────────────────────────────────────────────
// Client
// ─────────────────────────────────────────────

/// Bot API client bound to one bot token.
pub struct TelegramClient {
    client: reqwest::Client,
    api_base: String,
    token: String,
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("api_base", &self.api_base)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl TelegramClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            token: token.into(),
        }
    }

    /// Point the client at another Bot API server (local server, proxy, tests).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Use a preconfigured HTTP client (proxy, timeouts).
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// `{api_base}/bot{token}/{method}`.
    fn method_url(&self, method: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        format!("{}/bot{}/{}", base, self.token, method)
    }

    /// `sendMessage` with Markdown parse mode.
    pub async fn send_message(
        &self,
        chat_id: &str,
        text: &str,
    ) -> Result<TelegramResponse, ApiError> {
        debug!(chat_id, chars = text.chars().count(), "sendMessage");

        let body = json!({
            "chat_id": chat_id,
            "text": text,
            "parse_mode": PARSE_MODE,
        });

        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&body)
            .send()
            .await?;

        read_envelope(response, "sendMessage").await
    }

    /// `sendPhoto` as a multipart upload. The caption (and parse mode) is only
    /// attached when non-empty.
    pub async fn send_photo(
        &self,
        chat_id: &str,
        photo: Vec<u8>,
        file_name: &str,
        caption: &str,
    ) -> Result<TelegramResponse, ApiError> {
        debug!(chat_id, file_name, bytes = photo.len(), "sendPhoto");

        let part = Part::bytes(photo)
            .file_name(file_name.to_string())
            .mime_str(image_mime(file_name))?;

        let mut form = Form::new()
            .text("chat_id", chat_id.to_string())
            .part("photo", part);
        if !caption.is_empty() {
            form = form
                .text("caption", caption.to_string())
                .text("parse_mode", PARSE_MODE);
        }

        let response = self
            .client
            .post(self.method_url("sendPhoto"))
            .multipart(form)
            .send()
            .await?;

        read_envelope(response, "sendPhoto").await
    }
}

/// Parse the response body as a Telegram envelope.
async fn read_envelope(
    response: reqwest::Response,
    method: &str,
) -> Result<TelegramResponse, ApiError> {
    let status = response.status();
    let body = response.text().await?;

    let envelope: TelegramResponse = serde_json::from_str(&body).map_err(|e| {
        error!(method, status = %status, error = %e, "non-JSON response from Telegram");
        ApiError::InvalidResponse(format!("HTTP {status}: {e}"))
    })?;

    debug!(method, status = %status, ok = envelope.ok, "Telegram response");
    envelope.into_result()
}

/// Content type for an uploaded image, from its extension.
fn image_mime(file_name: &str) -> &'static str {
    match file_name.rsplit_once('.').map(|(_, ext)| ext) {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, body_string_contains, header_regex, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TOKEN: &str = "123456:TEST";

    fn client_for(server: &MockServer) -> TelegramClient {
        TelegramClient::new(TOKEN).with_api_base(server.uri())
    }

    #[test]
    fn test_method_url() {
        let client = TelegramClient::new("42:abc");
        assert_eq!(
            client.method_url("sendMessage"),
            "https://api.telegram.org/bot42:abc/sendMessage"
        );

        let client = TelegramClient::new("42:abc").with_api_base("http://localhost:8081/");
        assert_eq!(
            client.method_url("sendPhoto"),
            "http://localhost:8081/bot42:abc/sendPhoto"
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = TelegramClient::new("secret-token");
        let dbg = format!("{client:?}");
        assert!(!dbg.contains("secret-token"));
        assert!(dbg.contains("redacted"));
    }

    #[test]
    fn test_image_mime() {
        assert_eq!(image_mime("a.png"), "image/png");
        assert_eq!(image_mime("a.jpeg"), "image/jpeg");
        assert_eq!(image_mime("a.jpg"), "image/jpeg");
        assert_eq!(image_mime("a.gif"), "image/gif");
        assert_eq!(image_mime("noext"), "application/octet-stream");
    }

    #[test]
    fn test_rejection_without_description() {
        let resp = TelegramResponse {
            ok: false,
            description: None,
            result: None,
        };
        match resp.into_result() {
            Err(ApiError::Rejected(reason)) => assert_eq!(reason, "Unknown error"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_send_message_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(format!("/bot{TOKEN}/sendMessage")))
            .and(body_json(serde_json::json!({
                "chat_id": "-100123",
                "text": "*hello*",
                "parse_mode": "Markdown"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ok": true,
                "result": { "message_id": 7 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let resp = client_for(&server)
            .send_message("-100123", "*hello*")
            .await
            .unwrap();
        assert!(resp.ok);
        assert_eq!(resp.result.unwrap()["message_id"], 7);
    }

    #[tokio::test]
    async fn test_send_message_rejected_with_http_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(format!("/bot{TOKEN}/sendMessage")))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "ok": false,
                "error_code": 400,
                "description": "Bad Request: chat not found"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .send_message("nope", "hi")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Rejected(_)));
        assert_eq!(err.to_string(), "Bad Request: chat not found");
    }

    #[tokio::test]
    async fn test_send_message_non_json_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .send_message("1", "hi")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidResponse(_)));
        assert!(err.to_string().contains("502"));
    }

    #[tokio::test]
    async fn test_network_error_hides_token() {
        let client = TelegramClient::new("very-secret").with_api_base("http://127.0.0.1:1");
        let err = client.send_message("1", "hi").await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert!(!err.to_string().contains("very-secret"));
    }

    #[tokio::test]
    async fn test_send_photo_with_caption() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(format!("/bot{TOKEN}/sendPhoto")))
            .and(header_regex("content-type", "^multipart/form-data"))
            .and(body_string_contains(r#"name="chat_id""#))
            .and(body_string_contains(r#"name="photo"; filename="pic.png""#))
            .and(body_string_contains(r#"name="caption""#))
            .and(body_string_contains("my caption"))
            .and(body_string_contains(r#"name="parse_mode""#))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let resp = client_for(&server)
            .send_photo("@chan", b"PNGDATA".to_vec(), "pic.png", "my caption")
            .await
            .unwrap();
        assert!(resp.ok);
    }

    #[tokio::test]
    async fn test_send_photo_without_caption_omits_parse_mode() {
        let server = MockServer::start().await;

        // A request carrying a caption would hit this mock and fail the expectation.
        Mock::given(method("POST"))
            .and(path(format!("/bot{TOKEN}/sendPhoto")))
            .and(body_string_contains(r#"name="caption""#))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true })),
            )
            .expect(0)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path(format!("/bot{TOKEN}/sendPhoto")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let resp = client_for(&server)
            .send_photo("@chan", b"GIF89a".to_vec(), "anim.gif", "")
            .await
            .unwrap();
        assert!(resp.ok);
    }
}
