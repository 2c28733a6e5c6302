//! HTTP client for the external coaching API.
//!
//! Failures split into the two wire-visible classes: `Transport` (no HTTP
//! response at all) and `Status` (non-2xx with a server-supplied message).
//! Successful bodies are forwarded verbatim as `serde_json::Value` — the
//! frontend owns envelope normalization, so no shape assumptions are made
//! here beyond the upload-presign fields this module itself consumes.

use serde_json::{json, Value};
use shared::{ApiFailure, Cycle, UploadRequest};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("coaching api returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response shape: {0}")]
    Shape(String),
}

impl ApiError {
    pub fn to_failure(&self) -> ApiFailure {
        match self {
            ApiError::Transport(error) => ApiFailure::Transport(error.to_string()),
            ApiError::Status { status, message } => ApiFailure::Server {
                status: *status,
                message: message.clone(),
            },
            ApiError::Shape(detail) => {
                ApiFailure::Transport(format!("unexpected response shape: {detail}"))
            }
        }
    }
}

/// Server-supplied error message, conventionally under `message` or
/// `error`; falls back to the status code.
pub fn server_message(status: u16, body: Option<&Value>) -> String {
    body.and_then(|body| {
        body.get("message")
            .or_else(|| body.get("error"))
            .and_then(Value::as_str)
            .map(str::to_string)
    })
    .unwrap_or_else(|| format!("request failed with status {status}"))
}

pub struct CoachingApi {
    http: reqwest::Client,
    base_url: String,
}

impl CoachingApi {
    pub const BASE_URL_ENV: &'static str = "STRIDE_API_URL";
    const DEFAULT_BASE_URL: &'static str = "http://localhost:4000/api";

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        let base_url = std::env::var(Self::BASE_URL_ENV)
            .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub async fn list_recovery_protocols(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Value, ApiError> {
        self.get_json(&format!(
            "/recovery-protocols?page={page}&pageSize={page_size}"
        ))
        .await
    }

    pub async fn approve_recovery_protocol(&self, protocol_id: u64) -> Result<(), ApiError> {
        self.post_json(&format!("/recovery-protocols/{protocol_id}/approve"), None)
            .await
            .map(|_| ())
    }

    pub async fn list_programs(&self, cycle: Cycle) -> Result<Value, ApiError> {
        self.get_json(&format!("/programs?cycle={}", cycle.as_query()))
            .await
    }

    pub async fn active_program(&self) -> Result<Value, ApiError> {
        self.get_json("/programs/active").await
    }

    /// Request a presigned upload slot; returns `(upload_url, object_key)`.
    pub async fn request_upload_url(
        &self,
        request: &UploadRequest,
    ) -> Result<(String, String), ApiError> {
        let body = json!({
            "fileName": request.file_name,
            "kind": request.kind,
            "contentType": request.content_type,
            "byteSize": request.byte_size,
        });
        let response = self.post_json("/uploads/presign", Some(&body)).await?;
        let record = shared::envelope::single_record(&response).unwrap_or(response);
        let upload_url = record
            .get("uploadUrl")
            .and_then(Value::as_str)
            .ok_or_else(|| ApiError::Shape("presign response missing uploadUrl".to_string()))?;
        let object_key = record
            .get("objectKey")
            .and_then(Value::as_str)
            .ok_or_else(|| ApiError::Shape("presign response missing objectKey".to_string()))?;
        Ok((upload_url.to_string(), object_key.to_string()))
    }

    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let response = self
            .http
            .get(format!("{}{path}", self.base_url))
            .send()
            .await?;
        Self::into_json(response).await
    }

    async fn post_json(&self, path: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        let mut request = self.http.post(format!("{}{path}", self.base_url));
        if let Some(body) = body {
            request = request.json(body);
        }
        Self::into_json(request.send().await?).await
    }

    async fn into_json(response: reqwest::Response) -> Result<Value, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body: Option<Value> = response.json().await.ok();
            Err(ApiError::Status {
                status: status.as_u16(),
                message: server_message(status.as_u16(), body.as_ref()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_prefers_message_then_error() {
        let with_message = json!({ "message": "athlete not found", "error": "ignored" });
        assert_eq!(server_message(404, Some(&with_message)), "athlete not found");

        let with_error = json!({ "error": "forbidden" });
        assert_eq!(server_message(403, Some(&with_error)), "forbidden");
    }

    #[test]
    fn server_message_falls_back_to_status() {
        assert_eq!(server_message(500, None), "request failed with status 500");
        let non_string = json!({ "message": 17 });
        assert_eq!(
            server_message(500, Some(&non_string)),
            "request failed with status 500"
        );
    }

    #[test]
    fn status_errors_become_server_failures() {
        let error = ApiError::Status {
            status: 409,
            message: "already approved".to_string(),
        };
        assert_eq!(
            error.to_failure(),
            ApiFailure::Server {
                status: 409,
                message: "already approved".to_string()
            }
        );
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let api = CoachingApi::new("http://localhost:4000/api/");
        assert_eq!(api.base_url, "http://localhost:4000/api");
    }
}
