use crate::models::DetectionResponse;
use reqwest::{multipart, Client, StatusCode};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost/faces";

/// Per-request timeout used when nothing else is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors that can occur when talking to the face service
#[derive(Debug, Error)]
pub enum FaceApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    #[error("Server error: HTTP {0}")]
    ServiceError(u16),

    #[error("Invalid response format: {0}")]
    MalformedResponse(String),

    #[error("Failed to read image {}: {source}", path.display())]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Face detection API client
///
/// Submits one image per request as a multipart form with a single `image`
/// field. The underlying connection pool is shared across calls.
pub struct FaceApiClient {
    endpoint: String,
    client: Client,
}

impl FaceApiClient {
    /// Create a new client for the given endpoint
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, FaceApiError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit a single image and return the parsed detection response
    pub async fn detect(&self, image_path: &Path) -> Result<DetectionResponse, FaceApiError> {
        let bytes = tokio::fs::read(image_path)
            .await
            .map_err(|source| FaceApiError::ImageRead {
                path: image_path.to_path_buf(),
                source,
            })?;

        let file_name = image_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());

        let part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/octet-stream")?;
        let form = multipart::Form::new().part("image", part);

        tracing::debug!("Submitting {} to {}", image_path.display(), self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::error!("Face service rejected {}: {}", image_path.display(), status);
            return Err(FaceApiError::ServiceError(status.as_u16()));
        }

        let body = response.bytes().await.map_err(transport_error)?;
        let detection = parse_detection_response(&body)?;

        tracing::debug!(
            "Received {} face(s) for {}",
            detection.faces().len(),
            image_path.display()
        );

        Ok(detection)
    }
}

fn transport_error(err: reqwest::Error) -> FaceApiError {
    if err.is_timeout() {
        FaceApiError::Timeout(err)
    } else {
        FaceApiError::Request(err)
    }
}

/// Parse a 200 response body; a reply without a `faces` array is rejected
pub fn parse_detection_response(body: &[u8]) -> Result<DetectionResponse, FaceApiError> {
    let response: DetectionResponse = serde_json::from_slice(body)
        .map_err(|e| FaceApiError::MalformedResponse(format!("Failed to parse response: {}", e)))?;

    if response.faces.is_none() {
        return Err(FaceApiError::MalformedResponse("Missing faces array".into()));
    }

    Ok(response)
}
