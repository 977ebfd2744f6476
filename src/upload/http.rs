//! HTTP client for the conversion service
//!
//! POSTs the bundle as multipart form data with repeated `files` parts
//! (bundle order = selection order) and normalizes the response. The
//! service may signal semantic failure inside a 2xx response via an
//! explicit `error` field, and may deliver the payload either as a
//! structured object or as a JSON-encoded string.

use serde_json::Value;

use super::ConversionService;
use crate::error::{Result, ShapeviewError};
use crate::files::FileSet;
use crate::geo::FeatureCollection;

/// Default conversion endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/upload";

/// Environment variable overriding the endpoint.
pub const ENDPOINT_ENV_VAR: &str = "SHAPEVIEW_CONVERT_URL";

/// Generic reason used when the transport reports failure without a
/// service-provided message.
const GENERIC_FAILURE: &str = "Failed to upload shapefile";

/// Generic reason shown when the response body cannot be understood.
/// The parse detail is logged, never surfaced in the banner.
const MALFORMED_FAILURE: &str = "Invalid response from conversion service";

/// Multipart field name shared by every file in the bundle.
const FILES_FIELD: &str = "files";

/// Real conversion-service client.
#[derive(Debug, Clone)]
pub struct HttpConversionService {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpConversionService {
    /// Create a client against the configured endpoint
    /// (`SHAPEVIEW_CONVERT_URL`, falling back to the local default).
    pub fn new() -> Self {
        let endpoint =
            std::env::var(ENDPOINT_ENV_VAR).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self::with_endpoint(endpoint)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpConversionService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversionService for HttpConversionService {
    async fn convert(&self, files: &FileSet) -> Result<FeatureCollection> {
        let mut form = reqwest::multipart::Form::new();
        for file in files.files() {
            let part = reqwest::multipart::Part::bytes(file.contents.clone())
                .file_name(file.name.clone());
            form = form.part(FILES_FIELD, part);
        }

        tracing::debug!(
            endpoint = %self.endpoint,
            count = files.len(),
            "posting shapefile bundle"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ShapeviewError::Transport {
                message: e.to_string(),
            })?;

        let transport_ok = response.status().is_success();
        let body = response
            .text()
            .await
            .map_err(|e| ShapeviewError::Transport {
                message: e.to_string(),
            })?;

        parse_response(transport_ok, &body)
    }
}

/// Normalize a response body per the service contract:
/// 1. a string body is JSON-decoded once more (encoded-text delivery);
/// 2. an explicit `error` field overrides success semantics at any status;
/// 3. a non-2xx status without an error field gets the generic reason;
/// 4. an unparsable 2xx body is a malformed response;
/// 5. otherwise the body deserializes into a feature collection.
fn parse_response(transport_ok: bool, body: &str) -> Result<FeatureCollection> {
    let decoded = decode_body(body);

    if let Ok(value) = &decoded {
        if let Some(message) = value.get("error").and_then(Value::as_str) {
            return Err(ShapeviewError::Application {
                message: message.to_string(),
            });
        }
    }

    if !transport_ok {
        return Err(ShapeviewError::Application {
            message: GENERIC_FAILURE.to_string(),
        });
    }

    match decoded {
        Ok(value) => serde_json::from_value(value).map_err(malformed),
        Err(e) => Err(malformed(e)),
    }
}

fn malformed(e: serde_json::Error) -> ShapeviewError {
    tracing::warn!("undeserializable response body: {e}");
    ShapeviewError::MalformedResponse {
        message: MALFORMED_FAILURE.to_string(),
    }
}

/// Parse the body, unwrapping one level of JSON-encoded text.
fn decode_body(body: &str) -> std::result::Result<Value, serde_json::Error> {
    let value: Value = serde_json::from_str(body)?;
    match value {
        Value::String(inner) => serde_json::from_str(&inner),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const VALID_BODY: &str =
        r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[1.0,2.0]},"properties":{}}]}"#;

    #[test]
    fn test_structured_success_body() {
        let collection = parse_response(true, VALID_BODY).unwrap();
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_json_encoded_string_body_is_unwrapped() {
        let encoded = serde_json::to_string(VALID_BODY).unwrap();
        let collection = parse_response(true, &encoded).unwrap();
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_error_field_overrides_transport_success() {
        let err = parse_response(true, r#"{"error": "unsupported projection"}"#).unwrap_err();
        match err {
            ShapeviewError::Application { message } => {
                assert_eq!(message, "unsupported projection")
            }
            other => panic!("expected Application error, got {other:?}"),
        }
    }

    #[test]
    fn test_error_field_wins_on_failure_status_too() {
        let err = parse_response(false, r#"{"error": "bad dbf record"}"#).unwrap_err();
        match err {
            ShapeviewError::Application { message } => assert_eq!(message, "bad dbf record"),
            other => panic!("expected Application error, got {other:?}"),
        }
    }

    #[test]
    fn test_failure_status_without_error_field_gets_generic_reason() {
        let err = parse_response(false, "<html>502 Bad Gateway</html>").unwrap_err();
        assert_eq!(err.notification_text(), "Failed to upload shapefile");
    }

    #[test]
    fn test_unparsable_success_body_is_malformed() {
        let err = parse_response(true, "not json at all").unwrap_err();
        assert_eq!(err.error_code(), "MALFORMED_RESPONSE");
        // The banner carries the generic reason, never the parse detail.
        assert_eq!(err.notification_text(), MALFORMED_FAILURE);
    }

    #[test]
    fn test_wrong_shape_body_gets_generic_banner_too() {
        let err =
            parse_response(true, r#"{"type":"FeatureCollection","features":"nope"}"#).unwrap_err();
        assert_eq!(err.error_code(), "MALFORMED_RESPONSE");
        assert_eq!(err.notification_text(), MALFORMED_FAILURE);
    }

    #[test]
    fn test_endpoint_defaults_are_wired() {
        let service = HttpConversionService::with_endpoint("http://example.test/convert");
        assert_eq!(service.endpoint(), "http://example.test/convert");
    }
}
