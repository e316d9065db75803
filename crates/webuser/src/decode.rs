//! JSON request-body decoding.
//!
//! Clients either post the JSON document as the raw body, or wrap it in a
//! urlencoded form under the `data` field. The `Content-Type` header decides
//! which source is read.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequest, Request},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Media type of urlencoded form bodies.
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Form field holding the JSON document in form-encoded requests.
pub const FORM_DATA_FIELD: &str = "data";

/// Errors raised while decoding a request body.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Failed to read request body: {0}")]
    Body(#[from] BytesRejection),
    #[error("Form field `data` is missing")]
    MissingFormField,
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl IntoResponse for DecodeError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "Rejected request body");

        match self {
            Self::Body(rejection) => rejection.into_response(),
            other => (StatusCode::BAD_REQUEST, other.to_string()).into_response(),
        }
    }
}

/// Returns true if `content_type` names a urlencoded form.
///
/// Parameters such as `charset` are ignored and the comparison is case
/// insensitive.
pub fn is_form_encoded(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|value| value.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(FORM_URLENCODED))
}

/// Decode a JSON document from a request body.
///
/// Form-encoded bodies are read from the `data` field; anything else,
/// including a missing content type, is parsed as JSON directly.
pub fn decode_json<T: DeserializeOwned>(
    content_type: Option<&str>,
    body: &[u8],
) -> Result<T, DecodeError> {
    if is_form_encoded(content_type) {
        let data = url::form_urlencoded::parse(body)
            .find(|(key, _)| key == FORM_DATA_FIELD)
            .map(|(_, value)| value.into_owned())
            .ok_or(DecodeError::MissingFormField)?;
        Ok(serde_json::from_str(&data)?)
    } else {
        Ok(serde_json::from_slice(body)?)
    }
}

/// Extractor that decodes `T` with [`decode_json`].
///
/// Rejects with 400 on malformed input.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeJson<T>(pub T);

impl<T, S> FromRequest<S> for DecodeJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = DecodeError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let body = Bytes::from_request(req, state).await?;

        decode_json(content_type.as_deref(), &body).map(DecodeJson)
    }
}
