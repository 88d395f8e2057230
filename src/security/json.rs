use axum::{
    async_trait,
    body::to_bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header::CONTENT_TYPE},
};
use http_body_util::LengthLimitError;
use serde::de::DeserializeOwned;
use serde_json::Deserializer;

use crate::errors::AppError;

pub const MAX_BODY_SIZE_BYTES: usize = 64 * 1024; // 64 KiB upper bound for request bodies

/// JSON body extractor that checks the content type, caps the body size,
/// rejects trailing data and reports the path of the first bad field.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        validate_content_type(req.headers())?;

        let body_bytes = to_bytes(req.into_body(), MAX_BODY_SIZE_BYTES)
            .await
            .map_err(|err| {
                let source = err.into_inner();
                if source.is::<LengthLimitError>() {
                    AppError::PayloadTooLarge
                } else {
                    AppError::InvalidJson(format!("failed to read request body: {source}"))
                }
            })?;

        let mut deserializer = Deserializer::from_slice(body_bytes.as_ref());
        let value = serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
            let path = err.path().to_string();
            let error = err.into_inner();
            if path.is_empty() || path == "." {
                AppError::InvalidJson(error.to_string())
            } else {
                AppError::InvalidJson(format!("at {path}: {error}"))
            }
        })?;

        deserializer
            .end()
            .map_err(|err| AppError::InvalidJson(format!("unexpected trailing data: {err}")))?;

        Ok(ValidatedJson(value))
    }
}

fn validate_content_type(headers: &HeaderMap) -> Result<(), AppError> {
    let is_json = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| mime.trim().to_ascii_lowercase())
        .is_some_and(|mime| mime == "application/json" || mime.ends_with("+json"));

    if is_json {
        Ok(())
    } else {
        Err(AppError::UnsupportedMediaType)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn test_json_content_types_are_accepted() {
        assert!(validate_content_type(&headers_with("application/json")).is_ok());
        assert!(validate_content_type(&headers_with("application/json; charset=utf-8")).is_ok());
        assert!(validate_content_type(&headers_with("application/merge-patch+json")).is_ok());
    }

    #[test]
    fn test_other_content_types_are_rejected() {
        assert!(matches!(
            validate_content_type(&headers_with("text/plain")),
            Err(AppError::UnsupportedMediaType)
        ));
        assert!(matches!(
            validate_content_type(&HeaderMap::new()),
            Err(AppError::UnsupportedMediaType)
        ));
    }
}
