//! Lenient JSON object body: absent body and `null` are `None`; anything unparseable is a 400.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde_json::{Map, Value};

/// Request body as an optional JSON object. Content-Type is not checked.
#[derive(Clone, Debug, Default)]
pub struct JsonBody(pub Option<Map<String, Value>>);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::PayloadTooLarge
            } else {
                AppError::BadRequest
            }
        })?;
        parse_object(&bytes).map(JsonBody)
    }
}

fn parse_object(bytes: &[u8]) -> Result<Option<Map<String, Value>>, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Null) => Ok(None),
        Ok(Value::Object(map)) => Ok(Some(map)),
        Ok(_) => Err(AppError::BadRequest),
        Err(e) => {
            tracing::debug!(error = %e, "request body is not JSON");
            Err(AppError::BadRequest)
        }
    }
}
