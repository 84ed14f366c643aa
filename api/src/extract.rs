//! Body extractor for the `{ "data": {...} }` request envelope.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::response::ApiError;

/// Extracts the object nested under `data` in a JSON request body.
///
/// An empty body, a body without `data`, or a `data` that is not an object
/// all yield `T::default()`, leaving it to the validators to report what is
/// missing. Only a body that is not JSON at all is rejected here, with 400.
#[derive(Debug, Clone, Default)]
pub struct Envelope<T>(pub T);

impl<S, T> FromRequest<S> for Envelope<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|err| ApiError::bad_request(err.body_text()))?;

        decode(&bytes).map(Envelope)
    }
}

fn decode<T>(bytes: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    let body: Value = serde_json::from_slice(bytes)
        .map_err(|err| ApiError::bad_request(format!("Malformed JSON body: {err}")))?;

    match body {
        Value::Object(mut map) => match map.remove("data") {
            Some(data @ Value::Object(_)) => Ok(serde_json::from_value(data).unwrap_or_default()),
            _ => Ok(T::default()),
        },
        _ => Ok(T::default()),
    }
}
