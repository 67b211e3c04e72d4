//! Request body extraction for the create endpoints.
//!
//! JSON and urlencoded bodies are decoded into the request type. A body with
//! any other content type, or a blank one, yields the request's default so
//! that validation reports the missing fields.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form,
};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::handlers::AppError;

/// The body could not be decoded as its declared content type.
#[derive(Debug, Error)]
#[error("Invalid request body: {0}")]
pub struct InvalidBody(pub String);

/// A decoded request payload.
#[derive(Debug)]
pub struct Payload<T>(pub T);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(request: &Request) -> BodyKind {
    let Some(content_type) = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return BodyKind::Other;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
    {
        BodyKind::Json
    } else if essence == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let kind = body_kind(&req);

        if kind == BodyKind::Form {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|err| InvalidBody(err.body_text()))?;
            return Ok(Self(value));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|err| InvalidBody(err.body_text()))?;

        if kind == BodyKind::Other || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        let value = serde_json::from_slice(&bytes).map_err(|err| InvalidBody(err.to_string()))?;
        Ok(Self(value))
    }
}
