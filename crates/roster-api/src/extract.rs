//! JSON body extractor whose rejection is an [`ApiError`].
//!
//! Plain [`axum::Json`] answers malformed bodies with a text/plain 4xx; this
//! wrapper routes them through [`ApiError`] so every client error has the
//! same JSON shape.

use axum::extract::FromRequest;

use crate::error::ApiError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
