//! Request extractors whose rejections render as `AppError::BadRequest`.
//!
//! Axum's stock extractors answer malformed input with plain-text bodies. These
//! wrappers keep the `{ "error": ... }` body shape used by every other error.

use axum::extract::FromRequest;
use axum::extract::FromRequestParts;

use crate::server::error::AppError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
