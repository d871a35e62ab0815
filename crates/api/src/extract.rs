//! Request extractors whose rejections use the [`AppError`] body shape.
//!
//! Axum's stock `Json` and `Query` reject with plain-text bodies; these
//! wrappers turn malformed input into `400 { "msg", "code" }` instead.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `axum::Json` with JSON error bodies.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Query` with JSON error bodies.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
