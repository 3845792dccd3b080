// src/presentation/http/extractors.rs
//! Wrappers around axum's extractors whose rejections are reported through
//! `HttpError`, so malformed input always comes back as a JSON 400.
use super::error::HttpError;
use axum::extract::{FromRequest, FromRequestParts};

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(HttpError))]
pub struct ApiJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(HttpError))]
pub struct ApiPath<T>(pub T);

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Form), rejection(HttpError))]
pub struct ApiForm<T>(pub T);
