// src/common/extract.rs

// Extratores que convertem a rejeição do axum em AppError,
// para que até um JSON malformado volte no envelope padrão.

use axum::extract::{FromRequest, FromRequestParts};

use crate::common::error::AppError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
