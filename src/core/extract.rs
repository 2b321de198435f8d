//! Extractors - `Json` e `Path` con errori nell'envelope dell'applicazione
//!
//! Stesso comportamento degli estrattori di axum, ma una richiesta
//! malformata viene rifiutata con un `AppError` (400, `{code, msg}`) invece
//! della risposta in testo semplice di axum.

use super::error::AppError;
use axum::extract::{FromRequest, FromRequestParts};

/// Body JSON, rifiutato come `InvalidParams`
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

/// Parametro di path, rifiutato come `InvalidParams`
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);
