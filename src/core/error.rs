use super::response::ApiResponse;
use crate::repositories::StoreError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::{http::StatusCode, response::IntoResponse};

/// Tassonomia unica degli errori, condivisa da admin e user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidParams,
    Unauthorized,
    NotFound,
    Conflict,
    ServerError,
    Unavailable,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            Self::InvalidParams => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Codice numerico dell'envelope, coincide con lo status HTTP
    pub fn code(self) -> u16 {
        self.status().as_u16()
    }

    /// Messaggio di default esposto al client
    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidParams => "invalid parameters",
            Self::Unauthorized => "invalid email or password",
            Self::NotFound => "resource not found",
            Self::Conflict => "user already exists",
            Self::ServerError => "internal server error",
            Self::Unavailable => "service unavailable",
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    kind: ErrorKind,
    message: &'static str,
    details: Option<String>,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: &'static str) -> Self {
        Self {
            kind,
            message,
            details: None,
        }
    }

    /// Dettagli mostrati al client, solo per errori di validazione e di parsing
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    // Common error constructors
    pub fn invalid_params(message: &'static str) -> Self {
        Self::new(ErrorKind::InvalidParams, message)
    }

    pub fn unauthorized() -> Self {
        Self::new(ErrorKind::Unauthorized, ErrorKind::Unauthorized.message())
    }

    pub fn not_found(message: &'static str) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn conflict() -> Self {
        Self::new(ErrorKind::Conflict, ErrorKind::Conflict.message())
    }

    pub fn server_error() -> Self {
        Self::new(ErrorKind::ServerError, ErrorKind::ServerError.message())
    }

    pub fn unavailable() -> Self {
        Self::new(ErrorKind::Unavailable, ErrorKind::Unavailable.message())
    }
}

// i dettagli dello store restano nei log, al client arriva solo il kind
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => Self::not_found(ErrorKind::NotFound.message()),
            StoreError::Conflict => Self::conflict(),
            StoreError::InvalidCredentials => Self::unauthorized(),
            StoreError::Unavailable(_) => Self::unavailable(),
            StoreError::Backend(_) => Self::server_error(),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::invalid_params("validation error").with_details(err.to_string())
    }
}

// body mancante, JSON malformato o campi mancanti: sempre 400 nell'envelope
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::invalid_params("invalid request body").with_details(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::invalid_params("invalid path parameter").with_details(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let msg = match self.details {
            Some(details) => format!("{}: {}", self.message, details),
            None => self.message.to_string(),
        };
        (self.kind.status(), ApiResponse::<()>::error(self.kind.code(), msg)).into_response()
    }
}
