//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! `account` contiene la logica delle operazioni, `handlers` gli endpoint
//! HTTP che la espongono.

pub mod account;
pub mod handlers;

// Re-exports per facilitare l'import
pub use account::AccountService;
pub use handlers::{
    create_account, delete_account_by_id, get_account_by_email, list_accounts, login_account,
    update_account,
};

use axum::{http::StatusCode, response::IntoResponse};

/// Root endpoint - health check
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
