//! Account backend - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, config};
pub use services::root;

use axum::{
    Router,
    routing::{get, post},
};
use repositories::AccountStore;
use services::AccountService;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Crea il router principale dell'applicazione
pub fn create_router<S: AccountStore>(state: Arc<AppState<S>>) -> Router {
    let admins = Arc::clone(&state.admins);
    let users = Arc::clone(&state.users);

    Router::new()
        .route("/", get(root))
        .nest(admins.kind().path(), configure_account_routes(admins))
        .nest(users.kind().path(), configure_account_routes(users))
        .layer(TraceLayer::new_for_http())
}

/// Configura le routes di un tipo di account
///
/// `/list` e `/login` sono statiche e hanno la precedenza su `/{key}`, che
/// vale come email per la GET e come id per la DELETE.
fn configure_account_routes<S: AccountStore>(service: Arc<AccountService<S>>) -> Router {
    use services::*;

    Router::new()
        .route("/", post(create_account::<S>).put(update_account::<S>))
        .route("/list", get(list_accounts::<S>))
        .route("/login", post(login_account::<S>))
        .route(
            "/{key}",
            get(get_account_by_email::<S>).delete(delete_account_by_id::<S>),
        )
        .with_state(service)
}
