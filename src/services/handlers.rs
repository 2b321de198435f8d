//! HTTP handlers - Adattano le route axum all'AccountService
//!
//! Gli handler sono generici sullo store: la stessa funzione serve sia
//! `/admin` che `/user`, lo stato è il service del tipo di account.
//! Body e path malformati sono rifiutati dagli estrattori di `core::extract`
//! con lo stesso envelope degli altri errori.

use super::AccountService;
use crate::core::extract::{Json, Path};
use crate::core::{ApiResponse, AppError};
use crate::dtos::{AccountDTO, CreateAccountDTO, LoginDTO, UpdateAccountDTO};
use crate::repositories::AccountStore;
use axum::extract::State;
use std::sync::Arc;
use tracing::instrument;

type Service<S> = State<Arc<AccountService<S>>>;

/// GET /<entity>/{email}
#[instrument(skip(service), fields(kind = %service.kind()))]
pub async fn get_account_by_email<S: AccountStore>(
    State(service): Service<S>,
    Path(email): Path<String>,
) -> Result<ApiResponse<AccountDTO>, AppError> {
    let account = service.get_by_email(&email).await?;
    Ok(ApiResponse::success(account))
}

/// GET /<entity>/list
#[instrument(skip(service), fields(kind = %service.kind()))]
pub async fn list_accounts<S: AccountStore>(
    State(service): Service<S>,
) -> Result<ApiResponse<Vec<AccountDTO>>, AppError> {
    let accounts = service.get_list().await?;
    Ok(ApiResponse::success(accounts))
}

/// POST /<entity>
#[instrument(skip(service, body), fields(kind = %service.kind()))]
pub async fn create_account<S: AccountStore>(
    State(service): Service<S>,
    Json(body): Json<CreateAccountDTO>, // JSON body
) -> Result<ApiResponse<AccountDTO>, AppError> {
    let account = service.create(body).await?;
    Ok(ApiResponse::success(account))
}

/// POST /<entity>/login
#[instrument(skip(service, body), fields(kind = %service.kind()))]
pub async fn login_account<S: AccountStore>(
    State(service): Service<S>,
    Json(body): Json<LoginDTO>,
) -> Result<ApiResponse<AccountDTO>, AppError> {
    let account = service.login(body).await?;
    Ok(ApiResponse::success(account))
}

/// PUT /<entity>
#[instrument(skip(service, body), fields(kind = %service.kind()))]
pub async fn update_account<S: AccountStore>(
    State(service): Service<S>,
    Json(body): Json<UpdateAccountDTO>,
) -> Result<ApiResponse<AccountDTO>, AppError> {
    let account = service.update(body).await?;
    Ok(ApiResponse::success(account))
}

/// DELETE /<entity>/{id}
#[instrument(skip(service), fields(kind = %service.kind()))]
pub async fn delete_account_by_id<S: AccountStore>(
    State(service): Service<S>,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, AppError> {
    service.delete_by_id(&id).await?;
    Ok(ApiResponse::empty())
}
