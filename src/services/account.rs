//! Account services - Operazioni su admin e user
//!
//! Un `AccountService` per tipo di account: stesse operazioni, stesso
//! contratto. Ogni operazione valida le precondizioni, fa una chiamata allo
//! store e traduce l'esito nella tassonomia di `AppError`.

use crate::core::{AppError, SnowflakeGenerator};
use crate::dtos::{AccountDTO, CreateAccountDTO, LoginDTO, UpdateAccountDTO};
use crate::entities::{Account, AccountKind};
use crate::repositories::{AccountStore, StoreError};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use validator::Validate;

pub struct AccountService<S> {
    store: S,
    ids: Arc<SnowflakeGenerator>,
    bcrypt_cost: u32,
    store_timeout: Duration,
}

impl<S: AccountStore> AccountService<S> {
    pub fn new(
        store: S,
        ids: Arc<SnowflakeGenerator>,
        bcrypt_cost: u32,
        store_timeout: Duration,
    ) -> Self {
        Self {
            store,
            ids,
            bcrypt_cost,
            store_timeout,
        }
    }

    pub fn kind(&self) -> AccountKind {
        self.store.kind()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    #[instrument(skip(self), fields(kind = %self.kind()))]
    pub async fn get_by_email(&self, email: &str) -> Result<AccountDTO, AppError> {
        debug!("Fetching account by email");
        let account = self
            .call(self.store.get_by_email(email))
            .await
            .map_err(|err| self.fail("get_by_email", err))?;

        Ok(AccountDTO::from(account))
    }

    #[instrument(skip(self), fields(kind = %self.kind()))]
    pub async fn get_list(&self) -> Result<Vec<AccountDTO>, AppError> {
        let accounts = self
            .call(self.store.get_list())
            .await
            .map_err(|err| self.fail("get_list", err))?;

        debug!("Found {} accounts", accounts.len());
        Ok(accounts.into_iter().map(AccountDTO::from).collect())
    }

    #[instrument(skip(self, body), fields(kind = %self.kind(), email = %body.email))]
    pub async fn create(&self, body: CreateAccountDTO) -> Result<AccountDTO, AppError> {
        body.validate().map_err(|err| {
            warn!("Rejected create request: {}", err);
            AppError::from(err)
        })?;

        // pre-check best effort: la race con un'altra create la chiude il
        // vincolo UNIQUE dello store, che risponde Conflict
        match self.call(self.store.get_by_email(&body.email)).await {
            Ok(_) => {
                warn!("Email already registered");
                return Err(AppError::conflict());
            }
            Err(StoreError::NotFound) => {}
            Err(err) => info!("Existence pre-check failed, trying the insert anyway: {}", err),
        }

        let password = self.hash(&body.password)?;
        let account = Account {
            id: self.ids.generate().to_string(),
            name: body.name,
            email: body.email,
            password,
        };

        self.call(self.store.create(&account))
            .await
            .map_err(|err| self.fail("create", err))?;

        info!(id = %account.id, "Account created");
        Ok(AccountDTO::from(account))
    }

    #[instrument(skip(self, body), fields(kind = %self.kind(), email = %body.email))]
    pub async fn login(&self, body: LoginDTO) -> Result<AccountDTO, AppError> {
        let account = self
            .call(self.store.login(&body.email, &body.password))
            .await
            .map_err(|err| self.fail("login", err))?;

        info!(id = %account.id, "Login succeeded");
        Ok(AccountDTO::from(account))
    }

    #[instrument(skip(self, body), fields(kind = %self.kind(), id = %body.id))]
    pub async fn update(&self, body: UpdateAccountDTO) -> Result<AccountDTO, AppError> {
        body.validate().map_err(|err| {
            warn!("Rejected update request: {}", err);
            AppError::from(err)
        })?;

        self.call(self.store.get_by_id(&body.id))
            .await
            .map_err(|err| self.fail("update", err))?;

        let password = self.hash(&body.password)?;
        let account = Account {
            id: body.id,
            name: body.name,
            email: body.email,
            password,
        };

        self.call(self.store.update(&account.id, &account))
            .await
            .map_err(|err| self.fail("update", err))?;

        info!("Account updated");
        Ok(AccountDTO::from(account))
    }

    #[instrument(skip(self), fields(kind = %self.kind()))]
    pub async fn delete_by_id(&self, id: &str) -> Result<(), AppError> {
        self.call(self.store.delete_by_id(id))
            .await
            .map_err(|err| self.fail("delete_by_id", err))?;

        info!("Account deleted");
        Ok(())
    }

    /// Esegue una chiamata allo store con la deadline configurata
    async fn call<T, F>(&self, op: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        match tokio::time::timeout(self.store_timeout, op).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::Unavailable(format!(
                "store call exceeded {:?}",
                self.store_timeout
            ))),
        }
    }

    // unico punto in cui gli errori dello store vengono loggati
    fn fail(&self, op: &'static str, err: StoreError) -> AppError {
        info!(kind = %self.kind(), op, "Store call failed: {}", err);
        AppError::from(err)
    }

    fn hash(&self, password: &str) -> Result<String, AppError> {
        Account::hash_password(password, self.bcrypt_cost).map_err(|err| {
            error!("Failed to hash password: {}", err);
            AppError::server_error()
        })
    }
}
