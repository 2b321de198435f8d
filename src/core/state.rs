//! Application State - Stato globale dell'applicazione
//!
//! Contiene i service dei due tipi di account; il generatore di id è
//! condiviso tra i due service, che ne tengono ciascuno un `Arc`.

use super::config::Config;
use super::snowflake::SnowflakeGenerator;
use crate::entities::AccountKind;
use crate::repositories::{AccountStore, MemoryAccountStore, MySqlAccountStore, PoolType};
use crate::services::AccountService;
use std::sync::Arc;

/// Stato globale dell'applicazione condiviso tra tutte le route
pub struct AppState<S: AccountStore> {
    /// Service per la gestione degli amministratori
    pub admins: Arc<AccountService<S>>,

    /// Service per la gestione degli utenti
    pub users: Arc<AccountService<S>>,
}

impl<S: AccountStore> AppState<S> {
    /// Crea una nuova istanza di AppState a partire dai due store
    ///
    /// # Arguments
    /// * `admin_store` - Store degli amministratori
    /// * `user_store` - Store degli utenti
    /// * `ids` - Generatore di id condiviso
    /// * `config` - Costo bcrypt e deadline delle chiamate allo store
    pub fn new(admin_store: S, user_store: S, ids: Arc<SnowflakeGenerator>, config: &Config) -> Self {
        let service = |store: S| {
            Arc::new(AccountService::new(
                store,
                Arc::clone(&ids),
                config.bcrypt_cost,
                config.store_timeout(),
            ))
        };
        let admins = service(admin_store);
        let users = service(user_store);

        Self { admins, users }
    }
}

impl AppState<MySqlAccountStore> {
    /// Store MySQL per entrambi i tipi, sullo stesso pool
    pub fn with_pool(pool: PoolType, ids: Arc<SnowflakeGenerator>, config: &Config) -> Self {
        Self::new(
            MySqlAccountStore::new(pool.clone(), AccountKind::Admin),
            MySqlAccountStore::new(pool, AccountKind::User),
            ids,
            config,
        )
    }
}

impl AppState<MemoryAccountStore> {
    pub fn in_memory(ids: Arc<SnowflakeGenerator>, config: &Config) -> Self {
        Self::new(
            MemoryAccountStore::new(AccountKind::Admin),
            MemoryAccountStore::new(AccountKind::User),
            ids,
            config,
        )
    }
}
