//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Ogni store gestisce le operazioni di persistenza per un tipo di account.
//! `AccountStore` è l'interfaccia usata dai service; le implementazioni sono
//! MySQL (sqlx) e in memoria.

pub mod memory;
pub mod mysql;
pub mod traits;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{AccountStore, StoreError};

pub use memory::MemoryAccountStore;
pub use mysql::MySqlAccountStore;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::time::Duration;

// alias di tipo per il pool, per semplificare lo switch in caso in cui vogliamo usare un altro db
pub type PoolType = MySqlPool;

/// Apre il pool di connessioni e applica le migrations in `migrations/`
pub async fn connect(
    database_url: &str,
    max_connections: u32,
    connection_lifetime: Duration,
) -> Result<PoolType, sqlx::Error> {
    let pool = MySqlPoolOptions::new()
        .max_connections(max_connections)
        .max_lifetime(connection_lifetime)
        .connect(database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}
