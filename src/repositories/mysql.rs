//! MySqlAccountStore - Repository MySQL per admin e user
//!
//! Una tabella per tipo di account (`admins`, `users`), schema in
//! `migrations/`. Le query sono verificate a run-time con `query_as` +
//! `FromRow`, così la build non dipende da un database raggiungibile.

use super::{AccountStore, StoreError};
use crate::entities::{Account, AccountKind};
use sqlx::MySqlPool;

pub struct MySqlAccountStore {
    connection_pool: MySqlPool,
    kind: AccountKind,
}

impl MySqlAccountStore {
    pub fn new(connection_pool: MySqlPool, kind: AccountKind) -> MySqlAccountStore {
        Self {
            connection_pool,
            kind,
        }
    }

    fn table(&self) -> &'static str {
        self.kind.table()
    }
}

impl AccountStore for MySqlAccountStore {
    fn kind(&self) -> AccountKind {
        self.kind
    }

    async fn get_by_email(&self, email: &str) -> Result<Account, StoreError> {
        let sql = format!(
            "SELECT id, name, email, password FROM {} WHERE email = ?",
            self.table()
        );
        sqlx::query_as::<_, Account>(&sql)
            .bind(email)
            .fetch_optional(&self.connection_pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn get_list(&self) -> Result<Vec<Account>, StoreError> {
        let sql = format!("SELECT id, name, email, password FROM {}", self.table());
        let accounts = sqlx::query_as::<_, Account>(&sql)
            .fetch_all(&self.connection_pool)
            .await?;

        Ok(accounts)
    }

    async fn get_by_id(&self, id: &str) -> Result<Account, StoreError> {
        let sql = format!(
            "SELECT id, name, email, password FROM {} WHERE id = ?",
            self.table()
        );
        sqlx::query_as::<_, Account>(&sql)
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, account: &Account) -> Result<(), StoreError> {
        // il vincolo UNIQUE su email chiude la race tra pre-check e insert
        let sql = format!(
            "INSERT INTO {} (id, name, email, password) VALUES (?, ?, ?, ?)",
            self.table()
        );
        sqlx::query(&sql)
            .bind(&account.id)
            .bind(&account.name)
            .bind(&account.email)
            .bind(&account.password)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }

    async fn update(&self, id: &str, account: &Account) -> Result<(), StoreError> {
        // l'hash bcrypt cambia ad ogni update (salt nuovo), quindi una riga
        // trovata risulta sempre modificata
        let sql = format!(
            "UPDATE {} SET id = ?, name = ?, email = ?, password = ? WHERE id = ?",
            self.table()
        );
        let result = sqlx::query(&sql)
            .bind(&account.id)
            .bind(&account.name)
            .bind(&account.email)
            .bind(&account.password)
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let sql = format!("DELETE FROM {} WHERE id = ?", self.table());
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
