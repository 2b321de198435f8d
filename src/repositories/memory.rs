//! MemoryAccountStore - Repository in memoria
//!
//! Usato quando `DATABASE_URL` non è configurato e nei test. Gli unici
//! vincoli sono quelli della tabella MySQL: id ed email univoci, verificati
//! sotto il lock di scrittura.

use super::{AccountStore, StoreError};
use crate::entities::{Account, AccountKind};
use tokio::sync::RwLock;

pub struct MemoryAccountStore {
    kind: AccountKind,
    // ordine di inserimento, come una tabella senza ORDER BY
    rows: RwLock<Vec<Account>>,
}

impl MemoryAccountStore {
    pub fn new(kind: AccountKind) -> Self {
        Self {
            kind,
            rows: RwLock::new(Vec::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

impl AccountStore for MemoryAccountStore {
    fn kind(&self) -> AccountKind {
        self.kind
    }

    async fn get_by_email(&self, email: &str) -> Result<Account, StoreError> {
        self.rows
            .read()
            .await
            .iter()
            .find(|a| a.email == email)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn get_list(&self) -> Result<Vec<Account>, StoreError> {
        Ok(self.rows.read().await.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Account, StoreError> {
        self.rows
            .read()
            .await
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, account: &Account) -> Result<(), StoreError> {
        let mut rows = self.rows.write().await;
        if rows
            .iter()
            .any(|a| a.id == account.id || a.email == account.email)
        {
            return Err(StoreError::Conflict);
        }
        rows.push(account.clone());
        Ok(())
    }

    async fn update(&self, id: &str, account: &Account) -> Result<(), StoreError> {
        let mut rows = self.rows.write().await;
        let position = rows
            .iter()
            .position(|a| a.id == id)
            .ok_or(StoreError::NotFound)?;

        let collides = rows.iter().enumerate().any(|(i, a)| {
            i != position && (a.email == account.email || a.id == account.id)
        });
        if collides {
            return Err(StoreError::Conflict);
        }

        rows[position] = account.clone();
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|a| a.id != id);
        if rows.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
