//! Account entity - Record persistito per admin e user

use bcrypt::{hash, verify};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Le due tipologie di account, stessa forma e stesse regole
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Admin,
    User,
}

impl AccountKind {
    /// Tabella MySQL che contiene i record di questo tipo
    pub fn table(self) -> &'static str {
        match self {
            Self::Admin => "admins",
            Self::User => "users",
        }
    }

    /// Prefisso delle route HTTP (`/admin`, `/user`)
    pub fn path(self) -> &'static str {
        match self {
            Self::Admin => "/admin",
            Self::User => "/user",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => f.write_str("admin"),
            Self::User => f.write_str("user"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Account {
    /// Id snowflake in forma decimale, assegnato alla creazione
    pub id: String,
    pub name: String,
    pub email: String,
    /// Hash bcrypt, mai in chiaro
    pub password: String,
}

impl Account {
    /// Verify if target_password matches the stored hashed password
    pub fn verify_password(&self, target_password: &str) -> bool {
        verify(target_password, &self.password).unwrap_or(false)
    }

    /// Hash a password using bcrypt with the given cost
    pub fn hash_password(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
        let hash = hash(password, cost)?;
        Ok(hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_round_trips_through_bcrypt() {
        let account = Account {
            id: "1".into(),
            name: "alice".into(),
            email: "alice@example.com".into(),
            password: Account::hash_password("Secret123", 4).unwrap(),
        };
        assert_ne!(account.password, "Secret123");
        assert!(account.verify_password("Secret123"));
        assert!(!account.verify_password("secret123"));
    }

    #[test]
    fn plain_text_password_never_verifies() {
        let account = Account {
            id: "1".into(),
            name: "bob".into(),
            email: "bob@example.com".into(),
            password: "not-a-hash".into(),
        };
        assert!(!account.verify_password("not-a-hash"));
    }

    #[test]
    fn kinds_map_to_their_tables_and_paths() {
        assert_eq!(AccountKind::Admin.table(), "admins");
        assert_eq!(AccountKind::User.path(), "/user");
        assert_eq!(AccountKind::Admin.to_string(), "admin");
    }
}
