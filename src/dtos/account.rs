//! Account DTOs - Data Transfer Objects per admin e user

use crate::entities::Account;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// bcrypt usa solo i primi 72 byte della password
pub const MAX_PASSWORD_BYTES: usize = 72;

// struct per gestire io col client, la password non esce mai
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AccountDTO {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<Account> for AccountDTO {
    fn from(value: Account) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
        }
    }
}

/// DTO per creare un nuovo account (senza id, generato dal server)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateAccountDTO {
    #[validate(length(min = 1, max = 64, message = "Name must be between 1 and 64 characters"))]
    pub name: String,
    #[validate(email(message = "Email is not valid"))]
    pub email: String,
    #[validate(
        length(min = 1, message = "Password is required"),
        custom(function = "validate_password_bytes")
    )]
    pub password: String,
}

/// DTO per l'update: sostituzione completa, tutti i campi obbligatori
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct UpdateAccountDTO {
    #[validate(length(min = 1, message = "Id is required"))]
    pub id: String,
    #[validate(length(min = 1, max = 64, message = "Name must be between 1 and 64 characters"))]
    pub name: String,
    #[validate(email(message = "Email is not valid"))]
    pub email: String,
    #[validate(
        length(min = 1, message = "Password is required"),
        custom(function = "validate_password_bytes")
    )]
    pub password: String,
}

// il limite è in byte UTF-8, non in caratteri
fn validate_password_bytes(password: &str) -> Result<(), ValidationError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(ValidationError::new("password_too_long")
            .with_message("Password must be at most 72 bytes".into()));
    }
    Ok(())
}

/// DTO per il login (solo email e password)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginDTO {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dto_drops_the_password_hash() {
        let dto = AccountDTO::from(Account {
            id: "42".into(),
            name: "alice".into(),
            email: "alice@example.com".into(),
            password: "$2b$04$hash".into(),
        });
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["id"], "42");
    }

    #[test]
    fn create_requires_a_valid_email() {
        let dto = CreateAccountDTO {
            name: "alice".into(),
            email: "not-an-email".into(),
            password: "Secret123".into(),
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn create_rejects_empty_fields() {
        let dto = CreateAccountDTO {
            name: String::new(),
            email: "alice@example.com".into(),
            password: String::new(),
        };
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn password_limit_counts_bytes_not_characters() {
        // 40 caratteri, 80 byte
        let dto = CreateAccountDTO {
            name: "alice".into(),
            email: "alice@example.com".into(),
            password: "é".repeat(40),
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));

        let dto = UpdateAccountDTO {
            id: "1".into(),
            name: "alice".into(),
            email: "alice@example.com".into(),
            password: "é".repeat(36),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn update_accepts_a_complete_body() {
        let dto = UpdateAccountDTO {
            id: "1".into(),
            name: "alice".into(),
            email: "alice@example.com".into(),
            password: "Secret123".into(),
        };
        assert!(dto.validate().is_ok());
    }
}
