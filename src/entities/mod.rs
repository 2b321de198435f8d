//! Entities module - Entità del dominio applicativo
//!
//! Ogni entity corrisponde a una tabella nel database. Admin e user
//! condividono la stessa forma (`Account`), distinta da `AccountKind`.

pub mod account;

// Re-exports per facilitare l'import
pub use account::{Account, AccountKind};
