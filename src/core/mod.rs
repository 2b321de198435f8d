//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! Questo modulo contiene tutti i componenti "core" dell'applicazione:
//! - Configurazione
//! - Gestione errori e envelope delle risposte
//! - Estrattori con rifiuti nell'envelope
//! - Generatore di id
//! - Stato applicazione

pub mod config;
pub mod error;
pub mod extract;
pub mod response;
pub mod snowflake;
pub mod state;

// Re-exports per facilitare l'import
pub use config::Config;
pub use error::{AppError, ErrorKind};
pub use response::ApiResponse;
pub use snowflake::{SnowflakeError, SnowflakeGenerator};
pub use state::AppState;
