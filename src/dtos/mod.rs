//! DTOs module - Data Transfer Objects
//!
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod account;

pub use account::{AccountDTO, CreateAccountDTO, LoginDTO, UpdateAccountDTO};
