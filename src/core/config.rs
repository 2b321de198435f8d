use super::snowflake::MAX_NODE_ID;
use dotenv::dotenv;
use std::env;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Assente -> store in memoria
    pub database_url: Option<String>,
    pub server_host: String,
    pub server_port: u16,
    pub max_connections: u32,
    pub connection_lifetime_secs: u64,
    pub app_env: String,
    pub node_id: u16,
    pub store_timeout_ms: u64,
    pub bcrypt_cost: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            server_host: "127.0.0.1".to_string(),
            server_port: 3000,
            max_connections: 10,
            connection_lifetime_secs: 1800,
            app_env: "development".to_string(),
            node_id: 1,
            store_timeout_ms: 5000,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl Config {
    /// Carica la configurazione dalle variabili d'ambiente
    /// Chiama dotenv() automaticamente
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Come `from_env`, ma legge le variabili da una funzione qualsiasi
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let server_host = lookup("SERVER_HOST").unwrap_or(defaults.server_host);

        let server_port = parse_or(&lookup, "SERVER_PORT", defaults.server_port)
            .map_err(|_| "Invalid SERVER_PORT: must be a number between 0-65535".to_string())?;

        let max_connections = parse_or(&lookup, "MAX_DB_CONNECTIONS", defaults.max_connections)
            .map_err(|_| "Invalid MAX_DB_CONNECTIONS: must be a positive number".to_string())?;

        let connection_lifetime_secs = parse_or(
            &lookup,
            "DB_CONNECTION_LIFETIME_SECS",
            defaults.connection_lifetime_secs,
        )
        .map_err(|_| "Invalid DB_CONNECTION_LIFETIME_SECS: must be a positive number".to_string())?;

        let app_env = lookup("APP_ENV").unwrap_or(defaults.app_env);

        let node_id = parse_or(&lookup, "NODE_ID", defaults.node_id)
            .ok()
            .filter(|id| *id <= MAX_NODE_ID)
            .ok_or_else(|| format!("Invalid NODE_ID: must be a number between 0-{MAX_NODE_ID}"))?;

        let store_timeout_ms = parse_or(&lookup, "STORE_TIMEOUT_MS", defaults.store_timeout_ms)
            .ok()
            .filter(|ms| *ms > 0)
            .ok_or_else(|| "Invalid STORE_TIMEOUT_MS: must be a positive number".to_string())?;

        let bcrypt_cost = parse_or(&lookup, "BCRYPT_COST", defaults.bcrypt_cost)
            .ok()
            .filter(|cost| (4..=31).contains(cost))
            .ok_or_else(|| "Invalid BCRYPT_COST: must be a number between 4-31".to_string())?;

        Ok(Config {
            database_url,
            server_host,
            server_port,
            max_connections,
            connection_lifetime_secs,
            app_env,
            node_id,
            store_timeout_ms,
            bcrypt_cost,
        })
    }

    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }

    pub fn is_development(&self) -> bool {
        self.app_env == "development"
    }

    /// Logga la configurazione (nascondendo i segreti)
    pub fn log_summary(&self) {
        let address = format!("{}:{}", self.server_host, self.server_port);
        info!(
            env = %self.app_env,
            address = %address,
            node_id = self.node_id,
            store_timeout_ms = self.store_timeout_ms,
            bcrypt_cost = self.bcrypt_cost,
            "Server configuration"
        );
        match &self.database_url {
            Some(url) => info!(
                database = %Self::mask_url(url),
                max_connections = self.max_connections,
                connection_lifetime_secs = self.connection_lifetime_secs,
                "Using MySQL account store"
            ),
            None => warn!("DATABASE_URL not set, accounts are kept in memory and lost on restart"),
        }
    }

    /// Maschera l'URL del database per il logging
    fn mask_url(url: &str) -> String {
        if let Some(at_pos) = url.find('@') {
            if let Some(scheme_end) = url.find("://") {
                let scheme = &url[..scheme_end + 3];
                let after_at = &url[at_pos..];
                return format!("{}***{}", scheme, after_at);
            }
        }
        "***".to_string()
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, T::Err>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>(),
        None => Ok(default),
    }
}
