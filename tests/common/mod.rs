use account_backend::core::{ApiResponse, AppState, Config, SnowflakeGenerator};
use account_backend::dtos::AccountDTO;
use account_backend::repositories::MemoryAccountStore;
use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;

/// Crea un AppState in memoria per i test
///
/// # Returns
/// Arc<AppState> con costo bcrypt minimo, per non rallentare i test
pub fn create_test_state() -> Arc<AppState<MemoryAccountStore>> {
    let config = Config {
        bcrypt_cost: 4,
        ..Config::default()
    };
    let ids = Arc::new(SnowflakeGenerator::new(config.node_id).expect("valid node id"));
    Arc::new(AppState::in_memory(ids, &config))
}

/// Crea un TestServer per i test
///
/// # Arguments
/// * `state` - AppState da utilizzare per il server
///
/// # Returns
/// TestServer configurato e pronto per eseguire richieste
pub fn create_test_server(state: Arc<AppState<MemoryAccountStore>>) -> TestServer {
    let app = account_backend::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Registra un account tramite `POST /<entity>` e ritorna il DTO creato
///
/// # Arguments
/// * `entity` - Prefisso delle route, `admin` o `user`
pub async fn register(
    server: &TestServer,
    entity: &str,
    name: &str,
    email: &str,
    password: &str,
) -> AccountDTO {
    let response = server
        .post(&format!("/{entity}"))
        .json(&json!({
            "name": name,
            "email": email,
            "password": password
        }))
        .await;

    response.assert_status_ok();
    response
        .json::<ApiResponse<AccountDTO>>()
        .data
        .expect("created account in envelope")
}
