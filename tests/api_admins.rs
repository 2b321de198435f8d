//! Integration tests per gli endpoints degli amministratori
//!
//! Test per:
//! - GET /admin/list
//! - GET /admin/{email}
//! - POST /admin
//! - POST /admin/login
//! - PUT /admin
//! - DELETE /admin/{id}

mod common;

#[cfg(test)]
mod admin_tests {
    use super::common::*;
    use account_backend::core::ApiResponse;
    use account_backend::dtos::AccountDTO;
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    #[tokio::test]
    async fn test_root_health_check() {
        let server = create_test_server(create_test_state());
        let response = server.get("/").await;
        response.assert_status_ok();
        response.assert_text("Server is running!");
    }

    // ============================================================
    // Test per POST /admin - create
    // ============================================================

    #[tokio::test]
    async fn test_create_admin_success() {
        let server = create_test_server(create_test_state());

        let response = server
            .post("/admin")
            .json(&json!({
                "name": "alice",
                "email": "alice@example.com",
                "password": "Password123"
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["code"], 200);
        assert!(body.get("msg").is_none(), "Success should not carry msg");
        assert_eq!(body["data"]["name"], "alice");
        assert_eq!(body["data"]["email"], "alice@example.com");
        assert!(
            body["data"].get("password").is_none(),
            "Password must never be returned"
        );

        let id = body["data"]["id"].as_str().expect("id is a string");
        assert!(id.parse::<i64>().is_ok(), "id should be a decimal integer");
    }

    #[tokio::test]
    async fn test_create_admin_duplicate_email() {
        let state = create_test_state();
        let server = create_test_server(state.clone());
        register(&server, "admin", "alice", "alice@example.com", "Password123").await;

        let response = server
            .post("/admin")
            .json(&json!({
                "name": "impostor",
                "email": "alice@example.com",
                "password": "Password456"
            }))
            .await;

        response.assert_status(StatusCode::CONFLICT);
        let body: Value = response.json();
        assert_eq!(body["code"], 409);
        assert_eq!(body["msg"], "user already exists");
        assert!(body.get("data").is_none());

        // nessuna scrittura
        assert_eq!(state.admins.store().len().await, 1);
    }

    #[tokio::test]
    async fn test_create_admin_invalid_email() {
        let state = create_test_state();
        let server = create_test_server(state.clone());

        let response = server
            .post("/admin")
            .json(&json!({
                "name": "alice",
                "email": "alice-at-example.com",
                "password": "Password123"
            }))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["code"], 400);
        assert!(body["msg"].as_str().unwrap().contains("validation error"));
        assert!(state.admins.store().is_empty().await);
    }

    #[tokio::test]
    async fn test_create_admin_missing_field() {
        let server = create_test_server(create_test_state());

        let response = server
            .post("/admin")
            .json(&json!({
                "name": "alice",
                "email": "alice@example.com"
            }))
            .await;

        // il rifiuto dell'estrattore passa dall'envelope come ogni altro errore
        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["code"], 400);
        let msg = body["msg"].as_str().expect("error carries a msg");
        assert!(msg.starts_with("invalid request body"), "unexpected msg: {msg}");
        assert!(msg.contains("password"), "msg should name the missing field: {msg}");
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn test_create_admin_malformed_json() {
        let server = create_test_server(create_test_state());

        let response = server
            .post("/admin")
            .text("{\"name\": \"alice\",")
            .content_type("application/json")
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["code"], 400);
        assert!(body["msg"].is_string());
    }

    #[tokio::test]
    async fn test_login_admin_without_json_content_type() {
        let server = create_test_server(create_test_state());

        let response = server
            .post("/admin/login")
            .text("email=alice@example.com")
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["code"], 400);
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn test_created_ids_are_distinct() {
        let server = create_test_server(create_test_state());

        let mut ids = Vec::new();
        for i in 0..10 {
            let account = register(
                &server,
                "admin",
                &format!("admin{i}"),
                &format!("admin{i}@example.com"),
                "Password123",
            )
            .await;
            ids.push(account.id);
        }

        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }

    // ============================================================
    // Test per GET /admin/{email} e GET /admin/list
    // ============================================================

    #[tokio::test]
    async fn test_get_admin_by_email() {
        let server = create_test_server(create_test_state());
        let created = register(&server, "admin", "alice", "alice@example.com", "Password123").await;

        let response = server.get("/admin/alice@example.com").await;

        response.assert_status_ok();
        let body = response.json::<ApiResponse<AccountDTO>>();
        assert_eq!(body.data, Some(created));
    }

    #[tokio::test]
    async fn test_get_admin_by_unknown_email() {
        let server = create_test_server(create_test_state());

        let response = server.get("/admin/ghost@example.com").await;

        response.assert_status_not_found();
        let body: Value = response.json();
        assert_eq!(body["code"], 404);
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn test_list_admins() {
        let server = create_test_server(create_test_state());

        let empty = server.get("/admin/list").await;
        empty.assert_status_ok();
        assert_eq!(
            empty.json::<ApiResponse<Vec<AccountDTO>>>().data,
            Some(Vec::new())
        );

        register(&server, "admin", "alice", "alice@example.com", "Password123").await;
        register(&server, "admin", "bob", "bob@example.com", "Password123").await;

        let response = server.get("/admin/list").await;
        response.assert_status_ok();
        let admins = response
            .json::<ApiResponse<Vec<AccountDTO>>>()
            .data
            .unwrap();
        let emails: Vec<&str> = admins.iter().map(|a| a.email.as_str()).collect();
        assert_eq!(emails, ["alice@example.com", "bob@example.com"]);
    }

    // ============================================================
    // Test per POST /admin/login
    // ============================================================

    #[tokio::test]
    async fn test_login_admin_success() {
        let server = create_test_server(create_test_state());
        let created = register(&server, "admin", "alice", "alice@example.com", "Password123").await;

        let response = server
            .post("/admin/login")
            .json(&json!({
                "email": "alice@example.com",
                "password": "Password123"
            }))
            .await;

        response.assert_status_ok();
        let body = response.json::<ApiResponse<AccountDTO>>();
        assert!(body.is_success());
        assert_eq!(body.data, Some(created));
    }

    #[tokio::test]
    async fn test_login_admin_wrong_password() {
        let server = create_test_server(create_test_state());
        register(&server, "admin", "alice", "alice@example.com", "Password123").await;

        let response = server
            .post("/admin/login")
            .json(&json!({
                "email": "alice@example.com",
                "password": "wrongpassword"
            }))
            .await;

        response.assert_status_unauthorized();
        let text = response.text();
        assert!(!text.contains("data"), "No record on failed login");
        assert!(!text.contains("wrongpassword"));
        assert!(!text.contains("Password123"));
    }

    #[tokio::test]
    async fn test_login_admin_unknown_email() {
        let server = create_test_server(create_test_state());

        let response = server
            .post("/admin/login")
            .json(&json!({
                "email": "ghost@example.com",
                "password": "Password123"
            }))
            .await;

        // stessa risposta della password sbagliata
        response.assert_status_unauthorized();
        let body: Value = response.json();
        assert_eq!(body["msg"], "invalid email or password");
    }

    // ============================================================
    // Test per PUT /admin
    // ============================================================

    #[tokio::test]
    async fn test_update_admin_replaces_all_fields() {
        let server = create_test_server(create_test_state());
        let created = register(&server, "admin", "alice", "alice@example.com", "Password123").await;

        let response = server
            .put("/admin")
            .json(&json!({
                "id": created.id,
                "name": "alice cooper",
                "email": "cooper@example.com",
                "password": "NewPassword456"
            }))
            .await;
        response.assert_status_ok();

        let fetched = server.get("/admin/cooper@example.com").await;
        fetched.assert_status_ok();
        let account = fetched.json::<ApiResponse<AccountDTO>>().data.unwrap();
        assert_eq!(account.id, created.id);
        assert_eq!(account.name, "alice cooper");

        server
            .get("/admin/alice@example.com")
            .await
            .assert_status_not_found();

        server
            .post("/admin/login")
            .json(&json!({"email": "cooper@example.com", "password": "NewPassword456"}))
            .await
            .assert_status_ok();
        server
            .post("/admin/login")
            .json(&json!({"email": "cooper@example.com", "password": "Password123"}))
            .await
            .assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_update_admin_unknown_id() {
        let state = create_test_state();
        let server = create_test_server(state.clone());

        let response = server
            .put("/admin")
            .json(&json!({
                "id": "999",
                "name": "ghost",
                "email": "ghost@example.com",
                "password": "Password123"
            }))
            .await;

        response.assert_status_not_found();
        assert!(state.admins.store().is_empty().await);
    }

    #[tokio::test]
    async fn test_update_admin_onto_taken_email() {
        let server = create_test_server(create_test_state());
        register(&server, "admin", "alice", "alice@example.com", "Password123").await;
        let bob = register(&server, "admin", "bob", "bob@example.com", "Password123").await;

        let response = server
            .put("/admin")
            .json(&json!({
                "id": bob.id,
                "name": "bob",
                "email": "alice@example.com",
                "password": "Password123"
            }))
            .await;

        response.assert_status(StatusCode::CONFLICT);
    }

    // ============================================================
    // Test per DELETE /admin/{id}
    // ============================================================

    #[tokio::test]
    async fn test_delete_admin() {
        let state = create_test_state();
        let server = create_test_server(state.clone());
        let created = register(&server, "admin", "alice", "alice@example.com", "Password123").await;

        let response = server.delete(&format!("/admin/{}", created.id)).await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body, json!({"code": 200}));

        server
            .get("/admin/alice@example.com")
            .await
            .assert_status_not_found();
        assert!(state.admins.store().is_empty().await);
    }

    #[tokio::test]
    async fn test_delete_admin_twice() {
        let server = create_test_server(create_test_state());
        let created = register(&server, "admin", "alice", "alice@example.com", "Password123").await;

        server
            .delete(&format!("/admin/{}", created.id))
            .await
            .assert_status_ok();

        let second = server.delete(&format!("/admin/{}", created.id)).await;
        second.assert_status_not_found();

        // il server continua a rispondere
        server.get("/admin/list").await.assert_status_ok();
    }
}
