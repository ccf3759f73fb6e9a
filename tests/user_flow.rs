mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, test_data, TestContext};
use support_desk::types::user::RUserRegister;
use support_desk::utils::token::decode_token;

#[actix_web::test]
async fn test_root_welcome() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Welcome to the Support Desk API");
}

#[actix_web::test]
async fn test_register_flow_success() {
    println!("\n\n[+] Running test: test_register_flow_success");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;
    println!("[+] Actix web app initialized.");

    let user_data = test_data::sample_user();
    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(&user_data)
        .to_request();

    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    println!("[<] Response body: {}", body);
    assert_eq!(body["name"], "A");
    assert_eq!(body["email"], "a@x.com");
    assert!(body.get("password").is_none());

    let id = body["_id"].as_str().unwrap();
    let token = body["token"].as_str().unwrap();
    assert_eq!(decode_token(token, common::TEST_SECRET).unwrap().to_string(), id);

    // the stored password is a hash, not the plain text
    let stored = ctx.db.find_user_by_email("a@x.com").await.unwrap().unwrap();
    assert_ne!(stored.password, "p");
    assert!(stored.password.starts_with("$argon2"));
    println!("[/] Test passed: register flow successful.");
}

#[actix_web::test]
async fn test_register_flow_missing_fields() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let cases = [
        RUserRegister { name: None, ..test_data::sample_user() },
        RUserRegister { email: Some("".into()), ..test_data::sample_user() },
        RUserRegister { password: None, ..test_data::sample_user() },
    ];

    for user_data in cases {
        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(&user_data)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Please include all fields");
    }

    assert_eq!(ctx.db.count_users().await.unwrap(), 0);
}

#[actix_web::test]
async fn test_register_flow_duplicate_email() {
    println!("\n\n[+] Running test: test_register_flow_duplicate_email");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let first = test::TestRequest::post()
        .uri("/api/users")
        .set_json(test_data::sample_user())
        .to_request();
    assert_eq!(test::call_service(&app, first).await.status(), StatusCode::CREATED);
    assert_eq!(ctx.db.count_users().await.unwrap(), 1);

    let second = test::TestRequest::post()
        .uri("/api/users")
        .set_json(RUserRegister { name: Some("Other".into()), ..test_data::sample_user() })
        .to_request();
    let resp = test::call_service(&app, second).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User already exists");
    assert_eq!(ctx.db.count_users().await.unwrap(), 1);
    println!("[/] Test passed: duplicate email rejected.");
}

#[actix_web::test]
async fn test_register_flow_malformed_json() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/users")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["message"].is_string());
    // test config runs in development mode
    assert!(body["stack"].is_string());
}

#[actix_web::test]
async fn test_login_flow() {
    println!("\n\n[+] Running test: test_login_flow");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(test_data::sample_user())
        .to_request();
    let registered: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/users/login")
        .set_json(test_data::sample_login())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["_id"], registered["_id"]);
    assert_eq!(body["name"], "A");
    assert_eq!(body["email"], "a@x.com");
    let token = body["token"].as_str().unwrap();
    assert_eq!(
        decode_token(token, common::TEST_SECRET).unwrap().to_string(),
        registered["_id"].as_str().unwrap()
    );
    println!("[/] Test passed: login flow successful.");
}

#[actix_web::test]
async fn test_login_flow_bad_credentials() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(test_data::sample_user())
        .to_request();
    test::call_service(&app, req).await;

    let attempts = [
        serde_json::json!({ "email": "a@x.com", "password": "wrong" }),
        serde_json::json!({ "email": "nobody@x.com", "password": "p" }),
        serde_json::json!({}),
    ];

    for attempt in attempts {
        let req = test::TestRequest::post()
            .uri("/api/users/login")
            .set_json(&attempt)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "attempt: {attempt}");

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid credentials");
    }
}

#[actix_web::test]
async fn test_register_login_me_end_to_end() {
    println!("\n\n[+] Running test: test_register_login_me_end_to_end");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(serde_json::json!({ "name": "A", "email": "a@x.com", "password": "p" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let registered: serde_json::Value = test::read_body_json(resp).await;
    assert!(registered["token"].as_str().is_some_and(|t| !t.is_empty()));

    let req = test::TestRequest::post()
        .uri("/api/users/login")
        .set_json(serde_json::json!({ "email": "a@x.com", "password": "p" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let logged_in: serde_json::Value = test::read_body_json(resp).await;
    let token = logged_in["token"].as_str().unwrap();

    let req = test::TestRequest::get()
        .uri("/api/users/me")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let me: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        me,
        serde_json::json!({ "id": registered["_id"], "email": "a@x.com", "name": "A" })
    );
    println!("[/] Test passed: register -> login -> me.");
}
