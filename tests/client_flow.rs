mod common;

use actix_web::{web, App, HttpServer};
use common::TestContext;
use entity::ticket::TicketStatus;
use std::sync::Arc;
use support_desk::client::{
    api::ApiClient,
    auth::{self, auth_status, AuthAction, RegisterForm, USER_KEY},
    notes, tickets,
    storage::{FileStorage, MemoryStorage, Storage},
    Store,
};
use support_desk::types::{ticket::RTicketCreate, user::RUserLogin};

/// Serves the real app on an ephemeral port and hands back its base url.
async fn spawn_server(ctx: &TestContext) -> String {
    let db = Arc::clone(&ctx.db);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&db)))
            .configure(support_desk::routes::configure_routes)
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("Failed to bind test server");

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{}", addr)
}

fn register_form() -> RegisterForm {
    RegisterForm {
        name: "A".into(),
        email: "a@x.com".into(),
        password: "p".into(),
        password2: "p".into(),
    }
}

#[actix_web::test]
async fn test_client_register_persists_session() {
    println!("\n\n[+] Running test: test_client_register_persists_session");
    let ctx = TestContext::new().await;
    let api = ApiClient::new(spawn_server(&ctx).await).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path().join("local.json"));

    let mut store = Store::from_storage(&storage);
    assert!(!auth_status(&store.state().auth).logged_in);

    let payload = register_form().submit().unwrap();
    let user = auth::register(&mut store, &api, &storage, payload).await.unwrap();
    println!("[<] Registered: {:?}", user.email);

    let state = &store.state().auth;
    assert!(state.is_success);
    assert!(!state.is_loading);
    assert_eq!(state.user.as_ref(), Some(&user));

    // a fresh client picks the session back up from disk
    let reopened = FileStorage::new(dir.path().join("local.json"));
    let restored = Store::from_storage(&reopened);
    assert_eq!(restored.state().auth.user.as_ref(), Some(&user));

    let me = api.me(&user.token).await.unwrap();
    assert_eq!(me.email, "a@x.com");
    assert_eq!(me.name, "A");

    store.dispatch(AuthAction::Reset);
    assert_eq!(store.state().auth.user.as_ref(), Some(&user));
    assert!(!store.state().auth.is_success);
    println!("[/] Test passed: client register flow.");
}

#[actix_web::test]
async fn test_client_rejections_carry_server_message() {
    let ctx = TestContext::new().await;
    let api = ApiClient::new(spawn_server(&ctx).await).unwrap();
    let storage = MemoryStorage::new();
    let mut store = Store::from_storage(&storage);

    auth::register(&mut store, &api, &storage, register_form().submit().unwrap())
        .await
        .unwrap();
    auth::logout(&mut store, &storage);
    assert_eq!(storage.get_item(USER_KEY), None);

    let dup = auth::register(&mut store, &api, &storage, register_form().submit().unwrap()).await;
    assert_eq!(dup, Err("User already exists".to_string()));
    assert!(store.state().auth.is_error);
    assert_eq!(store.state().auth.message, "User already exists");
    assert_eq!(store.state().auth.user, None);

    let bad = RUserLogin { email: "a@x.com".into(), password: "wrong".into() };
    let res = auth::login(&mut store, &api, &storage, bad).await;
    assert_eq!(res, Err("Invalid credentials".to_string()));
    assert_eq!(store.state().auth.user, None);

    // ticket thunks refuse to run without a session
    let res = tickets::get_tickets(&mut store, &api).await;
    assert_eq!(res, Err("Not authorized".to_string()));
    assert!(store.state().tickets.is_error);

    // a request that reaches the server without a usable token gets the JSON message
    match api.me("").await {
        Ok(_) => panic!("/me accepted an empty token"),
        Err(e) => assert_eq!(e.message(), "Not authorized"),
    }
}

#[actix_web::test]
async fn test_client_ticket_and_note_flow() {
    println!("\n\n[+] Running test: test_client_ticket_and_note_flow");
    let ctx = TestContext::new().await;
    let api = ApiClient::new(spawn_server(&ctx).await).unwrap();
    let storage = MemoryStorage::new();
    let mut store = Store::from_storage(&storage);

    auth::register(&mut store, &api, &storage, register_form().submit().unwrap())
        .await
        .unwrap();
    let login = RUserLogin { email: "a@x.com".into(), password: "p".into() };
    auth::login(&mut store, &api, &storage, login).await.unwrap();

    let ticket = tickets::create_ticket(
        &mut store,
        &api,
        RTicketCreate { product: Some("iPhone".into()), description: Some("Cracked".into()) },
    )
    .await
    .unwrap();
    assert!(store.state().tickets.is_success);

    let list = tickets::get_tickets(&mut store, &api).await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(store.state().tickets.tickets, list);

    tickets::get_ticket(&mut store, &api, ticket.id).await.unwrap();
    assert_eq!(store.state().tickets.ticket.as_ref().map(|t| t.id), Some(ticket.id));

    notes::create_note(&mut store, &api, ticket.id, "Tried restarting".into()).await.unwrap();
    notes::get_notes(&mut store, &api, ticket.id).await.unwrap();
    assert_eq!(store.state().notes.notes.len(), 1);

    let bad = notes::create_note(&mut store, &api, ticket.id, "".into()).await;
    assert_eq!(bad, Err("Please add some text".to_string()));
    assert_eq!(store.state().notes.notes.len(), 1);

    tickets::close_ticket(&mut store, &api, ticket.id).await.unwrap();
    assert_eq!(store.state().tickets.tickets[0].status, TicketStatus::Closed);
    assert_eq!(store.state().tickets.ticket.as_ref().unwrap().status, TicketStatus::Closed);
    println!("[/] Test passed: client ticket flow.");
}
