use actix_web::{web, App};
use std::sync::Arc;
use support_desk::{
    config::config,
    db::database_service::DatabaseService,
    types::{error::AppError, user::DBUserCreate},
    utils::{password::hash_password, token::issue_token},
};
use uuid::Uuid;

pub struct TestClient {
    pub db: Arc<DatabaseService>,
}

impl TestClient {
    pub fn new(db: Arc<DatabaseService>) -> Self {
        TestClient { db }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(support_desk::routes::configure_routes)
    }

    /// Inserts a user straight into the db and returns it with a fresh token.
    #[allow(dead_code)]
    pub async fn create_test_user(&self, email: Option<String>) -> Result<(Uuid, String), AppError> {
        let email = email.unwrap_or_else(|| format!("user-{}@test.com", Uuid::new_v4()));
        let password_hash = hash_password("password").expect("Failed to hash password");

        let user = self.db.create_user(DBUserCreate {
            name: "Test User".to_string(),
            email,
            password_hash,
        }).await?;

        let token = issue_token(&user.id, &config().jwt_secret).expect("Failed to issue token");

        Ok((user.id, token))
    }
}
