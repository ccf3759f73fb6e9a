use std::sync::Arc;
use support_desk::config::{EnvConfig, Environment, CONFIG};
use support_desk::db::database_service::DatabaseService;

pub mod client;

#[allow(dead_code)]
pub const TEST_SECRET: &str = "test_jwt_secret";

pub struct TestContext {
    pub db: Arc<DatabaseService>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        // Initialize config for tests
        let _ = CONFIG.set(get_test_config());

        let db = Arc::new(
            DatabaseService::new("sqlite::memory:")
                .await
                .expect("Failed to initialize DatabaseService")
        );

        TestContext { db }
    }
}

pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 5000,
        db_url: "sqlite::memory:".to_string(), // Not used in tests
        jwt_secret: TEST_SECRET.to_string(),
        environment: Environment::Development,
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use support_desk::types::user::{RUserLogin, RUserRegister};

    pub fn sample_user() -> RUserRegister {
        sample_user_with_email("a@x.com")
    }

    pub fn sample_user_with_email(email: &str) -> RUserRegister {
        RUserRegister {
            name: Some("A".to_string()),
            email: Some(email.to_string()),
            password: Some("p".to_string()),
        }
    }

    pub fn sample_login() -> RUserLogin {
        RUserLogin {
            email: "a@x.com".to_string(),
            password: "p".to_string(),
        }
    }
}
