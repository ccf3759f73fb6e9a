use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;
use support_desk::config::{EnvConfig, CONFIG};
use support_desk::db::database_service::DatabaseService;
use support_desk::routes::configure_routes;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    let addr = format!("0.0.0.0:{}", config.port);

    let database_service = Arc::new(
        DatabaseService::new(&config.db_url)
            .await
            .map_err(|e| std::io::Error::other(e.to_string()))?
    );

    let users = database_service
        .count_users()
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    info!(environment = %config.environment, users, "Starting server on {}", addr);
    let _ = CONFIG.set(config);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&database_service)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
