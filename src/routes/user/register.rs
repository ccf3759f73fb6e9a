use crate::config::config;
use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserRegister, UserAuthRes};
use crate::utils::{password::hash_password, token::issue_token};
use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

fn required(field: Option<String>) -> Option<String> {
    field.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[post("")]
async fn register(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RUserRegister>,
) -> ApiResult<UserAuthRes> {
    let body = body.into_inner();
    // password is taken as-is, whitespace included
    let password = body.password.filter(|p| !p.is_empty());
    let (name, email, password) = match (required(body.name), required(body.email), password) {
        (Some(n), Some(e), Some(p)) => (n, e, p),
        _ => return Err(AppError::Validation("Please include all fields".into())),
    };

    let password_hash = hash_password(&password).map_err(|e| AppError::Internal(e.to_string()))?;

    let user = db
        .create_user(DBUserCreate { name, email, password_hash })
        .await?;

    let token = issue_token(&user.id, &config().jwt_secret).map_err(|e| AppError::Internal(e.to_string()))?;
    info!(user_id = %user.id, "registered user");

    Ok(ApiResponse::Created(UserAuthRes {
        id: user.id,
        name: user.name,
        email: user.email,
        token,
    }))
}
