use crate::config::config;
use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserLogin, UserAuthRes};
use crate::utils::{password::verify_password, token::issue_token};
use actix_web::{post, web};
use std::sync::Arc;

#[post("")]
async fn login(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RUserLogin>,
) -> ApiResult<UserAuthRes> {
    let user = match db.find_user_by_email(body.email.trim()).await? {
        Some(user) => user,
        None => return Err(AppError::InvalidCredentials),
    };

    let matches = verify_password(&body.password, &user.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    if !matches {
        return Err(AppError::InvalidCredentials);
    }

    let token = issue_token(&user.id, &config().jwt_secret).map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(ApiResponse::Ok(UserAuthRes {
        id: user.id,
        name: user.name,
        email: user.email,
        token,
    }))
}
