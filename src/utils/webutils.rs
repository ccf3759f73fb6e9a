use std::future::{ready, Ready};
use std::sync::Arc;

use actix_web::{dev::{Payload, ServiceRequest}, web, FromRequest, HttpMessage, HttpRequest};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::user::Model as UserModel;
use tracing::debug;

use crate::config::config;
use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::utils::token::decode_token;

/// Bearer validator for protected scopes.
///
/// A missing or malformed `Authorization` header arrives here as `None`, so it
/// gets the same JSON 401 as a token that fails verification. Otherwise the
/// resolved user ends up in the request extensions.
pub async fn validate_token(
    req: ServiceRequest,
    credentials: Option<BearerAuth>,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let credentials = match credentials {
        Some(c) => c,
        None => {
            debug!("rejecting request: no bearer token");
            return Err((AppError::Unauthorized.into(), req));
        }
    };

    let user_id = match decode_token(credentials.token(), &config().jwt_secret) {
        Some(id) => id,
        None => {
            debug!("rejecting request: token failed verification");
            return Err((AppError::Unauthorized.into(), req));
        }
    };

    let db = match req.app_data::<web::Data<Arc<DatabaseService>>>() {
        Some(db) => db.clone(),
        None => return Err((AppError::Internal("database not configured".into()).into(), req)),
    };

    match db.get_user_by_id(&user_id).await {
        Ok(user) => {
            req.extensions_mut().insert(AuthUser(user));
            Ok(req)
        }
        Err(e) => {
            debug!(%user_id, error = %e, "rejecting request: token user not found");
            Err((AppError::Unauthorized.into(), req))
        }
    }
}

/// The user attached by [`validate_token`].
#[derive(Clone, Debug)]
pub struct AuthUser(pub UserModel);

impl FromRequest for AuthUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(req.extensions().get::<AuthUser>().cloned().ok_or(AppError::Unauthorized))
    }
}
