use actix_web::{put, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::ticket::{RTicketUpdate, TicketRes};
use crate::utils::webutils::AuthUser;

#[put("/{id}")]
async fn update_ticket(
    db: web::Data<Arc<DatabaseService>>,
    user: AuthUser,
    path: web::Path<Uuid>,
    data: web::Json<RTicketUpdate>,
) -> ApiResult<TicketRes> {
    let patch = data.into_inner();
    let blank = |v: &Option<String>| v.as_deref().is_some_and(|s| s.trim().is_empty());
    if blank(&patch.product) || blank(&patch.description) {
        return Err(AppError::Validation("Product and description cannot be empty".into()));
    }

    let ticket = db.get_owned_ticket(path.into_inner(), user.0.id).await?;
    let updated = db.update_ticket(ticket, patch).await?;
    Ok(ApiResponse::Ok(updated.into()))
}
