use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::ticket::TicketRes;
use crate::utils::webutils::AuthUser;

#[get("/{id}")]
async fn get_ticket(
    db: web::Data<Arc<DatabaseService>>,
    user: AuthUser,
    path: web::Path<Uuid>,
) -> ApiResult<TicketRes> {
    let ticket = db.get_owned_ticket(path.into_inner(), user.0.id).await?;
    Ok(ApiResponse::Ok(ticket.into()))
}
