use actix_web::{delete, web};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::ticket::TicketDeleteRes;
use crate::utils::webutils::AuthUser;

#[delete("/{id}")]
async fn delete_ticket(
    db: web::Data<Arc<DatabaseService>>,
    user: AuthUser,
    path: web::Path<Uuid>,
) -> ApiResult<TicketDeleteRes> {
    let ticket = db.get_owned_ticket(path.into_inner(), user.0.id).await?;
    db.delete_ticket(ticket.id).await?;
    info!(ticket_id = %ticket.id, "deleted ticket");
    Ok(ApiResponse::Ok(TicketDeleteRes { success: true }))
}
