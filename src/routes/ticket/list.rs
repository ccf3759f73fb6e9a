use actix_web::{get, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::ticket::TicketRes;
use crate::utils::webutils::AuthUser;

#[get("")]
async fn list_tickets(
    db: web::Data<Arc<DatabaseService>>,
    user: AuthUser,
) -> ApiResult<Vec<TicketRes>> {
    let tickets = db.list_tickets_for_user(user.0.id).await?;
    Ok(ApiResponse::Ok(tickets.into_iter().map(TicketRes::from).collect()))
}
