use actix_web::{post, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::ticket::{RTicketCreate, TicketRes};
use crate::utils::webutils::AuthUser;

#[post("")]
async fn create_ticket(
    db: web::Data<Arc<DatabaseService>>,
    user: AuthUser,
    data: web::Json<RTicketCreate>,
) -> ApiResult<TicketRes> {
    let data = data.into_inner();
    let product = data.product.filter(|p| !p.trim().is_empty());
    let description = data.description.filter(|d| !d.trim().is_empty());

    let (product, description) = match (product, description) {
        (Some(p), Some(d)) => (p, d),
        _ => return Err(AppError::Validation("Please add a product and description".into())),
    };

    let ticket = db.create_ticket(user.0.id, product, description).await?;
    Ok(ApiResponse::Created(ticket.into()))
}
