use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::database_service::DatabaseService;
use crate::types::note::NoteRes;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AuthUser;

#[get("/{ticket_id}/notes")]
async fn list_notes(
    db: web::Data<Arc<DatabaseService>>,
    user: AuthUser,
    path: web::Path<Uuid>,
) -> ApiResult<Vec<NoteRes>> {
    let ticket = db.get_owned_ticket(path.into_inner(), user.0.id).await?;
    let notes = db.list_notes_for_ticket(ticket.id).await?;
    Ok(ApiResponse::Ok(notes.into_iter().map(NoteRes::from).collect()))
}
