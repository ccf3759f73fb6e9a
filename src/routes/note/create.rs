use actix_web::{post, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::note::{NoteRes, RNoteCreate};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AuthUser;

#[post("/{ticket_id}/notes")]
async fn create_note(
    db: web::Data<Arc<DatabaseService>>,
    user: AuthUser,
    path: web::Path<Uuid>,
    data: web::Json<RNoteCreate>,
) -> ApiResult<NoteRes> {
    let ticket = db.get_owned_ticket(path.into_inner(), user.0.id).await?;

    let text = match data.into_inner().text.filter(|t| !t.trim().is_empty()) {
        Some(t) => t,
        None => return Err(AppError::Validation("Please add some text".into())),
    };
    let note = db.create_note(ticket.id, user.0.id, text).await?;
    Ok(ApiResponse::Created(note.into()))
}
