use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use chrono::Utc;
use entity::note::{ActiveModel as NoteActive, Column, Entity as Note, Model as NoteModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

impl DatabaseService {
    pub async fn list_notes_for_ticket(&self, ticket_id: Uuid) -> Result<Vec<NoteModel>, AppError> {
        Ok(Note::find()
            .filter(Column::TicketId.eq(ticket_id))
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await?)
    }

    /// Customer-authored note; staff replies are written by other tooling.
    pub async fn create_note(&self, ticket_id: Uuid, user_id: Uuid, text: String) -> Result<NoteModel, AppError> {
        let now = Utc::now();
        Ok(NoteActive {
            id: Set(Uuid::new_v4()),
            ticket_id: Set(ticket_id),
            user_id: Set(user_id),
            text: Set(text),
            is_staff: Set(false),
            staff_id: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?)
    }
}
