use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::ticket::RTicketUpdate;
use chrono::Utc;
use entity::ticket::{ActiveModel as TicketActive, Column, Entity as Ticket, Model as TicketModel, TicketStatus};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

impl DatabaseService {
    pub async fn list_tickets_for_user(&self, user_id: Uuid) -> Result<Vec<TicketModel>, AppError> {
        Ok(Ticket::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await?)
    }

    pub async fn get_ticket(&self, id: Uuid) -> Result<TicketModel, AppError> {
        Ok(Ticket::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Ticket not found".into()))?)
    }

    /// Fetch a ticket and make sure `user_id` owns it.
    pub async fn get_owned_ticket(&self, id: Uuid, user_id: Uuid) -> Result<TicketModel, AppError> {
        let ticket = self.get_ticket(id).await?;
        if ticket.user_id != user_id {
            return Err(AppError::Forbidden);
        }
        Ok(ticket)
    }

    pub async fn create_ticket(
        &self,
        user_id: Uuid,
        product: String,
        description: String,
    ) -> Result<TicketModel, AppError> {
        let now = Utc::now();
        Ok(TicketActive {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            product: Set(product),
            description: Set(description),
            status: Set(TicketStatus::New),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn update_ticket(&self, ticket: TicketModel, patch: RTicketUpdate) -> Result<TicketModel, AppError> {
        let mut am: TicketActive = ticket.into();

        if let Some(product) = patch.product {
            am.product = Set(product);
        }
        if let Some(description) = patch.description {
            am.description = Set(description);
        }
        if let Some(status) = patch.status {
            am.status = Set(status);
        }
        am.updated_at = Set(Utc::now());

        Ok(am.update(&self.db).await?)
    }

    pub async fn delete_ticket(&self, id: Uuid) -> Result<(), AppError> {
        Ticket::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
