use chrono::{DateTime, Utc};
use entity::ticket::TicketStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct RTicketCreate {
    pub product: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct RTicketUpdate {
    pub product: Option<String>,
    pub description: Option<String>,
    pub status: Option<TicketStatus>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TicketRes {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub user: Uuid,
    pub product: String,
    pub description: String,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::ticket::Model> for TicketRes {
    fn from(t: entity::ticket::Model) -> Self {
        TicketRes {
            id: t.id,
            user: t.user_id,
            product: t.product,
            description: t.description,
            status: t.status,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TicketDeleteRes {
    pub success: bool,
}
