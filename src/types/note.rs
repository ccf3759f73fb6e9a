use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct RNoteCreate {
    pub text: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NoteRes {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub user: Uuid,
    pub ticket: Uuid,
    pub text: String,
    pub is_staff: bool,
    pub staff_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::note::Model> for NoteRes {
    fn from(n: entity::note::Model) -> Self {
        NoteRes {
            id: n.id,
            user: n.user_id,
            ticket: n.ticket_id,
            text: n.text,
            is_staff: n.is_staff,
            staff_id: n.staff_id,
            created_at: n.created_at,
            updated_at: n.updated_at,
        }
    }
}
