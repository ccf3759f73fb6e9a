use uuid::Uuid;

use super::api::ApiClient;
use super::store::{Action, Store};
use crate::types::note::NoteRes;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteState {
    pub notes: Vec<NoteRes>,
    pub is_error: bool,
    pub is_success: bool,
    pub is_loading: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NoteAction {
    GetNotesPending,
    GetNotesFulfilled(Vec<NoteRes>),
    GetNotesRejected(String),
    CreatePending,
    CreateFulfilled(NoteRes),
    CreateRejected(String),
    Reset,
}

pub fn reduce(state: &NoteState, action: &NoteAction) -> NoteState {
    let mut next = state.clone();
    match action {
        NoteAction::GetNotesPending | NoteAction::CreatePending => {
            next.is_loading = true;
        }
        NoteAction::GetNotesFulfilled(notes) => {
            next.is_loading = false;
            next.is_success = true;
            next.notes = notes.clone();
        }
        NoteAction::CreateFulfilled(note) => {
            next.is_loading = false;
            next.is_success = true;
            next.notes.push(note.clone());
        }
        NoteAction::GetNotesRejected(message) | NoteAction::CreateRejected(message) => {
            next.is_loading = false;
            next.is_error = true;
            next.message = message.clone();
        }
        NoteAction::Reset => return NoteState::default(),
    }
    next
}

pub async fn get_notes(store: &mut Store, api: &ApiClient, ticket_id: Uuid) -> Result<Vec<NoteRes>, String> {
    let token = store.session_token();
    store
        .thunk(
            NoteAction::GetNotesPending,
            async move { api.get_notes(&token?, ticket_id).await },
            |n| Action::Notes(NoteAction::GetNotesFulfilled(n)),
            |m| Action::Notes(NoteAction::GetNotesRejected(m)),
        )
        .await
}

pub async fn create_note(store: &mut Store, api: &ApiClient, ticket_id: Uuid, text: String) -> Result<NoteRes, String> {
    let token = store.session_token();
    store
        .thunk(
            NoteAction::CreatePending,
            async move { api.create_note(&token?, ticket_id, &text).await },
            |n| Action::Notes(NoteAction::CreateFulfilled(n)),
            |m| Action::Notes(NoteAction::CreateRejected(m)),
        )
        .await
}
