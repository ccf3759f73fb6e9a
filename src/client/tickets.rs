use entity::ticket::TicketStatus;
use uuid::Uuid;

use super::api::ApiClient;
use super::store::{Action, Store};
use crate::types::ticket::{RTicketCreate, TicketRes};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketState {
    pub tickets: Vec<TicketRes>,
    pub ticket: Option<TicketRes>,
    pub is_error: bool,
    pub is_success: bool,
    pub is_loading: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TicketAction {
    CreatePending,
    CreateFulfilled(TicketRes),
    CreateRejected(String),
    GetTicketsPending,
    GetTicketsFulfilled(Vec<TicketRes>),
    GetTicketsRejected(String),
    GetTicketPending,
    GetTicketFulfilled(TicketRes),
    GetTicketRejected(String),
    ClosePending,
    CloseFulfilled(TicketRes),
    CloseRejected(String),
    Reset,
}

pub fn reduce(state: &TicketState, action: &TicketAction) -> TicketState {
    use TicketAction::*;

    let mut next = state.clone();
    match action {
        CreatePending | GetTicketsPending | GetTicketPending | ClosePending => {
            next.is_loading = true;
        }
        CreateFulfilled(_) => {
            next.is_loading = false;
            next.is_success = true;
        }
        GetTicketsFulfilled(tickets) => {
            next.is_loading = false;
            next.is_success = true;
            next.tickets = tickets.clone();
        }
        GetTicketFulfilled(ticket) => {
            next.is_loading = false;
            next.is_success = true;
            next.ticket = Some(ticket.clone());
        }
        CloseFulfilled(closed) => {
            next.is_loading = false;
            for t in next.tickets.iter_mut().filter(|t| t.id == closed.id) {
                t.status = TicketStatus::Closed;
            }
            if let Some(t) = next.ticket.as_mut().filter(|t| t.id == closed.id) {
                t.status = TicketStatus::Closed;
            }
        }
        CreateRejected(message) | GetTicketsRejected(message) | GetTicketRejected(message)
        | CloseRejected(message) => {
            next.is_loading = false;
            next.is_error = true;
            next.message = message.clone();
        }
        Reset => return TicketState::default(),
    }
    next
}

pub async fn create_ticket(store: &mut Store, api: &ApiClient, ticket: RTicketCreate) -> Result<TicketRes, String> {
    let token = store.session_token();
    store
        .thunk(
            TicketAction::CreatePending,
            async move { api.create_ticket(&token?, &ticket).await },
            |t| Action::Tickets(TicketAction::CreateFulfilled(t)),
            |m| Action::Tickets(TicketAction::CreateRejected(m)),
        )
        .await
}

pub async fn get_tickets(store: &mut Store, api: &ApiClient) -> Result<Vec<TicketRes>, String> {
    let token = store.session_token();
    store
        .thunk(
            TicketAction::GetTicketsPending,
            async move { api.get_tickets(&token?).await },
            |t| Action::Tickets(TicketAction::GetTicketsFulfilled(t)),
            |m| Action::Tickets(TicketAction::GetTicketsRejected(m)),
        )
        .await
}

pub async fn get_ticket(store: &mut Store, api: &ApiClient, id: Uuid) -> Result<TicketRes, String> {
    let token = store.session_token();
    store
        .thunk(
            TicketAction::GetTicketPending,
            async move { api.get_ticket(&token?, id).await },
            |t| Action::Tickets(TicketAction::GetTicketFulfilled(t)),
            |m| Action::Tickets(TicketAction::GetTicketRejected(m)),
        )
        .await
}

pub async fn close_ticket(store: &mut Store, api: &ApiClient, id: Uuid) -> Result<TicketRes, String> {
    let token = store.session_token();
    store
        .thunk(
            TicketAction::ClosePending,
            async move { api.close_ticket(&token?, id).await },
            |t| Action::Tickets(TicketAction::CloseFulfilled(t)),
            |m| Action::Tickets(TicketAction::CloseRejected(m)),
        )
        .await
}
