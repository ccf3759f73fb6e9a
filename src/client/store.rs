use std::future::Future;

use super::api::ClientError;
use super::auth::{self, AuthAction, AuthState};
use super::notes::{self, NoteAction, NoteState};
use super::storage::Storage;
use super::tickets::{self, TicketAction, TicketState};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootState {
    pub auth: AuthState,
    pub tickets: TicketState,
    pub notes: NoteState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Auth(AuthAction),
    Tickets(TicketAction),
    Notes(NoteAction),
}

impl From<AuthAction> for Action {
    fn from(a: AuthAction) -> Self {
        Action::Auth(a)
    }
}

impl From<TicketAction> for Action {
    fn from(a: TicketAction) -> Self {
        Action::Tickets(a)
    }
}

impl From<NoteAction> for Action {
    fn from(a: NoteAction) -> Self {
        Action::Notes(a)
    }
}

/// Routes an action to the slice that owns it. Other slices come back untouched.
pub fn root_reducer(state: &RootState, action: &Action) -> RootState {
    match action {
        Action::Auth(a) => RootState { auth: auth::reduce(&state.auth, a), ..state.clone() },
        Action::Tickets(a) => RootState { tickets: tickets::reduce(&state.tickets, a), ..state.clone() },
        Action::Notes(a) => RootState { notes: notes::reduce(&state.notes, a), ..state.clone() },
    }
}

type Listener = Box<dyn Fn(&RootState) + Send>;

pub struct Store {
    state: RootState,
    listeners: Vec<Listener>,
}

impl Store {
    pub fn new(state: RootState) -> Self {
        Self { state, listeners: Vec::new() }
    }

    /// Boots the store with the session user restored from `storage`.
    pub fn from_storage(storage: &dyn Storage) -> Self {
        Self::new(RootState { auth: AuthState::from_storage(storage), ..RootState::default() })
    }

    pub fn state(&self) -> &RootState {
        &self.state
    }

    pub fn subscribe(&mut self, listener: impl Fn(&RootState) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn dispatch(&mut self, action: impl Into<Action>) {
        let action = action.into();
        self.state = root_reducer(&self.state, &action);
        for listener in &self.listeners {
            listener(&self.state);
        }
    }

    /// Runs one async request as pending, then fulfilled or rejected.
    pub async fn thunk<T, Fut>(
        &mut self,
        pending: impl Into<Action>,
        request: Fut,
        fulfilled: impl FnOnce(T) -> Action,
        rejected: impl FnOnce(String) -> Action,
    ) -> Result<T, String>
    where
        T: Clone,
        Fut: Future<Output = Result<T, ClientError>>,
    {
        self.dispatch(pending);
        match request.await {
            Ok(value) => {
                self.dispatch(fulfilled(value.clone()));
                Ok(value)
            }
            Err(e) => {
                let message = e.message();
                self.dispatch(rejected(message.clone()));
                Err(message)
            }
        }
    }

    /// Bearer token of the logged in user, if any.
    pub(crate) fn session_token(&self) -> Result<String, ClientError> {
        self.state
            .auth
            .user
            .as_ref()
            .map(|u| u.token.clone())
            .ok_or(ClientError::NoSession)
    }
}
