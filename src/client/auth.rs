use thiserror::Error;
use tracing::warn;

use super::api::{ApiClient, ClientError};
use super::storage::{self, Storage};
use super::store::{Action, Store};
use crate::types::user::{RUserLogin, RUserRegister, UserAuthRes};

/// Storage key holding the serialized session user.
pub const USER_KEY: &str = "user";

/// What the client keeps about the logged in user, token included.
pub type SessionUser = UserAuthRes;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub is_error: bool,
    pub is_success: bool,
    pub is_loading: bool,
    pub message: String,
}

impl AuthState {
    pub fn from_storage(storage: &dyn Storage) -> Self {
        AuthState { user: storage::load_json(storage, USER_KEY), ..Default::default() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    RegisterPending,
    RegisterFulfilled(SessionUser),
    RegisterRejected(String),
    LoginPending,
    LoginFulfilled(SessionUser),
    LoginRejected(String),
    LogoutFulfilled,
    Reset,
}

pub fn reduce(state: &AuthState, action: &AuthAction) -> AuthState {
    let mut next = state.clone();
    match action {
        AuthAction::RegisterPending | AuthAction::LoginPending => {
            next.is_loading = true;
        }
        AuthAction::RegisterFulfilled(user) | AuthAction::LoginFulfilled(user) => {
            next.is_loading = false;
            next.is_success = true;
            next.user = Some(user.clone());
        }
        AuthAction::RegisterRejected(message) | AuthAction::LoginRejected(message) => {
            next.is_loading = false;
            next.is_error = true;
            next.message = message.clone();
            next.user = None;
        }
        AuthAction::LogoutFulfilled => {
            next.user = None;
        }
        // flags only, the user survives
        AuthAction::Reset => {
            next.is_loading = false;
            next.is_error = false;
            next.is_success = false;
            next.message.clear();
        }
    }
    next
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthStatus {
    pub logged_in: bool,
}

/// Guard for private views.
pub fn auth_status(state: &AuthState) -> AuthStatus {
    AuthStatus { logged_in: state.user.is_some() }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please include all fields")]
    MissingFields,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Registration form as the user typed it.
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password2: String,
}

impl RegisterForm {
    /// Checks the form and hands back the payload to dispatch.
    pub fn submit(&self) -> Result<RUserRegister, FormError> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() || self.password.is_empty() {
            return Err(FormError::MissingFields);
        }
        if self.password != self.password2 {
            return Err(FormError::PasswordMismatch);
        }
        Ok(RUserRegister {
            name: Some(self.name.trim().to_string()),
            email: Some(self.email.trim().to_string()),
            password: Some(self.password.clone()),
        })
    }
}

fn persist(storage: &dyn Storage, user: &SessionUser) {
    if let Err(e) = storage::save_json(storage, USER_KEY, user) {
        warn!(error = %e, "could not persist session user");
    }
}

pub async fn register(
    store: &mut Store,
    api: &ApiClient,
    storage: &dyn Storage,
    user: RUserRegister,
) -> Result<SessionUser, String> {
    let request = async {
        let res = api.register(&user).await?;
        persist(storage, &res);
        Ok::<_, ClientError>(res)
    };
    store
        .thunk(
            AuthAction::RegisterPending,
            request,
            |u| Action::Auth(AuthAction::RegisterFulfilled(u)),
            |m| Action::Auth(AuthAction::RegisterRejected(m)),
        )
        .await
}

pub async fn login(
    store: &mut Store,
    api: &ApiClient,
    storage: &dyn Storage,
    user: RUserLogin,
) -> Result<SessionUser, String> {
    let request = async {
        let res = api.login(&user).await?;
        persist(storage, &res);
        Ok::<_, ClientError>(res)
    };
    store
        .thunk(
            AuthAction::LoginPending,
            request,
            |u| Action::Auth(AuthAction::LoginFulfilled(u)),
            |m| Action::Auth(AuthAction::LoginRejected(m)),
        )
        .await
}

pub fn logout(store: &mut Store, storage: &dyn Storage) {
    if let Err(e) = storage.remove_item(USER_KEY) {
        warn!(error = %e, "could not clear session user");
    }
    store.dispatch(AuthAction::LogoutFulfilled);
}
