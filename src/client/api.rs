use reqwest::{Client, ClientBuilder, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use entity::ticket::TicketStatus;

use crate::types::note::{NoteRes, RNoteCreate};
use crate::types::ticket::{RTicketCreate, RTicketUpdate, TicketRes};
use crate::types::user::{MeRes, RUserLogin, RUserRegister, UserAuthRes};

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with an error body.
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("Not authorized")]
    NoSession,
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    /// Text shown to the user: the server's `message` when there is one.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Thin HTTP client for the support desk API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = ClientBuilder::new()
            .user_agent("support-desk-client/0.1 (+reqwest)")
            .tcp_nodelay(true)
            .pool_idle_timeout(Duration::from_secs(30))
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { base_url: base_url.into().trim_end_matches('/').to_string(), http })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ClientError> {
        let res = req.send().await?;
        let status = res.status();
        debug!(%status, url = %res.url(), "api response");

        if status.is_success() {
            return Ok(res.json().await?);
        }

        let message = match res.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => status.to_string(),
        };
        Err(ClientError::Api { status: status.as_u16(), message })
    }

    pub async fn register(&self, user: &RUserRegister) -> Result<UserAuthRes, ClientError> {
        self.send(self.http.post(self.url("/api/users")).json(user)).await
    }

    pub async fn login(&self, user: &RUserLogin) -> Result<UserAuthRes, ClientError> {
        self.send(self.http.post(self.url("/api/users/login")).json(user)).await
    }

    pub async fn me(&self, token: &str) -> Result<MeRes, ClientError> {
        self.send(self.http.get(self.url("/api/users/me")).bearer_auth(token)).await
    }

    pub async fn create_ticket(&self, token: &str, ticket: &RTicketCreate) -> Result<TicketRes, ClientError> {
        self.send(self.http.post(self.url("/api/tickets")).bearer_auth(token).json(ticket)).await
    }

    pub async fn get_tickets(&self, token: &str) -> Result<Vec<TicketRes>, ClientError> {
        self.send(self.http.get(self.url("/api/tickets")).bearer_auth(token)).await
    }

    pub async fn get_ticket(&self, token: &str, id: Uuid) -> Result<TicketRes, ClientError> {
        self.send(self.http.get(self.url(&format!("/api/tickets/{id}"))).bearer_auth(token)).await
    }

    pub async fn close_ticket(&self, token: &str, id: Uuid) -> Result<TicketRes, ClientError> {
        let patch = RTicketUpdate { status: Some(TicketStatus::Closed), ..Default::default() };
        self.send(self.http.put(self.url(&format!("/api/tickets/{id}"))).bearer_auth(token).json(&patch)).await
    }

    pub async fn get_notes(&self, token: &str, ticket_id: Uuid) -> Result<Vec<NoteRes>, ClientError> {
        self.send(self.http.get(self.url(&format!("/api/tickets/{ticket_id}/notes"))).bearer_auth(token)).await
    }

    pub async fn create_note(&self, token: &str, ticket_id: Uuid, text: &str) -> Result<NoteRes, ClientError> {
        let body = RNoteCreate { text: Some(text.to_string()) };
        self.send(self.http.post(self.url(&format!("/api/tickets/{ticket_id}/notes"))).bearer_auth(token).json(&body)).await
    }
}
