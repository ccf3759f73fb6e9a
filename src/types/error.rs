use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;

use crate::config::{self, Environment};

#[derive(Debug, Error)]
pub enum AppError {
    // standard web stuffs
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    AlreadyExists(String),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Not authorized")]
    Unauthorized,
    #[error("Not authorized to access this ticket")]
    Forbidden,
    #[error("{0}")]
    NotFound(String),

    // infra things
    #[error(transparent)]
    Db(DbErr),
    #[error("{0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::from_db(e)
    }
}

#[derive(Serialize)]
pub(crate) struct ErrorBody {
    pub message: String,
    pub stack: Option<String>,
}

impl AppError {
    fn from_db(err: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
            return AppError::AlreadyExists("User already exists".into());
        }
        match err {
            DbErr::RecordNotFound(what) => AppError::NotFound(what),
            other => AppError::Db(other),
        }
    }

    pub(crate) fn body(&self, environment: Environment) -> ErrorBody {
        ErrorBody {
            message: self.to_string(),
            stack: match environment {
                Environment::Development => Some(format!("{self:?}")),
                Environment::Production => None,
            },
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            // duplicates are a client mistake, not a 409, for this API
            Self::Validation(_) | Self::BadRequest(_) | Self::AlreadyExists(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            tracing::error!(error = ?self, "request failed");
        }
        HttpResponse::build(self.status_code()).json(self.body(config::environment()))
    }
}
