use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registration body. Fields are optional so a missing one surfaces as a
/// validation error instead of a deserialization failure.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct RUserRegister {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct RUserLogin {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

pub struct DBUserCreate {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Public projection returned by register and login.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserAuthRes {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub token: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MeRes {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

impl From<&entity::user::Model> for MeRes {
    fn from(user: &entity::user::Model) -> Self {
        MeRes {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}
