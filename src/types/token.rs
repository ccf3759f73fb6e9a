use serde::{Deserialize, Serialize};

/// Session token payload. `id` is the user id as a string.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    pub id: String,
    pub iat: i64,
    pub exp: i64,
}
