//! Wire contract for the authentication endpoints.
//!
//! The backend speaks camelCase JSON; everything here derives serde with
//! `rename_all = "camelCase"` so field names match the service exactly.

use serde::{Deserialize, Serialize};

/// User record as returned by the auth service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub picture_path: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub occupation: String,
    #[serde(default)]
    pub friends: Vec<FriendRecord>,
}

impl UserRecord {
    /// Display name shown in the top bar and on the home page.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A friend entry embedded in a [`UserRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub picture_path: String,
}

/// Successful response from `/auth/login` and `/auth/register`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: UserRecord,
    pub token: String,
}

/// JSON body sent to `/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Error body the service returns on rejected requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub msg: String,
}
