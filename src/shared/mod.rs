//! Types shared with the backend wire contract.

pub mod auth;
pub mod config;
pub mod error;

pub use auth::{AuthResponse, ErrorBody, FriendRecord, LoginRequest, UserRecord};
pub use error::AuthError;
