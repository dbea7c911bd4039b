//! User model.
//!
//! Storage-layer only: authentication is a stub boundary with no HTTP
//! surface, so users are reachable solely through [`crate::repositories::UserRepo`].

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `users` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
}

/// DTO for creating a user.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub password: String,
}
