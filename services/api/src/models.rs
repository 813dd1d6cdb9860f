//! API models for request and response payloads

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub mod recipe;

/// User entity as stored in the relational `users` table
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub date_of_birth: Option<NaiveDate>,
    pub phone: Option<String>,
    pub points: i32,
    pub created_at: DateTime<Utc>,
}

/// Request for user signup
#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: Option<NaiveDate>,
    pub phone: Option<String>,
    #[serde(default)]
    pub points: i32,
}

/// Request for user login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// User payload returned by the directory endpoints; never carries the
/// password hash
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: Option<NaiveDate>,
    pub phone: Option<String>,
    pub points: i32,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            user_id: user.user_id,
            username: user.username,
            email: user.email,
            date_of_birth: user.date_of_birth,
            phone: user.phone,
            points: user.points,
            created_at: user.created_at,
        }
    }
}
