//! Repositories for database operations

use anyhow::Result;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use sqlx::{PgPool, Row};
use tracing::info;

use crate::models::{SignupRequest, User};

pub mod recipe;

/// User repository for database operations
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Check whether a username or email is already taken
    pub async fn username_or_email_exists(&self, username: &str, email: &str) -> Result<bool> {
        let row = sqlx::query(
            r#"
            SELECT 1 AS found
            FROM users
            WHERE username = $1 OR email = $2
            "#,
        )
        .bind(username)
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.is_some())
    }

    /// Create a new user with a hashed password
    pub async fn create(&self, signup: &SignupRequest) -> Result<User> {
        info!("Creating new user: {}", signup.username);

        let salt = SaltString::generate(&mut rand::thread_rng());
        let argon2 = Argon2::default();
        let password_hash = argon2
            .hash_password(signup.password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?
            .to_string();

        let row = sqlx::query(
            r#"
            INSERT INTO users (username, email, password_hash, date_of_birth, phone, points)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING user_id, username, email, password_hash, date_of_birth, phone, points, created_at
            "#,
        )
        .bind(&signup.username)
        .bind(&signup.email)
        .bind(&password_hash)
        .bind(signup.date_of_birth)
        .bind(&signup.phone)
        .bind(signup.points)
        .fetch_one(&self.pool)
        .await?;

        Ok(user_from_row(&row))
    }

    /// Find a user by username
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT user_id, username, email, password_hash, date_of_birth, phone, points, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(user_from_row))
    }

    /// Get all users for the directory listing
    pub async fn get_all(&self) -> Result<Vec<User>> {
        let rows = sqlx::query(
            r#"
            SELECT user_id, username, email, password_hash, date_of_birth, phone, points, created_at
            FROM users
            ORDER BY user_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(user_from_row).collect())
    }

    /// Verify a user's password against the stored hash
    pub async fn verify_password(&self, user: &User, password: &str) -> Result<bool> {
        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|e| anyhow::anyhow!("Failed to parse password hash: {}", e))?;

        let argon2 = Argon2::default();
        let result = argon2.verify_password(password.as_bytes(), &parsed_hash);

        Ok(result.is_ok())
    }
}

fn user_from_row(row: &sqlx::postgres::PgRow) -> User {
    User {
        user_id: row.get("user_id"),
        username: row.get("username"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        date_of_birth: row.get("date_of_birth"),
        phone: row.get("phone"),
        points: row.get("points"),
        created_at: row.get("created_at"),
    }
}
