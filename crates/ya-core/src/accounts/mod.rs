//! User accounts.
//!
//! Users are stored with an argon2 PHC string; the login page keeps the user
//! id in the session and [`Authentication`](crate::auth::Authentication)
//! loads it back on every request.
use serde::Serialize;
use sqlx::FromRow;

use crate::{Pool, Result};

mod password;
pub mod views;

pub use password::{hash_password, verify_password};

/// Schema of the accounts table.
pub const SCHEMA: &[&str] = &["CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL
    )"];

/// A registered user.
#[derive(Clone, Debug, FromRow, Serialize, PartialEq, Eq)]
pub struct User {
    /// Primary key.
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// argon2 PHC string.
    #[serde(skip)]
    #[sqlx(rename = "password")]
    pub password_hash: String,
}

impl User {
    /// Creates a user, hashing `password`.
    pub async fn create(pool: &Pool, username: &str, password: &str) -> Result<Self> {
        let password_hash = hash_password(password)?;
        let user = sqlx::query_as::<_, Self>(
            "INSERT INTO users (username, password) VALUES (?, ?) RETURNING id, username, password",
        )
        .bind(username)
        .bind(&password_hash)
        .fetch_one(pool)
        .await?;
        tracing::info!(user_id = user.id, username, "user created");
        Ok(user)
    }

    /// Looks a user up by primary key.
    pub async fn find(pool: &Pool, id: i64) -> Result<Option<Self>> {
        Ok(
            sqlx::query_as::<_, Self>("SELECT id, username, password FROM users WHERE id = ?")
                .bind(id)
                .fetch_optional(pool)
                .await?,
        )
    }

    /// Looks a user up by login name.
    pub async fn find_by_username(pool: &Pool, username: &str) -> Result<Option<Self>> {
        Ok(sqlx::query_as::<_, Self>(
            "SELECT id, username, password FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(pool)
        .await?)
    }

    /// Returns the user when `password` matches.
    pub async fn authenticate(pool: &Pool, username: &str, password: &str) -> Result<Option<Self>> {
        let user = Self::find_by_username(pool, username).await?;
        Ok(user.filter(|user| verify_password(password, &user.password_hash)))
    }
}
