use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool, Type};
use strum_macros::{Display, EnumString};
use ts_rs::TS;
use uuid::Uuid;

/// Side of the marketplace a user belongs to
#[derive(Debug, Clone, Type, Serialize, Deserialize, PartialEq, TS, EnumString, Display)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UserRole {
    MediaBuyer,
    DataOwner,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub company: String,
    pub onboarding_completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateUser {
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub company: String,
    pub onboarding_completed: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"SELECT id, email, name, role, company, onboarding_completed, created_at
               FROM users
               WHERE email = $1"#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await
    }

    pub async fn create(pool: &SqlitePool, data: &CreateUser) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4();
        sqlx::query_as::<_, User>(
            r#"INSERT INTO users (id, email, name, role, company, onboarding_completed, created_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7)
               RETURNING id, email, name, role, company, onboarding_completed, created_at"#,
        )
        .bind(id)
        .bind(&data.email)
        .bind(&data.name)
        .bind(&data.role)
        .bind(&data.company)
        .bind(data.onboarding_completed)
        .bind(data.created_at)
        .fetch_one(pool)
        .await
    }

    /// Look up a user by email, inserting it when absent.
    ///
    /// Idempotent for a given email. The lookup and insert are not wrapped in
    /// a transaction; under concurrent callers the loser of the race hits the
    /// unique email index and gets a constraint error. The single-operator
    /// admin trigger accepts that.
    pub async fn find_or_create_by_email(
        pool: &SqlitePool,
        data: &CreateUser,
    ) -> Result<Self, sqlx::Error> {
        if let Some(existing) = Self::find_by_email(pool, &data.email).await? {
            return Ok(existing);
        }
        Self::create(pool, data).await
    }
}
