//! Postgres-backed registration records. The wire-shaped record is stored
//! whole as JSONB; email and event id are lifted into columns for the
//! duplicate lookup.

use serde_json::Value;
use sqlx::types::Json;
use sqlx::{PgPool, Row};

use super::model::Registration;

#[derive(Debug, Clone)]
pub struct RegistrationStore {
    pool: PgPool,
}

impl RegistrationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Id of an existing registration for this (lower-cased email, event)
    /// pair, if any. Nothing backs this with a unique constraint: two
    /// identical submissions racing between this lookup and the insert can
    /// both land. Accepted for this domain; admins review downstream.
    pub async fn find_existing_id(
        &self,
        email: &str,
        event_id: &str,
    ) -> Result<Option<String>, sqlx::Error> {
        let row = sqlx::query("SELECT id FROM registrations WHERE email = $1 AND event_id = $2")
            .bind(email)
            .bind(event_id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|row| row.try_get("id")).transpose()
    }

    pub async fn insert(&self, registration: &Registration) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO registrations (id, event_id, email, record, created_at)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&registration.id)
        .bind(&registration.payload.event_id)
        .bind(&registration.payload.email)
        .bind(Json(registration))
        .bind(registration.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// All registrations, newest first, in wire shape.
    pub async fn list(&self) -> Result<Vec<Value>, sqlx::Error> {
        let rows = sqlx::query("SELECT record FROM registrations ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(|row| row.try_get("record")).collect()
    }

    /// Delete by id, returning the removed record so the caller can clean up
    /// any uploaded media it references. `None` when no row matched.
    pub async fn delete(&self, id: &str) -> Result<Option<Value>, sqlx::Error> {
        let row = sqlx::query("DELETE FROM registrations WHERE id = $1 RETURNING record")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|row| row.try_get("record")).transpose()
    }
}
