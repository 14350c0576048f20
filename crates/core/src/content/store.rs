//! Postgres-backed store for the singleton content document.
//!
//! The whole document lives in one JSONB row. There is no field-level update
//! path: every write sanitizes the caller's full payload and replaces the
//! row. Concurrent writers race read-modify-write cycles and the last write
//! wins; callers must not assume otherwise.

use serde_json::Value;
use sqlx::types::Json;
use sqlx::{PgPool, Row};

use super::model::SiteContent;
use super::sanitize::sanitize_content;
use super::seed;

/// Row key of the one document this deployment owns.
pub const CONTENT_DOC_ID: &str = "site_content_v1";

#[derive(Debug, Clone)]
pub struct ContentStore {
    pool: PgPool,
}

impl ContentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Read the document, sanitized. A missing row yields the default
    /// document without creating it.
    pub async fn read(&self) -> Result<SiteContent, sqlx::Error> {
        let row = sqlx::query("SELECT content FROM site_content WHERE document_id = $1")
            .bind(CONTENT_DOC_ID)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let content: Value = row.try_get("content")?;
                Ok(sanitize_content(&content))
            }
            None => Ok(SiteContent::default()),
        }
    }

    /// Sanitize an arbitrary payload and replace the document with it,
    /// creating the row if absent. Returns the sanitized result.
    pub async fn write(&self, candidate: &Value) -> Result<SiteContent, sqlx::Error> {
        let content = sanitize_content(candidate);
        self.replace(&content).await?;
        Ok(content)
    }

    /// Replace the document with an already well-formed value.
    pub async fn replace(&self, content: &SiteContent) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO site_content (document_id, content)
             VALUES ($1, $2)
             ON CONFLICT (document_id)
             DO UPDATE SET content = EXCLUDED.content, updated_at = now()",
        )
        .bind(CONTENT_DOC_ID)
        .bind(Json(content))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Create the document on first boot, seeded with example content.
    ///
    /// Seeding is gated on the row being absent, not on lists being empty:
    /// an admin who clears every event must not be re-seeded on restart.
    /// `ON CONFLICT DO NOTHING` keeps two racing boots from both seeding.
    pub async fn ensure(&self) -> Result<(), sqlx::Error> {
        let existing = sqlx::query("SELECT 1 FROM site_content WHERE document_id = $1")
            .bind(CONTENT_DOC_ID)
            .fetch_optional(&self.pool)
            .await?;
        if existing.is_some() {
            return Ok(());
        }

        let mut content = SiteContent::default();
        content.faq = seed::faq_seed();
        content.events = seed::event_seed();
        content.judges = seed::judge_seed();
        content.gallery = seed::gallery_seed();

        let result = sqlx::query(
            "INSERT INTO site_content (document_id, content)
             VALUES ($1, $2)
             ON CONFLICT (document_id) DO NOTHING",
        )
        .bind(CONTENT_DOC_ID)
        .bind(Json(&content))
        .execute(&self.pool)
        .await?;

        if result.rows_affected() > 0 {
            tracing::info!("content document created and seeded");
        }
        Ok(())
    }
}
