use async_trait::async_trait;
use sqlx::PgPool;

use super::row::{encode_recurring, DateEventRow};
use super::DateRepository;
use crate::models::DateEvent;
use crate::utils::error::{AppError, Result};

const COLUMNS: &str = "id, title, description, event_datetime, date_type, recurring, created_at";

/// Store adapter over the `dates` table.
#[derive(Clone)]
pub struct PgDateRepository {
    pool: PgPool,
}

impl PgDateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DateRepository for PgDateRepository {
    async fn create(&self, event: &DateEvent) -> Result<DateEvent> {
        let row = sqlx::query_as::<_, DateEventRow>(&format!(
            "INSERT INTO dates (title, description, event_datetime, date_type, recurring)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        ))
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.event_at)
        .bind(&event.date_type)
        .bind(encode_recurring(event.recurring))
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<DateEvent>> {
        let rows = sqlx::query_as::<_, DateEventRow>(&format!(
            "SELECT {COLUMNS} FROM dates ORDER BY event_datetime ASC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(DateEvent::from).collect())
    }

    async fn get(&self, id: i64) -> Result<DateEvent> {
        sqlx::query_as::<_, DateEventRow>(&format!("SELECT {COLUMNS} FROM dates WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(DateEvent::from)
            .ok_or_else(|| AppError::NotFound(format!("date with id '{}' was not found", id)))
    }

    async fn update(&self, event: &DateEvent) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE dates
             SET title = $1,
                 description = $2,
                 event_datetime = $3,
                 date_type = $4,
                 recurring = $5
             WHERE id = $6",
        )
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.event_at)
        .bind(&event.date_type)
        .bind(encode_recurring(event.recurring))
        .bind(event.id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM dates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
