use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::row::{encode_recurring, DateEventRow};
use super::DateRepository;
use crate::models::DateEvent;
use crate::utils::error::{AppError, Result};

#[derive(Default)]
struct Table {
    rows: Vec<DateEventRow>,
    last_id: i64,
}

/// Process-local store with the same observable behaviour as the Postgres
/// adapter, including the integer encoding of `recurring`.
#[derive(Default)]
pub struct InMemoryDateRepository {
    table: RwLock<Table>,
}

impl InMemoryDateRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn missing_event_at() -> AppError {
    AppError::StoreError(sqlx::Error::Protocol(
        "null value in column \"event_datetime\" violates not-null constraint".into(),
    ))
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("date with id '{}' was not found", id))
}

#[async_trait]
impl DateRepository for InMemoryDateRepository {
    async fn create(&self, event: &DateEvent) -> Result<DateEvent> {
        let event_datetime = event.event_at.ok_or_else(missing_event_at)?;

        let mut table = self.table.write().await;
        table.last_id += 1;
        let row = DateEventRow {
            id: table.last_id,
            title: event.title.clone(),
            description: Some(event.description.clone()),
            event_datetime,
            date_type: Some(event.date_type.clone()),
            recurring: encode_recurring(event.recurring),
            created_at: Utc::now(),
        };
        table.rows.push(row.clone());
        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<DateEvent>> {
        let table = self.table.read().await;
        let mut rows = table.rows.clone();
        rows.sort_by_key(|row| (row.event_datetime, row.id));
        Ok(rows.into_iter().map(DateEvent::from).collect())
    }

    async fn get(&self, id: i64) -> Result<DateEvent> {
        let table = self.table.read().await;
        table
            .rows
            .iter()
            .find(|row| row.id == id)
            .cloned()
            .map(DateEvent::from)
            .ok_or_else(|| not_found(id))
    }

    async fn update(&self, event: &DateEvent) -> Result<bool> {
        let event_datetime = event.event_at.ok_or_else(missing_event_at)?;

        let mut table = self.table.write().await;
        let Some(row) = table.rows.iter_mut().find(|row| row.id == event.id) else {
            return Ok(false);
        };
        row.title = event.title.clone();
        row.description = Some(event.description.clone());
        row.event_datetime = event_datetime;
        row.date_type = Some(event.date_type.clone());
        row.recurring = encode_recurring(event.recurring);
        Ok(true)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|row| row.id != id);
        Ok(table.rows.len() < before)
    }
}
