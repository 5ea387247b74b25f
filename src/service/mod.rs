//! Business rules applied before anything reaches the store.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use crate::models::DateEvent;
use crate::repository::DateRepository;
use crate::utils::error::{AppError, Result};

/// How far in the past a new event may be and still count as "now".
pub const PAST_GRACE_SECS: i64 = 60;

pub struct DateService {
    repo: Arc<dyn DateRepository>,
}

impl DateService {
    pub fn new(repo: Arc<dyn DateRepository>) -> Self {
        Self { repo }
    }

    /// Returns the record as stored, with `id` and `created_at` assigned.
    pub async fn create_date(&self, event: &DateEvent) -> Result<DateEvent> {
        check_title(event)?;
        let event_at = check_event_at(event)?;
        if event_at < Utc::now() - Duration::seconds(PAST_GRACE_SECS) {
            return Err(AppError::validation("event date cannot be in the past"));
        }

        let created = self.repo.create(event).await?;
        info!(id = created.id, title = %created.title, "Date created");
        Ok(created)
    }

    pub async fn list_dates(&self) -> Result<Vec<DateEvent>> {
        self.repo.list().await
    }

    pub async fn get_date(&self, id: i64) -> Result<DateEvent> {
        self.repo.get(id).await
    }

    /// Past timestamps are accepted here, unlike on create.
    pub async fn update_date(&self, event: &DateEvent) -> Result<()> {
        check_title(event)?;
        check_event_at(event)?;

        if !self.repo.update(event).await? {
            debug!(id = event.id, "update matched no date");
        }
        Ok(())
    }

    pub async fn delete_date(&self, id: i64) -> Result<()> {
        if !self.repo.delete(id).await? {
            debug!(id, "delete matched no date");
        }
        Ok(())
    }
}

fn check_title(event: &DateEvent) -> Result<()> {
    if event.title.is_empty() {
        return Err(AppError::validation("title required"));
    }
    Ok(())
}

fn check_event_at(event: &DateEvent) -> Result<DateTime<Utc>> {
    event
        .event_at
        .ok_or_else(|| AppError::validation("event date required"))
}
