use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::error::AppError;

/// A birthday, anniversary or reminder.
///
/// `id == 0` and `created_at == None` mark a record that has not been
/// persisted yet; both are assigned by the store. `recurring` is carried
/// as opaque data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateEvent {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub event_at: Option<DateTime<Utc>>,
    pub date_type: String,
    pub recurring: bool,
    pub created_at: Option<DateTime<Utc>>,
}

/// Inbound body for create and update requests.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DatePayload {
    pub title: String,
    pub description: String,
    pub event_at: String,
    pub date_type: String,
    pub recurring: bool,
}

impl DatePayload {
    /// Builds the record for `id` (0 for a new record), parsing `event_at`
    /// as RFC3339 with any offset.
    pub fn into_event(self, id: i64) -> Result<DateEvent, AppError> {
        let event_at = DateTime::parse_from_rfc3339(&self.event_at)
            .map_err(|_| AppError::validation("invalid event_at format (expect RFC3339)"))?
            .with_timezone(&Utc);

        Ok(DateEvent {
            id,
            title: self.title,
            description: self.description,
            event_at: Some(event_at),
            date_type: self.date_type,
            recurring: self.recurring,
            created_at: None,
        })
    }
}
