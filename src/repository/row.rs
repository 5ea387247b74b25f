use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::models::DateEvent;

/// `recurring` is stored as a SMALLINT; only 0 and 1 are ever written.
pub fn encode_recurring(recurring: bool) -> i16 {
    if recurring {
        1
    } else {
        0
    }
}

/// Any non-zero flag reads back as `true`.
pub fn decode_recurring(flag: i16) -> bool {
    flag != 0
}

/// Shape of a row in the `dates` table.
#[derive(Debug, Clone, FromRow)]
pub struct DateEventRow {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub event_datetime: DateTime<Utc>,
    pub date_type: Option<String>,
    pub recurring: i16,
    pub created_at: DateTime<Utc>,
}

impl From<DateEventRow> for DateEvent {
    fn from(row: DateEventRow) -> Self {
        DateEvent {
            id: row.id,
            title: row.title,
            description: row.description.unwrap_or_default(),
            event_at: Some(row.event_datetime),
            date_type: row.date_type.unwrap_or_default(),
            recurring: decode_recurring(row.recurring),
            created_at: Some(row.created_at),
        }
    }
}
