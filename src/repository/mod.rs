//! Persistence of [`DateEvent`] records.
//!
//! [`DateRepository`] is the contract the service layer talks to. The
//! Postgres adapter is used in production; the in-memory one stands in for
//! it in tests.

use async_trait::async_trait;

use crate::models::DateEvent;
use crate::utils::error::Result;

pub mod memory;
pub mod postgres;
pub mod row;

pub use memory::InMemoryDateRepository;
pub use postgres::PgDateRepository;

#[async_trait]
pub trait DateRepository: Send + Sync {
    /// Inserts everything but `id` and `created_at` and returns the stored
    /// record, carrying both store-assigned values.
    async fn create(&self, event: &DateEvent) -> Result<DateEvent>;

    /// All records, earliest `event_at` first.
    async fn list(&self) -> Result<Vec<DateEvent>>;

    /// Fails with `AppError::NotFound` when no row has this id.
    async fn get(&self, id: i64) -> Result<DateEvent>;

    /// Replaces the mutable fields of the row `event.id`. Returns whether a
    /// row matched.
    async fn update(&self, event: &DateEvent) -> Result<bool>;

    /// Hard delete. Returns whether a row matched.
    async fn delete(&self, id: i64) -> Result<bool>;
}
