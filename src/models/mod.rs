pub mod date_event;

pub use date_event::{DateEvent, DatePayload};
