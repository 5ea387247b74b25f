pub mod config;
pub mod db;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod service;
pub mod utils;

use std::sync::Arc;

use service::DateService;

/// Shared by every handler; built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub dates: Arc<DateService>,
}

impl AppState {
    pub fn new(dates: DateService) -> Self {
        Self {
            dates: Arc::new(dates),
        }
    }
}
