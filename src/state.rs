//! Application state for the studio dashboard.
//!
//! Contains the shared state that is passed to all handlers.

use std::sync::Arc;

use crate::config::RecordsConfig;
use crate::services::{DashboardService, RecordClient};
use crate::views::Views;
use crate::{config, Result};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Snapshot owner; all loads and mutations go through it.
    pub dashboard: DashboardService,
    /// Compiled page templates.
    pub views: Arc<Views>,
}

impl AppState {
    /// Create the application state from the global configuration.
    pub fn new() -> Result<Self> {
        Self::with_records(&config::config().records)
    }

    /// Create the application state against a specific record store.
    pub fn with_records(records: &RecordsConfig) -> Result<Self> {
        let records = Arc::new(RecordClient::new(records)?);
        let views = Arc::new(Views::new()?);

        Ok(Self {
            dashboard: DashboardService::new(records),
            views,
        })
    }
}
