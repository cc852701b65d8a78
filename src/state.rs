use std::sync::Arc;

use anyhow::Result;
use chrono::Local;
use civic_core::Catalog;

use crate::config::ServerConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let catalog = if config.seed {
            Catalog::seeded(Local::now().date_naive())?
        } else {
            Catalog::new()
        };
        Ok(Self::with_catalog(catalog))
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        AppState {
            catalog: Arc::new(catalog),
        }
    }
}
