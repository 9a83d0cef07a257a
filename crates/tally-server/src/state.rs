use std::sync::Arc;

use tally_ledger::InMemoryLedger;

use crate::config::ServerConfig;
use crate::error::ServerResult;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<InMemoryLedger>,
}

impl AppState {
    pub fn new(ledger: Arc<InMemoryLedger>) -> Self {
        Self { ledger }
    }

    /// Build state with a fresh ledger; genesis is installed here, before any request.
    pub fn from_config(config: &ServerConfig) -> ServerResult<Self> {
        let ledger = InMemoryLedger::new(&config.genesis)?;
        Ok(Self::new(Arc::new(ledger)))
    }
}
