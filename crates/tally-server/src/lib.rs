//! HTTP server for the Tally ledger.
//!
//! Thin JSON glue over `tally-ledger`: list the chain, register
//! participants, settle transfers, and report chain validity.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::{parse_bind_addr, ServerConfig, ADDR_ENV};
pub use error::{ServerError, ServerResult};
pub use server::TallyServer;
pub use state::AppState;
