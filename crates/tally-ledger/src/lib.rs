//! Append-only participant ledger for Tally.
//!
//! This crate is the heart of Tally. It provides:
//! - `LedgerWriter` / `LedgerReader` trait boundaries
//! - `InMemoryLedger`, the lock-guarded chain owned by the process
//! - Genesis and successor record construction
//! - `SettlementEngine` for balance transfers between participants
//! - Chain validation reports (sequence, linkage, fingerprints)

pub mod error;
pub mod genesis;
pub mod memory;
pub mod settlement;
pub mod traits;
pub mod validation;

pub use error::LedgerError;
pub use genesis::{build_successor, GenesisConfig};
pub use memory::InMemoryLedger;
pub use settlement::SettlementEngine;
pub use traits::{AppendOutcome, LedgerReader, LedgerWriter};
pub use validation::{ChainValidator, ValidationReport, Violation, ViolationKind};
