/// Errors produced by ledger operations.
///
/// Rejected candidates and refused transfers are not errors; they come back
/// as [`crate::AppendOutcome`] and [`tally_types::TransferOutcome`] values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("ledger has no records; genesis was never installed")]
    EmptyLedger,

    #[error("invalid genesis: {0}")]
    InvalidGenesis(String),

    #[error("ledger lock poisoned")]
    LockPoisoned,
}
