use tally_crypto::LinkError;
use tally_types::{ParticipantId, Record};

use crate::error::LedgerError;
use crate::validation::ValidationReport;

/// Result of offering a candidate record to the ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The candidate extended the chain.
    Appended(Record),
    /// The candidate did not fit the tail and was discarded.
    Rejected { candidate: Record, reason: LinkError },
}

impl AppendOutcome {
    pub fn is_appended(&self) -> bool {
        matches!(self, Self::Appended(_))
    }

    /// The record that was offered, whether or not it was kept.
    pub fn record(&self) -> &Record {
        match self {
            Self::Appended(record) => record,
            Self::Rejected { candidate, .. } => candidate,
        }
    }

    pub fn into_record(self) -> Record {
        match self {
            Self::Appended(record) => record,
            Self::Rejected { candidate, .. } => candidate,
        }
    }
}

/// Write boundary for ledger mutation. Each call is one critical section.
pub trait LedgerWriter: Send + Sync {
    /// Validate `candidate` against the current tail and append it on success.
    fn append(&self, candidate: Record) -> Result<AppendOutcome, LedgerError>;

    /// Build a record for a new participant from the current tail and append it.
    fn register(&self, display_name: &str) -> Result<AppendOutcome, LedgerError>;

    /// Replace the whole chain if `candidate` is strictly longer.
    fn replace(&self, candidate: Vec<Record>) -> Result<bool, LedgerError>;
}

/// Read boundary for ledger inspection.
pub trait LedgerReader: Send + Sync {
    fn current_tail(&self) -> Result<Record, LedgerError>;

    fn snapshot(&self) -> Result<Vec<Record>, LedgerError>;

    fn len(&self) -> Result<usize, LedgerError>;

    fn get(&self, index: usize) -> Result<Option<Record>, LedgerError>;

    /// First record in chain order carrying `participant_id`.
    fn find(&self, participant_id: &ParticipantId) -> Result<Option<Record>, LedgerError>;

    fn validate(&self) -> Result<ValidationReport, LedgerError>;
}
