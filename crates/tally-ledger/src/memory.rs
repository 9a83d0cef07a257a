use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tally_crypto::LinkVerifier;
use tally_types::{CreatedAt, ParticipantId, Record};

use crate::error::LedgerError;
use crate::genesis::{build_successor, GenesisConfig};
use crate::traits::{AppendOutcome, LedgerReader, LedgerWriter};
use crate::validation::{ChainValidator, ValidationReport};

/// The process-wide chain, guarded by a single lock.
///
/// Every mutation (append, register, replace, settlement) holds the write
/// lock for its whole duration, so the tail a candidate is validated against
/// is the tail it is appended to. Readers take the read lock and never see a
/// half-applied change.
pub struct InMemoryLedger {
    chain: RwLock<Vec<Record>>,
}

impl InMemoryLedger {
    /// Create a ledger holding only the genesis record described by `genesis`.
    pub fn new(genesis: &GenesisConfig) -> Result<Self, LedgerError> {
        let record = genesis.build(CreatedAt::now())?;
        tracing::info!(
            issuer = %record.participant_id,
            supply = record.balance,
            "genesis record installed"
        );
        Ok(Self::from_genesis(record))
    }

    /// Create a ledger from an already built genesis record.
    pub fn from_genesis(genesis: Record) -> Self {
        Self {
            chain: RwLock::new(vec![genesis]),
        }
    }

    pub(crate) fn read_chain(&self) -> Result<RwLockReadGuard<'_, Vec<Record>>, LedgerError> {
        self.chain.read().map_err(|_| LedgerError::LockPoisoned)
    }

    pub(crate) fn write_chain(&self) -> Result<RwLockWriteGuard<'_, Vec<Record>>, LedgerError> {
        self.chain.write().map_err(|_| LedgerError::LockPoisoned)
    }

    fn append_locked(chain: &mut Vec<Record>, candidate: Record) -> Result<AppendOutcome, LedgerError> {
        let tail = chain.last().ok_or(LedgerError::EmptyLedger)?;
        match LinkVerifier::verify_successor(tail, &candidate) {
            Ok(()) => {
                tracing::info!(
                    seq = candidate.sequence,
                    participant = %candidate.participant_id,
                    "record appended"
                );
                chain.push(candidate.clone());
                Ok(AppendOutcome::Appended(candidate))
            }
            Err(reason) => {
                tracing::warn!(seq = candidate.sequence, %reason, "candidate rejected");
                Ok(AppendOutcome::Rejected { candidate, reason })
            }
        }
    }
}

impl LedgerWriter for InMemoryLedger {
    fn append(&self, candidate: Record) -> Result<AppendOutcome, LedgerError> {
        let mut chain = self.write_chain()?;
        Self::append_locked(&mut chain, candidate)
    }

    fn register(&self, display_name: &str) -> Result<AppendOutcome, LedgerError> {
        let mut chain = self.write_chain()?;
        let tail = chain.last().ok_or(LedgerError::EmptyLedger)?;
        let candidate = build_successor(tail, display_name, CreatedAt::now());
        Self::append_locked(&mut chain, candidate)
    }

    fn replace(&self, candidate: Vec<Record>) -> Result<bool, LedgerError> {
        let mut chain = self.write_chain()?;
        if candidate.len() > chain.len() {
            tracing::info!(from = chain.len(), to = candidate.len(), "chain replaced");
            *chain = candidate;
            Ok(true)
        } else {
            tracing::debug!(
                current = chain.len(),
                candidate = candidate.len(),
                "replacement ignored: candidate not longer"
            );
            Ok(false)
        }
    }
}

impl LedgerReader for InMemoryLedger {
    fn current_tail(&self) -> Result<Record, LedgerError> {
        self.read_chain()?.last().cloned().ok_or(LedgerError::EmptyLedger)
    }

    fn snapshot(&self) -> Result<Vec<Record>, LedgerError> {
        Ok(self.read_chain()?.clone())
    }

    fn len(&self) -> Result<usize, LedgerError> {
        Ok(self.read_chain()?.len())
    }

    fn get(&self, index: usize) -> Result<Option<Record>, LedgerError> {
        Ok(self.read_chain()?.get(index).cloned())
    }

    fn find(&self, participant_id: &ParticipantId) -> Result<Option<Record>, LedgerError> {
        Ok(self
            .read_chain()?
            .iter()
            .find(|r| r.participant_id == *participant_id)
            .cloned())
    }

    fn validate(&self) -> Result<ValidationReport, LedgerError> {
        Ok(ChainValidator::validate(&self.read_chain()?))
    }
}
