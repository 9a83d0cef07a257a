use serde::{Deserialize, Serialize};
use tally_crypto::HashLinker;
use tally_types::{CreatedAt, ParticipantId, Record};

use crate::error::LedgerError;

/// Identity and supply of the issuer record at the head of the chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenesisConfig {
    pub issuer_name: String,
    pub initial_supply: u64,
}

impl Default for GenesisConfig {
    fn default() -> Self {
        Self {
            issuer_name: "issuer".into(),
            initial_supply: 1000,
        }
    }
}

impl GenesisConfig {
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.initial_supply == 0 {
            return Err(LedgerError::InvalidGenesis("initial supply must be non-zero".into()));
        }
        if self.issuer_name.trim().is_empty() {
            return Err(LedgerError::InvalidGenesis("issuer name must not be empty".into()));
        }
        Ok(())
    }

    /// Build the genesis record. It carries no links: both fingerprints are empty.
    pub fn build(&self, created_at: CreatedAt) -> Result<Record, LedgerError> {
        self.validate()?;
        Ok(Record {
            sequence: 0,
            created_at,
            participant_id: ParticipantId::generate(),
            display_name: self.issuer_name.clone(),
            balance: self.initial_supply,
            is_issuer: true,
            fingerprint: String::new(),
            previous_fingerprint: String::new(),
        })
    }
}

/// Build the candidate that would follow `tail` for a new participant.
///
/// The candidate starts with a zero balance, a fresh participant id, and a
/// fingerprint linking it to `tail`. It still has to pass append validation.
pub fn build_successor(tail: &Record, display_name: &str, created_at: CreatedAt) -> Record {
    let mut candidate = Record {
        sequence: tail.sequence + 1,
        created_at,
        participant_id: ParticipantId::generate(),
        display_name: display_name.to_owned(),
        balance: 0,
        is_issuer: false,
        fingerprint: String::new(),
        previous_fingerprint: tail.fingerprint.clone(),
    };
    candidate.fingerprint = HashLinker::fingerprint_record(&candidate);
    candidate
}
