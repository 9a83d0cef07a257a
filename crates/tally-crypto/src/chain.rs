use tally_types::Record;

use crate::hasher::HashLinker;

/// Trait for values that participate in a hash chain.
pub trait ChainLink {
    /// Position in the chain; 0 for genesis.
    fn sequence(&self) -> u64;
    /// The stored fingerprint.
    fn fingerprint(&self) -> &str;
    /// The stored link to the predecessor (empty for genesis).
    fn previous_fingerprint(&self) -> &str;
    /// The fingerprint recomputed from the link's own fields.
    fn computed_fingerprint(&self) -> String;
}

impl ChainLink for Record {
    fn sequence(&self) -> u64 {
        self.sequence
    }
    fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
    fn previous_fingerprint(&self) -> &str {
        &self.previous_fingerprint
    }
    fn computed_fingerprint(&self) -> String {
        HashLinker::fingerprint_record(self)
    }
}

/// Hash chain integrity verifier.
///
/// Genesis is a fixed shape rather than a hashed link: sequence 0, no
/// previous fingerprint and an empty fingerprint of its own. Every later
/// link must continue the sequence, point at its predecessor's fingerprint,
/// and carry a fingerprint that recomputes.
pub struct LinkVerifier;

impl LinkVerifier {
    /// Check that `link` has the genesis shape.
    pub fn verify_genesis(link: &impl ChainLink) -> Result<(), LinkError> {
        if link.sequence() != 0 || !link.previous_fingerprint().is_empty() || !link.fingerprint().is_empty() {
            return Err(LinkError::GenesisMalformed {
                sequence: link.sequence(),
            });
        }
        Ok(())
    }

    /// Check that `candidate` may follow `previous`.
    ///
    /// Checks run in order: sequence continuity, previous-link match,
    /// fingerprint recomputation. The first failure is reported.
    pub fn verify_successor<L: ChainLink>(previous: &L, candidate: &L) -> Result<(), LinkError> {
        let expected = previous.sequence().checked_add(1);
        if expected != Some(candidate.sequence()) {
            return Err(LinkError::SequenceGap {
                expected: expected.unwrap_or(u64::MAX),
                found: candidate.sequence(),
            });
        }

        if candidate.previous_fingerprint() != previous.fingerprint() {
            return Err(LinkError::LinkMismatch {
                sequence: candidate.sequence(),
            });
        }

        if candidate.computed_fingerprint() != candidate.fingerprint() {
            return Err(LinkError::FingerprintMismatch {
                sequence: candidate.sequence(),
            });
        }

        Ok(())
    }

    /// Verify a whole chain, stopping at the first violation.
    pub fn verify_chain<L: ChainLink>(links: &[L]) -> Result<(), LinkError> {
        let Some(genesis) = links.first() else {
            return Ok(());
        };
        Self::verify_genesis(genesis)?;
        for pair in links.windows(2) {
            Self::verify_successor(&pair[0], &pair[1])?;
        }
        Ok(())
    }
}

/// Errors from chain verification.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("genesis at seq {sequence} is malformed (must be seq 0 with empty links)")]
    GenesisMalformed { sequence: u64 },

    #[error("sequence gap: expected {expected}, found {found}")]
    SequenceGap { expected: u64, found: u64 },

    #[error("broken link at seq {sequence}: previous fingerprint does not match")]
    LinkMismatch { sequence: u64 },

    #[error("fingerprint mismatch at seq {sequence}: computed fingerprint differs from stored")]
    FingerprintMismatch { sequence: u64 },
}

impl LinkError {
    /// Sequence number of the offending link.
    pub fn sequence(&self) -> u64 {
        match self {
            Self::GenesisMalformed { sequence }
            | Self::LinkMismatch { sequence }
            | Self::FingerprintMismatch { sequence } => *sequence,
            Self::SequenceGap { found, .. } => *found,
        }
    }
}
