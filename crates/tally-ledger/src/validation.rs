use serde::Serialize;
use tally_crypto::{HashLinker, LinkError, LinkVerifier};
use tally_types::Record;

/// Result of walking a chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub record_count: u64,
    pub genesis_well_formed: bool,
    pub sequence_monotonic: bool,
    pub links_intact: bool,
    pub fingerprints_valid: bool,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// Returns `true` if all checks passed.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// A specific integrity violation detected during validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub sequence: u64,
    pub kind: ViolationKind,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    GenesisMalformed,
    SequenceGap,
    LinkMismatch,
    FingerprintMismatch,
}

impl From<LinkError> for Violation {
    fn from(err: LinkError) -> Self {
        let kind = match err {
            LinkError::GenesisMalformed { .. } => ViolationKind::GenesisMalformed,
            LinkError::SequenceGap { .. } => ViolationKind::SequenceGap,
            LinkError::LinkMismatch { .. } => ViolationKind::LinkMismatch,
            LinkError::FingerprintMismatch { .. } => ViolationKind::FingerprintMismatch,
        };
        Self {
            sequence: err.sequence(),
            kind,
            description: err.to_string(),
        }
    }
}

/// Chain integrity validator.
///
/// Unlike [`LinkVerifier::verify_chain`], which stops at the first problem,
/// this collects every violation in the chain.
pub struct ChainValidator;

impl ChainValidator {
    pub fn validate(records: &[Record]) -> ValidationReport {
        let mut violations = Vec::new();
        let mut genesis_well_formed = true;
        let mut sequence_monotonic = true;
        let mut links_intact = true;
        let mut fingerprints_valid = true;

        if let Some(genesis) = records.first() {
            if let Err(e) = LinkVerifier::verify_genesis(genesis) {
                genesis_well_formed = false;
                violations.push(e.into());
            }
        }

        for pair in records.windows(2) {
            let (previous, record) = (&pair[0], &pair[1]);

            if previous.sequence.checked_add(1) != Some(record.sequence) {
                sequence_monotonic = false;
                violations.push(
                    LinkError::SequenceGap {
                        expected: previous.sequence.saturating_add(1),
                        found: record.sequence,
                    }
                    .into(),
                );
            }

            if record.previous_fingerprint != previous.fingerprint {
                links_intact = false;
                violations.push(
                    LinkError::LinkMismatch {
                        sequence: record.sequence,
                    }
                    .into(),
                );
            }

            if !HashLinker::verify(record) {
                fingerprints_valid = false;
                violations.push(
                    LinkError::FingerprintMismatch {
                        sequence: record.sequence,
                    }
                    .into(),
                );
            }
        }

        ValidationReport {
            record_count: records.len() as u64,
            genesis_well_formed,
            sequence_monotonic,
            links_intact,
            fingerprints_valid,
            violations,
        }
    }
}
