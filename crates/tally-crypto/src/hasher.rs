use sha2::{Digest, Sha256};
use tally_types::{Fingerprint, Record};

/// Computes the fingerprint that binds a record to its predecessor.
///
/// The digest input is the plain concatenation of the decimal sequence, the
/// creation timestamp text, the participant id and the previous fingerprint,
/// with no separators. Changing that input set changes every fingerprint
/// clients have already seen.
pub struct HashLinker;

impl HashLinker {
    /// Fingerprint from raw fields, as 64 lowercase hex characters.
    pub fn fingerprint(
        sequence: u64,
        created_at: &str,
        participant_id: &str,
        previous_fingerprint: &str,
    ) -> Fingerprint {
        let mut hasher = Sha256::new();
        hasher.update(sequence.to_string().as_bytes());
        hasher.update(created_at.as_bytes());
        hasher.update(participant_id.as_bytes());
        hasher.update(previous_fingerprint.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Fingerprint of a record's linkage fields.
    pub fn fingerprint_record(record: &Record) -> Fingerprint {
        Self::fingerprint(
            record.sequence,
            record.created_at.as_str(),
            record.participant_id.as_str(),
            &record.previous_fingerprint,
        )
    }

    /// Verify that the stored fingerprint matches the recomputed one.
    pub fn verify(record: &Record) -> bool {
        Self::fingerprint_record(record) == record.fingerprint
    }
}
