use serde::{Deserialize, Serialize};

use crate::participant::ParticipantId;
use crate::temporal::CreatedAt;

/// Lowercase hex fingerprint of a record; empty for genesis.
pub type Fingerprint = String;

/// One link in the ledger chain.
///
/// The wire names (`index`, `uid`, `amount`, ...) are the established JSON
/// payload shape that clients already consume.
///
/// The fingerprint covers `sequence`, `created_at`, `participant_id` and
/// `previous_fingerprint` only. Balances are settled in place after creation
/// and are therefore not authenticated by it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "index")]
    pub sequence: u64,
    #[serde(rename = "timestamp")]
    pub created_at: CreatedAt,
    #[serde(rename = "uid")]
    pub participant_id: ParticipantId,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "amount")]
    pub balance: u64,
    #[serde(rename = "is_owner")]
    pub is_issuer: bool,
    #[serde(rename = "hash")]
    pub fingerprint: Fingerprint,
    #[serde(rename = "prevHash")]
    pub previous_fingerprint: Fingerprint,
}

impl Record {
    /// Returns `true` for the issuer record at the head of the chain.
    pub fn is_genesis(&self) -> bool {
        self.sequence == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record {
            sequence: 1,
            created_at: CreatedAt::from_raw("2024-01-01T00:00:00Z"),
            participant_id: ParticipantId::from_raw("p-1"),
            display_name: "alice".into(),
            balance: 0,
            is_issuer: false,
            fingerprint: "ff".into(),
            previous_fingerprint: "".into(),
        }
    }

    #[test]
    fn wire_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        let obj = value.as_object().unwrap();
        for key in ["index", "timestamp", "uid", "name", "amount", "is_owner", "hash", "prevHash"] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert_eq!(obj.len(), 8);
        assert_eq!(value["uid"], "p-1");
        assert_eq!(value["amount"], 0);
    }

    #[test]
    fn decodes_wire_payload() {
        let json = r#"{"index":0,"timestamp":"t","uid":"u","name":"n","amount":1000,
            "is_owner":true,"hash":"","prevHash":""}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert!(record.is_genesis());
        assert!(record.is_issuer);
        assert_eq!(record.balance, 1000);
    }

    #[test]
    fn non_zero_sequence_is_not_genesis() {
        assert!(!sample().is_genesis());
    }
}
