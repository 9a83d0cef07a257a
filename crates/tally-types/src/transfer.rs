use std::fmt;

use serde::{Deserialize, Serialize};

use crate::participant::ParticipantId;

/// A request to move value between two participants.
///
/// `amount` is signed so that a negative value survives decoding and is
/// rejected by settlement with a message, like every other bad transfer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub from: ParticipantId,
    pub to: ParticipantId,
    pub amount: i64,
}

/// Why a transfer was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferFailure {
    /// The amount was zero or negative.
    InvalidAmount,
    /// The source holds less than the requested amount.
    InsufficientBalance,
    /// Source or destination is not in the chain.
    UnknownParticipant,
    /// Crediting the destination would exceed `u64::MAX`.
    BalanceOverflow,
}

impl TransferFailure {
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidAmount => "invalid amount",
            Self::InsufficientBalance => "insufficient balance",
            Self::UnknownParticipant => "transaction failed",
            Self::BalanceOverflow => "balance overflow",
        }
    }
}

impl fmt::Display for TransferFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of a settlement attempt, as reported to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferOutcome {
    pub success: bool,
    pub message: String,
    #[serde(skip)]
    pub failure: Option<TransferFailure>,
}

impl TransferOutcome {
    pub const SUCCESS_MESSAGE: &'static str = "transaction successful";

    pub fn settled() -> Self {
        Self {
            success: true,
            message: Self::SUCCESS_MESSAGE.into(),
            failure: None,
        }
    }

    pub fn failed(reason: TransferFailure) -> Self {
        Self {
            success: false,
            message: reason.message().into(),
            failure: Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_messages() {
        assert_eq!(TransferFailure::InsufficientBalance.message(), "insufficient balance");
        assert_eq!(TransferFailure::UnknownParticipant.message(), "transaction failed");
        assert_eq!(TransferFailure::InvalidAmount.to_string(), "invalid amount");
    }

    #[test]
    fn outcome_wire_shape_omits_reason() {
        let outcome = TransferOutcome::failed(TransferFailure::InsufficientBalance);
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value, serde_json::json!({"success": false, "message": "insufficient balance"}));
    }

    #[test]
    fn settled_outcome() {
        let outcome = TransferOutcome::settled();
        assert!(outcome.success);
        assert!(outcome.failure.is_none());
        assert_eq!(outcome.message, TransferOutcome::SUCCESS_MESSAGE);
    }

    #[test]
    fn request_accepts_negative_amount() {
        let req: TransferRequest =
            serde_json::from_str(r#"{"from":"a","to":"b","amount":-5}"#).unwrap();
        assert_eq!(req.amount, -5);
        assert_eq!(req.from.as_str(), "a");
    }
}
