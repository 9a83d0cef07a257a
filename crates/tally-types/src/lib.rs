//! Foundation types for the Tally ledger.
//!
//! Every other Tally crate depends on `tally-types`.
//!
//! # Key Types
//!
//! - [`Record`] — One link in the chain, binding a participant to a balance
//! - [`ParticipantId`] — Globally unique account identifier (UUID v4 text)
//! - [`CreatedAt`] — RFC 3339 creation timestamp, part of the fingerprint input
//! - [`TransferRequest`] / [`TransferOutcome`] — Settlement payloads

pub mod error;
pub mod participant;
pub mod record;
pub mod temporal;
pub mod transfer;

pub use error::TypeError;
pub use participant::ParticipantId;
pub use record::{Fingerprint, Record};
pub use temporal::CreatedAt;
pub use transfer::{TransferFailure, TransferOutcome, TransferRequest};
