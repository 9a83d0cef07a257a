//! Cryptographic primitives for the Tally ledger.
//!
//! Provides the SHA-256 record fingerprint ([`HashLinker`]) and hash chain
//! verification over anything that implements [`ChainLink`].
//!
//! All crypto operations wrap established libraries — no custom cryptography.

pub mod chain;
pub mod hasher;

pub use chain::{ChainLink, LinkError, LinkVerifier};
pub use hasher::HashLinker;
