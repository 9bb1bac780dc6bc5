//! Cryptographic operations.
//!
//! This crate currently implements one cryptographic suite:
//!
//! - [`bls12_381`] - BLS signatures over the BLS12-381 pairing curve
//!
//! All implementations use constant-time operations where security-relevant.

pub mod bls12_381;

pub use bls12_381::{
    batch_verify as bls_batch_verify, PublicKey as BlsPublicKey, SecretKey as BlsSecretKey,
    Signature as BlsSignature,
};
