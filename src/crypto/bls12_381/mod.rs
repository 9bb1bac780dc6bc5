//! BLS signatures over BLS12-381 for Ethereum's consensus layer.
//!
//! Implements `draft-irtf-cfrg-bls-signature-05` under the
//! proof-of-possession ciphersuite `BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_`:
//! public keys live in G1, signatures in G2. Field and curve arithmetic,
//! the pairing engine, and hash-to-curve are supplied by [`blst`]; this
//! module owns validation, the compressed codec's status classification,
//! and the aggregation/batch-verification protocols built on top.
//!
//! # Types
//!
//! - [`SecretKey`], a 32-byte scalar, zeroized on drop.
//! - [`PublicKey`], a 48-byte compressed G1 point.
//! - [`Signature`], a 96-byte compressed G2 point.
//!
//! # Example
//!
//! ```
//! use eth2_bls::crypto::bls12_381::SecretKey;
//!
//! let sk_bytes = {
//!     let mut b = [0u8; 32];
//!     b[31] = 1;
//!     b
//! };
//! let sk = SecretKey::from_bytes(&sk_bytes).unwrap();
//! let pk = sk.derive_public_key();
//! let sig = sk.sign(b"hello world");
//! assert!(sig.verify(&pk, b"hello world").is_success());
//! ```
//!
//! Every public key passed to [`Signature::verify`], [`Signature::fast_aggregate_verify`],
//! [`Signature::aggregate_verify`], or [`batch_verify`] must already be
//! subgroup-checked; obtain keys via [`PublicKey::from_bytes`] (which
//! subgroup-checks) rather than [`PublicKey::from_bytes_unchecked`] unless
//! you are deferring the check to an amortized batch elsewhere.

mod batch;
mod codec;
mod public_key;
mod secret_key;
mod signature;

pub use batch::batch_verify;
pub use public_key::PublicKey;
pub use secret_key::SecretKey;
pub use signature::Signature;
