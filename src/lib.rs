//! # eth2-bls
//!
//! BLS signatures over BLS12-381 for Ethereum's consensus layer.
//!
//! ## Overview
//!
//! Implements `draft-irtf-cfrg-bls-signature-05` under the
//! proof-of-possession ciphersuite `BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_`
//! (public keys in G1, signatures in G2), the variant used throughout
//! Ethereum consensus: validator keys, attestations, sync committees.
//!
//! - **Newtype wrappers** around [`blst`]'s `min_pk` scheme, with a
//!   constant-time-aware compressed codec that classifies failures down to
//!   the specific violated invariant instead of one opaque error.
//! - **`Result`/`Status` types** instead of boolean or error-code returns.
//! - **Zeroizing secret keys** (via the `zeroize` crate).
//! - **Aggregation and batch verification** for attestations and blocks.
//!
//! ## Modules
//!
//! - [`crypto::bls12_381`] - secret keys, public keys, signatures, aggregation, batch verify
//! - [`error`] - the [`error::Status`] outcome type shared by every fallible operation
//! - [`consts`] - ciphersuite constants (DST, field modulus, curve order)
//!
//! ## Example
//!
//! ```rust
//! use eth2_bls::crypto::bls12_381::{SecretKey, PublicKey, Signature};
//!
//! let mut sk_bytes = [0u8; 32];
//! sk_bytes[31] = 1;
//! let sk = SecretKey::from_bytes(&sk_bytes).unwrap();
//! let pk = sk.derive_public_key();
//!
//! let message = b"0x5656...";
//! let sig = sk.sign(message);
//! assert!(sig.verify(&pk, message).is_success());
//!
//! // Round-trip through the wire encoding.
//! let pk2 = PublicKey::from_bytes(&pk.to_bytes()).unwrap();
//! let sig2 = Signature::from_bytes(&sig.to_bytes()).unwrap();
//! assert!(pk == pk2 && sig == sig2);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default) - Standard library support

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod consts;
pub mod crypto;
pub mod error;

// Re-exports
pub use crypto::bls12_381::{PublicKey, SecretKey, Signature};
pub use error::{Result, Status};

/// Prelude for common imports.
pub mod prelude {
    pub use crate::crypto::bls12_381::{batch_verify, PublicKey, SecretKey, Signature};
    pub use crate::error::{Result, Status};
}
