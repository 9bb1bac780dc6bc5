//! Batch verification: checks many independent `(pubkey, message, signature)`
//! triplets with a single multi-pairing, weighted by per-triplet random
//! scalars so a forger cannot exploit linearity across triplets.

use sha2::{Digest, Sha256};

use crate::error::Status;

use super::public_key::PublicKey;
use super::signature::Signature;

/// Verifies that every `(pubkey, message, signature)` triplet in `batch` is
/// individually valid, using one random-linear-combination multi-pairing
/// instead of `batch.len()` independent pairings.
///
/// `secure_random_bytes` must be freshly drawn from a cryptographically
/// secure RNG for each call; reusing it across calls with attacker-visible
/// results weakens the unforgeability guarantee to "the adversary cannot
/// forge more than `2^64` triplets against this one random seed" rather than
/// "against any seed".
///
/// # Preconditions
///
/// Every public key in `batch` must already be subgroup-checked.
pub fn batch_verify(batch: &[(PublicKey, &[u8], Signature)], secure_random_bytes: &[u8; 32]) -> Status {
    if batch.is_empty() {
        return Status::ZeroLengthAggregation;
    }
    if batch
        .iter()
        .any(|(pk, _, sig)| pk.is_identity() || sig.is_identity())
    {
        return Status::PointAtInfinity;
    }

    let pks: std::vec::Vec<&blst::min_pk::PublicKey> = batch.iter().map(|(pk, _, _)| pk.inner()).collect();
    let sigs: std::vec::Vec<&blst::min_pk::Signature> = batch.iter().map(|(_, _, sig)| sig.inner()).collect();
    let msgs: std::vec::Vec<&[u8]> = batch.iter().map(|(_, msg, _)| *msg).collect();

    let rands: std::vec::Vec<blst::blst_scalar> = batch
        .iter()
        .enumerate()
        .map(|(i, (pk, msg, sig))| derive_scalar(secure_random_bytes, i, pk, msg, sig))
        .collect();

    let result = blst::min_pk::verify_multiple_aggregate_signatures(
        &msgs,
        crate::consts::DST,
        &pks,
        false,
        &sigs,
        false,
        &rands,
        64,
    );

    match result {
        blst::BLST_ERROR::BLST_SUCCESS => Status::Success,
        _ => Status::VerificationFailure,
    }
}

/// Derives the per-triplet scalar `c_i` as the low 8 bytes of
/// `SHA-256(secure_random_bytes ‖ LE64(i) ‖ pk ‖ LE64(len(msg)) ‖ msg ‖ sig)`.
///
/// Binding the index and the full triplet into the hash input ensures an
/// adversary who controls `pk_i`/`msg_i`/`sig_i` cannot predict or steer the
/// weight applied to their own forged triplet.
fn derive_scalar(
    secure_random_bytes: &[u8; 32],
    index: usize,
    pk: &PublicKey,
    msg: &&[u8],
    sig: &Signature,
) -> blst::blst_scalar {
    let mut hasher = Sha256::new();
    hasher.update(secure_random_bytes);
    hasher.update((index as u64).to_le_bytes());
    hasher.update(pk.to_bytes());
    hasher.update((msg.len() as u64).to_le_bytes());
    hasher.update(msg);
    hasher.update(sig.to_bytes());
    let digest = hasher.finalize();

    let mut scalar_bytes = [0u8; 32];
    scalar_bytes[..8].copy_from_slice(&digest[..8]);

    let mut scalar = blst::blst_scalar::default();
    scalar.b = scalar_bytes;
    scalar
}
