//! BLS12-381 signatures (compressed G2 points).

use crate::consts::SIGNATURE_LENGTH;
use crate::error::{Result, Status};

use super::codec::{self, G2};
use super::public_key::PublicKey;

const INFINITY_FLAG: u8 = 0b0100_0000;

/// A BLS12-381 signature: a point `S` in the prime-order subgroup of G2.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Signature(blst::min_pk::Signature);

// `blst::min_pk::Signature` does not itself implement `PartialEq`; compare
// by compressed encoding instead (see the analogous note on `PublicKey`).
impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for Signature {}

impl Signature {
    pub(crate) fn from_inner(inner: blst::min_pk::Signature) -> Self {
        Self(inner)
    }

    pub(crate) fn inner(&self) -> &blst::min_pk::Signature {
        &self.0
    }

    /// Deserializes a signature, checking that it is on the curve but
    /// **not** that it is in the prime-order subgroup.
    pub fn from_bytes_unchecked(bytes: &[u8; SIGNATURE_LENGTH]) -> Result<Self> {
        match codec::pre_check::<G2>(bytes)? {
            codec::PreCheck::Infinity => Err(Status::PointAtInfinity),
            codec::PreCheck::Finite => blst::min_pk::Signature::from_bytes(bytes)
                .map(Self)
                .map_err(|_| Status::PointNotOnCurve),
        }
    }

    /// Deserializes and fully validates a signature: on-curve, in the
    /// prime-order subgroup, and not the point at infinity.
    pub fn from_bytes(bytes: &[u8; SIGNATURE_LENGTH]) -> Result<Self> {
        let sig = Self::from_bytes_unchecked(bytes)?;
        match sig.0.validate(true) {
            Ok(()) => Ok(sig),
            Err(_) => Err(Status::PointNotInSubgroup),
        }
    }

    /// Serializes the signature to its compressed 96-byte encoding.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        self.0.to_bytes()
    }

    /// Re-validates this signature's invariants.
    pub fn validate(&self) -> Status {
        if self.is_identity() {
            return Status::PointAtInfinity;
        }
        match self.0.validate(true) {
            Ok(()) => Status::Success,
            Err(_) => Status::PointNotInSubgroup,
        }
    }

    /// Returns `true` if this signature is the neutral element of G2.
    pub fn is_identity(&self) -> bool {
        self.to_bytes()[0] & INFINITY_FLAG != 0
    }

    /// Verifies this signature against a single public key and message:
    /// checks `e(-G1, sig) * e(pk, hash_to_g2(msg)) == 1`.
    ///
    /// # Preconditions
    ///
    /// `pk` must already be subgroup-checked (see [`PublicKey::from_bytes`]).
    pub fn verify(&self, pk: &PublicKey, message: &[u8]) -> Status {
        if pk.is_identity() {
            return Status::PointAtInfinity;
        }
        if self.is_identity() {
            return Status::PointAtInfinity;
        }
        match self
            .0
            .verify(true, message, crate::consts::DST, &[], pk.inner(), false)
        {
            blst::BLST_ERROR::BLST_SUCCESS => Status::Success,
            _ => Status::VerificationFailure,
        }
    }

    /// Aggregates a list of signatures by summation on G2.
    ///
    /// An empty list aggregates to the identity element, with no error
    /// returned, mirroring [`PublicKey::aggregate`]'s contract.
    pub fn aggregate(sigs: &[Signature]) -> Signature {
        if sigs.is_empty() {
            return identity();
        }
        let refs: std::vec::Vec<&blst::min_pk::Signature> = sigs.iter().map(Signature::inner).collect();
        let agg = blst::min_pk::AggregateSignature::aggregate(&refs, false)
            .expect("aggregating non-empty, individually-valid signatures cannot fail");
        Self(agg.to_signature())
    }

    /// Fast aggregate verify: one message, many public keys, one aggregated
    /// signature. Equivalent to, but more efficient than, aggregating the
    /// keys and calling [`Signature::verify`].
    ///
    /// # Preconditions
    ///
    /// Every key in `pks` must already be subgroup-checked.
    pub fn fast_aggregate_verify(&self, pks: &[PublicKey], message: &[u8]) -> Status {
        if pks.is_empty() {
            return Status::ZeroLengthAggregation;
        }
        if pks.iter().any(PublicKey::is_identity) {
            return Status::PointAtInfinity;
        }
        if self.is_identity() {
            return Status::PointAtInfinity;
        }
        let refs: std::vec::Vec<&blst::min_pk::PublicKey> = pks.iter().map(PublicKey::inner).collect();
        match self
            .0
            .fast_aggregate_verify(true, message, crate::consts::DST, &refs)
        {
            blst::BLST_ERROR::BLST_SUCCESS => Status::Success,
            _ => Status::VerificationFailure,
        }
    }

    /// Aggregate verify: many (public key, message) pairs, one aggregated
    /// signature.
    ///
    /// Callers MUST ensure messages are distinct (or keys carry a verified
    /// proof-of-possession) to avoid rogue-key attacks; this is not checked
    /// here.
    ///
    /// # Preconditions
    ///
    /// Every key in `pks` must already be subgroup-checked.
    pub fn aggregate_verify(&self, pks: &[PublicKey], messages: &[&[u8]]) -> Status {
        if pks.is_empty() {
            return Status::ZeroLengthAggregation;
        }
        if pks.len() != messages.len() {
            return Status::InconsistentLengthsOfInputs;
        }
        if pks.iter().any(PublicKey::is_identity) {
            return Status::PointAtInfinity;
        }
        if self.is_identity() {
            return Status::PointAtInfinity;
        }
        let refs: std::vec::Vec<&blst::min_pk::PublicKey> = pks.iter().map(PublicKey::inner).collect();
        match self
            .0
            .aggregate_verify(true, messages, crate::consts::DST, &refs, false)
        {
            blst::BLST_ERROR::BLST_SUCCESS => Status::Success,
            _ => Status::VerificationFailure,
        }
    }
}

// `AggregateSignature::aggregate` errors on a 0-length slice (see the
// empty-participant guard in the sync-committee verifier this crate learned
// the aggregation shape from), so the identity element is built directly
// from its canonical infinity encoding instead of routing through it.
fn identity() -> Signature {
    let mut bytes = [0u8; SIGNATURE_LENGTH];
    bytes[0] = codec::INFINITY_ENCODING_BYTE0;
    let inner = blst::min_pk::Signature::from_bytes(&bytes)
        .expect("canonical infinity encoding always deserializes");
    Signature(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::bls12_381::secret_key::SecretKey;

    fn sk(last: u8) -> SecretKey {
        let mut b = [0u8; 32];
        b[31] = last;
        SecretKey::from_bytes(&b).unwrap()
    }

    #[test]
    fn sign_then_verify_succeeds() {
        let sk = sk(42);
        let pk = sk.derive_public_key();
        let msg = b"attestation payload";
        let sig = sk.sign(msg);
        assert_eq!(sig.verify(&pk, msg), Status::Success);
    }

    #[test]
    fn verify_fails_for_wrong_message() {
        let sk = sk(42);
        let pk = sk.derive_public_key();
        let sig = sk.sign(b"original");
        assert_eq!(sig.verify(&pk, b"tampered"), Status::VerificationFailure);
    }

    #[test]
    fn aggregate_of_empty_list_is_identity() {
        let agg = Signature::aggregate(&[]);
        assert!(agg.is_identity());
    }

    #[test]
    fn fast_aggregate_verify_rejects_empty_keys() {
        let sig = sk(1).sign(b"m");
        assert_eq!(
            sig.fast_aggregate_verify(&[], b"m"),
            Status::ZeroLengthAggregation
        );
    }

    #[test]
    fn fast_aggregate_verify_over_shared_message() {
        let sk1 = sk(1);
        let sk2 = sk(2);
        let sk3 = sk(3);
        let msg = b"sync committee root";

        let pks = [sk1.derive_public_key(), sk2.derive_public_key(), sk3.derive_public_key()];
        let sigs = [sk1.sign(msg), sk2.sign(msg), sk3.sign(msg)];
        let agg_sig = Signature::aggregate(&sigs);

        assert_eq!(agg_sig.fast_aggregate_verify(&pks, msg), Status::Success);
        assert_eq!(agg_sig.fast_aggregate_verify(&pks[..2], msg), Status::VerificationFailure);
    }

    #[test]
    fn aggregate_verify_over_distinct_messages() {
        let sk1 = sk(1);
        let sk2 = sk(2);
        let msg1: &[u8] = b"block A";
        let msg2: &[u8] = b"block B";

        let pks = [sk1.derive_public_key(), sk2.derive_public_key()];
        let sigs = [sk1.sign(msg1), sk2.sign(msg2)];
        let agg_sig = Signature::aggregate(&sigs);

        assert_eq!(agg_sig.aggregate_verify(&pks, &[msg1, msg2]), Status::Success);
        assert_eq!(
            agg_sig.aggregate_verify(&pks, &[msg2, msg1]),
            Status::VerificationFailure
        );
    }

    #[test]
    fn aggregate_verify_rejects_mismatched_lengths() {
        let sig = sk(1).sign(b"m");
        let pk = sk(1).derive_public_key();
        assert_eq!(
            sig.aggregate_verify(&[pk], &[b"a", b"b"]),
            Status::InconsistentLengthsOfInputs
        );
    }
}
