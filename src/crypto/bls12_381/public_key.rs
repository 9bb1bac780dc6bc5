//! BLS12-381 public keys (compressed G1 points).

use crate::consts::PUBLIC_KEY_LENGTH;
use crate::error::{Result, Status};

use super::codec::{self, G1};

const INFINITY_FLAG: u8 = 0b0100_0000;

/// A BLS12-381 public key: a point `P` in the prime-order subgroup of G1.
///
/// Wraps [`blst::min_pk::PublicKey`]. The all-zero-with-infinity-flag
/// encoding is only ever produced internally, as the result of aggregating
/// an empty key list; it is rejected by [`PublicKey::from_bytes`] and
/// [`PublicKey::from_bytes_unchecked`].
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct PublicKey(blst::min_pk::PublicKey);

// `blst::min_pk::PublicKey` does not itself implement `PartialEq`; compare
// by compressed encoding instead, the same approach used throughout the
// consensus-client ecosystem (e.g. Aptos's `bls12381` key module).
impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for PublicKey {}

impl PublicKey {
    pub(crate) fn from_inner(inner: blst::min_pk::PublicKey) -> Self {
        Self(inner)
    }

    pub(crate) fn inner(&self) -> &blst::min_pk::PublicKey {
        &self.0
    }

    /// Deserializes a public key, checking that it is on the curve but
    /// **not** that it is in the prime-order subgroup.
    ///
    /// Use this only when the caller will subgroup-check the key some other
    /// way (e.g. via a proof-of-possession), or will amortize the check
    /// across a batch. See [`PublicKey::validate`].
    pub fn from_bytes_unchecked(bytes: &[u8; PUBLIC_KEY_LENGTH]) -> Result<Self> {
        match codec::pre_check::<G1>(bytes)? {
            codec::PreCheck::Infinity => Err(Status::PointAtInfinity),
            codec::PreCheck::Finite => blst::min_pk::PublicKey::from_bytes(bytes)
                .map(Self)
                .map_err(|_| Status::PointNotOnCurve),
        }
    }

    /// Deserializes and fully validates a public key: on-curve, in the
    /// prime-order subgroup, and not the point at infinity.
    pub fn from_bytes(bytes: &[u8; PUBLIC_KEY_LENGTH]) -> Result<Self> {
        let pk = Self::from_bytes_unchecked(bytes)?;
        match pk.0.validate() {
            Ok(()) => Ok(pk),
            Err(_) => Err(Status::PointNotInSubgroup),
        }
    }

    /// Serializes the public key to its compressed 48-byte encoding.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.0.to_bytes()
    }

    /// Runs the full validity predicate (on-curve, in-subgroup, non-infinity)
    /// against an already-constructed key.
    pub fn validate(&self) -> Status {
        if self.is_identity() {
            return Status::PointAtInfinity;
        }
        match self.0.validate() {
            Ok(()) => Status::Success,
            Err(_) => Status::PointNotInSubgroup,
        }
    }

    /// Returns `true` if this key is the neutral element of G1.
    ///
    /// Only reachable by aggregating an empty list of public keys; a
    /// well-formed key obtained from [`PublicKey::from_bytes`] is never
    /// the identity.
    pub fn is_identity(&self) -> bool {
        self.to_bytes()[0] & INFINITY_FLAG != 0
    }

    /// Aggregates a list of public keys by summation on G1.
    ///
    /// An empty list aggregates to the identity element, with no error
    /// returned (see the crate's design notes on this contract).
    ///
    /// # Preconditions
    ///
    /// Every key in `keys` must already be subgroup-checked (e.g. via
    /// [`PublicKey::from_bytes`] or an externally-verified
    /// proof-of-possession); this function does not re-check.
    pub fn aggregate(keys: &[PublicKey]) -> PublicKey {
        if keys.is_empty() {
            return identity();
        }
        let refs: std::vec::Vec<&blst::min_pk::PublicKey> = keys.iter().map(PublicKey::inner).collect();
        let agg = blst::min_pk::AggregatePublicKey::aggregate(&refs, false)
            .expect("aggregating non-empty, individually-valid public keys cannot fail");
        Self(agg.to_public_key())
    }
}

// `AggregatePublicKey::aggregate` errors on a 0-length slice (see the
// empty-participant guard in the sync-committee verifier this crate learned
// the aggregation shape from), so the identity element is built directly
// from its canonical infinity encoding instead of routing through it.
fn identity() -> PublicKey {
    let mut bytes = [0u8; PUBLIC_KEY_LENGTH];
    bytes[0] = codec::INFINITY_ENCODING_BYTE0;
    let inner = blst::min_pk::PublicKey::from_bytes(&bytes)
        .expect("canonical infinity encoding always deserializes");
    PublicKey(inner)
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
    fn rejects_infinity_encoding() {
        let mut bytes = [0u8; PUBLIC_KEY_LENGTH];
        bytes[0] = 0b1100_0000;
        assert_eq!(PublicKey::from_bytes(&bytes).unwrap_err(), Status::PointAtInfinity);
    }

    #[test]
    fn round_trips_a_derived_key() {
        let pk = sk(7).derive_public_key();
        let bytes = pk.to_bytes();
        let decoded = PublicKey::from_bytes(&bytes).unwrap();
        assert!(decoded == pk);
    }

    #[test]
    fn aggregate_of_empty_list_is_identity() {
        let agg = PublicKey::aggregate(&[]);
        assert!(agg.is_identity());
    }

    #[test]
    fn aggregate_sums_distinct_keys() {
        let a = sk(1).derive_public_key();
        let b = sk(2).derive_public_key();
        let agg = PublicKey::aggregate(&[a, b]);
        assert!(!agg.is_identity());
        assert_ne!(agg.to_bytes(), a.to_bytes());
    }

    /// Builds a canonical (`C=1`, `I=0`, `S=0`, `x < p`) compressed G1
    /// encoding from a counter, with no curve arithmetic performed: the top
    /// 5 bits of byte 0 are reduced mod `0x1a` (the field modulus's own top
    /// byte), which alone guarantees `x < p` regardless of the remaining
    /// bytes.
    fn candidate_x_bytes(counter: u32) -> [u8; PUBLIC_KEY_LENGTH] {
        use sha2::{Digest, Sha256};

        let mut first_half = Sha256::new();
        first_half.update(counter.to_be_bytes());
        first_half.update([0u8]);
        let first_half = first_half.finalize();

        let mut second_half = Sha256::new();
        second_half.update(counter.to_be_bytes());
        second_half.update([1u8]);
        let second_half = second_half.finalize();

        let mut bytes = [0u8; PUBLIC_KEY_LENGTH];
        bytes[1..33].copy_from_slice(&first_half);
        bytes[33..48].copy_from_slice(&second_half[..15]);
        bytes[0] = 0b1000_0000 | (first_half[0] % 0x1a);
        bytes
    }

    #[test]
    fn checked_deserialize_reaches_point_not_on_curve_and_not_in_subgroup() {
        // Roughly half of all canonical x-coordinates satisfy the curve
        // equation, and of those, only 1 in ~2^125 (BLS12-381's G1 cofactor)
        // land in the prime-order subgroup. Sweeping a couple hundred
        // independent candidates is enough to hit both `PointNotOnCurve`
        // and `PointNotInSubgroup` with overwhelming probability, without
        // needing a hand-computed vector for either.
        let mut saw_off_curve = false;
        let mut saw_wrong_subgroup = false;

        for counter in 0u32..256 {
            let bytes = candidate_x_bytes(counter);
            match PublicKey::from_bytes_unchecked(&bytes) {
                Err(Status::PointNotOnCurve) => saw_off_curve = true,
                Ok(_) => {
                    if PublicKey::from_bytes(&bytes) == Err(Status::PointNotInSubgroup) {
                        saw_wrong_subgroup = true;
                    }
                }
                Err(other) => panic!("unexpected status for a canonical x-coordinate: {:?}", other),
            }
            if saw_off_curve && saw_wrong_subgroup {
                break;
            }
        }

        assert!(saw_off_curve, "expected at least one of 256 candidates to be off-curve");
        assert!(
            saw_wrong_subgroup,
            "expected at least one on-curve candidate to land outside the prime-order subgroup"
        );
    }
}
