//! BLS12-381 secret keys (32-byte scalars in Fr).

use core::cmp::Ordering;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{compare_be, CURVE_ORDER, SECRET_KEY_LENGTH};
use crate::error::{Result, Status};

use super::public_key::PublicKey;
use super::signature::Signature;

/// A BLS12-381 secret key: an integer `0 < s < r` in the scalar field.
///
/// Wraps [`blst::min_pk::SecretKey`]. `blst::min_pk::SecretKey` is an opaque
/// FFI type that does not itself implement [`Zeroize`], so this type cannot
/// `#[derive(Zeroize)]`; instead it implements [`Zeroize`]/[`ZeroizeOnDrop`]
/// by hand, overwriting the inner scalar with the all-zero key on drop.
#[derive(Clone)]
#[repr(transparent)]
pub struct SecretKey(blst::min_pk::SecretKey);

impl Zeroize for SecretKey {
    fn zeroize(&mut self) {
        if let Ok(zeroed) = blst::min_pk::SecretKey::from_bytes(&[0u8; SECRET_KEY_LENGTH]) {
            self.0 = zeroed;
        }
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for SecretKey {}

impl SecretKey {
    /// Deserializes and validates a secret key from its big-endian encoding.
    ///
    /// Rejects the all-zero key ([`Status::ZeroSecretKey`]) and any value
    /// `>= r` ([`Status::SecretKeyLargerThanCurveOrder`]). On rejection the
    /// input `bytes` buffer is left to the caller to clear; this function
    /// never retains a copy of rejected key material.
    pub fn from_bytes(bytes: &[u8; SECRET_KEY_LENGTH]) -> Result<Self> {
        if let Err(status) = validate_bytes(bytes) {
            return Err(status);
        }
        let inner = blst::min_pk::SecretKey::from_bytes(bytes).map_err(|_| Status::InvalidEncoding)?;
        Ok(Self(inner))
    }

    /// Serializes the secret key to its big-endian encoding.
    pub fn to_bytes(&self) -> [u8; SECRET_KEY_LENGTH] {
        self.0.to_bytes()
    }

    /// Re-validates this key's invariants (always `Success` for a
    /// successfully-constructed `SecretKey`; provided for API parity with
    /// [`PublicKey::validate`] and [`Signature::validate`]).
    pub fn validate(&self) -> Status {
        let mut bytes = self.to_bytes();
        let result = validate_bytes(&bytes);
        bytes.zeroize();
        match result {
            Ok(()) => Status::Success,
            Err(status) => status,
        }
    }

    /// Derives the corresponding public key: `pk = [s] * G1`.
    pub fn derive_public_key(&self) -> PublicKey {
        PublicKey::from_inner(self.0.sk_to_pk())
    }

    /// Signs `message` under the proof-of-possession ciphersuite, producing
    /// a G2 point `sig = [s] * hash_to_g2(message)`.
    pub fn sign(&self, message: &[u8]) -> Signature {
        Signature::from_inner(self.0.sign(message, crate::consts::DST, &[]))
    }
}

fn validate_bytes(bytes: &[u8; SECRET_KEY_LENGTH]) -> core::result::Result<(), Status> {
    if bytes.iter().all(|&b| b == 0) {
        return Err(Status::ZeroSecretKey);
    }
    if compare_be(bytes, &CURVE_ORDER) != Ordering::Less {
        return Err(Status::SecretKeyLargerThanCurveOrder);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sk_bytes(last: u8) -> [u8; SECRET_KEY_LENGTH] {
        let mut b = [0u8; SECRET_KEY_LENGTH];
        b[SECRET_KEY_LENGTH - 1] = last;
        b
    }

    #[test]
    fn rejects_zero_key() {
        assert_eq!(
            SecretKey::from_bytes(&[0u8; SECRET_KEY_LENGTH]).unwrap_err(),
            Status::ZeroSecretKey
        );
    }

    #[test]
    fn rejects_key_at_curve_order() {
        assert_eq!(
            SecretKey::from_bytes(&CURVE_ORDER).unwrap_err(),
            Status::SecretKeyLargerThanCurveOrder
        );
    }

    #[test]
    fn accepts_key_one_below_curve_order() {
        let mut below = CURVE_ORDER;
        below[31] -= 1;
        assert!(SecretKey::from_bytes(&below).is_ok());
    }

    #[test]
    fn round_trips_through_bytes() {
        let sk = SecretKey::from_bytes(&sk_bytes(1)).unwrap();
        assert_eq!(sk.to_bytes(), sk_bytes(1));
    }

    #[test]
    fn derives_distinct_public_keys_for_distinct_secrets() {
        let a = SecretKey::from_bytes(&sk_bytes(1)).unwrap();
        let b = SecretKey::from_bytes(&sk_bytes(2)).unwrap();
        assert_ne!(a.derive_public_key().to_bytes(), b.derive_public_key().to_bytes());
    }
}
