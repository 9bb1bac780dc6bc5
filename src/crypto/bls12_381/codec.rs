//! Compressed Zcash-style point codec shared by G1 ([`PublicKey`](super::PublicKey))
//! and G2 ([`Signature`](super::Signature)).
//!
//! Byte 0 of a compressed point carries three metadata bits: `C` (compressed,
//! always set here), `I` (point at infinity), and `S` (sign of `y`). The
//! remaining bits hold the `x` coordinate, big-endian, padded on the left by
//! the metadata bits.
//!
//! [`blst`] already implements this exact convention, but folds
//! "coordinate >= field modulus" and "malformed metadata bits" into a single
//! `BLST_BAD_ENCODING`. To recover the finer-grained [`Status`] this crate's
//! callers expect, the metadata bits and the field-modulus comparison are
//! checked here, against the raw bytes, before blst ever sees them.

use crate::consts::{compare_be, FIELD_MODULUS};
use crate::error::Status;

const COMPRESSED_FLAG: u8 = 0b1000_0000;
const INFINITY_FLAG: u8 = 0b0100_0000;
const SIGN_FLAG: u8 = 0b0010_0000;
const METADATA_MASK: u8 = 0b0001_1111;

/// Byte 0 of the canonical point-at-infinity encoding (`C=1, I=1, S=0`),
/// every other byte zero. Used to build the identity element locally rather
/// than through an aggregation call, which blst errors on for empty input.
pub(crate) const INFINITY_ENCODING_BYTE0: u8 = COMPRESSED_FLAG | INFINITY_FLAG;

/// A curve point's compressed representation, described purely in terms of
/// how many 48-byte field-element chunks make up its `x` coordinate.
///
/// G1 points (`PublicKey`) have one chunk (`x ∈ Fp`). G2 points
/// (`Signature`) have two, packed as `x.c1 ‖ x.c0` (`x ∈ Fp2`).
pub(crate) trait CompressedPoint: Sized {
    /// Total encoded width in bytes (48 for G1, 96 for G2).
    const WIDTH: usize;

    /// Number of 48-byte field-element chunks `x` is split into (1 or 2).
    const CHUNKS: usize = Self::WIDTH / 48;
}

pub(crate) struct G1;
impl CompressedPoint for G1 {
    const WIDTH: usize = 48;
}

pub(crate) struct G2;
impl CompressedPoint for G2 {
    const WIDTH: usize = 96;
}

/// Result of the metadata/canonicity pre-check, before any curve arithmetic.
pub(crate) enum PreCheck {
    /// Encodes the point at infinity; the caller should treat this as the
    /// neutral element and surface [`Status::PointAtInfinity`].
    Infinity,
    /// A finite point whose coordinate(s) are canonical (`< p`). The caller
    /// should proceed to curve decompression.
    Finite,
}

/// Validates the metadata bits and coordinate canonicity of a compressed
/// point encoding, without touching curve arithmetic.
///
/// `bytes.len()` must equal `P::WIDTH`; this is a precondition enforced by
/// callers, which always slice a fixed-size array.
pub(crate) fn pre_check<P: CompressedPoint>(bytes: &[u8]) -> Result<PreCheck, Status> {
    debug_assert_eq!(bytes.len(), P::WIDTH);

    if bytes[0] & COMPRESSED_FLAG == 0 {
        return Err(Status::InvalidEncoding);
    }

    let is_infinity = bytes[0] & INFINITY_FLAG != 0;

    if is_infinity {
        let first_byte_clean = bytes[0] & !COMPRESSED_FLAG == 0;
        let rest_zero = bytes[1..].iter().all(|&b| b == 0);
        if !first_byte_clean || !rest_zero {
            return Err(Status::InvalidEncoding);
        }
        return Ok(PreCheck::Infinity);
    }

    // Mask the metadata bits out of byte 0, then compare each 48-byte
    // coordinate chunk against the field modulus.
    let mut masked = [0u8; 96];
    masked[..P::WIDTH].copy_from_slice(bytes);
    masked[0] &= METADATA_MASK;

    for chunk in masked[..P::WIDTH].chunks_exact(48) {
        let mut limb = [0u8; 48];
        limb.copy_from_slice(chunk);
        if compare_be(&limb, &FIELD_MODULUS) != core::cmp::Ordering::Less {
            return Err(Status::CoordinateGreaterOrEqualThanModulus);
        }
    }

    Ok(PreCheck::Finite)
}
