//! Status codes for BLS12-381 operations.
//!
//! All fallible operations return a [`Status`]. The [`Result`] type alias
//! provides convenient error handling with the `?` operator.

use thiserror::Error;

/// Result type alias using [`Status`] as the error type.
pub type Result<T> = core::result::Result<T, Status>;

/// Outcome of a BLS12-381 operation.
///
/// `Success` and `VerificationFailure` are the only two variants that can
/// result from a well-formed cryptographic check; every other variant
/// pinpoints a specific failure in input shape or validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Status {
    /// The operation completed and the cryptographic check passed.
    #[error("success")]
    Success,

    /// A well-formed signature failed to verify.
    #[error("signature verification failed")]
    VerificationFailure,

    /// Bytes do not form a valid compressed point encoding.
    #[error("invalid point encoding")]
    InvalidEncoding,

    /// A coordinate decoded to a value greater than or equal to the field modulus.
    #[error("coordinate is greater than or equal to the field modulus")]
    CoordinateGreaterOrEqualThanModulus,

    /// The point encodes the curve's point at infinity (the neutral element).
    #[error("point at infinity")]
    PointAtInfinity,

    /// The point does not satisfy the curve equation.
    #[error("point is not on the curve")]
    PointNotOnCurve,

    /// The point is on the curve but not in the prime-order subgroup.
    #[error("point is not in the prime-order subgroup")]
    PointNotInSubgroup,

    /// A secret key of all-zero bytes was rejected.
    #[error("secret key is zero")]
    ZeroSecretKey,

    /// A secret key greater than or equal to the curve order was rejected.
    #[error("secret key is larger than or equal to the curve order")]
    SecretKeyLargerThanCurveOrder,

    /// An aggregation operation received an empty input list.
    #[error("cannot aggregate an empty list")]
    ZeroLengthAggregation,

    /// Parallel input slices (e.g. public keys and messages) had different lengths.
    #[error("inconsistent input lengths")]
    InconsistentLengthsOfInputs,
}

impl Status {
    /// Returns `true` for [`Status::Success`].
    #[inline]
    pub const fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }
}
