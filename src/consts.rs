//! Ciphersuite constants for `BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_`.

/// Domain separation tag for the proof-of-possession ciphersuite (pubkeys in
/// G1, signatures in G2) used throughout Ethereum's consensus layer.
pub const DST: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_";

/// BLS12-381 base field modulus `p`, big-endian, 48 bytes.
pub const FIELD_MODULUS: [u8; 48] = [
    0x1a, 0x01, 0x11, 0xea, 0x39, 0x7f, 0xe6, 0x9a, 0x4b, 0x1b, 0xa7, 0xb6, 0x43, 0x4b, 0xac, 0xd7,
    0x64, 0x77, 0x4b, 0x84, 0xf3, 0x85, 0x12, 0xbf, 0x67, 0x30, 0xd2, 0xa0, 0xf6, 0xb0, 0xf6, 0x24,
    0x1e, 0xab, 0xff, 0xfe, 0xb1, 0x53, 0xff, 0xff, 0xb9, 0xfe, 0xff, 0xff, 0xff, 0xff, 0xaa, 0xab,
];

/// BLS12-381 scalar field (curve) order `r`, big-endian, 32 bytes.
pub const CURVE_ORDER: [u8; 32] = [
    0x73, 0xed, 0xa7, 0x53, 0x29, 0x9d, 0x7d, 0x48, 0x33, 0x39, 0xd8, 0x08, 0x09, 0xa1, 0xd8, 0x05,
    0x53, 0xbd, 0xa4, 0x02, 0xff, 0xfe, 0x5b, 0xfe, 0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x01,
];

/// Byte length of a serialized secret key.
pub const SECRET_KEY_LENGTH: usize = 32;

/// Byte length of a compressed G1 point (public key).
pub const PUBLIC_KEY_LENGTH: usize = 48;

/// Byte length of a compressed G2 point (signature).
pub const SIGNATURE_LENGTH: usize = 96;

/// Compares a big-endian byte array to another of the same width.
///
/// Returns `Less`, `Equal`, or `Greater` as in [`core::cmp::Ordering`].
pub(crate) fn compare_be<const N: usize>(a: &[u8; N], b: &[u8; N]) -> core::cmp::Ordering {
    for i in 0..N {
        match a[i].cmp(&b[i]) {
            core::cmp::Ordering::Equal => continue,
            other => return other,
        }
    }
    core::cmp::Ordering::Equal
}
