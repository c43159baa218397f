//! Error type shared by the whole crate.

/// Failures surfaced by the AES entry points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AesError {
    /// Key size in bits is not one of 128, 192 or 256.
    #[error("invalid key size: {0} bits (expected 128, 192 or 256)")]
    InvalidKeySize(u32),
    /// Key buffer length does not match the requested key size.
    #[error("invalid key length: need {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Length implied by the key size.
        expected: usize,
        /// Length of the buffer that was supplied.
        actual: usize,
    },
    /// Block buffer is not exactly 16 bytes.
    #[error("invalid block length: need 16 bytes, got {0}")]
    InvalidBlockLength(usize),
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AesError>;
