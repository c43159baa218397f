//! Block representation helpers.

use crate::error::{AesError, Result};

/// Size of an AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_SIZE];

/// Copies a caller-supplied buffer into a [`Block`], rejecting any other length.
pub fn block_from_slice(bytes: &[u8]) -> Result<Block> {
    bytes
        .try_into()
        .map_err(|_| AesError::InvalidBlockLength(bytes.len()))
}
