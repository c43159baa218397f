//! Slice-based entry points taking the key size in bits.

use crate::block::{block_from_slice, Block};
use crate::cipher::{decrypt_block, encrypt_block};
use crate::error::Result;
use crate::key::{CipherKey, KeySize};
use crate::schedule::expand_key;

/// Encrypts `block` under `key`, expanding the key schedule for this call only.
///
/// `key_size_bits` must be 128, 192 or 256 and is checked before the buffers; `key`
/// must then be exactly `key_size_bits / 8` bytes and `block` exactly 16 bytes.
///
/// # Errors
///
/// [`AesError::InvalidKeySize`](crate::AesError::InvalidKeySize) for any other key
/// size, and the length variants for mis-sized buffers. No output is produced on error.
pub fn encrypt(key: &[u8], key_size_bits: u32, block: &[u8]) -> Result<Block> {
    let (key, block) = prepare(key, key_size_bits, block)?;
    Ok(encrypt_block(&block, &expand_key(&key)))
}

/// Decrypts `block` under `key`; same contract as [`encrypt`].
///
/// # Errors
///
/// See [`encrypt`].
pub fn decrypt(key: &[u8], key_size_bits: u32, block: &[u8]) -> Result<Block> {
    let (key, block) = prepare(key, key_size_bits, block)?;
    Ok(decrypt_block(&block, &expand_key(&key)))
}

fn prepare(key: &[u8], key_size_bits: u32, block: &[u8]) -> Result<(CipherKey, Block)> {
    let size = KeySize::from_bits(key_size_bits)?;
    let key = CipherKey::new(key, size)?;
    let block = block_from_slice(block)?;
    Ok((key, block))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AesError;

    #[test]
    fn key_size_checked_before_lengths() {
        assert_eq!(
            encrypt(&[0u8; 3], 100, &[0u8; 5]),
            Err(AesError::InvalidKeySize(100))
        );
        assert_eq!(
            decrypt(&[0u8; 3], 100, &[0u8; 5]),
            Err(AesError::InvalidKeySize(100))
        );
    }

    #[test]
    fn key_length_checked_before_block_length() {
        assert_eq!(
            encrypt(&[0u8; 16], 256, &[0u8; 5]),
            Err(AesError::InvalidKeyLength {
                expected: 32,
                actual: 16
            })
        );
        assert_eq!(
            decrypt(&[0u8; 32], 256, &[0u8; 5]),
            Err(AesError::InvalidBlockLength(5))
        );
    }

    #[test]
    fn round_trip_through_slices() {
        let key = [0x42u8; 24];
        let block = *b"sixteen byte blk";
        let ct = encrypt(&key, 192, &block).unwrap();
        assert_ne!(ct, block);
        assert_eq!(decrypt(&key, 192, &ct).unwrap(), block);
    }
}
