//! Key sizes and cipher keys for AES-128/192/256.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{AesError, Result};

/// Longest supported key in bytes (AES-256).
pub const MAX_KEY_LEN: usize = 32;

/// One of the three standard AES key sizes.
///
/// `Nk` and `Nr` are derived from the variant, never chosen on their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 128-bit key, 10 rounds.
    Aes128,
    /// 192-bit key, 12 rounds.
    Aes192,
    /// 256-bit key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// All supported key sizes, smallest first.
    pub const ALL: [KeySize; 3] = [KeySize::Aes128, KeySize::Aes192, KeySize::Aes256];

    /// Maps a key size in bits to a variant.
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            128 => Ok(KeySize::Aes128),
            192 => Ok(KeySize::Aes192),
            256 => Ok(KeySize::Aes256),
            other => Err(AesError::InvalidKeySize(other)),
        }
    }

    /// Key size in bits.
    pub const fn bits(self) -> u32 {
        match self {
            KeySize::Aes128 => 128,
            KeySize::Aes192 => 192,
            KeySize::Aes256 => 256,
        }
    }

    /// Key length in 32-bit words (`Nk`).
    pub const fn nk(self) -> usize {
        self.bits() as usize / 32
    }

    /// Number of rounds (`Nr`).
    pub const fn nr(self) -> usize {
        self.nk() + 6
    }

    /// Key length in bytes.
    pub const fn key_len(self) -> usize {
        self.nk() * 4
    }

    /// Number of words in the expanded key schedule.
    pub const fn schedule_words(self) -> usize {
        4 * (self.nr() + 1)
    }
}

impl TryFrom<u32> for KeySize {
    type Error = AesError;

    fn try_from(bits: u32) -> Result<Self> {
        Self::from_bits(bits)
    }
}

impl fmt::Display for KeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AES-{}", self.bits())
    }
}

/// Cipher key bytes tagged with their key size. Wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct CipherKey {
    bytes: [u8; MAX_KEY_LEN],
    #[zeroize(skip)]
    size: KeySize,
}

impl CipherKey {
    /// Copies `bytes` into a key of the given size.
    ///
    /// The buffer must hold exactly `size.key_len()` bytes.
    pub fn new(bytes: &[u8], size: KeySize) -> Result<Self> {
        if bytes.len() != size.key_len() {
            return Err(AesError::InvalidKeyLength {
                expected: size.key_len(),
                actual: bytes.len(),
            });
        }
        let mut key = Self {
            bytes: [0u8; MAX_KEY_LEN],
            size,
        };
        key.bytes[..bytes.len()].copy_from_slice(bytes);
        Ok(key)
    }

    /// Key size of this key.
    pub fn size(&self) -> KeySize {
        self.size
    }

    /// Raw key bytes (`Nk * 4` of them).
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.size.key_len()]
    }
}

impl fmt::Debug for CipherKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherKey")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

macro_rules! impl_key_from_array {
    ($len:literal, $size:expr) => {
        impl From<[u8; $len]> for CipherKey {
            fn from(value: [u8; $len]) -> Self {
                let mut bytes = [0u8; MAX_KEY_LEN];
                bytes[..$len].copy_from_slice(&value);
                Self { bytes, size: $size }
            }
        }
    };
}

impl_key_from_array!(16, KeySize::Aes128);
impl_key_from_array!(24, KeySize::Aes192);
impl_key_from_array!(32, KeySize::Aes256);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameters_follow_key_size() {
        let params: Vec<_> = KeySize::ALL
            .iter()
            .map(|s| (s.bits(), s.nk(), s.nr(), s.key_len(), s.schedule_words()))
            .collect();
        assert_eq!(
            params,
            vec![
                (128, 4, 10, 16, 44),
                (192, 6, 12, 24, 52),
                (256, 8, 14, 32, 60),
            ]
        );
    }

    #[test]
    fn from_bits_rejects_unknown_sizes() {
        for bits in [0, 64, 100, 127, 129, 255, 512] {
            assert_eq!(KeySize::from_bits(bits), Err(AesError::InvalidKeySize(bits)));
        }
        assert_eq!(KeySize::try_from(192), Ok(KeySize::Aes192));
    }

    #[test]
    fn display_names_the_variant() {
        assert_eq!(KeySize::Aes256.to_string(), "AES-256");
    }

    #[test]
    fn new_checks_length_against_size() {
        let err = CipherKey::new(&[0u8; 16], KeySize::Aes256).unwrap_err();
        assert_eq!(
            err,
            AesError::InvalidKeyLength {
                expected: 32,
                actual: 16
            }
        );
        let key = CipherKey::new(&[7u8; 24], KeySize::Aes192).unwrap();
        assert_eq!(key.as_bytes(), &[7u8; 24]);
    }

    #[test]
    fn from_array_picks_size() {
        assert_eq!(CipherKey::from([0u8; 16]).size(), KeySize::Aes128);
        assert_eq!(CipherKey::from([0u8; 24]).size(), KeySize::Aes192);
        assert_eq!(CipherKey::from([1u8; 32]).as_bytes(), &[1u8; 32]);
    }

    #[test]
    fn debug_does_not_print_key_material() {
        let key = CipherKey::from([0xabu8; 16]);
        let rendered = format!("{key:?}");
        assert!(!rendered.contains("171"));
        assert!(rendered.contains("Aes128"));
    }
}
