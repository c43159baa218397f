//! Key expansion (FIPS-197 section 5.2).

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::key::{CipherKey, KeySize};
use crate::sbox::sbox;

/// Words in the longest schedule (AES-256: 4 * 15).
pub const MAX_SCHEDULE_WORDS: usize = 60;

/// Round constants: successive powers of {02}, indexed from round 1.
pub(crate) const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// Expanded round-key words for one cipher key. Wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeySchedule {
    words: [u32; MAX_SCHEDULE_WORDS],
    #[zeroize(skip)]
    size: KeySize,
}

impl KeySchedule {
    /// Key size the schedule was expanded for.
    pub fn key_size(&self) -> KeySize {
        self.size
    }

    /// Number of rounds (`Nr`).
    pub fn rounds(&self) -> usize {
        self.size.nr()
    }

    /// All `4 * (Nr + 1)` words, big-endian packed.
    pub fn words(&self) -> &[u32] {
        &self.words[..self.size.schedule_words()]
    }

    /// The four words XORed into the state at `round` (`0..=Nr`).
    #[inline]
    pub fn round_key(&self, round: usize) -> &[u32] {
        debug_assert!(round <= self.rounds());
        &self.words[round * 4..round * 4 + 4]
    }
}

impl fmt::Debug for KeySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySchedule")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

/// Expands `key` into its full round-key schedule.
pub fn expand_key(key: &CipherKey) -> KeySchedule {
    let size = key.size();
    let nk = size.nk();
    let mut words = [0u32; MAX_SCHEDULE_WORDS];

    for (word, chunk) in words.iter_mut().zip(key.as_bytes().chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in nk..size.schedule_words() {
        let mut temp = words[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[i / nk - 1]) << 24);
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        words[i] = words[i - nk] ^ temp;
    }

    KeySchedule { words, size }
}
