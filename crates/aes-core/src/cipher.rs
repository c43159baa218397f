//! Block encryption/decryption driven by an expanded key schedule.

use crate::block::Block;
use crate::error::Result;
use crate::key::{CipherKey, KeySize};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::schedule::{expand_key, KeySchedule};
use crate::state::State;

/// Encrypts a single 16-byte block with a pre-expanded schedule.
pub fn encrypt_block(block: &Block, schedule: &KeySchedule) -> Block {
    let rounds = schedule.rounds();
    let mut state = State::from_block(block);

    add_round_key(&mut state, schedule.round_key(0));

    for round in 1..rounds {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, schedule.round_key(round));
    }

    // No MixColumns in the last round.
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, schedule.round_key(rounds));

    state.to_block()
}

/// Decrypts a single 16-byte block with a pre-expanded schedule.
pub fn decrypt_block(block: &Block, schedule: &KeySchedule) -> Block {
    let rounds = schedule.rounds();
    let mut state = State::from_block(block);

    add_round_key(&mut state, schedule.round_key(rounds));
    for round in (1..rounds).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, schedule.round_key(round));
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, schedule.round_key(0));

    state.to_block()
}

/// AES cipher bound to one key.
///
/// The schedule is expanded once in [`Aes::new`] and never mutated afterwards, so a
/// context can be shared between threads. Each call works on its own [`State`].
#[derive(Clone, Debug)]
pub struct Aes {
    schedule: KeySchedule,
}

impl Aes {
    /// Expands `key` into a ready-to-use cipher.
    pub fn new(key: &CipherKey) -> Self {
        Self {
            schedule: expand_key(key),
        }
    }

    /// Builds a cipher from raw key bytes, checking their length against `size`.
    pub fn from_slice(key: &[u8], size: KeySize) -> Result<Self> {
        Ok(Self::new(&CipherKey::new(key, size)?))
    }

    /// Key size of the underlying key.
    pub fn key_size(&self) -> KeySize {
        self.schedule.key_size()
    }

    /// Expanded schedule backing this cipher.
    pub fn schedule(&self) -> &KeySchedule {
        &self.schedule
    }

    /// Encrypts one block.
    pub fn encrypt_block(&self, block: &Block) -> Block {
        encrypt_block(block, &self.schedule)
    }

    /// Decrypts one block.
    pub fn decrypt_block(&self, block: &Block) -> Block {
        decrypt_block(block, &self.schedule)
    }
}
