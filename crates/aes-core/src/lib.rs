//! AES (Rijndael) single-block cipher for 128-, 192- and 256-bit keys.
//!
//! This crate follows the FIPS-197 specification and provides:
//! - Key expansion for all three key sizes.
//! - The round transformations and their inverses over a 4x4 byte state.
//! - Single-block encryption and decryption, either through a per-key [`Aes`]
//!   context or the one-shot [`encrypt`]/[`decrypt`] functions.
//!
//! Chaining modes, padding and key derivation are left to callers. Nothing here
//! logs; failures are returned as [`AesError`].
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod api;
mod block;
mod cipher;
mod error;
mod gf;
pub mod kat;
mod key;
mod round;
mod sbox;
mod schedule;
mod state;

pub use crate::api::{decrypt, encrypt};
pub use crate::block::{block_from_slice, Block, BLOCK_SIZE};
pub use crate::cipher::{decrypt_block, encrypt_block, Aes};
pub use crate::error::{AesError, Result};
pub use crate::gf::{gmul, xtime};
pub use crate::key::{CipherKey, KeySize, MAX_KEY_LEN};
pub use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
pub use crate::sbox::{inv_sbox, sbox, INV_SBOX, SBOX};
pub use crate::schedule::{expand_key, KeySchedule, MAX_SCHEDULE_WORDS};
pub use crate::state::State;
