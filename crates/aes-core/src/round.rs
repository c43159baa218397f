//! AES round transformations over a [`State`].

use crate::gf::{gmul, xtime};
use crate::sbox::{inv_sbox, sbox};
use crate::state::State;

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for byte in state.bytes_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut State) {
    for byte in state.bytes_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Rotates row `r` left by `r` positions.
#[inline]
pub fn shift_rows(state: &mut State) {
    for r in 1..4 {
        let mut row = state.row(r);
        row.rotate_left(r);
        state.set_row(r, row);
    }
}

/// Rotates row `r` right by `r` positions.
#[inline]
pub fn inv_shift_rows(state: &mut State) {
    for r in 1..4 {
        let mut row = state.row(r);
        row.rotate_right(r);
        state.set_row(r, row);
    }
}

// Rows of the MDS matrix are 02 03 01 01 rotated; 03·a is xtime(a) ^ a.
fn mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    col[0] = xtime(a0) ^ (xtime(a1) ^ a1) ^ a2 ^ a3;
    col[1] = a0 ^ xtime(a1) ^ (xtime(a2) ^ a2) ^ a3;
    col[2] = a0 ^ a1 ^ xtime(a2) ^ (xtime(a3) ^ a3);
    col[3] = (xtime(a0) ^ a0) ^ a1 ^ a2 ^ xtime(a3);
}

const INV_MDS_ROW: [u8; 4] = [0x0e, 0x0b, 0x0d, 0x09];

fn inv_mix_single_column(col: &mut [u8; 4]) {
    let input = *col;
    for (row, out) in col.iter_mut().enumerate() {
        *out = input
            .iter()
            .enumerate()
            .fold(0u8, |acc, (i, &a)| acc ^ gmul(a, INV_MDS_ROW[(4 + i - row) % 4]));
    }
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut State) {
    for column in state.columns_mut() {
        mix_single_column(column);
    }
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    for column in state.columns_mut() {
        inv_mix_single_column(column);
    }
}

/// XORs a four-word round key into the state, one word per column.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &[u32]) {
    debug_assert_eq!(round_key.len(), 4);
    for (column, word) in state.columns_mut().iter_mut().zip(round_key) {
        for (byte, k) in column.iter_mut().zip(word.to_be_bytes()) {
            *byte ^= k;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Block;
    use rand::RngCore;

    fn state(hex: &str) -> State {
        let bytes = hex::decode(hex).unwrap();
        let block: Block = bytes.as_slice().try_into().unwrap();
        State::from_block(&block)
    }

    // FIPS-197 Appendix B, round 1.
    #[test]
    fn round_one_trace() {
        let mut s = state("193de3bea0f4e22b9ac68d2ae9f84808");
        sub_bytes(&mut s);
        assert_eq!(s, state("d42711aee0bf98f1b8b45de51e415230"));
        shift_rows(&mut s);
        assert_eq!(s, state("d4bf5d30e0b452aeb84111f11e2798e5"));
        mix_columns(&mut s);
        assert_eq!(s, state("046681e5e0cb199a48f8d37a2806264c"));
        add_round_key(&mut s, &[0xa0fafe17, 0x88542cb1, 0x23a33939, 0x2a6c7605]);
        assert_eq!(s, state("a49c7ff2689f352b6b5bea43026a5049"));
    }

    #[test]
    fn shift_rows_moves_row_r_by_r() {
        let mut s = state("000102030405060708090a0b0c0d0e0f");
        shift_rows(&mut s);
        assert_eq!(s.row(0), [0x00, 0x04, 0x08, 0x0c]);
        assert_eq!(s.row(1), [0x05, 0x09, 0x0d, 0x01]);
        assert_eq!(s.row(2), [0x0a, 0x0e, 0x02, 0x06]);
        assert_eq!(s.row(3), [0x0f, 0x03, 0x07, 0x0b]);
    }

    #[test]
    fn inverse_matrix_rows_are_rotations() {
        let mut col = [0x8e, 0x4d, 0xa1, 0xbc];
        inv_mix_single_column(&mut col);
        assert_eq!(col, [0xdb, 0x13, 0x53, 0x45]);
    }

    #[test]
    fn inverses_undo_forward_transforms() {
        let mut rng = rand::thread_rng();
        for _ in 0..64 {
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut block);
            let original = State::from_block(&block);

            let mut s = original.clone();
            shift_rows(&mut s);
            inv_shift_rows(&mut s);
            assert_eq!(s, original);

            mix_columns(&mut s);
            inv_mix_columns(&mut s);
            assert_eq!(s, original);

            sub_bytes(&mut s);
            inv_sub_bytes(&mut s);
            assert_eq!(s, original);

            let key = [0x01020304, 0xdeadbeef, 0, u32::MAX];
            add_round_key(&mut s, &key);
            add_round_key(&mut s, &key);
            assert_eq!(s, original);
        }
    }
}
