//! The 4x4 byte cipher state.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::Block;

/// Cipher state held as four columns of four bytes. Wiped on drop.
///
/// Byte `n` of a block lands in row `n % 4` of column `n / 4`.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct State {
    columns: [[u8; 4]; 4],
}

impl State {
    /// Loads a block column by column.
    pub fn from_block(block: &Block) -> Self {
        let mut columns = [[0u8; 4]; 4];
        for (column, chunk) in columns.iter_mut().zip(block.chunks_exact(4)) {
            column.copy_from_slice(chunk);
        }
        Self { columns }
    }

    /// Stores the state back into a block, column by column.
    pub fn to_block(&self) -> Block {
        let mut block = [0u8; 16];
        for (chunk, column) in block.chunks_exact_mut(4).zip(self.columns.iter()) {
            chunk.copy_from_slice(column);
        }
        block
    }

    /// Byte at (`row`, `col`).
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.columns[col][row]
    }

    /// Copy of row `row`, left to right.
    pub fn row(&self, row: usize) -> [u8; 4] {
        [
            self.columns[0][row],
            self.columns[1][row],
            self.columns[2][row],
            self.columns[3][row],
        ]
    }

    /// Overwrites row `row`.
    pub fn set_row(&mut self, row: usize, values: [u8; 4]) {
        for (column, value) in self.columns.iter_mut().zip(values) {
            column[row] = value;
        }
    }

    pub(crate) fn columns_mut(&mut self) -> &mut [[u8; 4]; 4] {
        &mut self.columns
    }

    pub(crate) fn bytes_mut(&mut self) -> impl Iterator<Item = &mut u8> {
        self.columns.iter_mut().flatten()
    }
}
