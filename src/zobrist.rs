//! Zobrist hashing keys.
//!
//! One random 64-bit key per (color, piece, square) occupancy term, plus keys
//! for each en-passant file, each castling right, and the side to move. The
//! keys are drawn from a fixed-seed generator so hashes are identical across
//! runs, which keeps transposition-table contents and tests deterministic.

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const KEY_SEED: u64 = 0x41F0_59E3_9C8B_A2D7;

/// The full set of Zobrist keys for position hashing.
pub struct ZobristKeys {
    /// Keyed by [color][piece][square]
    pub piece_square: [[[u64; 64]; 6]; 2],
    /// One key per castling right, in `CastlingRights` bit order (WK, WQ, BK, BQ)
    pub castling: [u64; 4],
    /// One key per en-passant target file
    pub en_passant_file: [u64; 8],
    /// XORed in when Black is to move
    pub side_to_move: u64,
}

impl ZobristKeys {
    /// XOR of the keys for every right set in `mask`.
    ///
    /// Passing the XOR-difference of two rights masks yields the hash delta
    /// between them, which is how `make_move` accounts for lost rights.
    #[inline]
    #[must_use]
    pub fn castling_hash(&self, mask: u8) -> u64 {
        let mut hash = 0;
        for (bit, key) in self.castling.iter().enumerate() {
            if mask & (1 << bit) != 0 {
                hash ^= key;
            }
        }
        hash
    }
}

pub static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(|| {
    let mut rng = StdRng::seed_from_u64(KEY_SEED);

    let mut piece_square = [[[0u64; 64]; 6]; 2];
    for color in &mut piece_square {
        for piece in color.iter_mut() {
            for key in piece.iter_mut() {
                *key = rng.gen();
            }
        }
    }

    let mut castling = [0u64; 4];
    for key in &mut castling {
        *key = rng.gen();
    }

    let mut en_passant_file = [0u64; 8];
    for key in &mut en_passant_file {
        *key = rng.gen();
    }

    ZobristKeys {
        piece_square,
        castling,
        en_passant_file,
        side_to_move: rng.gen(),
    }
});
