//! Precomputed attack tables.
//!
//! Leaper attacks (knight, king, pawn) are plain 64-entry tables; slider
//! attacks go through the magic bitboard tables in [`magics`]. Everything here
//! is built once on first use and immutable afterwards.

mod magics;
mod tables;

pub(crate) use tables::{KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS};

use magics::{BISHOP_MAGICS, ROOK_MAGICS};

/// Attack set for a slider on `from_idx` given the full board occupancy.
#[inline]
pub(crate) fn slider_attacks(from_idx: usize, occupancy: u64, bishop: bool) -> u64 {
    if bishop {
        BISHOP_MAGICS[from_idx].lookup(occupancy)
    } else {
        ROOK_MAGICS[from_idx].lookup(occupancy)
    }
}

/// Force table construction; useful to pay the one-time cost up front
/// instead of inside the first move-generation call.
pub fn warm_up() {
    once_cell::sync::Lazy::force(&ROOK_MAGICS);
    once_cell::sync::Lazy::force(&BISHOP_MAGICS);
    once_cell::sync::Lazy::force(&KNIGHT_ATTACKS);
    once_cell::sync::Lazy::force(&KING_ATTACKS);
    once_cell::sync::Lazy::force(&PAWN_ATTACKS);
}
