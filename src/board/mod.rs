//! Board representation and move generation.

mod attack_tables;
mod error;
mod fen;
mod make_unmake;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use attack_tables::warm_up;
pub use error::{FenError, MoveParseError, PositionError, SquareError};
pub use state::{Board, UnmakeInfo};
pub use types::{Bitboard, CastlingRights, Color, Move, MoveList, Piece, Square};

pub(crate) use types::{bit_for_square, file_to_index, rank_to_index, PROMOTION_PIECES};
