use super::super::attack_tables::KNIGHT_ATTACKS;
use super::super::{Bitboard, Board, Move, MoveList, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, moves: &mut MoveList) {
        let own_occ = self.occupied_by(self.side_to_move()).0;
        let targets = Bitboard(KNIGHT_ATTACKS[from.index()] & !own_occ);

        for to in targets.iter() {
            if self.is_empty_square(to) {
                moves.push(Move::quiet(from, to));
            } else {
                moves.push(Move::capture(from, to));
            }
        }
    }
}
