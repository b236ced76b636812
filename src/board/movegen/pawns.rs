use super::super::attack_tables::PAWN_ATTACKS;
use super::super::{Bitboard, Board, Move, MoveList, Square, PROMOTION_PIECES};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move();
        let dir = color.pawn_direction();
        let promotion_rank = color.pawn_promotion_rank();

        if let Some(single) = from.offset(dir, 0) {
            if self.is_empty_square(single) {
                if single.rank() == promotion_rank {
                    for promo in PROMOTION_PIECES {
                        moves.push(Move::promotion(from, single, promo));
                    }
                } else {
                    moves.push(Move::quiet(from, single));

                    if from.rank() == color.pawn_start_rank() {
                        let double =
                            Square::new((from.rank() as isize + 2 * dir) as usize, from.file());
                        if self.is_empty_square(double) {
                            moves.push(Move::double_pawn_push(from, double));
                        }
                    }
                }
            }
        }

        let opponent_occ = self.occupied_by(color.opponent()).0;
        let ep_bit = self
            .en_passant_target
            .map_or(0, |sq| 1u64 << sq.index());
        let targets = Bitboard(PAWN_ATTACKS[color.index()][from.index()] & (opponent_occ | ep_bit));

        for to in targets.iter() {
            if Some(to) == self.en_passant_target {
                moves.push(Move::en_passant(from, to));
            } else if to.rank() == promotion_rank {
                for promo in PROMOTION_PIECES {
                    moves.push(Move::promotion_capture(from, to, promo));
                }
            } else {
                moves.push(Move::capture(from, to));
            }
        }
    }
}
