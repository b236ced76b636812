use super::super::attack_tables::slider_attacks;
use super::super::{Bitboard, Board, Move, MoveList, Square};

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl Board {
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        slider: SliderType,
        moves: &mut MoveList,
    ) {
        let own_occ = self.occupied_by(self.side_to_move()).0;
        let from_idx = from.index();
        let occ = self.all_occupied.0;

        let targets_raw = match slider {
            SliderType::Bishop => slider_attacks(from_idx, occ, true),
            SliderType::Rook => slider_attacks(from_idx, occ, false),
            SliderType::Queen => {
                slider_attacks(from_idx, occ, false) | slider_attacks(from_idx, occ, true)
            }
        } & !own_occ;

        for to in Bitboard(targets_raw).iter() {
            if self.is_empty_square(to) {
                moves.push(Move::quiet(from, to));
            } else {
                moves.push(Move::capture(from, to));
            }
        }
    }
}
