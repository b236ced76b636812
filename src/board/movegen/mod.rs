//! Legal move generation.
//!
//! Two phases: per-piece pseudo-legal enumeration (piece-movement rules
//! only), then a legality filter that applies each candidate and discards it
//! if the mover's own king ends up attacked. Castling additionally requires
//! the king's start, transit, and destination squares to be safe. The order
//! of moves in the returned list carries no meaning.

mod kings;
mod knights;
mod pawns;
mod sliders;

use self::sliders::SliderType;
use super::{Board, MoveList, Piece, Square};

impl Board {
    fn generate_pseudo_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let c_idx = self.side_to_move().index();

        for from in self.pieces[c_idx][Piece::Pawn.index()].iter() {
            self.generate_pawn_moves(from, &mut moves);
        }
        for from in self.pieces[c_idx][Piece::Knight.index()].iter() {
            self.generate_knight_moves(from, &mut moves);
        }
        for from in self.pieces[c_idx][Piece::Bishop.index()].iter() {
            self.generate_slider_moves(from, SliderType::Bishop, &mut moves);
        }
        for from in self.pieces[c_idx][Piece::Rook.index()].iter() {
            self.generate_slider_moves(from, SliderType::Rook, &mut moves);
        }
        for from in self.pieces[c_idx][Piece::Queen.index()].iter() {
            self.generate_slider_moves(from, SliderType::Queen, &mut moves);
        }
        for from in self.pieces[c_idx][Piece::King.index()].iter() {
            self.generate_king_moves(from, &mut moves);
        }

        moves
    }

    /// All legal moves for the side to move.
    ///
    /// Stalemate and checkmate both surface as an empty list; combine with
    /// `is_in_check` to tell them apart.
    #[must_use]
    pub fn generate_moves(&mut self) -> MoveList {
        let current_color = self.side_to_move();
        let opponent_color = current_color.opponent();
        let pseudo_moves = self.generate_pseudo_moves();
        let mut legal_moves = MoveList::new();

        for m in &pseudo_moves {
            if m.is_castling() {
                let from = m.from();
                let to = m.to();
                let king_mid_sq = Square::new(from.rank(), usize::midpoint(from.file(), to.file()));

                if self.is_square_attacked(from, opponent_color)
                    || self.is_square_attacked(king_mid_sq, opponent_color)
                    || self.is_square_attacked(to, opponent_color)
                {
                    continue;
                }
            }

            let info = self.make_move(*m);
            if !self.is_in_check(current_color) {
                legal_moves.push(*m);
            }
            self.unmake_move(*m, info);
        }

        legal_moves
    }

    /// Returns true if the side to move is in check with no legal moves.
    #[must_use]
    pub fn is_checkmate(&mut self) -> bool {
        self.is_in_check(self.side_to_move()) && self.generate_moves().is_empty()
    }

    /// Returns true if the side to move has no legal moves but is not in check.
    #[must_use]
    pub fn is_stalemate(&mut self) -> bool {
        !self.is_in_check(self.side_to_move()) && self.generate_moves().is_empty()
    }

    /// Exhaustive node count to `depth`; the standard move generator oracle.
    #[must_use]
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in &moves {
            let info = self.make_move(*m);
            nodes += self.perft(depth - 1);
            self.unmake_move(*m, info);
        }

        nodes
    }
}
