//! Applying and reverting moves.
//!
//! `make_move` updates the bitboards, side to move, castling rights,
//! en-passant target, clocks, and Zobrist hash in O(1) bit operations and
//! returns the delta needed for `unmake_move` to restore the prior state
//! exactly. Callers must only pass moves produced by `generate_moves` for the
//! current position; anything else leaves the board undefined.

use crate::zobrist::ZOBRIST;

use super::{Board, Color, Move, Piece, Square, UnmakeInfo};

impl Board {
    /// Recompute the Zobrist hash of the current position from scratch.
    ///
    /// `make_move` maintains the hash incrementally; this is the reference
    /// definition the incremental updates must agree with.
    #[must_use]
    pub fn calculate_hash(&self) -> u64 {
        let mut hash: u64 = 0;

        for color in Color::BOTH {
            for piece in Piece::ALL {
                for sq in self.pieces[color.index()][piece.index()].iter() {
                    hash ^= ZOBRIST.piece_square[color.index()][piece.index()][sq.index()];
                }
            }
        }

        if !self.white_to_move {
            hash ^= ZOBRIST.side_to_move;
        }

        hash ^= ZOBRIST.castling_hash(self.castling_rights.as_u8());

        if let Some(ep_square) = self.en_passant_target {
            hash ^= ZOBRIST.en_passant_file[ep_square.file()];
        }

        hash
    }

    /// Apply a legal move, returning the delta for `unmake_move`.
    pub fn make_move(&mut self, m: Move) -> UnmakeInfo {
        let color = self.side_to_move();
        let c_idx = color.index();
        let from = m.from();
        let to = m.to();

        let info = UnmakeInfo {
            captured_piece_info: None,
            previous_en_passant_target: self.en_passant_target,
            previous_castling_rights: self.castling_rights,
            previous_hash: self.hash,
            previous_halfmove_clock: self.halfmove_clock,
            previous_fullmove_number: self.fullmove_number,
        };

        let mut hash = self.hash;
        hash ^= ZOBRIST.side_to_move;

        if let Some(old_ep) = self.en_passant_target {
            hash ^= ZOBRIST.en_passant_file[old_ep.file()];
        }

        let mut captured_piece_info: Option<(Color, Piece)> = None;

        if m.is_en_passant() {
            // The captured pawn sits one rank behind the target square
            let capture_rank = (to.rank() as isize - color.pawn_direction()) as usize;
            let capture_sq = Square::new(capture_rank, to.file());
            captured_piece_info = self.piece_at(capture_sq);
            if let Some((cap_color, cap_piece)) = captured_piece_info {
                self.remove_piece(capture_sq, cap_color, cap_piece);
                hash ^= ZOBRIST.piece_square[cap_color.index()][cap_piece.index()]
                    [capture_sq.index()];
            }
        } else if !m.is_castling() {
            captured_piece_info = self.piece_at(to);
            if let Some((cap_color, cap_piece)) = captured_piece_info {
                self.remove_piece(to, cap_color, cap_piece);
                hash ^= ZOBRIST.piece_square[cap_color.index()][cap_piece.index()][to.index()];
            }
        }

        let (_, moving_piece) = self.piece_at(from).expect("make_move: source square empty");

        self.remove_piece(from, color, moving_piece);
        hash ^= ZOBRIST.piece_square[c_idx][moving_piece.index()][from.index()];

        if m.is_castling() {
            self.set_piece(to, color, Piece::King);
            hash ^= ZOBRIST.piece_square[c_idx][Piece::King.index()][to.index()];

            let (rook_from_file, rook_to_file) = if m.is_castle_kingside() { (7, 5) } else { (0, 3) };
            let rook_from = Square::new(to.rank(), rook_from_file);
            let rook_to = Square::new(to.rank(), rook_to_file);
            self.remove_piece(rook_from, color, Piece::Rook);
            self.set_piece(rook_to, color, Piece::Rook);
            hash ^= ZOBRIST.piece_square[c_idx][Piece::Rook.index()][rook_from.index()];
            hash ^= ZOBRIST.piece_square[c_idx][Piece::Rook.index()][rook_to.index()];
        } else {
            let placed_piece = m.promotion_piece().unwrap_or(moving_piece);
            self.set_piece(to, color, placed_piece);
            hash ^= ZOBRIST.piece_square[c_idx][placed_piece.index()][to.index()];
        }

        self.en_passant_target = None;
        if m.is_double_pawn_push() {
            let ep_sq = Square::new(usize::midpoint(from.rank(), to.rank()), from.file());
            self.en_passant_target = Some(ep_sq);
            hash ^= ZOBRIST.en_passant_file[ep_sq.file()];
        }

        if moving_piece == Piece::Pawn || captured_piece_info.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        if moving_piece == Piece::King {
            self.castling_rights.remove(color, true);
            self.castling_rights.remove(color, false);
        } else if moving_piece == Piece::Rook {
            let back_rank = color.back_rank();
            if from == Square::new(back_rank, 0) {
                self.castling_rights.remove(color, false);
            } else if from == Square::new(back_rank, 7) {
                self.castling_rights.remove(color, true);
            }
        }

        // A capture on a rook home square drops that right whether or not the
        // rook was still there (the rule is positional)
        if m.is_capture() && !m.is_en_passant() {
            for victim in Color::BOTH {
                let back_rank = victim.back_rank();
                if to == Square::new(back_rank, 0) {
                    self.castling_rights.remove(victim, false);
                } else if to == Square::new(back_rank, 7) {
                    self.castling_rights.remove(victim, true);
                }
            }
        }

        hash ^= ZOBRIST
            .castling_hash(info.previous_castling_rights.as_u8() ^ self.castling_rights.as_u8());

        self.white_to_move = !self.white_to_move;
        self.hash = hash;

        UnmakeInfo {
            captured_piece_info,
            ..info
        }
    }

    /// Revert a move previously applied with `make_move`.
    pub fn unmake_move(&mut self, m: Move, info: UnmakeInfo) {
        self.white_to_move = !self.white_to_move;
        self.en_passant_target = info.previous_en_passant_target;
        self.castling_rights = info.previous_castling_rights;
        self.hash = info.previous_hash;
        self.halfmove_clock = info.previous_halfmove_clock;
        self.fullmove_number = info.previous_fullmove_number;

        let color = self.side_to_move();
        let from = m.from();
        let to = m.to();

        if m.is_castling() {
            self.remove_piece(to, color, Piece::King);
            self.set_piece(from, color, Piece::King);

            let (rook_from_file, rook_to_file) = if m.is_castle_kingside() { (7, 5) } else { (0, 3) };
            self.remove_piece(Square::new(to.rank(), rook_to_file), color, Piece::Rook);
            self.set_piece(Square::new(to.rank(), rook_from_file), color, Piece::Rook);
            return;
        }

        let (_, piece_at_to) = self
            .piece_at(to)
            .expect("unmake_move: target square empty");
        self.remove_piece(to, color, piece_at_to);

        let restored_piece = if m.is_promotion() {
            Piece::Pawn
        } else {
            piece_at_to
        };
        self.set_piece(from, color, restored_piece);

        if m.is_en_passant() {
            let capture_rank = (to.rank() as isize - color.pawn_direction()) as usize;
            if let Some((cap_color, cap_piece)) = info.captured_piece_info {
                self.set_piece(Square::new(capture_rank, to.file()), cap_color, cap_piece);
            }
        } else if let Some((cap_color, cap_piece)) = info.captured_piece_info {
            self.set_piece(to, cap_color, cap_piece);
        }
    }
}
