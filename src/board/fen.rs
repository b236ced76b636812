//! FEN parsing/printing and UCI move text.

use std::str::FromStr;

use super::error::{FenError, MoveParseError, PositionError};
use super::{file_to_index, rank_to_index, Board, Color, Move, Piece, Square};

impl Board {
    /// Parse a board position from a six-field FEN string.
    ///
    /// All six fields are required; the placement field must describe exactly
    /// 8 ranks of exactly 8 files each.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() != 6 {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        // Piece placement, rank 8 first
        let rows: Vec<&str> = parts[0].split('/').collect();
        if rows.len() != 8 {
            return Err(FenError::WrongRankCount { found: rows.len() });
        }
        for (row_idx, row) in rows.iter().enumerate() {
            let rank = 7 - row_idx;
            let mut file = 0;
            for c in row.chars() {
                if let Some(run) = c.to_digit(10) {
                    if run == 0 {
                        return Err(FenError::InvalidPiece { char: c });
                    }
                    file += run as usize;
                } else {
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::BadRankWidth {
                            rank: row_idx,
                            files: file + 1,
                        });
                    }
                    board.set_piece(Square::new(rank, file), color, piece);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::BadRankWidth {
                    rank: row_idx,
                    files: file,
                });
            }
        }

        // Active color
        match parts[1] {
            "w" => board.white_to_move = true,
            "b" => board.white_to_move = false,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        }

        // Castling availability
        for c in parts[2].chars() {
            match c {
                'K' => board.castling_rights.set(Color::White, true),
                'Q' => board.castling_rights.set(Color::White, false),
                'k' => board.castling_rights.set(Color::Black, true),
                'q' => board.castling_rights.set(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        // En passant target
        board.en_passant_target = if parts[3] == "-" {
            None
        } else {
            let sq = parts[3]
                .parse::<Square>()
                .map_err(|_| FenError::InvalidEnPassant {
                    found: parts[3].to_string(),
                })?;
            Some(sq)
        };

        board.halfmove_clock = parse_clock(parts[4])?;
        board.fullmove_number = parse_clock(parts[5])?;

        board.hash = board.calculate_hash();
        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square::new(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if self.white_to_move { "w" } else { "b" };

        let mut castling = String::new();
        if self.castling_rights.has(Color::White, true) {
            castling.push('K');
        }
        if self.castling_rights.has(Color::White, false) {
            castling.push('Q');
        }
        if self.castling_rights.has(Color::Black, true) {
            castling.push('k');
        }
        if self.castling_rights.has(Color::Black, false) {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in UCI long algebraic notation (e.g., "e2e4", "e7e8q").
    ///
    /// Returns the matching legal move if found, or an error describing why
    /// parsing failed.
    ///
    /// # Example
    /// ```
    /// use chess_core::board::Board;
    ///
    /// let mut board = Board::new();
    /// let mv = board.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&mut self, uci: &str) -> Result<Move, MoveParseError> {
        if uci.len() < 4 || uci.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: uci.len() });
        }

        let chars: Vec<char> = uci.chars().collect();

        if !('a'..='h').contains(&chars[0])
            || !('1'..='8').contains(&chars[1])
            || !('a'..='h').contains(&chars[2])
            || !('1'..='8').contains(&chars[3])
        {
            return Err(MoveParseError::InvalidSquare {
                notation: uci.to_string(),
            });
        }

        let from_sq = Square::new(rank_to_index(chars[1]), file_to_index(chars[0]));
        let to_sq = Square::new(rank_to_index(chars[3]), file_to_index(chars[2]));

        let promotion = if uci.len() == 5 {
            let piece = Piece::from_char(chars[4])
                .ok_or(MoveParseError::InvalidPromotion { char: chars[4] })?;
            if matches!(piece, Piece::Pawn | Piece::King) {
                return Err(MoveParseError::InvalidPromotion { char: chars[4] });
            }
            Some(piece)
        } else {
            None
        };

        let legal_moves = self.generate_moves();
        for legal_move in &legal_moves {
            if legal_move.from() == from_sq
                && legal_move.to() == to_sq
                && legal_move.promotion_piece() == promotion
            {
                return Ok(*legal_move);
            }
        }

        Err(MoveParseError::IllegalMove {
            notation: uci.to_string(),
        })
    }

    /// Parse a UCI move and make it on the board in one call.
    ///
    /// # Example
    /// ```
    /// use chess_core::board::Board;
    ///
    /// let mut board = Board::new();
    /// board.make_move_uci("e2e4").unwrap();
    /// board.make_move_uci("e7e5").unwrap();
    /// ```
    pub fn make_move_uci(&mut self, uci: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(uci)?;
        self.make_move(mv);
        Ok(mv)
    }

    /// Build a position the way a UCI `position` command describes one: an
    /// optional FEN (standard start when `None`) followed by a sequence of
    /// UCI moves to apply.
    pub fn from_position(fen: Option<&str>, moves: &[&str]) -> Result<Self, PositionError> {
        let mut board = match fen {
            Some(fen) => Board::try_from_fen(fen)?,
            None => Board::new(),
        };
        for uci in moves {
            board.make_move_uci(uci)?;
        }
        Ok(board)
    }
}

fn parse_clock(field: &str) -> Result<u16, FenError> {
    let value: u64 = field.parse().map_err(|_| FenError::InvalidClock {
        found: field.to_string(),
    })?;
    Ok(value.min(u64::from(u16::MAX)) as u16)
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CastlingRights;

    const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_fen_round_trip_startpos() {
        let board = Board::try_from_fen(STARTPOS).unwrap();
        assert_eq!(board.to_fen(), STARTPOS);
    }

    #[test]
    fn test_startpos_fen_equals_new() {
        let board = Board::try_from_fen(STARTPOS).unwrap();
        let fresh = Board::new();
        assert_eq!(board.to_fen(), fresh.to_fen());
        assert_eq!(board.hash(), fresh.hash());
    }

    #[test]
    fn test_fen_black_to_move_with_ep() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        let board = Board::try_from_fen(fen).unwrap();
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.en_passant_square(), Some(Square::new(2, 4)));
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn test_fen_clocks_round_trip() {
        let fen = "8/8/8/8/8/8/8/K1k5 w - - 42 87";
        let board = Board::try_from_fen(fen).unwrap();
        assert_eq!(board.halfmove_clock(), 42);
        assert_eq!(board.fullmove_number(), 87);
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn test_fen_error_missing_fields() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -");
        assert!(matches!(result, Err(FenError::WrongFieldCount { found: 5 })));
    }

    #[test]
    fn test_fen_error_wrong_rank_count() {
        let result = Board::try_from_fen("8/8/8/8/8/8/8 w - - 0 1");
        assert!(matches!(result, Err(FenError::WrongRankCount { found: 7 })));
    }

    #[test]
    fn test_fen_error_bad_rank_width() {
        let result = Board::try_from_fen("rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::BadRankWidth { rank: 1, .. })));

        let result = Board::try_from_fen("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::BadRankWidth { rank: 0, .. })));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let result =
            Board::try_from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidPiece { char: 'x' })));
    }

    #[test]
    fn test_fen_error_invalid_side_to_move() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidSideToMove { .. })));
    }

    #[test]
    fn test_fen_error_invalid_castling() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidCastling { char: 'X' })));
    }

    #[test]
    fn test_fen_error_invalid_en_passant() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1");
        assert!(matches!(result, Err(FenError::InvalidEnPassant { .. })));
    }

    #[test]
    fn test_fen_error_invalid_clock() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1");
        assert!(matches!(result, Err(FenError::InvalidClock { .. })));
    }

    #[test]
    fn test_fen_partial_castling() {
        let board =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Kq - 0 1").unwrap();
        assert!(board.castling_rights().has(Color::White, true));
        assert!(!board.castling_rights().has(Color::White, false));
        assert!(!board.castling_rights().has(Color::Black, true));
        assert!(board.castling_rights().has(Color::Black, false));
    }

    #[test]
    fn test_fen_no_castling() {
        let board =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1").unwrap();
        assert_eq!(board.castling_rights(), CastlingRights::none());
    }

    #[test]
    fn test_parse_move_e2e4() {
        let mut board = Board::new();
        let mv = board.parse_move("e2e4").unwrap();
        assert_eq!(mv.from(), Square::new(1, 4));
        assert_eq!(mv.to(), Square::new(3, 4));
        assert!(mv.is_double_pawn_push());
    }

    #[test]
    fn test_parse_move_promotion() {
        let mut board = Board::try_from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        let mv = board.parse_move("a7a8q").unwrap();
        assert_eq!(mv.promotion_piece(), Some(Piece::Queen));
    }

    #[test]
    fn test_parse_move_errors() {
        let mut board = Board::new();
        assert!(matches!(
            board.parse_move("e2"),
            Err(MoveParseError::InvalidLength { len: 2 })
        ));
        assert!(matches!(
            board.parse_move("z9z9"),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        // Pawn can't move three squares
        assert!(matches!(
            board.parse_move("e2e5"),
            Err(MoveParseError::IllegalMove { .. })
        ));
    }

    #[test]
    fn test_parse_move_error_invalid_promotion() {
        let mut board = Board::try_from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        let result = board.parse_move("a7a8p");
        assert!(matches!(
            result,
            Err(MoveParseError::InvalidPromotion { char: 'p' })
        ));
    }

    #[test]
    fn test_uci_move_round_trip() {
        let mut board = Board::new();
        for uci in ["g1f3", "e2e4", "b1c3"] {
            let mv = board.parse_move(uci).unwrap();
            assert_eq!(mv.to_string(), uci);
            let reparsed = board.parse_move(&mv.to_string()).unwrap();
            assert_eq!(reparsed, mv);
        }
    }

    #[test]
    fn test_from_str_trait() {
        let board: Board = STARTPOS.parse().unwrap();
        assert_eq!(board.side_to_move(), Color::White);
    }

    #[test]
    fn test_from_position_startpos() {
        let board = Board::from_position(None, &[]).unwrap();
        assert_eq!(board.to_fen(), STARTPOS);
    }

    #[test]
    fn test_from_position_with_moves() {
        let board = Board::from_position(None, &["e2e4", "e7e5", "g1f3"]).unwrap();
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.fullmove_number(), 2);
        assert_eq!(board.piece_on(Square::new(2, 5)), Some(Piece::Knight));
    }

    #[test]
    fn test_from_position_rejects_illegal_move() {
        let result = Board::from_position(None, &["e2e4", "e7e6", "e4e3"]);
        assert!(matches!(
            result,
            Err(PositionError::Move(MoveParseError::IllegalMove { .. }))
        ));
    }

    #[test]
    fn test_from_position_rejects_bad_fen() {
        let result = Board::from_position(Some("not a fen"), &[]);
        assert!(matches!(result, Err(PositionError::Fen(_))));
    }
}
