//! Bitboard chess position core.
//!
//! Provides the board-side building blocks a search layer sits on top of:
//! - Bitboard-based position representation with make/unmake
//! - Legal move generation backed by magic-bitboard sliding attacks
//! - Incrementally maintained Zobrist hashing
//! - FEN parsing/printing and UCI move text
//! - A bounded transposition table with insertion-order eviction
//!
//! # Quick Start
//!
//! ```
//! use chess_core::board::Board;
//!
//! // Create a new game from the starting position
//! let mut board = Board::new();
//!
//! // Generate all legal moves
//! let moves = board.generate_moves();
//! assert_eq!(moves.len(), 20);
//!
//! // Parse and make a UCI move
//! board.make_move_uci("e2e4").unwrap();
//! board.make_move_uci("e7e5").unwrap();
//! assert!(!board.is_checkmate());
//! ```
//!
//! # Building Positions
//!
//! ```
//! use chess_core::board::Board;
//!
//! // From FEN notation
//! let board = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
//!     .unwrap();
//! assert!(board.en_passant_square().is_some());
//!
//! // From the UCI `position` surface: optional FEN plus a move list
//! let board = Board::from_position(None, &["e2e4", "c7c5"]).unwrap();
//! assert_eq!(board.fullmove_number(), 2);
//! ```
//!
//! # Caching Search Results
//!
//! ```
//! use chess_core::board::Board;
//! use chess_core::tt::{Bound, TranspositionTable, TtEntry};
//!
//! let mut board = Board::new();
//! let mv = board.parse_move("g1f3").unwrap();
//!
//! let mut table = TranspositionTable::bounded(1 << 20);
//! table.put(board.hash(), TtEntry::new(mv, 6, 12, Bound::Exact));
//! assert_eq!(table.get(board.hash()).map(|e| e.best_move()), Some(mv));
//! ```
//!
//! # Features
//!
//! - `serde` - Enable serialization for `Piece`, `Color`, `Square`, `Move`, and `CastlingRights`

// Enable pedantic lints with sensible domain-specific exceptions
#![warn(clippy::pedantic)]
// Bitboard hex literals are clearer without separators (bit patterns visible)
#![allow(clippy::unreadable_literal)]
// Index casts are ubiquitous and safe in chess (board indices, square indices)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Large arrays are needed for move lists and attack tables
#![allow(clippy::large_stack_arrays)]
// Module-level documentation is sufficient for this codebase
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod board;
pub mod tt;
pub mod zobrist;
