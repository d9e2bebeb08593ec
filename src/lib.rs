//! Bitboard-based chess move generation, the foundational layer a
//! policy/value network, MCTS search, and self-play trainer would sit on
//! top of.
//!
//! This crate covers board representation, pseudo-legal move generation,
//! FEN parsing, and magic-bitboard sliding-attack lookup. It does not
//! evaluate positions, search, or play games — those are separate
//! collaborators this crate only hands data to.
//!
//! # Usage
//!
//! ```
//! use crankshaft::board::new_board;
//! use crankshaft::magic::table::{install, MagicsBackend, MagicComputer};
//!
//! install(MagicsBackend::Discovered {
//!     base_seed: 0x5EED,
//!     computer: MagicComputer::SingleThreaded,
//! }).unwrap();
//!
//! let board = new_board();
//! let moves = board.moves();
//! assert_eq!(moves.len(), 20);
//! ```
//!
//! Sliding-piece move generation requires the process-wide magic tables to
//! be installed once via [`magic::table::install`] before any call to
//! [`board::Board::moves`] — see that module for the available backends.

pub mod bit_twiddles;
pub mod bitboard;
pub mod board;
pub mod board_path;
pub mod encoding;
pub mod error;
pub mod leapers;
pub mod magic;
pub mod masks;
pub mod mcts;
pub mod piece;
pub mod piece_move;
pub mod piece_set;
pub mod prng;
pub mod queue;
pub mod rays;
pub mod square;

pub use bitboard::Bitboard;
pub use board::{new_board, Board, BoardBuilder};
pub use board_path::BoardPath;
pub use piece::{Colour, Piece, PieceType};
pub use piece_move::Move;
pub use square::Square;
