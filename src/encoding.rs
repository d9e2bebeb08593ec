//! Maps a `Move` onto a coordinate in the AlphaZero-style 8x8x73 move
//! action space: an origin square plus one of 73 "planes" describing the
//! direction and kind of the move.
//!
//! Grounded directly on `original_source/src/coding_util.cc`'s
//! `encode_move`/`encode_knight_move`/`encode_under_promo`/
//! `encode_queen_move`. Planes 0-55 are queen-like moves (8 directions x 7
//! distances), 56-63 are the 8 knight offsets, and 64-72 are the 9
//! underpromotion combinations (3 pieces x 3 capture directions).

use crate::piece::PieceType;
use crate::piece_move::Move;

pub const BOARD_SIZE: usize = 8;
pub const NUM_PLANES: usize = 73;

const KNIGHT_PLANE_BASE: u32 = 56;
const UNDER_PROMO_PLANE_BASE: u32 = 64;

/// A move re-expressed as `(row, col, plane)`, `row`/`col` the origin
/// square and `plane` the move's direction/kind within the 73-plane space.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EncodedMove {
    pub row: u8,
    pub col: u8,
    pub plane: u32,
}

/// Encodes a move's queen-like displacement, `row_diff`/`col_diff` each in
/// `[-7, 7]` and not both zero (a move always changes square).
fn encode_queen_move(row_diff: i32, col_diff: i32) -> u32 {
    debug_assert!((-7..=7).contains(&row_diff) && (-7..=7).contains(&col_diff));
    debug_assert!(row_diff != 0 || col_diff != 0);

    if row_diff < 0 {
        let n = (-row_diff) as u32;
        if col_diff == 0 {
            n
        } else if col_diff < 0 {
            7 + n
        } else {
            14 + n
        }
    } else if row_diff == 0 {
        if col_diff < 0 {
            21 + (-col_diff) as u32
        } else {
            28 + col_diff as u32
        }
    } else if col_diff == 0 {
        35 + row_diff as u32
    } else if col_diff < 0 {
        42 + row_diff as u32
    } else {
        49 + row_diff as u32
    }
}

/// Encodes one of the 8 knight offsets to a number in `[0, 7]`.
fn encode_knight_move(row_diff: i32, col_diff: i32) -> u32 {
    debug_assert!((-2..=2).contains(&row_diff) && (-2..=2).contains(&col_diff));
    debug_assert_ne!(row_diff, col_diff);

    if row_diff < 0 && col_diff < 0 {
        if row_diff == -2 { 0 } else { 1 }
    } else if row_diff > 0 && col_diff < 0 {
        if row_diff == 1 { 2 } else { 3 }
    } else if row_diff > 0 && col_diff > 0 {
        if row_diff == 2 { 4 } else { 5 }
    } else if row_diff == -1 {
        6
    } else {
        7
    }
}

/// Encodes an underpromotion (to rook, bishop, or knight — queen
/// promotions use `encode_queen_move` instead) to a number in `[0, 8]`.
fn encode_under_promo(col_diff: i32, promo: PieceType) -> u32 {
    debug_assert!((-1..=1).contains(&col_diff));

    let mut code = match promo {
        PieceType::Rook => 0,
        PieceType::Bishop => 3,
        PieceType::Knight => 6,
        other => unreachable!("{other} is not a valid underpromotion piece"),
    };
    code += match col_diff {
        0 => 1,
        1 => 2,
        _ => 0,
    };
    code
}

/// Encodes `mv` into its `(row, col, plane)` triple.
pub fn encode_move(mv: Move) -> EncodedMove {
    let from = mv.from_sq();
    let to = mv.to_sq();
    let row_diff = to.rank() as i32 - from.rank() as i32;
    let col_diff = to.file() as i32 - from.file() as i32;
    debug_assert!(row_diff != 0 || col_diff != 0, "a move always changes square");

    let plane = match mv.from_piece() {
        PieceType::Knight => KNIGHT_PLANE_BASE + encode_knight_move(row_diff, col_diff),
        PieceType::Pawn if mv.is_promo() && mv.promo_piece() != PieceType::Queen => {
            UNDER_PROMO_PLANE_BASE + encode_under_promo(col_diff, mv.promo_piece())
        }
        _ => encode_queen_move(row_diff, col_diff),
    };

    EncodedMove {
        row: from.rank(),
        col: from.file(),
        plane,
    }
}
