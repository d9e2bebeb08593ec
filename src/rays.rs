//! Ground-truth sliding-piece attacks, computed by stepping out from a
//! square in each direction and stopping (inclusively) at the first
//! blocker. Magic tables are validated against these functions for every
//! subset of the relevant-occupancy mask.

use crate::bitboard::Bitboard;
use crate::square::Square;

/// A single step in one of the 8 compass directions, or `None` if it would
/// walk off the board.
fn step(sq: Square, file_delta: i32, rank_delta: i32) -> Option<Square> {
    let file = sq.file() as i32 + file_delta;
    let rank = sq.rank() as i32 + rank_delta;
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Some(Square::from_file_rank(file as u8, rank as u8))
    } else {
        None
    }
}

fn ray(sq: Square, blockers: Bitboard, file_delta: i32, rank_delta: i32) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    let mut cur = sq;
    while let Some(next) = step(cur, file_delta, rank_delta) {
        attacks = attacks.set_bit(next);
        if blockers.test_bit(next) {
            break;
        }
        cur = next;
    }
    attacks
}

/// Rook attacks from `sq` given the full set of occupied squares.
pub fn rook_rays(sq: Square, blockers: Bitboard) -> Bitboard {
    ray(sq, blockers, 0, 1)
        | ray(sq, blockers, 0, -1)
        | ray(sq, blockers, 1, 0)
        | ray(sq, blockers, -1, 0)
}

/// Bishop attacks from `sq` given the full set of occupied squares.
pub fn bishop_rays(sq: Square, blockers: Bitboard) -> Bitboard {
    ray(sq, blockers, 1, 1)
        | ray(sq, blockers, 1, -1)
        | ray(sq, blockers, -1, 1)
        | ray(sq, blockers, -1, -1)
}

/// Queen attacks: the union of rook and bishop rays.
pub fn queen_rays(sq: Square, blockers: Bitboard) -> Bitboard {
    rook_rays(sq, blockers) | bishop_rays(sq, blockers)
}
