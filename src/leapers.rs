//! Leaper attack tables (king, knight) and pawn push/capture kernels.

use std::sync::OnceLock;

use crate::bitboard::Bitboard;
use crate::masks::{FILE_A, FILE_B, FILE_G, FILE_H, RANK_4, RANK_5};
use crate::square::Square;

fn king_attacks_for(sq: Square) -> Bitboard {
    let bb = sq.to_bb();
    let not_a = !FILE_A;
    let not_h = !FILE_H;
    (bb & not_a) << 7usize
        | bb << 8usize
        | (bb & not_h) << 9usize
        | (bb & not_h) << 1usize
        | (bb & not_h) >> 7usize
        | bb >> 8usize
        | (bb & not_a) >> 9usize
        | (bb & not_a) >> 1usize
}

fn knight_attacks_for(sq: Square) -> Bitboard {
    let bb = sq.to_bb();
    let not_a = !FILE_A;
    let not_h = !FILE_H;
    let not_ab = !(FILE_A | FILE_B);
    let not_gh = !(FILE_G | FILE_H);

    (bb & not_h) << 17usize
        | (bb & not_a) << 15usize
        | (bb & not_gh) << 10usize
        | (bb & not_ab) << 6usize
        | (bb & not_a) >> 17usize
        | (bb & not_h) >> 15usize
        | (bb & not_ab) >> 10usize
        | (bb & not_gh) >> 6usize
}

fn build_table(f: impl Fn(Square) -> Bitboard) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    for (i, slot) in table.iter_mut().enumerate() {
        *slot = f(Square(i as u8));
    }
    table
}

static KING_TABLE: OnceLock<[Bitboard; 64]> = OnceLock::new();
static KNIGHT_TABLE: OnceLock<[Bitboard; 64]> = OnceLock::new();

/// King attack set from `sq`.
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_TABLE.get_or_init(|| build_table(king_attacks_for))[sq.0 as usize]
}

/// Knight attack set from `sq`.
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_TABLE.get_or_init(|| build_table(knight_attacks_for))[sq.0 as usize]
}

/// Pawn push/capture kernels, parametrised by side. `pawns` is the set of
/// pawns of the side to move; `empty` is the empty-squares set; `enemy` is
/// the full set of opponent-occupied squares.
pub struct PawnKernels {
    pub single_push: Bitboard,
    pub double_push: Bitboard,
    pub left_capture: Bitboard,
    pub right_capture: Bitboard,
}

pub fn white_pawn_kernels(pawns: Bitboard, empty: Bitboard, enemy: Bitboard) -> PawnKernels {
    let single_push = pawns.north() & empty;
    let double_push = (single_push.north() & empty) & RANK_4;
    let left_capture = ((pawns & !FILE_A) << 7usize) & enemy;
    let right_capture = ((pawns & !FILE_H) << 9usize) & enemy;
    PawnKernels {
        single_push,
        double_push,
        left_capture,
        right_capture,
    }
}

pub fn black_pawn_kernels(pawns: Bitboard, empty: Bitboard, enemy: Bitboard) -> PawnKernels {
    let single_push = pawns.south() & empty;
    let double_push = (single_push.south() & empty) & RANK_5;
    // Black's "left" capture (toward file A) shifts south-west; "right"
    // (toward file H) shifts south-east. The file guard is against the
    // source file, mirroring White's convention.
    let left_capture = ((pawns & !FILE_H) >> 7usize) & enemy;
    let right_capture = ((pawns & !FILE_A) >> 9usize) & enemy;
    PawnKernels {
        single_push,
        double_push,
        left_capture,
        right_capture,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bb_of(squares: &[Square]) -> Bitboard {
        squares.iter().fold(Bitboard::EMPTY, |acc, &s| acc | s.to_bb())
    }

    #[test]
    fn knight_scenarios() {
        let b1 = Square::from_file_rank(1, 0);
        assert_eq!(
            knight_attacks(b1),
            bb_of(&[
                Square::from_file_rank(0, 2), // a3
                Square::from_file_rank(2, 2), // c3
                Square::from_file_rank(3, 1), // d2
            ])
        );

        let d4 = Square::from_file_rank(3, 3);
        assert_eq!(
            knight_attacks(d4),
            bb_of(&[
                Square::from_file_rank(1, 2), // b3
                Square::from_file_rank(1, 4), // b5
                Square::from_file_rank(2, 1), // c2
                Square::from_file_rank(2, 5), // c6
                Square::from_file_rank(4, 1), // e2
                Square::from_file_rank(4, 5), // e6
                Square::from_file_rank(5, 2), // f3
                Square::from_file_rank(5, 4), // f5
            ])
        );

        let a8 = Square::A8;
        assert_eq!(
            knight_attacks(a8),
            bb_of(&[
                Square::from_file_rank(1, 5), // b6
                Square::from_file_rank(2, 6), // c7
            ])
        );
    }

    #[test]
    fn king_scenarios() {
        assert_eq!(
            king_attacks(Square::A1),
            bb_of(&[
                Square::from_file_rank(0, 1), // a2
                Square::from_file_rank(1, 0), // b1
                Square::from_file_rank(1, 1), // b2
            ])
        );

        let e5 = Square::from_file_rank(4, 4);
        assert_eq!(
            king_attacks(e5),
            bb_of(&[
                Square::from_file_rank(3, 3), // d4
                Square::from_file_rank(3, 4), // d5
                Square::from_file_rank(3, 5), // d6
                Square::from_file_rank(4, 3), // e4
                Square::from_file_rank(4, 5), // e6
                Square::from_file_rank(5, 3), // f4
                Square::from_file_rank(5, 4), // f5
                Square::from_file_rank(5, 5), // f6
            ])
        );
    }

    #[test]
    fn white_pawn_kernel_starting_position() {
        let pawns = crate::masks::START_WHITE_PAWNS;
        let empty = !(crate::masks::START_WHITE_PAWNS | crate::masks::START_BLACK_PAWNS);
        let kernels = white_pawn_kernels(pawns, empty, Bitboard::EMPTY);
        assert_eq!(kernels.single_push.popcount(), 8);
        assert_eq!(kernels.double_push.popcount(), 8);
        assert_eq!(kernels.left_capture, Bitboard::EMPTY);
        assert_eq!(kernels.right_capture, Bitboard::EMPTY);
    }
}
