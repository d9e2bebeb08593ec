//! A side's pieces: six per-type bitboards plus the derived union.

use crate::bitboard::Bitboard;
use crate::masks::{RANK_1, RANK_8};
use crate::piece::{PieceType, ALL_PIECE_TYPES};
use crate::square::Square;

/// One side's pieces, indexed by `PieceType` (the `None` slot is unused).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PieceSet {
    boards: [Bitboard; 7],
}

impl PieceSet {
    pub const fn empty() -> PieceSet {
        PieceSet {
            boards: [Bitboard::EMPTY; 7],
        }
    }

    #[inline]
    pub fn bb(&self, pt: PieceType) -> Bitboard {
        self.boards[pt as usize]
    }

    #[inline]
    pub fn set_bit(&mut self, pt: PieceType, sq: Square) {
        self.boards[pt as usize] = self.boards[pt as usize].set_bit(sq);
    }

    #[inline]
    pub fn clear_bit(&mut self, pt: PieceType, sq: Square) {
        self.boards[pt as usize] = self.boards[pt as usize].clear_bit(sq);
    }

    /// Atomically relocates one piece of type `pt` from `from` to `to`.
    #[inline]
    pub fn update_bit(&mut self, pt: PieceType, from: Square, to: Square) {
        self.clear_bit(pt, from);
        self.set_bit(pt, to);
    }

    /// Union of every piece type's bitboard.
    #[inline]
    pub fn all(&self) -> Bitboard {
        let mut u = Bitboard::EMPTY;
        for &pt in &ALL_PIECE_TYPES {
            u |= self.bb(pt);
        }
        u
    }

    /// The piece type owning the single bit set in `bb`. Requires `bb` to
    /// carry exactly one bit.
    pub fn find_type(&self, bb: Bitboard) -> PieceType {
        assert_eq!(bb.popcount(), 1, "find_type requires a singleton bitboard");
        for &pt in &ALL_PIECE_TYPES {
            if (self.bb(pt) & bb).is_not_empty() {
                return pt;
            }
        }
        PieceType::None
    }

    /// Vertical mirror: byte-reverses every bitboard, swapping rank 1/8 etc.
    /// Used to view the position from the opposite side.
    pub fn flip(&self) -> PieceSet {
        let mut out = PieceSet::empty();
        for &pt in &ALL_PIECE_TYPES {
            out.boards[pt as usize] = self.bb(pt).mirror();
        }
        out
    }

    /// Checks the invariants from the data model: exactly one king, no
    /// pawns on rank 1/8, total and per-type popcount bounds.
    pub fn is_logical(&self) -> bool {
        if self.bb(PieceType::King).popcount() != 1 {
            return false;
        }
        if (self.bb(PieceType::Pawn) & (RANK_1 | RANK_8)).is_not_empty() {
            return false;
        }
        if self.bb(PieceType::Pawn).popcount() > 8 {
            return false;
        }
        if self.all().popcount() > 16 {
            return false;
        }
        // Promotion-reachable upper bounds: at most 10 of any one
        // promotable type (8 pawns promoting plus the 2 starting pieces
        // for rook/bishop/knight, or 1 for the queen).
        if self.bb(PieceType::Queen).popcount() > 9
            || self.bb(PieceType::Rook).popcount() > 10
            || self.bb(PieceType::Bishop).popcount() > 10
            || self.bb(PieceType::Knight).popcount() > 10
        {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starting_white() -> PieceSet {
        let mut ps = PieceSet::empty();
        for file in 0..8u8 {
            ps.set_bit(PieceType::Pawn, Square::from_file_rank(file, 1));
        }
        ps.set_bit(PieceType::Rook, Square::A1);
        ps.set_bit(PieceType::Rook, Square::H1);
        ps.set_bit(PieceType::Knight, Square::from_file_rank(1, 0));
        ps.set_bit(PieceType::Knight, Square::from_file_rank(6, 0));
        ps.set_bit(PieceType::Bishop, Square::from_file_rank(2, 0));
        ps.set_bit(PieceType::Bishop, Square::from_file_rank(5, 0));
        ps.set_bit(PieceType::Queen, Square::from_file_rank(3, 0));
        ps.set_bit(PieceType::King, Square::E1);
        ps
    }

    #[test]
    fn starting_set_is_logical() {
        let ps = starting_white();
        assert!(ps.is_logical());
        assert_eq!(ps.all().popcount(), 16);
    }

    #[test]
    fn find_type_t() {
        let ps = starting_white();
        assert_eq!(ps.find_type(Square::E1.to_bb()), PieceType::King);
        assert_eq!(ps.find_type(Square::A1.to_bb()), PieceType::Rook);
    }

    #[test]
    fn pawn_on_back_rank_is_illogical() {
        let mut ps = starting_white();
        ps.set_bit(PieceType::Pawn, Square::A8);
        assert!(!ps.is_logical());
    }

    #[test]
    fn update_bit_relocates_atomically() {
        let mut ps = starting_white();
        ps.update_bit(PieceType::King, Square::E1, Square::from_file_rank(6, 0));
        assert!(!ps.bb(PieceType::King).test_bit(Square::E1));
        assert!(ps.bb(PieceType::King).test_bit(Square::from_file_rank(6, 0)));
    }

    #[test]
    fn flip_is_involution() {
        let ps = starting_white();
        assert_eq!(ps.flip().flip(), ps);
    }

    #[test]
    fn flip_swaps_rank_keeps_file() {
        let ps = starting_white();
        let flipped = ps.flip();
        // White's rank-1 pieces land on rank 8 on the same file, not
        // mirrored to the opposite file.
        assert!(flipped.bb(PieceType::King).test_bit(Square::E8));
        assert!(flipped.bb(PieceType::Rook).test_bit(Square::A8));
        assert!(flipped.bb(PieceType::Rook).test_bit(Square::H8));
        assert!(flipped.bb(PieceType::Pawn).test_bit(Square::from_file_rank(0, 6)));
    }
}
