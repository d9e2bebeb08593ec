//! Castling rights bookkeeping and the castling-legality predicate.

use bitflags::bitflags;

use crate::bitboard::Bitboard;
use crate::piece::Colour;
use crate::square::Square;

bitflags! {
    /// The four absolute castling-right flags, independent of side to move.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct CastleRights: u8 {
        const WHITE_K = 0b0001;
        const WHITE_Q = 0b0010;
        const BLACK_K = 0b0100;
        const BLACK_Q = 0b1000;
    }
}

impl CastleRights {
    pub const NONE: CastleRights = CastleRights::empty();
    pub const ALL: CastleRights = CastleRights::all();

    #[inline]
    pub fn kingside(self, colour: Colour) -> bool {
        match colour {
            Colour::White => self.contains(CastleRights::WHITE_K),
            Colour::Black => self.contains(CastleRights::BLACK_K),
        }
    }

    #[inline]
    pub fn queenside(self, colour: Colour) -> bool {
        match colour {
            Colour::White => self.contains(CastleRights::WHITE_Q),
            Colour::Black => self.contains(CastleRights::BLACK_Q),
        }
    }

    /// Clears both rights for `colour`, e.g. once its king has moved.
    pub fn clear_colour(&mut self, colour: Colour) {
        match colour {
            Colour::White => self.remove(CastleRights::WHITE_K | CastleRights::WHITE_Q),
            Colour::Black => self.remove(CastleRights::BLACK_K | CastleRights::BLACK_Q),
        }
    }
}

/// The squares the king and rook cross for one castling direction, plus the
/// squares that must be unattacked for the move to be legal.
struct CastlePath {
    king_from: Square,
    king_to: Square,
    king_crossing: Bitboard,
    occupancy_must_be_empty: Bitboard,
}

fn path_for(colour: Colour, kingside: bool) -> CastlePath {
    let rank0 = match colour {
        Colour::White => 0,
        Colour::Black => 7,
    };
    let sq = |file: u8| Square::from_file_rank(file, rank0);

    if kingside {
        CastlePath {
            king_from: sq(4),
            king_to: sq(6),
            king_crossing: sq(4).to_bb() | sq(5).to_bb() | sq(6).to_bb(),
            occupancy_must_be_empty: sq(5).to_bb() | sq(6).to_bb(),
        }
    } else {
        CastlePath {
            king_from: sq(4),
            king_to: sq(2),
            king_crossing: sq(2).to_bb() | sq(3).to_bb() | sq(4).to_bb(),
            occupancy_must_be_empty: sq(1).to_bb() | sq(2).to_bb() | sq(3).to_bb(),
        }
    }
}

/// Evaluates the castling-legality predicate from §4.8: the right must be
/// set, the squares the king and rook cross must be empty, and none of the
/// squares the king crosses (including its origin and destination) may be
/// attacked.
pub fn can_castle(
    rights: CastleRights,
    colour: Colour,
    kingside: bool,
    occupancy: Bitboard,
    attacked_by_them: Bitboard,
) -> bool {
    let has_right = if kingside {
        rights.kingside(colour)
    } else {
        rights.queenside(colour)
    };
    if !has_right {
        return false;
    }

    let path = path_for(colour, kingside);
    if (occupancy & path.occupancy_must_be_empty).is_not_empty() {
        return false;
    }
    if (attacked_by_them & path.king_crossing).is_not_empty() {
        return false;
    }
    true
}

/// The king's destination square for a given castling direction.
pub fn king_destination(colour: Colour, kingside: bool) -> Square {
    path_for(colour, kingside).king_to
}

pub fn king_origin(colour: Colour) -> Square {
    match colour {
        Colour::White => Square::E1,
        Colour::Black => Square::E8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_right_blocks_castle() {
        assert!(!can_castle(
            CastleRights::NONE,
            Colour::White,
            true,
            Bitboard::EMPTY,
            Bitboard::EMPTY
        ));
    }

    #[test]
    fn occupied_path_blocks_castle() {
        let occ = Square::from_file_rank(5, 0).to_bb(); // f1
        assert!(!can_castle(
            CastleRights::ALL,
            Colour::White,
            true,
            occ,
            Bitboard::EMPTY
        ));
    }

    #[test]
    fn attacked_crossing_square_blocks_castle() {
        let attacked = Square::from_file_rank(5, 0).to_bb(); // f1, crossed but not occupied
        assert!(!can_castle(
            CastleRights::ALL,
            Colour::White,
            true,
            Bitboard::EMPTY,
            attacked
        ));
    }

    #[test]
    fn clear_path_and_right_allows_castle() {
        assert!(can_castle(
            CastleRights::ALL,
            Colour::Black,
            false,
            Bitboard::EMPTY,
            Bitboard::EMPTY
        ));
    }

    #[test]
    fn clear_colour_drops_both_rights() {
        let mut rights = CastleRights::ALL;
        rights.clear_colour(Colour::White);
        assert!(!rights.kingside(Colour::White));
        assert!(!rights.queenside(Colour::White));
        assert!(rights.kingside(Colour::Black));
    }
}
