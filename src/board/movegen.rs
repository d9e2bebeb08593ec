//! Pseudo-legal move generation for the side to move.

use crate::board::castle::{self, CastleRights};
use crate::board::Board;
use crate::leapers::{king_attacks, knight_attacks};
use crate::magic;
use crate::piece::{Colour, PieceType};
use crate::piece_move::Move;
use crate::square::Square;

const PROMO_PIECES: [PieceType; 4] = [
    PieceType::Queen,
    PieceType::Rook,
    PieceType::Bishop,
    PieceType::Knight,
];

/// All pseudo-legal moves for `board.side_to_move()`.
pub fn generate(board: &Board) -> Vec<Move> {
    let mut moves = Vec::new();
    let us_all = board.us().all();
    let them_all = board.them().all();
    let occ = us_all | them_all;
    let empty = !occ;

    generate_leaper(board, PieceType::King, king_attacks, empty, them_all, &mut moves);
    generate_leaper(board, PieceType::Knight, knight_attacks, empty, them_all, &mut moves);
    generate_slider(board, PieceType::Bishop, occ, empty, them_all, &mut moves);
    generate_slider(board, PieceType::Rook, occ, empty, them_all, &mut moves);
    generate_slider(board, PieceType::Queen, occ, empty, them_all, &mut moves);
    generate_pawns(board, empty, them_all, &mut moves);
    generate_castles(board, occ, &mut moves);

    moves
}

fn generate_leaper(
    board: &Board,
    pt: PieceType,
    attacks_fn: fn(Square) -> crate::bitboard::Bitboard,
    empty: crate::bitboard::Bitboard,
    them_all: crate::bitboard::Bitboard,
    moves: &mut Vec<Move>,
) {
    for from in board.us().bb(pt) {
        let candidates = attacks_fn(from);
        for to in candidates & empty {
            moves.push(Move::new_quiet(pt, from, to));
        }
        for to in candidates & them_all {
            let victim = board.them().find_type(to.to_bb());
            moves.push(Move::new_capture(pt, victim, from, to));
        }
    }
}

fn generate_slider(
    board: &Board,
    pt: PieceType,
    occ: crate::bitboard::Bitboard,
    empty: crate::bitboard::Bitboard,
    them_all: crate::bitboard::Bitboard,
    moves: &mut Vec<Move>,
) {
    let tables = magic::table::installed();
    for from in board.us().bb(pt) {
        let candidates = match pt {
            PieceType::Bishop => tables.bishop_attacks(from, occ),
            PieceType::Rook => tables.rook_attacks(from, occ),
            PieceType::Queen => tables.queen_attacks(from, occ),
            _ => unreachable!("generate_slider only called for sliding piece types"),
        };
        for to in candidates & empty {
            moves.push(Move::new_quiet(pt, from, to));
        }
        for to in candidates & them_all {
            let victim = board.them().find_type(to.to_bb());
            moves.push(Move::new_capture(pt, victim, from, to));
        }
    }
}

fn generate_pawns(
    board: &Board,
    empty: crate::bitboard::Bitboard,
    them_all: crate::bitboard::Bitboard,
    moves: &mut Vec<Move>,
) {
    let white = matches!(board.side_to_move(), Colour::White);
    let promo_rank = if white { 7 } else { 0 };
    let start_rank = if white { 1 } else { 6 };
    let push_delta: i32 = if white { 8 } else { -8 };

    for from in board.us().bb(PieceType::Pawn) {
        // Single and double push.
        if let Some(single) = shifted(from, push_delta) {
            if empty.test_bit(single) {
                emit_pawn_move(moves, from, single, promo_rank, PieceType::None);
                if from.rank() == start_rank {
                    if let Some(double) = shifted(single, push_delta) {
                        if empty.test_bit(double) {
                            moves.push(Move::new_double_push(PieceType::Pawn, from, double));
                        }
                    }
                }
            }
        }

        // Captures, including en passant.
        for &file_delta in &[-1i32, 1i32] {
            if let Some(target) = shifted(from, push_delta + file_delta) {
                // `target` must stay on the same "push rank" as `single`
                // and a legal diagonal step (no file wrap); `shifted`
                // below already range-checks the file.
                if (target.file() as i32 - from.file() as i32).abs() != 1 {
                    continue;
                }
                if them_all.test_bit(target) {
                    let victim = board.them().find_type(target.to_bb());
                    emit_pawn_move(moves, from, target, promo_rank, victim);
                } else if board.ep_available() {
                    if let Some(ep_sq) = board.ep_square() {
                        if target == ep_sq {
                            let captured_pawn = shifted(target, -push_delta)
                                .expect("en passant target always has a pawn behind it");
                            moves.push(Move::new_en_passant(from, target, captured_pawn));
                        }
                    }
                }
            }
        }
    }
}

fn emit_pawn_move(moves: &mut Vec<Move>, from: Square, to: Square, promo_rank: u8, victim: PieceType) {
    if to.rank() == promo_rank {
        for &promo in &PROMO_PIECES {
            moves.push(Move::new_promotion(from, to, victim, promo));
        }
    } else if victim == PieceType::None {
        moves.push(Move::new_quiet(PieceType::Pawn, from, to));
    } else {
        moves.push(Move::new_capture(PieceType::Pawn, victim, from, to));
    }
}

/// Shifts a square by a raw index delta, returning `None` if it would
/// leave the board. Diagonal deltas can still wrap around a file edge;
/// callers that use this for diagonal steps must separately check the
/// resulting file, since an index-only check can't see the wrap.
fn shifted(sq: Square, delta: i32) -> Option<Square> {
    let idx = sq.0 as i32 + delta;
    if (0..64).contains(&idx) {
        Some(Square(idx as u8))
    } else {
        None
    }
}

fn generate_castles(board: &Board, occ: crate::bitboard::Bitboard, moves: &mut Vec<Move>) {
    let colour = board.side_to_move();
    let rights: CastleRights = board.castle_rights();
    for &kingside in &[true, false] {
        if castle::can_castle(rights, colour, kingside, occ, board.attacked_by_them()) {
            let from = castle::king_origin(colour);
            let to = castle::king_destination(colour, kingside);
            moves.push(Move::new_castle(from, to, kingside));
        }
    }
}
