//! FEN (Forsyth-Edwards Notation) parsing and serialisation.

use log::trace;

use crate::board::castle::CastleRights;
use crate::board::{Board, BoardBuilder};
use crate::error::{BoardBuildError, FenError};
use crate::piece::{Colour, PieceType};
use crate::square::Square;

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const FIELD_NAMES: [&str; 6] = [
    "piece placement",
    "active colour",
    "castling rights",
    "en passant target",
    "half-move clock",
    "full-move number",
];

/// Parses a FEN string into a `Board`.
pub fn from_fen(fen: &str) -> Result<Board, FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    for (i, name) in FIELD_NAMES.iter().enumerate() {
        if fields.get(i).is_none() {
            return Err(FenError::MissingField { index: i, name });
        }
    }

    let mut builder = BoardBuilder::new();
    builder = parse_piece_placement(builder, fields[0])?;
    let colour = parse_active_colour(fields[1])?;
    builder = builder.side_to_move(colour);
    let rights = parse_castling(fields[2])?;
    builder = builder.castle_rights(rights);
    if let Some(file) = parse_en_passant(fields[3])? {
        builder = builder.en_passant_file(file);
    }
    let half_move = parse_half_move(fields[4])?;
    builder = builder.half_move(half_move);
    let full_move = parse_full_move(fields[5])?;
    builder = builder.full_move(full_move);

    trace!("parsed FEN fields: colour={colour:?} rights={rights:?} half_move={half_move} full_move={full_move}");

    builder.build().map_err(|e| match e {
        BoardBuildError::White => FenError::WhiteNotLogical("see PieceSet invariants"),
        BoardBuildError::Black => FenError::BlackNotLogical("see PieceSet invariants"),
        BoardBuildError::HalfMove => FenError::InvalidHalfMove(fields[4].to_string()),
        BoardBuildError::EnPassantFile => FenError::InvalidEnPassant(fields[3].to_string()),
    })
}

fn parse_piece_placement(mut builder: BoardBuilder, field: &str) -> Result<BoardBuilder, FenError> {
    let rows: Vec<&str> = field.split('/').collect();
    if rows.len() != 8 {
        return Err(FenError::InvalidRow { row: rows.len() as u8 });
    }

    for (row_from_top, row) in rows.iter().enumerate() {
        let rank = 7 - row_from_top as u8;
        let mut file = 0u8;
        for ch in row.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(FenError::InvalidRow { row: rank });
                }
                file += empty_count as u8;
            } else {
                let pt = PieceType::from_fen_char(ch).ok_or(FenError::InvalidPieceChar { ch })?;
                if file >= 8 {
                    return Err(FenError::PieceRowInconsistent { row: rank });
                }
                let colour = if ch.is_ascii_uppercase() { Colour::White } else { Colour::Black };
                builder = builder.piece(colour, pt, Square::from_file_rank(file, rank));
                file += 1;
            }
        }
        if file != 8 {
            return Err(FenError::PieceRowInconsistent { row: rank });
        }
    }

    Ok(builder)
}

fn parse_active_colour(field: &str) -> Result<Colour, FenError> {
    match field {
        "w" => Ok(Colour::White),
        "b" => Ok(Colour::Black),
        _ => Err(FenError::InvalidColor { found: field.to_string() }),
    }
}

fn parse_castling(field: &str) -> Result<CastleRights, FenError> {
    if field == "-" {
        return Ok(CastleRights::NONE);
    }
    if field.is_empty() || !field.chars().all(|c| "KQkq".contains(c)) {
        return Err(FenError::InvalidCastling { found: field.to_string() });
    }
    let mut rights = CastleRights::NONE;
    rights.set(CastleRights::WHITE_K, field.contains('K'));
    rights.set(CastleRights::WHITE_Q, field.contains('Q'));
    rights.set(CastleRights::BLACK_K, field.contains('k'));
    rights.set(CastleRights::BLACK_Q, field.contains('q'));
    Ok(rights)
}

fn parse_en_passant(field: &str) -> Result<Option<u8>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    let mut chars = field.chars();
    let file_char = chars.next();
    let rank_char = chars.next();
    if chars.next().is_some() {
        return Err(FenError::InvalidEnPassant { found: field.to_string() });
    }
    match (file_char, rank_char) {
        (Some(f @ 'a'..='h'), Some(r @ ('3' | '6'))) => {
            let file = f as u8 - b'a';
            let _ = r;
            Ok(Some(file))
        }
        _ => Err(FenError::InvalidEnPassant { found: field.to_string() }),
    }
}

fn parse_half_move(field: &str) -> Result<u8, FenError> {
    field
        .parse::<u32>()
        .ok()
        .filter(|&n| n <= 100)
        .map(|n| n as u8)
        .ok_or_else(|| FenError::InvalidHalfMove { found: field.to_string() })
}

fn parse_full_move(field: &str) -> Result<u16, FenError> {
    field
        .parse::<u16>()
        .ok()
        .filter(|&n| n >= 1)
        .ok_or_else(|| FenError::InvalidFullMove { found: field.to_string() })
}

/// Serialises a `Board` back to FEN text.
pub fn to_fen(board: &Board) -> String {
    let mut placement = String::new();
    for row_from_top in 0..8u8 {
        let rank = 7 - row_from_top;
        let mut empties = 0u8;
        for file in 0..8u8 {
            let sq = Square::from_file_rank(file, rank);
            let white_piece = crate::piece::ALL_PIECE_TYPES
                .iter()
                .find(|&&pt| board.white().bb(pt).test_bit(sq))
                .copied();
            let black_piece = crate::piece::ALL_PIECE_TYPES
                .iter()
                .find(|&&pt| board.black().bb(pt).test_bit(sq))
                .copied();

            match (white_piece, black_piece) {
                (Some(pt), _) => {
                    if empties > 0 {
                        placement.push((b'0' + empties) as char);
                        empties = 0;
                    }
                    placement.push(pt.to_string().chars().next().unwrap());
                }
                (None, Some(pt)) => {
                    if empties > 0 {
                        placement.push((b'0' + empties) as char);
                        empties = 0;
                    }
                    placement.push(pt.to_string().to_ascii_lowercase().chars().next().unwrap());
                }
                (None, None) => empties += 1,
            }
        }
        if empties > 0 {
            placement.push((b'0' + empties) as char);
        }
        if row_from_top != 7 {
            placement.push('/');
        }
    }

    let castling = {
        let r = board.castle_rights();
        let mut s = String::new();
        if r.contains(CastleRights::WHITE_K) {
            s.push('K');
        }
        if r.contains(CastleRights::WHITE_Q) {
            s.push('Q');
        }
        if r.contains(CastleRights::BLACK_K) {
            s.push('k');
        }
        if r.contains(CastleRights::BLACK_Q) {
            s.push('q');
        }
        if s.is_empty() {
            s.push('-');
        }
        s
    };

    let ep = board
        .ep_square()
        .map(|sq| sq.to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "{} {} {} {} {} {}",
        placement,
        board.side_to_move(),
        castling,
        ep,
        board.half_move(),
        board.full_move()
    )
}
