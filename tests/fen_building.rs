//! FEN parsing/serialisation scenarios exercised through the public API,
//! mirroring the teacher's `tests/fen_building.rs` layout.

use pretty_assertions::assert_eq;

use crankshaft::board::fen::{from_fen, to_fen, STARTING_FEN};
use crankshaft::board::new_board;
use crankshaft::magic::table::{install, MagicComputer, MagicsBackend};
use crankshaft::piece::{Colour, PieceType};
use crankshaft::square::Square;

fn install_test_magics() {
    let _ = env_logger::try_init();
    let _ = install(MagicsBackend::Discovered {
        base_seed: 0x9a7e_1234,
        computer: MagicComputer::SingleThreaded,
    });
}

#[test]
fn starting_fen_matches_new_board() {
    install_test_magics();
    let parsed = from_fen(STARTING_FEN).unwrap();
    assert_eq!(parsed, new_board());
}

#[test]
fn starting_fen_round_trips() {
    install_test_magics();
    let parsed = from_fen(STARTING_FEN).unwrap();
    assert_eq!(to_fen(&parsed), STARTING_FEN);
}

#[test]
fn pawns_and_king_scenario() {
    install_test_magics();
    let board = from_fen("8/5k2/3p4/1p1Pp2p/pP2Pp1P/P4P1K/8/8 b - - 99 50").unwrap();

    assert_eq!(board.side_to_move(), Colour::Black);
    assert!(board.white().bb(PieceType::King).test_bit(Square::from_file_rank(7, 2)));
    assert!(board.black().bb(PieceType::King).test_bit(Square::from_file_rank(5, 6)));
    assert_eq!(board.half_move(), 99);
    assert_eq!(board.full_move(), 50);

    let mut white_pawns: Vec<Square> = board.white().bb(PieceType::Pawn).collect();
    white_pawns.sort();
    let mut expected: Vec<Square> = vec![
        Square::from_file_rank(0, 2),
        Square::from_file_rank(1, 3),
        Square::from_file_rank(3, 4),
        Square::from_file_rank(4, 3),
        Square::from_file_rank(5, 2),
        Square::from_file_rank(7, 3),
    ];
    expected.sort();
    assert_eq!(white_pawns, expected);
}

#[test]
fn malformed_fen_reports_the_failing_field() {
    let err = from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -").unwrap_err();
    assert_eq!(
        err,
        crankshaft::error::FenError::MissingField { index: 4, name: "half-move clock" }
    );
}

#[test]
fn unrecognised_piece_char_is_reported() {
    let err = from_fen("8/8/8/8/8/8/8/7z w - - 0 1").unwrap_err();
    assert_eq!(err, crankshaft::error::FenError::InvalidPieceChar { ch: 'z' });
}
