//! Cross-checks the installed magic tables against ground-truth raycasts
//! for every subset of every square's relevant-occupancy mask — the single
//! property that qualifies a freshly discovered table.

use crankshaft::magic::discovery::permute_mask;
use crankshaft::magic::masks::{bishop_mask, rook_mask};
use crankshaft::magic::table::{MagicComputer, MagicTables, MagicsBackend};
use crankshaft::rays::{bishop_rays, rook_rays};
use crankshaft::square::Square;

#[test]
fn discovered_rook_and_bishop_tables_match_raycasts_everywhere() {
    let _ = env_logger::try_init();
    let tables = MagicTables::build(MagicsBackend::Discovered {
        base_seed: 0x0ff1_ce,
        computer: MagicComputer::SingleThreaded,
    })
    .unwrap();

    for i in 0..64u8 {
        let sq = Square(i);

        let rmask = rook_mask(sq);
        for k in 0..(1u32 << rmask.popcount()) {
            let blockers = permute_mask(k, rmask);
            assert_eq!(tables.rook_attacks(sq, blockers), rook_rays(sq, blockers));
        }

        let bmask = bishop_mask(sq);
        for k in 0..(1u32 << bmask.popcount()) {
            let blockers = permute_mask(k, bmask);
            assert_eq!(tables.bishop_attacks(sq, blockers), bishop_rays(sq, blockers));
        }
    }
}

#[test]
fn queen_attacks_are_the_union_of_rook_and_bishop() {
    let tables = MagicTables::build(MagicsBackend::Discovered {
        base_seed: 0xface_feed,
        computer: MagicComputer::SingleThreaded,
    })
    .unwrap();

    let occ = crankshaft::bitboard::Bitboard(0x0000_2418_0000_0000);
    for i in 0..64u8 {
        let sq = Square(i);
        assert_eq!(
            tables.queen_attacks(sq, occ),
            tables.rook_attacks(sq, occ) | tables.bishop_attacks(sq, occ)
        );
    }
}
