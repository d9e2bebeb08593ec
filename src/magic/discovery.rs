//! Magic-multiplier discovery: single-threaded and parallel variants.
//!
//! Grounded on `original_source/src/magic_attacks.h`'s `MagicComputer` /
//! `SimpleMagicComputer` / `ParMagicComputer` split: the computation itself
//! is one routine (`find_magic_for_square`), and the "single-threaded vs
//! parallel" axis is just whether the 64 per-square searches are driven by
//! a plain loop or dispatched onto the work queue (C6).

use log::{debug, warn};

use crate::bitboard::Bitboard;
use crate::error::MagicError;
use crate::magic::Magic;
use crate::prng::Prng;
use crate::queue::WorkQueue;
use crate::square::Square;

const DEFAULT_MAX_ITERS: u32 = 1_000_000_000;

/// Builds blocker subset `k` of `mask` (`0 <= k < 2^popcount(mask)`): the
/// `i`-th set bit of `mask`, in ascending square order, is included in the
/// subset iff bit `i` of `k` is set.
pub fn permute_mask(k: u32, mask: Bitboard) -> Bitboard {
    let mut result = Bitboard::EMPTY;
    let mut remaining = mask;
    let mut i = 0;
    while remaining.is_not_empty() {
        let sq = remaining.first_bit();
        remaining = remaining.clear_first();
        if (k >> i) & 1 != 0 {
            result = result.set_bit(sq);
        }
        i += 1;
    }
    result
}

/// Every subset of `mask` and its ground-truth attack set, indexed by
/// subset number `[0, 2^popcount(mask))`.
fn enumerate_subsets(
    sq: Square,
    mask: Bitboard,
    attacks_fn: impl Fn(Square, Bitboard) -> Bitboard,
) -> Vec<(Bitboard, Bitboard)> {
    let n = mask.popcount();
    (0..(1u32 << n))
        .map(|k| {
            let blockers = permute_mask(k, mask);
            (blockers, attacks_fn(sq, blockers))
        })
        .collect()
}

/// Searches for a collision-free magic multiplier for one square.
///
/// `prng` should be freshly seeded per square (the caller is responsible
/// for that — see `discover_all_sequential`/`discover_all_parallel`) so
/// that discovery is deterministic independent of which worker happens to
/// pick up which square.
pub fn find_magic_for_square(
    sq: Square,
    mask_fn: impl Fn(Square) -> Bitboard,
    attacks_fn: impl Fn(Square, Bitboard) -> Bitboard,
    prng: &mut Prng,
    max_iters: u32,
) -> Result<Magic, MagicError> {
    let mask = mask_fn(sq);
    let n = mask.popcount();
    if !(5..=12).contains(&n) {
        return Err(MagicError::MaskBitsOutOfRange { bits: n });
    }

    debug!("searching for a magic at {sq} (mask has {n} bits, {} subsets)", 1usize << n);

    let subsets = enumerate_subsets(sq, mask, attacks_fn);
    let shift = 64 - n;
    let mut table = vec![Bitboard::EMPTY; 1usize << n];
    let mut filled = vec![false; 1usize << n];

    for attempt in 0..max_iters {
        let candidate = prng.sparse_u64();
        if (candidate.wrapping_mul(mask.0) >> 56).count_ones() < 6 {
            continue;
        }

        table.iter_mut().for_each(|b| *b = Bitboard::EMPTY);
        filled.iter_mut().for_each(|f| *f = false);

        let mut collided = false;
        for &(blockers, attacks) in &subsets {
            let h = ((blockers.0.wrapping_mul(candidate)) >> shift) as usize;
            if filled[h] {
                if table[h] != attacks {
                    collided = true;
                    break;
                }
            } else {
                filled[h] = true;
                table[h] = attacks;
            }
        }

        if !collided {
            debug!("found a magic for {sq} after {} attempt(s)", attempt + 1);
            return Ok(Magic {
                attacks: table,
                mask,
                magic: candidate,
                shift,
            });
        }
    }

    warn!("exhausted {max_iters} attempts without a collision-free magic at {sq}");
    Err(MagicError::MagicNotFound)
}

/// Single-threaded discovery of all 64 per-square magics for one piece
/// family. Each square gets its own PRNG seeded from `base_seed ^ sq`.
pub fn discover_all_sequential(
    base_seed: u64,
    mask_fn: impl Fn(Square) -> Bitboard + Copy,
    attacks_fn: impl Fn(Square, Bitboard) -> Bitboard + Copy,
) -> Result<Vec<Magic>, MagicError> {
    (0..64u8)
        .map(|i| {
            let sq = Square(i);
            let mut prng = Prng::new(base_seed ^ (i as u64).wrapping_add(1));
            find_magic_for_square(sq, mask_fn, attacks_fn, &mut prng, DEFAULT_MAX_ITERS)
        })
        .collect()
}

/// Parallel discovery: dispatches each square's search as an independent
/// work-queue task. Results are reassembled in square order after every
/// future completes.
pub fn discover_all_parallel(
    queue: &WorkQueue,
    base_seed: u64,
    mask_fn: impl Fn(Square) -> Bitboard + Copy + Send + Sync + 'static,
    attacks_fn: impl Fn(Square, Bitboard) -> Bitboard + Copy + Send + Sync + 'static,
) -> Result<Vec<Magic>, MagicError> {
    let handles = queue.for_range(64, move |i| {
        let sq = Square(i as u8);
        let mut prng = Prng::new(base_seed ^ (i as u64).wrapping_add(1));
        find_magic_for_square(sq, mask_fn, attacks_fn, &mut prng, DEFAULT_MAX_ITERS)
    });

    handles.into_iter().map(|h| h.get()).collect()
}

/// Verifies a supplied constant against one square's mask/attacks: used to
/// bootstrap the precomputed table with `max_iters = 1` and a generator
/// that just replays the stored constant.
pub fn verify_precomputed(
    sq: Square,
    mask_fn: impl Fn(Square) -> Bitboard,
    attacks_fn: impl Fn(Square, Bitboard) -> Bitboard,
    magic: u64,
) -> Result<Magic, MagicError> {
    let mask = mask_fn(sq);
    let n = mask.popcount();
    if !(5..=12).contains(&n) {
        return Err(MagicError::MaskBitsOutOfRange { bits: n });
    }
    let subsets = enumerate_subsets(sq, mask, attacks_fn);
    let shift = 64 - n;
    let mut table = vec![Bitboard::EMPTY; 1usize << n];
    let mut filled = vec![false; 1usize << n];

    for &(blockers, attacks) in &subsets {
        let h = ((blockers.0.wrapping_mul(magic)) >> shift) as usize;
        if filled[h] {
            if table[h] != attacks {
                return Err(MagicError::MagicNotFound);
            }
        } else {
            filled[h] = true;
            table[h] = attacks;
        }
    }

    Ok(Magic {
        attacks: table,
        mask,
        magic,
        shift,
    })
}
