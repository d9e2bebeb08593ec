//! Bootstrapping a magic table from an externally supplied array of
//! 64-bit multipliers, rather than running discovery.
//!
//! The external interface (§6) calls for "a pair of length-64 arrays of
//! 64-bit unsigned integers" as the sole binary artefact this crate
//! depends on. That artefact is only valid if every entry is a genuine
//! collision-free multiplier for its square's mask — verifying a constant
//! is exactly `find_magic_for_square` with `max_iters = 1` and a generator
//! that replays the supplied value instead of drawing a new candidate.
//! This module is that bootstrap path, independent of where the caller's
//! 64-entry array ultimately comes from.

use crate::error::MagicError;
use crate::magic::discovery::verify_precomputed;
use crate::magic::masks::{bishop_mask, rook_mask};
use crate::magic::Magic;
use crate::rays::{bishop_rays, rook_rays};
use crate::square::Square;

/// Verifies and installs a caller-supplied array of 64 rook magics.
pub fn install_rook_magics(magics: [u64; 64]) -> Result<Vec<Magic>, MagicError> {
    (0..64u8)
        .map(|i| verify_precomputed(Square(i), rook_mask, rook_rays, magics[i as usize]))
        .collect()
}

/// Verifies and installs a caller-supplied array of 64 bishop magics.
pub fn install_bishop_magics(magics: [u64; 64]) -> Result<Vec<Magic>, MagicError> {
    (0..64u8)
        .map(|i| verify_precomputed(Square(i), bishop_mask, bishop_rays, magics[i as usize]))
        .collect()
}
