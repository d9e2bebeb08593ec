//! Installed magic tables, wrapped in a `OnceLock` for a write-once,
//! read-many global handle.
//!
//! Grounded on the teacher's `MagicHelper`, which is installed once behind
//! `lazy_static!` and never mutated after. `OnceLock` is the `lazy_static`
//! macro's modern std replacement for exactly this "late-initialised
//! immutable global" pattern (§5 of the expanded spec calls this out
//! explicitly).

use std::sync::OnceLock;

use crate::bitboard::Bitboard;
use crate::error::MagicError;
use crate::magic::discovery::{discover_all_parallel, discover_all_sequential};
use crate::magic::masks::{bishop_mask, rook_mask};
use crate::magic::precomputed::{install_bishop_magics, install_rook_magics};
use crate::magic::Magic;
use crate::queue::WorkQueue;
use crate::rays::{bishop_rays, rook_rays};
use crate::square::Square;

/// The two variation points for how a `MagicTables` gets built, mirroring
/// the original's `Magics` (this enum) crossed with `MagicComputer`
/// (`MagicComputer` below) — "a capability interface with two variants per
/// dimension" rather than virtual dispatch.
pub enum MagicsBackend<'a> {
    /// Verify and install a caller-supplied array of magic multipliers.
    Precomputed {
        rook: [u64; 64],
        bishop: [u64; 64],
    },
    /// Run discovery with the given computer.
    Discovered {
        base_seed: u64,
        computer: MagicComputer<'a>,
    },
}

/// Single-threaded vs OS-thread-parallel discovery, mirroring
/// `SimpleMagicComputer`/`ParMagicComputer` in `original_source`.
pub enum MagicComputer<'a> {
    SingleThreaded,
    Parallel(&'a WorkQueue),
}

impl<'a> MagicsBackend<'a> {
    fn build(self) -> Result<(Vec<Magic>, Vec<Magic>), MagicError> {
        match self {
            MagicsBackend::Precomputed { rook, bishop } => {
                Ok((install_rook_magics(rook)?, install_bishop_magics(bishop)?))
            }
            MagicsBackend::Discovered { base_seed, computer } => match computer {
                MagicComputer::SingleThreaded => Ok((
                    discover_all_sequential(base_seed, rook_mask, rook_rays)?,
                    discover_all_sequential(base_seed ^ 1, bishop_mask, bishop_rays)?,
                )),
                MagicComputer::Parallel(queue) => Ok((
                    discover_all_parallel(queue, base_seed, rook_mask, rook_rays)?,
                    discover_all_parallel(queue, base_seed ^ 1, bishop_mask, bishop_rays)?,
                )),
            },
        }
    }
}

/// Installed rook + bishop magic tables, indexed by square.
pub struct MagicTables {
    rook: Vec<Magic>,
    bishop: Vec<Magic>,
}

impl MagicTables {
    pub fn build(backend: MagicsBackend<'_>) -> Result<MagicTables, MagicError> {
        let (rook, bishop) = backend.build()?;
        Ok(MagicTables { rook, bishop })
    }

    #[inline]
    pub fn rook_attacks(&self, sq: Square, occ: Bitboard) -> Bitboard {
        self.rook[sq.0 as usize].attacks(occ)
    }

    #[inline]
    pub fn bishop_attacks(&self, sq: Square, occ: Bitboard) -> Bitboard {
        self.bishop[sq.0 as usize].attacks(occ)
    }

    #[inline]
    pub fn queen_attacks(&self, sq: Square, occ: Bitboard) -> Bitboard {
        self.rook_attacks(sq, occ) | self.bishop_attacks(sq, occ)
    }
}

static MAGICS: OnceLock<MagicTables> = OnceLock::new();

/// Installs the process-wide magic tables if they have not been installed
/// yet; otherwise a no-op. Returns the installed tables either way.
pub fn install(backend: MagicsBackend<'_>) -> Result<&'static MagicTables, MagicError> {
    if let Some(existing) = MAGICS.get() {
        return Ok(existing);
    }
    let built = MagicTables::build(backend)?;
    Ok(MAGICS.get_or_init(|| built))
}

/// Accesses the process-wide magic tables. Panics if `install` has not
/// been called yet — move generation cannot proceed without them, and this
/// mirrors the teacher's own `#[inline(always)]` "fails loudly on
/// precondition violation" style rather than threading a `Result` through
/// every attack lookup.
pub fn installed() -> &'static MagicTables {
    MAGICS
        .get()
        .expect("magic tables accessed before install() was called")
}
