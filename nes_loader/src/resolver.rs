//! Computes the ordered set of source to destination placements for an
//! iNES image, keyed off the header's mapper policy.
//!
//! Pure offset arithmetic: nothing here reads the image, so a placement may
//! extend past a truncated file. The host adapter applying the plan decides
//! whether to clip or fail such reads.

use strum_macros::Display;

use crate::layout::{
    CHR_BANK_START, CHR_PAGE_SIZE, HEADER_SIZE, PRG_BANK_8000, PRG_BANK_8K_SIZE, PRG_BANK_A000,
    PRG_BANK_C000, PRG_BANK_E000, PRG_BANK_HIGH, PRG_BANK_LOW, PRG_PAGE_SIZE, TRAINER_SIZE,
    TRAINER_START,
};
use crate::mappers::{self, BankPolicy};
use crate::{Header, Warning};

/// What a placement carries. PRG and trainer placements target the CPU
/// address space; CHR placements target the separate graphics space.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum PlacementKind {
    /// 16 KiB or 8 KiB program bank.
    #[strum(serialize = "PRG-ROM")]
    Prg,

    /// 8 KiB graphics bank.
    #[strum(serialize = "CHR-ROM")]
    Chr,

    /// The 512 byte trainer blob.
    #[strum(serialize = "TRAINER")]
    Trainer,
}

/// One instruction for the host adapter: copy `length` bytes starting at
/// `source_offset` in the image to `dest` in the target address space.
/// Produced once per load and consumed once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// What the bytes are.
    pub kind: PlacementKind,

    /// Byte offset into the source image.
    pub source_offset: u64,

    /// Number of bytes to copy.
    pub length: u32,

    /// First destination address.
    pub dest: u32,
}

/// The resolved plan for one image: placements in application order plus
/// any non fatal conditions hit while resolving.
#[derive(Debug, Default)]
pub struct Layout {
    /// Ordered placements.
    pub placements: Vec<Placement>,

    /// Warnings gathered while resolving.
    pub warnings: Vec<Warning>,
}

/// Resolves the placement plan for a parsed header.
///
/// Bank numbers are 1 based; bank 0 or an empty page count yields no
/// placement for that slot. An unknown mapper id falls back to
/// [`BankPolicy::FirstLast16k`] with an [`Warning::UnsupportedMapper`].
/// A flagged trainer is always placed at $7000; when SRAM is also enabled
/// the alias is reported as [`Warning::TrainerOverlapsSram`] rather than
/// suppressing either region.
#[must_use]
pub fn resolve(header: &Header) -> Layout {
    let mut layout = Layout::default();

    if header.trainer() {
        layout.placements.push(Placement {
            kind: PlacementKind::Trainer,
            source_offset: HEADER_SIZE as u64,
            length: TRAINER_SIZE,
            dest: TRAINER_START,
        });
        if header.sram() {
            layout.warnings.push(Warning::TrainerOverlapsSram);
        }
    }

    let mapper = header.mapper();
    let policy = match mappers::policy(mapper) {
        Some(p) => p,
        None => {
            layout.warnings.push(Warning::UnsupportedMapper { mapper });
            BankPolicy::FirstLast16k
        }
    };

    let last_16k = u32::from(header.prg_pages);
    // The same pages counted in 8 KiB units.
    let last_8k = last_16k * 2;

    match policy {
        BankPolicy::FirstLast16k => {
            layout.placements.extend(prg_16k(header, 1, PRG_BANK_LOW));
            layout
                .placements
                .extend(prg_16k(header, last_16k, PRG_BANK_HIGH));
        }
        BankPolicy::LastLast16k => {
            layout
                .placements
                .extend(prg_16k(header, last_16k, PRG_BANK_LOW));
            layout
                .placements
                .extend(prg_16k(header, last_16k, PRG_BANK_HIGH));
        }
        BankPolicy::FirstSecond16k => {
            layout.placements.extend(prg_16k(header, 1, PRG_BANK_LOW));
            layout.placements.extend(prg_16k(header, 2, PRG_BANK_HIGH));
        }
        BankPolicy::Mixed8k => {
            layout.placements.extend(prg_8k(header, 1, PRG_BANK_8000));
            layout
                .placements
                .extend(prg_8k(header, last_8k.saturating_sub(2), PRG_BANK_A000));
            layout
                .placements
                .extend(prg_16k(header, last_16k, PRG_BANK_C000));
        }
        BankPolicy::LastFour8k => {
            for dest in [PRG_BANK_8000, PRG_BANK_A000, PRG_BANK_C000, PRG_BANK_E000] {
                layout.placements.extend(prg_8k(header, last_8k, dest));
            }
        }
    }

    layout
        .placements
        .extend(chr_8k(header, 1, CHR_BANK_START));

    layout
}

// File offset where PRG data starts: the header plus the trainer when one
// is present.
fn prg_base(header: &Header) -> u64 {
    let trainer = if header.trainer() {
        u64::from(TRAINER_SIZE)
    } else {
        0
    };
    HEADER_SIZE as u64 + trainer
}

/// 16 KiB PRG bank `number` (1 based) placed at `dest`.
fn prg_16k(header: &Header, number: u32, dest: u32) -> Option<Placement> {
    if number == 0 || header.prg_pages == 0 {
        return None;
    }
    Some(Placement {
        kind: PlacementKind::Prg,
        source_offset: prg_base(header) + u64::from(number - 1) * u64::from(PRG_PAGE_SIZE),
        length: PRG_PAGE_SIZE,
        dest,
    })
}

/// 8 KiB PRG bank `number` (1 based, counted in 8 KiB units) placed at
/// `dest`. Same arithmetic as [`prg_16k`] at half the unit size.
fn prg_8k(header: &Header, number: u32, dest: u32) -> Option<Placement> {
    if number == 0 || header.prg_pages == 0 {
        return None;
    }
    Some(Placement {
        kind: PlacementKind::Prg,
        source_offset: prg_base(header) + u64::from(number - 1) * u64::from(PRG_BANK_8K_SIZE),
        length: PRG_BANK_8K_SIZE,
        dest,
    })
}

/// 8 KiB CHR bank `number` (1 based) placed at `dest` in the graphics
/// space. CHR data sits after every PRG page in the file.
fn chr_8k(header: &Header, number: u32, dest: u32) -> Option<Placement> {
    if number == 0 || header.chr_pages == 0 {
        return None;
    }
    Some(Placement {
        kind: PlacementKind::Chr,
        source_offset: prg_base(header)
            + u64::from(header.prg_pages) * u64::from(PRG_PAGE_SIZE)
            + u64::from(number - 1) * u64::from(CHR_PAGE_SIZE),
        length: CHR_PAGE_SIZE,
        dest,
    })
}
