//! Catalog of cartridge mapper boards: display names plus the load time
//! bank placement policy each board's fixed wiring implies.
//!
//! Runtime bank switching is out of scope; a policy only says which pages
//! are visible in the PRG/CHR windows at power on.

use strum_macros::{Display, EnumIter};

/// Highest mapper id this catalog knows about.
pub const MAPPER_LAST: u8 = 91;

/// Sentinel name for mapper ids past the end of the catalog.
pub const MAPPER_NOT_SUPPORTED: &str = "Not supported";

/// `BankPolicy` is the closed set of placement strategies.
#[derive(Clone, Copy, Debug, Display, EnumIter, PartialEq, Eq)]
pub enum BankPolicy {
    /// First PRG page at $8000, last PRG page at $C000. The default for
    /// most boards and the fallback for unknown mapper ids.
    FirstLast16k,

    /// The last PRG page mapped into both halves of the PRG window.
    LastLast16k,

    /// First PRG page at $8000, second PRG page at $C000.
    FirstSecond16k,

    /// 8 KiB units: the first at $8000, the third from last at $A000,
    /// plus the last full 16 KiB page at $C000 (MMC2 wiring).
    Mixed8k,

    /// The last 8 KiB unit pinned into all four quarters of the PRG
    /// window.
    LastFour8k,
}

/// Returns the display name for a mapper id. Ids above [`MAPPER_LAST`]
/// return the [`MAPPER_NOT_SUPPORTED`] sentinel.
#[must_use]
pub fn name(mapper: u8) -> &'static str {
    match mapper {
        0 => "None",
        1 => "Nintendo MMC1",
        2 => "UNROM switch",
        3 => "CNROM switch",
        4 => "Nintendo MMC3",
        5 => "Nintendo MMC5",
        6 => "FFE F4xxx",
        7 => "AOROM switch",
        8 => "FFE F3xxx",
        9 => "Nintendo MMC2",
        10 => "Nintendo MMC4",
        11 => "Color Dreams",
        12 => "FFE F6xxx",
        15 => "100-in-1 switch",
        16 => "Bandai",
        17 => "FFE F8xxx",
        18 => "Jaleco SS8806",
        19 => "Namcot 106",
        20 => "Famicom Disk System",
        21 => "Konami VRC4",
        22 => "Konami VRC2 type A",
        23 => "Konami VRC2 type B",
        24 => "Konami VRC6",
        25 => "Konami VRC4 type B",
        32 => "Irem G-101",
        33 => "Taito TC0190/TC0350",
        34 => "Nina-1",
        64 => "Tengen RAMBO-1",
        65 => "Irem H-3001",
        66 => "GNROM switch",
        68 => "Sunsoft Mapper 4",
        69 => "Sunsoft FME-7",
        71 => "Camerica",
        78 => "Irem 74HC161/32",
        91 => "HK-SF3",
        m if m > MAPPER_LAST => MAPPER_NOT_SUPPORTED,
        _ => "Unknown",
    }
}

/// Returns the placement policy for a mapper id, or `None` when the id has
/// no catalog entry. Callers fall back to [`BankPolicy::FirstLast16k`] on
/// `None` and surface the id as a warning; loading still proceeds.
#[must_use]
pub fn policy(mapper: u8) -> Option<BankPolicy> {
    match mapper {
        0 | 1 | 2 | 3 | 4 | 5 | 6 | 10 | 16 | 17 | 18 | 19 | 21 | 22 | 23 | 24 | 32 | 33 | 65
        | 66 | 68 | 69 | 71 | 78 => Some(BankPolicy::FirstLast16k),
        91 => Some(BankPolicy::LastLast16k),
        7 | 8 | 11 | 15 | 34 => Some(BankPolicy::FirstSecond16k),
        9 => Some(BankPolicy::Mixed8k),
        64 => Some(BankPolicy::LastFour8k),
        _ => None,
    }
}
