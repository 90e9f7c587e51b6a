//! Human readable summary of a parsed image: the header fields plus the
//! resolved mapper, shaped for display.

use std::fmt::{self, Display};

use strum_macros::Display as StrumDisplay;

use crate::mappers;
use crate::Header;

/// Nametable mirroring declared by the header.
#[derive(Clone, Copy, Debug, StrumDisplay, PartialEq, Eq)]
pub enum Mirroring {
    /// Bit 0 of control byte 0 clear.
    #[strum(serialize = "horizontal")]
    Horizontal,

    /// Bit 0 of control byte 0 set.
    #[strum(serialize = "vertical")]
    Vertical,
}

/// Fixed shape summary record for one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    /// False when any reserved header byte is non zero.
    pub valid_header: bool,

    /// 16 KiB PRG-ROM page count.
    pub prg_pages: u8,

    /// 8 KiB CHR-ROM page count.
    pub chr_pages: u8,

    /// Declared nametable mirroring.
    pub mirroring: Mirroring,

    /// Battery backed SRAM present.
    pub sram: bool,

    /// 512 byte trainer present.
    pub trainer: bool,

    /// Four screen VRAM layout.
    pub four_screen: bool,

    /// The resolved mapper id.
    pub mapper: u8,

    /// Display name for the mapper.
    pub mapper_name: &'static str,
}

/// Projects a header into a [`Description`]. No I/O and no mutation; the
/// record reflects the header exactly as passed in.
#[must_use]
pub fn describe(header: &Header) -> Description {
    Description {
        valid_header: !header.is_corrupt(),
        prg_pages: header.prg_pages,
        chr_pages: header.chr_pages,
        mirroring: if header.vertical_mirroring() {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        },
        sram: header.sram(),
        trainer: header.trainer(),
        four_screen: header.four_screen(),
        mapper: header.mapper(),
        mapper_name: mappers::name(header.mapper()),
    }
}

fn yes_no(v: bool) -> &'static str {
    if v {
        "yes"
    } else {
        "no"
    }
}

impl Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ROM information")?;
        writeln!(f, "---------------")?;
        writeln!(
            f,
            "Valid image header      : {}",
            yes_no(self.valid_header)
        )?;
        writeln!(f, "16K PRG-ROM page count  : {}", self.prg_pages)?;
        writeln!(f, "8K CHR-ROM page count   : {}", self.chr_pages)?;
        writeln!(f, "Mirroring               : {}", self.mirroring)?;
        writeln!(f, "SRAM enabled            : {}", yes_no(self.sram))?;
        writeln!(f, "512-byte trainer        : {}", yes_no(self.trainer))?;
        writeln!(
            f,
            "Four screen VRAM layout : {}",
            yes_no(self.four_screen)
        )?;
        write!(
            f,
            "Mapper                  : {} (Mapper #{})",
            self.mapper_name, self.mapper
        )
    }
}
