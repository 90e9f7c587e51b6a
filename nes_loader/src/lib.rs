//! `nes_loader` resolves Nintendo Entertainment System cartridge ROM images
//! in the iNES container format into a logical memory map plus an ordered
//! plan for projecting the image's PRG/CHR banks into that map.
//!
//! The crate is the pure core of a loader: it parses (and optionally
//! repairs) the 16 byte header, picks a bank placement policy from the
//! cartridge's mapper id, computes source to destination [`Placement`]
//! records and reads back the hardware vectors through a caller supplied
//! word read. All file and database I/O stays with the caller.

use color_eyre::eyre::{ErrReport, Result};
use thiserror::Error;

pub mod layout;
pub mod mappers;
pub mod resolver;
pub mod vectors;

mod describe;

pub use describe::{describe, Description, Mirroring};
pub use resolver::{resolve, Layout, Placement, PlacementKind};


use layout::HEADER_SIZE;

const SIG_BYTE_0: usize = 0;
const SIG_BYTE_1: usize = 1;
const SIG_BYTE_2: usize = 2;
const SIG_BYTE_3: usize = 3;
const PRG_BYTE: usize = 4;
const CHR_BYTE: usize = 5;
const CONTROL_0_BYTE: usize = 6;
const CONTROL_1_BYTE: usize = 7;
const RAM_BANKS_BYTE: usize = 8;
const RESERVED_BYTE: usize = 9;

const MIRROR_MASK: u8 = 0x01;
const SRAM_MASK: u8 = 0x02;
const TRAINER_MASK: u8 = 0x04;
const FOUR_SCREEN_MASK: u8 = 0x08;
const MAPPER_LOW_MASK: u8 = 0xF0;
const MAPPER_HIGH_MASK: u8 = 0xF0;
const MAPPER_LOW_SHIFT: usize = 4;

const INES_SIG: [u8; 3] = *b"NES";
const INES_TERM: u8 = 0x1A;

// Known filler tag some dump tools stamp over control byte 1 onward.
const FILLER_SIG: &[u8; 8] = b"DiskDude";

/// Display name reported when input is recognized as an iNES image.
pub const FORMAT_NAME: &str = "Nintendo Entertainment System ROM";

/// Processor family a recognized image should be disassembled as.
pub const PROCESSOR: &str = "M6502";

/// The raw 16 byte iNES header record, field for field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Must equal `NES` in a well formed image.
    pub magic: [u8; 3],

    /// Must equal 0x1A in a well formed image.
    pub terminator: u8,

    /// Number of 16 KiB PRG-ROM pages. 0 is legal but unusual.
    pub prg_pages: u8,

    /// Number of 8 KiB CHR-ROM pages. 0 means CHR is RAM backed.
    pub chr_pages: u8,

    /// Mirroring, SRAM, trainer and four screen flags plus the mapper id
    /// low nibble.
    pub control_0: u8,

    /// Mapper id high nibble; low nibble reserved/legacy.
    pub control_1: u8,

    /// Number of 8 KiB RAM banks. Informational only, unused by layout.
    pub ram_banks: u8,

    /// Must be all zero in a well formed header.
    pub reserved: [u8; 7],
}

impl Header {
    /// Parses the first 16 bytes of an image into a `Header`.
    ///
    /// # Errors
    /// Returns [`LoaderError::Truncated`] if fewer than 16 bytes are
    /// supplied. The magic bytes are not checked here; see
    /// [`Header::valid_magic`].
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_SIZE {
            return Err(ErrReport::new(LoaderError::Truncated { len: data.len() }));
        }
        let mut reserved = [0u8; 7];
        reserved.copy_from_slice(&data[RESERVED_BYTE..HEADER_SIZE]);
        Ok(Self {
            magic: [data[SIG_BYTE_0], data[SIG_BYTE_1], data[SIG_BYTE_2]],
            terminator: data[SIG_BYTE_3],
            prg_pages: data[PRG_BYTE],
            chr_pages: data[CHR_BYTE],
            control_0: data[CONTROL_0_BYTE],
            control_1: data[CONTROL_1_BYTE],
            ram_banks: data[RAM_BANKS_BYTE],
            reserved,
        })
    }

    /// Serializes the header back to its 16 byte wire form.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[SIG_BYTE_0..=SIG_BYTE_2].copy_from_slice(&self.magic);
        out[SIG_BYTE_3] = self.terminator;
        out[PRG_BYTE] = self.prg_pages;
        out[CHR_BYTE] = self.chr_pages;
        out[CONTROL_0_BYTE] = self.control_0;
        out[CONTROL_1_BYTE] = self.control_1;
        out[RAM_BANKS_BYTE] = self.ram_banks;
        out[RESERVED_BYTE..HEADER_SIZE].copy_from_slice(&self.reserved);
        out
    }

    /// True iff the magic bytes equal `NES` and the terminator is 0x1A.
    #[must_use]
    pub fn valid_magic(&self) -> bool {
        self.magic == INES_SIG && self.terminator == INES_TERM
    }

    /// True iff any reserved byte is non zero.
    #[must_use]
    pub fn is_corrupt(&self) -> bool {
        self.reserved != [0u8; 7]
    }

    /// True iff the known `DiskDude` filler tag overwrites control byte 1
    /// and the 7 bytes after it.
    #[must_use]
    pub fn has_filler_signature(&self) -> bool {
        let span = [
            self.control_1,
            self.ram_banks,
            self.reserved[0],
            self.reserved[1],
            self.reserved[2],
            self.reserved[3],
            self.reserved[4],
            self.reserved[5],
        ];
        span == *FILLER_SIG
    }

    /// Returns a repaired copy. A header that isn't corrupt comes back
    /// unchanged. Otherwise control byte 1 plus the 8 bytes after it (the
    /// span the filler tag lands on) are zeroed, as is the reserved field,
    /// whether or not the filler tag actually matches. Magic, terminator,
    /// page counts and control byte 0 are left untouched.
    #[must_use]
    pub fn repaired(&self) -> Self {
        if !self.is_corrupt() {
            return *self;
        }
        Self {
            control_1: 0,
            ram_banks: 0,
            reserved: [0u8; 7],
            ..*self
        }
    }

    /// The mapper id: low nibble from the top of control byte 0, high
    /// nibble from the top of control byte 1.
    #[must_use]
    pub fn mapper(&self) -> u8 {
        ((self.control_0 & MAPPER_LOW_MASK) >> MAPPER_LOW_SHIFT) | (self.control_1 & MAPPER_HIGH_MASK)
    }

    /// True when the header declares vertical nametable mirroring.
    #[must_use]
    pub fn vertical_mirroring(&self) -> bool {
        self.control_0 & MIRROR_MASK != 0
    }

    /// True when the cartridge carries battery backed SRAM at $6000.
    #[must_use]
    pub fn sram(&self) -> bool {
        self.control_0 & SRAM_MASK != 0
    }

    /// True when a 512 byte trainer follows the header in the image.
    #[must_use]
    pub fn trainer(&self) -> bool {
        self.control_0 & TRAINER_MASK != 0
    }

    /// True when the cartridge provides a four screen VRAM layout.
    #[must_use]
    pub fn four_screen(&self) -> bool {
        self.control_0 & FOUR_SCREEN_MASK != 0
    }
}

/// `LoaderError` defines the conditions fatal to a load. Everything else
/// degrades to a [`Warning`] alongside a best effort result.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// Fewer bytes than the 16 byte iNES header requires.
    #[error("truncated input: {len} bytes is smaller than the 16 byte iNES header")]
    Truncated {
        /// How many bytes were actually supplied.
        len: usize,
    },

    /// The magic bytes or terminator don't match the iNES signature.
    #[error("not an iNES ROM image (missing NES<EOF> signature)")]
    UnrecognizedFormat,
}

/// Non fatal conditions reported alongside results. A load proceeds with a
/// best effort layout whenever one of these occurs.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// One or more reserved header bytes are non zero.
    #[error("the iNES header appears to be corrupt; the loader may give inaccurate results")]
    CorruptHeader,

    /// The mapper id has no catalog entry; the default placement policy
    /// was used instead.
    #[error("mapper {mapper} is not supported; loading first and last PRG-ROM banks by default")]
    UnsupportedMapper {
        /// The unrecognized mapper id.
        mapper: u8,
    },

    /// The trainer and SRAM windows alias; both were kept.
    #[error("trainer window at $7000-$71FF overlaps the SRAM window")]
    TrainerOverlapsSram,
}

/// `Acceptance` is the positive result of format detection: the fixed
/// display name for the format and the processor family to switch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acceptance {
    /// Display name for the recognized format.
    pub format_name: &'static str,

    /// Instruction set the image should be interpreted with.
    pub processor: &'static str,
}

/// Format detection entry point. Recognizes the input only on the first
/// probe (`n == 0`), when at least a full header is present and the magic
/// bytes check out. Anything past the first four bytes is not inspected.
#[must_use]
pub fn accept(data: &[u8], n: usize) -> Option<Acceptance> {
    if n != 0 || data.len() < HEADER_SIZE {
        return None;
    }
    let Ok(header) = Header::parse(data) else {
        return None;
    };
    if !header.valid_magic() {
        return None;
    }
    Some(Acceptance {
        format_name: FORMAT_NAME,
        processor: PROCESSOR,
    })
}

/// `Image` is everything one load resolves: the header actually used
/// (repaired or not), the ordered placements for the host adapter, the
/// display summary and all warnings gathered along the way.
#[derive(Debug)]
pub struct Image {
    /// The header the layout was resolved against.
    pub header: Header,

    /// Ordered placement plan. Consumed once by the host adapter.
    pub placements: Vec<Placement>,

    /// Fixed shape summary of the header and mapper.
    pub description: Description,

    /// Non fatal conditions from every stage, in occurrence order.
    pub warnings: Vec<Warning>,
}

/// Runs the full synchronous pipeline over one image: parse, validate,
/// optionally repair, resolve placements and describe. Each load owns its
/// own header value for its duration.
///
/// # Errors
/// [`LoaderError::Truncated`] if the input can't hold a header and
/// [`LoaderError::UnrecognizedFormat`] if the signature doesn't match.
/// A corrupt header is not an error; it is reported via
/// [`Warning::CorruptHeader`] and repaired first when `fix_header` is set.
pub fn load(data: &[u8], fix_header: bool) -> Result<Image> {
    let mut header = Header::parse(data)?;
    if !header.valid_magic() {
        return Err(ErrReport::new(LoaderError::UnrecognizedFormat));
    }

    let mut warnings = Vec::new();
    if header.is_corrupt() {
        warnings.push(Warning::CorruptHeader);
        if fix_header {
            header = header.repaired();
        }
    }

    let layout = resolver::resolve(&header);
    let description = describe::describe(&header);
    warnings.extend(layout.warnings);

    Ok(Image {
        header,
        placements: layout.placements,
        description,
        warnings,
    })
}
