//! Fixed layout of the NES CPU address space plus the iNES source file
//! geometry. Pure data: these tables say where things live, never how they
//! get there.
//!
//! Source file order is fixed: 16 byte header, optional 512 byte trainer,
//! then all PRG pages, then all CHR pages.

/// Size of the iNES header at the start of every image.
pub const HEADER_SIZE: usize = 16;

/// Work RAM.
pub const RAM_START: u32 = 0x0000;
pub const RAM_SIZE: u32 = 0x2000;

/// Memory mapped I/O registers (PPU, pAPU, DMA, joypads).
pub const IOREGS_START: u32 = 0x2000;
pub const IOREGS_SIZE: u32 = 0x2020;

/// Expansion ROM.
pub const EXPROM_START: u32 = 0x4020;
pub const EXPROM_SIZE: u32 = 0x1FE0;

/// Battery backed save RAM.
pub const SRAM_START: u32 = 0x6000;
pub const SRAM_SIZE: u32 = 0x2000;

/// Where a trainer lands when present. Aliases the SRAM window.
pub const TRAINER_START: u32 = 0x7000;
pub const TRAINER_SIZE: u32 = 0x0200;

/// The 32 KiB PRG window all bank placements target.
pub const ROM_START: u32 = 0x8000;
pub const ROM_SIZE: u32 = 0x8000;

/// 16 KiB PRG-ROM page as stored in the image.
pub const PRG_PAGE_SIZE: u32 = 0x4000;

/// 8 KiB CHR-ROM page as stored in the image.
pub const CHR_PAGE_SIZE: u32 = 0x2000;

/// 8 KiB PRG bank for boards wired at half page granularity.
pub const PRG_BANK_8K_SIZE: u32 = 0x2000;

/// Low and high halves of the PRG window for 16 KiB placements.
pub const PRG_BANK_LOW: u32 = ROM_START;
pub const PRG_BANK_HIGH: u32 = ROM_START + PRG_PAGE_SIZE;

/// The four quarter windows for 8 KiB placements.
pub const PRG_BANK_8000: u32 = 0x8000;
pub const PRG_BANK_A000: u32 = 0xA000;
pub const PRG_BANK_C000: u32 = 0xC000;
pub const PRG_BANK_E000: u32 = 0xE000;

/// CHR window base, relative to the separate 8 KiB graphics space.
pub const CHR_BANK_START: u32 = 0x0000;

/// Fixed hardware vector slots, 2 bytes each, little endian.
pub const NMI_VECTOR: u16 = 0xFFFA;
pub const RESET_VECTOR: u16 = 0xFFFC;
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// A named region of the CPU address space a host should create before
/// applying placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Segment name.
    pub name: &'static str,

    /// First address of the region.
    pub base: u32,

    /// Size in bytes.
    pub size: u32,

    /// Whether the region holds executable code.
    pub code: bool,
}

/// The mandatory regions, in creation order. A load that cannot create any
/// of these has no usable address space and must abort.
pub const REGIONS: [Region; 5] = [
    Region {
        name: "RAM",
        base: RAM_START,
        size: RAM_SIZE,
        code: false,
    },
    Region {
        name: "IO_REGS",
        base: IOREGS_START,
        size: IOREGS_SIZE,
        code: false,
    },
    Region {
        name: "SRAM",
        base: SRAM_START,
        size: SRAM_SIZE,
        code: false,
    },
    Region {
        name: "EXP_ROM",
        base: EXPROM_START,
        size: EXPROM_SIZE,
        code: false,
    },
    Region {
        name: "ROM",
        base: ROM_START,
        size: ROM_SIZE,
        code: true,
    },
];

/// The optional trainer region. Only meaningful when the header's trainer
/// flag is set; it aliases the SRAM window either way.
pub const TRAINER_REGION: Region = Region {
    name: "TRAINER",
    base: TRAINER_START,
    size: TRAINER_SIZE,
    code: true,
};

/// Width in bytes of an 8 bit memory mapped register.
pub const IOREG_8: u8 = 1;

/// Width in bytes of a 16 bit memory mapped register.
pub const IOREG_16: u8 = 2;

/// A named memory mapped I/O register, for host side annotation of the
/// IO_REGS region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Register {
    /// Address of the register.
    pub address: u16,

    /// Width in bytes.
    pub size: u8,

    /// Short name suitable for a label.
    pub name: &'static str,

    /// One line description.
    pub description: &'static str,
}

/// Every named I/O register, in address order.
pub const REGISTERS: [Register; 32] = [
    Register {
        address: 0x2000,
        size: IOREG_8,
        name: "PPU_CR_1",
        description: "PPU Control Register #1 (W)",
    },
    Register {
        address: 0x2001,
        size: IOREG_8,
        name: "PPU_CR_2",
        description: "PPU Control Register #2 (W)",
    },
    Register {
        address: 0x2002,
        size: IOREG_8,
        name: "PPU_SR",
        description: "PPU Status Register (R)",
    },
    Register {
        address: 0x2003,
        size: IOREG_8,
        name: "SPR_RAM_AR",
        description: "SPR-RAM Address Register (W)",
    },
    Register {
        address: 0x2004,
        size: IOREG_8,
        name: "SPR_RAM_IOR",
        description: "SPR-RAM I/O Register (W)",
    },
    Register {
        address: 0x2005,
        size: IOREG_8,
        name: "VRAM_AR_1",
        description: "VRAM Address Register #1 (W2)",
    },
    Register {
        address: 0x2006,
        size: IOREG_8,
        name: "VRAM_AR_2",
        description: "VRAM Address Register #2 (W2)",
    },
    Register {
        address: 0x2007,
        size: IOREG_8,
        name: "VRAM_IOR",
        description: "VRAM I/O Register (RW)",
    },
    Register {
        address: 0x4000,
        size: IOREG_8,
        name: "pAPU_P_1_CR",
        description: "pAPU Pulse #1 Control Register (W)",
    },
    Register {
        address: 0x4001,
        size: IOREG_8,
        name: "pAPU_P_1_RCR",
        description: "pAPU Pulse #1 Ramp Control Register (W)",
    },
    Register {
        address: 0x4002,
        size: IOREG_8,
        name: "pAPU_P_1_FTR",
        description: "pAPU Pulse #1 Fine Tune Register (W)",
    },
    Register {
        address: 0x4003,
        size: IOREG_8,
        name: "pAPU_P_1_CTR",
        description: "pAPU Pulse #1 Coarse Tune Register (W)",
    },
    Register {
        address: 0x4004,
        size: IOREG_8,
        name: "pAPU_P_2_CR",
        description: "pAPU Pulse #2 Control Register (W)",
    },
    Register {
        address: 0x4005,
        size: IOREG_8,
        name: "pAPU_P_2_RCR",
        description: "pAPU Pulse #2 Ramp Control Register (W)",
    },
    Register {
        address: 0x4006,
        size: IOREG_8,
        name: "pAPU_P_2_FTR",
        description: "pAPU Pulse #2 Fine Tune Register (W)",
    },
    Register {
        address: 0x4007,
        size: IOREG_8,
        name: "pAPU_P_2_CTR",
        description: "pAPU Pulse #2 Coarse Tune Register (W)",
    },
    Register {
        address: 0x4008,
        size: IOREG_8,
        name: "pAPU_T_CR_1",
        description: "pAPU Triangle Control Register #1 (W)",
    },
    Register {
        address: 0x4009,
        size: IOREG_8,
        name: "pAPU_T_CR_2",
        description: "pAPU Triangle Control Register #2",
    },
    Register {
        address: 0x400A,
        size: IOREG_8,
        name: "pAPU_T_FR_1",
        description: "pAPU Triangle Frequency Register #1 (W)",
    },
    Register {
        address: 0x400B,
        size: IOREG_8,
        name: "pAPU_T_FR_2",
        description: "pAPU Triangle Frequency Register #2 (W)",
    },
    Register {
        address: 0x400C,
        size: IOREG_8,
        name: "pAPU_N_CR_1",
        description: "pAPU Noise Control Register #1 (W)",
    },
    Register {
        address: 0x400D,
        size: IOREG_8,
        name: "Unused",
        description: "Unused Noise Control Register #2",
    },
    Register {
        address: 0x400E,
        size: IOREG_8,
        name: "pAPU_N_FR_1",
        description: "pAPU Noise Frequency Register #1 (W)",
    },
    Register {
        address: 0x400F,
        size: IOREG_8,
        name: "pAPU_N_FR_2",
        description: "pAPU Noise Frequency Register #2 (W)",
    },
    Register {
        address: 0x4010,
        size: IOREG_8,
        name: "pAPU_DM_CR",
        description: "pAPU Delta Modulation Control Register (W)",
    },
    Register {
        address: 0x4011,
        size: IOREG_8,
        name: "pAPU_DM_DAR",
        description: "pAPU Delta Modulation D/A Register (W)",
    },
    Register {
        address: 0x4012,
        size: IOREG_8,
        name: "pAPU_DM_AR",
        description: "pAPU Delta Modulation Address Register (W)",
    },
    Register {
        address: 0x4013,
        size: IOREG_8,
        name: "pAPU_DM_DLR",
        description: "pAPU Delta Modulation Data Length Register (W)",
    },
    Register {
        address: 0x4014,
        size: IOREG_8,
        name: "SPRITE_DMAR",
        description: "Sprite DMA Register (W)",
    },
    Register {
        address: 0x4015,
        size: IOREG_8,
        name: "pAPU_SV_CSR",
        description: "pAPU Sound/Vertical Clock Signal Register (RW)",
    },
    Register {
        address: 0x4016,
        size: IOREG_8,
        name: "Joypad_1",
        description: "Joypad #1 (RW)",
    },
    Register {
        address: 0x4017,
        size: IOREG_8,
        name: "Joypad_2",
        description: "Joypad #2/SOFTCLK (RW)",
    },
];
