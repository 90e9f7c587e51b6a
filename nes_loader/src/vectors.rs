//! Reads the fixed hardware vectors back out of the projected address
//! space and turns them into named entry points.
//!
//! Resolution runs strictly after PRG placements have been applied: the
//! word read capability is over the destination store, never the image.

use strum_macros::Display;

use crate::layout::{IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};

/// The three fixed hardware vectors, in table order.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Vector {
    /// Non maskable interrupt, slot at $FFFA.
    #[strum(serialize = "NMI")]
    Nmi,

    /// Power on/reset, slot at $FFFC.
    #[strum(serialize = "RESET")]
    Reset,

    /// Maskable interrupt, slot at $FFFE.
    #[strum(serialize = "IRQ")]
    Irq,
}

impl Vector {
    /// Address of this vector's 2 byte little endian slot.
    #[must_use]
    pub fn address(self) -> u16 {
        match self {
            Vector::Nmi => NMI_VECTOR,
            Vector::Reset => RESET_VECTOR,
            Vector::Irq => IRQ_VECTOR,
        }
    }
}

/// A resolved entry point: where a vector's slot pointed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryPoint {
    /// Which vector this came from.
    pub vector: Vector,

    /// The address the slot held.
    pub address: u16,
}

/// Resolves all three vectors through `read_word`, a little endian word
/// read over the destination address space.
pub fn resolve<F: Fn(u16) -> u16>(read_word: F) -> [EntryPoint; 3] {
    [Vector::Nmi, Vector::Reset, Vector::Irq].map(|vector| EntryPoint {
        vector,
        address: read_word(vector.address()),
    })
}

/// The program's declared execution entry point: wherever RESET points.
pub fn entry_point<F: Fn(u16) -> u16>(read_word: F) -> u16 {
    read_word(Vector::Reset.address())
}
