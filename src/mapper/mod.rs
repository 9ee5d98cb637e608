//! Bank-switching for the cartridge's PRG space. `CartridgeMapper` is a
//! closed sum over the three supported boards — per the note that "a closed
//! sum scales better when the mapper list is known at build time," which it
//! is here: NROM, MMC1, MMC3 and nothing else.

mod mmc1;
mod mmc3;
mod nrom;

pub use mmc1::Mmc1;
pub use mmc3::Mmc3;
pub use nrom::Nrom;

use crate::cartridge::{Cartridge, Mirroring};
use crate::error::MapperError;

/// What every board exposes to the bus: a `read(addr, peek) / write(addr,
/// value)` pair over $6000-$FFFF, plus the mirroring mode the board (or its
/// solder pads) currently selects.
pub trait Mapper {
    fn read_prg(&self, addr: u16, peek: bool) -> u8;
    fn write_prg(&mut self, addr: u16, value: u8);
    fn mirroring(&self) -> Mirroring;

    /// MMC3's scanline counter needs an external clock from the PPU; boards
    /// that don't have one (NROM, MMC1) take the default no-op.
    fn clock_scanline(&mut self) {}
    fn irq_pending(&self) -> bool {
        false
    }
    fn acknowledge_irq(&mut self) {}
}

pub enum CartridgeMapper {
    Nrom(Nrom),
    Mmc1(Mmc1),
    Mmc3(Mmc3),
}

impl CartridgeMapper {
    pub fn new(cartridge: Cartridge) -> Result<CartridgeMapper, MapperError> {
        match cartridge.mapper_number {
            0 => Ok(CartridgeMapper::Nrom(Nrom::new(cartridge))),
            1 => Ok(CartridgeMapper::Mmc1(Mmc1::new(cartridge))),
            4 => Ok(CartridgeMapper::Mmc3(Mmc3::new(cartridge))),
            other => Err(MapperError::UnsupportedMapper(other)),
        }
    }
}

impl Mapper for CartridgeMapper {
    fn read_prg(&self, addr: u16, peek: bool) -> u8 {
        match self {
            CartridgeMapper::Nrom(m) => m.read_prg(addr, peek),
            CartridgeMapper::Mmc1(m) => m.read_prg(addr, peek),
            CartridgeMapper::Mmc3(m) => m.read_prg(addr, peek),
        }
    }

    fn write_prg(&mut self, addr: u16, value: u8) {
        match self {
            CartridgeMapper::Nrom(m) => m.write_prg(addr, value),
            CartridgeMapper::Mmc1(m) => m.write_prg(addr, value),
            CartridgeMapper::Mmc3(m) => m.write_prg(addr, value),
        }
    }

    fn mirroring(&self) -> Mirroring {
        match self {
            CartridgeMapper::Nrom(m) => m.mirroring(),
            CartridgeMapper::Mmc1(m) => m.mirroring(),
            CartridgeMapper::Mmc3(m) => m.mirroring(),
        }
    }

    fn clock_scanline(&mut self) {
        match self {
            CartridgeMapper::Nrom(m) => m.clock_scanline(),
            CartridgeMapper::Mmc1(m) => m.clock_scanline(),
            CartridgeMapper::Mmc3(m) => m.clock_scanline(),
        }
    }

    fn irq_pending(&self) -> bool {
        match self {
            CartridgeMapper::Nrom(m) => m.irq_pending(),
            CartridgeMapper::Mmc1(m) => m.irq_pending(),
            CartridgeMapper::Mmc3(m) => m.irq_pending(),
        }
    }

    fn acknowledge_irq(&mut self) {
        match self {
            CartridgeMapper::Nrom(m) => m.acknowledge_irq(),
            CartridgeMapper::Mmc1(m) => m.acknowledge_irq(),
            CartridgeMapper::Mmc3(m) => m.acknowledge_irq(),
        }
    }
}
