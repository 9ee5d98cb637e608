//! The address bus: decodes a 16-bit address into RAM, PPU registers, APU
//! registers, cartridge SRAM, or the mapper, per §4.E. Modeled as a trait
//! (`Bus`) rather than the teacher's single concrete `Bus` struct, so the
//! CPU core can be handed anything that answers `read_byte`/`write_byte` —
//! the teacher's own split between `cpu-6502`'s generic core and `nes-core`'s
//! concrete wiring points the same way, just without the trait boundary
//! made explicit.

mod apu_regs;
mod ppu_regs;

pub use apu_regs::ApuRegs;
pub use ppu_regs::PpuRegs;

use std::cell::RefCell;
use std::rc::Rc;

use crate::constants::memory_range;
use crate::mapper::{CartridgeMapper, Mapper};

/// The contract the CPU core depends on (§6): sixteen address lines, eight
/// data lines, and a `peek` flag so trace tooling can read without
/// triggering read-side-effects (PPU $2002's VBlank clear, primarily).
pub trait Bus {
    fn read_byte(&mut self, addr: u16, peek: bool) -> u8;
    fn write_byte(&mut self, addr: u16, value: u8);

    /// Little-endian 16-bit read built from two `read_byte` calls, most
    /// often used to fetch absolute/indirect operands and interrupt
    /// vectors. Non-peeking by default; addressing code that must not
    /// trigger side effects calls `read_byte` twice itself instead.
    fn read_u16(&mut self, addr: u16) -> u16 {
        let lo = self.read_byte(addr, false) as u16;
        let hi = self.read_byte(addr.wrapping_add(1), false) as u16;
        (hi << 8) | lo
    }
}

pub type SharedBus = Rc<RefCell<dyn Bus>>;

/// The NES's own address decode: 2 KiB of mirrored work RAM, PPU/APU
/// register windows, cartridge SRAM, and the mapper for everything from
/// $8000 up.
pub struct NesBus {
    ram: [u8; 0x0800],
    sram: [u8; 0x2000],
    ppu: PpuRegs,
    apu: ApuRegs,
    mapper: CartridgeMapper,
}

impl NesBus {
    pub fn new(mapper: CartridgeMapper) -> NesBus {
        NesBus {
            ram: [0; 0x0800],
            sram: [0; 0x2000],
            ppu: PpuRegs::new(),
            apu: ApuRegs::new(),
            mapper,
        }
    }

    pub fn new_shared(mapper: CartridgeMapper) -> Rc<RefCell<NesBus>> {
        Rc::new(RefCell::new(NesBus::new(mapper)))
    }

    pub fn mapper(&self) -> &CartridgeMapper {
        &self.mapper
    }

    pub fn mapper_mut(&mut self) -> &mut CartridgeMapper {
        &mut self.mapper
    }
}

impl Bus for NesBus {
    fn read_byte(&mut self, addr: u16, peek: bool) -> u8 {
        match addr {
            a if memory_range::RAM.min <= a && a <= memory_range::RAM.max => {
                self.ram[(a & 0x07ff) as usize]
            }
            a if memory_range::PPU_REGISTERS.min <= a && a <= memory_range::PPU_MIRRORS.max => {
                self.ppu.read(a & 0x2007, peek)
            }
            a if memory_range::APU_AND_IO_REGISTERS.min <= a
                && a <= memory_range::APU_AND_IO_REGISTERS.max =>
            {
                self.apu.read(a, peek)
            }
            a if memory_range::DISABLED_APU_IO_FEATURES.min <= a
                && a <= memory_range::DISABLED_APU_IO_FEATURES.max =>
            {
                log::trace!("open-bus read at ${a:04x} (disabled APU/IO test-mode range)");
                0
            }
            a if memory_range::CARTRIDGE_EXPANSION.min <= a
                && a <= memory_range::CARTRIDGE_EXPANSION.max =>
            {
                log::trace!("open-bus read at ${a:04x} (cartridge expansion, unclaimed)");
                0
            }
            a if memory_range::SRAM.min <= a && a <= memory_range::SRAM.max => {
                self.sram[(a - memory_range::SRAM.min) as usize]
            }
            a => self.mapper.read_prg(a, peek),
        }
    }

    fn write_byte(&mut self, addr: u16, value: u8) {
        match addr {
            a if memory_range::RAM.min <= a && a <= memory_range::RAM.max => {
                self.ram[(a & 0x07ff) as usize] = value;
            }
            a if memory_range::PPU_REGISTERS.min <= a && a <= memory_range::PPU_MIRRORS.max => {
                self.ppu.write(a & 0x2007, value);
            }
            a if memory_range::APU_AND_IO_REGISTERS.min <= a
                && a <= memory_range::APU_AND_IO_REGISTERS.max =>
            {
                self.apu.write(a, value);
            }
            a if memory_range::SRAM.min <= a && a <= memory_range::SRAM.max => {
                self.sram[(a - memory_range::SRAM.min) as usize] = value;
            }
            a if memory_range::DISABLED_APU_IO_FEATURES.min <= a
                && a <= memory_range::CARTRIDGE_EXPANSION.max =>
            {
                log::trace!("dropped write of 0x{value:02x} at ${a:04x} (unclaimed region)");
            }
            a => self.mapper.write_prg(a, value),
        }
    }
}
