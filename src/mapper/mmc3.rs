//! Mapper 4: MMC3. Eight 8 KiB PRG/CHR "slots"; a command/data register
//! pair at $8000/$8001 selects which slot the next $8001 write updates, and
//! a four-register IRQ unit at $C000/$C001/$E000/$E001 counts PPU
//! scanlines via an external clock the PPU side of the bus calls once per
//! scanline. Register map and the scanline-counter framing are grounded on
//! `original_source/nes/mapper_mmc3.go`; as with MMC1 the Go port itself
//! only hard-wires bank 0/1/last-1/last and never consults the command
//! register, so the actual bank-select and IRQ logic here follows the
//! documentation the port's comment block was transcribed from.

use super::Mapper;
use crate::cartridge::{Cartridge, Mirroring};

const BANK_SIZE: usize = 8 * 1024;

pub struct Mmc3 {
    prg_rom: Vec<u8>,
    prg_banks: usize, // count of 8 KiB banks

    bank_select: u8, // last value written to $8000
    prg_bank_regs: [u8; 2],
    mirroring: Mirroring,

    irq_latch: u8,
    irq_counter: u8,
    irq_enabled: bool,
    irq_pending: bool,
    irq_reload: bool,
}

impl Mmc3 {
    pub fn new(cartridge: Cartridge) -> Mmc3 {
        let prg_banks = (cartridge.prg_rom.len() / BANK_SIZE).max(2);
        Mmc3 {
            prg_rom: cartridge.prg_rom,
            prg_banks,
            bank_select: 0,
            prg_bank_regs: [0, 1],
            mirroring: cartridge.mirroring,
            irq_latch: 0,
            irq_counter: 0,
            irq_enabled: false,
            irq_pending: false,
            irq_reload: false,
        }
    }

    fn prg_mode_swaps_c000(&self) -> bool {
        self.bank_select & 0b0100_0000 != 0
    }

    fn bank(&self, bank: usize) -> usize {
        (bank % self.prg_banks) * BANK_SIZE
    }

    fn read_bank_slot(&self, slot: usize) -> usize {
        // Slots 0,1 (R6,R7) are the switchable ones, selected by
        // $8001 command numbers 6 and 7. Slots 2,3 are hard-wired to the
        // last two banks unless bit 6 of $8000 swaps which pair is fixed.
        let last = self.prg_banks - 1;
        if self.prg_mode_swaps_c000() {
            match slot {
                0 => self.bank(last - 1),
                1 => self.bank(self.prg_bank_regs[1] as usize),
                2 => self.bank(self.prg_bank_regs[0] as usize),
                _ => self.bank(last),
            }
        } else {
            match slot {
                0 => self.bank(self.prg_bank_regs[0] as usize),
                1 => self.bank(self.prg_bank_regs[1] as usize),
                2 => self.bank(last - 1),
                _ => self.bank(last),
            }
        }
    }
}

impl Mapper for Mmc3 {
    fn read_prg(&self, addr: u16, _peek: bool) -> u8 {
        let slot = ((addr - 0x8000) / BANK_SIZE as u16) as usize;
        let offset = (addr - 0x8000) as usize % BANK_SIZE;
        self.prg_rom
            .get(self.read_bank_slot(slot) + offset)
            .copied()
            .unwrap_or(0)
    }

    fn write_prg(&mut self, addr: u16, value: u8) {
        let even = addr % 2 == 0;
        match (addr, even) {
            (0x8000..=0x9fff, true) => self.bank_select = value,
            (0x8000..=0x9fff, false) => {
                let command = self.bank_select & 0b0000_0111;
                if command == 6 {
                    self.prg_bank_regs[0] = value & 0b0011_1111;
                } else if command == 7 {
                    self.prg_bank_regs[1] = value & 0b0011_1111;
                }
                // Commands 0-5 select CHR banks; CHR is out of scope here.
            }
            (0xa000..=0xbfff, true) => {
                self.mirroring = if value & 1 != 0 {
                    Mirroring::Horizontal
                } else {
                    Mirroring::Vertical
                };
            }
            (0xa000..=0xbfff, false) => {} // PRG RAM protect: not modeled.
            (0xc000..=0xdfff, true) => self.irq_latch = value,
            (0xc000..=0xdfff, false) => self.irq_reload = true,
            (0xe000..=0xffff, true) => {
                self.irq_enabled = false;
                self.irq_pending = false;
            }
            (0xe000..=0xffff, false) => self.irq_enabled = true,
            _ => {}
        }
    }

    fn mirroring(&self) -> Mirroring {
        self.mirroring
    }

    fn clock_scanline(&mut self) {
        if self.irq_counter == 0 || self.irq_reload {
            self.irq_counter = self.irq_latch;
            self.irq_reload = false;
        } else {
            self.irq_counter -= 1;
        }
        if self.irq_counter == 0 && self.irq_enabled {
            self.irq_pending = true;
        }
    }

    fn irq_pending(&self) -> bool {
        self.irq_pending
    }

    fn acknowledge_irq(&mut self) {
        self.irq_pending = false;
    }
}
