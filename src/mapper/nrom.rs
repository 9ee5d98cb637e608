//! Mapper 0: no banking at all. One or two 16 KiB PRG banks, wired straight
//! to $8000-$FFFF; a single bank is mirrored so $C000-$FFFF aliases
//! $8000-$BFFF. Grounded on the teacher's `SimpleProgram` cartridge, which
//! is the same "no switching, just wrap" shape over a smaller space.

use super::Mapper;
use crate::cartridge::{Cartridge, Mirroring};

const BANK_SIZE: usize = 16 * 1024;

pub struct Nrom {
    prg_rom: Vec<u8>,
    mirroring: Mirroring,
    /// True when there's only one 16 KiB bank and it must be mirrored.
    single_bank: bool,
}

impl Nrom {
    pub fn new(cartridge: Cartridge) -> Nrom {
        let single_bank = cartridge.prg_rom.len() <= BANK_SIZE;
        Nrom {
            prg_rom: cartridge.prg_rom,
            mirroring: cartridge.mirroring,
            single_bank,
        }
    }
}

impl Mapper for Nrom {
    /// `addr` is always in $8000-$FFFF; the bus owns SRAM ($6000-$7FFF)
    /// directly and never forwards those addresses here.
    fn read_prg(&self, addr: u16, _peek: bool) -> u8 {
        let offset = (addr - 0x8000) as usize;
        let offset = if self.single_bank {
            offset % BANK_SIZE
        } else {
            offset
        };
        self.prg_rom.get(offset).copied().unwrap_or(0)
    }

    fn write_prg(&mut self, _addr: u16, _value: u8) {
        // No bank register: NROM ignores writes into PRG space entirely.
    }

    fn mirroring(&self) -> Mirroring {
        self.mirroring
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn cart(prg: Vec<u8>) -> Cartridge {
        Cartridge {
            prg_rom: prg,
            chr_rom: Vec::new(),
            mapper_number: 0,
            mirroring: Mirroring::Vertical,
            battery_backed: false,
            uses_chr_ram: true,
        }
    }

    #[test]
    fn single_bank_is_mirrored_at_c000() {
        let mut prg = vec![0u8; BANK_SIZE];
        prg[0] = 0x42;
        prg[BANK_SIZE - 1] = 0x99;
        let nrom = Nrom::new(cart(prg));

        assert_eq!(nrom.read_prg(0x8000, false), 0x42);
        assert_eq!(nrom.read_prg(0xc000, false), 0x42);
        assert_eq!(nrom.read_prg(0xffff, false), 0x99);
        assert_eq!(nrom.read_prg(0xbfff, false), 0x99);
    }

    #[test]
    fn double_bank_is_not_mirrored() {
        let mut prg = vec![0u8; BANK_SIZE * 2];
        prg[0] = 0x11;
        prg[BANK_SIZE] = 0x22;
        let nrom = Nrom::new(cart(prg));

        assert_eq!(nrom.read_prg(0x8000, false), 0x11);
        assert_eq!(nrom.read_prg(0xc000, false), 0x22);
    }

    #[test]
    fn writes_to_prg_rom_are_ignored() {
        let mut nrom = Nrom::new(cart(vec![0u8; BANK_SIZE]));
        nrom.write_prg(0x8000, 0xff);
        assert_eq!(nrom.read_prg(0x8000, false), 0);
    }
}
