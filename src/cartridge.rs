//! iNES header parsing. Cartridge loading sits just outside the documented
//! scope, but something has to turn a ROM file into the PRG/CHR bytes the
//! mapper interface consumes, and the iNES layout is small enough to parse
//! without dragging in any out-of-scope machinery (no NES 2.0, no
//! PlayChoice, no VS Unisystem handling beyond recording the flag).
//!
//! https://wiki.nesdev.com/w/index.php/INES

use crate::error::MapperError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirroring {
    Horizontal,
    Vertical,
    FourScreen,
}

struct Byte {
    value: u8,
}

impl Byte {
    /// Get the bit where 0 is the least significant bit, and 7 is the most.
    fn bit(&self, n: u8) -> bool {
        (0b0000_0001 << n) & self.value != 0
    }
}

/// A parsed iNES file: header fields plus the raw PRG/CHR banks, ready to
/// hand to a [`crate::mapper::CartridgeMapper`].
#[derive(Debug, Clone)]
pub struct Cartridge {
    pub prg_rom: Vec<u8>,
    pub chr_rom: Vec<u8>,
    pub mapper_number: u8,
    pub mirroring: Mirroring,
    pub battery_backed: bool,
    /// CHR bank count of zero means the board uses CHR RAM instead of ROM;
    /// callers that need writable pattern tables should check this.
    pub uses_chr_ram: bool,
}

impl Cartridge {
    /// Parse a complete iNES file already read into memory. Trainers are
    /// skipped (consumed from the stream but not retained, matching the
    /// teacher's original handling); PlayChoice and title data past the end
    /// of CHR are ignored entirely.
    pub fn from_ines_bytes(bytes: &[u8]) -> Result<Cartridge, MapperError> {
        if bytes.len() < 16 {
            return Err(MapperError::InvalidHeader);
        }
        if bytes[0..4] != [0x4e, 0x45, 0x53, 0x1a] {
            return Err(MapperError::InvalidHeader);
        }

        let prg_rom_banks = bytes[4] as usize;
        let chr_rom_banks = bytes[5] as usize;

        let flag6 = Byte { value: bytes[6] };
        let flag7 = Byte { value: bytes[7] };

        let four_screen = flag6.bit(3);
        let mirroring = if four_screen {
            Mirroring::FourScreen
        } else if flag6.bit(0) {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        };
        let battery_backed = flag6.bit(1);
        let has_trainer = flag6.bit(2);

        let nes_2_0 = flag7.bit(3) && !flag7.bit(2);
        let mapper_lower = flag6.value >> 4;
        let mapper_upper = if nes_2_0 { 0 } else { flag7.value & 0b1111_0000 };
        let mapper_number = mapper_upper | mapper_lower;

        let mut offset = 16usize;
        if has_trainer {
            offset += 512;
        }

        let prg_len = prg_rom_banks * 16 * 1024;
        let chr_len = chr_rom_banks * 8 * 1024;

        let prg_end = offset + prg_len;
        if bytes.len() < prg_end {
            return Err(MapperError::TruncatedRom {
                expected: prg_end,
                actual: bytes.len(),
            });
        }
        let prg_rom = bytes[offset..prg_end].to_vec();

        let chr_end = prg_end + chr_len;
        let chr_rom = if chr_len == 0 {
            Vec::new()
        } else {
            if bytes.len() < chr_end {
                return Err(MapperError::TruncatedRom {
                    expected: chr_end,
                    actual: bytes.len(),
                });
            }
            bytes[prg_end..chr_end].to_vec()
        };

        Ok(Cartridge {
            prg_rom,
            chr_rom,
            mapper_number,
            mirroring,
            battery_backed,
            uses_chr_ram: chr_rom_banks == 0,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn header(prg_banks: u8, chr_banks: u8, flag6: u8, flag7: u8) -> Vec<u8> {
        let mut h = vec![0x4e, 0x45, 0x53, 0x1a, prg_banks, chr_banks, flag6, flag7];
        h.resize(16, 0);
        h
    }

    #[test]
    fn rejects_bad_magic() {
        let bytes = vec![0u8; 32];
        assert_eq!(Cartridge::from_ines_bytes(&bytes), Err(MapperError::InvalidHeader));
    }

    #[test]
    fn rejects_missing_magic_equality_on_short_input() {
        assert!(Cartridge::from_ines_bytes(&[0x4e, 0x45]).is_err());
    }

    #[test]
    fn parses_nrom_with_one_prg_bank() {
        let mut bytes = header(1, 1, 0b0000_0000, 0);
        bytes.extend(vec![0xaa; 16 * 1024]);
        bytes.extend(vec![0xbb; 8 * 1024]);

        let cart = Cartridge::from_ines_bytes(&bytes).unwrap();
        assert_eq!(cart.prg_rom.len(), 16 * 1024);
        assert_eq!(cart.chr_rom.len(), 8 * 1024);
        assert_eq!(cart.mapper_number, 0);
        assert_eq!(cart.mirroring, Mirroring::Horizontal);
        assert!(!cart.uses_chr_ram);
    }

    #[test]
    fn decodes_mapper_number_from_both_nibbles() {
        // MMC1 is mapper 1: lower nibble of flag6 = 0001, flag7 upper = 0000.
        let mut bytes = header(1, 1, 0b0001_0000, 0b0000_0000);
        bytes.extend(vec![0; 16 * 1024]);
        bytes.extend(vec![0; 8 * 1024]);
        assert_eq!(Cartridge::from_ines_bytes(&bytes).unwrap().mapper_number, 1);

        // MMC3 is mapper 4: flag7 upper nibble contributes 0.
        let mut bytes = header(1, 1, 0b0100_0000, 0b0000_0000);
        bytes.extend(vec![0; 16 * 1024]);
        bytes.extend(vec![0; 8 * 1024]);
        assert_eq!(Cartridge::from_ines_bytes(&bytes).unwrap().mapper_number, 4);
    }

    #[test]
    fn skips_trainer_before_prg() {
        let mut bytes = header(1, 0, 0b0000_0100, 0);
        bytes.extend(vec![0xee; 512]);
        bytes.extend(vec![0x42; 16 * 1024]);
        let cart = Cartridge::from_ines_bytes(&bytes).unwrap();
        assert_eq!(cart.prg_rom[0], 0x42);
        assert!(cart.uses_chr_ram);
    }

    #[test]
    fn truncated_rom_is_an_error() {
        let mut bytes = header(2, 0, 0, 0);
        bytes.extend(vec![0u8; 16 * 1024]); // only one of two promised banks
        assert!(matches!(
            Cartridge::from_ines_bytes(&bytes),
            Err(MapperError::TruncatedRom { .. })
        ));
    }
}
