//! The nestest-style trace line formatter from §6: one line per
//! instruction, fields separated by whitespace, used by the regression
//! harness and any host that wants a human-readable disassembly log.
//! Grounded on the teacher's `Flags::trace_string`-adjacent convention
//! (this crate's own [`crate::flags::Flags::trace_string`]) and on the
//! `colored` crate, already in the teacher's dependency table, used here
//! to highlight undocumented opcodes the same way the teacher's CLI tools
//! color their output.

use colored::Colorize;

use super::Cpu;
use crate::opcodes::{self, Mnemonic};

/// One disassembled instruction, ready to render as a trace line.
pub struct TraceLine {
    pub pc: u16,
    pub bytes: Vec<u8>,
    pub mnemonic: Mnemonic,
    pub operand_text: String,
    pub is_undocumented: bool,
}

impl TraceLine {
    /// Read the instruction at `cpu.pc()` via peek reads (`peek = true`),
    /// so building a trace line never clears VBlank or otherwise disturbs
    /// bus state — the distinction §2 requires of any tracer.
    pub fn capture(cpu: &Cpu, bus: &mut dyn crate::bus::Bus) -> TraceLine {
        let pc = cpu.pc();
        let opcode_byte = bus.read_byte(pc, true);
        let entry = opcodes::decode(opcode_byte);
        let mut bytes = vec![opcode_byte];
        for offset in 1..entry.size {
            bytes.push(bus.read_byte(pc.wrapping_add(offset as u16), true));
        }
        let operand_text = disassemble_operand(&bytes, entry.mode);
        TraceLine {
            pc,
            bytes,
            mnemonic: entry.mnemonic,
            operand_text,
            is_undocumented: entry.mnemonic.is_undocumented(),
        }
    }

    /// Format as `PC  hex-bytes  [*]mnemonic operand  A:hh X:hh Y:hh P:hh
    /// SP:hh CYC:ddd SL:ddd flags`. `scanline` is supplied by the caller
    /// since this crate's bus stubs the PPU and never tracks it itself.
    pub fn render(&self, cpu: &Cpu, scanline: i32) -> String {
        let hex_bytes = self
            .bytes
            .iter()
            .map(|b| format!("{:02X}", b))
            .collect::<Vec<_>>()
            .join(" ");
        let marker = if self.is_undocumented { "*" } else { " " };
        format!(
            "{pc:04X}  {bytes:<8}  {marker}{mnemonic} {operand:<27} A:{a:02X} X:{x:02X} Y:{y:02X} P:{p:02X} SP:{sp:02X} CYC:{cyc} SL:{sl} {flags}",
            pc = self.pc,
            bytes = hex_bytes,
            marker = marker,
            mnemonic = self.mnemonic.name(),
            operand = self.operand_text,
            a = cpu.a(),
            x = cpu.x(),
            y = cpu.y(),
            p = cpu.p(),
            sp = cpu.sp(),
            cyc = cpu.cycles(),
            sl = scanline,
            flags = cpu.trace_string(),
        )
    }

    /// Same as [`render`], but with the mnemonic colored when undocumented
    /// — for interactive terminals, not for golden-log comparison.
    pub fn render_colored(&self, cpu: &Cpu, scanline: i32) -> String {
        let line = self.render(cpu, scanline);
        if self.is_undocumented {
            line.yellow().to_string()
        } else {
            line
        }
    }
}

fn disassemble_operand(bytes: &[u8], mode: crate::opcodes::AddressingMode) -> String {
    use crate::opcodes::AddressingMode::*;
    match mode {
        Implied | Accumulator => String::new(),
        Immediate => format!("#${:02X}", bytes.get(1).copied().unwrap_or(0)),
        ZeroPage => format!("${:02X}", bytes.get(1).copied().unwrap_or(0)),
        ZeroPageX => format!("${:02X},X", bytes.get(1).copied().unwrap_or(0)),
        ZeroPageY => format!("${:02X},Y", bytes.get(1).copied().unwrap_or(0)),
        Absolute => format!(
            "${:02X}{:02X}",
            bytes.get(2).copied().unwrap_or(0),
            bytes.get(1).copied().unwrap_or(0)
        ),
        AbsoluteX => format!(
            "${:02X}{:02X},X",
            bytes.get(2).copied().unwrap_or(0),
            bytes.get(1).copied().unwrap_or(0)
        ),
        AbsoluteY => format!(
            "${:02X}{:02X},Y",
            bytes.get(2).copied().unwrap_or(0),
            bytes.get(1).copied().unwrap_or(0)
        ),
        Indirect => format!(
            "(${:02X}{:02X})",
            bytes.get(2).copied().unwrap_or(0),
            bytes.get(1).copied().unwrap_or(0)
        ),
        IndirectX => format!("(${:02X},X)", bytes.get(1).copied().unwrap_or(0)),
        IndirectY => format!("(${:02X}),Y", bytes.get(1).copied().unwrap_or(0)),
        Relative => format!("${:02X}", bytes.get(1).copied().unwrap_or(0)),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bus::NesBus;
    use crate::cartridge::{Cartridge, Mirroring};
    use crate::mapper::CartridgeMapper;

    fn cpu_with_program(program: &[(u16, u8)]) -> (Cpu, std::rc::Rc<std::cell::RefCell<NesBus>>) {
        let cartridge = Cartridge {
            prg_rom: vec![0; 0x8000],
            chr_rom: Vec::new(),
            mapper_number: 0,
            mirroring: Mirroring::Horizontal,
            battery_backed: false,
            uses_chr_ram: true,
        };
        let bus = NesBus::new_shared(CartridgeMapper::new(cartridge).unwrap());
        {
            let mut b = bus.borrow_mut();
            b.write_byte(0xfffc, 0x00);
            b.write_byte(0xfffd, 0x80);
            for &(addr, value) in program {
                b.write_byte(addr, value);
            }
        }
        let cpu = Cpu::new(bus.clone());
        (cpu, bus)
    }

    #[test]
    fn capture_reads_the_operand_bytes_without_mutating_the_bus() {
        let (cpu, bus) = cpu_with_program(&[(0x8000, 0xa9), (0x8001, 0x42)]);
        let mut bus_ref = bus.borrow_mut();
        let line = TraceLine::capture(&cpu, &mut *bus_ref);
        assert_eq!(line.bytes, vec![0xa9, 0x42]);
        assert_eq!(line.mnemonic, Mnemonic::LDA);
        assert!(!line.is_undocumented);
    }

    #[test]
    fn undocumented_opcodes_are_marked_with_an_asterisk() {
        let (cpu, bus) = cpu_with_program(&[(0x8000, 0x03)]); // SLO (indirect,X)
        let mut bus_ref = bus.borrow_mut();
        let line = TraceLine::capture(&cpu, &mut *bus_ref);
        let rendered = line.render(&cpu, 0);
        assert!(rendered.contains('*'));
    }

    #[test]
    fn render_includes_all_register_fields() {
        let (cpu, bus) = cpu_with_program(&[(0x8000, 0xea)]); // NOP
        let mut bus_ref = bus.borrow_mut();
        let line = TraceLine::capture(&cpu, &mut *bus_ref);
        let rendered = line.render(&cpu, 0);
        assert!(rendered.contains("A:00"));
        assert!(rendered.contains("CYC:0"));
        assert!(rendered.contains("SL:0"));
    }
}
