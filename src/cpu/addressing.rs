//! The Addressing Unit (§4.B): turns an opcode's addressing mode into an
//! effective address, the value at that address (when the instruction
//! reads memory), and whether an index crossed a page boundary. Grounded on
//! the teacher's `get_operand_address`/`get_address_and_maybe_operand`
//! pair, with two deliberate corrections. First, the teacher's
//! `Mode::Indirect` arm does a plain 16-bit read across the pointer, which
//! misses the famous JMP ($xxFF) page-wrap bug; this version reproduces
//! that hardware bug, the high byte fetched from the *same* page as the low
//! byte, wrapping instead of crossing into the next page. Second, the
//! teacher never issues the dummy read real hardware performs at the
//! un-indexed/un-carried address before the final one in the indexed
//! modes; this version adds it, since the bus has real read side effects
//! (open-bus logging, PPU register state) that depend on the exact
//! sequence of reads, not just their count.

use super::Cpu;
use crate::bus::Bus;
use crate::opcodes::AddressingMode;

/// The result of resolving one instruction's operand.
pub struct Operand {
    /// `None` for Implied and Accumulator, which have no memory address.
    pub address: Option<u16>,
    /// The accumulator's value for `Accumulator` mode, the fetched byte for
    /// any mode the opcode table marks `reads_memory`, or 0 otherwise —
    /// callers that write-only (STA, JMP) never look at this field.
    pub value: u8,
    pub page_crossed: bool,
}

fn page_crossed(a: u16, b: u16) -> bool {
    (a & 0xff00) != (b & 0xff00)
}

/// Resolve `mode`'s address (and, for `Accumulator`/memory-reading opcodes,
/// its value), advancing `cpu.pc` past the operand bytes as it goes.
pub fn resolve(cpu: &mut Cpu, bus: &mut dyn Bus, mode: AddressingMode, reads_memory: bool) -> Operand {
    let (address, page_crossed) = resolve_address(cpu, bus, mode);

    let value = if mode == AddressingMode::Accumulator {
        cpu.a
    } else if reads_memory {
        bus.read_byte(address.expect("reads_memory opcode must have an address"), false)
    } else {
        0
    };

    Operand {
        address,
        value,
        page_crossed,
    }
}

fn resolve_address(cpu: &mut Cpu, bus: &mut dyn Bus, mode: AddressingMode) -> (Option<u16>, bool) {
    use AddressingMode::*;
    match mode {
        Implied | Accumulator => (None, false),

        Immediate => {
            let addr = cpu.pc;
            cpu.pc = cpu.pc.wrapping_add(1);
            (Some(addr), false)
        }

        ZeroPage => {
            let addr = cpu.fetch_u8(bus) as u16;
            (Some(addr), false)
        }

        // 6502 bug (relied upon by real games): the index add wraps within
        // the zero page rather than carrying into page 1. Real hardware
        // reads the un-indexed zero-page address first, discards it, then
        // reads the wrapped one; side-effect registers can observe that
        // dummy read, so it is reproduced here rather than skipped.
        ZeroPageX => {
            let base = cpu.fetch_u8(bus);
            bus.read_byte(base as u16, false);
            (Some(base.wrapping_add(cpu.x) as u16), false)
        }
        ZeroPageY => {
            let base = cpu.fetch_u8(bus);
            bus.read_byte(base as u16, false);
            (Some(base.wrapping_add(cpu.y) as u16), false)
        }

        Absolute => (Some(cpu.fetch_u16(bus)), false),

        // The dummy read at the un-carried address happens on every
        // AbsoluteX/Y access, whether or not the index crosses a page —
        // real hardware always reads `base + index` with the carry applied
        // only to the low byte before deciding whether a second cycle is
        // needed.
        AbsoluteX => {
            let base = cpu.fetch_u16(bus);
            let uncarried = (base & 0xff00) | (base as u8).wrapping_add(cpu.x) as u16;
            bus.read_byte(uncarried, false);
            let addr = base.wrapping_add(cpu.x as u16);
            (Some(addr), page_crossed(base, addr))
        }
        AbsoluteY => {
            let base = cpu.fetch_u16(bus);
            let uncarried = (base & 0xff00) | (base as u8).wrapping_add(cpu.y) as u16;
            bus.read_byte(uncarried, false);
            let addr = base.wrapping_add(cpu.y as u16);
            (Some(addr), page_crossed(base, addr))
        }

        // JMP only. Real hardware fetches the low byte at `pointer` and the
        // high byte at `(pointer & 0xFF00) | (pointer + 1 & 0x00FF)` — if
        // the pointer's low byte is $FF, the high-byte fetch wraps to the
        // start of the same page instead of the next one.
        Indirect => {
            let pointer = cpu.fetch_u16(bus);
            let lo = bus.read_byte(pointer, false);
            let hi_addr = (pointer & 0xff00) | (pointer.wrapping_add(1) & 0x00ff);
            let hi = bus.read_byte(hi_addr, false);
            (Some(u16::from_le_bytes([lo, hi])), false)
        }

        IndirectX => {
            let zp = cpu.fetch_u8(bus).wrapping_add(cpu.x);
            let lo = bus.read_byte(zp as u16, false);
            let hi = bus.read_byte(zp.wrapping_add(1) as u16, false);
            (Some(u16::from_le_bytes([lo, hi])), false)
        }

        IndirectY => {
            let zp = cpu.fetch_u8(bus);
            let lo = bus.read_byte(zp as u16, false);
            let hi = bus.read_byte(zp.wrapping_add(1) as u16, false);
            let base = u16::from_le_bytes([lo, hi]);
            let uncarried = (base & 0xff00) | (base as u8).wrapping_add(cpu.y) as u16;
            bus.read_byte(uncarried, false);
            let addr = base.wrapping_add(cpu.y as u16);
            (Some(addr), page_crossed(base, addr))
        }

        Relative => {
            let offset = cpu.fetch_u8(bus) as i8;
            let base = cpu.pc;
            let addr = base.wrapping_add(offset as u16);
            (Some(addr), page_crossed(base, addr))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bus::NesBus;
    use crate::cartridge::{Cartridge, Mirroring};
    use crate::mapper::CartridgeMapper;

    fn test_bus() -> NesBus {
        let cartridge = Cartridge {
            prg_rom: vec![0; 0x8000],
            chr_rom: Vec::new(),
            mapper_number: 0,
            mirroring: Mirroring::Horizontal,
            battery_backed: false,
            uses_chr_ram: true,
        };
        NesBus::new(CartridgeMapper::new(cartridge).unwrap())
    }

    #[test]
    fn jmp_indirect_wraps_within_the_page() {
        let mut bus = test_bus();
        bus.write_byte(0x02ff, 0x00);
        bus.write_byte(0x0200, 0x30); // what a non-buggy read would use
        bus.write_byte(0x0300, 0x40);

        let mut cpu = Cpu::new(std::rc::Rc::new(std::cell::RefCell::new(test_bus())));
        cpu.pc = 0x0000;
        // Pretend the operand bytes ($02FF) are at PC for this unit test by
        // writing them directly and pointing PC there.
        bus.write_byte(0x0000, 0xff);
        bus.write_byte(0x0001, 0x02);

        let (address, _) = resolve_address(&mut cpu, &mut bus, AddressingMode::Indirect);
        assert_eq!(address, Some(0x3000));
    }

    #[test]
    fn zero_page_x_wraps_within_zero_page() {
        let mut bus = test_bus();
        bus.write_byte(0x0000, 0x80);
        let mut cpu = Cpu::new(std::rc::Rc::new(std::cell::RefCell::new(test_bus())));
        cpu.pc = 0x0000;
        cpu.x = 0x90;
        let (address, _) = resolve_address(&mut cpu, &mut bus, AddressingMode::ZeroPageX);
        assert_eq!(address, Some(0x10));
    }

    #[test]
    fn absolute_x_reports_page_cross() {
        let mut bus = test_bus();
        bus.write_byte(0x0000, 0xff);
        bus.write_byte(0x0001, 0x02); // base = $02FF
        let mut cpu = Cpu::new(std::rc::Rc::new(std::cell::RefCell::new(test_bus())));
        cpu.pc = 0x0000;
        cpu.x = 0x01;
        let (address, crossed) = resolve_address(&mut cpu, &mut bus, AddressingMode::AbsoluteX);
        assert_eq!(address, Some(0x0300));
        assert!(crossed);
    }

    /// A `Bus` that just logs every address it is asked to read, so indexed
    /// modes can be checked for the dummy read at the un-carried address
    /// without needing a real side-effect register to observe it.
    struct RecordingBus {
        reads: Vec<u16>,
    }

    impl Bus for RecordingBus {
        fn read_byte(&mut self, addr: u16, _peek: bool) -> u8 {
            self.reads.push(addr);
            0
        }
        fn write_byte(&mut self, _addr: u16, _value: u8) {}
    }

    #[test]
    fn absolute_y_reads_the_uncarried_address_before_the_real_one() {
        // RecordingBus always reads back 0, so the two-byte operand fetch
        // yields base = $0000 and the indexed (and un-carried) address both
        // land on $0001 with Y=1 — the point of the test is the sequence,
        // not the value.
        let mut bus = RecordingBus { reads: Vec::new() };
        let mut cpu = Cpu::new(std::rc::Rc::new(std::cell::RefCell::new(test_bus())));
        cpu.pc = 0x0000;
        cpu.y = 0x01;
        let (address, _) = resolve_address(&mut cpu, &mut bus, AddressingMode::AbsoluteY);
        assert_eq!(address, Some(0x0001));
        // Two operand fetches, then the dummy read at the un-carried
        // address. The real read happens later in `resolve`, not here.
        assert_eq!(bus.reads, vec![0x0000, 0x0001, 0x0001]);
    }

    #[test]
    fn indirect_y_reads_the_uncarried_address_before_the_real_one() {
        let mut bus = test_bus();
        bus.write_byte(0x0000, 0x10); // zero-page pointer operand
        bus.write_byte(0x0010, 0x01); // pointer low byte -> base = $2001
        bus.write_byte(0x0011, 0x20); // pointer high byte
        bus.write_byte(0x2002, 0x99); // what the uncarried dummy read should see

        let mut cpu = Cpu::new(std::rc::Rc::new(std::cell::RefCell::new(test_bus())));
        cpu.pc = 0x0000;
        cpu.y = 0x01;
        let (address, crossed) = resolve_address(&mut cpu, &mut bus, AddressingMode::IndirectY);
        assert_eq!(address, Some(0x2002));
        assert!(!crossed);
    }
}
