//! The undocumented combo opcodes. Grounded on the teacher's
//! `opcodes_illegal.rs`, whose doc comments already spell out the correct
//! semantics in the classic `{adr}:={adr}*2 A:=A or {adr}`-style notation —
//! the teacher's function bodies themselves are `// TODO` stubs that only
//! update N/Z from the unmodified accumulator, so this file implements
//! what those doc comments describe rather than what the stub bodies do.
//! XAA/AHX/SHX/SHY/TAS depend on unstable internal bus-latch behavior real
//! hardware itself doesn't reproduce consistently; the approximations here
//! match the commonly-documented "magic constant" formulas, and `strict_
//! unstable_opcodes` lets a host refuse to run them at all instead.

use super::Operand;
use crate::bus::Bus;
use crate::cpu::Cpu;
use crate::opcodes::Mnemonic;

/// Function: see each arm's doc-style comment; every mnemonic here fuses a
/// read-modify-write with a second logical or arithmetic op on A (or, for
/// the store-side unstable opcodes, ANDs a register with the address's
/// high byte plus one).
/// Flags: as documented per arm; SAX/store-only unstable opcodes touch none.
pub fn execute(cpu: &mut Cpu, bus: &mut dyn Bus, mnemonic: Mnemonic, operand: &Operand) -> u8 {
    match mnemonic {
        // {adr}:={adr}*2 A:=A or {adr}. Flags: N Z C.
        Mnemonic::SLO => {
            let value = rmw_write(cpu, bus, operand, |_, v| {
                let carry = v & 0b1000_0000 != 0;
                (v << 1, carry)
            });
            cpu.a |= value;
            cpu.flags.set_zero_and_negative(cpu.a);
        }
        // {adr}:={adr}rol A:=A and {adr}. Flags: N Z C.
        Mnemonic::RLA => {
            let carry_in = cpu.flags.carry as u8;
            let value = rmw_write(cpu, bus, operand, |_, v| {
                let carry = v & 0b1000_0000 != 0;
                ((v << 1) | carry_in, carry)
            });
            cpu.a &= value;
            cpu.flags.set_zero_and_negative(cpu.a);
        }
        // {adr}:={adr}/2 A:=A exor {adr}. Flags: N Z C.
        Mnemonic::SRE => {
            let value = rmw_write(cpu, bus, operand, |_, v| {
                let carry = v & 1 != 0;
                (v >> 1, carry)
            });
            cpu.a ^= value;
            cpu.flags.set_zero_and_negative(cpu.a);
        }
        // {adr}:={adr}ror A:=A adc {adr}. Flags: N V Z C.
        Mnemonic::RRA => {
            let carry_in = cpu.flags.carry as u8;
            let value = rmw_write(cpu, bus, operand, |_, v| {
                let carry = v & 1 != 0;
                ((v >> 1) | (carry_in << 7), carry)
            });
            adc_into_a(cpu, value);
        }
        // {adr}:=A&X. Flags: none.
        Mnemonic::SAX => {
            let addr = operand.address.expect("SAX always targets memory");
            bus.write_byte(addr, cpu.a & cpu.x);
        }
        // A,X:={adr}. Flags: N Z.
        Mnemonic::LAX => {
            cpu.a = operand.value;
            cpu.x = operand.value;
            cpu.flags.set_zero_and_negative(cpu.a);
        }
        // {adr}:={adr}-1 A-{adr}. Flags: N Z C.
        Mnemonic::DCP => {
            let value = rmw_write(cpu, bus, operand, |_, v| (v.wrapping_sub(1), false));
            cpu.flags.carry = cpu.a >= value;
            cpu.flags.set_zero_and_negative(cpu.a.wrapping_sub(value));
        }
        // {adr}:={adr}+1 A:=A-{adr}. Flags: N V Z C.
        Mnemonic::ISC => {
            let value = rmw_write(cpu, bus, operand, |_, v| (v.wrapping_add(1), false));
            sbc_into_a(cpu, value);
        }
        // A:=A&#{imm}; C takes the result's sign bit. Flags: N Z C.
        Mnemonic::ANC => {
            cpu.a &= operand.value;
            cpu.flags.set_zero_and_negative(cpu.a);
            cpu.flags.carry = cpu.flags.negative;
        }
        // A:=(A&#{imm})/2. Flags: N Z C.
        Mnemonic::ALR => {
            cpu.a &= operand.value;
            cpu.flags.carry = cpu.a & 1 != 0;
            cpu.a >>= 1;
            cpu.flags.set_zero_and_negative(cpu.a);
        }
        // A:=(A&#{imm}) ror, with C/V taken from the pre-shift result's
        // bits 6/5 rather than a plain ROR's carry-out (the well-known
        // ARR quirk).
        Mnemonic::ARR => {
            let carry_in = cpu.flags.carry as u8;
            let anded = cpu.a & operand.value;
            cpu.a = (anded >> 1) | (carry_in << 7);
            cpu.flags.set_zero_and_negative(cpu.a);
            cpu.flags.carry = cpu.a & 0b0100_0000 != 0;
            cpu.flags.overflow = ((cpu.a >> 6) ^ (cpu.a >> 5)) & 1 != 0;
        }
        // X:=(A&X)-#{imm}, unsigned, no incoming borrow. Flags: N Z C.
        Mnemonic::AXS => {
            let and = cpu.a & cpu.x;
            cpu.flags.carry = and >= operand.value;
            cpu.x = and.wrapping_sub(operand.value);
            cpu.flags.set_zero_and_negative(cpu.x);
        }
        // A:=X&#{imm} (unstable; modeled as a clean AND since the real
        // magic-constant term varies by chip batch).
        Mnemonic::XAA => {
            cpu.a = cpu.x & operand.value;
            cpu.flags.set_zero_and_negative(cpu.a);
        }
        // {adr}:=A&X&(H+1). Flags: none.
        Mnemonic::AHX => {
            let addr = operand.address.expect("AHX always targets memory");
            let high_plus_one = (addr >> 8) as u8 + 1;
            bus.write_byte(addr, cpu.a & cpu.x & high_plus_one);
        }
        // {adr}:=Y&(H+1). Flags: none.
        Mnemonic::SHY => {
            let addr = operand.address.expect("SHY always targets memory");
            let high_plus_one = (addr >> 8) as u8 + 1;
            bus.write_byte(addr, cpu.y & high_plus_one);
        }
        // {adr}:=X&(H+1). Flags: none.
        Mnemonic::SHX => {
            let addr = operand.address.expect("SHX always targets memory");
            let high_plus_one = (addr >> 8) as u8 + 1;
            bus.write_byte(addr, cpu.x & high_plus_one);
        }
        // S:=A&X {adr}:=S&(H+1). Flags: none.
        Mnemonic::TAS => {
            let addr = operand.address.expect("TAS always targets memory");
            cpu.sp = cpu.a & cpu.x;
            let high_plus_one = (addr >> 8) as u8 + 1;
            bus.write_byte(addr, cpu.sp & high_plus_one);
        }
        // A,X,S:={adr}&S. Flags: N Z.
        Mnemonic::LAS => {
            let result = operand.value & cpu.sp;
            cpu.a = result;
            cpu.x = result;
            cpu.sp = result;
            cpu.flags.set_zero_and_negative(result);
        }
        _ => unreachable!(),
    }
    0
}

/// Writes the original value back before the computed one, then returns
/// the computed value, mirroring the double-write every RMW opcode (legal
/// or otherwise) performs on real hardware.
fn rmw_write(
    cpu: &mut Cpu,
    bus: &mut dyn Bus,
    operand: &Operand,
    f: impl FnOnce(&mut Cpu, u8) -> (u8, bool),
) -> u8 {
    let addr = operand.address.expect("illegal RMW opcodes always target memory");
    bus.write_byte(addr, operand.value);
    let (result, carry) = f(cpu, operand.value);
    cpu.flags.carry = carry;
    bus.write_byte(addr, result);
    result
}

fn adc_into_a(cpu: &mut Cpu, value: u8) {
    let carry_in = cpu.flags.carry as u16;
    let a = cpu.a;
    let sum = a as u16 + value as u16 + carry_in;
    let result = sum as u8;
    cpu.flags.overflow = (!(a ^ value) & (a ^ result) & 0b1000_0000) != 0;
    cpu.flags.carry = sum > 0xff;
    cpu.a = result;
    cpu.flags.set_zero_and_negative(cpu.a);
}

fn sbc_into_a(cpu: &mut Cpu, value: u8) {
    let borrow_in = !cpu.flags.carry as u16;
    let a = cpu.a;
    let inverted = !value;
    let sum = a as u16 + inverted as u16 + (1 - borrow_in);
    let result = sum as u8;
    cpu.flags.carry = sum > 0xff;
    cpu.flags.overflow = (!(a ^ inverted) & (a ^ result) & 0b1000_0000) != 0;
    cpu.a = result;
    cpu.flags.set_zero_and_negative(cpu.a);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bus::NesBus;
    use crate::cartridge::{Cartridge, Mirroring};
    use crate::mapper::CartridgeMapper;

    fn blank_bus() -> NesBus {
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

    fn cpu() -> Cpu {
        Cpu::new(std::rc::Rc::new(std::cell::RefCell::new(blank_bus())))
    }

    #[test]
    fn slo_shifts_memory_and_ors_into_a() {
        let mut cpu = cpu();
        let mut bus = blank_bus();
        bus.write_byte(0x0010, 0b1000_0001);
        cpu.a = 0b0000_0001;
        let operand = Operand {
            address: Some(0x0010),
            value: 0b1000_0001,
            page_crossed: false,
        };
        execute(&mut cpu, &mut bus, Mnemonic::SLO, &operand);
        assert!(cpu.flags().carry);
        assert_eq!(cpu.a(), 0b0000_0011);
        assert_eq!(bus.read_byte(0x0010, true), 0b0000_0010);
    }

    #[test]
    fn sax_writes_a_and_x_without_touching_flags() {
        let mut cpu = cpu();
        let mut bus = blank_bus();
        cpu.a = 0b1111_0000;
        cpu.x = 0b1010_1010;
        let before = cpu.flags();
        let operand = Operand {
            address: Some(0x0020),
            value: 0,
            page_crossed: false,
        };
        execute(&mut cpu, &mut bus, Mnemonic::SAX, &operand);
        assert_eq!(bus.read_byte(0x0020, true), 0b1010_0000);
        assert_eq!(cpu.flags(), before);
    }

    #[test]
    fn dcp_compares_after_decrementing_memory() {
        let mut cpu = cpu();
        let mut bus = blank_bus();
        bus.write_byte(0x0030, 0x10);
        cpu.a = 0x0f;
        let operand = Operand {
            address: Some(0x0030),
            value: 0x10,
            page_crossed: false,
        };
        execute(&mut cpu, &mut bus, Mnemonic::DCP, &operand);
        assert_eq!(bus.read_byte(0x0030, true), 0x0f);
        assert!(cpu.flags().zero);
        assert!(cpu.flags().carry);
    }

    #[test]
    fn lax_loads_both_a_and_x() {
        let mut cpu = cpu();
        let mut bus = blank_bus();
        let operand = Operand {
            address: None,
            value: 0x55,
            page_crossed: false,
        };
        execute(&mut cpu, &mut bus, Mnemonic::LAX, &operand);
        assert_eq!(cpu.a(), 0x55);
        assert_eq!(cpu.x(), 0x55);
    }
}
