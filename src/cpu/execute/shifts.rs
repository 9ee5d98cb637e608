//! Read-modify-write instructions: ASL/LSR/ROL/ROR, INC/DEC, INX/INY/DEX/DEY.
//! Memory-targeted RMW ops write back twice — once with the unmodified
//! value, once with the result — per §8 Testable Property 6. Grounded on
//! the teacher's `opcodes_logical.rs` shift/rotate functions, which operate
//! directly on `cpu.a` for the accumulator addressing mode and read/write
//! through the bus otherwise.

use super::Operand;
use crate::bus::Bus;
use crate::cpu::Cpu;
use crate::opcodes::Mnemonic;

/// Function: shift/rotate/increment/decrement a register or memory cell.
/// Flags: Z, N from the result; ASL/LSR/ROL/ROR also set C from the bit
/// shifted out.
pub fn execute(cpu: &mut Cpu, bus: &mut dyn Bus, mnemonic: Mnemonic, operand: &Operand) -> u8 {
    match mnemonic {
        Mnemonic::ASL => rmw(cpu, bus, operand, |cpu, v| {
            cpu.flags.carry = v & 0b1000_0000 != 0;
            v << 1
        }),
        Mnemonic::LSR => rmw(cpu, bus, operand, |cpu, v| {
            cpu.flags.carry = v & 1 != 0;
            v >> 1
        }),
        Mnemonic::ROL => rmw(cpu, bus, operand, |cpu, v| {
            let carry_in = cpu.flags.carry as u8;
            cpu.flags.carry = v & 0b1000_0000 != 0;
            (v << 1) | carry_in
        }),
        Mnemonic::ROR => rmw(cpu, bus, operand, |cpu, v| {
            let carry_in = cpu.flags.carry as u8;
            cpu.flags.carry = v & 1 != 0;
            (v >> 1) | (carry_in << 7)
        }),
        Mnemonic::INC => rmw(cpu, bus, operand, |_, v| v.wrapping_add(1)),
        Mnemonic::DEC => rmw(cpu, bus, operand, |_, v| v.wrapping_sub(1)),
        Mnemonic::INX => {
            cpu.x = cpu.x.wrapping_add(1);
            cpu.flags.set_zero_and_negative(cpu.x);
        }
        Mnemonic::INY => {
            cpu.y = cpu.y.wrapping_add(1);
            cpu.flags.set_zero_and_negative(cpu.y);
        }
        Mnemonic::DEX => {
            cpu.x = cpu.x.wrapping_sub(1);
            cpu.flags.set_zero_and_negative(cpu.x);
        }
        Mnemonic::DEY => {
            cpu.y = cpu.y.wrapping_sub(1);
            cpu.flags.set_zero_and_negative(cpu.y);
        }
        _ => unreachable!(),
    }
    0
}

/// Shared read-modify-write shape: accumulator mode operates on `cpu.a`
/// in place; memory mode writes the original value back before writing the
/// result, matching the two bus writes real RMW instructions perform.
fn rmw(cpu: &mut Cpu, bus: &mut dyn Bus, operand: &Operand, f: impl FnOnce(&mut Cpu, u8) -> u8) {
    match operand.address {
        None => {
            let result = f(cpu, cpu.a);
            cpu.a = result;
            cpu.flags.set_zero_and_negative(cpu.a);
        }
        Some(addr) => {
            bus.write_byte(addr, operand.value);
            let result = f(cpu, operand.value);
            bus.write_byte(addr, result);
            cpu.flags.set_zero_and_negative(result);
        }
    }
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
    fn asl_on_accumulator_sets_carry_from_the_lost_bit() {
        let mut cpu = cpu();
        let mut bus = blank_bus();
        cpu.a = 0b1000_0001;
        let operand = Operand {
            address: None,
            value: 0,
            page_crossed: false,
        };
        execute(&mut cpu, &mut bus, Mnemonic::ASL, &operand);
        assert_eq!(cpu.a(), 0b0000_0010);
        assert!(cpu.flags().carry);
    }

    #[test]
    fn memory_rmw_writes_twice_original_then_result() {
        let mut cpu = cpu();
        let mut bus = blank_bus();
        bus.write_byte(0x0010, 0b0000_0001);
        let operand = Operand {
            address: Some(0x0010),
            value: 0b0000_0001,
            page_crossed: false,
        };
        execute(&mut cpu, &mut bus, Mnemonic::ASL, &operand);
        assert_eq!(bus.read_byte(0x0010, true), 0b0000_0010);
    }

    #[test]
    fn ror_rotates_carry_into_bit_seven() {
        let mut cpu = cpu();
        let mut bus = blank_bus();
        cpu.flags.carry = true;
        let operand = Operand {
            address: None,
            value: 0,
            page_crossed: false,
        };
        execute(&mut cpu, &mut bus, Mnemonic::ROR, &operand);
        assert_eq!(cpu.a(), 0b1000_0000);
    }
}
