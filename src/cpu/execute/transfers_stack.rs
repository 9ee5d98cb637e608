//! Register transfers and the stack opcodes (TAX/TXA/.../PHA/PLA/PHP/PLP).
//! Grounded on the teacher's `opcodes_move.rs` transfer functions and
//! `push_stack_u8`/`pull_stack_u8`.

use super::Operand;
use crate::bus::Bus;
use crate::cpu::Cpu;
use crate::opcodes::Mnemonic;

/// Function: move a byte between two registers, or between a register and
/// the stack. Flags: Z, N from the moved value, except TXS (stack pointer
/// writes never touch flags).
pub fn execute(cpu: &mut Cpu, bus: &mut dyn Bus, mnemonic: Mnemonic, _operand: &Operand) -> u8 {
    match mnemonic {
        Mnemonic::TAX => {
            cpu.x = cpu.a;
            cpu.flags.set_zero_and_negative(cpu.x);
        }
        Mnemonic::TXA => {
            cpu.a = cpu.x;
            cpu.flags.set_zero_and_negative(cpu.a);
        }
        Mnemonic::TAY => {
            cpu.y = cpu.a;
            cpu.flags.set_zero_and_negative(cpu.y);
        }
        Mnemonic::TYA => {
            cpu.a = cpu.y;
            cpu.flags.set_zero_and_negative(cpu.a);
        }
        Mnemonic::TSX => {
            cpu.x = cpu.sp;
            cpu.flags.set_zero_and_negative(cpu.x);
        }
        Mnemonic::TXS => cpu.sp = cpu.x,
        Mnemonic::PHA => cpu.push_byte(bus, cpu.a),
        Mnemonic::PLA => {
            cpu.a = cpu.pop_byte(bus);
            cpu.flags.set_zero_and_negative(cpu.a);
        }
        // PHP pushes P with B forced to 1 (§3 invariant).
        Mnemonic::PHP => {
            let byte = cpu.flags.pack(true);
            cpu.push_byte(bus, byte);
        }
        // PLP discards the pulled B bit entirely (§3 invariant).
        Mnemonic::PLP => {
            let byte = cpu.pop_byte(bus);
            cpu.flags = crate::flags::Flags::unpack(byte);
        }
        _ => unreachable!(),
    }
    0
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

    fn new_cpu_and_bus() -> (Cpu, NesBus) {
        let cpu = Cpu::new(std::rc::Rc::new(std::cell::RefCell::new(blank_bus())));
        (cpu, blank_bus())
    }

    #[test]
    fn pha_then_pla_round_trips_through_the_stack() {
        let (mut cpu, mut bus) = new_cpu_and_bus();
        cpu.a = 0x77;
        let sp0 = cpu.sp();
        let operand = Operand {
            address: None,
            value: 0,
            page_crossed: false,
        };
        execute(&mut cpu, &mut bus, Mnemonic::PHA, &operand);
        cpu.a = 0;
        execute(&mut cpu, &mut bus, Mnemonic::PLA, &operand);
        assert_eq!(cpu.a(), 0x77);
        assert_eq!(cpu.sp(), sp0);
    }

    #[test]
    fn plp_discards_the_pulled_break_bit() {
        let (mut cpu, mut bus) = new_cpu_and_bus();
        let operand = Operand {
            address: None,
            value: 0,
            page_crossed: false,
        };
        cpu.push_byte(&mut bus, 0b0011_0001); // B=1, carry=1
        execute(&mut cpu, &mut bus, Mnemonic::PLP, &operand);
        assert!(cpu.flags().carry);
    }
}
