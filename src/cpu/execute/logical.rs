//! Bitwise ops and comparisons: AND/ORA/EOR/BIT/CMP/CPX/CPY. Grounded on
//! the teacher's `opcodes_logical.rs`.

use super::Operand;
use crate::bus::Bus;
use crate::cpu::Cpu;
use crate::opcodes::Mnemonic;

/// Function: AND/ORA/EOR combine A with memory bitwise; BIT tests without
/// storing; CMP/CPX/CPY subtract without storing.
/// Flags: AND/ORA/EOR set Z, N from the result. BIT sets Z from `A & M`,
/// and copies bits 6 and 7 of M directly into V and N. CMP/CPX/CPY set
/// C = register >= M, Z = register == M, N from bit 7 of (register - M).
pub fn execute(cpu: &mut Cpu, _bus: &mut dyn Bus, mnemonic: Mnemonic, operand: &Operand) -> u8 {
    match mnemonic {
        Mnemonic::AND => {
            cpu.a &= operand.value;
            cpu.flags.set_zero_and_negative(cpu.a);
        }
        Mnemonic::ORA => {
            cpu.a |= operand.value;
            cpu.flags.set_zero_and_negative(cpu.a);
        }
        Mnemonic::EOR => {
            cpu.a ^= operand.value;
            cpu.flags.set_zero_and_negative(cpu.a);
        }
        Mnemonic::BIT => {
            cpu.flags.zero = (cpu.a & operand.value) == 0;
            cpu.flags.overflow = operand.value & 0b0100_0000 != 0;
            cpu.flags.negative = operand.value & 0b1000_0000 != 0;
        }
        Mnemonic::CMP => compare(cpu, cpu.a, operand.value),
        Mnemonic::CPX => compare(cpu, cpu.x, operand.value),
        Mnemonic::CPY => compare(cpu, cpu.y, operand.value),
        _ => unreachable!(),
    }
    0
}

fn compare(cpu: &mut Cpu, register: u8, value: u8) {
    cpu.flags.carry = register >= value;
    let result = register.wrapping_sub(value);
    cpu.flags.set_zero_and_negative(result);
}
